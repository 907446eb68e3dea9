//! Plugin lifecycle bridge.
//!
//! Turns host activations into panel actions. On attach the bridge takes the
//! host's activation stream (if the host can deliver one) and fetches the
//! action that may have fired before the panel was ready, so it can be
//! replayed through the same path.

use std::time::Duration;

use log::{error, info, warn};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::host::{Host, HostLink, PluginAction};

/// Delay between receiving an activation and acting on it, so the panel has
/// finished rendering.
pub const ACTIVATION_DELAY: Duration = Duration::from_millis(100);

/// Feature codes understood by the panel.
pub const CODE_CONVERT: &str = "convert";
pub const CODE_CURRENT_TIME: &str = "currentTime";

/// What an activation asks the panel to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Convert a pasted 10 to 13 digit timestamp
    Convert(String),
    /// Convert the current time
    CurrentTime,
    /// Unknown code or unusable payload
    Ignore,
}

impl From<&PluginAction> for Activation {
    fn from(action: &PluginAction) -> Self {
        match action.code.as_str() {
            CODE_CONVERT => match action.payload.as_deref() {
                Some(payload) if is_timestamp_payload(payload) => {
                    Activation::Convert(payload.to_string())
                }
                _ => Activation::Ignore,
            },
            CODE_CURRENT_TIME => Activation::CurrentTime,
            _ => Activation::Ignore,
        }
    }
}

/// Whether a payload is a plain 10 to 13 digit number.
pub fn is_timestamp_payload(payload: &str) -> bool {
    (10..=13).contains(&payload.len()) && payload.bytes().all(|b| b.is_ascii_digit())
}

/// Result of attaching to the host.
pub struct Attachment {
    /// What the panel keeps for later host calls
    pub link: HostLink,
    /// Activation stream, when the host offers `onPluginEnter`
    pub enter_events: Option<UnboundedReceiver<PluginAction>>,
    /// Pending activation to replay once the panel is up
    pub replay: Option<PluginAction>,
}

/// Adapter between the host runtime and the panel.
pub struct LifecycleBridge;

impl LifecycleBridge {
    /// Attaches to the host, degrading to manual-only operation for every
    /// missing piece.
    pub fn attach(host: Option<Host>) -> Attachment {
        let Some(mut host) = host else {
            error!("Host platform bridge not found; the panel works in manual mode only");
            return Attachment {
                link: HostLink::Absent,
                enter_events: None,
                replay: None,
            };
        };

        let methods = host.method_names();
        info!("Available host methods: {}", methods.join(", "));

        let enter_events = host.plugin_enter.take();
        if enter_events.is_some() {
            info!("Plugin-enter listener registered");
        } else {
            error!("Cannot register plugin-enter listener: onPluginEnter is not available");
        }

        let replay = match host.last_action.as_mut() {
            Some(source) => {
                let action = source.last_plugin_enter_action();
                if let Some(action) = &action {
                    info!("Replaying last plugin-enter action: {action:?}");
                }
                action
            }
            None => {
                warn!("getLastPluginEnterAction is not available");
                None
            }
        };

        Attachment {
            link: HostLink::Attached {
                methods,
                hotkey_settings: host.hotkey_settings,
            },
            enter_events,
            replay,
        }
    }
}
