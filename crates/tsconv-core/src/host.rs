//! Host platform bridge.
//!
//! The launcher hosting the panel may offer three entry points:
//!
//! | Host method                | Capability                          |
//! |----------------------------|-------------------------------------|
//! | `onPluginEnter`            | [`Host::plugin_enter`] event stream |
//! | `getLastPluginEnterAction` | [`LastPluginEnterAction`]           |
//! | `openHotkeySettings`       | [`HotkeySettings`]                  |
//!
//! Each one is optional, and so is the host itself. Callers branch on the
//! `Option`s instead of probing for methods at call time.

use log::{error, info};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::{ConvertError, Result};

/// Host method names, used for diagnostics.
pub const ON_PLUGIN_ENTER: &str = "onPluginEnter";
pub const GET_LAST_PLUGIN_ENTER_ACTION: &str = "getLastPluginEnterAction";
pub const OPEN_HOTKEY_SETTINGS: &str = "openHotkeySettings";

/// Section highlighted when the hotkey settings page opens.
pub const HOTKEY_SECTION: &str = "convert";

/// An activation request sent by the host when the panel is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginAction {
    /// Feature code, e.g. `convert` or `currentTime`
    pub code: String,
    /// Text that came with the activation, e.g. a pasted timestamp
    #[serde(default)]
    pub payload: Option<String>,
}

impl PluginAction {
    pub fn new(code: impl Into<String>, payload: Option<String>) -> Self {
        Self {
            code: code.into(),
            payload,
        }
    }

    /// Parses the JSON form `{"code": "...", "payload": "..."}`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// `getLastPluginEnterAction`: the activation that fired before the panel
/// attached, if any.
pub trait LastPluginEnterAction {
    fn last_plugin_enter_action(&mut self) -> Option<PluginAction>;
}

impl<F> LastPluginEnterAction for F
where
    F: FnMut() -> Option<PluginAction>,
{
    fn last_plugin_enter_action(&mut self) -> Option<PluginAction> {
        self()
    }
}

/// `openHotkeySettings`: opens the host's shortcut page.
pub trait HotkeySettings {
    fn open_hotkey_settings(&self, section: &str) -> Result<()>;
}

/// Capabilities offered by the host. `None` marks a missing method.
#[derive(Default)]
pub struct Host {
    pub plugin_enter: Option<UnboundedReceiver<PluginAction>>,
    pub last_action: Option<Box<dyn LastPluginEnterAction>>,
    pub hotkey_settings: Option<Box<dyn HotkeySettings>>,
}

impl Host {
    /// Names of the methods this host offers.
    pub fn method_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.plugin_enter.is_some() {
            names.push(ON_PLUGIN_ENTER);
        }
        if self.last_action.is_some() {
            names.push(GET_LAST_PLUGIN_ENTER_ACTION);
        }
        if self.hotkey_settings.is_some() {
            names.push(OPEN_HOTKEY_SETTINGS);
        }
        names
    }
}

/// What the panel keeps of the host once the lifecycle bridge has taken the
/// activation sources.
#[derive(Default)]
pub enum HostLink {
    /// No host bridge at all
    #[default]
    Absent,
    /// A host is attached; `methods` lists everything it offered
    Attached {
        methods: Vec<&'static str>,
        hotkey_settings: Option<Box<dyn HotkeySettings>>,
    },
}

impl HostLink {
    pub fn is_attached(&self) -> bool {
        matches!(self, HostLink::Attached { .. })
    }

    /// Calls `openHotkeySettings` on the host.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::HostBridgeUnavailable` without a host,
    /// `ConvertError::HostCapabilityMissing` when the host lacks the method,
    /// and whatever the host reports when the call itself fails.
    pub fn open_hotkey_settings(&self, section: &str) -> Result<()> {
        match self {
            HostLink::Absent => {
                error!("Host platform bridge not found, cannot open hotkey settings");
                Err(ConvertError::HostBridgeUnavailable)
            }
            HostLink::Attached {
                methods,
                hotkey_settings: None,
            } => {
                info!("Available host methods: {}", methods.join(", "));
                Err(ConvertError::HostCapabilityMissing {
                    capability: OPEN_HOTKEY_SETTINGS,
                })
            }
            HostLink::Attached {
                methods,
                hotkey_settings: Some(settings),
            } => settings.open_hotkey_settings(section).inspect_err(|e| {
                error!("Opening hotkey settings failed: {e}");
                info!("Available host methods: {}", methods.join(", "));
            }),
        }
    }
}
