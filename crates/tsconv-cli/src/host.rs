//! Terminal stand-in for the launcher that hosts the panel.
//!
//! `host CODE [PAYLOAD]` lines typed into the panel are delivered through the
//! `onPluginEnter` channel, `--action` is what `getLastPluginEnterAction`
//! returns once, and `--hotkey-command` backs `openHotkeySettings`.

use std::process::Command;

use log::debug;
use tokio::sync::mpsc::{self, UnboundedSender};
use tsconv_core::{
    host::OPEN_HOTKEY_SETTINGS, ConvertError, Host, HotkeySettings, PluginAction,
};

/// Opens hotkey settings by running an external command with the section
/// name as its only argument.
pub struct ProcessHotkeySettings {
    command: String,
}

impl ProcessHotkeySettings {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl HotkeySettings for ProcessHotkeySettings {
    fn open_hotkey_settings(&self, section: &str) -> tsconv_core::Result<()> {
        debug!("Running hotkey command: {} {section}", self.command);
        let status = Command::new(&self.command)
            .arg(section)
            .status()
            .map_err(|e| ConvertError::HostCall {
                capability: OPEN_HOTKEY_SETTINGS,
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ConvertError::HostCall {
                capability: OPEN_HOTKEY_SETTINGS,
                reason: format!("'{}' exited with {status}", self.command),
            })
        }
    }
}

/// Builds the terminal host. The returned sender feeds `onPluginEnter`.
pub fn terminal_host(
    last_action: Option<PluginAction>,
    hotkey_command: Option<String>,
) -> (Host, UnboundedSender<PluginAction>) {
    let (sender, receiver) = mpsc::unbounded_channel();

    let mut pending = last_action;
    let host = Host {
        plugin_enter: Some(receiver),
        last_action: Some(Box::new(move || pending.take())),
        hotkey_settings: hotkey_command.map(|command| {
            Box::new(ProcessHotkeySettings::new(command)) as Box<dyn HotkeySettings>
        }),
    };

    (host, sender)
}

/// Parses the argument of a `host` line: a code and an optional payload.
pub fn parse_host_line(rest: &str) -> Option<PluginAction> {
    let mut parts = rest.trim().splitn(2, char::is_whitespace);
    let code = parts.next().filter(|code| !code.is_empty())?;
    let payload = parts
        .next()
        .map(str::trim)
        .filter(|payload| !payload.is_empty())
        .map(str::to_string);
    Some(PluginAction::new(code, payload))
}

#[cfg(test)]
mod tests {
    use tsconv_core::host::{GET_LAST_PLUGIN_ENTER_ACTION, ON_PLUGIN_ENTER};

    use super::*;

    #[test]
    fn test_terminal_host_methods() {
        let (host, _sender) = terminal_host(None, None);
        assert_eq!(
            host.method_names(),
            vec![ON_PLUGIN_ENTER, GET_LAST_PLUGIN_ENTER_ACTION]
        );

        let (host, _sender) = terminal_host(None, Some("true".to_string()));
        assert!(host.method_names().contains(&OPEN_HOTKEY_SETTINGS));
    }

    #[test]
    fn test_last_action_is_returned_once() {
        let action = PluginAction::new("convert", Some("1700000000".to_string()));
        let (host, _sender) = terminal_host(Some(action.clone()), None);
        let mut last = host.last_action.unwrap();
        assert_eq!(last.last_plugin_enter_action(), Some(action));
        assert_eq!(last.last_plugin_enter_action(), None);
    }

    #[test]
    fn test_parse_host_line() {
        assert_eq!(
            parse_host_line("convert 1700000000"),
            Some(PluginAction::new("convert", Some("1700000000".to_string())))
        );
        assert_eq!(
            parse_host_line(" currentTime "),
            Some(PluginAction::new("currentTime", None))
        );
        assert_eq!(parse_host_line("   "), None);
    }

    #[test]
    fn test_missing_hotkey_command_is_host_call_error() {
        let settings = ProcessHotkeySettings::new("tsconv-no-such-command");
        let err = settings.open_hotkey_settings("convert").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::HostCall {
                capability: OPEN_HOTKEY_SETTINGS,
                ..
            }
        ));
    }
}
