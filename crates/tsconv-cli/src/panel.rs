//! Interactive panel on the terminal.
//!
//! Each line read from stdin is turned into panel events; the panel is
//! printed again after every command. Host activations and toast timers are
//! driven from the same loop.

use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::UnboundedReceiver,
};
use tsconv_core::{
    display::{PanelView, TimezoneList},
    Attachment, LifecycleBridge, PanelController, PanelOptions, PluginAction, Provider,
    TimestampUnit, UiEvent,
};

use crate::{
    cli::PanelArgs,
    host::{parse_host_line, terminal_host},
    renderer::TerminalRenderer,
};

const HELP: &str = "\
## Commands

- `<number>` convert a timestamp
- `ts <text>` edit the timestamp field
- `convert` convert the timestamp field
- `now` use the current time
- `unit s|ms` switch the unit
- `tz <zone>` switch the time zone
- `dt <text>` edit the date-time field
- `reverse` convert the date-time field
- `rev <text>` edit and convert a date-time
- `clear` clear everything
- `hotkeys` open hotkey settings
- `zones` list the time zones
- `host <code> [payload]` send a host activation
- `show` print the panel
- `quit` leave
";

/// One line of panel input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PanelCommand {
    Events(Vec<UiEvent>),
    Host(PluginAction),
    Zones,
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<PanelCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let event = |event: UiEvent| Ok(PanelCommand::Events(vec![event]));

    match word {
        "" | "show" => Ok(PanelCommand::Show),
        "help" | "?" => Ok(PanelCommand::Help),
        "quit" | "exit" | "q" => Ok(PanelCommand::Quit),
        "zones" => Ok(PanelCommand::Zones),
        "convert" | "c" => event(UiEvent::ConvertClicked),
        "now" => event(UiEvent::CurrentTimeClicked),
        "clear" => event(UiEvent::ClearClicked),
        "reverse" => event(UiEvent::ReverseConvertClicked),
        "hotkeys" => event(UiEvent::HotkeySettingsClicked),
        "ts" => event(UiEvent::TimestampEdited(rest.to_string())),
        "dt" => event(UiEvent::DatetimeEdited(rest.to_string())),
        "tz" if !rest.is_empty() => event(UiEvent::TimezoneChanged(rest.to_string())),
        "unit" => rest
            .parse::<TimestampUnit>()
            .map(|unit| PanelCommand::Events(vec![UiEvent::UnitChanged(unit)])),
        "rev" if !rest.is_empty() => Ok(PanelCommand::Events(vec![
            UiEvent::DatetimeEdited(rest.to_string()),
            UiEvent::DatetimeEnter,
        ])),
        "host" => parse_host_line(rest)
            .map(PanelCommand::Host)
            .ok_or_else(|| "Usage: host <code> [payload]".to_string()),
        _ if word.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
            Ok(PanelCommand::Events(vec![
                UiEvent::TimestampEdited(line.to_string()),
                UiEvent::TimestampEnter,
            ]))
        }
        _ => Err(format!("Unknown command '{word}', type 'help'")),
    }
}

async fn next_activation(
    events: &mut Option<UnboundedReceiver<PluginAction>>,
) -> Option<PluginAction> {
    match events {
        Some(receiver) => receiver.recv().await,
        None => std::future::pending().await,
    }
}

/// Runs the panel until `quit`, end of input or Ctrl-C.
///
/// After `quit` or end of input, activations already sent by the host still
/// run once their delay has passed.
pub async fn run_panel(
    provider: Provider,
    renderer: TerminalRenderer,
    options: PanelOptions,
    args: PanelArgs,
) -> Result<()> {
    let locale = provider.locale();

    let (host, sender) = if args.no_host {
        (None, None)
    } else {
        let last_action = args
            .action
            .as_deref()
            .map(PluginAction::from_json)
            .transpose()
            .context("Invalid --action JSON")?;
        let (host, sender) = terminal_host(last_action, args.hotkey_command);
        (Some(host), Some(sender))
    };

    let Attachment {
        link,
        mut enter_events,
        replay,
    } = LifecycleBridge::attach(host);

    let mut panel = PanelController::new(provider, link, options, Instant::now());
    if let Some(action) = replay {
        panel.receive_activation(action, Instant::now());
    }

    let render = |panel: &PanelController| -> Result<()> {
        renderer.render(&PanelView::new(panel.state(), locale).to_string())?;
        println!();
        Ok(())
    };

    render(&panel)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    loop {
        if !input_open && !panel.has_pending_activation() {
            break;
        }

        let deadline = panel.next_deadline();

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let line = line.context("Failed to read from stdin")?;
                match line.as_deref().map(parse_command).unwrap_or(Ok(PanelCommand::Quit)) {
                    Ok(PanelCommand::Quit) => {
                        input_open = false;
                        if let Some(events) = enter_events.as_mut() {
                            while let Ok(action) = events.try_recv() {
                                panel.receive_activation(action, Instant::now());
                            }
                        }
                    }
                    Ok(PanelCommand::Events(events)) => {
                        for event in events {
                            panel.handle(event, Instant::now());
                        }
                        render(&panel)?;
                    }
                    Ok(PanelCommand::Host(action)) => match &sender {
                        Some(sender) => sender
                            .send(action)
                            .context("Host activation channel closed")?,
                        None => println!("No host bridge attached"),
                    },
                    Ok(PanelCommand::Zones) => {
                        let options = panel.state().zones.options().cloned().collect();
                        renderer.render(&TimezoneList(options).to_string())?;
                    }
                    Ok(PanelCommand::Show) => render(&panel)?,
                    Ok(PanelCommand::Help) => renderer.render(HELP)?,
                    Err(message) => println!("{message}"),
                }
            }
            Some(action) = next_activation(&mut enter_events) => {
                info!("Activation received: {}", action.code);
                panel.receive_activation(action, Instant::now());
            }
            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(
                deadline.unwrap_or_else(Instant::now),
            )), if deadline.is_some() => {
                let activation_pending = panel.has_pending_activation();
                panel.fire_due(Instant::now());
                if activation_pending && !panel.has_pending_activation() {
                    render(&panel)?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted, closing the panel");
                break;
            }
        }
    }

    Ok(())
}
