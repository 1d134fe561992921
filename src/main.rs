//! Scripted host shim for the coordinator core.
//!
//! This binary is the thin integration layer a real platform host would
//! replace: it loads configuration, installs the tracing subscriber, boots the
//! coordinator, and replays host events supplied on the command line in order,
//! exactly as a UI process would deliver them.
//!
//! # Usage
//!
//! ```text
//! flowkit [--config <path>] [--dump-state] [EVENT...]
//! ```
//!
//! # Event tokens
//!
//! - `login` — the login screen reported success
//! - `logout` — the user logged out
//! - `ready` — the freshly installed subtree settled
//! - `settle:<stack>` — a transition finished (`login`, `home`, `items`,
//!   `settings`)
//! - anything containing `://` — a deep-link URI for the URL-open handler
//!
//! # Example
//!
//! ```text
//! flowkit --dump-state flowdemo://item/swiftui login ready settle:home
//! ```
//!
//! replays the "deep link during login" scenario and prints the resulting
//! coordinator tree as JSON.

use std::env;
use std::process::ExitCode;

use flowkit::app::{handle_event, HostEvent, StackId};
use flowkit::domain::{FlowkitError, Result};
use flowkit::observability::init_tracing;
use flowkit::{initialize, Config};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("flowkit: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut config_path = None;
    let mut dump_state = false;
    let mut tokens = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(iter.next().ok_or_else(|| {
                    FlowkitError::Config("--config requires a path".to_string())
                })?);
            }
            "--dump-state" => dump_state = true,
            _ => tokens.push(arg),
        }
    }

    let config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    init_tracing(&config);
    tracing::debug!(events = tokens.len(), "host shim starting");

    let mut coordinator = initialize(&config);

    for token in &tokens {
        let event = parse_event(token)?;
        handle_event(&mut coordinator, &event)?;
    }

    if dump_state {
        let snapshot = coordinator.snapshot();
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| FlowkitError::HostEvent(e.to_string()))?;
        println!("{json}");
    }

    Ok(())
}

/// Maps a command-line token to a host event.
fn parse_event(token: &str) -> Result<HostEvent> {
    if token.contains("://") {
        return Ok(HostEvent::DeepLink(token.to_string()));
    }

    if let Some(stack) = token.strip_prefix("settle:") {
        let stack = match stack.to_ascii_lowercase().as_str() {
            "login" => StackId::Login,
            "home" => StackId::Home,
            "items" => StackId::Items,
            "settings" => StackId::Settings,
            other => {
                return Err(FlowkitError::HostEvent(format!(
                    "unknown stack in settle token: {other}"
                )))
            }
        };
        return Ok(HostEvent::TransitionCompleted(stack));
    }

    match token.to_ascii_lowercase().as_str() {
        "login" => Ok(HostEvent::LoginSucceeded),
        "logout" => Ok(HostEvent::LoggedOut),
        "ready" => Ok(HostEvent::SubtreeReady),
        other => Err(FlowkitError::HostEvent(format!(
            "unknown event token: {other}"
        ))),
    }
}
