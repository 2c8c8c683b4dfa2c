//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! When the `--agent` CLI flag is passed, the app skips the window and UI
//! plugins and enters this loop instead of the normal Bevy `app.run()`.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`simulation::agent_protocol`] for the full schema.
//!
//! Every command advances at least one frame of [`AGENT_FRAME`] simulated
//! time, so a scan needs roughly fifty `tick`s of analysis regardless of how
//! fast the driver sends lines.
//!
//! [`AGENT_FRAME`]: simulation::agent_protocol::AGENT_FRAME

#[cfg(not(target_arch = "wasm32"))]
pub fn run_agent_mode() {
    use std::io::{BufRead, Write};

    use bevy::prelude::*;
    use bevy::state::app::StatesPlugin;
    use bevy::time::TimeUpdateStrategy;

    use simulation::agent_protocol::{make_response, ResponsePayload, AGENT_FRAME, PROTOCOL_VERSION};
    use simulation::sim_rng::{SimRng, DEFAULT_SEED};

    let seed = std::env::var("ECOSCAN_SEED")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED);

    // -- Build a minimal Bevy App with the simulation only, no window/UI ----
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(AGENT_FRAME));
    app.insert_resource(SimRng::from_seed_u64(seed));
    app.add_plugins(simulation::SimulationPlugin);

    // Initial update so Startup systems execute and resources initialize.
    app.update();

    // -- I/O setup -----------------------------------------------------------
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    // Send the "ready" message so the driver knows we are live.
    let _ = writeln!(stdout, "{}", to_json_line(&make_response(ResponsePayload::Ready)));
    let _ = stdout.flush();

    // Log to stderr so it does not interfere with the JSON protocol on stdout.
    eprintln!(
        "ecoscan agent mode v{} ready (seed {}), waiting for commands on stdin",
        PROTOCOL_VERSION, seed
    );

    // -- Main command loop ---------------------------------------------------
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str(&line) {
            Ok(cmd) => process_command(cmd, &mut app),
            Err(e) => make_response(ResponsePayload::Error {
                message: format!("Parse error: {e}"),
            }),
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        let _ = writeln!(stdout, "{}", to_json_line(&response));
        let _ = stdout.flush();

        if is_goodbye {
            break;
        }
    }

    eprintln!("ecoscan agent mode shutting down");
}

/// Serialize a response, falling back to a hand-built error line so the
/// driver always receives one line per command.
#[cfg(not(target_arch = "wasm32"))]
fn to_json_line(response: &simulation::agent_protocol::AgentResponse) -> String {
    match serde_json::to_string(response) {
        Ok(json) => json,
        Err(e) => format!(
            "{{\"protocol_version\":{},\"type\":\"error\",\"message\":\"serialize failed: {}\"}}",
            simulation::agent_protocol::PROTOCOL_VERSION,
            e.to_string().replace('"', "'")
        ),
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

#[cfg(not(target_arch = "wasm32"))]
fn process_command(
    cmd: simulation::agent_protocol::AgentCommand,
    app: &mut bevy::app::App,
) -> simulation::agent_protocol::AgentResponse {
    use simulation::agent_protocol::{
        make_response, AgentCommand, ResponsePayload, MAX_TICKS_PER_COMMAND,
    };
    use simulation::connectivity::SetOnline;
    use simulation::epr_log::EprLog;
    use simulation::localization::ToggleLanguage;
    use simulation::scan_flow::ScanActionLog;

    if let Some(action) = cmd.scan_action() {
        app.world_mut().resource_mut::<ScanActionLog>().last = None;
        app.world_mut().send_event(action);

        // Run one frame so the input systems handle the action.
        app.update();

        let outcome = app
            .world()
            .resource::<ScanActionLog>()
            .last
            .as_ref()
            .map(|(_, outcome)| outcome.clone());
        return match outcome {
            Some(Ok(())) => status(app),
            Some(Err(err)) => make_response(ResponsePayload::Error {
                message: err.to_string(),
            }),
            None => make_response(ResponsePayload::Error {
                message: "scan action was not handled".to_string(),
            }),
        };
    }

    match cmd {
        AgentCommand::Tick { n } => {
            // Cap to prevent accidental runaway loops.
            for _ in 0..n.min(MAX_TICKS_PER_COMMAND) {
                app.update();
            }
            status(app)
        }

        AgentCommand::ToggleLang => {
            app.world_mut().send_event(ToggleLanguage);
            app.update();
            status(app)
        }

        AgentCommand::SetOnline { online } => {
            app.world_mut().send_event(SetOnline(online));
            app.update();
            status(app)
        }

        AgentCommand::Status => status(app),

        AgentCommand::EprLog => make_response(ResponsePayload::EprLog {
            entries: app.world().resource::<EprLog>().entries.clone(),
        }),

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),

        // Scan actions were dispatched above.
        AgentCommand::Capture
        | AgentCommand::Verify
        | AgentCommand::Prove
        | AgentCommand::Reset
        | AgentCommand::ConfirmMaterial { .. }
        | AgentCommand::ConfirmBrand
        | AgentCommand::ChooseBrand { .. }
        | AgentCommand::OtherBrand => status(app),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn status(app: &bevy::app::App) -> simulation::agent_protocol::AgentResponse {
    use simulation::agent_protocol::{make_response, ResponsePayload, SessionSnapshot};

    make_response(ResponsePayload::Status {
        snapshot: SessionSnapshot::from_world(app.world()),
    })
}
