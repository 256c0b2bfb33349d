use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::INPUT_POLL_INTERVAL;
use grid_snake::error::Result;
use grid_snake::game::{GameState, Snapshot};
use grid_snake::input::{GameInput, poll_input};
use grid_snake::logging;
use grid_snake::renderer;
use grid_snake::session::Session;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::trace::SnapshotTrace;
use log::info;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the food sequence for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here instead of the default data directory.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Append every published snapshot to this file as JSON lines.
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let trace = cli
        .trace
        .as_deref()
        .map(SnapshotTrace::<BufWriter<File>>::create)
        .transpose()?;

    let state = match cli.seed {
        Some(seed) => {
            info!("starting with seed {seed}");
            GameState::new_with_seed(seed)
        }
        None => GameState::new(),
    };

    install_panic_hook();
    let mut terminal = TerminalSession::enter()?;
    run(&mut terminal, Session::new(state), trace)
}

fn run(
    terminal: &mut TerminalSession,
    mut session: Session,
    mut trace: Option<SnapshotTrace<BufWriter<File>>>,
) -> Result<()> {
    let mut snapshot = session.state().snapshot();
    publish(&mut trace, &snapshot)?;

    loop {
        terminal.draw(|frame| renderer::render(frame, &snapshot))?;

        if let Some(input) = poll_input(INPUT_POLL_INTERVAL)? {
            if input == GameInput::Quit {
                break;
            }

            if let Some(next) = session.handle_input(input, Instant::now()) {
                snapshot = next;
                publish(&mut trace, &snapshot)?;
            }
        }

        if let Some(next) = session.poll(Instant::now()) {
            snapshot = next;
            publish(&mut trace, &snapshot)?;
        }
    }

    if let Some(trace) = trace.as_mut() {
        trace.flush()?;
        info!("wrote {} snapshots to trace", trace.written());
    }

    info!("quit at score {}", snapshot.score);
    Ok(())
}

fn publish(
    trace: &mut Option<SnapshotTrace<BufWriter<File>>>,
    snapshot: &Snapshot,
) -> Result<()> {
    match trace {
        Some(trace) => trace.record(snapshot),
        None => Ok(()),
    }
}
