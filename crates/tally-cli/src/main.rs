use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tally_cli::session::{Control, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive keypad calculator.
#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Interactive keypad calculator")]
struct Args {
    /// Start in the scientific keypad view
    #[arg(long)]
    scientific: bool,

    /// Tracing filter, e.g. "tally_engine=debug"
    #[arg(long, default_value = "warn")]
    log_filter: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_filter))
        .with_target(false)
        .init();

    info!(scientific = args.scientific, "Starting tally session");

    let mut session = Session::new(args.scientific);
    println!("tally - type keys separated by spaces (e.g. `1 2 + 3 =`), 'help' for the key list");
    render(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if session.handle_line(&line) == Control::Quit {
            break;
        }
        render(&session);
    }

    Ok(())
}

fn render(session: &Session) {
    let (top, current) = session.render();
    println!("  {top}");
    println!("  {current}");
}
