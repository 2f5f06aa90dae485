//! screencalc CLI - infer display metrics from free-form text.
//!
//! Each argument is run through the inference engine and the resulting
//! descriptor is printed. With no arguments, an interactive prompt reads
//! one line at a time from stdin until it is closed.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::debug;

use screencalc_core::DisplayDescriptor;
use screencalc_guess::guess;

#[derive(Parser)]
#[command(name = "screencalc")]
#[command(about = "Infer display resolution, diagonal, density and size from text")]
#[command(version)]
struct Cli {
    /// Free-form display descriptions, e.g. '24" 1920x1080' or '40 inch 4k'
    inputs: Vec<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Log the matched extraction rules to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn render(descriptor: &DisplayDescriptor, format: &str) -> String {
    match format {
        "json" => serde_json::to_string(descriptor).expect("descriptor serializes"),
        _ => descriptor.to_string(),
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.inputs.is_empty() {
        debug!("no arguments, entering interactive mode");
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        loop {
            write!(stdout, "? ")?;
            stdout.flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            println!("{}", render(&guess(line.trim_end()), &cli.format));
        }
    } else {
        for input in &cli.inputs {
            println!("{}", render(&guess(input), &cli.format));
        }
    }

    Ok(())
}
