//! Command-line front-end for the VSIX fetcher
//!
//! The core library reports through injected callbacks and asks a pluggable
//! picker for the destination; this binary wires those to stdout/stderr and
//! to the --output/--output-dir flags. A GUI embedding would plug into the
//! same seams.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use fetcher::{
    DestinationPicker, DirectoryDestination, FetchConfig, FetchOutcome, FetchReporter,
    FixedDestination, IntoCallbacks, StatusEvent, StatusKind, VsixFetcher,
};

/// Download a VSIX package from the Visual Studio Marketplace
#[derive(Parser, Debug)]
#[command(name = "vsix-fetch", version, about)]
struct Cli {
    /// Marketplace page URL, e.g.
    /// https://marketplace.visualstudio.com/items?itemName=ms-python.python
    url: String,

    /// Version to download: 'latest' or x.y.z
    #[arg(default_value = "latest")]
    version: String,

    /// Save to this exact path instead of the default filename
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Directory to save into, keeping the default filename
    #[arg(short = 'd', long, default_value = ".")]
    output_dir: PathBuf,

    /// Only print the terminal status
    #[arg(short, long)]
    quiet: bool,
}

/// Renders statuses as lines and progress as an in-place percent counter
struct CliReporter {
    quiet: bool,
}

impl FetchReporter for CliReporter {
    fn on_status(&self, event: &StatusEvent) {
        match event.kind {
            StatusKind::Error => eprintln!("error: {}", event.text),
            StatusKind::Cancelled | StatusKind::Success => println!("{}", event.text),
            StatusKind::Starting | StatusKind::Info => {
                if !self.quiet {
                    println!("{}", event.text);
                }
            }
        }
    }

    fn on_progress(&self, percent: u8) {
        if self.quiet {
            return;
        }
        print!("\r{percent:>3}%");
        if percent == 100 {
            println!();
        }
        let _ = std::io::stdout().flush();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let picker: Box<dyn DestinationPicker> = match cli.output {
        Some(path) => Box::new(FixedDestination::new(path)),
        None => Box::new(DirectoryDestination::new(cli.output_dir)),
    };

    let (on_status, on_progress) = CliReporter { quiet: cli.quiet }.into_callbacks();

    let outcome = VsixFetcher::new(FetchConfig::default())
        .fetch_package(
            &cli.url,
            &cli.version,
            picker.as_ref(),
            on_status,
            Some(on_progress),
        )
        .await;

    match outcome {
        FetchOutcome::Completed { .. } => ExitCode::SUCCESS,
        FetchOutcome::Cancelled | FetchOutcome::Failed => ExitCode::FAILURE,
    }
}
