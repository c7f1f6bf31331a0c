//! senryu command-line entry point

use clap::Parser;
use senryu_cli::commands::Commands;
use senryu_cli::logging::init_logging;

/// Furigana annotation and 5-7-5 verse validation
#[derive(Debug, Parser)]
#[command(name = "senryu", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = cli.command.execute(cli.quiet) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
