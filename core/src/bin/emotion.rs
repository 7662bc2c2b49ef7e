//! emotion binary - one-shot emotion detection from the command line.

use clap::Parser;
use emotion::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
