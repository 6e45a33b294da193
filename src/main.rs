use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use rent_receipt::{Cli, ReceiptConfig};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    let config = ReceiptConfig::from_env()?;
    let output = rent_receipt::run(cli, &config)?;
    println!("Rent receipts generated as {}", output.display());
    Ok(())
}
