// rpcd command-line client
// Run with: cargo run -p rpcd_cli -- list layouts

use clap::Parser;
use rpcd_cli::{exit_code_for, Cli, ExitCode, UsageError};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match UsageError::from_clap(&err) {
            Some(usage) => {
                eprintln!("{}", usage);
                return usage.exit_code().into();
            }
            None => err.exit(),
        },
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut out = std::io::stdout();
    match rpcd_cli::run(&cli, &mut out).await {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err).into()
        }
    }
}
