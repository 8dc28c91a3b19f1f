//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to [`run`] or
//! [`check`], or prints a short welcome when no subcommand is given.

pub mod check;
pub mod run;

use crate::cli::{Cli, Commands};
use crate::error::ConnectorError;

pub async fn dispatch(cli: Cli) -> Result<(), ConnectorError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(*args).await,
        Some(Commands::Check(ref args)) => check::execute(args),
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  zephyr-connector v{version} \u{2014} CORS proxy for the Zephyr Scale REST API\n\n  \
         No command provided. To get started:\n\n    \
         zephyr-connector run                              Proxy http://localhost:8182 on :8383\n    \
         zephyr-connector run --jira-url <url>             Point at another JIRA instance\n    \
         zephyr-connector check                            Print the effective settings\n    \
         zephyr-connector --help                           See all commands and options\n"
    );
}
