//! Non-interactive command-line front end.

pub mod args;
mod commands;
pub mod output;
mod render;

use crate::errors::CliError;

pub const USAGE: &str = "\
Usage:
  spend_insights_cli forecast  <ledger.csv> [--months N] [--kind debit|credit] [--json]
  spend_insights_cli anomalies <ledger.csv> [--relative X] [--absolute Y] [--json]
  spend_insights_cli runway    <ledger.csv> --budgets <budgets.json> [--balance B] [--json]
  spend_insights_cli report    <ledger.csv> --out <report.json> [--budgets <budgets.json>] [--balance B]
  spend_insights_cli config    [show|path]
  spend_insights_cli version";

/// Dispatches one command from the process arguments (program name excluded).
pub fn run_cli<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{USAGE}");
        return Err(CliError::Usage("missing command".into()));
    };

    match command.as_str() {
        "forecast" => commands::forecast(rest),
        "anomalies" => commands::anomalies(rest),
        "runway" => commands::runway(rest),
        "report" => commands::report(rest),
        "config" => commands::config(rest),
        "version" | "--version" => commands::version(),
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        other => {
            eprintln!("{USAGE}");
            Err(CliError::Usage(format!("unknown command `{other}`")))
        }
    }
}
