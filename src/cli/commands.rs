use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use insights_core::ForecastPolicy;
use insights_domain::TransactionKind;
use serde::Serialize;
use tracing::debug;

use super::{args::ArgList, output, render};
use crate::{
    config::{self, Config, ConfigManager},
    errors::{CliError, InsightsError},
    ledger::{load_ledger, CsvImportOptions, LedgerView},
    report::{InsightsReport, ReportRequest},
    storage,
    utils::build_info,
};

const JSON_FLAG: &str = "--json";

/// Loaded configuration shared by the ledger commands.
struct Session {
    manager: ConfigManager,
    config: Config,
}

impl Session {
    fn load() -> Result<Self, CliError> {
        let (manager, config) = config::load_default()?;
        output::set_preferences(output::OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        Ok(Self { manager, config })
    }

    fn ledger(&self, args: &ArgList) -> Result<LedgerView, CliError> {
        if args.positionals().len() > 1 {
            return Err(CliError::Usage(format!(
                "unexpected argument `{}`",
                args.positionals()[1]
            )));
        }
        let path = match args.positional(0) {
            Some(path) => PathBuf::from(path),
            None => self
                .config
                .default_ledger_path
                .clone()
                .ok_or_else(|| CliError::Usage("missing <ledger.csv> argument".into()))?,
        };
        let options = CsvImportOptions {
            date_format: self.config.date_format.clone(),
        };
        debug!(path = %path.display(), "loading ledger");
        Ok(load_ledger(&path, &options)?)
    }

    fn kind(&self, args: &ArgList) -> Result<TransactionKind, CliError> {
        match args.value("--kind") {
            Some(raw) => {
                TransactionKind::from_str(raw).map_err(|err| CliError::Usage(err.to_string()))
            }
            None => Ok(config::default_kind(&self.config)?),
        }
    }

    fn months(&self, args: &ArgList) -> Result<u32, CliError> {
        Ok(args
            .parsed::<u32>("--months")?
            .unwrap_or(self.config.forecast.horizon_months))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(InsightsError::from)?;
    println!("{json}");
    Ok(())
}

fn balance(args: &ArgList) -> Result<Option<f64>, CliError> {
    match args.parsed::<f64>("--balance")? {
        Some(value) if !value.is_finite() => {
            Err(CliError::Usage("--balance must be a finite number".into()))
        }
        other => Ok(other),
    }
}

pub fn forecast(args: &[String]) -> Result<(), CliError> {
    let args = ArgList::parse(args, &["--months", "--kind"], &[JSON_FLAG])?;
    let session = Session::load()?;
    let view = session.ledger(&args)?;
    let result = view.forecast(
        session.months(&args)?,
        session.kind(&args)?,
        &ForecastPolicy::default(),
    )?;

    if args.switch(JSON_FLAG) {
        return print_json(&result);
    }
    render::forecast(&result, &session.config.currency);
    Ok(())
}

pub fn anomalies(args: &[String]) -> Result<(), CliError> {
    let args = ArgList::parse(args, &["--relative", "--absolute"], &[JSON_FLAG])?;
    let session = Session::load()?;
    let view = session.ledger(&args)?;

    let mut policy = config::anomaly_policy(&session.config);
    if let Some(relative) = args.parsed::<f64>("--relative")? {
        policy.relative_threshold = relative;
    }
    if let Some(absolute) = args.parsed::<f64>("--absolute")? {
        policy.absolute_threshold = absolute;
    }
    let report = view.detect_anomalies(&policy)?;

    if args.switch(JSON_FLAG) {
        return print_json(&report);
    }
    render::anomalies(&report, &session.config.currency);
    Ok(())
}

pub fn runway(args: &[String]) -> Result<(), CliError> {
    let args = ArgList::parse(args, &["--budgets", "--balance"], &[JSON_FLAG])?;
    let budgets_path = args
        .value("--budgets")
        .map(PathBuf::from)
        .ok_or_else(|| CliError::Usage("runway requires --budgets <budgets.json>".into()))?;
    let balance = balance(&args)?;

    let session = Session::load()?;
    let view = session.ledger(&args)?;
    let budgets = storage::load_budgets(&budgets_path)?;
    let runway = view.runway(&budgets, balance, &config::runway_policy(&session.config))?;

    if args.switch(JSON_FLAG) {
        return print_json(&runway);
    }
    render::runway(&runway, &session.config.currency);
    Ok(())
}

pub fn report(args: &[String]) -> Result<(), CliError> {
    let args = ArgList::parse(
        args,
        &["--out", "--budgets", "--balance", "--months", "--kind"],
        &[],
    )?;
    let out = args
        .value("--out")
        .map(PathBuf::from)
        .ok_or_else(|| CliError::Usage("report requires --out <report.json>".into()))?;

    let session = Session::load()?;
    let view = session.ledger(&args)?;
    let budgets = args
        .value("--budgets")
        .map(|path| storage::load_budgets(Path::new(path)))
        .transpose()?;
    let request = ReportRequest {
        horizon_months: session.months(&args)?,
        kind: session.kind(&args)?,
        budgets,
        current_balance: balance(&args)?,
    };

    let report = InsightsReport::build(&view, &session.config, &request)?;
    storage::save_report(&out, &report)?;
    output::success(format!("Report written to {}", out.display()));
    Ok(())
}

pub fn config(args: &[String]) -> Result<(), CliError> {
    let session = Session::load()?;
    match args.first().map(String::as_str) {
        None | Some("show") => print_json(&session.config),
        Some("path") => {
            println!("{}", session.manager.config_path().display());
            Ok(())
        }
        Some(other) => Err(CliError::Usage(format!(
            "unknown config action `{other}` (expected show or path)"
        ))),
    }
}

pub fn version() -> Result<(), CliError> {
    let meta = build_info::current();
    output::section(format!("Spend Insights {}", meta.version));
    output::detail(format!("Build hash : {} ({})", meta.git_hash, meta.git_status));
    output::detail(format!("Built at   : {}", meta.timestamp));
    output::detail(format!("Target     : {}", meta.target));
    output::detail(format!("Profile    : {}", meta.profile));
    output::detail(format!("Rustc      : {}", meta.rustc));
    Ok(())
}
