//! Human-readable rendering of engine results.

use insights_domain::{AnomalyReport, BudgetRunway, ForecastResult, RunwayStatus};

use super::output;

fn money(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}

pub fn forecast(result: &ForecastResult, currency: &str) {
    output::section(format!(
        "{} forecast ({} months, {})",
        result.transaction_kind(),
        result.horizon_months(),
        result.strategy()
    ));

    if let ForecastResult::Empty(_) = result {
        output::warning("No matching transactions; projecting zero spend.");
    }

    output::info(format!("Trend: {}", result.trend()));
    output::info(format!(
        "Historical monthly average: {}",
        money(result.historical_monthly_average(), currency)
    ));

    let total = result.total_forecast();
    for (idx, amount) in total.amounts.iter().enumerate() {
        let label = total
            .dates
            .get(idx)
            .cloned()
            .unwrap_or_else(|| format!("+{}", idx + 1));
        output::detail(format!(
            "{label}  {}  [{} .. {}]",
            money(*amount, currency),
            money(total.lower_bound[idx], currency),
            money(total.upper_bound[idx], currency)
        ));
    }

    let categories = result.category_forecasts();
    if !categories.is_empty() {
        output::section("By category");
        for (name, forecast) in categories {
            let next = forecast.forecasted_amounts.first().copied().unwrap_or(0.0);
            output::detail(format!(
                "{name}: next {} (avg {}, last {})",
                money(next, currency),
                money(forecast.historical_average, currency),
                money(forecast.last_observed_month_amount, currency)
            ));
        }
    }
}

pub fn anomalies(report: &AnomalyReport, currency: &str) {
    output::section(format!("Anomalies ({})", report.len()));
    if report.is_empty() {
        output::success("No anomalous transactions detected.");
        return;
    }
    for anomaly in report.iter() {
        let txn = &anomaly.transaction;
        let rules = anomaly
            .rules
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        output::detail(format!(
            "{}  {}  {}  {}  [{rules}]",
            txn.date,
            txn.description,
            txn.category_name().unwrap_or("-"),
            money(txn.amount, currency)
        ));
    }
}

pub fn runway(runway: &BudgetRunway, currency: &str) {
    output::section("Budget runway");
    let spend = money(runway.average_monthly_spending, currency);
    match runway.status {
        RunwayStatus::Ok => output::success(format!(
            "{:.1} months of runway at {spend} per month.",
            runway.runway_months
        )),
        RunwayStatus::Warning => output::warning(format!(
            "Only {:.1} months of runway at {spend} per month.",
            runway.runway_months
        )),
        RunwayStatus::NoBalanceProvided => output::info(format!(
            "Average monthly spending is {spend}; pass --balance to compute runway."
        )),
        RunwayStatus::InsufficientData => {
            output::warning("Not enough budget or debit history to compute runway.")
        }
    }
}
