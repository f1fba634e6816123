use colored::Colorize;
use indicatif::HumanCount;

use crate::stats::model::StatsSummary;

/// Renders the six-line stats report for one scope.
pub fn render(scope: &str, summary: &StatsSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "-----{} COVID-19 Stats-----\n",
        scope.to_uppercase()
    ));
    out.push_str(&format!(
        "{} # of confirmed cases: {}\n",
        "[*]".cyan(),
        HumanCount(summary.confirmed)
    ));
    out.push_str(&format!(
        "{} # recovered: {}\n",
        "[+]".green(),
        HumanCount(summary.recovered)
    ));
    out.push_str(&format!(
        "{} # dead: {}\n",
        "[-]".red(),
        HumanCount(summary.dead)
    ));
    out.push_str(&format!(
        "{} # active: {}\n",
        "[*]".cyan(),
        signed_count(summary.active())
    ));
    out.push_str(&format!(
        "{} Recovery rate: {:.2}%\n",
        "[+]".green(),
        summary.recovery_rate()
    ));
    out.push_str(&format!(
        "{} Mortality rate: {:.2}%\n",
        "[-]".red(),
        summary.mortality_rate()
    ));
    out
}

// HumanCount only takes unsigned values; active can dip below zero.
fn signed_count(value: i64) -> String {
    if value < 0 {
        format!("-{}", HumanCount(value.unsigned_abs()))
    } else {
        HumanCount(value as u64).to_string()
    }
}
