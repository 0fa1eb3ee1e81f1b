use clinica_common::config::Config;
use clinica_core::check;
use colored::*;
use tracing::error;

use crate::terminal::{colors, print};

/// Runs every self-check; the first failure ends the run with an error.
pub fn check(cfg: &Config) -> anyhow::Result<()> {
    let passed = check::run_all(|name| {
        print::print(&format!(
            "{} {}",
            "PASSED:".color(colors::SUCCESS).bold(),
            name.color(colors::TEXT_DEFAULT)
        ));
    })
    .inspect_err(|e| {
        print::print(&format!(
            "{} {}",
            "FAILED:".color(colors::FAILURE).bold(),
            e.check().color(colors::TEXT_DEFAULT)
        ));
        error!("{}", e);
    })?;

    print::blank(cfg);
    print::centerln(&format!(
        "{}",
        format!("All {passed} self-checks passed").color(colors::SUCCESS).bold()
    ));
    Ok(())
}
