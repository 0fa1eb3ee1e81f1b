pub mod check;
pub mod demo;
pub mod report;
pub mod schedule;

use clap::{ArgAction, Parser, Subcommand};
use clinica_common::config::Config;
use clinica_core::appointment::DecoratorKind;
use clinica_core::report::ReportKind;

#[derive(Parser)]
#[command(name = "clinica")]
#[command(about = "Factory Method and Decorator, shown on a small clinic.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print less; repeat for even less (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the full demonstration (default)
    #[command(alias = "d")]
    Demo,
    /// Run the built-in self-checks
    #[command(alias = "c")]
    Check,
    /// Generate a single report: patient or financial
    #[command(alias = "r")]
    Report { kind: ReportKind },
    /// Schedule an appointment, wrapping it in each --with in order
    #[command(alias = "s")]
    Schedule {
        /// Add-on to attach: notification or exam (first is innermost)
        #[arg(short, long = "with", value_name = "ADDON")]
        with: Vec<DecoratorKind>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            no_color: self.no_color,
            quiet: self.quiet,
        }
    }
}
