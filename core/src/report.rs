//! The **Factory Method** side of the clinic.
//!
//! Callers hold a [`ReportFactory`] and never name a concrete report type.
//! Each concrete factory is bound to exactly one [`Report`] variant; picking
//! the factory is the caller's job, either directly or through [`ReportKind`].

use std::any::Any;
use std::fmt;
use std::str::FromStr;

mod financial;
mod patient;

pub use financial::{FinancialReport, FinancialReportFactory};
pub use patient::{PatientReport, PatientReportFactory};

/// A report the clinic can produce.
pub trait Report: Any {
    /// Fixed name identifying the variant.
    fn label(&self) -> &'static str;

    /// Produces the report text.
    fn generate(&self) -> String;

    /// Exposes the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Creates one kind of [`Report`].
pub trait ReportFactory {
    /// Returns a new, uniquely owned report of this factory's variant.
    fn create_report(&self) -> Box<dyn Report>;
}

/// The closed set of report variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    Patient,
    Financial,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Patient, ReportKind::Financial];

    /// The creator bound to this variant.
    pub fn factory(self) -> Box<dyn ReportFactory> {
        match self {
            ReportKind::Patient => Box::new(PatientReportFactory),
            ReportKind::Financial => Box::new(FinancialReportFactory),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::Patient => patient::LABEL,
            ReportKind::Financial => financial::LABEL,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Patient => write!(f, "patient"),
            ReportKind::Financial => write!(f, "financial"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = String;

    /// Accepts the variant name, case-insensitive, or its first letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "patient" | "patients" | "p" => Ok(ReportKind::Patient),
            "financial" | "finance" | "f" => Ok(ReportKind::Financial),
            other => Err(format!(
                "Unknown report '{other}', expected one of: patient, financial"
            )),
        }
    }
}
