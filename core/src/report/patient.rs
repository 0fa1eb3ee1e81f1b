use std::any::Any;

use tracing::debug;

use super::{Report, ReportFactory};

pub(super) const LABEL: &str = "PatientReport";

/// Lists the patients seen during a period.
#[derive(Debug, Default)]
pub struct PatientReport;

impl Report for PatientReport {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn generate(&self) -> String {
        String::from("Patient report: listing patients seen during the period...")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default)]
pub struct PatientReportFactory;

impl ReportFactory for PatientReportFactory {
    fn create_report(&self) -> Box<dyn Report> {
        debug!(report = LABEL, "creating report");
        Box::new(PatientReport)
    }
}
