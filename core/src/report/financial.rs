use std::any::Any;

use tracing::debug;

use super::{Report, ReportFactory};

pub(super) const LABEL: &str = "FinancialReport";

/// Cash flow together with accounts payable and receivable.
#[derive(Debug, Default)]
pub struct FinancialReport;

impl Report for FinancialReport {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn generate(&self) -> String {
        String::from(
            "Financial report: building cash flow, accounts payable and receivable...",
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default)]
pub struct FinancialReportFactory;

impl ReportFactory for FinancialReportFactory {
    fn create_report(&self) -> Box<dyn Report> {
        debug!(report = LABEL, "creating report");
        Box::new(FinancialReport)
    }
}
