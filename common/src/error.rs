use thiserror::Error;

/// Reasons a self-check can fail.
///
/// Every variant carries the name of the check that produced it so the
/// caller can report it without extra context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("{check}: factory produced a `{found}` report, expected `{expected}`")]
    VariantMismatch {
        check: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{check}: report generated label `{found}`, expected `{expected}`")]
    LabelMismatch {
        check: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("{check}: `{label}` report generated no text")]
    EmptyReport {
        check: &'static str,
        label: &'static str,
    },

    #[error("{check}: wrapped appointment was never executed")]
    NotForwarded { check: &'static str },

    #[error("{check}: wrapped appointment executed {count} times, expected exactly once")]
    ForwardCount { check: &'static str, count: usize },
}

impl CheckError {
    /// Name of the check that failed.
    pub fn check(&self) -> &'static str {
        match self {
            CheckError::VariantMismatch { check, .. }
            | CheckError::LabelMismatch { check, .. }
            | CheckError::EmptyReport { check, .. }
            | CheckError::NotForwarded { check }
            | CheckError::ForwardCount { check, .. } => check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_check() {
        let err = CheckError::ForwardCount {
            check: "decorator_stacking_forwards_once",
            count: 2,
        };
        assert_eq!(err.check(), "decorator_stacking_forwards_once");
        assert_eq!(
            err.to_string(),
            "decorator_stacking_forwards_once: wrapped appointment executed 2 times, expected exactly once"
        );
    }

    #[test]
    fn label_mismatch_carries_found_text() {
        let err = CheckError::LabelMismatch {
            check: "factory_method_creates_patient_report",
            expected: "PatientReport",
            found: "FinancialReport".to_string(),
        };
        assert!(err.to_string().contains("`FinancialReport`"));
    }

    #[test]
    fn empty_report_names_check_and_label() {
        let err = CheckError::EmptyReport {
            check: "factory_method_creates_financial_report",
            label: "FinancialReport",
        };
        assert_eq!(err.check(), "factory_method_creates_financial_report");
        assert!(err.to_string().contains("`FinancialReport` report generated no text"));
    }
}
