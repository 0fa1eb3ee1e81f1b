//! Self-checks over both pattern hierarchies.
//!
//! [`run_all`] executes [`CHECKS`] in order through [`run_checks`], which
//! stops at the first failure; there is no partial report.

use clinica_common::error::CheckError;
use tracing::debug;

use crate::appointment::{Appointment, ExamDecorator, NotificationDecorator, RecordingAppointment};
use crate::report::{FinancialReport, PatientReport, Report, ReportKind};

/// A named self-check.
pub struct Check {
    pub name: &'static str,
    run: fn(&'static str) -> Result<(), CheckError>,
}

impl Check {
    pub fn run(&self) -> Result<(), CheckError> {
        debug!(check = self.name, "running check");
        (self.run)(self.name)
    }
}

pub const CHECKS: [Check; 4] = [
    Check {
        name: "factory_method_creates_patient_report",
        run: factory_method_creates_patient_report,
    },
    Check {
        name: "factory_method_creates_financial_report",
        run: factory_method_creates_financial_report,
    },
    Check {
        name: "decorator_forwards_to_wrapped_appointment",
        run: decorator_forwards_to_wrapped_appointment,
    },
    Check {
        name: "decorator_stacking_forwards_once",
        run: decorator_stacking_forwards_once,
    },
];

/// Runs [`CHECKS`], see [`run_checks`].
pub fn run_all<F>(on_pass: F) -> Result<usize, CheckError>
where
    F: FnMut(&'static str),
{
    run_checks(&CHECKS, on_pass)
}

/// Runs `checks` in order, calling `on_pass` after each one that succeeds.
///
/// The first failure is returned at once and later checks never run.
/// Returns the number of checks that passed.
pub fn run_checks<F>(checks: &[Check], mut on_pass: F) -> Result<usize, CheckError>
where
    F: FnMut(&'static str),
{
    for check in checks {
        check.run()?;
        on_pass(check.name);
    }
    Ok(checks.len())
}

fn factory_method_creates_patient_report(check: &'static str) -> Result<(), CheckError> {
    expect_report::<PatientReport>(check, ReportKind::Patient, "PatientReport")
}

fn factory_method_creates_financial_report(check: &'static str) -> Result<(), CheckError> {
    expect_report::<FinancialReport>(check, ReportKind::Financial, "FinancialReport")
}

/// The factory for `kind` must hand back an `R` labelled `label` whose
/// generated text is not empty.
fn expect_report<R: Report>(
    check: &'static str,
    kind: ReportKind,
    label: &'static str,
) -> Result<(), CheckError> {
    let report = kind.factory().create_report();

    if report.as_any().downcast_ref::<R>().is_none() {
        return Err(CheckError::VariantMismatch {
            check,
            expected: short_type_name::<R>(),
            found: report.label(),
        });
    }

    if report.label() != label {
        return Err(CheckError::LabelMismatch {
            check,
            expected: label,
            found: report.label().to_string(),
        });
    }

    if report.generate().trim().is_empty() {
        return Err(CheckError::EmptyReport { check, label });
    }

    Ok(())
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

fn decorator_forwards_to_wrapped_appointment(check: &'static str) -> Result<(), CheckError> {
    let recorder = RecordingAppointment::new();
    let calls = recorder.counter();

    NotificationDecorator::new(Box::new(recorder)).details();

    if !calls.was_called() {
        return Err(CheckError::NotForwarded { check });
    }
    Ok(())
}

fn decorator_stacking_forwards_once(check: &'static str) -> Result<(), CheckError> {
    let recorder = RecordingAppointment::new();
    let calls = recorder.counter();

    let chain: Box<dyn Appointment> = Box::new(ExamDecorator::new(Box::new(
        NotificationDecorator::new(Box::new(recorder)),
    )));
    chain.details();

    match calls.count() {
        0 => Err(CheckError::NotForwarded { check }),
        1 => Ok(()),
        count => Err(CheckError::ForwardCount { check, count }),
    }
}
