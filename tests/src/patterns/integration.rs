#![cfg(test)]
use clinica_common::error::CheckError;
use clinica_core::appointment::{
    self, Appointment, BASIC_MESSAGE, BasicAppointment, DecoratorKind, EXAM_MARKER, ExamDecorator,
    NOTIFICATION_MARKER, NotificationDecorator, RecordingAppointment,
};
use clinica_core::check;
use clinica_core::report::{
    FinancialReport, FinancialReportFactory, PatientReport, PatientReportFactory, Report,
    ReportFactory, ReportKind,
};

/// Callers only ever see the factory trait; the concrete report still comes
/// back as the factory's own variant.
#[test]
fn factories_behind_the_trait_produce_their_variant() {
    let factories: Vec<(Box<dyn ReportFactory>, &str)> = vec![
        (Box::new(PatientReportFactory), "PatientReport"),
        (Box::new(FinancialReportFactory), "FinancialReport"),
    ];

    for (factory, label) in &factories {
        let report: Box<dyn Report> = factory.create_report();
        assert_eq!(report.label(), *label);
    }

    let patient = factories[0].0.create_report();
    assert!(patient.as_any().is::<PatientReport>());
    let financial = factories[1].0.create_report();
    assert!(financial.as_any().is::<FinancialReport>());
}

#[test]
fn factory_per_kind_matches_direct_factory() {
    assert_eq!(
        ReportKind::Patient.factory().create_report().generate(),
        PatientReportFactory.create_report().generate()
    );
    assert_eq!(
        ReportKind::Financial.factory().create_report().generate(),
        FinancialReportFactory.create_report().generate()
    );
}

#[test]
fn every_factory_call_returns_a_fresh_report() {
    let factory = PatientReportFactory;
    let first = factory.create_report();
    let second = factory.create_report();
    assert_eq!(first.generate(), second.generate());
}

#[test]
fn reminder_scenario_emits_base_then_notification() {
    let details = NotificationDecorator::new(Box::new(BasicAppointment)).details();

    assert_eq!(details.lines(), [BASIC_MESSAGE, NOTIFICATION_MARKER]);
    assert_eq!(details.occurrences(BASIC_MESSAGE), 1);
    assert_eq!(details.occurrences(NOTIFICATION_MARKER), 1);
}

#[test]
fn full_scenario_built_by_rewrapping() {
    // Same construction as the demo: start basic, wrap twice.
    let mut chain: Box<dyn Appointment> = Box::new(BasicAppointment);
    chain = Box::new(NotificationDecorator::new(chain));
    chain = Box::new(ExamDecorator::new(chain));

    assert_eq!(
        chain.details().lines(),
        [BASIC_MESSAGE, NOTIFICATION_MARKER, EXAM_MARKER]
    );
}

#[test]
fn post_hook_order_is_inner_to_outer_for_any_pair() {
    let kinds = [DecoratorKind::Notification, DecoratorKind::Exam];
    for inner in kinds {
        for outer in kinds {
            let details = appointment::schedule(&[inner, outer]).details();
            assert_eq!(
                details.lines(),
                [BASIC_MESSAGE, inner.marker(), outer.marker()],
                "{outer}({inner}(basic))"
            );
        }
    }
}

#[test]
fn recording_double_is_forwarded_once_at_any_depth() {
    for depth in 0..6 {
        let recorder = RecordingAppointment::new();
        let calls = recorder.counter();
        let layers: Vec<DecoratorKind> = (0..depth)
            .map(|i| {
                if i % 2 == 0 {
                    DecoratorKind::Notification
                } else {
                    DecoratorKind::Exam
                }
            })
            .collect();

        let chain = appointment::decorate(Box::new(recorder), &layers);
        let details = chain.details();

        assert_eq!(calls.count(), 1, "depth {depth}");
        assert_eq!(details.len(), depth, "depth {depth}");
    }
}

#[test]
fn self_checks_all_pass() -> anyhow::Result<()> {
    let mut seen = 0;
    let passed = check::run_all(|_| seen += 1)?;
    assert_eq!(passed, 4);
    assert_eq!(seen, check::CHECKS.len());
    Ok(())
}

#[test]
fn check_error_converts_into_anyhow() {
    let err: anyhow::Error = CheckError::NotForwarded {
        check: "decorator_forwards_to_wrapped_appointment",
    }
    .into();
    assert!(err.to_string().contains("never executed"));
}
