use clinica_common::config::Config;
use clinica_core::appointment::{self, DecoratorKind};
use clinica_core::report::{FinancialReportFactory, PatientReportFactory, ReportFactory};
use tracing::info_span;

use crate::mprint;
use crate::terminal::print;

/// The fixed demonstration: both report factories, then three appointment
/// scenarios of growing decoration.
pub fn demo(cfg: &Config) {
    factory_method(cfg);
    decorator(cfg);
}

fn factory_method(cfg: &Config) {
    let _span = info_span!("factory_method").entered();
    print::header("1. factory method", cfg);

    print::narrate("Administrator requested a patient report.", cfg);
    generate(&PatientReportFactory);
    print::blank(cfg);

    print::narrate("Administrator now requested a financial report.", cfg);
    generate(&FinancialReportFactory);
    print::blank(cfg);

    print::narrate(
        "Factory Method created different reports through the same interface, \
         making new kinds easy to add.",
        cfg,
    );
}

fn generate(factory: &dyn ReportFactory) {
    let report = factory.create_report();
    mprint!(&report.generate());
}

fn decorator(cfg: &Config) {
    let _span = info_span!("decorator").entered();
    print::header("2. decorator", cfg);

    let scenarios: [(&str, &[DecoratorKind]); 3] = [
        ("Scenario 1: scheduling a simple appointment.", &[]),
        (
            "Scenario 2: scheduling an appointment with a reminder.",
            &[DecoratorKind::Notification],
        ),
        (
            "Scenario 3: scheduling an appointment with a reminder and an exam order.",
            &[DecoratorKind::Notification, DecoratorKind::Exam],
        ),
    ];

    for (title, layers) in scenarios {
        print::narrate(title, cfg);
        let details = appointment::schedule(layers).details();
        print::details(&details);
        print::blank(cfg);
    }

    print::narrate(
        "Decorator attached features to an appointment dynamically and in combination.",
        cfg,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::logging::capture;
    use clinica_core::appointment::{BASIC_MESSAGE, EXAM_MARKER, NOTIFICATION_MARKER};
    use clinica_core::report::ReportKind;

    fn report_text(kind: ReportKind) -> String {
        kind.factory().create_report().generate()
    }

    #[test]
    fn quiet_demo_prints_only_pattern_output() {
        let cfg = Config {
            quiet: 1,
            ..Config::default()
        };
        let lines = capture(|| demo(&cfg));

        assert_eq!(
            lines,
            [
                report_text(ReportKind::Patient),
                report_text(ReportKind::Financial),
                BASIC_MESSAGE.to_string(),
                BASIC_MESSAGE.to_string(),
                NOTIFICATION_MARKER.to_string(),
                BASIC_MESSAGE.to_string(),
                NOTIFICATION_MARKER.to_string(),
                EXAM_MARKER.to_string(),
            ]
        );
    }

    #[test]
    fn demo_narrates_each_step_in_order() {
        let lines = capture(|| demo(&Config::default()));

        let patient = report_text(ReportKind::Patient);
        let financial = report_text(ReportKind::Financial);
        let expected = [
            "Administrator requested a patient report.",
            patient.as_str(),
            "Administrator now requested a financial report.",
            financial.as_str(),
            "Scenario 1: scheduling a simple appointment.",
            BASIC_MESSAGE,
            "Scenario 2: scheduling an appointment with a reminder.",
            BASIC_MESSAGE,
            NOTIFICATION_MARKER,
            "Scenario 3: scheduling an appointment with a reminder and an exam order.",
            BASIC_MESSAGE,
            NOTIFICATION_MARKER,
            EXAM_MARKER,
        ];

        let steps: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|line| expected.contains(line))
            .collect();
        assert_eq!(steps, expected);

        assert!(lines.iter().any(|l| l.contains("1. FACTORY METHOD")));
        assert!(lines.iter().any(|l| l.contains("2. DECORATOR")));
    }
}
