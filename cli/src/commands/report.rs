use clinica_core::report::ReportKind;

use crate::mprint;

pub fn report(kind: ReportKind) {
    let report = kind.factory().create_report();
    mprint!(&report.generate());
}
