//! # Clinica Core
//!
//! Two pattern hierarchies over a small clinic domain:
//!
//! * **[`report`]**: *Factory Method*. One creator per report variant, every
//!   creator hidden behind the [`report::ReportFactory`] trait.
//! * **[`appointment`]**: *Decorator*. A basic appointment plus wrappers that
//!   forward to the appointment they own and append their own annotation.
//! * **[`check`]**: self-checks wiring both hierarchies together, used by the
//!   `check` command.

pub mod appointment;
pub mod check;
pub mod report;
