//! The **Decorator** side of the clinic.
//!
//! An [`Appointment`] writes its description into a [`Details`] accumulator.
//! [`BasicAppointment`] is the terminal node. Decorators own the appointment
//! they wrap, forward to it exactly once and then append their own marker,
//! so markers always read inner-to-outer.

use std::fmt;
use std::str::FromStr;

mod decorator;
mod recording;

pub use decorator::{EXAM_MARKER, ExamDecorator, NOTIFICATION_MARKER, NotificationDecorator};
pub use recording::{CallCounter, RecordingAppointment};

pub const BASIC_MESSAGE: &str = "-> Basic appointment scheduled.";

/// Ordered lines emitted while executing an appointment chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Details {
    lines: Vec<String>,
}

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines equal to `line`.
    pub fn occurrences(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| l.as_str() == line).count()
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Something that can be scheduled at the clinic.
pub trait Appointment {
    /// Appends this appointment's description to `details`.
    fn execute(&self, details: &mut Details);

    /// Runs the appointment once and returns everything it emitted.
    fn details(&self) -> Details {
        let mut details = Details::new();
        self.execute(&mut details);
        details
    }
}

/// A plain consultation with nothing attached.
#[derive(Debug, Default)]
pub struct BasicAppointment;

impl Appointment for BasicAppointment {
    fn execute(&self, details: &mut Details) {
        details.push(BASIC_MESSAGE);
    }
}

/// The closed set of decorators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecoratorKind {
    /// E-mail/WhatsApp reminder.
    Notification,
    /// Exam order attached to the appointment.
    Exam,
}

impl DecoratorKind {
    pub fn marker(self) -> &'static str {
        match self {
            DecoratorKind::Notification => NOTIFICATION_MARKER,
            DecoratorKind::Exam => EXAM_MARKER,
        }
    }

    /// Moves `inner` into a new decorator of this kind.
    pub fn wrap(self, inner: Box<dyn Appointment>) -> Box<dyn Appointment> {
        match self {
            DecoratorKind::Notification => Box::new(NotificationDecorator::new(inner)),
            DecoratorKind::Exam => Box::new(ExamDecorator::new(inner)),
        }
    }
}

impl fmt::Display for DecoratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecoratorKind::Notification => write!(f, "notification"),
            DecoratorKind::Exam => write!(f, "exam"),
        }
    }
}

impl FromStr for DecoratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "notification" | "reminder" | "n" => Ok(DecoratorKind::Notification),
            "exam" | "exams" | "e" => Ok(DecoratorKind::Exam),
            other => Err(format!(
                "Unknown decorator '{other}', expected one of: notification, exam"
            )),
        }
    }
}

/// Wraps `base` in each decorator of `layers`, the first entry innermost.
pub fn decorate(base: Box<dyn Appointment>, layers: &[DecoratorKind]) -> Box<dyn Appointment> {
    layers.iter().fold(base, |inner, kind| kind.wrap(inner))
}

/// A [`BasicAppointment`] wrapped in `layers`, see [`decorate`].
pub fn schedule(layers: &[DecoratorKind]) -> Box<dyn Appointment> {
    decorate(Box::new(BasicAppointment), layers)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
