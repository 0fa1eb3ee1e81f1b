use tracing::trace;

use super::{Appointment, Details};

pub const NOTIFICATION_MARKER: &str = "   [DECORATOR] Added e-mail/WhatsApp notification.";
pub const EXAM_MARKER: &str = "   [DECORATOR] Attached exam order(s).";

/// Forwarding shared by every decorator.
///
/// An empty slot forwards to nothing.
struct Wrapped(Option<Box<dyn Appointment>>);

impl Wrapped {
    fn forward(&self, details: &mut Details, layer: &'static str) {
        match &self.0 {
            Some(inner) => {
                trace!(layer, "forwarding to wrapped appointment");
                inner.execute(details);
            }
            None => trace!(layer, "nothing wrapped, skipping forward"),
        }
    }
}

/// Reminds the patient by e-mail or WhatsApp.
pub struct NotificationDecorator {
    inner: Wrapped,
}

impl NotificationDecorator {
    pub fn new(inner: Box<dyn Appointment>) -> Self {
        Self {
            inner: Wrapped(Some(inner)),
        }
    }

    /// A decorator with nothing to forward to.
    pub fn detached() -> Self {
        Self {
            inner: Wrapped(None),
        }
    }
}

impl Appointment for NotificationDecorator {
    fn execute(&self, details: &mut Details) {
        self.inner.forward(details, "notification");
        details.push(NOTIFICATION_MARKER);
    }
}

/// Attaches exam orders to the appointment.
pub struct ExamDecorator {
    inner: Wrapped,
}

impl ExamDecorator {
    pub fn new(inner: Box<dyn Appointment>) -> Self {
        Self {
            inner: Wrapped(Some(inner)),
        }
    }

    pub fn detached() -> Self {
        Self {
            inner: Wrapped(None),
        }
    }
}

impl Appointment for ExamDecorator {
    fn execute(&self, details: &mut Details) {
        self.inner.forward(details, "exam");
        details.push(EXAM_MARKER);
    }
}
