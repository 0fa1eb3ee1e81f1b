use std::cell::Cell;
use std::rc::Rc;

use super::{Appointment, Details};

/// Read side of a [`RecordingAppointment`], kept by the caller after the
/// appointment itself has been moved into a decorator.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    pub fn count(&self) -> usize {
        self.0.get()
    }

    pub fn was_called(&self) -> bool {
        self.count() > 0
    }
}

/// Appointment double that emits nothing and counts its executions.
#[derive(Debug, Default)]
pub struct RecordingAppointment {
    calls: CallCounter,
}

impl RecordingAppointment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl Appointment for RecordingAppointment {
    fn execute(&self, _details: &mut Details) {
        let calls = &self.calls.0;
        calls.set(calls.get() + 1);
    }
}
