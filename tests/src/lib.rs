//! End-to-end checks over both pattern hierarchies.

mod patterns;
