//! Shared configuration and error types for the clinic pattern demos.

pub mod config;
pub mod error;
