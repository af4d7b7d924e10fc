//! editorgen-core - Type description model, errors, and generation state
//!
//! This crate provides the foundational types shared by the editorgen crates:
//! - [`TypeDescription`] and [`FieldDescription`] describing the target type
//! - [`Annotation`] for the closed set of recognized field annotations
//! - [`GenerationState`] for the per-request generation state machine
//! - [`GenerationError`] for error handling
//! - [`NoticeSink`] for the non-fatal notices channel

mod error;
mod lifecycle;
mod model;
mod notice;

pub use error::{GenerationError, GenerationResult};
pub use lifecycle::GenerationState;
pub use model::{Annotation, DeferredKind, FieldDescription, TypeDescription, Visibility};
pub use notice::{Notice, NoticeSink, TracingSink};

/// Log levels for diagnostics callbacks
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Directive string understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Annotation, DeferredKind, FieldDescription, GenerationError, GenerationResult,
        GenerationState, LogLevel, Notice, NoticeSink, TypeDescription, Visibility,
    };
}
