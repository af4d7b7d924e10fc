//! editorgen-logging - Tracing to diagnostics callback bridge
//!
//! This crate provides:
//! - [`DiagnosticsLayer`] tracing layer that forwards events to a host callback
//! - [`LogCallback`] type for the host's diagnostics sink
//! - [`init_logging`] for binaries that also want formatted stderr output
//!
//! Hosts embedding the generator (an editor plugin, or the `editorgen`
//! binary, which counts warnings through it) register a callback with
//! [`LogCallbackManager::global`]; without one the layer drops every event.
//!
//! Generation notices are emitted as `WARN` events on the
//! `editorgen::notice` target, so a host that registers a callback receives
//! them alongside ordinary log output.

mod callback;
mod layer;

pub use callback::{LogCallback, LogCallbackManager};
pub use editorgen_core::LogLevel;
pub use layer::{DiagnosticsLayer, init_logging};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DiagnosticsLayer, LogCallback, LogCallbackManager, LogLevel, init_logging};
}
