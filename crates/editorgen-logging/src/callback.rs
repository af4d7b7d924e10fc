//! Diagnostics callback management

use editorgen_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Host callback receiving diagnostics
///
/// # Parameters
/// - `level`: severity of the event
/// - `target`: event target (module path, or `editorgen::notice` for notices)
/// - `message`: rendered message including structured fields
pub type LogCallback = Arc<dyn Fn(LogLevel, &str, &str) + Send + Sync>;

/// Global callback manager
static CALLBACK_MANAGER: OnceCell<LogCallbackManager> = OnceCell::new();

/// Manager for the host diagnostics callback
pub struct LogCallbackManager {
    callback: RwLock<Option<LogCallback>>,
    level: AtomicU8,
}

impl LogCallbackManager {
    /// Create a new callback manager
    pub fn new() -> Self {
        Self {
            callback: RwLock::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Get the global callback manager instance
    pub fn global() -> &'static LogCallbackManager {
        CALLBACK_MANAGER.get_or_init(LogCallbackManager::new)
    }

    /// Set the callback
    pub fn set_callback(&self, callback: Option<LogCallback>) {
        let mut guard = self.callback.write();
        *guard = callback;
    }

    /// Get the current callback
    pub fn get_callback(&self) -> Option<LogCallback> {
        self.callback.read().clone()
    }

    /// Set the minimum level forwarded to the callback
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Get the current level
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Check if a level is enabled
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    /// Invoke the callback if set and the level is enabled
    ///
    /// The lock is released before the callback runs, so a callback may
    /// itself log or replace the callback.
    pub fn log(&self, level: LogLevel, target: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        if let Some(callback) = self.get_callback() {
            callback(level, target, message);
        }
    }
}

impl Default for LogCallbackManager {
    fn default() -> Self {
        Self::new()
    }
}
