// SPDX-FileCopyrightText: 2026 Fluxion Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Activation logging collaborator.
//!
//! The initializer issues one `record` call per successfully constructed
//! manifest-declared plugin; deduplication semantics belong entirely to the
//! logger implementation.

use std::collections::HashSet;
use std::sync::Mutex;

/// Records plugin activation events.
pub trait ActivationLogger: Send + Sync {
    /// Record one activation message.
    fn record(&self, message: &str);
}

/// Default logger: forwards each distinct message to `tracing::info!` once
/// and suppresses exact repeats.
#[derive(Default)]
pub struct MemoLogger {
    seen: Mutex<HashSet<String>>,
}

impl MemoLogger {
    /// Create a logger with no remembered messages.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActivationLogger for MemoLogger {
    fn record(&self, message: &str) {
        let mut seen = match self.seen.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if seen.insert(message.to_string()) {
            tracing::info!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_logger_remembers_messages() {
        let logger = MemoLogger::new();
        logger.record("initializing plugin 'meter'");
        logger.record("initializing plugin 'meter'");
        logger.record("initializing plugin 'other'");

        let seen = logger.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.contains("initializing plugin 'meter'"));
        assert!(seen.contains("initializing plugin 'other'"));
    }
}
