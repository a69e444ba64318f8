use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Millisecond-timestamp identifiers that never repeat within one generator.
///
/// Two calls in the same millisecond get consecutive values instead of the
/// same timestamp.
#[derive(Debug, Default)]
pub struct TimeBasedIds {
    last: AtomicI64,
}

impl TimeBasedIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_value(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }

    pub fn next_with_prefix(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.next_value())
    }
}
