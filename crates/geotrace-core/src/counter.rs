//! Process-wide request counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing counter of service-level operation invocations.
///
/// Constructed once per process and shared by reference with every service.
/// Observability only; nothing reads it for correctness.
#[derive(Debug, Default)]
pub struct RequestCounter {
    count: AtomicU64,
}

impl RequestCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter by one.
    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the current count.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Resets the counter to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_increment_and_read() {
        let counter = RequestCounter::new();
        assert_eq!(counter.count(), 0);
        counter.increment();
        counter.increment();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_reset() {
        let counter = RequestCounter::new();
        counter.increment();
        counter.reset();
        assert_eq!(counter.count(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_increments() {
        let counter = Arc::new(RequestCounter::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    counter.increment();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(counter.count(), 800);
    }
}
