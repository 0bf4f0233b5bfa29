use std::time::Duration;

use leptos::prelude::IntervalHandle;

/// Period between auto-advance ticks.
pub const DEFAULT_AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(4000);

/// A running repeating timer owned by the carousel.
///
/// Once `cancel` returns, the timer's callback must never run again.
pub trait TimerHandle: Send {
    fn cancel(&mut self);
}

impl TimerHandle for IntervalHandle {
    fn cancel(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::TimerHandle;

    /// Counts cancellations so tests can check teardown.
    #[derive(Debug, Clone, Default)]
    pub struct CountingTimer {
        cancelled: Arc<AtomicUsize>,
    }

    impl CountingTimer {
        pub fn cancelled(&self) -> usize {
            self.cancelled.load(Ordering::SeqCst)
        }
    }

    impl TimerHandle for CountingTimer {
        fn cancel(&mut self) {
            self.cancelled.fetch_add(1, Ordering::SeqCst);
        }
    }
}
