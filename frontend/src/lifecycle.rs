//! Bookkeeping for work that outlives a single render: in-flight fetches and
//! pending timers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Shared "still wanted" flag for a spawned request. The effect that spawned
/// it cancels the flag in its cleanup, so a late response is dropped.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// At most one pending timer. Arming again drops, and so cancels, the previous one.
pub struct TimerSlot<T = Timeout>(RefCell<Option<T>>);

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self(RefCell::new(None))
    }
}

impl<T> TimerSlot<T> {
    pub fn arm(&self, timer: T) {
        self.0.replace(Some(timer));
    }

    pub fn clear(&self) {
        self.0.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counted(Rc<Cell<u32>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn cancel_is_seen_by_every_clone() {
        let flag = CancelFlag::new();
        let in_task = flag.clone();
        assert!(!in_task.is_cancelled());
        flag.cancel();
        assert!(in_task.is_cancelled());
    }

    #[test]
    fn newer_request_supersedes_older() {
        // Effect runs for page 1, then page 2 before page 1 answers.
        let first = CancelFlag::new();
        let first_task = first.clone();
        first.cancel();
        let second_task = CancelFlag::new();

        let mut shown = None;
        for (task, rows) in [(&second_task, "page 2"), (&first_task, "page 1")] {
            if !task.is_cancelled() {
                shown = Some(rows);
            }
        }
        assert_eq!(shown, Some("page 2"));
    }

    #[test]
    fn rearming_drops_previous_timer() {
        let dropped = Rc::new(Cell::new(0));
        let slot = TimerSlot::default();
        slot.arm(Counted(dropped.clone()));
        assert_eq!(dropped.get(), 0);
        slot.arm(Counted(dropped.clone()));
        assert_eq!(dropped.get(), 1);
        slot.clear();
        assert_eq!(dropped.get(), 2);
        slot.clear();
        assert_eq!(dropped.get(), 2);
    }
}
