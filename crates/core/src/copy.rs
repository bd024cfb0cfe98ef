//! Label feedback for a code block's copy button.

use crate::codeblock::{COPIED_LABEL, COPY_LABEL};
use crate::debounce::Debouncer;
use std::time::Duration;
use wayfinder_traits::{PageElement, TaskScheduler};

/// Shows "Copied" on the button after a successful copy, then reverts to "Copy".
///
/// A second copy before the revert restarts the wait instead of reverting early.
#[derive(Debug)]
pub struct CopyFeedback<E, S: TaskScheduler> {
    button: E,
    revert: Debouncer<S>,
}

impl<E, S> CopyFeedback<E, S>
where
    E: PageElement + Clone + 'static,
    S: TaskScheduler,
{
    pub fn new(button: E, scheduler: S, hold: Duration) -> Self {
        Self {
            button,
            revert: Debouncer::new(scheduler, hold),
        }
    }

    /// Call once the clipboard write has succeeded.
    pub fn confirm(&self) {
        self.button.set_text(COPIED_LABEL);
        let button = self.button.clone();
        self.revert.call_or_log(move || button.set_text(COPY_LABEL));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_traits::{ManualScheduler, MemoryElement};

    #[test]
    fn test_label_reverts_after_hold() {
        let scheduler = ManualScheduler::new();
        let button = MemoryElement::new();
        button.set_text(COPY_LABEL);
        let feedback = CopyFeedback::new(button.clone(), scheduler.clone(), Duration::from_secs(2));

        feedback.confirm();
        assert_eq!(button.text(), "Copied");
        scheduler.advance(Duration::from_millis(1999));
        assert_eq!(button.text(), "Copied");
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(button.text(), "Copy");
    }

    #[test]
    fn test_second_copy_restarts_hold() {
        let scheduler = ManualScheduler::new();
        let button = MemoryElement::new();
        let feedback = CopyFeedback::new(button.clone(), scheduler.clone(), Duration::from_secs(2));

        feedback.confirm();
        scheduler.advance(Duration::from_millis(1500));
        feedback.confirm();
        scheduler.advance(Duration::from_millis(1500));
        assert_eq!(button.text(), "Copied");
        scheduler.advance(Duration::from_millis(500));
        assert_eq!(button.text(), "Copy");
    }
}
