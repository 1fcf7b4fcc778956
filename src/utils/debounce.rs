use std::time::{Duration, Instant};

/// Coalesces bursts of changes into one save. Call `touch` on every change
/// and `take_ready` from the host loop; `take_pending` cancels or forces.
#[derive(Debug)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Marks a change; the quiet window restarts from now.
    pub fn touch(&mut self) {
        self.touch_at(Instant::now());
    }

    pub fn touch_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the quiet window has elapsed; clears the pending mark.
    pub fn take_ready(&mut self) -> bool {
        self.take_ready_at(Instant::now())
    }

    pub fn take_ready_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Clears the pending mark regardless of the window, returning whether a
    /// save was pending.
    pub fn take_pending(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(500);

    #[test]
    fn not_ready_without_a_touch() {
        let mut debounce = Debounce::new(WINDOW);
        assert!(!debounce.is_pending());
        assert!(!debounce.take_ready_at(Instant::now()));
    }

    #[test]
    fn ready_only_after_the_window_elapses() {
        let mut debounce = Debounce::new(WINDOW);
        let start = Instant::now();
        debounce.touch_at(start);

        assert!(!debounce.take_ready_at(start + Duration::from_millis(100)));
        assert!(debounce.take_ready_at(start + WINDOW));
        // Consumed; nothing pending until the next touch.
        assert!(!debounce.take_ready_at(start + WINDOW * 2));
    }

    #[test]
    fn touch_restarts_the_window() {
        let mut debounce = Debounce::new(WINDOW);
        let start = Instant::now();
        debounce.touch_at(start);
        debounce.touch_at(start + Duration::from_millis(400));

        assert!(!debounce.take_ready_at(start + WINDOW));
        assert!(debounce.take_ready_at(start + Duration::from_millis(400) + WINDOW));
    }

    #[test]
    fn take_pending_cancels() {
        let mut debounce = Debounce::new(WINDOW);
        debounce.touch();
        assert!(debounce.take_pending());
        assert!(!debounce.is_pending());
        assert!(!debounce.take_pending());
    }
}
