use std::time::{Duration, Instant};

/// Advances a decoded frame sequence on a fixed interval.
///
/// The animator owns no frames itself, only the cursor over them. At most one
/// deadline is armed at any instant, and it is re-armed only after the frame
/// advance completes, so ticks can never stack up.
#[derive(Debug)]
pub struct FrameAnimator {
    frame_count: usize,
    current: usize,
    interval: Duration,
    next_due: Option<Instant>,
}

impl FrameAnimator {
    pub fn new(frame_count: usize, interval: Duration) -> Self {
        Self {
            frame_count,
            current: 0,
            interval,
            next_due: None,
        }
    }

    /// Arms the first tick. No-op for single-frame assets and when a tick is
    /// already pending.
    pub fn start(&mut self, now: Instant) {
        if self.frame_count <= 1 || self.next_due.is_some() {
            return;
        }
        self.next_due = Some(now + self.interval);
    }

    /// Cancels the pending tick. Safe to call repeatedly and from teardown.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn current_frame(&self) -> usize {
        self.current
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// Advances the frame if the deadline has passed. Returns whether the
    /// displayed frame changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.current = (self.current + 1) % self.frame_count;
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn run_ticks(animator: &mut FrameAnimator, start: Instant, n: u32) {
        for i in 1..=n {
            assert!(animator.tick(start + INTERVAL * i));
        }
    }

    #[test]
    fn ticks_advance_modulo_frame_count() {
        let start = Instant::now();
        let mut animator = FrameAnimator::new(4, INTERVAL);
        animator.start(start);

        run_ticks(&mut animator, start, 6);
        assert_eq!(animator.current_frame(), 2);
    }

    #[test]
    fn single_frame_never_arms() {
        let now = Instant::now();
        for count in [0, 1] {
            let mut animator = FrameAnimator::new(count, INTERVAL);
            animator.start(now);
            assert!(!animator.is_running());
            assert!(!animator.tick(now + INTERVAL));
            assert_eq!(animator.current_frame(), 0);
        }
    }

    #[test]
    fn start_is_single_shot_while_pending() {
        let start = Instant::now();
        let mut animator = FrameAnimator::new(3, INTERVAL);
        animator.start(start);
        let deadline = animator.next_deadline();

        // a second start must not move the pending deadline
        animator.start(start + Duration::from_millis(50));
        assert_eq!(animator.next_deadline(), deadline);
    }

    #[test]
    fn tick_before_deadline_does_nothing() {
        let start = Instant::now();
        let mut animator = FrameAnimator::new(3, INTERVAL);
        animator.start(start);

        assert!(!animator.tick(start + Duration::from_millis(10)));
        assert_eq!(animator.current_frame(), 0);
        assert!(animator.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let start = Instant::now();
        let mut animator = FrameAnimator::new(4, INTERVAL);
        animator.start(start);
        assert!(animator.is_running());

        animator.stop();
        assert!(!animator.is_running());
        animator.stop();
        assert!(!animator.is_running());

        // no further frame updates after stop
        assert!(!animator.tick(start + INTERVAL * 10));
        assert_eq!(animator.current_frame(), 0);
    }

    #[test]
    fn restart_after_stop_resumes_from_current_frame() {
        let start = Instant::now();
        let mut animator = FrameAnimator::new(4, INTERVAL);
        animator.start(start);
        run_ticks(&mut animator, start, 3);
        animator.stop();

        let resume = start + INTERVAL * 10;
        animator.start(resume);
        assert!(animator.tick(resume + INTERVAL));
        assert_eq!(animator.current_frame(), 0);
    }
}
