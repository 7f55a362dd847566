//! Cancellable one-shot timers
//!
//! Widgets that need delayed behavior (toast auto-dismissal, enter-phase
//! settling) own timers as explicit resources: scheduling returns a
//! [`TimerToken`] handle, and the owner cancels it deterministically when the
//! widget is removed. A fired or cancelled token can never fire again, so a
//! removal racing a pending deadline cannot call back for a dead id.
//!
//! The queue is driven cooperatively: the host calls [`TimerQueue::poll`]
//! with the current instant from its single event loop. No threads, no
//! shared mutable timer state between entries.

use std::time::Instant;

/// Handle to a scheduled timer.
///
/// Tokens are unique for the lifetime of the queue; they are never reused,
/// so holding a stale token is harmless (cancel becomes a no-op).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    token: TimerToken,
    deadline: Instant,
}

/// A queue of cancellable one-shot timers.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<TimerEntry>,
    next_token: u64,
}

impl TimerQueue {
    /// Create a new empty timer queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.entries.push(TimerEntry { token, deadline });
        token
    }

    /// Cancel a pending timer.
    ///
    /// Returns `true` if the timer was still pending. Cancelling a token
    /// that already fired or was already cancelled is a silent no-op.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.token == token) {
            self.entries.swap_remove(pos);
            true
        } else {
            false
        }
    }

    /// Whether a timer is still pending.
    pub fn is_scheduled(&self, token: TimerToken) -> bool {
        self.entries.iter().any(|e| e.token == token)
    }

    /// Collect all timers whose deadline is at or before `now`.
    ///
    /// Fired timers are removed from the queue and returned in deadline
    /// order; each token is returned exactly once over the queue's lifetime.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut fired: Vec<TimerEntry> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].deadline <= now {
                fired.push(self.entries.swap_remove(i));
            } else {
                i += 1;
            }
        }
        // Tie-break equal deadlines by scheduling order.
        fired.sort_by(|a, b| {
            a.deadline
                .cmp(&b.deadline)
                .then(a.token.0.cmp(&b.token.0))
        });
        fired.into_iter().map(|e| e.token).collect()
    }

    /// The earliest pending deadline, if any.
    ///
    /// Hosts use this to decide when to wake up and poll again.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancel all pending timers.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = TimerQueue::new();
        assert!(queue.is_empty());
        assert!(queue.next_deadline().is_none());
    }

    #[test]
    fn poll_fires_in_deadline_order_regardless_of_schedule_order() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();

        let slow = queue.schedule(base + ms(3000));
        let fast = queue.schedule(base + ms(1000));

        assert_eq!(queue.poll(base + ms(500)), vec![]);
        assert_eq!(queue.poll(base + ms(1000)), vec![fast]);
        assert_eq!(queue.poll(base + ms(3000)), vec![slow]);
        assert!(queue.is_empty());
    }

    #[test]
    fn fired_tokens_never_fire_again() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();

        let token = queue.schedule(base + ms(10));
        assert_eq!(queue.poll(base + ms(10)), vec![token]);
        assert_eq!(queue.poll(base + ms(10_000)), vec![]);
    }

    #[test]
    fn cancel_is_idempotent() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();

        let token = queue.schedule(base + ms(10));
        assert!(queue.cancel(token));
        assert!(!queue.cancel(token));
        assert_eq!(queue.poll(base + ms(10)), vec![]);
    }

    #[test]
    fn cancelled_timer_does_not_fire() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();

        let keep = queue.schedule(base + ms(10));
        let drop = queue.schedule(base + ms(10));
        queue.cancel(drop);

        assert_eq!(queue.poll(base + ms(10)), vec![keep]);
    }

    #[test]
    fn next_deadline_tracks_earliest_entry() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();

        queue.schedule(base + ms(300));
        let early = queue.schedule(base + ms(100));
        assert_eq!(queue.next_deadline(), Some(base + ms(100)));

        queue.cancel(early);
        assert_eq!(queue.next_deadline(), Some(base + ms(300)));
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();

        let first = queue.schedule(base + ms(50));
        let second = queue.schedule(base + ms(50));
        assert_eq!(queue.poll(base + ms(50)), vec![first, second]);
    }
}
