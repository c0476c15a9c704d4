//! Tick timer for the phase scheduler.
//!
//! A one-shot deadline that the owner re-arms after each completed tick.
//! Re-arming from the completion path means there is never more than one
//! tick in flight, and a slow frame delays the next tick instead of queueing
//! several. Time is passed in as host milliseconds so the type works with any
//! clock (`std::time::Instant` in the simulator, a hardware timer on device).

/// One-shot timer re-armed by its owner.
#[derive(Debug)]
pub struct TickTimer {
    period_ms: u32,
    deadline_ms: Option<u64>,
    cancelled: bool,
}

impl TickTimer {
    /// Create a disarmed timer with the given period.
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            deadline_ms: None,
            cancelled: false,
        }
    }

    /// Timer period in milliseconds.
    #[inline]
    pub const fn period_ms(&self) -> u32 { self.period_ms }

    /// Schedule the next firing one period after `now_ms`.
    ///
    /// Does nothing if a firing is already pending or the timer was cancelled.
    pub fn arm(
        &mut self,
        now_ms: u64,
    ) {
        if self.cancelled || self.deadline_ms.is_some() {
            return;
        }
        self.deadline_ms = Some(now_ms + u64::from(self.period_ms));
    }

    /// Return `true` once when the pending deadline has passed, disarming the timer.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel the pending firing. Returns `true` only if a deadline was pending.
    ///
    /// A cancelled timer can never be armed again.
    pub fn cancel(&mut self) -> bool {
        self.cancelled = true;
        self.deadline_ms.take().is_some()
    }

    /// Whether a firing is pending.
    #[inline]
    pub const fn is_armed(&self) -> bool { self.deadline_ms.is_some() }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[inline]
    pub const fn is_cancelled(&self) -> bool { self.cancelled }
}
