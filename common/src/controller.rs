//! Animation controller: ties the scheduler to its timers.
//!
//! The host calls [`AnimationController::poll`] from its main loop with a
//! monotonic millisecond count and [`AnimationController::on_wall_clock`]
//! with the local time. Both run on the same thread, one after the other,
//! so the scheduler never sees a re-entrant call.
//!
//! # Lifecycle
//!
//! ```text
//! new -> activate -> poll/on_wall_clock ... -> teardown
//! ```
//!
//! After [`teardown`](AnimationController::teardown) the tick timer is
//! cancelled and every call is a no-op.

use crate::clock::{ClockFormat, MinuteTicker, format_clock};
use crate::config::TICK_PERIOD_MS;
use crate::error::AnimationError;
use crate::phase::Phase;
use crate::rng::RandomSource;
use crate::scheduler::Scheduler;
use crate::surface::Surface;
use crate::timer::TickTimer;

/// Owns the scheduler, the tick timer and the minute clock.
pub struct AnimationController<R> {
    scheduler: Scheduler<R>,
    timer: TickTimer,
    minutes: MinuteTicker,
    clock_format: ClockFormat,
    last_time: Option<(u32, u32)>,
    torn_down: bool,
}

impl<R: RandomSource> AnimationController<R> {
    pub fn new(scheduler: Scheduler<R>) -> Self {
        Self {
            scheduler,
            timer: TickTimer::new(TICK_PERIOD_MS),
            minutes: MinuteTicker::new(),
            clock_format: ClockFormat::default(),
            last_time: None,
            torn_down: false,
        }
    }

    /// Set the initial clock format.
    #[must_use]
    pub fn with_clock_format(
        mut self,
        format: ClockFormat,
    ) -> Self {
        self.clock_format = format;
        self
    }

    /// Generate the first sky and arm the tick timer.
    pub fn activate<S>(
        &mut self,
        now_ms: u64,
        surface: &mut S,
    ) -> Result<(), AnimationError>
    where
        S: Surface + ?Sized,
    {
        if self.torn_down || self.scheduler.is_activated() {
            return Ok(());
        }
        self.scheduler.activate(surface)?;
        self.timer.arm(now_ms);
        Ok(())
    }

    /// Run one scheduler tick if the timer has fired, then re-arm it.
    pub fn poll<S>(
        &mut self,
        now_ms: u64,
        surface: &mut S,
    ) -> Result<Option<Phase>, AnimationError>
    where
        S: Surface + ?Sized,
    {
        if self.torn_down || !self.timer.poll(now_ms) {
            return Ok(None);
        }
        let transition = self.scheduler.tick(surface)?;
        self.timer.arm(now_ms);
        Ok(transition)
    }

    /// Show the clock if the wall-clock minute changed. Never touches the phase.
    ///
    /// Returns `true` when the clock was redrawn.
    pub fn on_wall_clock<S>(
        &mut self,
        hour: u32,
        minute: u32,
        surface: &mut S,
    ) -> Result<bool, AnimationError>
    where
        S: Surface + ?Sized,
    {
        if self.torn_down || !self.minutes.poll(hour, minute) {
            return Ok(false);
        }
        self.last_time = Some((hour, minute));
        surface.show_clock(&format_clock(hour, minute, self.clock_format))?;
        log::info!("updating time");
        Ok(true)
    }

    /// Switch between 12-hour and 24-hour display and redraw the clock.
    pub fn toggle_clock_format<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<ClockFormat, AnimationError>
    where
        S: Surface + ?Sized,
    {
        self.clock_format = self.clock_format.toggle();
        if !self.torn_down
            && let Some((hour, minute)) = self.last_time
        {
            surface.show_clock(&format_clock(hour, minute, self.clock_format))?;
        }
        Ok(self.clock_format)
    }

    /// Cancel the tick timer and release everything the active phase owns.
    ///
    /// Safe to call more than once; only the first call has any effect.
    pub fn teardown<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), AnimationError>
    where
        S: Surface + ?Sized,
    {
        if self.torn_down {
            return Ok(());
        }
        self.torn_down = true;
        if self.timer.cancel() {
            log::debug!("tick timer cancelled");
        }
        self.scheduler.release(surface)?;
        log::info!(
            "animation torn down in phase {} after {} cycles",
            self.scheduler.phase().name(),
            self.scheduler.cycles()
        );
        Ok(())
    }

    #[inline]
    pub const fn scheduler(&self) -> &Scheduler<R> { &self.scheduler }

    #[inline]
    pub const fn timer(&self) -> &TickTimer { &self.timer }

    #[inline]
    pub const fn clock_format(&self) -> ClockFormat { self.clock_format }

    #[inline]
    pub const fn is_torn_down(&self) -> bool { self.torn_down }
}
