//! Clock readout: `HH:MM` formatting and the once-per-minute trigger.
//!
//! Formatting is done with `core::fmt::Write` into a fixed-capacity string so
//! it works without an allocator.

use core::fmt::Write;

use heapless::String;

use crate::config::CLOCK_CAPACITY;

/// Formatted clock text.
pub type ClockText = String<CLOCK_CAPACITY>;

/// 12-hour or 24-hour display.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ClockFormat {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

impl ClockFormat {
    /// Switch to the other format.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::TwentyFourHour => Self::TwelveHour,
            Self::TwelveHour => Self::TwentyFourHour,
        }
    }
}

/// Format `hour:minute` as `%H:%M` or `%I:%M`.
pub fn format_clock(
    hour: u32,
    minute: u32,
    format: ClockFormat,
) -> ClockText {
    let hour = match format {
        ClockFormat::TwentyFourHour => hour % 24,
        ClockFormat::TwelveHour => match hour % 12 {
            0 => 12,
            h => h,
        },
    };
    let mut text = ClockText::new();
    // "HH:MM" always fits CLOCK_CAPACITY
    write!(text, "{:02}:{:02}", hour, minute % 60).ok();
    text
}

/// Reports when the wall-clock minute changes.
#[derive(Debug, Default)]
pub struct MinuteTicker {
    last_minute_of_day: Option<u32>,
}

impl MinuteTicker {
    pub const fn new() -> Self {
        Self {
            last_minute_of_day: None,
        }
    }

    /// Return `true` if `hour:minute` differs from the last observed minute.
    ///
    /// The first call always returns `true` so the clock is shown at start-up.
    pub fn poll(
        &mut self,
        hour: u32,
        minute: u32,
    ) -> bool {
        let minute_of_day = hour * 60 + minute;
        if self.last_minute_of_day == Some(minute_of_day) {
            false
        } else {
            self.last_minute_of_day = Some(minute_of_day);
            true
        }
    }
}
