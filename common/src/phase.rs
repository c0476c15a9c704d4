//! Phases of the animation cycle.
//!
//! ```text
//! Start -> Title -> Blank1 -> Words -> Blank2 -+
//!   ^                                          |
//!   +------------------------------------------+
//! ```
//!
//! Phases only ever move forward; the only way back to [`Phase::Start`] is the
//! wrap from [`Phase::Blank2`].

use crate::config::{DWELL_BLANK_1, DWELL_BLANK_2, DWELL_START, DWELL_TITLE, DWELL_WORDS};

/// One state of the five-phase animation cycle.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Phase {
    /// Empty sky at the start of a cycle.
    #[default]
    Start,

    /// Constellation name shown on the title card.
    Title,

    /// Empty sky between the title and the words.
    Blank1,

    /// Words revealed one per tick.
    Words,

    /// Empty sky before the next cycle is generated.
    Blank2,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Self; 5] = [Self::Start, Self::Title, Self::Blank1, Self::Words, Self::Blank2];

    /// The phase that follows this one.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Start => Self::Title,
            Self::Title => Self::Blank1,
            Self::Blank1 => Self::Words,
            Self::Words => Self::Blank2,
            Self::Blank2 => Self::Start,
        }
    }

    /// Number of ticks spent in this phase.
    #[inline]
    pub const fn dwell(self) -> u32 {
        match self {
            Self::Start => DWELL_START,
            Self::Title => DWELL_TITLE,
            Self::Blank1 => DWELL_BLANK_1,
            Self::Words => DWELL_WORDS,
            Self::Blank2 => DWELL_BLANK_2,
        }
    }

    /// Short label for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Title => "title",
            Self::Blank1 => "blank-1",
            Self::Words => "words",
            Self::Blank2 => "blank-2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CYCLE_TICKS;

    #[test]
    fn test_phase_default() {
        assert_eq!(Phase::default(), Phase::Start);
    }

    #[test]
    fn test_phase_order() {
        assert_eq!(Phase::Start.next(), Phase::Title);
        assert_eq!(Phase::Title.next(), Phase::Blank1);
        assert_eq!(Phase::Blank1.next(), Phase::Words);
        assert_eq!(Phase::Words.next(), Phase::Blank2);
        assert_eq!(Phase::Blank2.next(), Phase::Start);
    }

    #[test]
    fn test_phase_cycle_wraps_after_five() {
        let mut phase = Phase::Start;
        for expected in Phase::ALL.iter().cycle().skip(1).take(10) {
            phase = phase.next();
            assert_eq!(phase, *expected);
        }
        assert_eq!(phase, Phase::Start);
    }

    #[test]
    fn test_dwell_sum_matches_cycle() {
        let total: u32 = Phase::ALL.iter().map(|p| p.dwell()).sum();
        assert_eq!(total, CYCLE_TICKS);
    }
}
