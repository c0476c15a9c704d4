//! Compile-time configuration for the watchface.
//!
//! All values are `const` and validated with `const` assertions where an
//! ordering or capacity relationship must hold. A misconfigured constant
//! fails the build instead of producing an out-of-bounds read at runtime.
//!
//! Timing values are plain milliseconds so this module stays free of any
//! platform time type. The simulator wraps them in `std::time::Duration`.

use crate::vocabulary::WORDS;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (rectangular watch display: 144x168).
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Margin around text areas, in pixels.
pub const MARGIN: i32 = 4;

/// Edge length of the filled square drawn for each star.
pub const STAR_SIZE: u32 = 2;

/// Top edge of the clock text box.
pub const CLOCK_Y: i32 = 144;

/// Height of the clock text box.
pub const CLOCK_HEIGHT: u32 = 20;

/// Height reserved at the bottom of the viewport when placing words.
pub const WORD_LINE_HEIGHT: u32 = 20;

/// Smallest viewport the generators can place points in.
///
/// Words are placed in `[0, h - WORD_LINE_HEIGHT)` and the constellation seed
/// in the central half, so both halves must be non-empty.
pub const MIN_VIEWPORT_WIDTH: u32 = 4;

/// See [`MIN_VIEWPORT_WIDTH`].
pub const MIN_VIEWPORT_HEIGHT: u32 = WORD_LINE_HEIGHT + 1;

const _: () = assert!(SCREEN_WIDTH >= MIN_VIEWPORT_WIDTH);
const _: () = assert!(SCREEN_HEIGHT >= MIN_VIEWPORT_HEIGHT);

// =============================================================================
// Animation Configuration
// =============================================================================

/// Number of words revealed per cycle (one per tick in the Words phase).
pub const NUM_WORD_SLOTS: usize = 8;

/// Number of background stars.
pub const NUM_STARS: usize = 40;

/// Upper bound on the number of points in a constellation.
pub const MAX_CONSTELLATION_STARS: usize = 16;

/// Lower bound on the number of points in a constellation.
pub const MIN_CONSTELLATION_STARS: usize = 4;

/// Exclusive bound on the per-axis offset between consecutive constellation points.
pub const MAX_STEP_OFFSET: u32 = 25;

/// Scheduler tick period in milliseconds.
pub const TICK_PERIOD_MS: u32 = 500;

const _: () = assert!(NUM_WORD_SLOTS <= WORDS.len());
const _: () = assert!(NUM_WORD_SLOTS > 0);
const _: () = assert!(MIN_CONSTELLATION_STARS < MAX_CONSTELLATION_STARS);
const _: () = assert!(TICK_PERIOD_MS > 0);

// =============================================================================
// Phase Dwell Table (in ticks)
// =============================================================================

/// Ticks spent in Start before the title card appears.
pub const DWELL_START: u32 = 1;

/// Ticks the title card stays on screen.
pub const DWELL_TITLE: u32 = 2;

/// Ticks of empty sky between the title and the first word.
pub const DWELL_BLANK_1: u32 = 1;

/// Ticks in the Words phase. One word is revealed per tick.
pub const DWELL_WORDS: u32 = NUM_WORD_SLOTS as u32;

/// Ticks of empty sky before the next cycle is generated.
pub const DWELL_BLANK_2: u32 = 2;

/// Length of one full animation cycle in ticks.
pub const CYCLE_TICKS: u32 = DWELL_START + DWELL_TITLE + DWELL_BLANK_1 + DWELL_WORDS + DWELL_BLANK_2;

const _: () = assert!(DWELL_START > 0);
const _: () = assert!(DWELL_TITLE > 0);
const _: () = assert!(DWELL_BLANK_1 > 0);
const _: () = assert!(DWELL_BLANK_2 > 0);

// =============================================================================
// Text Capacities
// =============================================================================

/// Capacity of a generated constellation name.
pub const NAME_CAPACITY: usize = 18;

/// Capacity of the title card text (`"NAME:\n"` plus the name).
pub const TITLE_CAPACITY: usize = 18;

/// Label shown above the constellation name on the title card.
pub const TITLE_LABEL: &str = "NAME:\n";

/// Capacity of one presented word.
pub const WORD_CAPACITY: usize = 16;

/// Capacity of the formatted clock (`"HH:MM"`).
pub const CLOCK_CAPACITY: usize = 8;

const _: () = assert!(TITLE_LABEL.len() < TITLE_CAPACITY);

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;
    use crate::vocabulary::{POSTFIXES, PREFIXES};

    #[test]
    fn test_cycle_length() {
        assert_eq!(CYCLE_TICKS, 1 + 2 + 1 + NUM_WORD_SLOTS as u32 + 2);
    }

    #[test]
    fn test_word_slots_fit_vocabulary() {
        assert!(NUM_WORD_SLOTS <= WORDS.len());
    }

    #[test]
    fn test_every_word_fits_capacity() {
        for word in WORDS {
            assert!(word.len() <= WORD_CAPACITY, "'{word}' exceeds WORD_CAPACITY");
        }
    }

    #[test]
    fn test_longest_title_fits_capacity() {
        let longest_prefix = PREFIXES.iter().map(|p| p.len()).max().unwrap();
        let longest_postfix = POSTFIXES.iter().map(|p| p.len()).max().unwrap();
        assert!(longest_prefix + longest_postfix <= NAME_CAPACITY);
        assert!(TITLE_LABEL.len() + longest_prefix + longest_postfix <= TITLE_CAPACITY);
    }

    #[test]
    fn test_screen_is_large_enough() {
        assert!(SCREEN_WIDTH >= MIN_VIEWPORT_WIDTH);
        assert!(SCREEN_HEIGHT >= MIN_VIEWPORT_HEIGHT);
    }
}
