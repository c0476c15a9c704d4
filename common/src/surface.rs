//! Boundary between the animation core and whatever draws the pixels.
//!
//! The scheduler only ever talks to a [`Surface`]. Each `show_*` call creates
//! a visual element owned by the current phase and every one of them has a
//! matching `hide_*` call on the exit or teardown path.

use embedded_graphics::prelude::{Point, Size};

use crate::error::SurfaceError;

/// Presentation surface driven by the scheduler.
pub trait Surface {
    /// Size of the drawable area. Bounds all random coordinates.
    fn viewport(&self) -> Size;

    /// Show the title card with `text`.
    fn show_title(
        &mut self,
        text: &str,
    ) -> Result<(), SurfaceError>;

    /// Remove the title card.
    fn hide_title(&mut self) -> Result<(), SurfaceError>;

    /// Add one word with its top-left corner at `position`.
    fn show_word(
        &mut self,
        text: &str,
        position: Point,
    ) -> Result<(), SurfaceError>;

    /// Remove every word shown since the last call.
    fn hide_all_words(&mut self) -> Result<(), SurfaceError>;

    /// Replace the background with a new star field and constellation.
    fn redraw_stars_and_constellation(
        &mut self,
        star_field: &[Point],
        constellation: &[Point],
    ) -> Result<(), SurfaceError>;

    /// Show the formatted wall-clock time.
    fn show_clock(
        &mut self,
        time: &str,
    ) -> Result<(), SurfaceError>;
}
