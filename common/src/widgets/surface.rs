//! Retained-mode [`Surface`] rendered with embedded-graphics.
//!
//! The scheduler's show/hide calls only update fixed-capacity buffers and set
//! a dirty flag. The host calls [`DisplaySurface::render`] once per frame and
//! the whole scene is redrawn when something changed:
//!
//! 1. Background fill
//! 2. Star field and constellation
//! 3. Title card (if shown)
//! 4. Words (if any)
//! 5. Clock
//!
//! Buffers never grow. Showing more words than `NUM_WORD_SLOTS`, or text
//! longer than its capacity, fails with [`SurfaceError::OutOfResources`].

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::{String, Vec};

use crate::clock::ClockText;
use crate::colors::BACKGROUND;
use crate::config::{NUM_WORD_SLOTS, WORD_CAPACITY};
use crate::constellation::{Constellation, StarField};
use crate::error::SurfaceError;
use crate::names::TitleText;
use crate::surface::Surface;
use crate::widgets::primitives::{draw_clock, draw_constellation, draw_stars, draw_title, draw_word};

/// Text of one presented word.
pub type WordText = String<WORD_CAPACITY>;

/// Scene state plus a dirty flag, drawn on demand.
pub struct DisplaySurface {
    viewport: Size,
    stars: StarField,
    constellation: Constellation,
    title: Option<TitleText>,
    words: Vec<(WordText, Point), NUM_WORD_SLOTS>,
    clock: Option<ClockText>,
    dirty: bool,
}

impl DisplaySurface {
    /// Create an empty surface. The first render always draws.
    pub const fn new(viewport: Size) -> Self {
        Self {
            viewport,
            stars: StarField::new(),
            constellation: Constellation::new(),
            title: None,
            words: Vec::new(),
            clock: None,
            dirty: true,
        }
    }

    /// Whether the next [`render`](Self::render) will draw.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Force a full redraw on the next render.
    #[inline]
    pub fn mark_dirty(&mut self) { self.dirty = true; }

    #[inline]
    pub fn title(&self) -> Option<&str> { self.title.as_deref() }

    /// Words currently on screen, oldest first.
    pub fn words(&self) -> impl Iterator<Item = (&str, Point)> { self.words.iter().map(|(text, pos)| (text.as_str(), *pos)) }

    #[inline]
    pub fn clock(&self) -> Option<&str> { self.clock.as_deref() }

    /// Redraw the whole scene if anything changed. Returns `true` if it drew.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, SurfaceError>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.dirty {
            return Ok(false);
        }
        self.draw_scene(display).map_err(|_| SurfaceError::Draw)?;
        self.dirty = false;
        Ok(true)
    }

    fn draw_scene<D>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(BACKGROUND)?;
        draw_stars(display, &self.stars)?;
        draw_constellation(display, &self.constellation)?;
        if let Some(title) = &self.title {
            draw_title(display, title)?;
        }
        for (word, position) in self.words.iter() {
            draw_word(display, word, *position)?;
        }
        if let Some(clock) = &self.clock {
            draw_clock(display, clock)?;
        }
        Ok(())
    }
}

impl Surface for DisplaySurface {
    fn viewport(&self) -> Size { self.viewport }

    fn show_title(
        &mut self,
        text: &str,
    ) -> Result<(), SurfaceError> {
        let title = TitleText::try_from(text).map_err(|_| SurfaceError::OutOfResources)?;
        self.title = Some(title);
        self.dirty = true;
        Ok(())
    }

    fn hide_title(&mut self) -> Result<(), SurfaceError> {
        if self.title.take().is_some() {
            self.dirty = true;
        }
        Ok(())
    }

    fn show_word(
        &mut self,
        text: &str,
        position: Point,
    ) -> Result<(), SurfaceError> {
        let word = WordText::try_from(text).map_err(|_| SurfaceError::OutOfResources)?;
        self.words
            .push((word, position))
            .map_err(|_| SurfaceError::OutOfResources)?;
        self.dirty = true;
        Ok(())
    }

    fn hide_all_words(&mut self) -> Result<(), SurfaceError> {
        if !self.words.is_empty() {
            self.words.clear();
            self.dirty = true;
        }
        Ok(())
    }

    fn redraw_stars_and_constellation(
        &mut self,
        star_field: &[Point],
        constellation: &[Point],
    ) -> Result<(), SurfaceError> {
        self.stars = StarField::from_slice(star_field).map_err(|_| SurfaceError::OutOfResources)?;
        self.constellation = Constellation::from_slice(constellation).map_err(|_| SurfaceError::OutOfResources)?;
        self.dirty = true;
        Ok(())
    }

    fn show_clock(
        &mut self,
        time: &str,
    ) -> Result<(), SurfaceError> {
        let clock = ClockText::try_from(time).map_err(|_| SurfaceError::OutOfResources)?;
        if self.clock.as_ref() != Some(&clock) {
            self.clock = Some(clock);
            self.dirty = true;
        }
        Ok(())
    }
}
