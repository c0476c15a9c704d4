//! Recording surface shared by the scheduler and controller tests.

use embedded_graphics::prelude::{Point, Size};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::SurfaceError;
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ShowTitle(String),
    HideTitle,
    ShowWord(String, Point),
    HideAllWords,
    Redraw { stars: usize, constellation: usize },
    ShowClock(String),
}

/// Surface that records every call and tracks live elements.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    pub title: Option<String>,
    pub words: Vec<String>,
    pub clock: Option<String>,
    /// Fail the next `show_word` once this many words are live.
    pub word_limit: Option<usize>,
    /// Reported viewport, the full screen when `None`.
    pub viewport: Option<Size>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn with_viewport(viewport: Size) -> Self {
        Self {
            viewport: Some(viewport),
            ..Self::default()
        }
    }

    pub fn count(
        &self,
        pred: impl Fn(&Call) -> bool,
    ) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn clear_calls(&mut self) { self.calls.clear(); }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Size { self.viewport.unwrap_or(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    fn show_title(
        &mut self,
        text: &str,
    ) -> Result<(), SurfaceError> {
        assert!(self.title.is_none(), "title shown twice");
        self.title = Some(text.to_string());
        self.calls.push(Call::ShowTitle(text.to_string()));
        Ok(())
    }

    fn hide_title(&mut self) -> Result<(), SurfaceError> {
        assert!(self.title.take().is_some(), "title hidden while not shown");
        self.calls.push(Call::HideTitle);
        Ok(())
    }

    fn show_word(
        &mut self,
        text: &str,
        position: Point,
    ) -> Result<(), SurfaceError> {
        if self.word_limit.is_some_and(|limit| self.words.len() >= limit) {
            return Err(SurfaceError::OutOfResources);
        }
        self.words.push(text.to_string());
        self.calls.push(Call::ShowWord(text.to_string(), position));
        Ok(())
    }

    fn hide_all_words(&mut self) -> Result<(), SurfaceError> {
        assert!(!self.words.is_empty(), "words hidden while none shown");
        self.words.clear();
        self.calls.push(Call::HideAllWords);
        Ok(())
    }

    fn redraw_stars_and_constellation(
        &mut self,
        star_field: &[Point],
        constellation: &[Point],
    ) -> Result<(), SurfaceError> {
        self.calls.push(Call::Redraw {
            stars: star_field.len(),
            constellation: constellation.len(),
        });
        Ok(())
    }

    fn show_clock(
        &mut self,
        time: &str,
    ) -> Result<(), SurfaceError> {
        self.clock = Some(time.to_string());
        self.calls.push(Call::ShowClock(time.to_string()));
        Ok(())
    }
}
