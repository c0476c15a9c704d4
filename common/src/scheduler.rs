//! Phase scheduler: the tick-driven state machine behind the animation.
//!
//! # Cycle
//!
//! | Phase  | Dwell | On exit |
//! |--------|-------|---------|
//! | Start  | 1 | generate a name, show the title card |
//! | Title  | 2 | hide the title card |
//! | Blank1 | 1 | - |
//! | Words  | `NUM_WORD_SLOTS` | hide all words |
//! | Blank2 | 2 | regenerate sky and word selection, redraw |
//!
//! Every tick increments the elapsed counter of the current phase. When it
//! reaches the phase's dwell the exit action runs, the next phase is entered
//! and the counter resets to zero.
//!
//! # Words Phase
//!
//! Entering Words reveals slot 0 and every following tick in the phase reveals
//! the next slot, so all `NUM_WORD_SLOTS` words are visible together for one
//! tick before the exit clears them in a single call.
//!
//! # Resource Ownership
//!
//! The title card is owned by Title and the words by Words. [`Scheduler::release`]
//! hides whatever the active phase still owns, so teardown at any point
//! leaves nothing on the surface and never hides anything twice. A released
//! scheduler stays released: later `activate` and `tick` calls do nothing.
//!
//! # Viewport
//!
//! Random coordinates are bounded by [`Surface::viewport`], queried every time
//! something is generated or placed. A viewport smaller than
//! `MIN_VIEWPORT_WIDTH` x `MIN_VIEWPORT_HEIGHT` fails with
//! [`ConfigError::ViewportTooSmall`] before anything is drawn.

use embedded_graphics::prelude::{Point, Size};

use crate::config::{MARGIN, MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH, NUM_WORD_SLOTS, WORD_LINE_HEIGHT};
use crate::constellation::{Constellation, StarField, generate_constellation, generate_star_field};
use crate::error::{AnimationError, ConfigError};
use crate::names::{ConstellationName, generate_name, title_text};
use crate::phase::Phase;
use crate::rng::RandomSource;
use crate::surface::Surface;
use crate::vocabulary::Vocabulary;
use crate::words::{WordSelection, select_words};

/// Random top-left corner for a revealed word.
///
/// Words may overlap each other or clip at the viewport edges.
///
/// # Panics
///
/// Panics if the viewport is narrower than 2 pixels or not taller than
/// `WORD_LINE_HEIGHT` (see `MIN_VIEWPORT_WIDTH` / `MIN_VIEWPORT_HEIGHT`).
pub fn word_position<R>(
    rng: &mut R,
    viewport: Size,
) -> Point
where
    R: RandomSource + ?Sized,
{
    let x = rng.next_uint(viewport.width / 2) as i32 + MARGIN;
    let y = rng.next_uint(viewport.height - WORD_LINE_HEIGHT) as i32 - 2 * MARGIN;
    Point::new(x, y)
}

/// Query the surface's viewport and reject one too small to place anything in.
fn surface_viewport<S>(surface: &S) -> Result<Size, ConfigError>
where
    S: Surface + ?Sized,
{
    let viewport = surface.viewport();
    if viewport.width < MIN_VIEWPORT_WIDTH || viewport.height < MIN_VIEWPORT_HEIGHT {
        return Err(ConfigError::ViewportTooSmall {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

/// Animation state: current phase, counters and everything generated for the cycle.
pub struct Scheduler<R> {
    rng: R,
    vocabulary: Vocabulary,

    phase: Phase,
    elapsed_ticks: u32,
    word_slot: usize,
    cycles: u32,
    initialized: bool,
    released: bool,

    star_field: StarField,
    constellation: Constellation,
    selection: WordSelection,
    name: ConstellationName,

    // Elements currently shown on the surface
    title_visible: bool,
    words_visible: usize,
}

impl<R: RandomSource> Scheduler<R> {
    /// Create a scheduler for the built-in vocabulary.
    pub fn new(rng: R) -> Result<Self, ConfigError> { Self::with_vocabulary(rng, Vocabulary::DEFAULT) }

    /// Create a scheduler drawing words and names from `vocabulary`.
    pub fn with_vocabulary(
        rng: R,
        vocabulary: Vocabulary,
    ) -> Result<Self, ConfigError> {
        if vocabulary.words.len() < NUM_WORD_SLOTS {
            return Err(ConfigError::VocabularyTooSmall {
                words: vocabulary.words.len(),
                slots: NUM_WORD_SLOTS,
            });
        }
        if vocabulary.prefixes.is_empty() {
            return Err(ConfigError::EmptyList("prefix"));
        }
        if vocabulary.postfixes.is_empty() {
            return Err(ConfigError::EmptyList("postfix"));
        }

        Ok(Self {
            rng,
            vocabulary,
            phase: Phase::Start,
            elapsed_ticks: 0,
            word_slot: 0,
            cycles: 0,
            initialized: false,
            released: false,
            star_field: StarField::new(),
            constellation: Constellation::new(),
            selection: WordSelection::new(),
            name: ConstellationName::new(),
            title_visible: false,
            words_visible: 0,
        })
    }

    /// Generate the first cycle and draw the sky. Later calls do nothing.
    ///
    /// Fails with [`ConfigError::ViewportTooSmall`] if the surface is too small.
    pub fn activate<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), AnimationError>
    where
        S: Surface + ?Sized,
    {
        if self.initialized || self.released {
            return Ok(());
        }
        self.regenerate(surface)?;
        self.initialized = true;
        log::info!("animation activated ({} word slots)", NUM_WORD_SLOTS);
        Ok(())
    }

    /// Advance the state machine by one tick.
    ///
    /// Returns the newly entered phase when a transition happened. Does
    /// nothing once the scheduler has been released.
    pub fn tick<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<Option<Phase>, AnimationError>
    where
        S: Surface + ?Sized,
    {
        if self.released {
            return Ok(None);
        }
        self.activate(surface)?;

        self.elapsed_ticks += 1;
        if self.elapsed_ticks < self.phase.dwell() {
            if self.phase == Phase::Words {
                self.reveal_next_word(surface)?;
            }
            return Ok(None);
        }

        self.exit_phase(surface)?;
        let from = self.phase;
        self.phase = self.phase.next();
        self.elapsed_ticks = 0;
        log::debug!("phase {} -> {}", from.name(), self.phase.name());
        self.enter_phase(surface)?;

        Ok(Some(self.phase))
    }

    /// Hide every element the active phase still owns and stop the scheduler.
    pub fn release<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), AnimationError>
    where
        S: Surface + ?Sized,
    {
        self.released = true;
        if self.title_visible {
            surface.hide_title()?;
            self.title_visible = false;
        }
        if self.words_visible > 0 {
            surface.hide_all_words()?;
            self.words_visible = 0;
        }
        self.word_slot = 0;
        Ok(())
    }

    fn enter_phase<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), AnimationError>
    where
        S: Surface + ?Sized,
    {
        if self.phase == Phase::Words {
            self.reveal_next_word(surface)?;
        }
        Ok(())
    }

    fn exit_phase<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), AnimationError>
    where
        S: Surface + ?Sized,
    {
        match self.phase {
            Phase::Start => {
                self.name = generate_name(&mut self.rng, self.vocabulary.prefixes, self.vocabulary.postfixes)?;
                let title = title_text(&self.name)?;
                surface.show_title(&title)?;
                self.title_visible = true;
                log::info!("constellation {}", self.name.as_str());
            }
            Phase::Title => {
                surface.hide_title()?;
                self.title_visible = false;
            }
            Phase::Blank1 => {}
            Phase::Words => {
                if self.words_visible > 0 {
                    surface.hide_all_words()?;
                }
                self.words_visible = 0;
                self.word_slot = 0;
            }
            Phase::Blank2 => {
                self.regenerate(surface)?;
                self.cycles = self.cycles.wrapping_add(1);
            }
        }
        Ok(())
    }

    fn reveal_next_word<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), AnimationError>
    where
        S: Surface + ?Sized,
    {
        let Some(&index) = self.selection.get(self.word_slot) else {
            return Ok(());
        };
        let Some(word) = self.vocabulary.words.get(index) else {
            return Ok(());
        };
        let viewport = surface_viewport(surface)?;
        let position = word_position(&mut self.rng, viewport);
        surface.show_word(word, position)?;
        self.words_visible += 1;
        self.word_slot += 1;
        log::debug!("word {} '{}' at {}, {}", self.word_slot, word, position.x, position.y);
        Ok(())
    }

    /// Replace the star field, constellation and word selection, then redraw.
    fn regenerate<S>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), AnimationError>
    where
        S: Surface + ?Sized,
    {
        let viewport = surface_viewport(surface)?;
        self.star_field = generate_star_field(&mut self.rng, viewport);
        self.constellation = generate_constellation(&mut self.rng, viewport);
        self.selection = select_words(&mut self.rng, self.vocabulary.words, NUM_WORD_SLOTS);
        surface.redraw_stars_and_constellation(&self.star_field, &self.constellation)?;
        log::debug!(
            "regenerated {} stars, {}-point constellation",
            self.star_field.len(),
            self.constellation.len()
        );
        Ok(())
    }

    #[inline]
    pub const fn phase(&self) -> Phase { self.phase }

    /// Ticks spent in the current phase.
    #[inline]
    pub const fn elapsed_ticks(&self) -> u32 { self.elapsed_ticks }

    /// Next word slot to reveal.
    #[inline]
    pub const fn word_slot(&self) -> usize { self.word_slot }

    /// Completed cycles since activation.
    #[inline]
    pub const fn cycles(&self) -> u32 { self.cycles }

    #[inline]
    pub const fn is_activated(&self) -> bool { self.initialized }

    #[inline]
    pub const fn is_released(&self) -> bool { self.released }

    #[inline]
    pub fn star_field(&self) -> &[Point] { &self.star_field }

    #[inline]
    pub fn constellation(&self) -> &[Point] { &self.constellation }

    /// Vocabulary indices for this cycle, in reveal order.
    #[inline]
    pub fn selection(&self) -> &[usize] { &self.selection }

    /// Name shown on the most recent title card.
    #[inline]
    pub fn name(&self) -> &str { &self.name }

    #[inline]
    pub const fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }
}
