//! Pre-computed static text and primitive styles.
//!
//! All styles are `const`, built at compile time and referenced directly
//! from the drawing code instead of being constructed every frame.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT};

use crate::colors::{CONSTELLATION_COLOR, STAR_COLOR, TEXT_COLOR};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered both ways. Used for the title card and the clock.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, anchored at the top-left corner. Used for words.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Text Styles
// =============================================================================

/// Title card text (`ProFont` 14pt).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, TEXT_COLOR);

/// Revealed words (`ProFont` 12pt).
pub const WORD_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, TEXT_COLOR);

/// Clock readout (`ProFont` 14pt).
pub const CLOCK_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, TEXT_COLOR);

// =============================================================================
// Primitive Styles
// =============================================================================

/// Filled square for a star.
pub const STAR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(STAR_COLOR);

/// One-pixel line between constellation points.
pub const CONSTELLATION_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(CONSTELLATION_COLOR, 1);
