//! Color constants for the watchface.
//!
//! Colors are `Rgb565`, the native format of small SPI displays, so the
//! same values work in the simulator and on hardware.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red (0-31), 6 bits green (0-63),
//! 5 bits blue (0-31).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure white. Stars, constellation lines and all text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Deep night-sky blue (about #000055). Background on color panels.
/// RGB565: (0, 0, 10).
pub const OXFORD_BLUE: Rgb565 = Rgb565::new(0, 0, 10);

/// Background fill behind the sky.
pub const BACKGROUND: Rgb565 = OXFORD_BLUE;

/// Color of stars and constellation points.
pub const STAR_COLOR: Rgb565 = WHITE;

/// Color of the lines joining constellation points.
pub const CONSTELLATION_COLOR: Rgb565 = WHITE;

/// Color of the title, words and clock.
pub const TEXT_COLOR: Rgb565 = WHITE;
