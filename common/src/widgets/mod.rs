//! Drawing code for the watchface.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so the same code
//! renders into the simulator window and a hardware framebuffer.

mod primitives;
mod surface;

pub use primitives::{draw_clock, draw_constellation, draw_stars, draw_title, draw_word};
pub use surface::{DisplaySurface, WordText};
