//! Low-level drawing primitives for the sky and text.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, Rectangle};
use embedded_graphics::text::Text;

use crate::config::{CLOCK_HEIGHT, CLOCK_Y, STAR_SIZE};
use crate::styles::{
    CENTERED_MIDDLE,
    CLOCK_STYLE,
    CONSTELLATION_STROKE,
    STAR_FILL,
    TITLE_STYLE,
    TOP_LEFT,
    WORD_STYLE,
};

const STAR: Size = Size::new(STAR_SIZE, STAR_SIZE);

/// Draw every point as a small filled square with its top-left at the point.
pub fn draw_stars<D>(
    display: &mut D,
    stars: &[Point],
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for star in stars {
        Rectangle::new(*star, STAR).into_styled(STAR_FILL).draw(display)?;
    }
    Ok(())
}

/// Draw the constellation points and the polyline joining them in order.
pub fn draw_constellation<D>(
    display: &mut D,
    points: &[Point],
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_stars(display, points)?;
    for pair in points.windows(2) {
        Line::new(pair[0], pair[1])
            .into_styled(CONSTELLATION_STROKE)
            .draw(display)?;
    }
    Ok(())
}

/// Draw the title card centred on the display.
pub fn draw_title<D>(
    display: &mut D,
    text: &str,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let center = display.bounding_box().center();
    Text::with_text_style(text, center, TITLE_STYLE, CENTERED_MIDDLE).draw(display)?;
    Ok(())
}

/// Draw one word with its top-left corner at `position`.
pub fn draw_word<D>(
    display: &mut D,
    text: &str,
    position: Point,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, position, WORD_STYLE, TOP_LEFT).draw(display)?;
    Ok(())
}

/// Draw the clock centred in its box near the bottom of the display.
pub fn draw_clock<D>(
    display: &mut D,
    text: &str,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let center = Point::new(display.bounding_box().center().x, CLOCK_Y + CLOCK_HEIGHT as i32 / 2);
    Text::with_text_style(text, center, CLOCK_STYLE, CENTERED_MIDDLE).draw(display)?;
    Ok(())
}
