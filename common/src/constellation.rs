//! Star field and constellation generation.
//!
//! The star field is uniform noise over the whole viewport. The constellation
//! is a random walk: a seed point in the central half of the viewport, then
//! each following point is the previous one moved by up to
//! [`MAX_STEP_OFFSET`] - 1 pixels along each axis in a random direction.
//!
//! Walk points are not clamped and may leave the viewport. Drawing simply
//! clips them.

use embedded_graphics::prelude::{Point, Size};
use heapless::Vec;

use crate::config::{MAX_CONSTELLATION_STARS, MAX_STEP_OFFSET, MIN_CONSTELLATION_STARS, NUM_STARS};
use crate::rng::RandomSource;

/// Background stars, regenerated every cycle.
pub type StarField = Vec<Point, NUM_STARS>;

/// Constellation polyline, regenerated every cycle.
pub type Constellation = Vec<Point, MAX_CONSTELLATION_STARS>;

/// Generate `NUM_STARS` points uniformly inside the viewport.
///
/// # Panics
///
/// Panics if either viewport dimension is zero.
pub fn generate_star_field<R>(
    rng: &mut R,
    viewport: Size,
) -> StarField
where
    R: RandomSource + ?Sized,
{
    let mut stars = StarField::new();
    while !stars.is_full() {
        let star = Point::new(
            rng.next_uint(viewport.width) as i32,
            rng.next_uint(viewport.height) as i32,
        );
        stars.push(star).ok();
    }
    stars
}

/// Generate a random-walk constellation inside (or around) the viewport.
///
/// The length is `MIN_CONSTELLATION_STARS + next_uint(MAX - MIN)`, so it lies in
/// `[MIN_CONSTELLATION_STARS, MAX_CONSTELLATION_STARS)`.
///
/// # Panics
///
/// Panics if either viewport dimension is below 2, since the seed point is
/// drawn from the central half.
pub fn generate_constellation<R>(
    rng: &mut R,
    viewport: Size,
) -> Constellation
where
    R: RandomSource + ?Sized,
{
    let span = (MAX_CONSTELLATION_STARS - MIN_CONSTELLATION_STARS) as u32;
    let len = rng.next_uint(span) as usize + MIN_CONSTELLATION_STARS;

    let mut points = Constellation::new();
    let mut star = Point::new(
        (rng.next_uint(viewport.width / 2) + viewport.width / 4) as i32,
        (rng.next_uint(viewport.height / 2) + viewport.height / 4) as i32,
    );
    points.push(star).ok();

    for _ in 1..len {
        let offset = Point::new(signed_offset(rng), signed_offset(rng));
        star += offset;
        log::debug!("offsets: {}, {} -> star {}, {}", offset.x, offset.y, star.x, star.y);
        points.push(star).ok();
    }

    points
}

/// One axis of a walk step: magnitude in `[0, MAX_STEP_OFFSET)`, random sign.
fn signed_offset<R>(rng: &mut R) -> i32
where
    R: RandomSource + ?Sized,
{
    let magnitude = rng.next_uint(MAX_STEP_OFFSET) as i32;
    if rng.coin_flip() { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::rng::SeededRng;

    const VIEWPORT: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    #[test]
    fn test_star_field_size_and_bounds() {
        let mut rng = SeededRng::from_seed(21);
        for _ in 0..200 {
            let stars = generate_star_field(&mut rng, VIEWPORT);
            assert_eq!(stars.len(), NUM_STARS);
            for star in stars.iter() {
                assert!((0..SCREEN_WIDTH as i32).contains(&star.x));
                assert!((0..SCREEN_HEIGHT as i32).contains(&star.y));
            }
        }
    }

    #[test]
    fn test_constellation_length_bounds() {
        let mut rng = SeededRng::from_seed(4);
        let mut seen_min = false;
        for _ in 0..5_000 {
            let points = generate_constellation(&mut rng, VIEWPORT);
            assert!(points.len() >= MIN_CONSTELLATION_STARS);
            assert!(points.len() <= MAX_CONSTELLATION_STARS);
            seen_min |= points.len() == MIN_CONSTELLATION_STARS;
        }
        assert!(seen_min, "shortest constellation never generated");
    }

    #[test]
    fn test_constellation_steps_are_bounded() {
        let mut rng = SeededRng::from_seed(9);
        for _ in 0..2_000 {
            let points = generate_constellation(&mut rng, VIEWPORT);
            for pair in points.windows(2) {
                let dx = (pair[1].x - pair[0].x).abs();
                let dy = (pair[1].y - pair[0].y).abs();
                assert!(dx <= 25, "dx = {dx}");
                assert!(dy <= 25, "dy = {dy}");
            }
        }
    }

    #[test]
    fn test_constellation_seed_in_central_half() {
        let mut rng = SeededRng::from_seed(13);
        let (w, h) = (SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32);
        for _ in 0..2_000 {
            let first = generate_constellation(&mut rng, VIEWPORT)[0];
            assert!(first.x >= w / 4 && first.x < w / 4 + w / 2, "x = {}", first.x);
            assert!(first.y >= h / 4 && first.y < h / 4 + h / 2, "y = {}", first.y);
        }
    }

    #[test]
    fn test_walk_moves_in_both_directions() {
        let mut rng = SeededRng::from_seed(17);
        let (mut left, mut right) = (false, false);
        for _ in 0..500 {
            let points = generate_constellation(&mut rng, VIEWPORT);
            for pair in points.windows(2) {
                left |= pair[1].x < pair[0].x;
                right |= pair[1].x > pair[0].x;
            }
        }
        assert!(left && right);
    }

    #[test]
    fn test_regeneration_differs() {
        let mut rng = SeededRng::from_seed(2);
        let a = generate_star_field(&mut rng, VIEWPORT);
        let b = generate_star_field(&mut rng, VIEWPORT);
        assert_ne!(a, b);
    }
}
