//! Minimal overlay drawing on 8-bit images.
//!
//! Shapes are outlines of a single pixel width. A shape that would leave the
//! image is not clipped; it is skipped and a warning is logged.

use log::warn;
use wormseg_core::{Error, Image, Point2i};

fn check_radius(radius: i32) -> Result<(), Error> {
    if radius < 0 {
        return Err(Error::InvalidParameter {
            name: "radius",
            reason: format!("must be non-negative, got {radius}"),
        });
    }
    Ok(())
}

/// Draws the outline of the square of half-size `radius` centred on `center`.
///
/// The square is drawn only when it lies strictly inside the image, not
/// touching the border row or column 0. Returns whether it was drawn.
pub fn draw_square_safe(
    img: &mut Image<u8>,
    center: Point2i,
    radius: i32,
    value: u8,
) -> Result<bool, Error> {
    check_radius(radius)?;
    let (w, h) = (img.width() as i64, img.height() as i64);
    let (cx, cy, r) = (center.x as i64, center.y as i64, radius as i64);
    if !(cx - r > 0 && cx + r < w && cy - r > 0 && cy + r < h) {
        warn!(
            "draw_square_safe: square at ({}, {}) radius {} is off the {}x{} image",
            center.x, center.y, radius, w, h
        );
        return Ok(false);
    }

    let (x0, x1) = (center.x - radius, center.x + radius);
    let (y0, y1) = (center.y - radius, center.y + radius);
    for x in x0..=x1 {
        img.put(x, y0, value);
        img.put(x, y1, value);
    }
    for y in y0..=y1 {
        img.put(x0, y, value);
        img.put(x1, y, value);
    }
    Ok(true)
}

/// Draws a midpoint-circle outline of `radius` around `center`.
///
/// Skipped with a warning unless the whole circle fits in the image.
pub fn draw_circle(
    img: &mut Image<u8>,
    center: Point2i,
    radius: i32,
    value: u8,
) -> Result<bool, Error> {
    check_radius(radius)?;
    let (w, h) = (img.width() as i64, img.height() as i64);
    let (cx, cy, r) = (center.x as i64, center.y as i64, radius as i64);
    let fits = cx - r >= 0 && cx + r < w && cy - r >= 0 && cy + r < h;
    if !fits {
        warn!(
            "draw_circle: circle at ({}, {}) radius {} leaves the {}x{} image",
            center.x,
            center.y,
            radius,
            img.width(),
            img.height()
        );
        return Ok(false);
    }

    let (cx, cy) = (center.x, center.y);
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        for (dx, dy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            img.put(cx + dx, cy + dy, value);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
    Ok(true)
}

/// Marks every point of `points` with a radius-1 circle.
///
/// Returns how many points were drawn; points too close to the border are
/// skipped.
pub fn draw_sequence(img: &mut Image<u8>, points: &[Point2i], value: u8) -> usize {
    let mut drawn = 0;
    for &p in points {
        if let Ok(true) = draw_circle(img, p, 1, value) {
            drawn += 1;
        }
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::{draw_circle, draw_sequence, draw_square_safe};
    use wormseg_core::{Error, Image, Point2i};

    fn lit(img: &Image<u8>) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..img.height() {
            for x in 0..img.width() {
                if img.get(x, y) == Some(&255) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn square_outline_inside() {
        let mut img = Image::new_fill(7, 7, 0u8);
        assert_eq!(draw_square_safe(&mut img, Point2i::new(3, 3), 2, 255), Ok(true));

        let on = lit(&img);
        assert_eq!(on.len(), 16);
        assert!(on.contains(&(1, 1)));
        assert!(on.contains(&(5, 5)));
        assert!(on.contains(&(3, 1)));
        assert_eq!(img.get(3, 3), Some(&0));
        assert_eq!(img.get(2, 2), Some(&0));
    }

    #[test]
    fn square_touching_border_is_skipped() {
        let mut img = Image::new_fill(7, 7, 0u8);
        assert_eq!(draw_square_safe(&mut img, Point2i::new(2, 3), 2, 255), Ok(false));
        assert_eq!(draw_square_safe(&mut img, Point2i::new(5, 3), 2, 255), Ok(false));
        assert_eq!(draw_square_safe(&mut img, Point2i::new(-10, 3), 2, 255), Ok(false));
        assert!(lit(&img).is_empty());
    }

    #[test]
    fn circle_outline_is_symmetric() {
        let mut img = Image::new_fill(11, 11, 0u8);
        assert_eq!(draw_circle(&mut img, Point2i::new(5, 5), 3, 255), Ok(true));

        for (x, y) in [(8, 5), (2, 5), (5, 8), (5, 2)] {
            assert_eq!(img.get(x, y), Some(&255), "({x}, {y})");
        }
        assert_eq!(img.get(5, 5), Some(&0));
        for (x, y) in lit(&img) {
            let d2 = (x as i32 - 5).pow(2) + (y as i32 - 5).pow(2);
            assert!((4..=16).contains(&d2), "({x}, {y}) at d2={d2}");
            assert_eq!(img.get(10 - x, y), Some(&255));
            assert_eq!(img.get(x, 10 - y), Some(&255));
        }
    }

    #[test]
    fn circle_leaving_image_is_skipped() {
        let mut img = Image::new_fill(5, 5, 0u8);
        assert_eq!(draw_circle(&mut img, Point2i::new(1, 2), 2, 255), Ok(false));
        assert!(lit(&img).is_empty());
        assert!(matches!(
            draw_circle(&mut img, Point2i::new(2, 2), -1, 255),
            Err(Error::InvalidParameter { name: "radius", .. })
        ));
    }

    #[test]
    fn extreme_points_are_skipped() {
        let mut img = Image::new_fill(10, 10, 0u8);
        let points = [
            Point2i::new(i32::MIN, 5),
            Point2i::new(i32::MAX, 5),
            Point2i::new(5, i32::MIN),
            Point2i::new(i32::MAX, i32::MAX),
        ];
        assert_eq!(draw_sequence(&mut img, &points, 255), 0);
        assert_eq!(
            draw_circle(&mut img, Point2i::new(5, 5), i32::MAX, 255),
            Ok(false)
        );
        assert_eq!(
            draw_square_safe(&mut img, Point2i::new(i32::MIN, i32::MAX), i32::MAX, 255),
            Ok(false)
        );
        assert!(lit(&img).is_empty());
    }

    #[test]
    fn sequence_skips_border_points() {
        let mut img = Image::new_fill(10, 10, 0u8);
        let points = [
            Point2i::new(3, 3),
            Point2i::new(6, 6),
            Point2i::new(0, 5),
            Point2i::new(12, 4),
        ];
        assert_eq!(draw_sequence(&mut img, &points, 255), 2);

        let on = lit(&img);
        assert_eq!(on.len(), 8);
        assert!(on.contains(&(4, 3)));
        assert!(on.contains(&(6, 5)));
        assert!(!on.iter().any(|&(x, _)| x == 0));
    }
}
