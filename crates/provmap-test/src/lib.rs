//! provmap-test - Shared test support for the provmap workspace
//!
//! Builds small test maps from ASCII art and provides the assertions
//! the integration tests repeat. One character per pixel:
//!
//! | Character | Color |
//! |---|---|
//! | `#` or `.` | border (0, 0, 0) |
//! | `R` | red (255, 0, 0) |
//! | `G` | green (0, 255, 0) |
//! | `B` | blue (0, 0, 255) |
//! | `L` | teal (0, 180, 180) |
//! | `W` | white (255, 255, 255) |
//! | `Y` | yellow (255, 255, 0) |
//!
//! ```
//! use provmap_test::{RED, bitmap_from_rows};
//! use provmap_core::PixelGrid;
//!
//! let map = bitmap_from_rows(&["RR#", "RR#"]);
//! assert_eq!(map.width(), 3);
//! assert_eq!(map.color_at(0, 0), RED);
//! ```

use provmap_core::{Bitmap, Color, Shape};

pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const TEAL: Color = Color::new(0, 180, 180);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);

/// Build a bitmap from one string per pixel row.
///
/// # Panics
///
/// Panics on empty input, ragged rows, or characters outside the
/// mapping above; these are authoring mistakes in the test itself.
pub fn bitmap_from_rows(rows: &[&str]) -> Bitmap {
    assert!(!rows.is_empty(), "no rows");
    let width = rows[0].len();

    let mut pixels = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "row {y} has a different width");
        for c in row.chars() {
            pixels.push(color_for(c));
        }
    }

    Bitmap::from_pixels(width as u32, rows.len() as u32, pixels).expect("valid test bitmap")
}

fn color_for(c: char) -> Color {
    match c {
        '#' | '.' => Color::BORDER,
        'R' => RED,
        'G' => GREEN,
        'B' => BLUE,
        'L' => TEAL,
        'W' => WHITE,
        'Y' => YELLOW,
        other => panic!("unmapped test color character: {other:?}"),
    }
}

/// Assert that the shapes partition the image: every pixel appears in
/// exactly one shape's pixel list.
///
/// # Panics
///
/// Panics with the offending coordinates when a pixel is missing,
/// duplicated, or out of bounds.
pub fn assert_partition(grid: &Bitmap, shapes: &[Shape]) {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut seen = vec![0u32; width * height];

    for shape in shapes {
        for pixel in shape.pixels() {
            let (x, y) = (pixel.point.x as usize, pixel.point.y as usize);
            assert!(x < width && y < height, "pixel {} out of bounds", pixel.point);
            seen[y * width + x] += 1;
        }
    }

    for y in 0..height {
        for x in 0..width {
            let count = seen[y * width + x];
            assert_eq!(count, 1, "pixel ({x}, {y}) appears in {count} shapes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provmap_core::PixelGrid;

    #[test]
    fn test_bitmap_from_rows() {
        let map = bitmap_from_rows(&["#R", "G."]);
        assert_eq!(map.width(), 2);
        assert_eq!(map.height(), 2);
        assert_eq!(map.color_at(0, 0), Color::BORDER);
        assert_eq!(map.color_at(1, 0), RED);
        assert_eq!(map.color_at(0, 1), GREEN);
        assert_eq!(map.color_at(1, 1), Color::BORDER);
    }

    #[test]
    #[should_panic(expected = "different width")]
    fn test_ragged_rows_panic() {
        bitmap_from_rows(&["RR", "R"]);
    }
}
