//! Province classification from source colors
//!
//! Map authors signal the province kind through the color family they
//! paint with: blue-dominant colors are open sea, blue-green ties are
//! lakes, and everything else is land. Pure grays (including the
//! border color itself) carry no classification.

use provmap_core::{Color, ProvinceType};

/// Classify a source color into a province kind.
///
/// Deterministic and total:
///
/// - `r == g == b` (grays, border) is `Unknown`
/// - a strictly dominant blue channel is `Sea`
/// - `b == g > r` (teal) is `Lake`
/// - everything else is `Land`
pub fn classify(color: Color) -> ProvinceType {
    if color.r == color.g && color.g == color.b {
        ProvinceType::Unknown
    } else if color.b > color.r && color.b > color.g {
        ProvinceType::Sea
    } else if color.b == color.g && color.b > color.r {
        ProvinceType::Lake
    } else {
        ProvinceType::Land
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_land_colors() {
        assert_eq!(classify(Color::new(255, 0, 0)), ProvinceType::Land);
        assert_eq!(classify(Color::new(120, 200, 40)), ProvinceType::Land);
        assert_eq!(classify(Color::new(200, 180, 120)), ProvinceType::Land);
    }

    #[test]
    fn test_sea_colors() {
        assert_eq!(classify(Color::new(0, 0, 255)), ProvinceType::Sea);
        assert_eq!(classify(Color::new(20, 60, 200)), ProvinceType::Sea);
    }

    #[test]
    fn test_lake_colors() {
        assert_eq!(classify(Color::new(0, 180, 180)), ProvinceType::Lake);
        assert_eq!(classify(Color::new(60, 140, 140)), ProvinceType::Lake);
    }

    #[test]
    fn test_grays_are_unknown() {
        assert_eq!(classify(Color::BORDER), ProvinceType::Unknown);
        assert_eq!(classify(Color::new(128, 128, 128)), ProvinceType::Unknown);
        assert_eq!(classify(Color::new(255, 255, 255)), ProvinceType::Unknown);
    }
}
