//! Monochromatic palette generation and color-class tokens.
//!
//! Each recipe gets a white-to-brand gradient, one shade per step in
//! topological order. Steps that introduce ingredients draw the next shade;
//! the shade is shared with those ingredients through an opaque color-class
//! token.

use std::sync::atomic::{AtomicU64, Ordering};

use regex::Regex;

use super::LayoutError;

// ─── Constants ────────────────────────────────────────────────────────────────

/// Brand base color; palettes run from white down to this.
pub const BASE_COLOR: &str = "#aa5903";

const HEX_COLOR_RE: &str = "^#[0-9a-fA-F]{6}$";

static NEXT_CLASS_ID: AtomicU64 = AtomicU64::new(0);

// ─── Hex helpers ─────────────────────────────────────────────────────────────

fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let value = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0);
    (
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}

fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("{r:02x}{g:02x}{b:02x}")
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// Generate `n` hex colors interpolated linearly in RGB space between white
/// and `base`, ordered lightest to darkest. Endpoints are exact: index 0 is
/// `ffffff`, index n−1 is `base` without its `#`.
///
/// `base` must be a `#RRGGBB` string and `n` must be at least 2; degenerate
/// step counts are the caller's job to special-case.
pub fn monochromatic_palette(base: &str, n: usize) -> Result<Vec<String>, LayoutError> {
    let re = Regex::new(HEX_COLOR_RE).map_err(|e| LayoutError::InvalidBaseColor(e.to_string()))?;
    if !re.is_match(base) {
        return Err(LayoutError::InvalidBaseColor(base.to_string()));
    }
    if n < 2 {
        return Err(LayoutError::PaletteTooSmall(n));
    }

    let (base_r, base_g, base_b) = hex_to_rgb(base);
    let mut palette = Vec::with_capacity(n);
    for i in 0..n {
        // factor 0 = lightest, 1 = the base color itself
        let factor = i as f64 / (n - 1) as f64;
        let channel = |c: u8| -> u8 {
            (f64::from(c) + (255.0 - f64::from(c)) * (1.0 - factor)).round() as u8
        };
        palette.push(rgb_to_hex(channel(base_r), channel(base_g), channel(base_b)));
    }
    Ok(palette)
}

/// Return a fresh process-unique color-class token.
///
/// Tokens only need to be unique among the rule sets rendered into one page;
/// a shared counter covers every `calculate` call in the process.
pub fn color_class() -> String {
    let id = NEXT_CLASS_ID.fetch_add(1, Ordering::SeqCst);
    format!("c{id:x}")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_endpoints_exact() {
        let p = monochromatic_palette(BASE_COLOR, 5).unwrap();
        assert_eq!(p.first().map(String::as_str), Some("ffffff"));
        assert_eq!(p.last().map(String::as_str), Some("aa5903"));
    }

    #[test]
    fn test_palette_length_and_distinct() {
        let p = monochromatic_palette(BASE_COLOR, 8).unwrap();
        assert_eq!(p.len(), 8);
        let unique: HashSet<&String> = p.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_palette_ordered_lightest_to_darkest() {
        let p = monochromatic_palette(BASE_COLOR, 6).unwrap();
        let luminance = |hex: &str| {
            let (r, g, b) = hex_to_rgb(hex);
            u32::from(r) + u32::from(g) + u32::from(b)
        };
        for pair in p.windows(2) {
            assert!(luminance(&pair[0]) > luminance(&pair[1]), "{pair:?}");
        }
    }

    #[test]
    fn test_palette_two_steps() {
        let p = monochromatic_palette(BASE_COLOR, 2).unwrap();
        assert_eq!(p, vec!["ffffff".to_string(), "aa5903".to_string()]);
    }

    #[test]
    fn test_palette_deterministic() {
        let a = monochromatic_palette(BASE_COLOR, 7).unwrap();
        let b = monochromatic_palette(BASE_COLOR, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_palette_rejects_small_n() {
        assert!(matches!(
            monochromatic_palette(BASE_COLOR, 1),
            Err(LayoutError::PaletteTooSmall(1))
        ));
        assert!(matches!(
            monochromatic_palette(BASE_COLOR, 0),
            Err(LayoutError::PaletteTooSmall(0))
        ));
    }

    #[test]
    fn test_palette_rejects_malformed_base() {
        for bad in ["aa5903", "#aa590", "#aa59033", "#ggg903", ""] {
            assert!(
                matches!(
                    monochromatic_palette(bad, 3),
                    Err(LayoutError::InvalidBaseColor(_))
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(hex_to_rgb("#aa5903"), (0xaa, 0x59, 0x03));
        assert_eq!(rgb_to_hex(0xaa, 0x59, 0x03), "aa5903");
    }

    #[test]
    fn test_color_class_unique() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(color_class()));
        }
    }

    #[test]
    fn test_color_class_shape() {
        let c = color_class();
        assert!(c.starts_with('c'));
        assert!(c.len() > 1);
    }
}
