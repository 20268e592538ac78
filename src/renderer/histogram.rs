//! Histogram layout for a data snapshot

use glam::Vec2;

use crate::engine::{HIGHLIGHT_SLOTS, Highlights};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn gray(level: u8) -> Self {
        Self(level, level, level)
    }

    /// CSS hex notation, e.g. `#336666`
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const BACKGROUND: Rgb = Rgb(0x33, 0x66, 0x66);
pub const TEXT: Rgb = Rgb(0xff, 0xff, 0xff);

/// Highlight colour per slot: red, green, blue
pub const SLOT_COLORS: [Rgb; HIGHLIGHT_SLOTS] = [
    Rgb(0x99, 0x33, 0x33),
    Rgb(0x33, 0x99, 0x33),
    Rgb(0x33, 0x33, 0x99),
];

/// Darkest bar shade; the largest value maps to white
const BASE_SHADE: f32 = 51.0;
const SHADE_RANGE: f32 = 205.0;
/// Horizontal gap as a fraction of the bar width
const MARGIN_RATIO: f32 = 0.1;

/// One filled rectangle; `origin` is the top-left corner in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub origin: Vec2,
    pub size: Vec2,
    pub color: Rgb,
}

/// Shade for `value` on a scale topped by `max`
fn shade(value: u32, max: u32) -> Rgb {
    let level = BASE_SHADE + SHADE_RANGE / max.max(1) as f32 * value as f32;
    Rgb::gray(level.clamp(0.0, 255.0) as u8)
}

/// Lay out one bar per element of `data` on a `width` x `height` surface.
///
/// Bars stand on the bottom edge. A value `v` is `v` units tall where one
/// unit is `height / (n + 1)`, so values `1..=n` never touch the top.
pub fn layout(width: f32, height: f32, data: &[u32], highlights: &Highlights) -> Vec<Bar> {
    let Some(&max) = data.iter().max() else {
        return Vec::new();
    };
    let n = data.len();
    let bar_width = width / n as f32;
    let unit = height / (n.max(max as usize) + 1) as f32;
    let margin = bar_width * MARGIN_RATIO;

    data.iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = highlights
                .slot_of(i)
                .map_or_else(|| shade(value, max), |slot| SLOT_COLORS[slot]);
            let bar_height = value as f32 * unit;
            Bar {
                origin: Vec2::new(i as f32 * bar_width + margin, height - bar_height),
                size: Vec2::new(bar_width - margin, bar_height),
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css() {
        assert_eq!(BACKGROUND.css(), "#336666");
        assert_eq!(SLOT_COLORS[2].css(), "#333399");
    }

    #[test]
    fn test_layout_geometry() {
        let bars = layout(400.0, 500.0, &[1, 4, 2, 3], &Highlights::NONE);
        assert_eq!(bars.len(), 4);

        // bar width 100, unit 100, margin 10
        assert_eq!(bars[0].origin, Vec2::new(10.0, 400.0));
        assert_eq!(bars[0].size, Vec2::new(90.0, 100.0));
        assert_eq!(bars[1].origin, Vec2::new(110.0, 100.0));
        assert_eq!(bars[1].size, Vec2::new(90.0, 400.0));
    }

    #[test]
    fn test_shades_scale_with_value() {
        let bars = layout(100.0, 100.0, &[1, 2, 4], &Highlights::NONE);
        assert_eq!(bars[2].color, Rgb::gray(255));
        assert!(bars[0].color.0 < bars[1].color.0);
        assert!(bars[0].color.0 > 51);
    }

    #[test]
    fn test_highlight_later_slot_wins() {
        let highlights = Highlights::new(Some(1), Some(1), Some(2));
        let bars = layout(100.0, 100.0, &[3, 1, 2], &highlights);
        assert_eq!(bars[0].color, Rgb::gray(255));
        assert_eq!(bars[1].color, SLOT_COLORS[1]);
        assert_eq!(bars[2].color, SLOT_COLORS[2]);
    }

    #[test]
    fn test_out_of_range_highlight_ignored() {
        let highlights = Highlights::new(Some(9), None, None);
        let bars = layout(100.0, 100.0, &[1, 2], &highlights);
        assert!(bars.iter().all(|bar| !SLOT_COLORS.contains(&bar.color)));
    }

    #[test]
    fn test_empty_data() {
        assert!(layout(100.0, 100.0, &[], &Highlights::NONE).is_empty());
    }
}
