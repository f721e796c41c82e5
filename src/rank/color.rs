use ratatui::style::Color;

/// An RGB color with an alpha channel in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color at a different alpha
    pub fn fade(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Composite over a black terminal background. Terminal cells have no
    /// alpha channel, so fading scales the channels instead.
    pub fn to_color(self) -> Color {
        let a = self.a.clamp(0.0, 1.0);
        Color::Rgb(
            (self.r as f64 * a).round() as u8,
            (self.g as f64 * a).round() as u8,
            (self.b as f64 * a).round() as u8,
        )
    }
}

/// Color one rank position per subset slot: position 0 gets `highlight` at
/// full opacity, positions >= 1 get `base` fading linearly from near-full
/// down to `min_alpha` at the last position. `len` is the subset length;
/// the output aligns positionally with it.
pub fn assign_rank_colors(len: usize, highlight: Rgba, base: Rgba, min_alpha: f64) -> Vec<Rgba> {
    let span = 1.0 - min_alpha;
    // max(1, len - 1) keeps the two-element case exact and guards len == 1
    let divisor = len.saturating_sub(1).max(1) as f64;

    (0..len)
        .map(|i| {
            if i == 0 {
                highlight
            } else {
                let alpha = (1.0 - i as f64 * span / divisor).max(min_alpha);
                base.fade(alpha)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIGHLIGHT: Rgba = Rgba::opaque(255, 0, 0);
    const BASE: Rgba = Rgba::opaque(0, 0, 255);

    #[test]
    fn test_single_slot_is_highlight_only() {
        assert_eq!(assign_rank_colors(1, HIGHLIGHT, BASE, 0.15), vec![HIGHLIGHT]);
    }

    #[test]
    fn test_two_slots_hit_the_floor() {
        let colors = assign_rank_colors(2, HIGHLIGHT, BASE, 0.15);
        assert_eq!(colors[0], HIGHLIGHT);
        assert!((colors[1].a - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_fade_is_monotone_and_floored() {
        for len in [3usize, 10, 50] {
            let colors = assign_rank_colors(len, HIGHLIGHT, BASE, 0.15);
            assert_eq!(colors.len(), len);
            assert_eq!(colors[0], HIGHLIGHT);
            for i in 2..len {
                assert!(colors[i].a <= colors[i - 1].a);
                assert!(colors[i].a >= 0.15);
            }
            // last position lands exactly on the floor
            assert!((colors[len - 1].a - 0.15).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_subset_yields_no_colors() {
        assert!(assign_rank_colors(0, HIGHLIGHT, BASE, 0.15).is_empty());
    }

    #[test]
    fn test_fade_composites_toward_black() {
        let faded = BASE.fade(0.5).to_color();
        assert_eq!(faded, Color::Rgb(0, 0, 128));
    }
}
