use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            to_color32(hsl.into_color())
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Categorical colours: sector name → Color32
// ---------------------------------------------------------------------------

/// Assigns each category a distinct colour for the whole session.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Colours are handed out in the order of `categories`.
    pub fn new(categories: &[String]) -> Self {
        let palette = generate_palette(categories.len());
        let mapping = categories.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }
}

// ---------------------------------------------------------------------------
// Continuous scale: value → Color32
// ---------------------------------------------------------------------------

/// Plasma-like stops, dark purple to yellow.
const PLASMA: [(f32, f32, f32); 5] = [
    (0.050, 0.030, 0.528),
    (0.494, 0.012, 0.658),
    (0.798, 0.280, 0.470),
    (0.973, 0.585, 0.252),
    (0.940, 0.975, 0.131),
];

/// Maps numbers in `[min, max]` onto a colour gradient.
#[derive(Debug, Clone)]
pub struct ContinuousScale {
    min: f64,
    max: f64,
    stops: Vec<LinSrgb>,
}

impl ContinuousScale {
    /// A plasma scale spanning the given values.
    pub fn plasma(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let stops = PLASMA
            .iter()
            .map(|&(r, g, b)| -> LinSrgb { Srgb::new(r, g, b).into_color() })
            .collect();
        Self { min, max, stops }
    }

    /// Position of `value` in the range, 0.5 when the range is degenerate.
    pub fn position(&self, value: f64) -> f32 {
        let range = self.max - self.min;
        if !range.is_finite() || range.abs() < f64::EPSILON {
            return 0.5;
        }
        ((value - self.min) / range).clamp(0.0, 1.0) as f32
    }

    pub fn color_for(&self, value: f64) -> Color32 {
        let t = self.position(value) * (self.stops.len() - 1) as f32;
        let lower = (t.floor() as usize).min(self.stops.len() - 2);
        let mixed = self.stops[lower].mix(self.stops[lower + 1], t - lower as f32);
        to_color32(mixed.into_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colours() {
        let p = generate_palette(6);
        assert_eq!(p.len(), 6);
        for (i, a) in p.iter().enumerate() {
            assert!(p[i + 1..].iter().all(|b| a != b));
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn category_colours_are_stable() {
        let sectors: Vec<String> = ["Agriculture", "IT", "Retail"].map(String::from).to_vec();
        let map = ColorMap::new(&sectors);
        assert_eq!(map.color_for("IT"), map.color_for("IT"));
        assert_ne!(map.color_for("IT"), map.color_for("Retail"));
        assert_eq!(map.color_for("Mining"), Color32::GRAY);
    }

    #[test]
    fn scale_endpoints() {
        let scale = ContinuousScale::plasma([0.2, 0.4, 0.9]);
        assert_eq!(scale.position(0.2), 0.0);
        assert_eq!(scale.position(0.9), 1.0);
        assert_ne!(scale.color_for(0.2), scale.color_for(0.9));
    }

    #[test]
    fn flat_values_use_midpoint() {
        let scale = ContinuousScale::plasma([0.5, 0.5]);
        assert_eq!(scale.position(0.5), 0.5);
        let empty = ContinuousScale::plasma(std::iter::empty());
        assert_eq!(empty.position(1.0), 0.5);
    }
}
