use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::boundaries::AnnotatedFeature;
use crate::data::aggregate::group_thousands;

/// Number of fill classes on the map.
pub const CLASS_COUNT: usize = 6;

/// Fill for states without data.
pub const NO_DATA: Color32 = Color32::from_gray(200);

// ---------------------------------------------------------------------------
// Sequential palette
// ---------------------------------------------------------------------------

/// `n` shades of one hue, light to dark.
pub fn generate_ramp(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let t = if n == 1 { 1.0 } else { i as f32 / (n - 1) as f32 };
            let hsl = Hsl::new(212.0, 0.65, 0.88 - 0.58 * t);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Choropleth scale: intensity → Color32
// ---------------------------------------------------------------------------

/// Equal-width classes over the intensity range of one view.
#[derive(Debug, Clone)]
pub struct ChoroplethScale {
    min: f64,
    max: f64,
    ramp: Vec<Color32>,
}

impl ChoroplethScale {
    /// Build a scale over the features' intensities. `None` when no feature
    /// has data.
    pub fn from_features(features: &[AnnotatedFeature]) -> Option<Self> {
        let (min, max) = features
            .iter()
            .filter_map(|f| f.intensity)
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;
        Some(ChoroplethScale {
            min,
            max,
            ramp: generate_ramp(CLASS_COUNT),
        })
    }

    fn class_of(&self, value: f64) -> usize {
        let span = self.max - self.min;
        if span <= f64::EPSILON {
            return CLASS_COUNT - 1;
        }
        let class = ((value - self.min) / span * CLASS_COUNT as f64).floor() as usize;
        class.min(CLASS_COUNT - 1)
    }

    pub fn color_for(&self, value: Option<f64>) -> Color32 {
        value.map_or(NO_DATA, |v| self.ramp[self.class_of(v)])
    }

    /// Legend entries (value range → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        let width = (self.max - self.min) / CLASS_COUNT as f64;
        self.ramp
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let lo = self.min + width * i as f64;
                let hi = lo + width;
                let label = format!(
                    "{} – {}",
                    group_thousands(lo.round() as i64),
                    group_thousands(hi.round() as i64)
                );
                (label, c)
            })
            .collect()
    }
}
