//! Tunables for draws and rune casts.
//!
//! Builders clamp their input and replace NaN or infinite values with the
//! default, so a configuration built through them is always usable.

/// `value` if it is finite, otherwise `fallback`.
fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Configuration for seeded draws.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    /// Probability that an orientation-capable card is drawn reversed.
    pub reversal_chance: f64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            reversal_chance: 0.3,
        }
    }
}

impl DrawConfig {
    /// Set the reversal probability (clamped to 0.0-1.0).
    pub fn with_reversal_chance(mut self, chance: f64) -> Self {
        self.reversal_chance =
            finite_or(chance, Self::default().reversal_chance).clamp(0.0, 1.0);
        self
    }
}

/// Configuration for a rune cast on a square canvas measured in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct CastConfig {
    /// Two runes at most this far apart share a cluster.
    pub cluster_threshold: f64,
    /// Runes closer than this to the centre are in the inner zone.
    pub inner_radius: f64,
    /// Runes closer than this (but not inner) are in the middle zone.
    pub middle_radius: f64,
    /// Lowest x/y coordinate a rune can land on.
    pub margin_min: f64,
    /// Highest x/y coordinate a rune can land on.
    pub margin_max: f64,
    /// Maximum absolute rotation in degrees.
    pub max_rotation: f64,
    /// Probability that a reversible rune lands merkstave.
    pub merkstave_chance: f64,
}

impl Default for CastConfig {
    fn default() -> Self {
        Self {
            cluster_threshold: 15.0,
            inner_radius: 15.0,
            middle_radius: 30.0,
            margin_min: 10.0,
            margin_max: 90.0,
            max_rotation: 45.0,
            merkstave_chance: 0.5,
        }
    }
}

impl CastConfig {
    /// Canvas centre, on both axes.
    pub const CENTER: f64 = 50.0;

    /// Set the cluster distance threshold (non-negative).
    pub fn with_cluster_threshold(mut self, threshold: f64) -> Self {
        self.cluster_threshold =
            finite_or(threshold, Self::default().cluster_threshold).max(0.0);
        self
    }

    /// Set the inner and middle zone radii. The middle radius never falls below the inner one.
    pub fn with_zones(mut self, inner: f64, middle: f64) -> Self {
        let defaults = Self::default();
        self.inner_radius = finite_or(inner, defaults.inner_radius).max(0.0);
        self.middle_radius = finite_or(middle, defaults.middle_radius).max(self.inner_radius);
        self
    }

    /// Set the landing area, clamped to the 0-100 canvas.
    pub fn with_margins(mut self, min: f64, max: f64) -> Self {
        let defaults = Self::default();
        let min = finite_or(min, defaults.margin_min).clamp(0.0, 100.0);
        self.margin_min = min;
        self.margin_max = finite_or(max, defaults.margin_max).clamp(min, 100.0);
        self
    }

    /// Set the maximum rotation in degrees (absolute value, at most 180).
    pub fn with_max_rotation(mut self, degrees: f64) -> Self {
        self.max_rotation = finite_or(degrees, Self::default().max_rotation)
            .abs()
            .min(180.0);
        self
    }

    /// Set the merkstave probability (clamped to 0.0-1.0).
    pub fn with_merkstave_chance(mut self, chance: f64) -> Self {
        self.merkstave_chance =
            finite_or(chance, Self::default().merkstave_chance).clamp(0.0, 1.0);
        self
    }

    /// This configuration passed through every builder.
    ///
    /// Fields are public, so a struct literal can hold values the builders
    /// would reject. Casting always works on the sanitized copy.
    pub fn sanitized(&self) -> Self {
        Self::default()
            .with_cluster_threshold(self.cluster_threshold)
            .with_zones(self.inner_radius, self.middle_radius)
            .with_margins(self.margin_min, self.margin_max)
            .with_max_rotation(self.max_rotation)
            .with_merkstave_chance(self.merkstave_chance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draw_config() {
        assert_eq!(DrawConfig::default().reversal_chance, 0.3);
    }

    #[test]
    fn reversal_chance_clamped() {
        assert_eq!(
            DrawConfig::default().with_reversal_chance(2.0).reversal_chance,
            1.0
        );
        assert_eq!(
            DrawConfig::default().with_reversal_chance(-1.0).reversal_chance,
            0.0
        );
    }

    #[test]
    fn default_cast_config() {
        let cfg = CastConfig::default();
        assert_eq!(cfg.cluster_threshold, 15.0);
        assert_eq!(cfg.inner_radius, 15.0);
        assert_eq!(cfg.middle_radius, 30.0);
        assert_eq!((cfg.margin_min, cfg.margin_max), (10.0, 90.0));
        assert_eq!(cfg.max_rotation, 45.0);
    }

    #[test]
    fn builder_methods_clamp() {
        let cfg = CastConfig::default()
            .with_zones(20.0, 10.0)
            .with_margins(-5.0, 150.0)
            .with_max_rotation(-30.0)
            .with_merkstave_chance(3.0)
            .with_cluster_threshold(-1.0);
        assert_eq!(cfg.inner_radius, 20.0);
        assert_eq!(cfg.middle_radius, 20.0);
        assert_eq!((cfg.margin_min, cfg.margin_max), (0.0, 100.0));
        assert_eq!(cfg.max_rotation, 30.0);
        assert_eq!(cfg.merkstave_chance, 1.0);
        assert_eq!(cfg.cluster_threshold, 0.0);
    }

    #[test]
    fn builders_replace_non_finite_values() {
        let cfg = CastConfig::default()
            .with_zones(f64::NAN, f64::INFINITY)
            .with_margins(f64::NAN, f64::NAN)
            .with_max_rotation(f64::NAN)
            .with_merkstave_chance(f64::NAN)
            .with_cluster_threshold(f64::NEG_INFINITY);
        assert_eq!(cfg, CastConfig::default());
        assert_eq!(
            DrawConfig::default().with_reversal_chance(f64::NAN),
            DrawConfig::default()
        );
        assert_eq!(CastConfig::default().with_max_rotation(1e308).max_rotation, 180.0);
    }

    #[test]
    fn sanitized_repairs_struct_literals() {
        let cfg = CastConfig {
            merkstave_chance: 1.5,
            max_rotation: -30.0,
            margin_min: 80.0,
            margin_max: 20.0,
            inner_radius: f64::NAN,
            ..CastConfig::default()
        }
        .sanitized();
        assert_eq!(cfg.merkstave_chance, 1.0);
        assert_eq!(cfg.max_rotation, 30.0);
        assert_eq!((cfg.margin_min, cfg.margin_max), (80.0, 80.0));
        assert_eq!(cfg.inner_radius, 15.0);
        assert_eq!(CastConfig::default().sanitized(), CastConfig::default());
    }
}
