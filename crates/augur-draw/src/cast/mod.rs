//! Rune casting.
//!
//! Runes are picked, oriented, and scattered with a caller-supplied `rand`
//! RNG. The default entry point [`cast_runes`] uses the thread RNG, so a
//! cast is fresh every time and cannot be replayed from a stored seed,
//! unlike tarot draws.

mod cluster;

pub use cluster::{classify_proximity, cluster_positions};

use augur_core::deck::ELDER_FUTHARK;
use augur_core::{DivinationItem, Rune};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::debug;

use crate::config::CastConfig;
use crate::drawn::{DrawnItem, Orientation, Proximity, RunePlacement};

/// Casts runes onto a square canvas.
#[derive(Debug, Clone, Default)]
pub struct RuneCaster {
    config: CastConfig,
}

impl RuneCaster {
    /// Create a caster with a custom configuration.
    pub fn new(config: CastConfig) -> Self {
        Self { config }
    }

    /// The caster's configuration.
    pub fn config(&self) -> &CastConfig {
        &self.config
    }

    /// Cast `count` runes picked from `runes` (clamped to the set size).
    ///
    /// Each rune is oriented (merkstave only if reversible), placed, and
    /// classified by zone; cluster ids are assigned once all runes have landed.
    /// The configuration is [sanitized](CastConfig::sanitized) first, so a
    /// cast never panics.
    pub fn cast<R: Rng + ?Sized>(
        &self,
        runes: &'static [Rune],
        count: usize,
        rng: &mut R,
    ) -> Vec<DrawnItem> {
        let cfg = self.config.sanitized();
        let mut pool: Vec<&'static Rune> = runes.iter().collect();
        pool.shuffle(rng);
        pool.truncate(count);

        let mut cast: Vec<DrawnItem> = pool
            .into_iter()
            .map(|rune| throw(rune, &cfg, rng))
            .collect();

        let points: Vec<(f64, f64)> = cast
            .iter()
            .filter_map(|d| d.placement.as_ref().map(|p| (p.x, p.y)))
            .collect();
        let clusters = cluster_positions(&points, cfg.cluster_threshold);
        for (drawn, cluster) in cast.iter_mut().zip(clusters) {
            if let Some(placement) = drawn.placement.as_mut() {
                placement.cluster = cluster;
            }
        }

        debug!(
            requested = count,
            cast = cast.len(),
            clusters = CastSummary::of(&cast).clusters,
            "cast runes"
        );
        cast
    }
}

fn throw<R: Rng + ?Sized>(rune: &'static Rune, cfg: &CastConfig, rng: &mut R) -> DrawnItem {
    let orientation = if rune.reversible && rng.random_bool(cfg.merkstave_chance) {
        Orientation::Reversed
    } else {
        Orientation::Upright
    };
    let x = rng.random_range(cfg.margin_min..=cfg.margin_max);
    let y = rng.random_range(cfg.margin_min..=cfg.margin_max);
    let rotation = rng.random_range(-cfg.max_rotation..=cfg.max_rotation);

    let mut drawn = DrawnItem::new(DivinationItem::Rune(rune)).with_orientation(orientation);
    drawn.placement = Some(RunePlacement {
        x,
        y,
        rotation,
        cluster: None,
        proximity: classify_proximity(x, y, cfg),
    });
    drawn
}

/// Cast `count` Elder Futhark runes with the thread RNG and default configuration.
pub fn cast_runes(count: usize) -> Vec<DrawnItem> {
    RuneCaster::default().cast(ELDER_FUTHARK, count, &mut rand::rng())
}

/// Aggregate shape of a cast, for summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CastSummary {
    /// Number of distinct clusters.
    pub clusters: usize,
    /// Runes that belong to no cluster.
    pub isolated: usize,
    /// Runes in the inner zone.
    pub inner: usize,
    /// Runes in the middle zone.
    pub middle: usize,
    /// Runes in the outer zone.
    pub outer: usize,
    /// Runes that landed merkstave.
    pub merkstave: usize,
}

impl CastSummary {
    /// Summarize cast runes. Items without a placement are ignored.
    pub fn of(cast: &[DrawnItem]) -> Self {
        let mut summary = Self::default();
        let mut ids = Vec::new();
        for drawn in cast {
            let Some(placement) = &drawn.placement else {
                continue;
            };
            match placement.cluster {
                Some(id) if !ids.contains(&id) => ids.push(id),
                Some(_) => {}
                None => summary.isolated += 1,
            }
            match placement.proximity {
                Proximity::Inner => summary.inner += 1,
                Proximity::Middle => summary.middle += 1,
                Proximity::Outer => summary.outer += 1,
            }
            if drawn.is_reversed() {
                summary.merkstave += 1;
            }
        }
        summary.clusters = ids.len();
        summary
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn placement(d: &DrawnItem) -> &RunePlacement {
        d.placement.as_ref().unwrap()
    }

    #[test]
    fn casts_requested_number_of_distinct_runes() {
        let mut rng = StdRng::seed_from_u64(42);
        let cast = RuneCaster::default().cast(ELDER_FUTHARK, 9, &mut rng);
        assert_eq!(cast.len(), 9);
        let ids: HashSet<_> = cast.iter().map(|d| d.item.id()).collect();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn count_is_clamped_to_rune_set() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(RuneCaster::default().cast(ELDER_FUTHARK, 100, &mut rng).len(), 24);
        assert!(RuneCaster::default().cast(ELDER_FUTHARK, 0, &mut rng).is_empty());
    }

    #[test]
    fn placements_stay_on_canvas() {
        let mut rng = StdRng::seed_from_u64(7);
        let caster = RuneCaster::default();
        for _ in 0..50 {
            for d in caster.cast(ELDER_FUTHARK, 24, &mut rng) {
                let p = placement(&d);
                assert!((10.0..=90.0).contains(&p.x));
                assert!((10.0..=90.0).contains(&p.y));
                assert!((-45.0..=45.0).contains(&p.rotation));
                assert_eq!(p.proximity, classify_proximity(p.x, p.y, caster.config()));
            }
        }
    }

    #[test]
    fn non_reversible_runes_never_merkstave() {
        let mut rng = StdRng::seed_from_u64(3);
        let caster = RuneCaster::new(CastConfig::default().with_merkstave_chance(1.0));
        for d in caster.cast(ELDER_FUTHARK, 24, &mut rng) {
            let rune = d.item.as_rune().unwrap();
            let expected = if rune.reversible {
                Orientation::Reversed
            } else {
                Orientation::Upright
            };
            assert_eq!(d.orientation, Some(expected), "{}", rune.id);
        }
    }

    #[test]
    fn clusters_match_positions() {
        let mut rng = StdRng::seed_from_u64(11);
        let caster = RuneCaster::default();
        for _ in 0..20 {
            let cast = caster.cast(ELDER_FUTHARK, 24, &mut rng);
            let points: Vec<_> = cast.iter().map(|d| (placement(d).x, placement(d).y)).collect();
            let labels: Vec<_> = cast.iter().map(|d| placement(d).cluster).collect();
            assert_eq!(labels, cluster_positions(&points, 15.0));
        }
    }

    #[test]
    fn seeded_rng_replays_a_cast() {
        let caster = RuneCaster::default();
        let a = caster.cast(ELDER_FUTHARK, 5, &mut StdRng::seed_from_u64(99));
        let b = caster.cast(ELDER_FUTHARK, 5, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn default_casts_are_not_reproducible() {
        // Thread-RNG casts are expected to differ; 24 placements colliding is
        // astronomically unlikely.
        let a = cast_runes(24);
        let b = cast_runes(24);
        assert_eq!(a.len(), 24);
        assert_ne!(a, b);
    }

    #[test]
    fn cast_survives_unusable_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let configs = [
            CastConfig::default().with_merkstave_chance(f64::NAN),
            CastConfig::default().with_max_rotation(f64::NAN),
            CastConfig {
                merkstave_chance: 1.5,
                ..CastConfig::default()
            },
            CastConfig {
                max_rotation: f64::NAN,
                margin_min: 90.0,
                margin_max: 10.0,
                ..CastConfig::default()
            },
            CastConfig {
                margin_min: f64::INFINITY,
                max_rotation: -20.0,
                merkstave_chance: f64::NAN,
                cluster_threshold: f64::NAN,
                ..CastConfig::default()
            },
        ];
        for config in configs {
            let caster = RuneCaster::new(config);
            let cast = caster.cast(ELDER_FUTHARK, 24, &mut rng);
            assert_eq!(cast.len(), 24);
            for d in &cast {
                let p = placement(d);
                assert!(p.x.is_finite() && p.y.is_finite() && p.rotation.is_finite());
                assert!((0.0..=100.0).contains(&p.x));
            }
        }
    }

    #[test]
    fn inverted_margins_pin_runes_to_one_line() {
        let config = CastConfig {
            margin_min: 70.0,
            margin_max: 30.0,
            ..CastConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        for d in RuneCaster::new(config).cast(ELDER_FUTHARK, 6, &mut rng) {
            assert_eq!((placement(&d).x, placement(&d).y), (70.0, 70.0));
        }
    }

    #[test]
    fn summary_counts() {
        let mut rng = StdRng::seed_from_u64(5);
        let cast = RuneCaster::default().cast(ELDER_FUTHARK, 24, &mut rng);
        let summary = CastSummary::of(&cast);
        assert_eq!(summary.inner + summary.middle + summary.outer, 24);
        let clustered = cast.iter().filter(|d| placement(d).cluster.is_some()).count();
        assert_eq!(clustered + summary.isolated, 24);
        assert!(summary.clusters * 2 <= clustered);
        let reversed = cast.iter().filter(|d| d.is_reversed()).count();
        assert_eq!(summary.merkstave, reversed);
    }

    #[test]
    fn summary_ignores_unplaced_items() {
        let item = DrawnItem::new(DivinationItem::Rune(&ELDER_FUTHARK[0]));
        assert_eq!(CastSummary::of(&[item]), CastSummary::default());
    }
}
