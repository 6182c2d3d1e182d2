//! Property-based invariant tests for the radar geometry and placement.
//!
//! 1. Polar conversion round-trips away from the origin.
//! 2. Polar angles are never negative.
//! 3. Sectors tile the circle with shared edges.
//! 4. Ring radii strictly increase.
//! 5. Every placed entry lands in its own ring and sector.
//! 6. Layouts are reproducible for a fixed seed.
//! 7. The generator stays in `[0, 1)` for any seed.

use proptest::prelude::*;
use radar_layout::{
    to_cartesian, to_polar, EntryConfig, PseudoRand, Radar, RadarConfig, RingConfig, SectorConfig,
    StyleConfig,
};
use std::f64::consts::TAU;

// Candidates go through a polar round trip, so angles can sit an ulp outside
// their sector start and radii can equal the outer edge (`r <= outer` bucketing).
const EPS: f64 = 1e-7;

// ── Helpers ─────────────────────────────────────────────────────────────

fn config(
    width: f64,
    rings: usize,
    sectors: usize,
    entries: &[(i64, i64)],
    seed: f64,
    show_labels: bool,
) -> RadarConfig {
    let mut style = StyleConfig {
        seed: Some(seed),
        ..StyleConfig::default()
    };
    style.sectors.show_labels = show_labels;

    RadarConfig {
        width,
        rings: (0..rings)
            .map(|i| RingConfig {
                label: format!("r{}", i),
                color: None,
            })
            .collect(),
        sectors: (0..sectors)
            .map(|i| SectorConfig {
                label: format!("s{}", i),
                data: None,
            })
            .collect(),
        entries: entries
            .iter()
            .enumerate()
            .map(|(i, &(ring, sector))| EntryConfig {
                label: format!("e{}", i),
                ring,
                sector,
                moved: 0,
                data: None,
            })
            .collect(),
        style,
    }
}

fn layout_strategy() -> impl Strategy<Value = RadarConfig> {
    (1usize..=6, 1usize..=8).prop_flat_map(|(rings, sectors)| {
        (
            100.0f64..800.0,
            Just(rings),
            Just(sectors),
            prop::collection::vec((0..rings as i64, 0..sectors as i64), 0..60),
            0.0f64..1000.0,
            any::<bool>(),
        )
            .prop_map(|(width, rings, sectors, entries, seed, labels)| {
                config(width, rings, sectors, &entries, seed, labels)
            })
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Coordinate conversion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn polar_round_trip(x in -1e4f64..1e4, y in -1e4f64..1e4) {
        prop_assume!(x.abs() > 1e-6 || y.abs() > 1e-6);
        let polar = to_polar(x, y);
        let back = to_cartesian(polar.r, polar.theta);
        prop_assert!((back.x - x).abs() < 1e-6, "x: {} vs {}", back.x, x);
        prop_assert!((back.y - y).abs() < 1e-6, "y: {} vs {}", back.y, y);
    }

    #[test]
    fn polar_angle_is_non_negative(x in -1e4f64..1e4, y in -1e4f64..1e4) {
        let theta = to_polar(x, y).theta;
        prop_assert!((0.0..=TAU).contains(&theta), "theta {} out of range", theta);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Partitions
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sectors_tile_the_circle(sectors in 1usize..=64) {
        let radar = Radar::new(config(200.0, 1, sectors, &[], 1.0, true)).unwrap();
        let all = radar.sectors();

        prop_assert_eq!(all.len(), sectors);
        prop_assert_eq!(all[0].start_angle, 0.0);
        for pair in all.windows(2) {
            prop_assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        for s in all {
            prop_assert!((s.span() - TAU / sectors as f64).abs() < 1e-12);
        }
        prop_assert!((all[sectors - 1].end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn ring_radii_increase(rings in 1usize..=20, width in 10.0f64..2000.0, labels in any::<bool>()) {
        let radar = Radar::new(config(width, rings, 1, &[], 1.0, labels)).unwrap();
        prop_assert_eq!(radar.rings()[0].radius, 0.0);
        for pair in radar.rings().windows(2) {
            prop_assert!(pair[0].radius < pair[1].radius);
            prop_assert_eq!(pair[0].id + 1, pair[1].id);
        }
        prop_assert!(radar.ring_radius(rings as f64) <= width / 2.0 + 1e-9);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_entries_stay_in_region(config in layout_strategy()) {
        let radar = Radar::new(config).unwrap();

        for entry in radar.entries() {
            let ring = radar.ring(entry.ring.unwrap()).unwrap();
            let sector = radar.sector(entry.sector.unwrap()).unwrap();
            let polar = to_polar(entry.point.x, entry.point.y);

            let inner = ring.radius;
            let outer = ring.outer_radius(radar.scale());
            prop_assert!(polar.r >= inner - EPS && polar.r <= outer + EPS,
                "r {} outside [{}, {}]", polar.r, inner, outer);

            // A point one ulp below angle 0 folds to just under 2π.
            let theta = if polar.theta > sector.end_angle + EPS && sector.start_angle == 0.0 {
                polar.theta - TAU
            } else {
                polar.theta
            };
            prop_assert!(theta >= sector.start_angle - EPS && theta <= sector.end_angle + EPS,
                "theta {} outside [{}, {})", polar.theta, sector.start_angle, sector.end_angle);
        }
    }

    #[test]
    fn layout_is_reproducible(config in layout_strategy()) {
        let a = Radar::new(config.clone()).unwrap();
        let b = Radar::new(config).unwrap();
        prop_assert_eq!(a.entries(), b.entries());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Generator range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn generator_stays_in_unit_interval(seed in -1e6f64..1e6) {
        let mut rand = PseudoRand::new(seed);
        for _ in 0..32 {
            let n = rand.next();
            prop_assert!((0.0..1.0).contains(&n), "{} out of range", n);
        }
    }
}
