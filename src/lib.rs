//! Deterministic blip layout for ring/sector radar charts.
//!
//! A [`Radar`] is built from a [`RadarConfig`]: rings split the disc into
//! concentric bands, sectors split it into equal wedges, and every entry is
//! given a point inside its own (sector, ring) region. Points come from a
//! pre-sampled grid so that blips sharing a region keep their distance, and
//! fall back to seeded random positions once the grid runs out.

pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod grid;
pub mod partition;
pub mod radar;
pub mod rng;

pub use config::{EntryConfig, RadarConfig, RingConfig, SectorConfig, StyleConfig};
pub use error::{RadarError, Result};
pub use events::{EventKind, RadarEvent};
pub use geometry::{to_cartesian, to_polar, Point, Polar};
pub use partition::{Ring, RingScale, Sector};
pub use radar::{Entry, Layout, Radar};
pub use rng::{FixedSeed, PseudoRand, RandomSeed, SeedSource};
