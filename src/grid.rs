//! Candidate positions for blips.
//!
//! The bounding square of the radar is sampled on a regular lattice and each
//! sample is filed under the (sector, ring) pair it falls in. Placement then
//! draws from those buckets so that blips sharing a pair stay apart.

use tracing::debug;

use crate::geometry::{to_cartesian, to_polar, Point};
use crate::partition::{ring_for_radius, sector_for_angle, Ring, RingScale, Sector};
use crate::rng::PseudoRand;

#[derive(Debug, Clone, Default)]
pub struct Grid {
    /// Indexed `[sector][ring]`.
    buckets: Vec<Vec<Vec<Point>>>,
}

impl Grid {
    /// Sample the square of side `scale.width()` with step `offset`.
    ///
    /// `offset` must be positive; smaller values give denser buckets at
    /// quadratic cost.
    pub fn generate(rings: &[Ring], sectors: &[Sector], scale: &RingScale, offset: f64) -> Self {
        let mut buckets: Vec<Vec<Vec<Point>>> =
            sectors.iter().map(|_| rings.iter().map(|_| Vec::new()).collect()).collect();

        let half = scale.width() / 2.0;
        let mut samples = 0usize;
        let mut x = -half;
        while x < half {
            let mut y = -half;
            while y < half {
                samples += 1;
                let polar = to_polar(x, y);
                let ring = ring_for_radius(rings, scale, polar.r);
                let sector = sector_for_angle(sectors, polar.theta);

                if let (Some(ring), Some(sector)) = (ring, sector) {
                    buckets[sector][ring].push(to_cartesian(polar.r, polar.theta));
                }
                y += offset;
            }
            x += offset;
        }

        let grid = Self { buckets };
        debug!(
            samples,
            candidates = grid.total(),
            offset,
            "Generated placement grid"
        );
        grid
    }

    /// Candidates still available for the pair.
    pub fn available(&self, sector: usize, ring: usize) -> usize {
        self.bucket(sector, ring).map_or(0, |b| b.len())
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().flatten().map(Vec::len).sum()
    }

    pub fn bucket(&self, sector: usize, ring: usize) -> Option<&[Point]> {
        self.buckets
            .get(sector)
            .and_then(|rings| rings.get(ring))
            .map(Vec::as_slice)
    }

    /// Remove and return a random candidate from the pair's bucket.
    ///
    /// Returns `None` without touching the generator when the bucket is
    /// empty or the pair does not exist.
    pub fn take(&mut self, sector: usize, ring: usize, rand: &mut PseudoRand) -> Option<Point> {
        let bucket = self.buckets.get_mut(sector)?.get_mut(ring)?;
        if bucket.is_empty() {
            return None;
        }

        let index = ((bucket.len() as f64 * rand.next()).floor() as usize).min(bucket.len() - 1);
        Some(bucket.swap_remove(index))
    }
}
