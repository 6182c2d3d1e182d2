//! Ring and sector partitioning of the radar disc.
//!
//! Rings are concentric bands of equal width starting at the center; sectors
//! are equal angular wedges starting at angle 0 and going counter-clockwise.

use serde::Serialize;
use std::f64::consts::TAU;

use crate::config::{RingConfig, SectorConfig};

/// A concentric band. `radius` is the inner edge; the outer edge is the next
/// ring's radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ring {
    pub id: usize,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub radius: f64,
}

impl Ring {
    pub fn outer_radius(&self, scale: &RingScale) -> f64 {
        scale.radius((self.id + 1) as f64)
    }
}

/// An angular wedge covering `[start_angle, end_angle)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sector {
    pub id: usize,
    pub label: String,
    pub start_angle: f64,
    pub end_angle: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<toml::Value>,
}

impl Sector {
    #[inline]
    pub fn contains(&self, theta: f64) -> bool {
        theta >= self.start_angle && theta < self.end_angle
    }

    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Maps (possibly fractional) ring indices to radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingScale {
    width: f64,
    ring_count: usize,
    reserve_label_ring: bool,
}

impl RingScale {
    /// `reserve_label_ring` keeps an extra outer band free for sector labels.
    pub fn new(width: f64, ring_count: usize, reserve_label_ring: bool) -> Self {
        Self {
            width,
            ring_count,
            reserve_label_ring,
        }
    }

    pub fn ring_width(&self) -> f64 {
        let count = if self.reserve_label_ring {
            self.ring_count + 1
        } else {
            self.ring_count
        };
        (self.width / 2.0) / count as f64
    }

    #[inline]
    pub fn radius(&self, ring: f64) -> f64 {
        ring * self.ring_width()
    }

    /// Radius of the outer edge of the last ring.
    pub fn outer_radius(&self) -> f64 {
        self.radius(self.ring_count as f64)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn ring_count(&self) -> usize {
        self.ring_count
    }
}

pub fn build_rings(configs: &[RingConfig], scale: &RingScale) -> Vec<Ring> {
    configs
        .iter()
        .enumerate()
        .map(|(id, cfg)| Ring {
            id,
            label: cfg.label.clone(),
            color: cfg.color.clone(),
            radius: scale.radius(id as f64),
        })
        .collect()
}

pub fn build_sectors(configs: &[SectorConfig]) -> Vec<Sector> {
    let step = TAU / configs.len().max(1) as f64;

    configs
        .iter()
        .enumerate()
        .map(|(id, cfg)| Sector {
            id,
            label: cfg.label.clone(),
            start_angle: id as f64 * step,
            end_angle: (id + 1) as f64 * step,
            data: cfg.data.clone(),
        })
        .collect()
}

/// Innermost ring whose outer edge is at or beyond `r`.
pub fn ring_for_radius(rings: &[Ring], scale: &RingScale, r: f64) -> Option<usize> {
    rings
        .iter()
        .position(|ring| r <= scale.radius((ring.id + 1) as f64))
}

pub fn sector_for_angle(sectors: &[Sector], theta: f64) -> Option<usize> {
    sectors.iter().position(|sector| sector.contains(theta))
}
