use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Cartesian point with the radar center at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_polar(self) -> Polar {
        to_polar(self.x, self.y)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Polar coordinate; `theta` is in radians, never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub r: f64,
    pub theta: f64,
}

/// Convert cartesian coordinates to polar, folding the angle into `[0, 2π)`.
#[inline]
pub fn to_polar(x: f64, y: f64) -> Polar {
    let r = (x * x + y * y).sqrt();
    let theta = y.atan2(x);
    Polar {
        r,
        theta: if theta >= 0.0 { theta } else { theta + TAU },
    }
}

/// Convert polar coordinates back to a cartesian point.
#[inline]
pub fn to_cartesian(r: f64, theta: f64) -> Point {
    Point {
        x: r * theta.cos(),
        y: r * theta.sin(),
    }
}
