//! Smoothing kernel and the density field built from it.
//!
//! ```text
//! volume(r) = π r⁸ / 4
//! K(r, d)   = max(0, r² - d²)³ / volume(r)
//! ```
//!
//! `K` integrates to 1 over the disc of radius `r`, peaks at `4 / (π r²)`
//! and vanishes for `d >= r`. Density is evaluated brute force over every
//! active drop, so a full tick costs O(n²).

use std::f32::consts::PI;

use cgmath::{MetricSpace, Vector2};

use crate::{
    error::{Error, Result},
    particle::Particle,
};

/// Smoothing kernel with its normalisation precomputed for one radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingKernel {
    radius: f32,
    volume: f32,
}

impl SmoothingKernel {
    pub fn new(radius: f32) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "smoothing_radius",
                reason: "must be finite and greater than zero",
            });
        }

        Ok(Self {
            radius,
            volume: PI * radius.powi(8) / 4.0,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Weight of a unit mass at distance `dst`.
    pub fn influence(&self, dst: f32) -> f32 {
        let value = (self.radius * self.radius - dst * dst).max(0.0);
        value * value * value / self.volume
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityField {
    kernel: SmoothingKernel,
}

impl DensityField {
    pub fn new(smoothing_radius: f32) -> Result<Self> {
        Ok(Self {
            kernel: SmoothingKernel::new(smoothing_radius)?,
        })
    }

    pub fn kernel(&self) -> &SmoothingKernel {
        &self.kernel
    }

    pub fn density(&self, particles: &[Particle], point: Vector2<f32>) -> f32 {
        const MASS: f32 = 1.0;

        particles
            .iter()
            .map(|it| MASS * self.kernel.influence(it.position().distance(point)))
            .sum()
    }
}
