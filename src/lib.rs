//! Density-weighted 2D drop simulation.
//!
//! A fixed-capacity set of drops is laid out on a grid, pulled along a
//! caller-supplied gravity axis with a force scaled by the local smoothing
//! kernel density, and bounced off the domain walls once per tick.
//!
//! Presentation (windowing, camera, widgets, drawing) lives outside this
//! crate: callers hand in `dt`, a unit gravity direction and a
//! [`ParameterSet`], and read back [`Simulation::positions`].

#![warn(missing_debug_implementations)]

pub mod collision;
pub mod density;
pub mod error;
pub mod integrator;
pub mod layout;
pub mod params;
pub mod particle;
pub mod simulation;

pub use self::{
    error::{Error, Result},
    params::ParameterSet,
    particle::{Particle, ParticleStore},
    simulation::Simulation,
};
