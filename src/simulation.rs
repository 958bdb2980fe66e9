use cgmath::{vec2, Vector2};
use itertools::Itertools as _;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{info, trace};

use crate::{
    density::DensityField,
    error::Result,
    integrator, layout,
    params::{ParameterSet, MAX_DROPS},
    particle::{Particle, ParticleStore},
};

/// Entry point for the presentation layer.
///
/// Holds the particle arena only. Parameters are owned by the caller and
/// handed in on every call, so an edit applies at the next tick boundary.
#[derive(Debug, Clone)]
pub struct Simulation {
    store: ParticleStore,
    tick: u64,
}

impl Simulation {
    /// Allocates a store of [`MAX_DROPS`] and lays out the active prefix.
    pub fn initialize(params: &ParameterSet) -> Result<Self> {
        Self::with_capacity(MAX_DROPS, params)
    }

    pub fn with_capacity(capacity: usize, params: &ParameterSet) -> Result<Self> {
        let mut store = ParticleStore::with_capacity(capacity);
        layout::layout(params, &mut store)?;
        info!(
            "initialized {} of {} drops",
            store.active_count(),
            store.capacity()
        );

        Ok(Self { store, tick: 0 })
    }

    /// Re-runs the layout. On error the previous state is kept.
    pub fn reconfigure(&mut self, params: &ParameterSet) -> Result<()> {
        layout::layout(params, &mut self.store)?;
        info!("reconfigured, active drops: {}", self.store.active_count());
        Ok(())
    }

    pub fn step(
        &mut self,
        dt: f32,
        direction: Vector2<f32>,
        params: &ParameterSet,
    ) -> Result<()> {
        integrator::step(&mut self.store, params, dt, direction)?;
        self.tick += 1;
        trace!("tick {} done, dt: {dt}", self.tick);
        Ok(())
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vector2<f32>> + '_ {
        self.store.positions()
    }

    pub fn particles(&self) -> &[Particle] {
        self.store.active()
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    /// Completed ticks since construction.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn density(&self, point: Vector2<f32>, params: &ParameterSet) -> Result<f32> {
        Ok(DensityField::new(params.smoothing_radius)?.density(self.store.active(), point))
    }

    /// Density sampled at the center of each cell of a `columns × rows` grid
    /// spanning the domain, row-major from the origin.
    pub fn density_grid(
        &self,
        params: &ParameterSet,
        columns: usize,
        rows: usize,
    ) -> Result<Vec<f32>> {
        let field = DensityField::new(params.smoothing_radius)?;
        let cell = vec2(
            params.domain_width / columns.max(1) as f32,
            params.domain_height / rows.max(1) as f32,
        );
        let particles = self.store.active();

        let points = (0..rows)
            .cartesian_product(0..columns)
            .map(|(y, x)| vec2((x as f32 + 0.5) * cell.x, (y as f32 + 0.5) * cell.y))
            .collect_vec();

        Ok(points
            .into_par_iter()
            .map(|point| field.density(particles, point))
            .collect())
    }
}
