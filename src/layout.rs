use cgmath::{vec2, Vector2};
use tracing::debug;

use crate::{
    error::{Error, Result},
    params::ParameterSet,
    particle::{Particle, ParticleStore},
};

/// Near-square grid centered on the domain, filled row by row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub per_row: usize,
    pub per_col: usize,
    pub cell: f32,
    pub center: Vector2<f32>,
}

impl Grid {
    pub fn new(params: &ParameterSet) -> Result<Self> {
        let count = params.active_count;
        if count == 0 {
            return Err(Error::InvalidParameter {
                name: "active_count",
                reason: "at least one drop is required",
            });
        }

        let per_row = (count as f64).sqrt() as usize;
        Ok(Self {
            per_row,
            per_col: count.div_ceil(per_row),
            cell: 2.0 * params.radius + params.spacing,
            center: vec2(params.domain_width / 2.0, params.domain_height / 2.0),
        })
    }

    pub fn position(&self, idx: usize) -> Vector2<f32> {
        let col = (idx % self.per_row) as f32;
        let row = (idx / self.per_row) as f32;
        vec2(
            self.center.x + (col - self.per_row as f32 / 2.0 + 0.5) * self.cell,
            self.center.y + (row - self.per_col as f32 / 2.0 + 0.5) * self.cell,
        )
    }
}

/// Rewrites the active prefix of `store` with a fresh grid and zero
/// velocities. Nothing is written when the request is rejected.
pub fn layout(params: &ParameterSet, store: &mut ParticleStore) -> Result<()> {
    if params.active_count > store.capacity() {
        return Err(Error::CapacityExceeded {
            requested: params.active_count,
            capacity: store.capacity(),
        });
    }
    let grid = Grid::new(params)?;

    store.set_active_count(params.active_count)?;
    for (idx, particle) in store.active_mut().iter_mut().enumerate() {
        *particle = Particle::at(grid.position(idx));
    }

    debug!(
        "laid out {} drops on {}x{} grid, cell: {}",
        params.active_count, grid.per_row, grid.per_col, grid.cell
    );

    Ok(())
}
