use cgmath::Vector2;

use crate::{
    collision::CollisionResolver,
    density::DensityField,
    error::Result,
    params::ParameterSet,
    particle::ParticleStore,
};

/// Advances every active drop by one tick.
///
/// Drops are updated in index order and each one is resolved against the
/// walls right after it moves, so later drops see the new positions of
/// earlier ones when sampling density. `direction` is used as given: a unit
/// vector, or zero for no pull at all.
///
/// The terminal velocity clamp only bounds each axis from above, and the
/// position advances by the raw velocity rather than `velocity * dt`.
pub fn step(
    store: &mut ParticleStore,
    params: &ParameterSet,
    dt: f32,
    direction: Vector2<f32>,
) -> Result<()> {
    let field = DensityField::new(params.smoothing_radius)?;
    let walls = CollisionResolver::new(params);
    let terminal = params.terminal_velocity;

    for idx in 0..store.active_count() {
        let density = field.density(store.active(), store[idx].position());
        let pull = params.gravity * dt * density;

        let particle = &mut store[idx];
        particle.velocity[1] += direction.y * pull;
        particle.velocity[0] += direction.x * pull;
        particle.velocity[1] = particle.velocity[1].min(terminal);
        particle.velocity[0] = particle.velocity[0].min(terminal);

        particle.pos[1] += particle.velocity[1];
        particle.pos[0] += particle.velocity[0];

        walls.resolve(particle);
    }

    Ok(())
}
