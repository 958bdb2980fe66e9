use crate::{params::ParameterSet, particle::Particle};

/// Walls of the `[0, width] × [0, height]` domain, inset by the drop radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResolver {
    radius: f32,
    max: [f32; 2],
    damping: f32,
}

impl CollisionResolver {
    pub fn new(params: &ParameterSet) -> Self {
        Self {
            radius: params.radius,
            max: [
                params.domain_width - params.radius,
                params.domain_height - params.radius,
            ],
            damping: params.damping,
        }
    }

    /// Reflects and clamps each axis that touches or crosses a wall.
    pub fn resolve(&self, particle: &mut Particle) {
        for axis in 0..2 {
            let pos = particle.pos[axis];
            if pos <= self.radius || pos >= self.max[axis] {
                particle.velocity[axis] *= -self.damping;
                // min then max: a domain thinner than a drop pins it at `radius`
                particle.pos[axis] = pos.min(self.max[axis]).max(self.radius);
            }
        }
    }
}
