use std::ops::{Index, IndexMut};

use bytemuck::NoUninit;
use cgmath::Vector2;

use crate::error::{Error, Result};

/// A single drop. Mass is implicitly 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, NoUninit)]
#[repr(C)]
pub struct Particle {
    pub pos: [f32; 2],
    pub velocity: [f32; 2],
}

impl Particle {
    pub fn at(pos: Vector2<f32>) -> Self {
        Self {
            pos: pos.into(),
            velocity: [0.0; 2],
        }
    }

    pub fn position(&self) -> Vector2<f32> {
        self.pos.into()
    }

    pub fn velocity(&self) -> Vector2<f32> {
        self.velocity.into()
    }
}

/// Fixed-capacity arena of drops.
///
/// Storage is allocated once at construction and never grows; only the
/// first [`active_count`](Self::active_count) entries are live. Entries past
/// the active prefix keep whatever they last held and are never read.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    particles: Box<[Particle]>,
    active_count: usize,
}

impl ParticleStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: vec![Particle::default(); capacity].into_boxed_slice(),
            active_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Moves the active/inactive boundary. Contents are left untouched.
    pub fn set_active_count(&mut self, count: usize) -> Result<()> {
        if count > self.capacity() {
            return Err(Error::CapacityExceeded {
                requested: count,
                capacity: self.capacity(),
            });
        }
        self.active_count = count;
        Ok(())
    }

    pub fn active(&self) -> &[Particle] {
        &self.particles[..self.active_count]
    }

    pub fn active_mut(&mut self) -> &mut [Particle] {
        &mut self.particles[..self.active_count]
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vector2<f32>> + '_ {
        self.active().iter().map(Particle::position)
    }

    /// Active prefix as raw bytes, ready for a vertex/storage buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.active())
    }
}

impl Index<usize> for ParticleStore {
    type Output = Particle;

    fn index(&self, index: usize) -> &Self::Output {
        &self.active()[index]
    }
}

impl IndexMut<usize> for ParticleStore {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.active_mut()[index]
    }
}
