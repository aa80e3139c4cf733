use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single detector measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HitId(pub u64);

impl fmt::Display for HitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Truth identifier of the particle that produced a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One particle crossing one detector layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub id: HitId,
    pub position: Point3<f64>,
    pub layer: usize,
    pub particle_id: ParticleId,
    pub particle_energy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

impl Hit {
    pub fn new(id: u64, position: [f64; 3], layer: usize, particle_id: u64) -> Self {
        Self {
            id: HitId(id),
            position: Point3::new(position[0], position[1], position[2]),
            layer,
            particle_id: ParticleId(particle_id),
            particle_energy: 0.0,
            time: None,
        }
    }

    pub fn with_energy(mut self, energy: f64) -> Self {
        self.particle_energy = energy;
        self
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.position.z
    }
}
