use crate::utils;

/// Total kinetic energy of a set of velocities
pub fn kinetic_energy(velocities: &[[f64; 3]]) -> f64 {
    velocities.iter().map(utils::kinetic_energy).sum()
}
