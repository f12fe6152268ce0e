use super::kinetic_energy;

/// Instantaneous temperature from the equipartition relation,
/// `T = 2 KE / (3 N)` in reduced units
pub fn temperature(velocities: &[[f64; 3]]) -> f64 {
    if velocities.is_empty() {
        return 0.0;
    }
    2.0 * kinetic_energy(velocities) / (3.0 * velocities.len() as f64)
}
