mod kinetic_energy;
mod temperature;

pub use kinetic_energy::kinetic_energy;
pub use temperature::temperature;

use crate::{AtomicPotentialTrait, Container, Error};

/// Energy summary of one configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Energies {
    pub potential: f64,
    pub kinetic: f64,
    pub total: f64,
}

/// Compute potential, kinetic, and total energy in one pass.
///
/// The potential term runs over the same unique-pair enumeration as the
/// force aggregation; `total` is exactly `potential + kinetic`.
pub fn energies<A: AtomicPotentialTrait>(
    positions: &[[f64; 3]],
    velocities: &[[f64; 3]],
    container: &Container,
    potential: &A,
) -> Result<Energies, Error> {
    if velocities.len() != positions.len() {
        return Err(Error::DimensionMismatch {
            expected: positions.len(),
            found: velocities.len(),
        });
    }
    let potential = potential.compute_potential_energy(positions, container)?;
    let kinetic = kinetic_energy(velocities);
    Ok(Energies {
        potential,
        kinetic,
        total: potential + kinetic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LJCut;

    #[test]
    fn total_is_exact_sum() {
        let container = Container::new(10.0).unwrap();
        let lj = LJCut::reduced(2.5);
        let positions = [[0.0, 0.0, 0.0], [1.3, 0.0, 0.0], [0.0, 1.1, 0.0]];
        let velocities = [[1.0, 0.0, 0.0], [0.0, -2.0, 0.0], [0.5, 0.5, 0.5]];

        let energies = energies(&positions, &velocities, &container, &lj).unwrap();
        assert_eq!(energies.total, energies.potential + energies.kinetic);
        assert!(energies.kinetic > 0.0);
    }

    #[test]
    fn resting_particles_have_zero_kinetic_energy() {
        let container = Container::new(10.0).unwrap();
        let lj = LJCut::reduced(2.5);
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let velocities = [[0.0; 3]; 2];

        let energies = energies(&positions, &velocities, &container, &lj).unwrap();
        assert_eq!(energies.kinetic, 0.0);
        assert_eq!(energies.total, energies.potential);

        // Two particles at unit separation: U = 4 (1 - 1) minus the shift
        let expected = -4.0 * (2.5f64.powi(-12) - 2.5f64.powi(-6));
        assert!((energies.potential - expected).abs() < 1e-12);
    }

    #[test]
    fn rejects_mismatched_velocities() {
        let container = Container::new(10.0).unwrap();
        let lj = LJCut::reduced(2.5);
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let velocities = [[0.0; 3]; 3];

        assert_eq!(
            energies(&positions, &velocities, &container, &lj).unwrap_err(),
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }
}
