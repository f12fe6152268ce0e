pub mod ljcut;

pub use ljcut::LJCut;

use crate::{
    utils::{accumulate, norm_squared},
    Container, Error,
};

/// Pairs closer than this are treated as coincident
pub const MIN_SEPARATION: f64 = 1e-8;

/// Trait for pairwise atomic potentials.
///
/// Implementors supply the per-pair force and energy laws; the all-pairs
/// aggregation below is shared, so the force-only and energy entry points
/// always agree on the pair enumeration and the separation definition.
pub trait AtomicPotentialTrait {
    /// Get the maximum distance for effective interaction
    fn cutoff_distance(&self) -> f64;

    /// Force on the second particle due to the first, given their
    /// minimum-image separation `sep` (first to second) and distance `r`.
    /// The first particle feels the exact negation.
    fn pair_force(&self, sep: &[f64; 3], r: f64) -> [f64; 3];

    /// Pair potential energy at distance `r`
    fn pair_energy(&self, r: f64) -> f64;

    /// Check the cutoff against the container before any pair loop
    fn validate(&self, container: &Container) -> Result<(), Error> {
        let cutoff = self.cutoff_distance();
        if cutoff <= 0.0 || cutoff > 0.5 * container.edge() {
            return Err(Error::InvalidCutoff {
                cutoff,
                edge: container.edge(),
            });
        }
        Ok(())
    }

    /// Compute the force on every particle, returning a freshly owned buffer
    fn compute_forces(
        &self,
        positions: &[[f64; 3]],
        container: &Container,
    ) -> Result<Vec<[f64; 3]>, Error> {
        let mut forces = vec![[0.0; 3]; positions.len()];
        self.accumulate_forces(positions, container, &mut forces)?;
        Ok(forces)
    }

    /// In-place variant of [`compute_forces`] for callers reusing a buffer.
    ///
    /// The buffer is zeroed first; nothing carries over between calls. Each
    /// unordered pair is visited exactly once (ascending `i`, then ascending
    /// `j < i`), the pair force added to particle `j` and subtracted from
    /// particle `i`, so internal forces cancel in aggregate.
    ///
    /// [`compute_forces`]: AtomicPotentialTrait::compute_forces
    fn accumulate_forces(
        &self,
        positions: &[[f64; 3]],
        container: &Container,
        forces: &mut [[f64; 3]],
    ) -> Result<(), Error> {
        self.validate(container)?;
        if forces.len() != positions.len() {
            return Err(Error::DimensionMismatch {
                expected: positions.len(),
                found: forces.len(),
            });
        }
        for force in forces.iter_mut() {
            *force = [0.0; 3];
        }

        for i in 0..positions.len() {
            for j in 0..i {
                let sep = container.minimum_image(&positions[i], &positions[j]);
                let r = norm_squared(&sep).sqrt();
                if r < MIN_SEPARATION {
                    return Err(Error::DegenerateConfiguration { i, j });
                }
                let force = self.pair_force(&sep, r);
                accumulate(&mut forces[j], &force, false);
                accumulate(&mut forces[i], &force, true);
            }
        }
        Ok(())
    }

    /// Total potential energy over the same unique-pair enumeration as the
    /// force aggregation
    fn compute_potential_energy(
        &self,
        positions: &[[f64; 3]],
        container: &Container,
    ) -> Result<f64, Error> {
        self.validate(container)?;
        let mut energy = 0.0;
        for i in 0..positions.len() {
            for j in 0..i {
                let sep = container.minimum_image(&positions[i], &positions[j]);
                let r = norm_squared(&sep).sqrt();
                if r < MIN_SEPARATION {
                    return Err(Error::DegenerateConfiguration { i, j });
                }
                energy += self.pair_energy(r);
            }
        }
        Ok(energy)
    }
}
