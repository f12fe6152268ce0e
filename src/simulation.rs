use crate::{
    compute::{self, Energies},
    Atoms, AtomicPotentialTrait, Container, Error,
};

/// The main simulation state: atoms, box, potential, and current forces
pub struct Simulation<A: AtomicPotentialTrait> {
    pub atoms: Atoms,
    container: Container,
    atomic_potential: A,
    forces: Vec<[f64; 3]>,
}
impl<A: AtomicPotentialTrait> Simulation<A> {
    /// Create a new simulation, validating the cutoff against the box and
    /// computing the initial forces
    pub fn new(atoms: Atoms, atomic_potential: A, container: Container) -> Result<Self, Error> {
        let forces = atomic_potential.compute_forces(&atoms.positions, &container)?;
        Ok(Self {
            atoms,
            container,
            atomic_potential,
            forces,
        })
    }

    // Getters
    pub fn container(&self) -> &Container {
        &self.container
    }
    pub fn atomic_potential(&self) -> &A {
        &self.atomic_potential
    }
    pub fn forces(&self) -> &Vec<[f64; 3]> {
        &self.forces
    }

    pub(crate) fn set_forces(&mut self, forces: Vec<[f64; 3]>) {
        self.forces = forces;
    }

    /// Recompute the force on every atom from the current positions
    pub fn compute_forces(&self) -> Result<Vec<[f64; 3]>, Error> {
        self.atomic_potential
            .compute_forces(&self.atoms.positions, &self.container)
    }

    /// Energy summary of the current configuration
    pub fn energies(&self) -> Result<Energies, Error> {
        compute::energies(
            &self.atoms.positions,
            &self.atoms.velocities,
            &self.container,
            &self.atomic_potential,
        )
    }

    /// Instantaneous temperature of the current configuration
    pub fn temperature(&self) -> f64 {
        compute::temperature(&self.atoms.velocities)
    }

    /// Map any atom that strayed outside the box back in, respecting the
    /// periodic boundaries
    pub fn fold_positions(&mut self) {
        for position in self.atoms.positions.iter_mut() {
            *position = self.container.fold(position);
        }
    }
}
