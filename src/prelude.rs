pub use super::atomic::{AtomicPotentialTrait, LJCut};
pub use super::atoms::Atoms;
pub use super::compute::Energies;
pub use super::container::Container;
pub use super::error::Error;
pub use super::integrators::Verlet;
pub use super::lattice::{Cubic, Lattice};
pub use super::simulation::Simulation;
