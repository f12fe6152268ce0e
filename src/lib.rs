pub mod analysis;
pub mod atomic;
pub mod atoms;
pub mod compute;
pub mod container;
pub mod error;
pub mod integrators;
pub mod lattice;
pub mod output;
pub mod prelude;
pub mod simulation;
pub mod utils;

pub use atomic::{AtomicPotentialTrait, LJCut};
pub use atoms::Atoms;
pub use compute::Energies;
pub use container::Container;
pub use error::Error;
pub use integrators::Verlet;
pub use lattice::{Cubic, Lattice};
pub use simulation::Simulation;
