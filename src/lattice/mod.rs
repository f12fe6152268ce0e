mod cubic;

pub use cubic::Cubic;

use crate::Container;

/// Lattice generating initial particle coordinates
pub trait Lattice {
    fn cell_lengths(&self) -> [f64; 3];

    /// Coordinates of every lattice site inside the container
    fn coords_in_container(&self, container: &Container) -> Vec<[f64; 3]>;
}
