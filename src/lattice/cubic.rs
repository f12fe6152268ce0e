use super::Lattice;
use crate::Container;

/// Simple cubic lattice
#[derive(Debug)]
pub struct Cubic {
    a: f64,
}
impl Cubic {
    pub fn new(a: f64) -> Self {
        let s = Self { a };
        s.assert_positive();
        s
    }
    /// Lattice whose cell volume matches one particle at the given number
    /// density
    pub fn from_density(rho: f64) -> Self {
        let s = Self {
            a: (1.0 / rho).cbrt(),
        };
        s.assert_positive();
        s
    }
    fn assert_positive(&self) {
        assert!(
            self.a > 0.0,
            "Lattice constant should be positive, found {}",
            self.a
        );
    }
}
impl Lattice for Cubic {
    fn cell_lengths(&self) -> [f64; 3] {
        [self.a, self.a, self.a]
    }
    fn coords_in_container(&self, container: &Container) -> Vec<[f64; 3]> {
        let n = (container.edge() / self.a).floor() as usize;
        let half = 0.5 * self.a;
        let mut coords: Vec<[f64; 3]> = Vec::with_capacity(n * n * n);
        // Sites sit at cell centers so no particle starts on a boundary
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    coords.push([
                        half + self.a * i as f64,
                        half + self.a * j as f64,
                        half + self.a * k as f64,
                    ]);
                }
            }
        }
        coords
    }
}
