use crate::{utils::wrap, Error};

/// Cubic simulation box, periodic along all three axes
#[derive(Clone, Copy, Debug)]
pub struct Container {
    edge: f64,
}
impl Container {
    /// Create a container with the given edge length
    pub fn new(edge: f64) -> Result<Self, Error> {
        if edge > 0.0 {
            Ok(Self { edge })
        } else {
            Err(Error::InvalidBoxEdge(edge))
        }
    }

    pub fn edge(&self) -> f64 {
        self.edge
    }
    pub fn volume(&self) -> f64 {
        self.edge * self.edge * self.edge
    }

    /// Displacement from `p1` to `p2` under the minimum-image convention.
    ///
    /// Each component is folded into `[0, edge)` and recentered into
    /// `[-edge/2, edge/2)`, so the result is the shortest separation among
    /// the periodic images along each axis independently. Inputs need not
    /// lie inside the primary box.
    pub fn minimum_image(&self, p1: &[f64; 3], p2: &[f64; 3]) -> [f64; 3] {
        let half = 0.5 * self.edge;
        let mut sep = [0.0; 3];
        for k in 0..3 {
            let folded = wrap(p2[k] - p1[k], self.edge);
            sep[k] = wrap(folded + half, self.edge) - half;
        }
        sep
    }

    /// Map a position back into the primary box
    pub fn fold(&self, position: &[f64; 3]) -> [f64; 3] {
        [
            wrap(position[0], self.edge),
            wrap(position[1], self.edge),
            wrap(position[2], self.edge),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::norm_squared;

    #[test]
    fn rejects_non_positive_edge() {
        assert!(Container::new(0.0).is_err());
        assert!(Container::new(-4.0).is_err());
        assert!(Container::new(10.0).is_ok());
    }

    #[test]
    fn separation_within_half_box() {
        let container = Container::new(10.0).unwrap();
        let sep = container.minimum_image(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0]);
        assert_eq!(sep, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn separation_across_boundary() {
        let container = Container::new(10.0).unwrap();
        // Shortest path from x=0.5 to x=9.5 crosses the boundary
        let sep = container.minimum_image(&[0.5, 0.0, 0.0], &[9.5, 0.0, 0.0]);
        assert_eq!(sep, [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn separation_unchanged_by_whole_box_translation() {
        let container = Container::new(10.0).unwrap();
        let p1 = [2.0, 3.0, 4.0];
        let p2 = [3.5, 1.0, 9.0];
        let translated = [p2[0] + 10.0, p2[1] - 20.0, p2[2] + 30.0];
        assert_eq!(
            container.minimum_image(&p1, &p2),
            container.minimum_image(&p1, &translated)
        );
    }

    #[test]
    fn separation_components_bounded() {
        let container = Container::new(7.0).unwrap();
        let sep = container.minimum_image(&[-12.3, 55.1, 0.4], &[8.8, -3.2, 6.9]);
        for component in sep {
            assert!(component >= -3.5 && component < 3.5);
        }
        assert!(norm_squared(&sep) <= 3.0 * 3.5 * 3.5);
    }

    #[test]
    fn fold_maps_into_primary_box() {
        let container = Container::new(10.0).unwrap();
        assert_eq!(container.fold(&[-1.0, 11.0, 5.0]), [9.0, 1.0, 5.0]);
    }
}
