use rand_distr::Distribution;

use crate::utils::MASS;

/// Atom properties during simulation, not including forces
#[derive(Clone, Debug, Default)]
pub struct Atoms {
    pub positions: Vec<[f64; 3]>,
    pub velocities: Vec<[f64; 3]>,
}
impl Atoms {
    pub fn new() -> Self {
        Atoms {
            positions: Vec::new(),
            velocities: Vec::new(),
        }
    }
    pub fn num_atoms(&self) -> usize {
        self.positions.len()
    }
    pub fn positions(&self) -> &Vec<[f64; 3]> {
        &self.positions
    }
    pub fn velocities(&self) -> &Vec<[f64; 3]> {
        &self.velocities
    }

    /// Append atoms at the given coordinates, initially at rest
    pub fn add_atoms(&mut self, coords: Vec<[f64; 3]>) {
        self.velocities.resize(self.positions.len() + coords.len(), [0.0; 3]);
        self.positions.extend(coords);
    }

    pub fn increment_position(&mut self, i: usize, increment: [f64; 3]) {
        self.positions[i][0] += increment[0];
        self.positions[i][1] += increment[1];
        self.positions[i][2] += increment[2];
    }
    pub fn increment_velocity(&mut self, i: usize, increment: [f64; 3]) {
        self.velocities[i][0] += increment[0];
        self.velocities[i][1] += increment[1];
        self.velocities[i][2] += increment[2];
    }

    /// Draw velocities from the Maxwell-Boltzmann distribution at the given
    /// temperature (each component normal with variance T / m)
    pub fn set_temperature(&mut self, temperature: f64) {
        let mut rng = rand::thread_rng();
        let dist =
            rand_distr::Normal::new(0.0, (temperature / MASS).sqrt()).expect("Invalid temperature");
        for velocity in self.velocities.iter_mut() {
            *velocity = [
                dist.sample(&mut rng),
                dist.sample(&mut rng),
                dist.sample(&mut rng),
            ];
        }
    }
}
