use super::AtomicPotentialTrait;

/// Lennard-Jones 12-6 potential with a hard distance cutoff.
///
/// The energy is shifted by its value at the cutoff so it goes to zero
/// continuously at `r = rcut`; the force is truncated without smoothing and
/// is discontinuous there.
#[derive(Clone, Copy, Debug)]
pub struct LJCut {
    sigma: f64,
    epsilon: f64,
    rcut: f64,
    sigma6: f64,
    rcut2: f64,
    shift: f64, // unshifted potential evaluated at rcut
}
impl LJCut {
    pub fn new(sigma: f64, epsilon: f64, rcut: f64) -> Self {
        let sigma6 = sigma * sigma * sigma * sigma * sigma * sigma;
        let rcut2 = rcut * rcut;
        let rcut6 = rcut2 * rcut2 * rcut2;
        let shift = 4.0 * epsilon * sigma6 / rcut6 * (sigma6 / rcut6 - 1.0);
        Self {
            sigma,
            epsilon,
            rcut,
            sigma6,
            rcut2,
            shift,
        }
    }
    /// Reduced-unit potential, sigma = epsilon = 1
    pub fn reduced(rcut: f64) -> Self {
        Self::new(1.0, 1.0, rcut)
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
    pub fn rcut(&self) -> f64 {
        self.rcut
    }
}

impl AtomicPotentialTrait for LJCut {
    fn cutoff_distance(&self) -> f64 {
        self.rcut
    }

    fn pair_force(&self, sep: &[f64; 3], r: f64) -> [f64; 3] {
        let r2 = r * r;
        if r2 >= self.rcut2 {
            return [0.0; 3];
        }
        let r6 = r2 * r2 * r2;
        // f(r)/r = 24 eps / r^2 (2 (sig/r)^12 - (sig/r)^6)
        // which reduces to 48 (r^-14 - r^-8 / 2) for sig = eps = 1
        let f_over_r = 24.0 * self.epsilon * self.sigma6 / r6 / r2 * (2.0 * self.sigma6 / r6 - 1.0);
        [f_over_r * sep[0], f_over_r * sep[1], f_over_r * sep[2]]
    }

    fn pair_energy(&self, r: f64) -> f64 {
        let r2 = r * r;
        if r2 >= self.rcut2 {
            return 0.0;
        }
        let r6 = r2 * r2 * r2;
        // U(r) = 4 eps ((sig/r)^12 - (sig/r)^6), shifted so U(rcut) = 0
        4.0 * self.epsilon * self.sigma6 / r6 * (self.sigma6 / r6 - 1.0) - self.shift
    }
}
