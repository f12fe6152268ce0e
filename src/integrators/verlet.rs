use crate::{utils::MASS, AtomicPotentialTrait, Error, Simulation};

/// Velocity-Verlet integrator
pub struct Verlet {
    pub timestep: f64,
}

impl Verlet {
    pub fn new(timestep: f64) -> Self {
        assert!(
            timestep > 0.0,
            "Timestep should be positive, found {}",
            timestep,
        );
        Self { timestep }
    }

    /// Advance the simulation by one timestep.
    ///
    /// Positions move by `v dt + F dt^2 / 2m` under the stored forces,
    /// forces are recomputed, then velocities move by the mean of the old
    /// and new forces times `dt / m`. The stored forces are F(t + dt) on
    /// return.
    pub fn step<A: AtomicPotentialTrait>(&self, sim: &mut Simulation<A>) -> Result<(), Error> {
        let dt = self.timestep;

        for i in 0..sim.atoms.num_atoms() {
            let vel = sim.atoms.velocities()[i];
            let force = sim.forces()[i];
            sim.atoms.increment_position(
                i,
                [
                    dt * vel[0] + 0.5 * dt * dt * force[0] / MASS,
                    dt * vel[1] + 0.5 * dt * dt * force[1] / MASS,
                    dt * vel[2] + 0.5 * dt * dt * force[2] / MASS,
                ],
            );
        }

        let new_forces = sim.compute_forces()?;
        let half_dt = 0.5 * self.timestep;
        for i in 0..sim.atoms.num_atoms() {
            let old = sim.forces()[i];
            let new = new_forces[i];
            sim.atoms.increment_velocity(
                i,
                [
                    half_dt * (old[0] + new[0]) / MASS,
                    half_dt * (old[1] + new[1]) / MASS,
                    half_dt * (old[2] + new[2]) / MASS,
                ],
            );
        }
        sim.set_forces(new_forces);

        Ok(())
    }

    /// Run for `num_steps` steps, folding positions back into the box and
    /// invoking `sampler` with the step index before each move
    pub fn run<A, F>(
        &self,
        sim: &mut Simulation<A>,
        num_steps: usize,
        mut sampler: F,
    ) -> Result<(), Error>
    where
        A: AtomicPotentialTrait,
        F: FnMut(usize, &Simulation<A>),
    {
        for step in 0..num_steps {
            sim.fold_positions();
            sampler(step, sim);
            self.step(sim)?;
        }
        Ok(())
    }
}
