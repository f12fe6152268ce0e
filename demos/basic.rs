use std::fs::File;
use std::io::BufWriter;

use ljmd::output::{EnergyWriter, XyzWriter};
use ljmd::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let container = Container::new(6.0)?;
    let lattice = Cubic::from_density(0.5);

    let mut atoms = Atoms::new();
    atoms.add_atoms(lattice.coords_in_container(&container));
    atoms.set_temperature(1.0);

    let mut simulation = Simulation::new(atoms, LJCut::reduced(2.5), container)?;

    let mut trajectory = XyzWriter::new(BufWriter::new(File::create("trajectory.xyz")?));
    let mut energy_log = EnergyWriter::new(BufWriter::new(File::create("energies.txt")?));

    let verlet = Verlet::new(0.005);
    let mut io_result = Ok(());
    verlet.run(&mut simulation, 500, |step, sim| {
        if step % 50 != 0 || io_result.is_err() {
            return;
        }
        io_result = trajectory
            .write_frame(step, sim.atoms.positions())
            .and_then(|_| match sim.energies() {
                Ok(energies) => {
                    println!(
                        "step {:5}  PE {:10.4}  KE {:10.4}  TE {:10.4}  T {:6.3}",
                        step, energies.potential, energies.kinetic, energies.total,
                        sim.temperature(),
                    );
                    energy_log.write_row(step as f64 * verlet.timestep, &energies)
                }
                Err(_) => Ok(()),
            });
    })?;
    io_result?;

    Ok(())
}
