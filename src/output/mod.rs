use std::io::{self, Write};

use crate::compute::Energies;

/// Trajectory writer in the VMD-readable XYZ layout: a particle count and
/// `Point = <step>` header per frame, then one labelled line per particle
pub struct XyzWriter<W: Write> {
    writer: W,
}
impl<W: Write> XyzWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_frame(&mut self, step: usize, positions: &[[f64; 3]]) -> io::Result<()> {
        writeln!(self.writer, "{}", positions.len())?;
        writeln!(self.writer, "Point = {}", step)?;
        for (i, p) in positions.iter().enumerate() {
            writeln!(self.writer, "s{} {} {} {}", i + 1, p[0], p[1], p[2])?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Plain-text energy table with one row per sample
pub struct EnergyWriter<W: Write> {
    writer: W,
}
impl<W: Write> EnergyWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_row(&mut self, time: f64, energies: &Energies) -> io::Result<()> {
        writeln!(
            self.writer,
            "{} {} {} {}",
            time, energies.potential, energies.kinetic, energies.total
        )
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
