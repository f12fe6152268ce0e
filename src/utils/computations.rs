use num_traits::Float;

/// Particle mass in reduced Lennard-Jones units
pub const MASS: f64 = 1.0;

/// Floating-point modulo mapping into `[0, div)` for positive `div`.
///
/// Unlike the `%` operator, the result is non-negative for negative inputs.
pub fn wrap<T: Float>(x: T, div: T) -> T {
    let rem = x % div;
    if rem >= T::zero() {
        rem
    } else {
        rem + div
    }
}

pub fn norm_squared(v: &[f64; 3]) -> f64 {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}

/// Kinetic energy of a single particle, `m v^2 / 2`
pub fn kinetic_energy(velocity: &[f64; 3]) -> f64 {
    0.5 * MASS * norm_squared(velocity)
}

/// Adds `source` into `target` in place, subtracting instead when `negate`
/// is set. Applying a pair force once with each sign keeps action and
/// reaction balanced.
pub fn accumulate(target: &mut [f64; 3], source: &[f64; 3], negate: bool) {
    let sign = if negate { -1.0 } else { 1.0 };
    target[0] += sign * source[0];
    target[1] += sign * source[1];
    target[2] += sign * source[2];
}
