//! Observables derived from saved trajectory frames: pair-distance
//! histograms, the radial distribution function, and the mean square
//! displacement. All distances respect the minimum-image convention.

use std::f64::consts::PI;

use crate::{utils::norm_squared, Container};

/// Histogram of minimum-image pair distances, normalised by the particle
/// count. Distances at or beyond `bin_width * num_bins` are discarded.
pub fn pair_distance_histogram(
    positions: &[[f64; 3]],
    container: &Container,
    bin_width: f64,
    num_bins: usize,
) -> Vec<f64> {
    let mut bins = vec![0.0; num_bins];
    for i in 0..positions.len() {
        for j in 0..i {
            let sep = container.minimum_image(&positions[i], &positions[j]);
            let r = norm_squared(&sep).sqrt();
            let bin = (r / bin_width) as usize;
            if bin < num_bins {
                bins[bin] += 1.0;
            }
        }
    }
    let num_atoms = positions.len() as f64;
    if num_atoms > 0.0 {
        for bin in bins.iter_mut() {
            *bin /= num_atoms;
        }
    }
    bins
}

/// Radial distribution histogram averaged over frames, each bin divided by
/// the volume of its spherical shell. The caller divides by the number
/// density to obtain g(r).
pub fn radial_distribution(
    frames: &[Vec<[f64; 3]>],
    container: &Container,
    bin_width: f64,
    num_bins: usize,
) -> Vec<f64> {
    let mut averaged = vec![0.0; num_bins];
    for frame in frames {
        let histogram = pair_distance_histogram(frame, container, bin_width, num_bins);
        for (avg, count) in averaged.iter_mut().zip(histogram) {
            *avg += count;
        }
    }
    let num_frames = frames.len().max(1) as f64;
    for (bin, avg) in averaged.iter_mut().enumerate() {
        let r_mid = (bin as f64 + 0.5) * bin_width;
        let shell_volume = 4.0 * PI * r_mid * r_mid * bin_width;
        *avg /= num_frames * shell_volume;
    }
    averaged
}

/// Mean square displacement of each frame relative to the first, averaged
/// over particles
pub fn mean_square_displacement(frames: &[Vec<[f64; 3]>], container: &Container) -> Vec<f64> {
    let initial = match frames.first() {
        Some(frame) => frame,
        None => return Vec::new(),
    };
    frames
        .iter()
        .map(|frame| {
            let sum: f64 = frame
                .iter()
                .zip(initial)
                .map(|(current, start)| norm_squared(&container.minimum_image(start, current)))
                .sum();
            sum / initial.len().max(1) as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_one_pair() {
        let container = Container::new(10.0).unwrap();
        let positions = [[0.0, 0.0, 0.0], [1.05, 0.0, 0.0]];
        let bins = pair_distance_histogram(&positions, &container, 0.1, 20);
        // One pair at r = 1.05 lands in bin 10, normalised by N = 2
        assert_eq!(bins[10], 0.5);
        assert_eq!(bins.iter().filter(|&&b| b != 0.0).count(), 1);
    }

    #[test]
    fn histogram_uses_minimum_image_distance() {
        let container = Container::new(10.0).unwrap();
        // 9.5 apart in the box, 0.5 apart through the boundary
        let positions = [[0.25, 0.0, 0.0], [9.75, 0.0, 0.0]];
        let bins = pair_distance_histogram(&positions, &container, 1.0, 10);
        assert_eq!(bins[0], 0.5);
    }

    #[test]
    fn msd_starts_at_zero_and_tracks_motion() {
        let container = Container::new(10.0).unwrap();
        let frames = vec![
            vec![[0.0, 0.0, 0.0], [5.0, 5.0, 5.0]],
            vec![[1.0, 0.0, 0.0], [5.0, 6.0, 5.0]],
        ];
        let msd = mean_square_displacement(&frames, &container);
        assert_eq!(msd[0], 0.0);
        assert!((msd[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn msd_respects_periodic_wraparound() {
        let container = Container::new(10.0).unwrap();
        // The particle crossed the boundary, not 9.8 units of real motion
        let frames = vec![vec![[0.1, 0.0, 0.0]], vec![[9.9, 0.0, 0.0]]];
        let msd = mean_square_displacement(&frames, &container);
        assert!((msd[1] - 0.04).abs() < 1e-12);
    }
}
