use crate::error::{FitError, FitResult};

/// Galaxy distances in Mpc.
pub const HUBBLE_DISTANCES_MPC: [f64; 24] = [
    0.032, 0.034, 0.214, 0.263, 0.275, 0.275, 0.45, 0.5, //
    0.5, 0.63, 0.8, 0.9, 0.9, 0.9, 0.9, 1.0, //
    1.1, 1.1, 1.4, 1.7, 2.0, 2.0, 2.0, 2.0,
];

/// Recession velocities in km/s, paired index by index with the distances.
pub const HUBBLE_VELOCITIES_KMS: [f64; 24] = [
    170.0, 290.0, -130.0, -70.0, -185.0, -220.0, 200.0, 290.0, //
    270.0, 200.0, 300.0, -30.0, 650.0, 150.0, 500.0, 920.0, //
    450.0, 500.0, 500.0, 960.0, 500.0, 850.0, 800.0, 1090.0,
];

#[derive(Debug, Clone, Copy)]
pub struct SampleSet<'a> {
    distances: &'a [f64],
    velocities: &'a [f64],
}

impl<'a> SampleSet<'a> {
    pub fn new(distances: &'a [f64], velocities: &'a [f64]) -> FitResult<Self> {
        if distances.len() != velocities.len() {
            return Err(FitError::LengthMismatch {
                distances: distances.len(),
                velocities: velocities.len(),
            });
        }
        Ok(Self {
            distances,
            velocities,
        })
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distances(&self) -> &'a [f64] {
        self.distances
    }

    pub fn velocities(&self) -> &'a [f64] {
        self.velocities
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.distances
            .iter()
            .copied()
            .zip(self.velocities.iter().copied())
    }
}

impl SampleSet<'static> {
    /// Hubble's 1929 measurements.
    pub fn hubble_1929() -> Self {
        Self {
            distances: &HUBBLE_DISTANCES_MPC,
            velocities: &HUBBLE_VELOCITIES_KMS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hubble_set_has_24_points() {
        let samples = SampleSet::hubble_1929();
        assert_eq!(samples.len(), 24);
        assert!(!samples.is_empty());
        assert_eq!(samples.points().next(), Some((0.032, 170.0)));
        assert_eq!(samples.points().last(), Some((2.0, 1090.0)));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = SampleSet::new(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            FitError::LengthMismatch {
                distances: 3,
                velocities: 2
            }
        );
    }
}
