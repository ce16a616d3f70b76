//! Perimeter diffusion and neighbour averaging kernels.
//!
//! Both are pure functions over per-edge value vectors so the coupling step
//! can apply them to each species independently.

/// One explicit-Euler diffusion step around a closed perimeter.
///
/// ```text
/// x_new[i] = x_old[i] + D·(x_old[i-1] − 2·x_old[i] + x_old[i+1])·dt
/// ```
///
/// Indices wrap around. All reads come from `old`, so the result does not
/// depend on sweep order. The sum over the perimeter is conserved.
pub fn perimeter_diffusion_step(old: &[f64], diffusion_coefficient: f64, dt: f64) -> Vec<f64> {
    let n = old.len();
    (0..n)
        .map(|i| {
            let prev = old[(i + n - 1) % n];
            let next = old[(i + 1) % n];
            old[i] + diffusion_coefficient * (prev - 2.0 * old[i] + next) * dt
        })
        .collect()
}

/// Uniform mean of `values`; zero when there are none
pub fn uniform_mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: ExactSizeIterator,
{
    let values = values.into_iter();
    let count = values.len();
    // Accumulate v / n term by term, as the published averages always have
    values.map(|v| v / count as f64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_coefficient_is_identity() {
        let old = vec![0.3, 1.2, 0.7, 0.0, 2.5];
        assert_eq!(perimeter_diffusion_step(&old, 0.0, 0.1), old);
    }

    #[test]
    fn test_uniform_ring_is_steady() {
        let old = vec![0.333; 6];
        assert_eq!(perimeter_diffusion_step(&old, 0.03, 0.1), old);
    }

    #[test]
    fn test_single_peak_spreads_to_both_sides() {
        let old = vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
        let new = perimeter_diffusion_step(&old, 0.03, 0.1);

        assert!((new[2] - (1.0 - 2.0 * 0.003)).abs() < 1e-15);
        assert!((new[1] - 0.003).abs() < 1e-15);
        assert!((new[3] - 0.003).abs() < 1e-15);
        assert_eq!(new[0], 0.0);
        assert_eq!(new[5], 0.0);
    }

    #[test]
    fn test_wraps_around_perimeter() {
        let old = vec![1.0, 0.0, 0.0, 0.0];
        let new = perimeter_diffusion_step(&old, 1.0, 0.1);
        assert!((new[3] - 0.1).abs() < 1e-15);
        assert!((new[1] - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_mean_of_single_value_is_that_value() {
        assert_eq!(uniform_mean([0.42]), 0.42);
        assert_eq!(uniform_mean(Vec::<f64>::new()), 0.0);
        assert!((uniform_mean([1.0, 2.0, 4.0]) - 7.0 / 3.0).abs() < 1e-15);
    }

    proptest! {
        #[test]
        fn prop_diffusion_conserves_perimeter_total(
            old in proptest::collection::vec(0.0f64..10.0, 3..24),
            d in 0.0f64..0.5,
            dt in 0.0f64..1.0,
        ) {
            let new = perimeter_diffusion_step(&old, d, dt);
            let change: f64 = new.iter().zip(&old).map(|(n, o)| n - o).sum();
            prop_assert!(change.abs() < 1e-10, "total changed by {}", change);
        }

        #[test]
        fn prop_equal_neighbourhood_is_fixed_point(value in 0.0f64..10.0, n in 3usize..12) {
            let old = vec![value; n];
            let new = perimeter_diffusion_step(&old, 0.03, 0.1);
            for v in new {
                prop_assert!((v - value).abs() < 1e-12);
            }
        }
    }
}
