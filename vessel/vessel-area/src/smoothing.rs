//! Gaussian smoothing of per-sample scalar arrays.
//!
//! Cross-sectional area measurements are noisy; the factor computation
//! low-pass filters the area array before deriving factors from it.

/// Smooths a scalar array with a discrete Gaussian kernel.
///
/// The kernel is truncated at four standard deviations and normalized to
/// unit sum. Boundaries are handled by reflecting the array about its
/// edges, so a constant input is returned unchanged.
///
/// Inputs with `sigma <= 0` are returned as-is.
///
/// # Example
///
/// ```
/// use vessel_area::gaussian_smooth;
///
/// let smoothed = gaussian_smooth(&[1.0; 32], 5.0);
/// assert!(smoothed.iter().all(|&v| (v - 1.0).abs() < 1e-12));
///
/// // An impulse is spread out symmetrically.
/// let mut impulse = vec![0.0; 33];
/// impulse[16] = 1.0;
/// let smoothed = gaussian_smooth(&impulse, 2.0);
/// assert!(smoothed[16] < 1.0);
/// assert!((smoothed[15] - smoothed[17]).abs() < 1e-12);
/// ```
#[must_use]
pub fn gaussian_smooth(values: &[f64], sigma: f64) -> Vec<f64> {
    if values.is_empty() || sigma <= 0.0 {
        return values.to_vec();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let radius = (4.0 * sigma).ceil() as isize;

    let kernel: Vec<f64> = (-radius..=radius)
        .map(|offset| {
            let x = offset as f64 / sigma;
            (-0.5 * x * x).exp()
        })
        .collect();
    let norm: f64 = kernel.iter().sum();

    (0..values.len())
        .map(|i| {
            let weighted: f64 = kernel
                .iter()
                .enumerate()
                .map(|(k, w)| {
                    #[allow(clippy::cast_possible_wrap)]
                    let index = reflect(i as isize + k as isize - radius, values.len());
                    w * values[index]
                })
                .sum();
            weighted / norm
        })
        .collect()
}

/// Maps an out-of-range index back into `0..len` by reflection about the
/// array edges (`[c b a | a b c | c b a]`).
fn reflect(index: isize, len: usize) -> usize {
    #[allow(clippy::cast_possible_wrap)]
    let len = len as isize;
    let mut i = index;
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= len {
            i = 2 * len - i - 1;
        } else {
            #[allow(clippy::cast_sign_loss)]
            return i as usize;
        }
    }
}
