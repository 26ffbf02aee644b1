//! Linear resampling of sampled waveforms.

/// Resamples `source` to `len` samples by linear interpolation.
///
/// Target index `i` maps uniformly onto the source at
/// `i * (source.len() - 1) / (len - 1)`, and the two nearest source samples
/// are blended by the fractional part. The end points of the source always map
/// onto the end points of the result.
///
/// Resampling to the same length returns the source unchanged. A target length
/// of 1 takes the first source sample, and an empty source yields zeros.
#[must_use]
pub fn resample(source: &[f64], len: usize) -> Vec<f64> {
    if source.is_empty() {
        return vec![0.0; len];
    }
    match len {
        0 => return Vec::new(),
        1 => return vec![source[0]],
        _ => {}
    }

    tracing::debug!(from = source.len(), to = len, "resampling");

    (0..len)
        .map(|i| {
            let index = i as f64 * (source.len() - 1) as f64 / (len - 1) as f64;
            let lower = index.floor() as usize;
            let upper = index.ceil() as usize;
            let weight = index - lower as f64;
            match source.get(upper) {
                Some(&above) => source[lower] * (1.0 - weight) + above * weight,
                None => source[lower],
            }
        })
        .collect()
}
