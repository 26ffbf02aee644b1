/// Second spatial derivative by the three-point central difference.
///
/// Computes `(y[i+1] - 2 y[i] + y[i-1]) / dx^2` at every sample. The
/// neighbors past each end of the string read as zero, so the stencil sees a
/// clamped boundary even before the integrator pins the end points.
#[must_use]
pub fn second_derivative(displacement: &[f64], spatial_step: f64) -> Vec<f64> {
    let dx2 = spatial_step.powi(2);
    let last = displacement.len().saturating_sub(1);

    displacement
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let left = if i == 0 { 0.0 } else { displacement[i - 1] };
            let right = if i == last { 0.0 } else { displacement[i + 1] };
            (right - 2.0 * y + left) / dx2
        })
        .collect()
}
