use num_traits::{Float, FromPrimitive};

/// Evenly spaced values from `y_start` to `y_end` inclusive.
///
/// Handy for frequency sweeps over any of the models in this workspace.
pub fn linspace<T>(y_start: T, y_end: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float + FromPrimitive,
{
    let dy = (y_end - y_start) / T::from(n - 1).unwrap();
    (0..n).map(move |x| y_start + T::from(x).unwrap() * dy)
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn test_linspace_endpoints() {
        let sweep: Vec<f64> = linspace(1e9, 2e9, 11).collect();
        assert_eq!(sweep.len(), 11);
        assert_eq!(sweep[0], 1e9);
        assert_eq!(sweep[10], 2e9);
        assert_eq!(sweep[5], 1.5e9);
    }
}
