//! Dense linear ranges of sample points

/// `n` evenly spaced values over the closed interval `[start, end]`
///
/// Both endpoints are included. `n == 0` gives an empty vector and `n == 1` gives
/// `[start]`.
///
/// # Example
/// ```
/// use classwork_core::linspace;
/// assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-5.0, 5.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], -5.0);
        assert_eq!(xs[99], 5.0);
    }

    #[test]
    fn test_linspace_uniform_step() {
        let xs = linspace(0.0, 1.0, 11);
        for pair in xs.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn test_linspace_descending() {
        assert_eq!(linspace(1.0, -1.0, 3), vec![1.0, 0.0, -1.0]);
    }
}
