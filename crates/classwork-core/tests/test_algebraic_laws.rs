/// Property tests for the callable functions and the half-plane point
///
/// This module tests:
/// - Closure of straight lines under addition
/// - Polynomial evaluation against the written-out sum
/// - The half-plane clamp on construction and on assignment
use classwork_core::{HalfPlanePoint, Polynomial, ScalarFunction, StraightLine};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn test_line_addition_is_pointwise(
        m1 in -1e3f64..1e3, c1 in -1e3f64..1e3,
        m2 in -1e3f64..1e3, c2 in -1e3f64..1e3,
        x in -1e3f64..1e3,
    ) {
        let a = StraightLine::new(m1, c1);
        let b = StraightLine::new(m2, c2);
        let sum = a + b;
        prop_assert!(close(sum.evaluate(x), a.evaluate(x) + b.evaluate(x)));
    }

    #[test]
    fn test_polynomial_matches_written_sum(
        coeffs in prop::collection::vec(-10.0f64..10.0, 0..6),
        x in -3.0f64..3.0,
    ) {
        let p = Polynomial::new(coeffs.clone());
        let n = coeffs.len();
        let expected: f64 = coeffs
            .iter()
            .enumerate()
            .map(|(k, c)| c * x.powi((n - 1 - k) as i32))
            .sum();
        prop_assert!(close(p.evaluate(x), expected));
    }

    #[test]
    fn test_half_plane_construction(x in -1e6f64..1e6, y in -1e6f64..1e6) {
        let p = HalfPlanePoint::new(x, y);
        prop_assert_eq!(p.x(), x);
        if y < 0.0 {
            prop_assert_eq!(p.y(), 0.0);
        } else {
            prop_assert_eq!(p.y(), y);
        }
    }

    #[test]
    fn test_half_plane_assignment(x in -1e6f64..1e6, y in -1e6f64..1e6) {
        let mut p = HalfPlanePoint::new(x, 1.0);
        p.set_y(y);
        prop_assert_eq!(p.x(), x);
        prop_assert!(p.y() >= 0.0);
        prop_assert_eq!(p.y(), y.max(0.0));
    }
}

#[test]
fn test_known_polynomial_values() {
    assert_eq!(Polynomial::new([1.0, 3.0, -2.0]).evaluate(2.0), 8.0);
    assert_eq!(Polynomial::new([3.0, -2.0]).evaluate(2.0), 4.0);
    assert_eq!(Polynomial::new([-2.0]).evaluate(2.0), -2.0);
}

#[test]
fn test_sampling_maps_elementwise() {
    let line = StraightLine::new(0.7, -2.0);
    let xs: Vec<f64> = (-3..3).map(f64::from).collect();
    let ys = line.sample(&xs);
    assert_eq!(ys.len(), xs.len());
    for (x, y) in xs.iter().zip(&ys) {
        assert_eq!(*y, line.evaluate(*x));
    }
}
