use classwork_core::ScalarFunction;
use serde::{Deserialize, Serialize};

/// One labelled series of `[x, y]` pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

impl Curve {
    /// Smallest and largest y value, ignoring NaN; `None` for an empty curve
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|p| p[1])
            .filter(|y| !y.is_nan())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }
}

/// Several curves overlaid on one set of axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub curves: Vec<Curve>,
}

impl Chart {
    /// An empty chart with the default axis labels and a grid
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: "x-axis".to_string(),
            y_label: "y-axis".to_string(),
            grid: true,
            curves: Vec::new(),
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Sample `function` at every x in `xs` and add the result as a curve
    pub fn plot(&mut self, label: impl Into<String>, function: &dyn ScalarFunction, xs: &[f64]) {
        self.curves.push(Curve {
            label: label.into(),
            points: function.sample_points(xs),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classwork_core::{linspace, Polynomial, StraightLine};

    #[test]
    fn test_plot_samples_every_x() {
        let xs = linspace(-5.0, 5.0, 100);
        let mut chart = Chart::new("Lines");
        chart.plot("line0", &StraightLine::new(1.0, 0.0), &xs);

        assert_eq!(chart.curves.len(), 1);
        let curve = &chart.curves[0];
        assert_eq!(curve.label, "line0");
        assert_eq!(curve.points.len(), 100);
        assert_eq!(curve.points[0], [-5.0, -5.0]);
        assert_eq!(curve.points[99], [5.0, 5.0]);
    }

    #[test]
    fn test_curves_overlay_in_order() {
        let xs = linspace(0.0, 1.0, 3);
        let mut chart = Chart::new("Polynomial curves");
        chart.plot("curve0", &Polynomial::new([-2.0]), &xs);
        chart.plot("curve1", &Polynomial::new([3.0, -2.0]), &xs);
        let labels: Vec<&str> = chart.curves.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["curve0", "curve1"]);
    }

    #[test]
    fn test_defaults_and_builders() {
        let chart = Chart::new("t");
        assert_eq!(chart.x_label, "x-axis");
        assert_eq!(chart.y_label, "y-axis");
        assert!(chart.grid);
        assert!(chart.is_empty());

        let chart = chart.with_labels("time", "value").with_grid(false);
        assert_eq!((chart.x_label.as_str(), chart.y_label.as_str()), ("time", "value"));
        assert!(!chart.grid);
    }

    #[test]
    fn test_y_range() {
        let curve = Curve {
            label: "c".to_string(),
            points: vec![[0.0, 3.0], [1.0, f64::NAN], [2.0, -1.0]],
        };
        assert_eq!(curve.y_range(), Some((-1.0, 3.0)));

        let empty = Curve {
            label: "e".to_string(),
            points: Vec::new(),
        };
        assert_eq!(empty.y_range(), None);
    }
}
