use ndarray::{Array2, ArrayView2};

use crate::point::{Point, PointStore};

/// A distance measure between two points.
///
/// Implementations should return real, non-negative, symmetric values;
/// the table only evaluates each unordered pair once and mirrors it.
/// Any closure `Fn(&Point, &Point) -> f64` is a metric.
pub trait Metric {
    fn distance(&self, a: &Point, b: &Point) -> f64;
}

impl<F> Metric for F
where
    F: Fn(&Point, &Point) -> f64,
{
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        self(a, b)
    }
}

/// Straight-line (L2) distance in the plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Pairwise distances between every point of a store.
///
/// Indices are storage slots of the `PointStore` the table was built from.
/// The matrix is symmetric with a zero diagonal and is never modified after
/// construction.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    distances: Array2<f64>,
}

impl DistanceTable {
    /// Compute the Euclidean distance table for `store`.
    pub fn new(store: &PointStore) -> Self {
        Self::with_metric(store, &Euclidean)
    }

    /// Compute the distance table for `store` under `metric`.
    ///
    /// O(n²) time and memory.
    pub fn with_metric<M: Metric + ?Sized>(store: &PointStore, metric: &M) -> Self {
        let points = store.points();
        let n = points.len();
        let mut distances = Array2::zeros((n, n));

        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(&points[i], &points[j]);
                distances[[i, j]] = d;
                distances[[j, i]] = d;
            }
        }

        Self { distances }
    }

    /// Number of points covered by the table.
    pub fn len(&self) -> usize {
        self.distances.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance between slots `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.distances[[i, j]]
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.distances.view()
    }

    /// Slots of every other point strictly closer than `eps` to `target`,
    /// in storage order.
    ///
    /// `target` itself is never returned, whatever `eps` is.
    pub fn neighbours(&self, target: usize, eps: f64) -> Vec<usize> {
        self.distances
            .row(target)
            .iter()
            .enumerate()
            .filter(|&(j, &d)| j != target && d < eps)
            .map(|(j, _)| j)
            .collect()
    }
}
