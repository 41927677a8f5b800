/// Parameters of a DBSCAN run.
///
/// Both values are required, so there is no `Default`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DbscanConfig {
    /// Neighbourhood radius. Points at distance strictly less than `eps`
    /// are neighbours; a non-positive value leaves every point without
    /// neighbours.
    pub eps: f64,

    /// Minimum number of neighbours (the point itself not counted) for a
    /// point to be a core point.
    pub min_pts: usize,
}

impl DbscanConfig {
    /// Create a new configuration with the given radius and density threshold
    pub fn new(eps: f64, min_pts: usize) -> Self {
        Self { eps, min_pts }
    }

    /// Set the neighbourhood radius
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set the minimum neighbour count for core points
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }
}
