use crate::algorithm::{expand_clusters, Expansion};
use crate::config::DbscanConfig;
use crate::distance::{DistanceTable, Metric};
use crate::error::DbscanError;
use crate::point::{Label, PointId, PointStore};
use crate::ranking::{rank_clusters, RankedClusters};

/// Outcome of one DBSCAN run over a `PointStore`.
///
/// Labels are stored by storage slot alongside a copy of the store, so the
/// result can be queried by identifier and ranked on its own.
#[derive(Debug, Clone)]
pub struct Clustering {
    store: PointStore,
    expansion: Expansion,
}

impl Clustering {
    fn new(store: &PointStore, expansion: Expansion) -> Self {
        Self {
            store: store.clone(),
            expansion,
        }
    }

    /// Final label of every point, in storage order.
    pub fn labels(&self) -> &[Label] {
        &self.expansion.labels
    }

    /// Final label of the point with identifier `id`.
    pub fn label_of(&self, id: PointId) -> Result<Label, DbscanError> {
        self.store
            .index_of(id)
            .map(|slot| self.expansion.labels[slot])
            .ok_or(DbscanError::UnknownPoint(id))
    }

    /// Number of clusters discovered.
    pub fn n_clusters(&self) -> usize {
        self.expansion.n_clusters()
    }

    /// Identifiers of the points left as noise, in storage order.
    pub fn noise_points(&self) -> Vec<PointId> {
        self.store
            .points()
            .iter()
            .zip(&self.expansion.labels)
            .filter(|(_, label)| label.is_noise())
            .map(|(point, _)| point.id)
            .collect()
    }

    /// Identifier of the core point that started each cluster, indexed by
    /// cluster id.
    pub fn core_seeds(&self) -> Vec<PointId> {
        self.expansion
            .seeds
            .iter()
            .map(|&slot| self.store.points()[slot].id)
            .collect()
    }

    /// Clusters grouped and ordered by descending size.
    pub fn ranked(&self) -> RankedClusters {
        rank_clusters(&self.store.ids(), &self.expansion.labels, self.n_clusters())
    }
}

/// Density-based clustering of 2-D points.
///
/// # Example
///
/// ```
/// use dbscan_rs::{Dbscan, Label, PointStore};
///
/// let store = PointStore::from_coords(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (10.0, 10.0)]);
///
/// let mut dbscan = Dbscan::new(1.5, 2);
/// dbscan.fit(&store);
///
/// let clustering = dbscan.clustering().unwrap();
/// assert_eq!(clustering.n_clusters(), 1);
/// assert_eq!(clustering.label_of(3).unwrap(), Label::Noise);
///
/// let top = dbscan.top_clusters(1).unwrap();
/// assert_eq!(top, vec![vec![0, 1, 2]]);
/// assert!(dbscan.top_clusters(2).is_err());
/// ```
pub struct Dbscan {
    /// Model configuration
    config: DbscanConfig,

    /// Result of the last fit (None if not yet fitted)
    clustering: Option<Clustering>,
}

impl Dbscan {
    /// Create a new instance with radius `eps` and density threshold `min_pts`.
    pub fn new(eps: f64, min_pts: usize) -> Self {
        Self::with_config(DbscanConfig::new(eps, min_pts))
    }

    pub fn with_config(config: DbscanConfig) -> Self {
        Self {
            config,
            clustering: None,
        }
    }

    /// Cluster `store` using Euclidean distance.
    ///
    /// Any previous result is replaced.
    pub fn fit(&mut self, store: &PointStore) -> &mut Self {
        let table = DistanceTable::new(store);
        self.fit_table(store, &table)
    }

    /// Cluster `store` using a custom distance measure.
    pub fn fit_with_metric<M: Metric + ?Sized>(
        &mut self,
        store: &PointStore,
        metric: &M,
    ) -> &mut Self {
        let table = DistanceTable::with_metric(store, metric);
        self.fit_table(store, &table)
    }

    /// Cluster `store` using a distance table already computed for it.
    ///
    /// # Panics
    ///
    /// Panics if `table` does not cover exactly the points of `store`.
    pub fn fit_table(&mut self, store: &PointStore, table: &DistanceTable) -> &mut Self {
        assert_eq!(
            store.len(),
            table.len(),
            "distance table does not match the point store"
        );
        let expansion = expand_clusters(table, &self.config);
        self.clustering = Some(Clustering::new(store, expansion));
        self
    }

    /// Fit and return the label of every point in storage order.
    pub fn fit_predict(&mut self, store: &PointStore) -> Vec<Label> {
        self.fit(store);
        self.clustering
            .as_ref()
            .map(|c| c.labels().to_vec())
            .unwrap_or_default()
    }

    /// Result of the last fit, if any.
    pub fn clustering(&self) -> Option<&Clustering> {
        self.clustering.as_ref()
    }

    /// Member identifiers of the `n` largest clusters, largest first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model has not been fitted yet
    /// - Fewer than `n` clusters were found
    pub fn top_clusters(&self, n: usize) -> Result<Vec<Vec<PointId>>, DbscanError> {
        let clustering = self.clustering.as_ref().ok_or(DbscanError::NotFitted)?;
        clustering.ranked().top_members(n)
    }

    pub fn config(&self) -> &DbscanConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn scenario() -> PointStore {
        PointStore::new(vec![
            Point::new(100, 0.0, 0.0),
            Point::new(200, 0.0, 1.0),
            Point::new(300, 0.0, 2.0),
            Point::new(400, 10.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_dbscan_new() {
        let dbscan = Dbscan::new(1.5, 2);
        assert_eq!(dbscan.config().eps, 1.5);
        assert_eq!(dbscan.config().min_pts, 2);
        assert!(dbscan.clustering().is_none());
    }

    #[test]
    fn test_top_clusters_before_fit() {
        let dbscan = Dbscan::new(1.5, 2);
        assert!(matches!(dbscan.top_clusters(1), Err(DbscanError::NotFitted)));
    }

    #[test]
    fn test_fit_uses_caller_ids() {
        let store = scenario();
        let mut dbscan = Dbscan::new(1.5, 2);
        dbscan.fit(&store);

        let clustering = dbscan.clustering().unwrap();
        assert_eq!(clustering.n_clusters(), 1);
        assert_eq!(clustering.core_seeds(), vec![200]);
        assert_eq!(clustering.noise_points(), vec![400]);
        assert_eq!(clustering.label_of(100).unwrap(), Label::Cluster(0));
        assert_eq!(clustering.label_of(400).unwrap(), Label::Noise);
        assert!(matches!(
            clustering.label_of(999),
            Err(DbscanError::UnknownPoint(999))
        ));

        assert_eq!(dbscan.top_clusters(1).unwrap(), vec![vec![100, 200, 300]]);
        assert!(matches!(
            dbscan.top_clusters(2),
            Err(DbscanError::InsufficientClusters {
                requested: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_fit_predict() {
        let mut dbscan = Dbscan::new(1.5, 2);
        let labels = dbscan.fit_predict(&scenario());
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[3], Label::Noise);
        assert!(labels.iter().all(|l| *l != Label::Unclassified));
    }

    #[test]
    fn test_fit_with_metric() {
        // under Chebyshev distance the diagonal neighbour is 1 away
        let store = PointStore::from_coords(&[(0.0, 0.0), (1.0, 1.0), (5.0, 5.0)]);
        let chebyshev = |a: &Point, b: &Point| (a.x - b.x).abs().max((a.y - b.y).abs());

        let mut dbscan = Dbscan::new(1.2, 1);
        dbscan.fit_with_metric(&store, &chebyshev);
        assert_eq!(dbscan.top_clusters(1).unwrap(), vec![vec![0, 1]]);

        dbscan.fit(&store);
        assert_eq!(dbscan.clustering().unwrap().n_clusters(), 0);
    }

    #[test]
    #[should_panic(expected = "distance table does not match the point store")]
    fn test_fit_table_size_mismatch() {
        let table = DistanceTable::new(&PointStore::from_coords(&[(0.0, 0.0)]));
        Dbscan::new(1.0, 1).fit_table(&scenario(), &table);
    }
}
