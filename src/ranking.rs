use crate::error::DbscanError;
use crate::point::{Label, PointId};

/// A discovered cluster: its id and its members in storage order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCluster {
    pub cluster_id: usize,
    pub members: Vec<PointId>,
}

impl RankedCluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Non-noise clusters ordered by descending size.
///
/// Clusters of equal size stay in discovery order, but callers should not
/// rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedClusters {
    clusters: Vec<RankedCluster>,
}

impl RankedClusters {
    /// Number of non-noise clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedCluster> {
        self.clusters.iter()
    }

    /// Cluster sizes, largest first.
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(RankedCluster::len).collect()
    }

    /// The `n` largest clusters.
    ///
    /// # Errors
    ///
    /// Returns `DbscanError::InsufficientClusters` if fewer than `n`
    /// clusters exist.
    pub fn top(&self, n: usize) -> Result<&[RankedCluster], DbscanError> {
        if n > self.clusters.len() {
            return Err(DbscanError::InsufficientClusters {
                requested: n,
                found: self.clusters.len(),
            });
        }
        Ok(&self.clusters[..n])
    }

    /// Member identifiers of the `n` largest clusters.
    pub fn top_members(&self, n: usize) -> Result<Vec<Vec<PointId>>, DbscanError> {
        Ok(self.top(n)?.iter().map(|c| c.members.clone()).collect())
    }
}

impl<'a> IntoIterator for &'a RankedClusters {
    type Item = &'a RankedCluster;
    type IntoIter = std::slice::Iter<'a, RankedCluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

/// Group identifiers by cluster label and rank the groups by size.
///
/// `ids` and `labels` are parallel, indexed by storage slot. Noise (and any
/// unclassified slot) is dropped.
pub fn rank_clusters(ids: &[PointId], labels: &[Label], n_clusters: usize) -> RankedClusters {
    let mut clusters: Vec<RankedCluster> = (0..n_clusters)
        .map(|cluster_id| RankedCluster {
            cluster_id,
            members: Vec::new(),
        })
        .collect();

    for (&id, label) in ids.iter().zip(labels) {
        if let Some(cluster_id) = label.cluster() {
            clusters[cluster_id].members.push(id);
        }
    }

    clusters.retain(|c| !c.is_empty());
    // stable, so ties keep discovery order
    clusters.sort_by(|a, b| b.len().cmp(&a.len()));

    RankedClusters { clusters }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_descending_size() {
        let ids = [10, 11, 12, 13, 14, 15];
        let labels = [
            Label::Cluster(0),
            Label::Cluster(1),
            Label::Noise,
            Label::Cluster(1),
            Label::Cluster(2),
            Label::Cluster(1),
        ];

        let ranked = rank_clusters(&ids, &labels, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked.sizes(), vec![3, 1, 1]);

        let top = ranked.top(1).unwrap();
        assert_eq!(top[0].cluster_id, 1);
        assert_eq!(top[0].members, vec![11, 13, 15]);
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let ids = [1, 2, 3, 4];
        let labels = [
            Label::Cluster(0),
            Label::Cluster(1),
            Label::Cluster(1),
            Label::Cluster(0),
        ];

        let ranked = rank_clusters(&ids, &labels, 2);
        let order: Vec<usize> = ranked.iter().map(|c| c.cluster_id).collect();
        assert_eq!(order, vec![0, 1]);
        assert_eq!(ranked.top_members(2).unwrap(), vec![vec![1, 4], vec![2, 3]]);
    }

    #[test]
    fn test_top_more_than_available_fails() {
        let ranked = rank_clusters(&[1, 2], &[Label::Cluster(0), Label::Noise], 1);

        assert!(ranked.top(1).is_ok());
        assert!(ranked.top(0).unwrap().is_empty());
        match ranked.top(2) {
            Err(DbscanError::InsufficientClusters { requested, found }) => {
                assert_eq!(requested, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected InsufficientClusters, got {:?}", other),
        }
    }

    #[test]
    fn test_all_noise_has_no_clusters() {
        let ranked = rank_clusters(&[1, 2, 3], &[Label::Noise; 3], 0);
        assert!(ranked.is_empty());
        assert!(matches!(
            ranked.top(1),
            Err(DbscanError::InsufficientClusters {
                requested: 1,
                found: 0
            })
        ));
    }
}
