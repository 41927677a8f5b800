use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::DbscanConfig;
use crate::distance::DistanceTable;
use crate::point::Label;

/// Result of the cluster expansion, indexed by storage slot
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    /// Final label of every slot; never `Label::Unclassified`
    pub labels: Vec<Label>,
    /// Slot of the core point that started each cluster, indexed by cluster id
    pub seeds: Vec<usize>,
}

impl Expansion {
    pub fn n_clusters(&self) -> usize {
        self.seeds.len()
    }
}

/// Run DBSCAN over a precomputed distance table.
///
/// Points are scanned once in storage order. An unclassified point with
/// fewer than `min_pts` neighbours is provisionally noise; otherwise it
/// starts the next cluster and a FIFO worklist seeded with its neighbours is
/// drained, growing whenever an unclassified core point is reached. A noise
/// point reached by an expansion becomes a border point of that cluster and
/// is never relabelled again.
pub fn expand_clusters(table: &DistanceTable, config: &DbscanConfig) -> Expansion {
    let n = table.len();
    let eps = config.eps;
    let min_pts = config.min_pts;

    let mut labels = vec![Label::Unclassified; n];
    let mut seeds = Vec::new();

    for p in 0..n {
        if labels[p] != Label::Unclassified {
            continue;
        }

        let neighbours = table.neighbours(p, eps);
        if neighbours.len() < min_pts {
            labels[p] = Label::Noise;
            continue;
        }

        let cluster = seeds.len();
        seeds.push(p);
        labels[p] = Label::Cluster(cluster);

        let mut worklist: VecDeque<usize> = neighbours.into();
        let mut size = 1usize;

        while let Some(q) = worklist.pop_front() {
            match labels[q] {
                Label::Noise => {
                    labels[q] = Label::Cluster(cluster);
                    size += 1;
                }
                Label::Cluster(_) => {}
                Label::Unclassified => {
                    labels[q] = Label::Cluster(cluster);
                    size += 1;

                    let q_neighbours = table.neighbours(q, eps);
                    if q_neighbours.len() >= min_pts {
                        worklist.extend(q_neighbours);
                    }
                }
            }
        }

        debug!(cluster, seed = p, size, "expanded cluster");
    }

    let noise = labels.iter().filter(|l| l.is_noise()).count();
    info!(
        points = n,
        clusters = seeds.len(),
        noise,
        eps,
        min_pts,
        "DBSCAN finished"
    );

    Expansion { labels, seeds }
}
