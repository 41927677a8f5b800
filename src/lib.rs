//! # dbscan-rs
//!
//! Density-based spatial clustering (DBSCAN) of 2-D points in Rust.
//!
//! ## Features
//!
//! - **Precomputed distances**: pairwise distances are tabulated once in an
//!   ndarray matrix and every neighbourhood query reads from it
//! - **Explicit point states**: every point ends as `Label::Noise` or
//!   `Label::Cluster(id)`, with ids assigned in discovery order
//! - **Stable identifiers**: caller ids are kept apart from storage slots
//! - **Pluggable metric**: any `Fn(&Point, &Point) -> f64` can replace the
//!   Euclidean distance
//! - **Ranked output**: clusters ordered by size, written as one id per line
//!
//! ## Example
//!
//! ```rust
//! use dbscan_rs::{Dbscan, PointStore};
//!
//! let store = PointStore::from_coords(&[
//!     (0.0, 0.0), (0.0, 1.0), (0.0, 2.0),
//!     (10.0, 10.0),
//! ]);
//!
//! let mut dbscan = Dbscan::new(1.5, 2);
//! dbscan.fit(&store);
//!
//! let clusters = dbscan.top_clusters(1).unwrap();
//! assert_eq!(clusters, vec![vec![0, 1, 2]]);
//!
//! // only one cluster exists
//! assert!(dbscan.top_clusters(2).is_err());
//! ```
//!
//! ## Reading and writing files
//!
//! ```no_run
//! use std::path::Path;
//! use dbscan_rs::{io, Dbscan, DbscanConfig, PointStore};
//!
//! let input = Path::new("input1.txt");
//! let store = PointStore::new(io::read_points_from_path(input)?)?;
//!
//! let mut dbscan = Dbscan::with_config(DbscanConfig::new(15.0, 22));
//! dbscan.fit(&store);
//!
//! let ranked = dbscan.clustering().unwrap().ranked();
//! io::write_top_clusters(input, ranked.top(8)?, None)?;
//! # Ok::<(), dbscan_rs::DbscanError>(())
//! ```

mod algorithm;
mod config;
mod dbscan;
mod distance;
mod error;
pub mod io;
mod point;
mod ranking;

pub use algorithm::{expand_clusters, Expansion};
pub use config::DbscanConfig;
pub use dbscan::{Clustering, Dbscan};
pub use distance::{DistanceTable, Euclidean, Metric};
pub use error::DbscanError;
pub use point::{Label, Point, PointId, PointStore};
pub use ranking::{rank_clusters, RankedCluster, RankedClusters};
