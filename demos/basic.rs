//! Basic example demonstrating dbscan-rs usage
//!
//! Run with: cargo run --example basic --release

use dbscan_rs::{Dbscan, DbscanConfig, PointStore};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn main() {
    println!("=== dbscan-rs example ===\n");

    // Three dense blobs plus a sprinkle of background points
    let centers = [[-5.0f64, -5.0], [0.0, 5.0], [5.0, -5.0]];
    let per_cluster = 100;
    let n_background = 15;

    let mut coords = Vec::new();
    for center in centers.iter() {
        let noise = Array2::random((per_cluster, 2), Uniform::new(-1.0f64, 1.0));
        for row in noise.outer_iter() {
            coords.push((center[0] + row[0], center[1] + row[1]));
        }
    }
    let background = Array2::random((n_background, 2), Uniform::new(-10.0f64, 10.0));
    for row in background.outer_iter() {
        coords.push((row[0], row[1]));
    }

    let store = PointStore::from_coords(&coords);
    println!("Generated {} points", store.len());

    let config = DbscanConfig::new(0.5, 4);
    println!(
        "Running DBSCAN with eps={}, min_pts={}...\n",
        config.eps, config.min_pts
    );

    let mut dbscan = Dbscan::with_config(config);
    dbscan.fit(&store);

    let clustering = dbscan.clustering().expect("fit always produces a clustering");
    let ranked = clustering.ranked();

    println!("Found {} clusters:", ranked.len());
    for cluster in ranked.iter() {
        println!(
            "  Cluster {}: {} points (seed id {})",
            cluster.cluster_id,
            cluster.len(),
            clustering.core_seeds()[cluster.cluster_id]
        );
    }
    println!("Noise: {} points\n", clustering.noise_points().len());

    println!("First 10 point labels:");
    for (point, label) in store.points().iter().zip(clustering.labels()).take(10) {
        println!("  Point {} at ({:.2}, {:.2}) -> {}", point.id, point.x, point.y, label);
    }

    println!("\n=== Done! ===");
}
