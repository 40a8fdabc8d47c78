//! Sweep a regularization grid over pairwise difference vectors and watch
//! observation pairs fuse, the way a convex-clustering path solver would.
//!
//! The outer solver loop (ADMM updates, stopping rules, plotting) is out of
//! scope for `fuseprox`; this demo stands in for it with a single proximal
//! sweep per grid point.

use fuseprox::{row_group_prox, scaled_squared_norm, ActiveGroups, Matrix};

fn main() {
    // Five 2D observations: two tight pairs and one point in between.
    let points: Vec<Vec<f64>> = vec![
        vec![0.0, 0.0],
        vec![0.2, 0.1],
        vec![2.5, 2.4],
        vec![5.0, 5.0],
        vec![5.1, 4.9],
    ];

    // One difference vector per observation pair, plus a Gaussian-kernel
    // weight so nearby pairs fuse first.
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    let mut diffs: Vec<Vec<f64>> = Vec::new();
    let mut weights: Vec<f64> = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d: Vec<f64> = points[i]
                .iter()
                .zip(&points[j])
                .map(|(a, b)| a - b)
                .collect();
            let dist_sq: f64 = d.iter().map(|x| x * x).sum();
            pairs.push((i, j));
            diffs.push(d);
            weights.push((-0.5 * dist_sq).exp());
        }
    }

    let v = Matrix::from_rows(&diffs).unwrap();
    let mut active: ActiveGroups = (0..pairs.len()).collect();

    println!("=== Fusion path over {} pairs ===", pairs.len());
    println!("initial scaled squared norm: {:.6}", scaled_squared_norm(&v));

    for &lambda in &[0.1, 0.5, 1.0, 2.0, 5.0, 20.0] {
        let shrunk = row_group_prox(&v, lambda, &weights, false).unwrap();

        for (g, &(i, j)) in pairs.iter().enumerate() {
            let fused = shrunk.row(g).iter().all(|x| *x == 0.0);
            if fused && active.contains(g) {
                active.remove(g);
                println!("  lambda {lambda:5.1}: pair ({i}, {j}) fused");
            }
        }

        println!(
            "  lambda {lambda:5.1}: {} pairs active, scaled squared norm {:.6}",
            active.len(),
            scaled_squared_norm(&shrunk)
        );

        if active.is_empty() {
            println!("all pairs fused; path complete");
            break;
        }
    }
}
