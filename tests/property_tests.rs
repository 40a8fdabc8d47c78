use fuseprox::{col_group_prox, row_group_prox, scaled_squared_norm, Matrix};
use proptest::prelude::*;

fn row_norm(row: &[f64]) -> f64 {
    row.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// A matrix (as rows), a matching weight vector, and a threshold.
fn prox_inputs() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>, f64)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 4), n),
            prop::collection::vec(0.0f64..3.0, n),
            0.0f64..5.0,
        )
    })
}

proptest! {
    #[test]
    fn prop_row_prox_never_grows_rows((rows, weights, lambda) in prox_inputs()) {
        let m = Matrix::from_rows(&rows).unwrap();
        let out = row_group_prox(&m, lambda, &weights, false).unwrap();

        for i in 0..m.rows() {
            let before = row_norm(m.row(i));
            let after = row_norm(out.row(i));
            prop_assert!(after <= before + 1e-9);

            // Below the group threshold the row must be exactly zero.
            if before <= lambda * weights[i] {
                prop_assert!(out.row(i).iter().all(|x| *x == 0.0));
            } else {
                let expected = before - lambda * weights[i];
                prop_assert!((after - expected).abs() <= 1e-9 * before.max(1.0));
            }
        }
    }

    #[test]
    fn prop_lambda_zero_is_identity((rows, weights, _lambda) in prox_inputs()) {
        let m = Matrix::from_rows(&rows).unwrap();
        let out = row_group_prox(&m, 0.0, &weights, false).unwrap();
        prop_assert_eq!(out, m);
    }

    #[test]
    fn prop_axis_symmetry((rows, weights, lambda) in prox_inputs()) {
        // Weights index rows here, so run the column prox on the transpose.
        let m = Matrix::from_rows(&rows).unwrap().transpose();
        let by_cols = col_group_prox(&m, lambda, &weights, false).unwrap();
        let by_rows = row_group_prox(&m.transpose(), lambda, &weights, false)
            .unwrap()
            .transpose();
        prop_assert_eq!(by_cols, by_rows);
    }

    #[test]
    fn prop_exact_agrees_with_fast((rows, weights, lambda) in prox_inputs()) {
        let m = Matrix::from_rows(&rows).unwrap();
        let fast = row_group_prox(&m, lambda, &weights, false).unwrap();
        let exact = row_group_prox(&m, lambda, &weights, true).unwrap();

        for (a, b) in fast.as_slice().iter().zip(exact.as_slice()) {
            prop_assert!((a - b).abs() <= 1e-10);
        }
    }

    #[test]
    fn prop_scaled_norm_nonnegative_and_shrinks((rows, weights, lambda) in prox_inputs()) {
        let m = Matrix::from_rows(&rows).unwrap();
        let out = row_group_prox(&m, lambda, &weights, false).unwrap();

        let before = scaled_squared_norm(&m);
        let after = scaled_squared_norm(&out);
        prop_assert!(after >= 0.0);
        prop_assert!(after <= before + 1e-9);
    }
}
