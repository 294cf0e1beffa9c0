//! Numerical gradient checks.
//!
//! Every entry of the analytic weight gradient is compared against a
//! centered finite difference of the loss, for both kernels, through the
//! public entry points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use softmax_xent::loss::{LossError, softmax_loss_batched, softmax_loss_naive};
use softmax_xent::tensors::{Ten64, Tensor};

const EPS: f64 = 1e-5;
const ATOL: f64 = 1e-4;
const RTOL: f64 = 1e-4;

type LossFn = fn(&Ten64, &Ten64, &[usize], f64) -> Result<(f64, Ten64), LossError>;

fn random_problem(
    rng: &mut StdRng,
    train: usize,
    dim: usize,
    classes: usize,
) -> (Ten64, Ten64, Vec<usize>) {
    let w = Tensor::new(
        vec![dim, classes],
        (0..dim * classes)
            .map(|_| rng.random_range(-0.5..0.5))
            .collect(),
    );
    let x = Tensor::new(
        vec![train, dim],
        (0..train * dim)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect(),
    );
    let y = (0..train).map(|_| rng.random_range(0..classes)).collect();
    (w, x, y)
}

fn assert_matches_numeric(loss_fn: LossFn, w: &Ten64, x: &Ten64, y: &[usize], reg: f64) {
    let (_, analytic) = loss_fn(w, x, y, reg).unwrap();
    assert_eq!(analytic.shape, w.shape);

    for k in 0..w.data.len() {
        let mut bumped = w.clone();
        bumped.data[k] = w.data[k] + EPS;
        let (up, _) = loss_fn(&bumped, x, y, reg).unwrap();
        bumped.data[k] = w.data[k] - EPS;
        let (down, _) = loss_fn(&bumped, x, y, reg).unwrap();

        let numeric = (up - down) / (2.0 * EPS);
        let diff = (analytic.data[k] - numeric).abs();
        assert!(
            diff <= ATOL + RTOL * numeric.abs(),
            "entry {}: analytic {} vs numeric {}",
            k,
            analytic.data[k],
            numeric
        );
    }
}

#[test]
fn test_naive_gradient_matches_numeric() {
    let mut rng = StdRng::seed_from_u64(1);
    let (w, x, y) = random_problem(&mut rng, 8, 5, 4);
    assert_matches_numeric(softmax_loss_naive, &w, &x, &y, 0.0);
}

#[test]
fn test_batched_gradient_matches_numeric() {
    let mut rng = StdRng::seed_from_u64(2);
    let (w, x, y) = random_problem(&mut rng, 8, 5, 4);
    assert_matches_numeric(softmax_loss_batched, &w, &x, &y, 0.0);
}

#[test]
fn test_gradient_with_regularization() {
    let mut rng = StdRng::seed_from_u64(3);
    let (w, x, y) = random_problem(&mut rng, 6, 4, 3);
    for loss_fn in [softmax_loss_naive as LossFn, softmax_loss_batched as LossFn] {
        assert_matches_numeric(loss_fn, &w, &x, &y, 0.5);
    }
}

#[test]
fn test_gradient_at_zero_weights() {
    let mut rng = StdRng::seed_from_u64(4);
    let (_, x, y) = random_problem(&mut rng, 5, 3, 4);
    let w = Tensor::new(vec![3, 4], vec![0.0; 12]);
    for loss_fn in [softmax_loss_naive as LossFn, softmax_loss_batched as LossFn] {
        assert_matches_numeric(loss_fn, &w, &x, &y, 0.0);
    }
}

#[test]
fn test_gradient_single_example() {
    let mut rng = StdRng::seed_from_u64(5);
    let (w, x, y) = random_problem(&mut rng, 1, 6, 5);
    for loss_fn in [softmax_loss_naive as LossFn, softmax_loss_batched as LossFn] {
        assert_matches_numeric(loss_fn, &w, &x, &y, 0.1);
    }
}
