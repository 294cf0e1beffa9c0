//! Batched loss kernel.
//!
//! # Whole-matrix form
//!
//! The same mathematics as [`super::naive`], expressed as matrix operations
//! over the full batch:
//!
//! - scores `S = X·W`, one parallel task per batch row
//! - row-wise softmax in place, giving the probability matrix `P`
//! - data loss as a parallel reduction of `-ln(P[i, y_i])`
//! - `dW = Xᵀ·(P − OneHot(y)) / N + reg·W`, one parallel task per weight row
//!
//! ## Features
//!
//! - Parallel execution using [`rayon`](https://docs.rs/rayon)
//! - Deterministic results (given deterministic input and scheduling)
//! - Zero dependencies beyond `rayon`
//!
//! The parallelism is internal fork-join over immutable inputs; from the
//! caller's view the computation is synchronous and pure, and concurrent
//! invocations share no state.

use crate::tensors::{Ten64, Tensor};
use rayon::prelude::*;

/// Computes the raw class-score matrix `X·W` of shape `[N, C]`.
///
/// Row `i` holds the `C` scores of example `i`. Parallelized over batch
/// rows. Inputs are assumed validated (rank-2, agreeing feature dimension,
/// at least one class).
pub fn scores(w: &Ten64, x: &Ten64) -> Ten64 {
    let dim = w.shape[0];
    let classes = w.shape[1];
    let train = x.shape[0];
    debug_assert_eq!(x.shape[1], dim, "feature dimension mismatch");

    let w_data = &w.data;
    let mut out = vec![0.0; train * classes];

    out.par_chunks_mut(classes)
        .enumerate()
        .for_each(|(i, row)| {
            let xi = x.row(i);
            for (c, s) in row.iter_mut().enumerate() {
                let mut acc = 0.0;
                for d in 0..dim {
                    acc += xi[d] * w_data[d * classes + c];
                }
                *s = acc;
            }
        });

    Tensor::new(vec![train, classes], out)
}

/// Softmax cross-entropy loss and weight gradient, whole-matrix form.
///
/// Same contract as [`super::naive::softmax_loss`]; agrees with it to
/// floating-point rounding and exists for throughput on large `N`, `C`,
/// `D`. Inputs are assumed validated (see [`crate::loss`]). Non-finite
/// feature or weight values propagate into the outputs unmasked.
pub fn softmax_loss(w: &Ten64, x: &Ten64, y: &[usize], reg: f64) -> (f64, Ten64) {
    let dim = w.shape[0];
    let classes = w.shape[1];
    let train = x.shape[0];
    debug_assert_eq!(y.len(), train, "label count mismatch");

    // Raw scores, then softmax each row in place. The shift by the row
    // maximum keeps exp from overflowing; softmax is shift-invariant, so
    // the probabilities are unchanged.
    let mut probs = scores(w, x);
    probs.data.par_chunks_mut(classes).for_each(|row| {
        let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut z = 0.0;
        for v in row.iter_mut() {
            *v = (*v - max).exp();
            z += *v;
        }
        for v in row.iter_mut() {
            *v /= z;
        }
    });

    let data_loss = probs
        .data
        .par_chunks(classes)
        .zip(y.par_iter())
        .map(|(row, &label)| -row[label].ln())
        .sum::<f64>()
        / train as f64;

    // P - OneHot(y), still one task per row.
    probs
        .data
        .par_chunks_mut(classes)
        .zip(y.par_iter())
        .for_each(|(row, &label)| row[label] -= 1.0);

    // dW = Xᵀ·(P - OneHot) / N + reg·W, one task per weight row.
    let inv = 1.0 / train as f64;
    let x_data = &x.data;
    let p_data = &probs.data;
    let mut dw = vec![0.0; dim * classes];

    dw.par_chunks_mut(classes)
        .enumerate()
        .for_each(|(d, out_row)| {
            for i in 0..train {
                let xv = x_data[i * dim + d];
                let prow = &p_data[i * classes..(i + 1) * classes];
                for (g, &p) in out_row.iter_mut().zip(prow) {
                    *g += xv * p;
                }
            }
            let wrow = &w.data[d * classes..(d + 1) * classes];
            for (g, &v) in out_row.iter_mut().zip(wrow) {
                *g = *g * inv + reg * v;
            }
        });

    let reg_loss = 0.5 * reg * w.data.par_iter().map(|&v| v * v).sum::<f64>();

    (data_loss + reg_loss, Tensor::new(vec![dim, classes], dw))
}
