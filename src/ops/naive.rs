//! Element-wise loss kernel.
//!
//! The reference form of the computation: one example at a time, one class
//! at a time, one weight dimension at a time, in the order the derivation
//! is usually written out. Sequential on the calling thread, O(N·C·D).
//!
//! The batched kernel in [`super::batched`] computes the identical function
//! with whole-matrix operations; this one exists to stay readable and to
//! serve as the ground truth the batched form is tested against.

use crate::tensors::{Ten64, Tensor};

/// Softmax cross-entropy loss and weight gradient, explicit-loop form.
///
/// `w` is a `[D, C]` weight matrix, `x` a `[N, D]` feature batch, `y` the
/// `N` class labels, `reg` the L2 regularization strength. Returns the
/// batch-mean regularized loss and `dL/dw` with `w`'s shape.
///
/// Inputs are assumed validated (see [`crate::loss`]); this kernel cannot
/// fail on validated inputs. Non-finite feature or weight values propagate
/// into the outputs unmasked.
///
/// # Example
/// ```rust
/// use softmax_xent::tensor;
/// use softmax_xent::ops::naive;
///
/// let w = tensor!([[0.0, 0.0], [0.0, 0.0]]);
/// let x = tensor!([[1.0, 2.0]]);
/// let (loss, dw) = naive::softmax_loss(&w, &x, &[0], 0.0);
/// assert!((loss - 2.0_f64.ln()).abs() < 1e-12);
/// assert_eq!(dw.data, vec![-0.5, 0.5, -1.0, 1.0]);
/// ```
pub fn softmax_loss(w: &Ten64, x: &Ten64, y: &[usize], reg: f64) -> (f64, Ten64) {
    let dim = w.shape[0];
    let classes = w.shape[1];
    let train = x.shape[0];
    debug_assert_eq!(x.shape[1], dim, "feature dimension mismatch");
    debug_assert_eq!(y.len(), train, "label count mismatch");

    let mut loss = 0.0;
    let mut dw = vec![0.0; dim * classes];
    let mut scores = vec![0.0; classes];

    for i in 0..train {
        let xi = x.row(i);

        for (c, s) in scores.iter_mut().enumerate() {
            let mut acc = 0.0;
            for d in 0..dim {
                acc += xi[d] * w.data[d * classes + c];
            }
            *s = acc;
        }

        // Shift by the row maximum so exp cannot overflow; softmax is
        // shift-invariant, so the probabilities are unchanged.
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut z = 0.0;
        for s in scores.iter_mut() {
            *s = (*s - max).exp();
            z += *s;
        }

        loss -= (scores[y[i]] / z).ln();

        for (c, &e) in scores.iter().enumerate() {
            let coef = e / z - if c == y[i] { 1.0 } else { 0.0 };
            for d in 0..dim {
                dw[d * classes + c] += xi[d] * coef;
            }
        }
    }

    let inv = 1.0 / train as f64;
    loss *= inv;
    for g in &mut dw {
        *g *= inv;
    }

    loss += 0.5 * reg * w.data.iter().map(|&v| v * v).sum::<f64>();
    for (g, &v) in dw.iter_mut().zip(&w.data) {
        *g += reg * v;
    }

    (loss, Tensor::new(vec![dim, classes], dw))
}
