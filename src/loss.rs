//! Softmax classifier loss and prediction.
//!
//! # The public contract
//!
//! Provides the regularized softmax cross-entropy loss of a linear
//! classifier together with its gradient with respect to the weight
//! matrix, plus the score/prediction helpers built on the same forward
//! pass.
//!
//! **Key Features:**
//! - **One contract, two kernels:** [`softmax_loss_naive`] (explicit
//!   loops) and [`softmax_loss_batched`] (whole-matrix, row-parallel)
//!   compute the identical function; [`softmax_loss`] picks the kernel
//!   from the process-default [`crate::strategy::Strategy`].
//! - **Up-front validation:** shapes, label ranges and the regularization
//!   strength are checked before any arithmetic runs; a failed check
//!   returns a [`LossError`] and produces no partial output.
//! - **Pure functions:** inputs are borrowed immutably, outputs are
//!   freshly allocated, and no state is shared between invocations.
//!
//! ## Inputs
//!
//! - `w`: weight matrix, shape `[D, C]` with `C >= 1`
//! - `x`: feature batch, shape `[N, D]`
//! - `y`: `N` class labels, each in `[0, C)`
//! - `reg`: L2 regularization strength, `reg >= 0`
//!
//! ## Non-finite values
//!
//! NaN or infinite entries in `w` or `x` are caller error: validation does
//! not scan element values, and such inputs propagate to a non-finite loss
//! and gradient rather than being masked or rejected. Finite inputs can
//! still produce an infinite loss when a label's probability underflows to
//! zero; see [`softmax_loss`].

use crate::ops;
use crate::tensors::Ten64;
use std::error::Error;
use std::fmt;

/// Why a loss-layer call was rejected before any computation ran.
#[derive(Debug, Clone, PartialEq)]
pub enum LossError {
    /// `w` or `x` is not a rank-2 matrix, the feature dimensions of `w`
    /// and `x` disagree, `w` has zero classes, or the label count
    /// disagrees with the batch size. Carries everything observed;
    /// `labels` is `None` for the entry points that take no labels.
    DimensionMismatch {
        weights: Vec<usize>,
        features: Vec<usize>,
        labels: Option<usize>,
    },
    /// The feature batch has zero rows, so the batch-mean loss is
    /// undefined.
    EmptyBatch,
    /// A label lies outside `[0, classes)`; `row` is the first offending
    /// position.
    InvalidLabel {
        row: usize,
        label: usize,
        classes: usize,
    },
    /// The regularization strength is negative (or NaN).
    InvalidRegularization { reg: f64 },
}

impl fmt::Display for LossError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossError::DimensionMismatch {
                weights,
                features,
                labels,
            } => {
                write!(
                    f,
                    "incompatible dimensions: weights {:?}, features {:?}",
                    weights, features
                )?;
                if let Some(n) = labels {
                    write!(f, ", {} labels", n)?;
                }
                Ok(())
            }
            LossError::EmptyBatch => write!(f, "feature batch is empty"),
            LossError::InvalidLabel {
                row,
                label,
                classes,
            } => write!(
                f,
                "label {} at row {} is out of range for {} classes",
                label, row, classes
            ),
            LossError::InvalidRegularization { reg } => write!(
                f,
                "regularization strength must be non-negative, got {}",
                reg
            ),
        }
    }
}

impl Error for LossError {}

/// Checks that `w` is `[D, C]` with `C >= 1` and `x` is `[N, D]`.
/// Returns `(N, C)` on success.
fn check_dims(w: &Ten64, x: &Ten64, labels: Option<usize>) -> Result<(usize, usize), LossError> {
    if w.shape.len() == 2 && x.shape.len() == 2 && x.shape[1] == w.shape[0] && w.shape[1] > 0 {
        Ok((x.shape[0], w.shape[1]))
    } else {
        Err(LossError::DimensionMismatch {
            weights: w.shape.clone(),
            features: x.shape.clone(),
            labels,
        })
    }
}

/// Full precondition check for the loss entry points. Validation happens
/// once, here; the kernels assume it and cannot fail.
fn check_inputs(w: &Ten64, x: &Ten64, y: &[usize], reg: f64) -> Result<(), LossError> {
    let (train, classes) = check_dims(w, x, Some(y.len()))?;
    if y.len() != train {
        return Err(LossError::DimensionMismatch {
            weights: w.shape.clone(),
            features: x.shape.clone(),
            labels: Some(y.len()),
        });
    }
    if train == 0 {
        return Err(LossError::EmptyBatch);
    }
    for (row, &label) in y.iter().enumerate() {
        if label >= classes {
            return Err(LossError::InvalidLabel {
                row,
                label,
                classes,
            });
        }
    }
    if reg.is_nan() || reg < 0.0 {
        return Err(LossError::InvalidRegularization { reg });
    }
    Ok(())
}

/// Computes the regularized softmax cross-entropy loss and its weight
/// gradient with the process-default strategy.
///
/// The loss is the batch mean of `-ln(softmax(x_i·w)[y_i])` plus
/// `0.5 * reg * Σ w²`; the gradient has exactly `w`'s shape. For finite
/// inputs the loss is non-negative. Scores are shifted by their row
/// maximum before exponentiation, so large magnitudes cannot overflow;
/// a label whose score trails that maximum by more than about 745 (the
/// `f64` exponent range) underflows to probability zero, making the loss
/// infinite while the gradient stays finite.
///
/// # Errors
/// Returns a [`LossError`] if the shapes disagree, the batch is empty, a
/// label is out of range, or `reg` is negative; no output is produced in
/// that case.
///
/// # Example
/// ```rust
/// use softmax_xent::loss::softmax_loss;
/// use softmax_xent::tensor;
///
/// // All-zero weights give every class the same score, so the loss is
/// // ln(C) per example regardless of the labels.
/// let w = tensor!([[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
/// let x = tensor!([[0.5, -0.5], [1.0, 2.0]]);
/// let (loss, dw) = softmax_loss(&w, &x, &[2, 0], 0.0).unwrap();
/// assert!((loss - 3.0_f64.ln()).abs() < 1e-12);
/// assert_eq!(dw.shape, w.shape);
/// ```
pub fn softmax_loss(
    w: &Ten64,
    x: &Ten64,
    y: &[usize],
    reg: f64,
) -> Result<(f64, Ten64), LossError> {
    check_inputs(w, x, y, reg)?;
    Ok(ops::dispatch::softmax_loss(w, x, y, reg))
}

/// Computes the loss and gradient with the explicit-loop kernel,
/// regardless of the process-default strategy.
///
/// Same contract and validation as [`softmax_loss`]; this is the readable
/// reference form the batched kernel is tested against.
///
/// # Errors
/// Same as [`softmax_loss`].
pub fn softmax_loss_naive(
    w: &Ten64,
    x: &Ten64,
    y: &[usize],
    reg: f64,
) -> Result<(f64, Ten64), LossError> {
    check_inputs(w, x, y, reg)?;
    Ok(ops::naive::softmax_loss(w, x, y, reg))
}

/// Computes the loss and gradient with the whole-matrix kernel,
/// regardless of the process-default strategy.
///
/// Same contract and validation as [`softmax_loss`]; agrees with
/// [`softmax_loss_naive`] to floating-point rounding and exists for
/// throughput on large batches.
///
/// # Errors
/// Same as [`softmax_loss`].
///
/// # Example
/// ```rust
/// use softmax_xent::loss::{softmax_loss_batched, LossError};
/// use softmax_xent::tensor;
///
/// let w = tensor!([[0.0, 0.0]]);
/// let x = tensor!([[1.0]]);
/// let err = softmax_loss_batched(&w, &x, &[2], 0.0).unwrap_err();
/// assert!(matches!(err, LossError::InvalidLabel { label: 2, classes: 2, .. }));
/// ```
pub fn softmax_loss_batched(
    w: &Ten64,
    x: &Ten64,
    y: &[usize],
    reg: f64,
) -> Result<(f64, Ten64), LossError> {
    check_inputs(w, x, y, reg)?;
    Ok(ops::batched::softmax_loss(w, x, y, reg))
}

/// Computes the raw class-score matrix `x·w` of shape `[N, C]`.
///
/// This is the linear forward pass both loss kernels embed; exposed for
/// callers that want the unnormalized scores. An empty batch is legal here
/// (the result is an empty `[0, C]` tensor) since no batch mean is taken.
///
/// # Errors
/// Returns [`LossError::DimensionMismatch`] if `w` or `x` is not rank-2,
/// the feature dimensions disagree, or `w` has zero classes.
pub fn scores(w: &Ten64, x: &Ten64) -> Result<Ten64, LossError> {
    check_dims(w, x, None)?;
    Ok(ops::batched::scores(w, x))
}

/// Predicts a class label for every row of `x` by score argmax.
///
/// Ties resolve to the lowest class index. Validation matches [`scores`].
///
/// # Errors
/// Same as [`scores`].
///
/// # Example
/// ```rust
/// use softmax_xent::loss::predict;
/// use softmax_xent::tensor;
///
/// let w = tensor!([[1.0, 0.0], [0.0, 1.0]]);
/// let x = tensor!([[2.0, 1.0], [0.0, 3.0]]);
/// assert_eq!(predict(&w, &x).unwrap(), vec![0, 1]);
/// ```
pub fn predict(w: &Ten64, x: &Ten64) -> Result<Vec<usize>, LossError> {
    check_dims(w, x, None)?;
    let s = ops::batched::scores(w, x);
    let classes = w.shape[1];
    let picks: Vec<usize> = s
        .data
        .chunks(classes)
        .map(|row| {
            let mut best = 0;
            for (c, &v) in row.iter().enumerate().skip(1) {
                if v > row[best] {
                    best = c;
                }
            }
            best
        })
        .collect();
    Ok(picks)
}
