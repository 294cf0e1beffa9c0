//! softmax_xent: softmax cross-entropy loss and weight gradients for linear classifiers.
//!
//! Computes the regularized cross-entropy loss of a linear softmax
//! classifier and its analytic gradient with respect to the weight matrix,
//! with a focus on numerical stability and minimal dependencies.
//!
//! # Features
//!
//! - Flat row-major tensor type shared by every operation.
//! - Two interchangeable loss kernels: explicit per-example loops and a
//!   row-parallel whole-matrix form, agreeing to floating-point rounding.
//! - Validated public entry points that reject malformed shapes, labels
//!   out of range and negative regularization before any arithmetic runs.
//!
//! # Goals
//!
//! - Prioritize correctness and explicitness over black-box abstraction.
//! - Keep the naive kernel readable enough to serve as the reference the
//!   batched kernel is checked against.
//! - Stay numerically stable for arbitrarily large scores via max
//!   subtraction inside the softmax.
//!
//! # Modules
//!
//! - [`tensors`] — Core tensor data structure and constructors.
//! - [`loss`] — Validated loss, score and prediction entry points.
//! - [`ops`] — The two computation kernels and the strategy dispatcher.
//! - [`strategy`] — Process-wide default kernel selection.
//!
//! # Future Directions
//!
//! - Optional bias column folded into the weight matrix.
//! - SIMD inner loops for the score and gradient accumulations.
//! - `f32` tensors for memory-bound batches.
//!
//! # Example
//!
//! ```rust
//! use softmax_xent::loss::softmax_loss;
//! use softmax_xent::tensor;
//!
//! let w = tensor!([[0.0, 0.0], [0.0, 0.0]]);
//! let x = tensor!([[1.0, -1.0]]);
//! let (loss, dw) = softmax_loss(&w, &x, &[1], 0.1).unwrap();
//! assert!((loss - 2.0_f64.ln()).abs() < 1e-12);
//! assert_eq!(dw.shape, vec![2, 2]);
//! ```
//!
pub mod loss;
pub mod ops;
pub mod strategy;
pub mod tensors;
