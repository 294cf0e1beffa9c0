//! Kernel dispatch layer.
//!
//! Selects the loss kernel at runtime based on the process-wide default
//! [`Strategy`]. Direct access to a specific kernel goes through the facade
//! entry points in [`crate::loss`] or the kernel modules themselves.
//!
//! # Design Highlights
//! - **Total**: every strategy has a kernel; there is no fallback path
//! - **Minimal overhead**: one atomic load and a match per call
//! - **Deterministic**: the chosen kernel is pure and synchronous

use crate::strategy::{Strategy, get_strategy};
use crate::tensors::Ten64;

/// Dispatches the loss computation to the default strategy's kernel.
///
/// # Returns
/// - Scalar regularized batch-mean loss
/// - Gradient tensor with the weight matrix's shape
///
/// # Behavior
/// Reads the global default set via [`crate::strategy::set_strategy`];
/// both kernels honor the same contract, so the choice affects throughput
/// only.
pub fn softmax_loss(w: &Ten64, x: &Ten64, y: &[usize], reg: f64) -> (f64, Ten64) {
    match get_strategy() {
        Strategy::Naive => super::naive::softmax_loss(w, x, y, reg),
        Strategy::Batched => super::batched::softmax_loss(w, x, y, reg),
    }
}
