//! # Loss kernels
//!
//! This module holds the two implementations of the softmax loss contract
//! and the dispatch layer that picks between them.
//!
//! ## Submodules
//!
//! - [`naive`] — explicit per-example loops; the reference form
//! - [`batched`] — whole-matrix operations, row-parallel via rayon
//! - [`dispatch`] — selects a kernel from the process-default [`crate::strategy::Strategy`]
//!
//! ## One contract, two kernels
//!
//! Both kernels compute the identical mathematical function and must agree
//! to floating-point rounding; the batched form exists purely for
//! throughput. Kernels assume validated inputs (the facade in
//! [`crate::loss`] performs all validation up front) and therefore return
//! plain values rather than `Result`s.
//!
//! ## Extending
//!
//! A new kernel gets a submodule here, a [`crate::strategy::Strategy`]
//! variant, and an arm in [`dispatch::softmax_loss`]; the shared test suite
//! in `tests/` then pins it to the naive reference.

pub mod batched;
pub mod dispatch;
pub mod naive;
