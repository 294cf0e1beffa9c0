//! Strategy selection module.
//!
//! This module defines the two execution strategies for the loss computation
//! and provides functions to set and get the process-wide default.
//!
//! # Supported Strategies
//!
//! - `Batched` — whole-matrix operations, row-parallel via rayon (default).
//! - `Naive` — explicit per-example loops; the readable reference form.
//!
//! Both strategies compute the identical mathematical function and agree to
//! floating-point rounding; `Batched` exists for throughput on large
//! batches. The default is stored globally using an `AtomicU8`, enabling
//! fast switching at runtime without threading a flag through every call.
//!
//! Callers that want a specific strategy regardless of the global default
//! can use [`crate::loss::softmax_loss_naive`] or
//! [`crate::loss::softmax_loss_batched`] directly.

use briny::traits::{InteriorImmutable, RawConvert, StableLayout, Unaligned};
use core::convert::TryFrom;
use core::sync::atomic::{AtomicU8, Ordering};

/// Enumeration of the available loss-kernel strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Strategy {
    /// Whole-matrix kernel, row-parallel (default).
    #[default]
    Batched = 0,
    /// Explicit per-example loop kernel.
    Naive,
}

unsafe impl StableLayout for Strategy {}
unsafe impl RawConvert for Strategy {}
unsafe impl Unaligned for Strategy {}
unsafe impl InteriorImmutable for Strategy {}

impl TryFrom<u8> for Strategy {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Batched),
            1 => Ok(Self::Naive),
            _ => Err(()),
        }
    }
}

/// Internal global state for the default strategy.
///
/// This uses acquire/release ordering because the strategy is only expected
/// to change rarely, and never mid-computation.
#[cfg(target_has_atomic = "8")]
static GLOBAL_DEFAULT_STRATEGY: AtomicU8 = AtomicU8::new(Strategy::Batched as u8);

/// A mutable non-atomic unsynchronized strategy state.
///
/// It is assumed that this will not be accessed concurrently.
#[cfg(not(target_has_atomic = "8"))]
static mut UNSAFE_GLOBAL_STRATEGY: u8 = Strategy::Batched as u8;

/// Sets the default strategy used by [`crate::loss::softmax_loss`].
///
/// # Example
///
/// ```
/// use softmax_xent::strategy::{set_strategy, Strategy};
/// set_strategy(Strategy::Naive);
/// ```
pub fn set_strategy(s: Strategy) {
    #[cfg(not(target_has_atomic = "8"))]
    unsafe {
        UNSAFE_GLOBAL_STRATEGY = s as u8;
    }
    #[cfg(target_has_atomic = "8")]
    GLOBAL_DEFAULT_STRATEGY.store(s as u8, Ordering::Release);
}

/// Returns the current default strategy.
///
/// If the stored value is invalid, defaults to [`Strategy::Batched`].
///
/// # Example
///
/// ```
/// use softmax_xent::strategy::get_strategy;
/// let strategy = get_strategy();
/// ```
pub fn get_strategy() -> Strategy {
    #[cfg(not(target_has_atomic = "8"))]
    {
        Strategy::try_from(unsafe { UNSAFE_GLOBAL_STRATEGY }).unwrap_or_default()
    }
    #[cfg(target_has_atomic = "8")]
    Strategy::try_from(GLOBAL_DEFAULT_STRATEGY.load(Ordering::Acquire)).unwrap_or_default()
}
