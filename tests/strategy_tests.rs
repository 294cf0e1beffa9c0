//! Tests for the process-default strategy flag.
//!
//! These live in their own binary: flipping the process-wide default must
//! not interleave with tests that dispatch through it.

use softmax_xent::loss::{softmax_loss, softmax_loss_naive};
use softmax_xent::strategy::{Strategy, get_strategy, set_strategy};
use softmax_xent::tensor;

#[test]
fn test_strategy_round_trip() {
    assert_eq!(get_strategy(), Strategy::Batched);

    let w = tensor!([[0.2, -0.1], [0.4, 0.3]]);
    let x = tensor!([[1.0, -2.0], [0.5, 0.0]]);
    let y = [1, 0];

    set_strategy(Strategy::Naive);
    assert_eq!(get_strategy(), Strategy::Naive);
    let dispatched = softmax_loss(&w, &x, &y, 0.1).unwrap();
    set_strategy(Strategy::Batched);

    assert_eq!(dispatched, softmax_loss_naive(&w, &x, &y, 0.1).unwrap());
    assert_eq!(get_strategy(), Strategy::Batched);
}

#[test]
fn test_strategy_from_raw() {
    assert_eq!(Strategy::try_from(0), Ok(Strategy::Batched));
    assert_eq!(Strategy::try_from(1), Ok(Strategy::Naive));
    assert_eq!(Strategy::try_from(2), Err(()));
}
