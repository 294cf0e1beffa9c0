use softmax_xent::tensor;
use softmax_xent::tensors::Tensor;

#[test]
fn test_tensor_creation() {
    let t = Tensor::new(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(t.shape, vec![2, 2]);
    assert_eq!(t.data, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_tensor_macro() {
    let t = tensor!([[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(t.shape, vec![2, 2]);
    assert_eq!(t.data, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_tensor_macro_rank_one() {
    let t = tensor!([1.0, 2.0, 3.0]);
    assert_eq!(t.shape, vec![3]);
    assert_eq!(t.data, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_tensor_macro_with_expressions() {
    // entries are expressions, not just plain literals
    let t = tensor!([[1.0, -2.0], [3.0_f64.ln(), f64::NAN]]);
    assert_eq!(t.shape, vec![2, 2]);
    assert_eq!(t.data[0], 1.0);
    assert_eq!(t.data[1], -2.0);
    assert_eq!(t.data[2], 3.0_f64.ln());
    assert!(t.data[3].is_nan());
}

#[test]
fn test_tensor_macro_rank_three() {
    let t = tensor!([[[1.0, 2.0]], [[3.0, -4.0]]]);
    assert_eq!(t.shape, vec![2, 1, 2]);
    assert_eq!(t.data, vec![1.0, 2.0, 3.0, -4.0]);
}

#[test]
fn test_tensor_macro_ragged_panics() {
    let result = std::panic::catch_unwind(|| {
        tensor!([[1.0, 2.0], [3.0]]);
    });
    assert!(result.is_err());
}

#[test]
fn test_row_access() {
    let t = tensor!([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    assert_eq!(t.row(0), &[1.0, 2.0]);
    assert_eq!(t.row(2), &[5.0, 6.0]);
}

#[test]
fn test_empty_matrix() {
    let t = Tensor::new(vec![0, 3], Vec::<f64>::new());
    assert_eq!(t.shape, vec![0, 3]);
    assert!(t.data.is_empty());
}

#[test]
fn test_tensor_shape_mismatch_panics() {
    let result = std::panic::catch_unwind(|| {
        Tensor::new(vec![2, 2], vec![1.0, 2.0, 3.0]);
    });
    assert!(result.is_err());
}

#[test]
fn test_row_on_rank_one_panics() {
    let result = std::panic::catch_unwind(|| {
        let t = tensor!([1.0, 2.0, 3.0]);
        t.row(0);
    });
    assert!(result.is_err());
}
