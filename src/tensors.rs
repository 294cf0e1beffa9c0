//! Core tensor value types.
//!
//! # Matrices for the classifier
//!
//! This module defines the small amount of array plumbing the loss kernels
//! work over: a shape plus flat row-major data. A weight matrix of shape
//! `[D, C]` stores `W[d][c]` at `data[d * C + c]`; a feature batch of shape
//! `[N, D]` stores example `i` as the contiguous slice `data[i*D..(i+1)*D]`.
//!
//! ## Design Highlights
//! - Tensors are strongly typed: `Tensor<T>` for any element type; the loss
//!   kernels are written against the [`Ten64`] (`f64`) alias.
//! - Shape is stored as a `Vec<usize>` and enforced at construction.
//! - The `tensor!` macro supports ergonomic tensor creation from nested
//!   array literals.
//!
//! ## Limitations
//! - Row-major only.
//! - No broadcasting, slicing, or shape inference; [`Tensor::row`] is the
//!   one access helper the kernels need.
//!
//! ## Example
//!
//! ```rust
//! use softmax_xent::tensors::Tensor;
//! let t = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! assert_eq!(t.shape, vec![2, 3]);
//! assert_eq!(t.row(1), &[4.0, 5.0, 6.0]);
//! ```

/// Represents an N-dimensional tensor with a shape and flat row-major data.
///
/// - All elements must be the same type (`T`).
/// - `shape` defines the structure, e.g., `[2, 3]` for a 2×3 matrix.
/// - `data` holds the flattened content in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

/// The `f64` tensor the loss operations are written against.
pub type Ten64 = Tensor<f64>;

impl<T> Tensor<T> {
    /// Creates a new tensor with the given shape and flat data.
    ///
    /// # Panics
    /// Panics if the number of elements in `data` does not match the shape product.
    pub fn new(shape: impl Into<Vec<usize>>, data: Vec<T>) -> Self {
        let shape = shape.into();
        assert_eq!(
            shape.iter().product::<usize>(),
            data.len(),
            "shape {:?} is incompatible with {} data elements",
            shape,
            data.len()
        );
        Self { shape, data }
    }

    /// Borrows row `r` of a rank-2 tensor as a contiguous slice.
    ///
    /// # Panics
    /// Panics if the tensor is not rank-2 or `r` is out of bounds.
    pub fn row(&self, r: usize) -> &[T] {
        assert_eq!(self.shape.len(), 2, "row() requires a rank-2 tensor");
        let cols = self.shape[1];
        &self.data[r * cols..(r + 1) * cols]
    }
}

/// Defines a tensor from nested literal arrays.
///
/// Supports arbitrary dimensionality as long as sublists are uniform in
/// shape. Innermost entries are arbitrary expressions, so negated values,
/// constants such as `f64::NAN`, and method calls all parse.
///
/// # Example
/// ```
/// use softmax_xent::tensor;
/// let t = tensor!([[1.0, -2.0], [3.0, 4.0]]);
/// assert_eq!(t.shape, vec![2, 2]);
/// assert_eq!(t.data, vec![1.0, -2.0, 3.0, 4.0]);
/// ```
#[macro_export]
macro_rules! tensor {
    ($lit:literal) => {
        $crate::tensors::Tensor::new(Vec::<usize>::new(), vec![$lit])
    };

    // Bracketed rows recurse. This rule must come before the expression
    // rule: an array literal is itself a valid expression, and the
    // expression rule would flatten one nesting level too early.
    ([ $( [ $($row:tt)* ] ),+ $(,)? ]) => {{
        let children = vec![ $( tensor!([ $($row)* ]) ),+ ];
        let first_shape = &children[0].shape;
        assert!(children.iter().all(|c| c.shape == *first_shape),
            "ragged tensor literal (rows have mismatched shapes)");
        let mut shape = vec![children.len()];
        shape.extend_from_slice(first_shape);
        let mut data = Vec::with_capacity(children.len() * children[0].data.len());
        for c in children { data.extend(c.data); }
        $crate::tensors::Tensor::new(shape, data)
    }};

    ([ $( $x:expr ),+ $(,)? ]) => {{
        let data = vec![ $( $x ),+ ];
        let shape = vec![data.len()];
        $crate::tensors::Tensor::new(shape, data)
    }};
}
