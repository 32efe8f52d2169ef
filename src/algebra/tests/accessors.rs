#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_5x3() -> CscMatrix<f64> {
    // A =
    //[ 1.0    ⋅    ⋅ ]
    //[  ⋅   4.0    ⋅ ]
    //[ 2.0    ⋅    ⋅ ]
    //[  ⋅   5.0    ⋅ ]
    //[ 3.0  6.0    ⋅ ]
    let Ap = vec![0, 3, 6, 6];
    let Ai = vec![0, 2, 4, 1, 3, 4];
    let Ax = vec![1., 2., 3., 4., 5., 6.];
    CscMatrix::new(5, 3, Ap, Ai, Ax)
}

#[test]
fn test_dense_fetch_copy() {
    let A = test_matrix_5x3();
    let view = A.dense_column();
    assert_eq!(view.size(), (5, 3));

    let mut buf = vec![9.; 5];
    view.fetch_copy(0, &mut buf).unwrap();
    assert_eq!(buf, vec![1., 0., 2., 0., 3.]);

    // previous contents must not leak through
    view.fetch_copy(1, &mut buf).unwrap();
    assert_eq!(buf, vec![0., 4., 0., 5., 6.]);

    view.fetch_copy(2, &mut buf).unwrap();
    assert_eq!(buf, vec![0.; 5]);
}

#[test]
fn test_dense_fetch_overlay() {
    let A = test_matrix_5x3();
    let view = A.dense_column();

    let mut buf = vec![-1.; 5];
    view.fetch_overlay(0, &mut buf).unwrap();
    assert_eq!(buf, vec![1., -1., 2., -1., 3.]);

    // without a refill the previous column shows through
    view.fetch_overlay(1, &mut buf).unwrap();
    assert_eq!(buf, vec![1., 4., 2., 5., 6.]);
}

#[test]
fn test_dense_fetch_subset() {
    let A = test_matrix_5x3();
    let subset = RowSubset::new(5, vec![0, 1, 4]).unwrap();
    let view = A.dense_column_subset(&subset).unwrap();
    assert_eq!(view.nrows(), 3);

    let mut buf = vec![9.; 3];
    view.fetch_copy(0, &mut buf).unwrap();
    assert_eq!(buf, vec![1., 0., 3.]);
    view.fetch_copy(1, &mut buf).unwrap();
    assert_eq!(buf, vec![0., 4., 6.]);
}

#[test]
fn test_sparse_fetch() {
    let A = test_matrix_5x3();
    let view = A.sparse_column();
    let mut vbuf = vec![0.; 5];
    let mut ibuf = vec![0; 5];

    let range = view.fetch(1, &mut vbuf, &mut ibuf).unwrap();
    assert_eq!(range.number, 3);
    assert_eq!(range.index, &[1, 3, 4]);
    assert_eq!(range.value, &[4., 5., 6.]);

    let range = view.fetch(2, &mut vbuf, &mut ibuf).unwrap();
    assert_eq!(range.number, 0);
    assert!(range.index.is_empty());
}

#[test]
fn test_sparse_fetch_subset() {
    let A = test_matrix_5x3();
    let subset = RowSubset::new(5, vec![1, 2, 4]).unwrap();
    let view = A.sparse_column_subset(&subset).unwrap();
    let mut vbuf = vec![0.; 3];
    let mut ibuf = vec![0; 3];

    // row 0 is dropped, rows 2 and 4 land at positions 1 and 2
    let range = view.fetch(0, &mut vbuf, &mut ibuf).unwrap();
    let pairs: Vec<_> = range.iter().collect();
    assert_eq!(pairs, vec![(1, 2.), (2, 3.)]);

    let range = view.fetch(1, &mut vbuf, &mut ibuf).unwrap();
    let pairs: Vec<_> = range.iter().collect();
    assert_eq!(pairs, vec![(0, 4.), (2, 6.)]);
}

#[test]
fn test_fetch_out_of_range() {
    let A = test_matrix_5x3();
    let mut buf = vec![0.; 5];
    assert_eq!(
        A.dense_column().fetch_copy(3, &mut buf),
        Err(AccessError::OutOfRange { col: 3, ncols: 3 })
    );
    assert_eq!(
        A.dense_column().fetch_overlay(7, &mut buf),
        Err(AccessError::OutOfRange { col: 7, ncols: 3 })
    );

    let mut vbuf = vec![0.; 5];
    let mut ibuf = vec![0; 5];
    assert_eq!(
        A.sparse_column().fetch(3, &mut vbuf, &mut ibuf),
        Err(AccessError::OutOfRange { col: 3, ncols: 3 })
    );
}

#[test]
fn test_fetch_buffer_length() {
    let A = test_matrix_5x3();
    let mut buf = vec![0.; 4];
    assert_eq!(
        A.dense_column().fetch_copy(0, &mut buf),
        Err(AccessError::BufferLength {
            expected: 5,
            found: 4
        })
    );
}

#[test]
fn test_subset_dimension_mismatch() {
    let A = test_matrix_5x3();
    let subset = RowSubset::identity(4);
    assert_eq!(
        A.dense_column_subset(&subset).unwrap_err(),
        SparseFormatError::IncompatibleDimension
    );
    assert_eq!(
        A.sparse_column_subset(&subset).unwrap_err(),
        SparseFormatError::IncompatibleDimension
    );
}
