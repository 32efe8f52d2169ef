#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_3x4() -> CscMatrix<f64> {
    // A =
    //[-1.0  -17.0  6.0  10.0]
    //[ 3.0     ⋅   7.0    ⋅ ]
    //[  ⋅    -4.0   ⋅   -5.0]
    let Ap = vec![0, 2, 4, 6, 8];
    let Ai = vec![0, 1, 0, 2, 0, 1, 0, 2];
    let Ax = vec![-1., 3., -17., -4., 6., 7., 10., -5.];
    CscMatrix::new(3, 4, Ap, Ai, Ax)
}

fn test_triplets_3x4() -> Triplets<f64> {
    // same matrix as above, with entries shuffled
    // and rows out of order within columns
    let mut T = Triplets::new(3, 4);
    T.push(2, 3, -5.);
    T.push(1, 0, 3.);
    T.push(0, 2, 6.);
    T.push(2, 1, -4.);
    T.push(0, 0, -1.);
    T.push(0, 3, 10.);
    T.push(1, 2, 7.);
    T.push(0, 1, -17.);
    T
}

#[test]
fn test_nrows_ncols_nnz_is_square() {
    let A = test_matrix_3x4();
    assert_eq!(A.nrows(), 3);
    assert_eq!(A.ncols(), 4);
    assert_eq!(A.size(), (3, 4));
    assert!(!A.is_square());
    assert_eq!(A.nnz(), 8);
    assert_eq!(A.density(), 8. / 12.);
}

#[test]
fn test_check_format() {
    assert!(test_matrix_3x4().check_format().is_ok());

    let mut A = test_matrix_3x4();
    A.rowval.swap(0, 1);
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowOrdering));

    let mut A = test_matrix_3x4();
    A.rowval[7] = 3;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowval));

    let mut A = test_matrix_3x4();
    A.colptr[1] = 5;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadColptr));

    let mut A = test_matrix_3x4();
    A.nzval.pop();
    assert_eq!(
        A.check_format(),
        Err(SparseFormatError::IncompatibleDimension)
    );
}

#[test]
fn test_from_triplets() {
    let A = CscMatrix::from_triplets(&test_triplets_3x4()).unwrap();
    assert_eq!(A, test_matrix_3x4());
    assert!(A.check_format().is_ok());
}

#[test]
fn test_from_triplets_empty_shapes() {
    let A = CscMatrix::<f64>::from_triplets(&Triplets::new(0, 0)).unwrap();
    assert_eq!(A.colptr, vec![0]);
    assert_eq!(A.nnz(), 0);

    let A = CscMatrix::<f64>::from_triplets(&Triplets::new(0, 3)).unwrap();
    assert_eq!(A.colptr, vec![0, 0, 0, 0]);

    let A = CscMatrix::<f64>::from_triplets(&Triplets::new(5, 0)).unwrap();
    assert_eq!(A.size(), (5, 0));
}

#[test]
fn test_from_triplets_invalid_entries() {
    let mut T = test_triplets_3x4();
    T.push(3, 0, 1.);
    assert_eq!(
        CscMatrix::from_triplets(&T),
        Err(SparseFormatError::InvalidEntry {
            row: 3,
            col: 0,
            kind: InvalidEntryKind::RowOutOfBounds
        })
    );

    let mut T = test_triplets_3x4();
    T.push(0, 4, 1.);
    assert_eq!(
        CscMatrix::from_triplets(&T),
        Err(SparseFormatError::InvalidEntry {
            row: 0,
            col: 4,
            kind: InvalidEntryKind::ColumnOutOfBounds
        })
    );

    let mut T = test_triplets_3x4();
    T.push(1, 2, 1.);
    assert_eq!(
        CscMatrix::from_triplets(&T),
        Err(SparseFormatError::InvalidEntry {
            row: 1,
            col: 2,
            kind: InvalidEntryKind::Duplicate
        })
    );

    let mut T = test_triplets_3x4();
    T.rowval.pop();
    assert_eq!(
        CscMatrix::from_triplets(&T),
        Err(SparseFormatError::IncompatibleDimension)
    );
}

#[test]
fn test_triplets_column() {
    let T = test_triplets_3x4();
    let col2: Vec<_> = T.column(2).collect();
    assert_eq!(col2, vec![(0, 6.), (1, 7.)]);
    assert_eq!(T.len(), 8);
    assert_eq!(T.size(), (3, 4));
}
