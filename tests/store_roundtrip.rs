#![allow(non_snake_case)]
use colexpand::{algebra::*, generator::MatrixGenerator};

fn generated() -> (Triplets<f64>, CscMatrix<f64>) {
    let generator = MatrixGenerator::new(120, 45, 0.15);
    let entries = generator.triplets();
    let A = CscMatrix::from_triplets(&entries).unwrap();
    (entries, A)
}

#[test]
fn test_generation_deterministic() {
    let a: CscMatrix<f64> = MatrixGenerator::new(64, 32, 0.2).matrix().unwrap();
    let b: CscMatrix<f64> = MatrixGenerator::new(64, 32, 0.2).matrix().unwrap();
    assert_eq!(a, b);

    let c: CscMatrix<f64> = MatrixGenerator::new(64, 32, 0.2)
        .with_seed(99)
        .matrix()
        .unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_sparse_fetch_returns_generated_entries() {
    let (entries, A) = generated();
    assert_eq!(A.nnz(), entries.len());

    let view = A.sparse_column();
    let mut vbuf = vec![0.; A.m];
    let mut ibuf = vec![0; A.m];

    for col in 0..A.n {
        let expected: Vec<(usize, f64)> = entries.column(col).collect();
        let range = view.fetch(col, &mut vbuf, &mut ibuf).unwrap();
        assert_eq!(range.number, expected.len());
        assert_eq!(range.number, A.col_nnz(col));
        let found: Vec<(usize, f64)> = range.iter().collect();
        assert_eq!(found, expected);
    }
}

#[test]
fn test_fetch_copy_reproduces_values() {
    let (entries, A) = generated();
    let view = A.dense_column();
    let mut buf = vec![f64::NAN; A.m];

    for col in 0..A.n {
        view.fetch_copy(col, &mut buf).unwrap();

        let mut expected = vec![0.; A.m];
        for (row, val) in entries.column(col) {
            expected[row] = val;
        }
        assert_eq!(buf, expected);
    }
}

#[test]
fn test_sparse_fetch_subset_translates_rows() {
    let (entries, A) = generated();
    let subset = RowSubset::strided(A.m, 4);
    let view = A.sparse_column_subset(&subset).unwrap();
    let mut vbuf = vec![0.; subset.len()];
    let mut ibuf = vec![0; subset.len()];

    for col in 0..A.n {
        let expected: Vec<(usize, f64)> = entries
            .column(col)
            .filter(|(row, _)| row % 4 == 0)
            .map(|(row, val)| (row / 4, val))
            .collect();
        let range = view.fetch(col, &mut vbuf, &mut ibuf).unwrap();
        assert_eq!(range.iter().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn test_fetch_out_of_range() {
    let (_, A) = generated();
    let mut buf = vec![0.; A.m];
    let err = A.dense_column().fetch_copy(A.n, &mut buf).unwrap_err();
    assert_eq!(err, AccessError::OutOfRange { col: 45, ncols: 45 });

    let mut ibuf = vec![0; A.m];
    assert!(A.sparse_column().fetch(A.n + 3, &mut buf, &mut ibuf).is_err());
}
