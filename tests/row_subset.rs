#![allow(non_snake_case)]
use colexpand::{algebra::*, generator::MatrixGenerator, kernels::*};

const RTOL: f64 = 1e-9;

// transform every row of every column, then keep only the rows in `subset`
fn restricted_sum(A: &CscMatrix<f64>, subset: &RowSubset) -> f64 {
    let view = A.dense_column();
    let mut buf = vec![0.; A.m];
    let mut total = 0.;
    for col in 0..A.n {
        view.fetch_copy(col, &mut buf).unwrap();
        buf.scalarop(transform);
        total += subset.indices().iter().fold(0., |acc, &r| acc + buf[r]);
    }
    total
}

fn subsets(m: usize) -> Vec<RowSubset> {
    let mask: Vec<bool> = (0..m).map(|r| r % 3 != 1).collect();
    vec![
        RowSubset::strided(m, 5),
        RowSubset::from_mask(&mask),
        RowSubset::new(m, vec![0, 2, 3, 17, m - 1]).unwrap(),
        RowSubset::new(m, vec![]).unwrap(),
        RowSubset::identity(m),
    ]
}

#[test]
fn test_sparse_indexed_restricts_rows() {
    let A = MatrixGenerator::new(90, 35, 0.2).matrix().unwrap();

    for subset in subsets(A.m) {
        let expected = restricted_sum(&A, &subset);
        let mut kernel = SparseIndexed::new(&A, Some(&subset)).unwrap();
        assert_eq!(kernel.rows_per_column(), subset.len());
        let sum = kernel.run().unwrap();
        assert!(sum.approx_eq(expected, RTOL), "{sum} != {expected}");
    }
}

#[test]
fn test_all_kernels_accept_subsets() {
    let A = MatrixGenerator::new(90, 35, 0.05).matrix().unwrap();

    for subset in subsets(A.m) {
        let expected = restricted_sum(&A, &subset);
        for strategy in KernelStrategy::ALL {
            let sum = ColumnKernel::new(strategy, &A, Some(&subset))
                .unwrap()
                .run()
                .unwrap();
            assert!(sum.approx_eq(expected, RTOL), "{strategy}: {sum} != {expected}");
        }
    }
}

#[test]
fn test_sparse_indexed_defaults_to_identity() {
    let A: CscMatrix<f64> = MatrixGenerator::new(25, 10, 0.3).matrix().unwrap();

    let kernel = SparseIndexed::new(&A, None).unwrap();
    assert!(kernel.subset().is_identity());
    assert_eq!(kernel.subset().len(), 25);

    let with_default = SparseIndexed::new(&A, None).unwrap().run().unwrap();
    let expanded = SparseExpanded::new(&A, None).unwrap().run().unwrap();
    assert_eq!(with_default, expanded);
}

#[test]
fn test_subset_for_wrong_matrix() {
    let A: CscMatrix<f64> = MatrixGenerator::new(25, 10, 0.3).matrix().unwrap();
    let subset = RowSubset::strided(24, 2);
    for strategy in KernelStrategy::ALL {
        assert_eq!(
            ColumnKernel::new(strategy, &A, Some(&subset)).err(),
            Some(SparseFormatError::IncompatibleDimension)
        );
    }
}
