// All matrix storage used by the benchmark is standard
// compressed sparse column format.  Columns are materialized
// into dense buffers through the accessor views below, which
// borrow the matrix rather than owning it.

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use colexpand::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// Ths field should have length `n+1`. The last entry corresponds
    /// to the the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

/// Sparse matrix entries in coordinate (triplet) form.
///
/// Entries are held in generation order.  Row indices within a column
/// need not be sorted, but every (row, column) position must be unique
/// for the triplets to compress into a [`CscMatrix`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Triplets<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// row index of each entry
    pub rowval: Vec<usize>,
    /// column index of each entry
    pub colval: Vec<usize>,
    /// value of each entry
    pub nzval: Vec<T>,
}

/// An ordered selection of matrix rows with a reverse lookup.
///
/// `indices` is strictly increasing.  `revmap[r]` is the position of
/// original row `r` within `indices`, or `None` if `r` is not selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSubset {
    pub(crate) indices: Vec<usize>,
    pub(crate) revmap: Vec<Option<usize>>,
}

/// Dense column view of a [`CscMatrix`], optionally restricted to a [`RowSubset`]
#[derive(Debug, Clone, Copy)]
pub struct DenseColumn<'a, T = f64> {
    pub(crate) src: &'a CscMatrix<T>,
    pub(crate) subset: Option<&'a RowSubset>,
}

/// Sparse column view of a [`CscMatrix`], optionally restricted to a [`RowSubset`]
#[derive(Debug, Clone, Copy)]
pub struct SparseColumn<'a, T = f64> {
    pub(crate) src: &'a CscMatrix<T>,
    pub(crate) subset: Option<&'a RowSubset>,
}

/// Explicit nonzeros of one column as returned by [`SparseColumn::fetch`].
///
/// `index` holds row positions (compacted through the subset when one is
/// attached) and `value` the matching stored values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparseRange<'b, T = f64> {
    /// number of entries
    pub number: usize,
    /// row positions
    pub index: &'b [usize],
    /// stored values
    pub value: &'b [T],
}
