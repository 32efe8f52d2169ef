use crate::algebra::{RowSubset, SparseFormatError};
use std::iter::zip;

impl RowSubset {
    /// Build a subset from strictly increasing row indices of a
    /// matrix with `m` rows.
    ///
    /// # Errors
    /// [`SparseFormatError::BadRowOrdering`] if `indices` is not strictly
    /// increasing, [`SparseFormatError::BadRowval`] if any index is `>= m`.
    pub fn new(m: usize, indices: Vec<usize>) -> Result<Self, SparseFormatError> {
        if indices.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SparseFormatError::BadRowOrdering);
        }
        if indices.last().is_some_and(|&r| r >= m) {
            return Err(SparseFormatError::BadRowval);
        }

        let mut revmap = vec![None; m];
        for (pos, &row) in indices.iter().enumerate() {
            revmap[row] = Some(pos);
        }
        Ok(RowSubset { indices, revmap })
    }

    /// Every row of an `m` row matrix
    pub fn identity(m: usize) -> Self {
        RowSubset {
            indices: (0..m).collect(),
            revmap: (0..m).map(Some).collect(),
        }
    }

    /// Every `step`-th row of an `m` row matrix, starting from row 0
    ///
    /// # Panics
    /// Panics if `step` is zero.
    pub fn strided(m: usize, step: usize) -> Self {
        assert!(step > 0, "row subset stride must be positive");
        let indices: Vec<usize> = (0..m).step_by(step).collect();
        let mut revmap = vec![None; m];
        for (pos, &row) in indices.iter().enumerate() {
            revmap[row] = Some(pos);
        }
        RowSubset { indices, revmap }
    }

    /// Rows `r` for which `rowidx[r]` is true
    pub fn from_mask(rowidx: &[bool]) -> Self {
        // build an index from the logical rowidx to the reduced row number
        let mut revmap = vec![None; rowidx.len()];
        let mut indices = Vec::new();
        for (row, (r, is_used)) in zip(&mut revmap, rowidx).enumerate() {
            if *is_used {
                *r = Some(indices.len());
                indices.push(row);
            }
        }
        RowSubset { indices, revmap }
    }

    /// selected row indices in increasing order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// number of selected rows
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// row dimension of the matrix this subset was built for
    pub fn source_rows(&self) -> usize {
        self.revmap.len()
    }

    /// True if every row of the source matrix is selected
    pub fn is_identity(&self) -> bool {
        self.indices.len() == self.revmap.len()
    }

    /// Position of original row `row` within the subset, or `None` if
    /// the row is not selected or out of range
    #[inline]
    pub fn position(&self, row: usize) -> Option<usize> {
        self.revmap.get(row).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rowsubset_new() {
        let s = RowSubset::new(6, vec![1, 3, 4]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.position(3), Some(1));
        assert_eq!(s.position(2), None);
        assert_eq!(s.position(10), None);
        assert!(!s.is_identity());

        assert_eq!(
            RowSubset::new(6, vec![3, 1]),
            Err(SparseFormatError::BadRowOrdering)
        );
        assert_eq!(
            RowSubset::new(6, vec![1, 1]),
            Err(SparseFormatError::BadRowOrdering)
        );
        assert_eq!(
            RowSubset::new(6, vec![2, 6]),
            Err(SparseFormatError::BadRowval)
        );
    }

    #[test]
    fn test_rowsubset_strided() {
        let s = RowSubset::strided(12, 5);
        assert_eq!(s.indices(), &[0, 5, 10]);
        assert_eq!(s.position(10), Some(2));
        assert_eq!(s.position(4), None);
        assert_eq!(s.source_rows(), 12);

        assert!(RowSubset::strided(4, 1).is_identity());
        assert!(RowSubset::strided(0, 3).is_empty());
    }

    #[test]
    fn test_rowsubset_from_mask() {
        let s = RowSubset::from_mask(&[false, true, true, false, true]);
        assert_eq!(s, RowSubset::new(5, vec![1, 2, 4]).unwrap());
        assert_eq!(RowSubset::from_mask(&[true; 3]), RowSubset::identity(3));
    }
}
