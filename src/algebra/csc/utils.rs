//---------------------------------------------------------
// low-level internal utilities for counting / filling entries
// when compressing coordinate data into CSC format.
//---------------------------------------------------------

use crate::algebra::{CscMatrix, FloatT};

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    // increment self.colptr by one for every entry in
    // each of the given columns.   Counts land in colptr[col],
    // and colptr[n] is left untouched
    pub(crate) fn colcount_entries(&mut self, colval: &[usize]) {
        for &col in colval {
            self.colptr[col] += 1;
        }
    }

    // place a single entry using the self.colptr as the indicator
    // of the next fill location in column `col`
    pub(crate) fn fill_entry(&mut self, row: usize, col: usize, val: T) {
        let dest = self.colptr[col];
        self.rowval[dest] = row;
        self.nzval[dest] = val;
        self.colptr[col] += 1;
    }

    pub(crate) fn colcount_to_colptr(&mut self) {
        let mut currentptr = 0;
        for p in &mut self.colptr {
            let count = *p;
            *p = currentptr;
            currentptr += count;
        }
    }

    pub(crate) fn backshift_colptrs(&mut self) {
        self.colptr.rotate_right(1);
        self.colptr[0] = 0;
    }

    // sort each column by increasing row index.   Columns that
    // are already in order are left alone, which is the usual
    // case for generated data
    pub(crate) fn sort_columns(&mut self) {
        let mut scratch: Vec<(usize, T)> = Vec::new();

        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            if self.rowval[rng.clone()].windows(2).all(|c| c[0] < c[1]) {
                continue;
            }

            scratch.clear();
            scratch.extend(
                self.rowval[rng.clone()]
                    .iter()
                    .copied()
                    .zip(self.nzval[rng.clone()].iter().copied()),
            );
            // stable, so duplicates keep their generation order
            scratch.sort_by_key(|&(row, _)| row);

            for (k, (row, val)) in rng.zip(scratch.iter().copied()) {
                self.rowval[k] = row;
                self.nzval[k] = val;
            }
        }
    }

    // first (row, col) position that appears more than once, if any.
    // Assumes columns have been sorted
    pub(crate) fn find_duplicate(&self) -> Option<(usize, usize)> {
        for col in 0..self.n {
            let rows = &self.rowval[self.colptr[col]..self.colptr[col + 1]];
            if let Some(w) = rows.windows(2).find(|w| w[0] == w[1]) {
                return Some((w[0], col));
            }
        }
        None
    }
}
