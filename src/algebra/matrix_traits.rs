/// Dimension queries shared by matrices and the column views over them.
///
/// Column views report as their row dimension the length of the
/// buffers they fill: the full row count, or the size of the attached
/// row subset.
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
