//! Matrix operand types
//!
//! Provides the two operand layouts for task-parallel multiplication: a
//! row-major [`Matrix`] whose unit of decomposition is a row, and a
//! column-major [`ColumnMatrix`] whose unit of decomposition is a column.
//! Keeping the layouts as distinct types means a vector handed to a
//! dot-product task is always contiguous, whichever operand it came from.
//!
//! # Example
//!
//! ```
//! use tarea::Matrix;
//!
//! let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
//! assert_eq!(m.rows(), 2);
//! assert_eq!(m.row(1), &[4, 5, 6]);
//! ```

use std::fmt;

use rand::Rng;

use crate::{Result, TareaError};

/// A 2D integer matrix with row-major storage
///
/// Data is stored in row-major format (C-style), where consecutive elements
/// in memory belong to the same row. Dimensions are fixed at creation and
/// the contents are never mutated afterwards, so shared references can be
/// handed to concurrent tasks freely.
///
/// # Storage Layout
///
/// For a 2x3 matrix:
/// ```text
/// [[a, b, c],
///  [d, e, f]]
/// ```
/// Data is stored as: [a, b, c, d, e, f]
///
/// # Example
///
/// ```
/// use tarea::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(m.get(0, 0), Some(&1));
/// assert_eq!(m.get(1, 1), Some(&4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Creates a matrix from a vector of data in row-major order
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `data.len() != rows * cols`
    ///
    /// # Example
    ///
    /// ```
    /// use tarea::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.cols(), 2);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(TareaError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }

        Ok(Matrix { rows, cols, data })
    }

    /// Creates a matrix where every cell is independently drawn from `[0, bound)`
    ///
    /// The generator is passed in explicitly so callers control seeding;
    /// there is no process-global randomness.
    ///
    /// # Panics
    ///
    /// Panics if `bound <= 0`
    ///
    /// # Example
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use tarea::Matrix;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let m = Matrix::random(3, 4, 100, &mut rng);
    /// assert!(m.row(0).iter().all(|&x| (0..100).contains(&x)));
    /// ```
    pub fn random<R: Rng>(rows: usize, cols: usize, bound: i64, rng: &mut R) -> Self {
        let data = (0..rows * cols).map(|_| rng.gen_range(0..bound)).collect();
        Matrix { rows, cols, data }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a reference to the element at (row, col), or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&i64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns row `i` as a contiguous slice
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for (j, cell) in self.row(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A 2D integer matrix with column-major storage
///
/// Logically a `rows x cols` matrix, stored as `cols` contiguous column
/// vectors of length `rows`. This is the layout for the right-hand operand
/// of a multiplication: each dot-product task takes one whole column, and
/// the column is already a contiguous slice.
///
/// # Storage Layout
///
/// For a 2x3 matrix:
/// ```text
/// [[a, b, c],
///  [d, e, f]]
/// ```
/// Data is stored as: [a, d, b, e, c, f]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl ColumnMatrix {
    /// Creates a matrix from a vector of data in column-major order
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `data.len() != rows * cols`
    ///
    /// # Example
    ///
    /// ```
    /// use tarea::ColumnMatrix;
    ///
    /// // [[5, 6],
    /// //  [7, 8]] supplied column by column
    /// let b = ColumnMatrix::from_vec(2, 2, vec![5, 7, 6, 8]).unwrap();
    /// assert_eq!(b.column(0), &[5, 7]);
    /// assert_eq!(b.get(0, 1), Some(&6));
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(TareaError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }

        Ok(ColumnMatrix { rows, cols, data })
    }

    /// Creates a matrix where every cell is independently drawn from `[0, bound)`
    ///
    /// # Panics
    ///
    /// Panics if `bound <= 0`
    pub fn random<R: Rng>(rows: usize, cols: usize, bound: i64, rng: &mut R) -> Self {
        let data = (0..rows * cols).map(|_| rng.gen_range(0..bound)).collect();
        ColumnMatrix { rows, cols, data }
    }

    /// Creates a `size x size` identity matrix
    ///
    /// # Example
    ///
    /// ```
    /// use tarea::ColumnMatrix;
    ///
    /// let i3 = ColumnMatrix::identity(3);
    /// assert_eq!(i3.get(1, 1), Some(&1));
    /// assert_eq!(i3.get(2, 1), Some(&0));
    /// ```
    pub fn identity(size: usize) -> Self {
        let mut data = vec![0; size * size];
        for d in 0..size {
            data[d * size + d] = 1;
        }
        ColumnMatrix {
            rows: size,
            cols: size,
            data,
        }
    }

    /// Number of rows (the length of each stored column)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a reference to the element at (row, col), or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&i64> {
        if row < self.rows && col < self.cols {
            self.data.get(col * self.rows + row)
        } else {
            None
        }
    }

    /// Returns column `j` as a contiguous slice
    ///
    /// # Panics
    ///
    /// Panics if `j >= self.cols()`
    pub fn column(&self, j: usize) -> &[i64] {
        &self.data[j * self.rows..(j + 1) * self.rows]
    }
}

impl fmt::Display for ColumnMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rendered in logical row order, not storage order.
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.data[j * self.rows + i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_vec_valid() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(0, 2), Some(&3));
        assert_eq!(m.get(1, 0), Some(&4));
    }

    #[test]
    fn test_from_vec_wrong_length() {
        let result = Matrix::from_vec(2, 3, vec![1, 2, 3]);
        assert_eq!(
            result,
            Err(TareaError::ShapeMismatch {
                rows: 2,
                cols: 3,
                len: 3
            })
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_row_slices() {
        let m = Matrix::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.row(0), &[1, 2]);
        assert_eq!(m.row(2), &[5, 6]);
    }

    #[test]
    fn test_random_within_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(4, 5, 10, &mut rng);
        for i in 0..4 {
            assert!(m.row(i).iter().all(|&x| (0..10).contains(&x)));
        }
    }

    #[test]
    fn test_random_seeded_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let m1 = Matrix::random(3, 3, 1000, &mut rng1);
        let m2 = Matrix::random(3, 3, 1000, &mut rng2);
        assert_eq!(m1, m2);
    }

    #[test]
    fn test_column_matrix_from_vec() {
        let b = ColumnMatrix::from_vec(2, 3, vec![1, 4, 2, 5, 3, 6]).unwrap();
        // Logical matrix is [[1, 2, 3], [4, 5, 6]]
        assert_eq!(b.get(0, 0), Some(&1));
        assert_eq!(b.get(0, 2), Some(&3));
        assert_eq!(b.get(1, 1), Some(&5));
        assert_eq!(b.column(1), &[2, 5]);
    }

    #[test]
    fn test_column_matrix_wrong_length() {
        let result = ColumnMatrix::from_vec(3, 3, vec![1, 2]);
        assert_eq!(
            result,
            Err(TareaError::ShapeMismatch {
                rows: 3,
                cols: 3,
                len: 2
            })
        );
    }

    #[test]
    fn test_identity_cells() {
        let i4 = ColumnMatrix::identity(4);
        for i in 0..4 {
            for j in 0..4 {
                let expected = i64::from(i == j);
                assert_eq!(i4.get(i, j), Some(&expected));
            }
        }
    }

    #[test]
    fn test_identity_columns_are_unit_vectors() {
        let i3 = ColumnMatrix::identity(3);
        assert_eq!(i3.column(0), &[1, 0, 0]);
        assert_eq!(i3.column(1), &[0, 1, 0]);
        assert_eq!(i3.column(2), &[0, 0, 1]);
    }

    #[test]
    fn test_display_row_major() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.to_string(), "1 2\n3 4\n");
    }

    #[test]
    fn test_display_column_major_renders_logical_rows() {
        // [[5, 6], [7, 8]] stored as columns [5, 7] and [6, 8]
        let b = ColumnMatrix::from_vec(2, 2, vec![5, 7, 6, 8]).unwrap();
        assert_eq!(b.to_string(), "5 6\n7 8\n");
    }
}
