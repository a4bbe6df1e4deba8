//! Task-parallel multiplication engine
//!
//! Decomposes a matrix product into one independent dot-product task per
//! output cell, dispatches the whole batch across a rayon worker pool, and
//! joins every result before assembling the output. Tasks share nothing but
//! read-only borrows of the operands, so no locking is involved anywhere;
//! the single synchronization point is the join at the end of the parallel
//! iterator.
//!
//! # Example
//!
//! ```
//! use tarea::{ColumnMatrix, Matrix, TaskEngine};
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let b = ColumnMatrix::from_vec(2, 2, vec![5, 7, 6, 8]).unwrap();
//!
//! let engine = TaskEngine::new();
//! let product = engine.multiply(&a, &b).unwrap();
//! assert_eq!(product.get(0, 0), Some(&19));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::matrix::{ColumnMatrix, Matrix};
use crate::{Result, TareaError};

/// One pending dot-product computation
///
/// Holds read-only borrows of one row of A and one column of B, plus the
/// output coordinates the result belongs to. No task depends on any other
/// task, so any subset may run concurrently, sequentially, or out of order
/// with identical results.
struct Task<'a> {
    row: &'a [i64],
    column: &'a [i64],
    i: usize,
    j: usize,
}

impl Task<'_> {
    fn run(&self) -> i64 {
        dot(self.row, self.column)
    }
}

/// Sum of pairwise products of two equal-length integer vectors
///
/// Uses wrapping 64-bit signed arithmetic throughout, so overflow wraps
/// identically on every call with the same inputs.
fn dot(a: &[i64], b: &[i64]) -> i64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(0i64, |sum, (x, y)| sum.wrapping_add(x.wrapping_mul(*y)))
}

/// Schedules one dot-product task per output cell and joins the batch
///
/// The engine either dispatches on the global rayon pool ([`TaskEngine::new`])
/// or owns a dedicated pool ([`TaskEngine::with_threads`]). It also counts
/// resolved tasks across its lifetime, which tests use to verify that a
/// multiplication of an n×k by a k×m operand resolves exactly n×m tasks.
///
/// # Example
///
/// ```
/// use tarea::{ColumnMatrix, Matrix, TaskEngine};
///
/// let a = Matrix::from_vec(1, 3, vec![1, 2, 3]).unwrap();
/// let b = ColumnMatrix::identity(3);
///
/// let engine = TaskEngine::new();
/// let product = engine.multiply(&a, &b).unwrap();
/// assert_eq!(product.row(0), &[1, 2, 3]);
/// assert_eq!(engine.completed_tasks(), 3);
/// ```
pub struct TaskEngine {
    pool: Option<rayon::ThreadPool>,
    completed: AtomicU64,
}

impl TaskEngine {
    /// Creates an engine that dispatches on the global rayon pool
    pub fn new() -> Self {
        TaskEngine {
            pool: None,
            completed: AtomicU64::new(0),
        }
    }

    /// Creates an engine with a dedicated pool of `threads` workers
    ///
    /// # Errors
    ///
    /// Returns `SchedulingFailure` if the pool cannot be created
    pub fn with_threads(threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| TareaError::SchedulingFailure(e.to_string()))?;

        Ok(TaskEngine {
            pool: Some(pool),
            completed: AtomicU64::new(0),
        })
    }

    /// Number of tasks this engine has resolved since creation
    ///
    /// Monotone across `multiply` calls. Instrumentation only; the count is
    /// relaxed and carries no synchronization.
    pub fn completed_tasks(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Multiplies an n×k row-major matrix by a k×m column-major matrix
    ///
    /// Creates exactly n×m independent tasks, one per output cell, dispatches
    /// them across the worker pool, blocks until every task has resolved, and
    /// places each value by its task's recorded coordinates. Completion order
    /// never affects the output: the result is always canonical row-major.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `a.cols() != b.rows()`. The check runs
    /// before any task is created, so a failed call performs no partial work.
    ///
    /// # Example
    ///
    /// ```
    /// use tarea::{ColumnMatrix, Matrix, TaskEngine};
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// let b = ColumnMatrix::from_vec(2, 2, vec![5, 7, 6, 8]).unwrap();
    /// let c = TaskEngine::new().multiply(&a, &b).unwrap();
    ///
    /// // [[1, 2],   [[5, 6],   [[19, 22],
    /// //  [3, 4]] ×  [7, 8]] =  [43, 50]]
    /// assert_eq!(c.row(0), &[19, 22]);
    /// assert_eq!(c.row(1), &[43, 50]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self, a, b), fields(dims = %format!("{}x{} @ {}x{}", a.rows(), a.cols(), b.rows(), b.cols()))))]
    pub fn multiply(&self, a: &Matrix, b: &ColumnMatrix) -> Result<Matrix> {
        if a.cols() != b.rows() {
            return Err(TareaError::DimensionMismatch {
                expected: a.cols(),
                actual: b.rows(),
            });
        }

        let n = a.rows();
        let m = b.cols();

        let mut tasks = Vec::with_capacity(n * m);
        for i in 0..n {
            for j in 0..m {
                tasks.push(Task {
                    row: a.row(i),
                    column: b.column(j),
                    i,
                    j,
                });
            }
        }

        // Dispatch the whole batch and join once. collect() is the barrier:
        // it returns only after every task has resolved.
        let cells = self.install(|| {
            tasks
                .par_iter()
                .map(|task| {
                    let value = task.run();
                    self.completed.fetch_add(1, Ordering::Relaxed);
                    (task.i, task.j, value)
                })
                .collect::<Vec<_>>()
        });

        // Placement by each task's recorded identity, not completion order.
        let mut data = vec![0i64; n * m];
        for (i, j, value) in cells {
            data[i * m + j] = value;
        }

        Matrix::from_vec(n, m, data)
    }

    fn install<T, F>(&self, op: F) -> T
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl Default for TaskEngine {
    fn default() -> Self {
        Self::new()
    }
}
