//! Tarea: Task-Parallel Integer Matrix Multiplication
//!
//! **Tarea** (Spanish: "task") multiplies two integer matrices by cutting
//! the product into independent row×column dot-product tasks, dispatching
//! the whole batch across a rayon worker pool, and joining every result
//! into a canonical row-major matrix.
//!
//! # Design Principles
//!
//! - **One task per cell**: each output cell is one pure dot product with
//!   no dependency on any other task
//! - **Layout in the type system**: the left operand is a row-major
//!   [`Matrix`], the right a column-major [`ColumnMatrix`], so every task
//!   receives two contiguous slices
//! - **No shared mutable state**: operands are read-only after creation and
//!   results travel through the join, so no locking anywhere
//! - **Fail before dispatch**: incompatible dimensions are rejected before
//!   a single task is created
//!
//! # Quick Start
//!
//! ```rust
//! use tarea::{ColumnMatrix, Matrix, TaskEngine};
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! // B = [[5, 6], [7, 8]], supplied column by column
//! let b = ColumnMatrix::from_vec(2, 2, vec![5, 7, 6, 8]).unwrap();
//!
//! let engine = TaskEngine::new();
//! let product = engine.multiply(&a, &b).unwrap();
//!
//! assert_eq!(product.row(0), &[19, 22]);
//! assert_eq!(product.row(1), &[43, 50]);
//! ```

pub mod engine;
pub mod error;
pub mod matrix;

pub use engine::TaskEngine;
pub use error::{Result, TareaError};
pub use matrix::{ColumnMatrix, Matrix};
