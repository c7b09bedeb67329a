#![cfg_attr(not(feature = "std"), no_std)]

//! Dense vector/matrix containers over a real or complex scalar field,
//! with NumPy-style fancy indexing and classical elimination algorithms.

#[macro_use]
extern crate ark_std;

mod elimination;
mod error;
pub mod field;
pub mod index;
pub mod matrix;
pub mod ops;
pub mod vector;

pub use error::AlgebraError;
pub use field::{Complex, Field, Real};
pub use index::{Idx, Span};
pub use matrix::{mat, MatOperand, Matrix};
pub use ops::Transpose;
pub use vector::{vec, Orient, VecOperand, Vector};
