//! Error types for model loading, tensor allocation and inference.

use thiserror::Error;

use crate::model::ModelError;


/// The arena could not satisfy an allocation.

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
  #[error("arena exhausted: requested {requested} bytes with {available} of {capacity} left")]
  Exhausted {
    requested: usize,
    available: usize,
    capacity: usize,
  },
}


/// A kernel rejected its operands.

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
  #[error("expected {expected} inputs, got {actual}")]
  Arity {
    expected: usize,
    actual: usize,
  },

  #[error("incompatible operands: {0}")]
  Shape(String),
}

impl KernelError {
  pub fn shape(reason: impl Into<String>) -> Self {
    Self::Shape(reason.into())
  }
}


/// Failure to bring a session into the ready state.
///
/// All variants are terminal: correcting them requires a different
/// model or a larger arena.

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InitError {
  #[error("tensor arena too small: {0}")]
  ArenaTooSmall(#[from] ArenaError),

  #[error("malformed model: {0}")]
  MalformedModel(#[from] ModelError),

  #[error("operator {name} is not supported by the resolver")]
  UnsupportedOperator {
    name: String,
  },

  #[error("cannot prepare operator {index} ({name}): {reason}")]
  Prepare {
    index: usize,
    name: String,
    reason: String,
  },

  #[error("model signature must be a single scalar in and out: {0}")]
  Signature(String),
}


/// Failure of a single inference request.
///
/// None of these invalidate a ready session.

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvokeError {
  #[error("session is not ready")]
  NotReady,

  #[error("input {value} lies outside [{min}, {max}]")]
  OutOfDomain {
    value: f32,
    min: f32,
    max: f32,
  },

  #[error("tensors have not been allocated")]
  NotAllocated,

  #[error("operator {index} failed: {source}")]
  Kernel {
    index: usize,
    source: KernelError,
  },

  #[error("output tensor {tensor} holds a non-finite value")]
  NonFinite {
    tensor: usize,
  },

  #[error("no tensor slot #{0}")]
  Slot(usize),
}
