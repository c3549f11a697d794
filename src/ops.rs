use serde::{ Serialize, Deserialize };

use crate::{
  shape::Shape,
  scalar,
  error::KernelError,
};


/// Activation fused into an operator, applied to its output in place.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Activation {
  #[default]
  None,
  Relu,
  Relu6,
  Tanh,
  Sigmoid,
}

impl Activation {
  pub fn apply(&self, data: &mut [f32]) {
    let f: fn(f32) -> f32 = match self {
      Self::None => return,
      Self::Relu => scalar::relu,
      Self::Relu6 => scalar::relu6,
      Self::Tanh => scalar::tanh,
      Self::Sigmoid => scalar::sigmoid,
    };
    data.iter_mut().for_each(|a| *a = f(*a) );
  }
}


/// Float32 compute kernel for one operator kind.
///
/// [prepare](Kernel::prepare) runs once during tensor allocation and
/// infers the output shape, [eval](Kernel::eval) runs on every invocation.

pub trait Kernel: std::fmt::Debug + Send + Sync {
  fn prepare(&self, inputs: &[&Shape]) -> Result<Shape, KernelError>;
  fn eval(&self, inputs: &[&[f32]], shapes: &[&Shape], output: &mut [f32], activation: Activation) -> Result<(), KernelError>;
}


/// Lookup table from operator names to [kernels](Kernel).

pub trait OpResolver {
  fn find(&self, name: &str) -> Option<&'static dyn Kernel>;
}


pub(crate) fn expect_arity(inputs: usize, expected: usize) -> Result<(), KernelError> {
  if inputs != expected {
    return Err(KernelError::Arity { expected, actual: inputs })
  }
  Ok(())
}
