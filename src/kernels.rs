use crate::{
  shape::Shape,
  error::KernelError,
  ops::{ Kernel, Activation, expect_arity },
};

mod fully_connected;

pub use fully_connected::FullyConnected;


static RELU: Unary = Unary(Activation::Relu);
static RELU6: Unary = Unary(Activation::Relu6);
static TANH: Unary = Unary(Activation::Tanh);
static LOGISTIC: Unary = Unary(Activation::Sigmoid);


/// Every builtin kernel along with the operator name it implements.

pub fn builtins() -> [(&'static str, &'static dyn Kernel); 7] {
  [
    ("FULLY_CONNECTED", &FullyConnected),
    ("ADD", &Add),
    ("MUL", &Mul),
    ("RELU", &RELU),
    ("RELU6", &RELU6),
    ("TANH", &TANH),
    ("LOGISTIC", &LOGISTIC),
  ]
}


/// Standalone activation operator.

#[derive(Debug, Clone, Copy)]
pub struct Unary(pub Activation);

impl Kernel for Unary {
  fn prepare(&self, inputs: &[&Shape]) -> Result<Shape, KernelError> {
    expect_arity(inputs.len(), 1)?;
    Ok(inputs[0].clone())
  }

  fn eval(&self, inputs: &[&[f32]], _shapes: &[&Shape], output: &mut [f32], activation: Activation) -> Result<(), KernelError> {
    expect_arity(inputs.len(), 1)?;
    let input = inputs[0];
    if input.len() != output.len() {
      return Err(KernelError::shape(format!("{} values into {} slots", input.len(), output.len())))
    }
    output.copy_from_slice(input);
    self.0.apply(output);
    activation.apply(output);
    Ok(())
  }
}


fn prepare_binary(inputs: &[&Shape]) -> Result<Shape, KernelError> {
  expect_arity(inputs.len(), 2)?;
  let (lhs, rhs) = (inputs[0], inputs[1]);
  if rhs.size() != 1 && !lhs.matches(rhs) {
    return Err(KernelError::shape(format!("cannot broadcast {rhs} onto {lhs}")))
  }
  Ok(lhs.clone())
}

fn eval_binary(inputs: &[&[f32]], output: &mut [f32], activation: Activation, cb: impl Fn(f32, f32) -> f32) -> Result<(), KernelError> {
  expect_arity(inputs.len(), 2)?;
  let (lhs, rhs) = (inputs[0], inputs[1]);
  if lhs.len() != output.len() || (rhs.len() != 1 && rhs.len() != lhs.len()) {
    return Err(KernelError::shape(format!("{} & {} values into {} slots", lhs.len(), rhs.len(), output.len())))
  }
  for (i, out) in output.iter_mut().enumerate() {
    let b = if rhs.len() == 1 { rhs[0] } else { rhs[i] };
    *out = cb(lhs[i], b);
  }
  activation.apply(output);
  Ok(())
}


/// Elementwise sum. The right hand side may also be a single value.

#[derive(Debug, Clone, Copy)]
pub struct Add;

impl Kernel for Add {
  fn prepare(&self, inputs: &[&Shape]) -> Result<Shape, KernelError> {
    prepare_binary(inputs)
  }

  fn eval(&self, inputs: &[&[f32]], _shapes: &[&Shape], output: &mut [f32], activation: Activation) -> Result<(), KernelError> {
    eval_binary(inputs, output, activation, |a, b| a + b )
  }
}


/// Elementwise product. The right hand side may also be a single value.

#[derive(Debug, Clone, Copy)]
pub struct Mul;

impl Kernel for Mul {
  fn prepare(&self, inputs: &[&Shape]) -> Result<Shape, KernelError> {
    prepare_binary(inputs)
  }

  fn eval(&self, inputs: &[&[f32]], _shapes: &[&Shape], output: &mut [f32], activation: Activation) -> Result<(), KernelError> {
    eval_binary(inputs, output, activation, |a, b| a * b )
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add() {
    let shape = Shape::new(&[3]);
    assert_eq!(Add.prepare(&[&shape, &shape]).unwrap(), shape);
    let mut out = [0.0; 3];
    Add.eval(&[&[1.0, 2.0, 3.0], &[1.0, 1.0, -5.0]], &[], &mut out, Activation::Relu).unwrap();
    assert_eq!(out, [2.0, 3.0, 0.0]);
  }

  #[test]
  fn mul_scalar() {
    let lhs = Shape::new(&[1,3]);
    assert_eq!(Mul.prepare(&[&lhs, &Shape::new(&[1])]).unwrap(), lhs);
    let mut out = [0.0; 3];
    Mul.eval(&[&[1.0, 2.0, 3.0], &[2.0]], &[], &mut out, Activation::None).unwrap();
    assert_eq!(out, [2.0, 4.0, 6.0]);
  }

  #[test]
  fn mismatch() {
    let err = Add.prepare(&[&Shape::new(&[3]), &Shape::new(&[2])]).unwrap_err();
    assert!(matches!(err, KernelError::Shape(_)));
    let err = Mul.prepare(&[&Shape::new(&[3])]).unwrap_err();
    assert_eq!(err, KernelError::Arity { expected: 2, actual: 1 });
  }

  #[test]
  fn unary() {
    let mut out = [0.0; 2];
    Unary(Activation::Sigmoid).eval(&[&[0.0, 0.0]], &[], &mut out, Activation::None).unwrap();
    assert_eq!(out, [0.5, 0.5]);
    Unary(Activation::Relu).eval(&[&[-3.0, 3.0]], &[], &mut out, Activation::None).unwrap();
    assert_eq!(out, [0.0, 3.0]);
  }

  #[test]
  fn names() {
    let names: Vec<_> = builtins().iter().map(|(name, _)| *name ).collect();
    assert!(names.contains(&"FULLY_CONNECTED"));
    assert!(names.contains(&"LOGISTIC"));
  }
}
