use crate::{
  shape::Shape,
  error::KernelError,
  ops::{ Kernel, Activation },
};


/// Dense layer `y = x · Wᵀ + b`.
///
/// Takes `x: [batch, in]`, `W: [out, in]` and an optional `b: [out]`.
/// Inputs of higher rank get flattened into rows of `in` values.

#[derive(Debug, Clone, Copy)]
pub struct FullyConnected;

struct Dims {
  batch: usize,
  inner: usize,
  outer: usize,
}

impl FullyConnected {
  fn dims(inputs: &[&Shape]) -> Result<Dims, KernelError> {
    if inputs.len() != 2 && inputs.len() != 3 {
      return Err(KernelError::Arity { expected: 3, actual: inputs.len() })
    }
    let (x, weights) = (inputs[0], inputs[1]);
    if weights.rank() != 2 {
      return Err(KernelError::shape(format!("weights must be a matrix, got {weights}")))
    }
    let (outer, inner) = (weights[0], weights[1]);
    if inner == 0 || x.at_or(-1, 1) != inner || x.size() % inner != 0 {
      return Err(KernelError::shape(format!("cannot multiply {x} with {weights}")))
    }
    match inputs.get(2) {
      Some(bias) if bias.size() != outer =>
        return Err(KernelError::shape(format!("bias {bias} doesn't match {outer} units"))),
      _ => (),
    }
    Ok(Dims { batch: x.size() / inner, inner, outer })
  }

  #[cfg(feature = "unsafe")]
  fn matmul(x: &[f32], weights: &[f32], weight_shape: &Shape, dims: &Dims, output: &mut [f32]) {
    // Read weights through a transposed view instead of copying them
    let transposed = weight_shape.transpose(0, 1);
    unsafe {
      matrixmultiply::sgemm(
        dims.batch,
        dims.inner,
        dims.outer,
        1.0,
        x.as_ptr(),
        dims.inner as isize,
        1,
        weights.as_ptr(),
        transposed.stride(0),
        transposed.stride(1),
        0.0,
        output.as_mut_ptr(),
        dims.outer as isize,
        1,
      );
    }
  }

  #[cfg(not(feature = "unsafe"))]
  fn matmul(x: &[f32], weights: &[f32], _weight_shape: &Shape, dims: &Dims, output: &mut [f32]) {
    for i in 0..dims.batch {
      for j in 0..dims.outer {
        let mut acc = 0.0;
        for k in 0..dims.inner {
          acc += x[i * dims.inner + k] * weights[j * dims.inner + k];
        }
        output[i * dims.outer + j] = acc;
      }
    }
  }
}

impl Kernel for FullyConnected {
  fn prepare(&self, inputs: &[&Shape]) -> Result<Shape, KernelError> {
    let dims = Self::dims(inputs)?;
    Ok(Shape::new(&[dims.batch, dims.outer]))
  }

  fn eval(&self, inputs: &[&[f32]], shapes: &[&Shape], output: &mut [f32], activation: Activation) -> Result<(), KernelError> {
    let dims = Self::dims(shapes)?;
    if inputs.len() != shapes.len() {
      return Err(KernelError::Arity { expected: shapes.len(), actual: inputs.len() })
    }
    let (x, weights) = (inputs[0], inputs[1]);
    if x.len() != dims.batch * dims.inner
      || weights.len() != dims.outer * dims.inner
      || output.len() != dims.batch * dims.outer
    {
      return Err(KernelError::shape("buffer sizes disagree with operand shapes"))
    }

    Self::matmul(x, weights, shapes[1], &dims, output);

    if let Some(bias) = inputs.get(2) {
      for row in output.chunks_mut(dims.outer) {
        row.iter_mut().zip(bias.iter()).for_each(|(a, b)| *a += b );
      }
    }
    activation.apply(output);
    Ok(())
  }
}
