use std::fmt::Debug;

use crate::internal::*;


/// The shape of a tensor in a [Model](crate::Model).

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
  pub dims: Vec<usize>,
  pub(crate) strides: Vec<isize>,
}

impl Shape {
  pub fn new(dims: &[usize]) -> Self {
    let strides = Self::make_strides(dims);
    Self {
      dims: dims.to_vec(),
      strides,
    }
  }

  fn make_strides(dims: &[usize]) -> Vec<isize> {
    if dims.len() == 0 { return vec![] }
    let mut strides = vec![0; dims.len()];
    strides[dims.len() - 1] = 1;
    for i in (1..dims.len()).rev() {
      strides[i - 1] = (dims[i] as isize).saturating_mul(strides[i]);
    }
    strides
  }

  pub fn size(&self) -> usize {
    self.dims.iter().product()
  }

  pub fn rank(&self) -> usize {
    self.dims.len()
  }

  /// Element count, or [None] if it does not fit into an address space.

  pub fn checked_size(&self) -> Option<usize> {
    let size = self.dims.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n) )?;
    let bytes = size.checked_mul(std::mem::size_of::<f32>())?;
    if bytes > isize::MAX as usize { None } else { Some(size) }
  }

  /// Size in bytes of an f32 tensor with this shape.

  pub fn byte_size(&self) -> usize {
    self.size() * std::mem::size_of::<f32>()
  }

  pub fn stride(&self, idx: isize) -> isize {
    self.strides[negative_index(idx, self.rank(), false)]
  }

  pub fn at_or(&self, idx: isize, or: usize) -> usize {
    let off_bounds = if idx < 0 {
      idx.unsigned_abs() > self.rank()
    } else {
      idx as usize >= self.rank()
    };
    if off_bounds { or } else { self[idx] }
  }

  pub fn squeeze(&self) -> Self {
    let mut dims = vec![];
    let mut strides = vec![];
    for (d, &n) in self.dims.iter().enumerate() {
      if n != 1 {
        dims.push(n);
        strides.push(self.strides[d]);
      }
    }
    Self { dims, strides }
  }

  /// Shapes match when they hold the same elements in the same order,
  /// ignoring dimensions of size one.

  pub fn matches(&self, other: &Self) -> bool {
    self.squeeze().dims == other.squeeze().dims
  }

  pub fn transpose(&self, dim1: isize, dim2: isize) -> Self {
    let dim1 = negative_index(dim1, self.rank(), false);
    let dim2 = negative_index(dim2, self.rank(), false);
    let mut shape = self.clone();
    shape.dims.swap(dim1, dim2);
    shape.strides.swap(dim1, dim2);
    shape
  }
}

impl std::ops::Index<isize> for Shape {
  type Output = usize;

  fn index(&self, i: isize) -> &usize {
    let idx = negative_index(i, self.rank(), false);
    &self.dims[idx]
  }
}

impl std::fmt::Display for Shape {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "Shape{:?}", self.dims)
  }
}
