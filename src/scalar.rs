use num_traits::Float;


/// All element types a kernel may compute on.
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits.

pub trait Real: Float + Copy + Send + Sync + std::fmt::Debug {}
impl<T: Float + Copy + Send + Sync + std::fmt::Debug> Real for T {}


pub fn relu<T: Real>(a: T) -> T {
  a.max(T::zero())
}

pub fn relu6<T: Real>(a: T) -> T {
  a.max(T::zero()).min(T::from(6.0).unwrap_or_else(T::max_value))
}

pub fn sigmoid<T: Real>(a: T) -> T {
  T::one() / (T::one() + (-a).exp())
}

pub fn tanh<T: Real>(a: T) -> T {
  a.tanh()
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clamps() {
    assert_eq!(relu(-2.0f32), 0.0);
    assert_eq!(relu(2.0f32), 2.0);
    assert_eq!(relu6(9.0f64), 6.0);
    assert_eq!(relu6(-1.0f64), 0.0);
  }

  #[test]
  fn squashes() {
    assert_eq!(sigmoid(0.0f32), 0.5);
    assert!(sigmoid(40.0f64) > 0.999);
    assert_eq!(tanh(0.0f32), 0.0);
  }
}
