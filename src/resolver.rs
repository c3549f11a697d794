use crate::{
  kernels,
  ops::{ Kernel, OpResolver },
};


/// Resolves every builtin operator.

#[derive(Debug, Clone, Copy, Default)]
pub struct AllOpsResolver;

impl OpResolver for AllOpsResolver {
  fn find(&self, name: &str) -> Option<&'static dyn Kernel> {
    kernels::builtins()
      .into_iter()
      .find(|(op, _)| *op == name )
      .map(|(_, kernel)| kernel )
  }
}


/// Resolver holding an explicit selection of at most `N` kernels.
///
/// Registering only the operators a model actually uses keeps unused
/// kernels out of reach.

#[derive(Debug, Clone)]
pub struct MutableOpResolver<const N: usize> {
  registrations: Vec<(String, &'static dyn Kernel)>,
}

impl<const N: usize> MutableOpResolver<N> {
  pub fn new() -> Self {
    Self { registrations: Vec::with_capacity(N) }
  }

  /// Register a custom kernel under `name`.
  ///
  /// Returns false when the resolver is full or the name is taken.

  pub fn add(&mut self, name: &str, kernel: &'static dyn Kernel) -> bool {
    if self.registrations.len() == N || self.registrations.iter().any(|(op, _)| op == name ) {
      return false
    }
    self.registrations.push((name.to_string(), kernel));
    true
  }

  /// Register one of the builtin kernels by name.

  pub fn add_builtin(&mut self, name: &str) -> bool {
    match AllOpsResolver.find(name) {
      Some(kernel) => self.add(name, kernel),
      None => false,
    }
  }

  pub fn len(&self) -> usize {
    self.registrations.len()
  }

  pub fn is_empty(&self) -> bool {
    self.registrations.is_empty()
  }
}

impl<const N: usize> Default for MutableOpResolver<N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize> OpResolver for MutableOpResolver<N> {
  fn find(&self, name: &str) -> Option<&'static dyn Kernel> {
    self.registrations.iter()
      .find(|(op, _)| op == name )
      .map(|(_, kernel)| *kernel )
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_ops() {
    assert!(AllOpsResolver.find("FULLY_CONNECTED").is_some());
    assert!(AllOpsResolver.find("TANH").is_some());
    assert!(AllOpsResolver.find("CONV_2D").is_none());
  }

  #[test]
  fn mutable() {
    let mut resolver = MutableOpResolver::<2>::new();
    assert!(resolver.add_builtin("FULLY_CONNECTED"));
    assert!(!resolver.add_builtin("FULLY_CONNECTED"));
    assert!(!resolver.add_builtin("CONV_2D"));
    assert!(resolver.add_builtin("RELU"));
    assert!(!resolver.add_builtin("ADD"));
    assert_eq!(resolver.len(), 2);
    assert!(resolver.find("RELU").is_some());
    assert!(resolver.find("ADD").is_none());
  }
}
