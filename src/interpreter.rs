use tracing::{ debug, info };

use crate::{
  shape::Shape,
  arena::{ Arena, Region },
  model::Model,
  ops::{ Kernel, OpResolver, Activation },
  error::{ InitError, InvokeError, KernelError },
};


/// Operator bound to its kernel, ready to run.

#[derive(Debug)]
struct Step {
  index: usize,
  kernel: &'static dyn Kernel,
  inputs: Vec<usize>,
  output: usize,
  activation: Activation,
}

/// Result of a successful tensor allocation.

#[derive(Debug)]
struct Plan {
  steps: Vec<Step>,
  regions: Vec<Option<Region>>,
}


/// Executes a [Model] with kernels from an [OpResolver], keeping
/// all intermediate tensors inside an [Arena].
///
/// Tensors need to be allocated before the first invocation.

#[derive(Debug)]
pub struct Interpreter<R: OpResolver> {
  model: Model,
  resolver: R,
  arena: Arena,
  plan: Option<Plan>,
}

impl<R: OpResolver> Interpreter<R> {
  pub fn new(model: Model, resolver: R, arena: Arena) -> Self {
    Self { model, resolver, arena, plan: None }
  }

  /// Resolve every operator, check its operand shapes and carve
  /// storage for all non-constant tensors out of the arena.
  ///
  /// Calling this again starts over from an empty arena.

  pub fn allocate_tensors(&mut self) -> Result<(), InitError> {
    self.plan = None;
    self.arena.reset();

    let tensors = self.model.tensors();
    let mut written = vec![false; tensors.len()];
    for &t in self.model.inputs() {
      written[t] = true;
    }

    let mut steps = Vec::with_capacity(self.model.operators().len());
    for (index, op) in self.model.operators().iter().enumerate() {
      let name = self.model.opcode_name(op);
      let kernel = self.resolver.find(name)
        .ok_or_else(|| InitError::UnsupportedOperator { name: name.to_string() } )?;
      let fail = |reason: String| InitError::Prepare { index, name: name.to_string(), reason };

      let &[output] = op.outputs.as_slice() else {
        return Err(fail(format!("expected a single output, got {}", op.outputs.len())))
      };
      if let Some(&t) = op.inputs.iter().find(|&&t| !tensors[t].is_constant() && !written[t] ) {
        return Err(fail(format!("{} is read before it is written", tensors[t].name)))
      }

      let shapes: Vec<&Shape> = op.inputs.iter().map(|&t| &tensors[t].shape ).collect();
      let inferred = kernel.prepare(&shapes).map_err(|err| fail(err.to_string()) )?;
      let declared = &tensors[output];
      if declared.is_constant() {
        return Err(fail(format!("cannot write to constant {}", declared.name)))
      }
      if !inferred.matches(&declared.shape) {
        return Err(fail(format!("produces {inferred}, but {} is declared as {}", declared.name, declared.shape)))
      }
      written[output] = true;

      debug!(index, op = name, output = %declared.name, shape = %declared.shape, "prepared operator");
      steps.push(Step { index, kernel, inputs: op.inputs.clone(), output, activation: op.activation });
    }

    if let Some(&t) = self.model.outputs().iter().find(|&&t| !written[t] ) {
      return Err(InitError::Signature(format!("output {} is never written", tensors[t].name)))
    }

    let mut regions = vec![None; tensors.len()];
    for (t, tensor) in tensors.iter().enumerate() {
      if tensor.is_constant() { continue }
      let region = self.arena.allocate(tensor.shape.byte_size())?;
      debug!(tensor = %tensor.name, offset = region.offset, len = region.len, "allocated tensor");
      regions[t] = Some(region);
    }

    info!(used = self.arena.used(), capacity = self.arena.capacity(), ops = %self.model.summary(), "tensors allocated");
    self.plan = Some(Plan { steps, regions });
    Ok(())
  }

  /// Run one forward pass over the current input tensors.

  pub fn invoke(&mut self) -> Result<(), InvokeError> {
    let plan = self.plan.as_ref().ok_or(InvokeError::NotAllocated)?;
    let model = &self.model;

    for step in &plan.steps {
      let target = plan.regions[step.output].ok_or(InvokeError::NotAllocated)?;
      let (sources, output) = self.arena.partition(target);

      let mut inputs = Vec::with_capacity(step.inputs.len());
      let mut shapes = Vec::with_capacity(step.inputs.len());
      for &t in &step.inputs {
        let data = match model.constant_data(t) {
          Some(data) => Some(data),
          None => plan.regions[t].and_then(|region| sources.get(region) ),
        };
        let data = data.ok_or_else(|| InvokeError::Kernel {
          index: step.index,
          source: KernelError::shape(format!("{} overlaps the output buffer", model.tensors()[t].name)),
        })?;
        inputs.push(data);
        shapes.push(&model.tensors()[t].shape);
      }

      step.kernel.eval(&inputs, &shapes, output, step.activation)
        .map_err(|source| InvokeError::Kernel { index: step.index, source } )?;
    }

    for &t in model.outputs() {
      let Some(region) = plan.regions[t] else { continue };
      if self.arena.slice(region).iter().any(|a| !a.is_finite() ) {
        return Err(InvokeError::NonFinite { tensor: t })
      }
    }
    Ok(())
  }

  fn region(&self, tensor: usize) -> Result<Region, InvokeError> {
    let plan = self.plan.as_ref().ok_or(InvokeError::NotAllocated)?;
    plan.regions[tensor].ok_or(InvokeError::NotAllocated)
  }

  fn input_index(&self, i: usize) -> Result<usize, InvokeError> {
    self.model.inputs().get(i).copied().ok_or(InvokeError::Slot(i))
  }

  fn output_index(&self, i: usize) -> Result<usize, InvokeError> {
    self.model.outputs().get(i).copied().ok_or(InvokeError::Slot(i))
  }

  pub fn input(&self, i: usize) -> Result<&[f32], InvokeError> {
    let region = self.region(self.input_index(i)?)?;
    Ok(self.arena.slice(region))
  }

  pub fn input_mut(&mut self, i: usize) -> Result<&mut [f32], InvokeError> {
    let region = self.region(self.input_index(i)?)?;
    Ok(self.arena.slice_mut(region))
  }

  pub fn output(&self, i: usize) -> Result<&[f32], InvokeError> {
    let region = self.region(self.output_index(i)?)?;
    Ok(self.arena.slice(region))
  }

  pub fn is_allocated(&self) -> bool {
    self.plan.is_some()
  }

  pub fn arena_used(&self) -> usize {
    self.arena.used()
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    model::{ TensorDef, OperatorDef, tests::tiny },
    model_data::SINE_MODEL_DATA,
    resolver::{ AllOpsResolver, MutableOpResolver },
  };

  fn sine(capacity: usize) -> Interpreter<AllOpsResolver> {
    let model = Model::from_bytes(SINE_MODEL_DATA).unwrap();
    Interpreter::new(model, AllOpsResolver, Arena::new(capacity))
  }

  #[test]
  fn forward() {
    let mut interpreter = Interpreter::new(tiny("FULLY_CONNECTED"), AllOpsResolver, Arena::new(64));
    interpreter.allocate_tensors().unwrap();
    interpreter.input_mut(0).unwrap()[0] = 3.0;
    interpreter.invoke().unwrap();
    assert_eq!(interpreter.output(0).unwrap(), &[5.0]);
    interpreter.input_mut(0).unwrap()[0] = -3.0;
    interpreter.invoke().unwrap();
    assert_eq!(interpreter.output(0).unwrap(), &[0.0]);
  }

  #[test]
  fn sine_fits() {
    let mut interpreter = sine(2048);
    interpreter.allocate_tensors().unwrap();
    // Input padded to 16 bytes, two hidden layers of 64 and the output scalar
    assert_eq!(interpreter.arena_used(), 148);
    interpreter.input_mut(0).unwrap()[0] = std::f32::consts::FRAC_PI_2;
    interpreter.invoke().unwrap();
    assert!((interpreter.output(0).unwrap()[0] - 1.0).abs() < 0.05);
  }

  #[test]
  fn arena_too_small() {
    let mut interpreter = sine(64);
    let err = interpreter.allocate_tensors().unwrap_err();
    assert!(matches!(err, InitError::ArenaTooSmall(_)));
    assert!(!interpreter.is_allocated());
    assert_eq!(interpreter.invoke(), Err(InvokeError::NotAllocated));
    assert_eq!(interpreter.input(0), Err(InvokeError::NotAllocated));
  }

  #[test]
  fn unsupported() {
    let mut interpreter = Interpreter::new(tiny("CONV_2D"), AllOpsResolver, Arena::new(64));
    assert_eq!(interpreter.allocate_tensors(), Err(InitError::UnsupportedOperator { name: "CONV_2D".to_string() }));

    let mut resolver = MutableOpResolver::<1>::new();
    resolver.add_builtin("RELU");
    let mut interpreter = Interpreter::new(tiny("FULLY_CONNECTED"), resolver, Arena::new(64));
    assert!(matches!(interpreter.allocate_tensors(), Err(InitError::UnsupportedOperator { .. })));
  }

  #[test]
  fn declared_shape_mismatch() {
    let model = Model::new(
      "bad",
      vec!["FULLY_CONNECTED".to_string()],
      vec![
        TensorDef::variable("x", &[1,2]),
        TensorDef::constant("w", &[3,2], vec![0.0; 6]),
        TensorDef::variable("y", &[1,2]),
      ],
      vec![OperatorDef { opcode: 0, inputs: vec![0, 1], outputs: vec![2], activation: Activation::None }],
      vec![0],
      vec![2],
    ).unwrap();
    let mut interpreter = Interpreter::new(model, AllOpsResolver, Arena::new(256));
    assert!(matches!(interpreter.allocate_tensors(), Err(InitError::Prepare { index: 0, .. })));
  }

  #[test]
  fn read_before_write() {
    let model = Model::new(
      "bad",
      vec!["RELU".to_string()],
      vec![
        TensorDef::variable("x", &[1]),
        TensorDef::variable("h", &[1]),
        TensorDef::variable("y", &[1]),
      ],
      vec![OperatorDef { opcode: 0, inputs: vec![1], outputs: vec![2], activation: Activation::None }],
      vec![0],
      vec![2],
    ).unwrap();
    let mut interpreter = Interpreter::new(model, AllOpsResolver, Arena::new(256));
    assert!(matches!(interpreter.allocate_tensors(), Err(InitError::Prepare { .. })));
  }

  #[test]
  fn non_finite() {
    let model = Model::new(
      "overflow",
      vec!["MUL".to_string()],
      vec![
        TensorDef::variable("x", &[1]),
        TensorDef::constant("k", &[1], vec![f32::MAX]),
        TensorDef::variable("y", &[1]),
      ],
      vec![OperatorDef { opcode: 0, inputs: vec![0, 1], outputs: vec![2], activation: Activation::None }],
      vec![0],
      vec![2],
    ).unwrap();
    let mut interpreter = Interpreter::new(model, AllOpsResolver, Arena::new(64));
    interpreter.allocate_tensors().unwrap();
    interpreter.input_mut(0).unwrap()[0] = 10.0;
    assert_eq!(interpreter.invoke(), Err(InvokeError::NonFinite { tensor: 2 }));
    // The interpreter stays usable
    interpreter.input_mut(0).unwrap()[0] = 0.5;
    interpreter.invoke().unwrap();
    assert_eq!(interpreter.output(0).unwrap(), &[f32::MAX * 0.5]);
  }

  #[test]
  fn input_isolation() {
    let mut interpreter = sine(2048);
    interpreter.allocate_tensors().unwrap();
    interpreter.input_mut(0).unwrap()[0] = 1.0;
    interpreter.invoke().unwrap();

    let input = interpreter.region(0).unwrap();
    let snapshot = |interpreter: &Interpreter<AllOpsResolver>| -> Vec<Vec<f32>> {
      let plan = interpreter.plan.as_ref().unwrap();
      plan.regions.iter()
        .flatten()
        .filter(|&&region| region != input )
        .map(|&region| interpreter.arena.slice(region).to_vec() )
        .collect()
    };
    let before = snapshot(&interpreter);
    let output = interpreter.output(0).unwrap().to_vec();

    interpreter.input_mut(0).unwrap()[0] = 4.0;
    assert_eq!(interpreter.input(0).unwrap(), &[4.0]);
    assert_eq!(interpreter.output(0).unwrap(), &output[..]);
    assert_eq!(snapshot(&interpreter), before);

    interpreter.invoke().unwrap();
    assert_ne!(interpreter.output(0).unwrap(), &output[..]);
  }

  #[test]
  fn reallocate() {
    let mut interpreter = sine(2048);
    interpreter.allocate_tensors().unwrap();
    let used = interpreter.arena_used();
    interpreter.allocate_tensors().unwrap();
    assert_eq!(interpreter.arena_used(), used);
    assert_eq!(interpreter.input(0).unwrap(), &[0.0]);
    assert_eq!(interpreter.output(1), Err(InvokeError::Slot(1)));
  }
}
