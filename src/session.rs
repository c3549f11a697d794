use tracing::{ debug, info, error };

use crate::{
  arena::Arena,
  model::Model,
  model_data::SINE_MODEL_DATA,
  interpreter::Interpreter,
  ops::OpResolver,
  resolver::AllOpsResolver,
  config::{ SessionConfig, Domain },
  error::{ InitError, InvokeError },
};


/// Lifecycle of an [InferenceSession].
///
/// `Failed` is terminal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
  Uninitialized,
  Ready,
  Failed,
}

#[derive(Debug)]
enum State<R: OpResolver> {
  Uninitialized,
  Ready(Interpreter<R>),
  Failed(InitError),
}


/// Owns a model, its interpreter and the arena backing it.
///
/// Sessions go through a one-time [initialize](InferenceSession::initialize)
/// and then serve any number of [run_once](InferenceSession::run_once) calls,
/// each mapping a single scalar input to a single scalar output.

#[derive(Debug)]
pub struct InferenceSession<'a, R: OpResolver + Clone = AllOpsResolver> {
  model_data: &'a [u8],
  resolver: R,
  config: SessionConfig,
  state: State<R>,
}

impl InferenceSession<'static, AllOpsResolver> {
  /// Session for the embedded sine model with default settings.

  pub fn new() -> Self {
    Self::with_config(SessionConfig::default())
  }

  pub fn with_config(config: SessionConfig) -> Self {
    Self::with_model(SINE_MODEL_DATA, AllOpsResolver, config)
  }
}

impl Default for InferenceSession<'static, AllOpsResolver> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a, R: OpResolver + Clone> InferenceSession<'a, R> {
  pub fn with_model(model_data: &'a [u8], resolver: R, config: SessionConfig) -> Self {
    Self { model_data, resolver, config, state: State::Uninitialized }
  }

  /// Load the model, resolve its operators and allocate its tensors.
  ///
  /// Repeated calls on a ready session redo the allocation from scratch.
  /// Once initialization has failed, every further call returns the same error.

  pub fn initialize(&mut self) -> Result<(), InitError> {
    let result = match std::mem::replace(&mut self.state, State::Uninitialized) {
      State::Failed(err) => {
        self.state = State::Failed(err.clone());
        return Err(err)
      },
      State::Ready(mut interpreter) => {
        debug!("reallocating tensors");
        interpreter.allocate_tensors().map(|_| interpreter )
      },
      State::Uninitialized => self.load(),
    };

    match result {
      Ok(interpreter) => {
        info!(arena_used = interpreter.arena_used(), arena_size = self.config.arena_size, "session ready");
        self.state = State::Ready(interpreter);
        Ok(())
      },
      Err(err) => {
        error!(%err, "session initialization failed");
        self.state = State::Failed(err.clone());
        Err(err)
      },
    }
  }

  fn load(&self) -> Result<Interpreter<R>, InitError> {
    let model = Model::from_bytes(self.model_data)?;
    info!(description = model.description(), version = model.version(), "model loaded");
    check_signature(&model)?;
    let arena = Arena::new(self.config.arena_size);
    let mut interpreter = Interpreter::new(model, self.resolver.clone(), arena);
    interpreter.allocate_tensors()?;
    Ok(interpreter)
  }

  /// Compute the model's output for `x`.
  ///
  /// Refuses without touching the arena unless the session is ready
  /// and `x` lies inside the configured domain.

  pub fn run_once(&mut self, x: f32) -> Result<f32, InvokeError> {
    let State::Ready(interpreter) = &mut self.state else {
      return Err(InvokeError::NotReady)
    };
    let domain = self.config.domain;
    if !domain.contains(x) {
      return Err(InvokeError::OutOfDomain { value: x, min: domain.min, max: domain.max })
    }

    let slot = interpreter.input_mut(0)?;
    *slot.first_mut().ok_or(InvokeError::Slot(0))? = x;

    interpreter.invoke().map_err(|err| {
      error!(%err, input = x, "inference failed");
      err
    })?;

    let y = interpreter.output(0)?.first().copied().ok_or(InvokeError::Slot(0))?;
    debug!(input = x, output = y, "inference done");
    Ok(y)
  }

  pub fn state(&self) -> SessionState {
    match self.state {
      State::Uninitialized => SessionState::Uninitialized,
      State::Ready(_) => SessionState::Ready,
      State::Failed(_) => SessionState::Failed,
    }
  }

  pub fn is_ready(&self) -> bool {
    self.state() == SessionState::Ready
  }

  pub fn failure(&self) -> Option<&InitError> {
    match &self.state {
      State::Failed(err) => Some(err),
      _ => None,
    }
  }

  /// Bytes of the arena in use, zero unless ready.

  pub fn arena_used(&self) -> usize {
    match &self.state {
      State::Ready(interpreter) => interpreter.arena_used(),
      _ => 0,
    }
  }

  pub fn domain(&self) -> Domain {
    self.config.domain
  }
}

fn check_signature(model: &Model) -> Result<(), InitError> {
  let (inputs, outputs) = (model.inputs(), model.outputs());
  if inputs.len() != 1 || outputs.len() != 1 {
    return Err(InitError::Signature(format!("{} inputs and {} outputs", inputs.len(), outputs.len())))
  }
  for &t in inputs.iter().chain(outputs) {
    let tensor = &model.tensors()[t];
    if tensor.shape.size() != 1 {
      return Err(InitError::Signature(format!("{} has shape {}", tensor.name, tensor.shape)))
    }
  }
  Ok(())
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    model::{ TensorDef, OperatorDef },
    ops::Activation,
  };

  fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 0.05, "{actual} is not close to {expected}");
  }

  #[test]
  fn lifecycle() {
    let mut session = InferenceSession::new();
    assert_eq!(session.state(), SessionState::Uninitialized);
    assert_eq!(session.run_once(1.0), Err(InvokeError::NotReady));
    session.initialize().unwrap();
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.arena_used(), 148);
  }

  #[test]
  fn known_points() {
    let mut session = InferenceSession::new();
    session.initialize().unwrap();
    assert_close(session.run_once(0.0).unwrap(), 0.0);
    assert_close(session.run_once(1.5707963).unwrap(), 1.0);
    assert_close(session.run_once(3.14159265).unwrap(), 0.0);
    assert_close(session.run_once(4.712389).unwrap(), -1.0);
  }

  #[test]
  fn out_of_domain() {
    let mut session = InferenceSession::new();
    session.initialize().unwrap();
    assert!(matches!(session.run_once(-1.0), Err(InvokeError::OutOfDomain { .. })));
    assert!(matches!(session.run_once(7.0), Err(InvokeError::OutOfDomain { .. })));
    assert!(matches!(session.run_once(f32::NAN), Err(InvokeError::OutOfDomain { .. })));
    assert!(session.is_ready());
  }

  #[test]
  fn reinitialize() {
    let mut session = InferenceSession::new();
    session.initialize().unwrap();
    let first = session.run_once(2.0).unwrap();
    let used = session.arena_used();
    session.initialize().unwrap();
    assert_eq!(session.arena_used(), used);
    assert_eq!(session.run_once(2.0).unwrap(), first);
  }

  #[test]
  fn arena_too_small() {
    let mut session = InferenceSession::with_config(SessionConfig { arena_size: 64, ..Default::default() });
    let err = session.initialize().unwrap_err();
    assert!(matches!(err, InitError::ArenaTooSmall(_)));
    assert_eq!(session.state(), SessionState::Failed);
    assert_eq!(session.failure(), Some(&err));
    assert_eq!(session.run_once(1.0), Err(InvokeError::NotReady));
    // Terminal, even though nothing about the inputs changed
    assert_eq!(session.initialize(), Err(err));
    assert_eq!(session.arena_used(), 0);
  }

  #[test]
  fn malformed_model() {
    let blob = [0u8, 1, 2, 3];
    let mut session = InferenceSession::with_model(&blob, AllOpsResolver, SessionConfig::default());
    assert!(matches!(session.initialize(), Err(InitError::MalformedModel(_))));
    assert_eq!(session.state(), SessionState::Failed);
  }

  #[test]
  fn wide_signature() {
    let model = Model::new(
      "wide",
      vec!["RELU".to_string()],
      vec![TensorDef::variable("x", &[2]), TensorDef::variable("y", &[2])],
      vec![OperatorDef { opcode: 0, inputs: vec![0], outputs: vec![1], activation: Activation::None }],
      vec![0],
      vec![1],
    ).unwrap();
    let blob = model.to_bytes().unwrap();
    let mut session = InferenceSession::with_model(&blob, AllOpsResolver, SessionConfig::default());
    assert!(matches!(session.initialize(), Err(InitError::Signature(_))));
  }

  #[test]
  fn engine_failure_keeps_session() {
    let model = Model::new(
      "scaled",
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
    let blob = model.to_bytes().unwrap();
    let mut session = InferenceSession::with_model(&blob, AllOpsResolver, SessionConfig::default());
    session.initialize().unwrap();
    assert_eq!(session.run_once(5.0), Err(InvokeError::NonFinite { tensor: 2 }));
    assert!(session.is_ready());
    assert_eq!(session.run_once(0.0), Ok(0.0));
  }
}
