use itertools::Itertools;
use serde::{ Serialize, Deserialize };
use thiserror::Error;

use crate::{
  shape::Shape,
  ops::Activation,
};


/// File identifier at the start of every model blob.

pub const IDENTIFIER: [u8; 4] = *b"MINF";

/// Format version this crate reads and writes.

pub const VERSION: u32 = 1;


/// Reasons a model blob gets rejected.

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
  #[error("could not decode model: {0}")]
  Decode(String),

  #[error("could not encode model: {0}")]
  Encode(String),

  #[error("unknown file identifier {0:?}")]
  Identifier([u8; 4]),

  #[error("unsupported format version {found}, expected {expected}")]
  Version {
    found: u32,
    expected: u32,
  },

  #[error("{context} references tensor {index}, but the model has {count}")]
  TensorIndex {
    context: String,
    index: usize,
    count: usize,
  },

  #[error("operator {operator} references opcode {index}, but the model has {count}")]
  OpcodeIndex {
    operator: usize,
    index: usize,
    count: usize,
  },

  #[error("constant {name} holds {actual} values, but {shape} needs {expected}")]
  ConstantSize {
    name: String,
    shape: String,
    expected: usize,
    actual: usize,
  },

  #[error("tensor {name} with {shape} is too large to address")]
  TensorSize {
    name: String,
    shape: String,
  },

  #[error("signature tensor {name} must not be constant")]
  ConstantSignature {
    name: String,
  },
}


/// Tensor declared by a [Model].
///
/// Constant tensors carry their values with them. All others get
/// their storage from the interpreter's arena.

#[derive(Debug, Clone, PartialEq)]
pub struct TensorDef {
  pub name: String,
  pub shape: Shape,
  pub data: Option<Vec<f32>>,
}

impl TensorDef {
  pub fn constant(name: &str, dims: &[usize], data: Vec<f32>) -> Self {
    Self { name: name.to_string(), shape: Shape::new(dims), data: Some(data) }
  }

  pub fn variable(name: &str, dims: &[usize]) -> Self {
    Self { name: name.to_string(), shape: Shape::new(dims), data: None }
  }

  pub fn is_constant(&self) -> bool {
    self.data.is_some()
  }
}


/// One node of a [Model]'s graph.

#[derive(Debug, Clone, PartialEq)]
pub struct OperatorDef {
  pub opcode: usize,
  pub inputs: Vec<usize>,
  pub outputs: Vec<usize>,
  pub activation: Activation,
}


/// Parsed and validated network graph.
///
/// Operators are stored in execution order. Once constructed, a model
/// is immutable and all of its indices are known to be in range.

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
  description: String,
  operator_codes: Vec<String>,
  tensors: Vec<TensorDef>,
  operators: Vec<OperatorDef>,
  inputs: Vec<usize>,
  outputs: Vec<usize>,
}

impl Model {
  pub fn new(
    description: &str,
    operator_codes: Vec<String>,
    tensors: Vec<TensorDef>,
    operators: Vec<OperatorDef>,
    inputs: Vec<usize>,
    outputs: Vec<usize>,
  ) -> Result<Self, ModelError> {
    let model = Self {
      description: description.to_string(),
      operator_codes,
      tensors,
      operators,
      inputs,
      outputs,
    };
    model.validate()?;
    Ok(model)
  }

  fn validate(&self) -> Result<(), ModelError> {
    let count = self.tensors.len();
    let check = |context: String, index: usize| if index < count { Ok(()) } else {
      Err(ModelError::TensorIndex { context, index, count })
    };

    for tensor in &self.tensors {
      let Some(size) = tensor.shape.checked_size() else {
        return Err(ModelError::TensorSize { name: tensor.name.clone(), shape: tensor.shape.to_string() })
      };
      let Some(data) = &tensor.data else { continue };
      if data.len() != size {
        return Err(ModelError::ConstantSize {
          name: tensor.name.clone(),
          shape: tensor.shape.to_string(),
          expected: size,
          actual: data.len(),
        })
      }
    }

    for (i, op) in self.operators.iter().enumerate() {
      if op.opcode >= self.operator_codes.len() {
        return Err(ModelError::OpcodeIndex { operator: i, index: op.opcode, count: self.operator_codes.len() })
      }
      for &t in op.inputs.iter().chain(&op.outputs) {
        check(format!("operator {i}"), t)?;
      }
    }

    for &t in self.inputs.iter().chain(&self.outputs) {
      check("signature".to_string(), t)?;
      if self.tensors[t].is_constant() {
        return Err(ModelError::ConstantSignature { name: self.tensors[t].name.clone() })
      }
    }

    Ok(())
  }

  /// Decode and validate a postcard-encoded model blob.

  pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
    let (dump, rest): (ModelDump, _) = postcard::take_from_bytes(bytes)
      .map_err(|err| ModelError::Decode(err.to_string()) )?;
    if !rest.is_empty() {
      return Err(ModelError::Decode(format!("{} trailing bytes", rest.len())))
    }
    if dump.identifier != IDENTIFIER {
      return Err(ModelError::Identifier(dump.identifier))
    }
    if dump.version != VERSION {
      return Err(ModelError::Version { found: dump.version, expected: VERSION })
    }

    let tensors = dump.tensors.into_iter().map(|tensor| {
      let dims: Vec<usize> = tensor.dims.iter().map(|&n| n as usize ).collect();
      TensorDef { name: tensor.name, shape: Shape::new(&dims), data: tensor.data }
    }).collect();

    let operators = dump.operators.into_iter().map(|op| OperatorDef {
      opcode: op.opcode as usize,
      inputs: indices(&op.inputs),
      outputs: indices(&op.outputs),
      activation: op.activation,
    }).collect();

    Self::new(
      &dump.description,
      dump.operator_codes,
      tensors,
      operators,
      indices(&dump.inputs),
      indices(&dump.outputs),
    )
  }

  pub fn to_bytes(&self) -> Result<Vec<u8>, ModelError> {
    let dump = ModelDump {
      identifier: IDENTIFIER,
      version: VERSION,
      description: self.description.clone(),
      operator_codes: self.operator_codes.clone(),
      tensors: self.tensors.iter().map(|tensor| TensorDump {
        name: tensor.name.clone(),
        dims: tensor.shape.dims.iter().map(|&n| n as u32 ).collect(),
        data: tensor.data.clone(),
      }).collect(),
      operators: self.operators.iter().map(|op| OperatorDump {
        opcode: op.opcode as u32,
        inputs: op.inputs.iter().map(|&t| t as u32 ).collect(),
        outputs: op.outputs.iter().map(|&t| t as u32 ).collect(),
        activation: op.activation,
      }).collect(),
      inputs: self.inputs.iter().map(|&t| t as u32 ).collect(),
      outputs: self.outputs.iter().map(|&t| t as u32 ).collect(),
    };
    postcard::to_allocvec(&dump).map_err(|err| ModelError::Encode(err.to_string()) )
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  pub fn version(&self) -> u32 {
    VERSION
  }

  pub fn tensors(&self) -> &[TensorDef] {
    &self.tensors
  }

  pub fn operators(&self) -> &[OperatorDef] {
    &self.operators
  }

  pub fn inputs(&self) -> &[usize] {
    &self.inputs
  }

  pub fn outputs(&self) -> &[usize] {
    &self.outputs
  }

  pub fn opcode_name(&self, op: &OperatorDef) -> &str {
    &self.operator_codes[op.opcode]
  }

  pub fn constant_data(&self, tensor: usize) -> Option<&[f32]> {
    self.tensors.get(tensor)?.data.as_deref()
  }

  /// Comma separated operator names in execution order.

  pub fn summary(&self) -> String {
    self.operators.iter()
      .map(|op| self.opcode_name(op) )
      .join(", ")
  }
}

fn indices(raw: &[u32]) -> Vec<usize> {
  raw.iter().map(|&i| i as usize ).collect()
}


#[derive(Serialize, Deserialize)]
struct TensorDump {
  name: String,
  dims: Vec<u32>,
  data: Option<Vec<f32>>,
}

#[derive(Serialize, Deserialize)]
struct OperatorDump {
  opcode: u32,
  inputs: Vec<u32>,
  outputs: Vec<u32>,
  activation: Activation,
}

#[derive(Serialize, Deserialize)]
struct ModelDump {
  identifier: [u8; 4],
  version: u32,
  description: String,
  operator_codes: Vec<String>,
  tensors: Vec<TensorDump>,
  operators: Vec<OperatorDump>,
  inputs: Vec<u32>,
  outputs: Vec<u32>,
}
