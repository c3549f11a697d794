//! Inference for tiny neural networks on devices without an allocator to spare.
//! Tiny. Few dependencies. CPU only.
//!
//! # Features
//!
//! - **Static memory plan** — All intermediate tensors live in a single
//! fixed-size [Arena], carved up once before the first inference.
//! Running out of arena is reported at startup, never mid-inference.
//!
//! - **Portable model blobs** — Models are a compact binary encoding of
//! tensors and operators, embeddable as a plain byte array.
//! See [SINE_MODEL_DATA].
//!
//! - **Pluggable kernels** — Operators are looked up by name through an
//! [OpResolver], so a build may register only the kernels a model needs.
//!
//! - **Serial-style driver** — A read-validate-infer-print loop over any
//! byte channel implementing [SerialPort].
//!
//! # Examples
//!
//! Approximating sine with the embedded model:
//! ```
//! use microinfer::InferenceSession;
//!
//! let mut session = InferenceSession::new();
//! session.initialize().unwrap();
//!
//! let y = session.run_once(std::f32::consts::FRAC_PI_2).unwrap();
//! assert!((y - 1.0).abs() < 0.05);
//! ```
//!
//! Driving a session from a text stream:
//! ```
//! use std::io::Cursor;
//! use microinfer::{ InferenceSession, Driver, StreamPort, config::DriverConfig };
//!
//! let mut session = InferenceSession::new();
//! let mut driver = Driver::new(StreamPort::new(Cursor::new("3.14\n")), vec![], DriverConfig::default());
//! driver.start(&mut session).unwrap().unwrap();
//! driver.run(&mut session).unwrap();
//!
//! let (_, out) = driver.into_parts();
//! assert!(String::from_utf8(out).unwrap().contains("Input: 3.14"));
//! ```
//!
//! # Optional features
//!
//! Some features can be toggled in your `Cargo.toml`.
//!
//! - `unsafe` *(default)* — Accelerated matrix math using [matrixmultiply] crate.

mod internal;
mod shape;
mod arena;
mod error;
mod model;
mod model_data;
mod resolver;
mod interpreter;
mod session;
mod driver;

pub mod ops;
pub mod scalar;
pub mod kernels;
pub mod config;

pub use shape::Shape;
pub use arena::{ Arena, Region, ALIGNMENT };
pub use error::{ ArenaError, KernelError, InitError, InvokeError };
pub use model::{ Model, TensorDef, OperatorDef, ModelError };
pub use model_data::SINE_MODEL_DATA;
pub use ops::{ Kernel, OpResolver, Activation };
pub use resolver::{ AllOpsResolver, MutableOpResolver };
pub use interpreter::Interpreter;
pub use session::{ InferenceSession, SessionState };
pub use driver::{ Driver, SerialPort, StreamPort, Poll, Outcome, Rejection };
