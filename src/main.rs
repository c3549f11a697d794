//! Sine approximation over a serial-style console.
//!
//! Reads numbers from stdin, one or more per line, and prints the
//! model's estimate of their sine to stdout. Diagnostics go to stderr.
//!
//! Usage:
//!   echo "1.5708 3.1416" | cargo run

use std::io::{ self, BufReader };
use std::error::Error;

use tracing::{ info, error };
use tracing_subscriber::EnvFilter;

use microinfer::{
  InferenceSession, Driver, StreamPort,
  config::{ BAUD_RATE, DriverConfig },
};


fn main() -> Result<(), Box<dyn Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
    .with_writer(io::stderr)
    .init();

  info!(baud = BAUD_RATE, "serial console open");

  let mut session = InferenceSession::new();
  let mut driver = Driver::new(StreamPort::new(BufReader::new(io::stdin())), io::stdout(), DriverConfig::default());

  if let Err(err) = driver.start(&mut session)? {
    error!(%err, "serving requests without a model");
  }
  driver.run(&mut session)?;
  Ok(())
}
