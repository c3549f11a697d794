//! Build-time settings. Nothing here is read from the environment.

use std::time::Duration;


/// Bytes available for tensor storage.

pub const ARENA_SIZE: usize = 2 * 1024;

/// Symbol rate of the serial line the device talks on.

pub const BAUD_RATE: u32 = 115_200;

/// Decimals printed for floats, matching `Serial.println(float)`.

pub const PRINT_PRECISION: usize = 2;

/// Pause between polls while no input is waiting.

pub const IDLE_INTERVAL: Duration = Duration::from_millis(10);


/// Closed interval of inputs the model was trained on.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
  pub min: f32,
  pub max: f32,
}

impl Domain {
  pub const SINE: Self = Self { min: 0.0, max: std::f32::consts::TAU };

  /// NaN and infinities are never contained.

  pub fn contains(&self, x: f32) -> bool {
    x.is_finite() && x >= self.min && x <= self.max
  }
}

impl Default for Domain {
  fn default() -> Self {
    Self::SINE
  }
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
  pub arena_size: usize,
  pub domain: Domain,
}

impl Default for SessionConfig {
  fn default() -> Self {
    Self { arena_size: ARENA_SIZE, domain: Domain::SINE }
  }
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverConfig {
  pub precision: usize,
  pub idle_interval: Duration,
}

impl Default for DriverConfig {
  fn default() -> Self {
    Self { precision: PRINT_PRECISION, idle_interval: IDLE_INTERVAL }
  }
}
