use std::collections::VecDeque;
use std::io::{ self, BufRead, Write };
use std::sync::mpsc::{ self, Receiver, TryRecvError };
use std::thread;

use tracing::{ info, warn };

use crate::{
  session::InferenceSession,
  ops::OpResolver,
  config::DriverConfig,
  error::{ InitError, InvokeError },
};


/// Byte-oriented input channel the driver pulls numbers from.

pub trait SerialPort {
  /// Bytes waiting to be parsed. Zero when nothing has arrived yet.
  /// Never waits for more input to arrive.
  fn available(&mut self) -> io::Result<usize>;

  /// Next whitespace-delimited token, if any has arrived.
  fn read_token(&mut self) -> io::Result<Option<String>>;

  /// True once the remote end has gone away for good.
  fn is_closed(&self) -> bool;
}


/// [SerialPort] over any buffered reader.
///
/// A background thread reads whole lines and hands them over through a
/// channel, so [available](SerialPort::available) returns right away even
/// while the reader blocks. Tokens left over on a line stay buffered and
/// get served on subsequent reads, like bytes in a UART receive buffer.

#[derive(Debug)]
pub struct StreamPort {
  lines: Receiver<io::Result<String>>,
  pending: VecDeque<String>,
  closed: bool,
}

impl StreamPort {
  pub fn new<R: BufRead + Send + 'static>(reader: R) -> Self {
    let (sender, lines) = mpsc::channel();
    thread::spawn(move || {
      for line in reader.lines() {
        let failed = line.is_err();
        if sender.send(line).is_err() || failed { break }
      }
    });
    Self { lines, pending: VecDeque::new(), closed: false }
  }

  fn buffered(&self) -> usize {
    self.pending.iter().map(|token| token.len() ).sum()
  }
}

impl SerialPort for StreamPort {
  fn available(&mut self) -> io::Result<usize> {
    while !self.closed {
      match self.lines.try_recv() {
        Ok(line) => self.pending.extend(line?.split_whitespace().map(str::to_string)),
        Err(TryRecvError::Empty) => break,
        Err(TryRecvError::Disconnected) => self.closed = true,
      }
    }
    Ok(self.buffered())
  }

  fn read_token(&mut self) -> io::Result<Option<String>> {
    if self.pending.is_empty() {
      self.available()?;
    }
    Ok(self.pending.pop_front())
  }

  fn is_closed(&self) -> bool {
    self.closed && self.pending.is_empty()
  }
}


/// Why a token did not lead to an inference.

#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
  Unparsable(String),
  OutOfDomain(f32),
}

/// What became of one token.

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
  Rejected(Rejection),
  Failed(InvokeError),
  Inferred {
    input: f32,
    output: f32,
  },
}

/// Result of a single pass of the input loop.

#[derive(Debug, Clone, PartialEq)]
pub enum Poll {
  Idle,
  Closed,
  Handled(Outcome),
}


/// Read-validate-infer-print loop between a [SerialPort] and a text sink.

#[derive(Debug)]
pub struct Driver<P: SerialPort, W: Write> {
  port: P,
  out: W,
  config: DriverConfig,
}

impl<P: SerialPort, W: Write> Driver<P, W> {
  pub fn new(port: P, out: W, config: DriverConfig) -> Self {
    Self { port, out, config }
  }

  /// Initialize `session` and report on the outcome.
  ///
  /// A failed initialization gets reported but is not an I/O error.
  /// The session will refuse all later requests.

  pub fn start<R: OpResolver + Clone>(&mut self, session: &mut InferenceSession<R>) -> io::Result<Result<(), InitError>> {
    writeln!(self.out, "Loading sine model....")?;
    let result = session.initialize();
    if let Err(err @ InitError::MalformedModel(_)) = &result {
      writeln!(self.out, "There was an error loading the model: {err}")?;
    } else {
      writeln!(self.out, "Sine model loaded!")?;
      writeln!(self.out, "Allocating tensors to memory pool")?;
      match &result {
        Ok(()) => {
          writeln!(self.out, "Tensors allocated ({} bytes of arena in use)", session.arena_used())?;
          writeln!(self.out, "Starting inferences... Input a number!")?;
        },
        Err(err) => writeln!(self.out, "There was an error allocating the memory: {err}")?,
      }
    }
    self.out.flush()?;
    Ok(result)
  }

  /// One pass of the input loop. Handles at most one token.

  pub fn poll<R: OpResolver + Clone>(&mut self, session: &mut InferenceSession<R>) -> io::Result<Poll> {
    if self.port.available()? == 0 {
      return Ok(if self.port.is_closed() { Poll::Closed } else { Poll::Idle })
    }
    let Some(token) = self.port.read_token()? else {
      return Ok(Poll::Idle)
    };
    let outcome = self.handle(session, &token)?;
    self.out.flush()?;
    Ok(Poll::Handled(outcome))
  }

  fn handle<R: OpResolver + Clone>(&mut self, session: &mut InferenceSession<R>, token: &str) -> io::Result<Outcome> {
    let precision = self.config.precision;

    let Ok(value) = token.parse::<f32>() else {
      warn!(token, "unparsable input");
      writeln!(self.out, "Could not read a number from '{token}'")?;
      return Ok(Outcome::Rejected(Rejection::Unparsable(token.to_string())))
    };

    let domain = session.domain();
    if !domain.contains(value) {
      warn!(value, "input outside of domain");
      writeln!(self.out, "Your number must lie between {:.*} and {:.*}", precision, domain.min, precision, domain.max)?;
      return Ok(Outcome::Rejected(Rejection::OutOfDomain(value)))
    }

    writeln!(self.out, "Running inference on inputted data...")?;
    match session.run_once(value) {
      Ok(output) => {
        writeln!(self.out, "Input: {:.*}", precision, value)?;
        writeln!(self.out, "Output: {:.*}", precision, output)?;
        writeln!(self.out)?;
        Ok(Outcome::Inferred { input: value, output })
      },
      Err(err) => {
        writeln!(self.out, "There was an error invoking the interpreter: {err}")?;
        Ok(Outcome::Failed(err))
      },
    }
  }

  /// Poll forever, yielding between empty polls. Returns once the port closes.

  pub fn run<R: OpResolver + Clone>(&mut self, session: &mut InferenceSession<R>) -> io::Result<()> {
    loop {
      match self.poll(session)? {
        Poll::Idle => thread::sleep(self.config.idle_interval),
        Poll::Closed => {
          info!("input closed");
          return Ok(())
        },
        Poll::Handled(_) => (),
      }
    }
  }

  pub fn out(&self) -> &W {
    &self.out
  }

  pub fn into_parts(self) -> (P, W) {
    (self.port, self.out)
  }
}
