use std::io::Cursor;
use std::f32::consts::TAU;
use std::time::Duration;

use rand::Rng;

use microinfer::{
  InferenceSession, SessionState, Driver, StreamPort, Poll, Outcome, Rejection,
  InitError, InvokeError, AllOpsResolver, MutableOpResolver, SINE_MODEL_DATA,
  config::{ SessionConfig, DriverConfig },
};


fn console(input: &str) -> (String, InferenceSession<'static>) {
  let mut session = InferenceSession::new();
  let config = DriverConfig { idle_interval: Duration::ZERO, ..Default::default() };
  let mut driver = Driver::new(StreamPort::new(Cursor::new(input.to_string())), vec![], config);
  driver.start(&mut session).unwrap().unwrap();
  driver.run(&mut session).unwrap();
  let (_, out) = driver.into_parts();
  (String::from_utf8(out).unwrap(), session)
}

fn next(driver: &mut Driver<StreamPort, Vec<u8>>, session: &mut InferenceSession) -> Poll {
  loop {
    match driver.poll(session).unwrap() {
      Poll::Idle => std::thread::yield_now(),
      poll => return poll,
    }
  }
}


#[test]
fn banner() {
  let (text, session) = console("");
  assert!(text.starts_with("Loading sine model....\nSine model loaded!\nAllocating tensors to memory pool\n"));
  assert!(text.ends_with("Starting inferences... Input a number!\n"));
  assert!(session.is_ready());
}

#[test]
fn accepted_inputs() {
  let (text, _) = console("0.0\n1.5707963\n3.14159265\n");
  assert!(text.contains("Input: 0.00\nOutput: 0.00\n\n"));
  assert!(text.contains("Input: 1.57\nOutput: 0.98\n\n"));
  assert!(text.contains("Input: 3.14\n"));
  assert_eq!(text.matches("Running inference on inputted data...").count(), 3);
}

#[test]
fn rejected_inputs() {
  let (text, session) = console("-1.0\n7.0\nabc\n");
  assert!(!text.contains("Input:"));
  assert!(!text.contains("Output:"));
  assert_eq!(text.matches("Your number must lie between 0.00 and 6.28").count(), 2);
  assert!(text.contains("Could not read a number from 'abc'"));
  assert!(session.is_ready());
}

#[test]
fn leftover_tokens() {
  let mut session = InferenceSession::new();
  let config = DriverConfig { idle_interval: Duration::ZERO, ..Default::default() };
  let mut driver = Driver::new(StreamPort::new(Cursor::new("x 2.0\n")), vec![], config);
  driver.start(&mut session).unwrap().unwrap();

  let first = next(&mut driver, &mut session);
  assert_eq!(first, Poll::Handled(Outcome::Rejected(Rejection::Unparsable("x".to_string()))));

  let second = next(&mut driver, &mut session);
  assert!(matches!(second, Poll::Handled(Outcome::Inferred { input, .. }) if input == 2.0));
  assert_eq!(next(&mut driver, &mut session), Poll::Closed);
}

#[test]
fn failed_session_refuses() {
  let mut session = InferenceSession::with_config(SessionConfig { arena_size: 64, ..Default::default() });
  let config = DriverConfig { idle_interval: Duration::ZERO, ..Default::default() };
  let mut driver = Driver::new(StreamPort::new(Cursor::new("1.0\n2.0\n")), vec![], config);

  let init = driver.start(&mut session).unwrap();
  assert!(matches!(init, Err(InitError::ArenaTooSmall(_))));
  driver.run(&mut session).unwrap();

  let (_, out) = driver.into_parts();
  let text = String::from_utf8(out).unwrap();
  assert!(text.contains("There was an error allocating the memory"));
  assert!(!text.contains("Starting inferences"));
  assert_eq!(text.matches("session is not ready").count(), 2);
  assert_eq!(session.state(), SessionState::Failed);
}

#[test]
fn malformed_blob() {
  let blob = &SINE_MODEL_DATA[..SINE_MODEL_DATA.len() / 2];
  let mut session = InferenceSession::with_model(blob, AllOpsResolver, SessionConfig::default());
  let mut driver = Driver::new(StreamPort::new(Cursor::new("")), vec![], DriverConfig::default());
  assert!(matches!(driver.start(&mut session).unwrap(), Err(InitError::MalformedModel(_))));
  let (_, out) = driver.into_parts();
  let text = String::from_utf8(out).unwrap();
  assert!(text.contains("There was an error loading the model"));
  assert!(!text.contains("Sine model loaded!"));
}

#[test]
fn minimal_resolver() {
  let mut resolver = MutableOpResolver::<1>::new();
  assert!(resolver.add_builtin("FULLY_CONNECTED"));
  let mut session = InferenceSession::with_model(SINE_MODEL_DATA, resolver, SessionConfig::default());
  session.initialize().unwrap();
  assert!((session.run_once(1.5707963).unwrap() - 1.0).abs() < 0.05);
}

#[test]
fn missing_kernel() {
  let resolver = MutableOpResolver::<1>::new();
  let mut session = InferenceSession::with_model(SINE_MODEL_DATA, resolver, SessionConfig::default());
  let err = session.initialize().unwrap_err();
  assert_eq!(err, InitError::UnsupportedOperator { name: "FULLY_CONNECTED".to_string() });
}

#[test]
fn sampled_domain() {
  let mut rng = rand::thread_rng();
  let mut session = InferenceSession::new();
  session.initialize().unwrap();
  for _ in 0..1000 {
    let x = rng.gen_range(0.0f32, TAU);
    let y = session.run_once(x).unwrap();
    assert!(y.is_finite());
    assert!((y - x.sin()).abs() < 0.1, "f({x}) = {y}");
  }
  assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn bounds_inclusive() {
  let mut session = InferenceSession::new();
  session.initialize().unwrap();
  assert!(session.run_once(0.0).is_ok());
  assert!(session.run_once(TAU).is_ok());
  assert!(matches!(session.run_once(TAU + 0.01), Err(InvokeError::OutOfDomain { .. })));
  assert!(matches!(session.run_once(f32::INFINITY), Err(InvokeError::OutOfDomain { .. })));
}
