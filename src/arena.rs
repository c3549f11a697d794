use crate::{
  internal::*,
  error::ArenaError,
};


/// Byte alignment of every region handed out by an [Arena].

pub const ALIGNMENT: usize = 16;

const WORD: usize = std::mem::size_of::<f32>();


/// Location of a tensor buffer inside an [Arena], in bytes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
  pub offset: usize,
  pub len: usize,
}

impl Region {
  fn words(&self) -> (usize, usize) {
    (self.offset / WORD, (self.offset + self.len) / WORD)
  }

  pub fn end(&self) -> usize {
    self.offset + self.len
  }
}


/// Fixed-capacity memory pool from which all tensor buffers get carved.
///
/// Allocation is a plain bump of an offset. Memory is only ever returned
/// all at once through [reset](Arena::reset), so capacity is a hard upper
/// bound on what a model may use.

#[derive(Debug)]
pub struct Arena {
  capacity: usize,
  used: usize,
  storage: Box<[f32]>,
}

impl Arena {
  pub fn new(capacity: usize) -> Self {
    Self {
      capacity,
      used: 0,
      storage: vec![0.0; capacity / WORD].into_boxed_slice(),
    }
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn used(&self) -> usize {
    self.used
  }

  pub fn remaining(&self) -> usize {
    self.capacity - self.used
  }

  /// Carve out `bytes` bytes at the next aligned offset.

  pub fn allocate(&mut self, bytes: usize) -> Result<Region, ArenaError> {
    let offset = align_up(self.used, ALIGNMENT);
    let len = align_up(bytes, WORD);
    let end = offset.checked_add(len).unwrap_or(usize::MAX);
    if end > self.capacity {
      return Err(ArenaError::Exhausted {
        requested: bytes,
        available: self.remaining(),
        capacity: self.capacity,
      })
    }
    self.used = end;
    let region = Region { offset, len };
    self.slice_mut(region).fill(0.0);
    Ok(region)
  }

  /// Release all regions at once. Previously returned regions must not be used anymore.

  pub fn reset(&mut self) {
    self.used = 0;
  }

  pub fn slice(&self, region: Region) -> &[f32] {
    let (start, end) = region.words();
    &self.storage[start..end]
  }

  pub fn slice_mut(&mut self, region: Region) -> &mut [f32] {
    let (start, end) = region.words();
    &mut self.storage[start..end]
  }

  /// Split storage into a writable target region and
  /// read-only access to everything around it.

  pub fn partition(&mut self, target: Region) -> (Sources<'_>, &mut [f32]) {
    let (start, end) = target.words();
    let (head, rest) = self.storage.split_at_mut(start);
    let (target, tail) = rest.split_at_mut(end - start);
    (Sources { head, tail, start, end }, target)
  }
}


/// Read-only view of an [Arena] with one region cut out.

#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
  head: &'a [f32],
  tail: &'a [f32],
  start: usize,
  end: usize,
}

impl<'a> Sources<'a> {
  /// Returns [None] for regions overlapping the cut-out target.

  pub fn get(&self, region: Region) -> Option<&'a [f32]> {
    let (start, end) = region.words();
    if end <= self.start {
      self.head.get(start..end)
    } else if start >= self.end {
      self.tail.get(start - self.end..end - self.end)
    } else {
      None
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bump() {
    let mut arena = Arena::new(128);
    let a = arena.allocate(4).unwrap();
    let b = arena.allocate(64).unwrap();
    assert_eq!(a, Region { offset: 0, len: 4 });
    assert_eq!(b, Region { offset: 16, len: 64 });
    assert_eq!(arena.used(), 80);
    assert_eq!(arena.remaining(), 48);
  }

  #[test]
  fn exhausted() {
    let mut arena = Arena::new(64);
    arena.allocate(40).unwrap();
    let err = arena.allocate(20).unwrap_err();
    assert_eq!(err, ArenaError::Exhausted { requested: 20, available: 24, capacity: 64 });
    // Failed requests leave the arena untouched
    assert_eq!(arena.used(), 40);
  }

  #[test]
  fn reset() {
    let mut arena = Arena::new(32);
    let a = arena.allocate(32).unwrap();
    arena.slice_mut(a).fill(3.0);
    arena.reset();
    assert_eq!(arena.used(), 0);
    let b = arena.allocate(8).unwrap();
    assert_eq!(arena.slice(b), &[0.0, 0.0]);
  }

  #[test]
  fn partition() {
    let mut arena = Arena::new(64);
    let a = arena.allocate(4).unwrap();
    let b = arena.allocate(4).unwrap();
    let c = arena.allocate(4).unwrap();
    arena.slice_mut(a)[0] = 1.0;
    arena.slice_mut(c)[0] = 3.0;
    let (sources, target) = arena.partition(b);
    target[0] = sources.get(a).unwrap()[0] + sources.get(c).unwrap()[0];
    assert_eq!(sources.get(b), None);
    assert_eq!(arena.slice(b), &[4.0]);
  }
}
