#[inline]
pub fn negative_index(i: isize, n: usize, start_behind: bool) -> usize {
  if i < 0 {
    let offset = if start_behind { 1 } else { 0 };
    (n as isize + i + offset) as usize
  } else {
    i as usize
  }
}

/// Round `n` up to the next multiple of `align`, which must be a power of two.

#[inline]
pub fn align_up(n: usize, align: usize) -> usize {
  debug_assert!(align.is_power_of_two());
  (n + align - 1) & !(align - 1)
}
