/// Tapes are never shorter than this many cells.
pub const MIN_TAPE_LEN: usize = 32768;

/// ## Tape memory
///
/// A ring of byte cells with a pointer. Moving off either end of the
/// tape comes back in at the other end, and cell arithmetic wraps at
/// 8 bits. Neither is an error.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    pointer: usize,
}

impl Default for Tape {
    fn default() -> Tape {
        Tape::new(MIN_TAPE_LEN)
    }
}

impl Tape {
    pub fn new(capacity: usize) -> Tape {
        Tape {
            cells: vec![0; capacity.max(MIN_TAPE_LEN)],
            pointer: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn get(&self) -> u8 {
        self.cells[self.pointer]
    }

    pub fn set(&mut self, val: u8) {
        self.cells[self.pointer] = val;
    }

    pub fn add(&mut self, delta: i8) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_add(delta as u8);
    }

    pub fn shift(&mut self, delta: i8) {
        self.pointer = wrap(self.pointer, delta as isize, self.cells.len());
    }

    /// Move by `delta` until the current cell is zero, giving up after
    /// `limit` moves. Returns true when a zero cell was reached.
    pub fn seek(&mut self, delta: i8, limit: usize) -> bool {
        let mut moves = 0;
        while self.get() != 0 {
            if moves == limit {
                return false;
            }
            self.shift(delta);
            moves += 1;
        }
        true
    }
}

// One floor modulo for both directions so that 0 - 1 lands on len - 1.
fn wrap(pointer: usize, delta: isize, len: usize) -> usize {
    (pointer as isize + delta).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_length() {
        assert_eq!(Tape::new(0).len(), MIN_TAPE_LEN);
        assert_eq!(Tape::new(100).len(), MIN_TAPE_LEN);
        assert_eq!(Tape::new(40000).len(), 40000);
        assert_eq!(Tape::default().len(), MIN_TAPE_LEN);
        assert!(Tape::new(0).cells().iter().all(|c| *c == 0));
    }

    #[test]
    fn test_wrap_left_from_zero() {
        let mut t = Tape::new(0);
        t.shift(-1);
        assert_eq!(t.pointer(), MIN_TAPE_LEN - 1);
        t.shift(1);
        assert_eq!(t.pointer(), 0);
    }

    #[test]
    fn test_wrap_large_steps() {
        let mut t = Tape::new(0);
        t.shift(-128);
        assert_eq!(t.pointer(), MIN_TAPE_LEN - 128);
        t.shift(127);
        t.shift(1);
        assert_eq!(t.pointer(), 0);
    }

    #[test]
    fn test_wrap_helper() {
        assert_eq!(wrap(0, -1, 10), 9);
        assert_eq!(wrap(9, 1, 10), 0);
        assert_eq!(wrap(3, -13, 10), 0);
        assert_eq!(wrap(5, 0, 10), 5);
    }

    #[test]
    fn test_value_wrap() {
        let mut t = Tape::new(0);
        t.add(-1);
        assert_eq!(t.get(), 255);
        t.add(1);
        assert_eq!(t.get(), 0);
        t.set(7);
        for _ in 0..256 {
            t.add(1);
        }
        assert_eq!(t.get(), 7);
        t.add(-128);
        t.add(-128);
        assert_eq!(t.get(), 7);
    }

    #[test]
    fn test_seek() {
        let mut t = Tape::new(0);
        for _ in 0..3 {
            t.set(1);
            t.shift(1);
        }
        t.shift(-3);
        assert!(t.seek(1, 10));
        assert_eq!(t.pointer(), 3);
        t.shift(-1);
        assert!(!t.seek(-1, 1));
        assert_eq!(t.pointer(), 1);
    }
}
