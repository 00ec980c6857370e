use super::Integer;
use std::collections::BTreeMap;

/// ## Sparse memory
///
/// Every signed integer is a valid address, negative ones included.
/// A cell that was never written reads as `0`. Only written cells are
/// stored, so the address space is effectively unbounded.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Memory {
    cells: BTreeMap<Integer, Integer>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }
    pub fn get(&self, address: Integer) -> Integer {
        self.cells.get(&address).copied().unwrap_or(0)
    }
    pub fn set(&mut self, address: Integer, value: Integer) {
        self.cells.insert(address, value);
    }
    /// Number of cells that have been written.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Written cells in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (Integer, Integer)> + '_ {
        self.cells.iter().map(|(a, v)| (*a, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_reads_zero() {
        let m = Memory::new();
        assert_eq!(m.get(0), 0);
        assert_eq!(m.get(-5), 0);
        assert_eq!(m.get(Integer::MAX), 0);
        assert!(m.is_empty());
    }

    #[test]
    fn test_any_address() {
        let mut m = Memory::new();
        m.set(-1, 7);
        m.set(Integer::MAX, 8);
        m.set(100, 9);
        assert_eq!(m.get(-1), 7);
        assert_eq!(m.get(Integer::MAX), 8);
        assert_eq!(m.len(), 3);
        let cells: Vec<_> = m.iter().collect();
        assert_eq!(cells, vec![(-1, 7), (100, 9), (Integer::MAX, 8)]);
    }
}
