#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A value which counts how many times it (or any of its clones) has been dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
