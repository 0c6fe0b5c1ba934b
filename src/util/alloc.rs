use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Test helper for exercising allocation paths with zero-size elements.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// Test helper that increments a shared counter when dropped, for asserting that containers drop
/// exactly the elements they should.
#[derive(Debug, Clone, PartialEq)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
