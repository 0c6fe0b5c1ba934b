use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::contiguous::Vector;
use crate::util::option::OptionExtension;

/// An owned slot that either holds a subtree or is empty. The tree's root field and every child
/// link share this type, so structural surgery never needs to special-case the root.
#[derive(Clone)]
pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub data: T,
    pub left: Branch<T>,
    pub right: Branch<T>,
}

impl<T> Node<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> Branch<T> {
    /// Adds `data` below this slot, keeping the search order invariant. Equal items route right,
    /// landing after the copies already held when read in sorted order.
    pub fn add(&mut self, data: T)
    where
        T: Ord,
    {
        match &mut self.0 {
            Some(node) => match data.cmp(&node.data) {
                Ordering::Less => node.left.add(data),
                Ordering::Equal | Ordering::Greater => node.right.add(data),
            },
            None => {
                self.0 = Some(Box::new(Node {
                    data,
                    left: None.into(),
                    right: None.into(),
                }));
            },
        }
    }

    /// Returns a reference to the data `compare` reports as equal, if any occupied slot below
    /// this one holds it. `compare` receives candidate data and returns the probe's ordering
    /// relative to the candidate, so [`Ordering::Less`] descends left.
    pub fn find_by<F>(&self, compare: &F) -> Option<&T>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut current = self;
        while let Some(node) = &current.0 {
            match compare(&node.data) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Some(&node.data),
            }
        }
        None
    }

    pub fn find_by_mut<F>(&mut self, compare: &F) -> Option<&mut T>
    where
        F: Fn(&T) -> Ordering,
    {
        let mut current = self;
        while let Some(node) = &mut current.0 {
            match compare(&node.data) {
                Ordering::Less => current = &mut node.left,
                Ordering::Greater => current = &mut node.right,
                Ordering::Equal => return Some(&mut node.data),
            }
        }
        None
    }

    /// Removes the data `compare` reports as equal from below this slot, healing the structure
    /// around it. Returns [`None`] without touching anything when no data matches.
    pub fn remove_by<F>(&mut self, compare: &F) -> Option<T>
    where
        F: Fn(&T) -> Ordering,
    {
        match &mut self.0 {
            Some(node) => match compare(&node.data) {
                Ordering::Less => node.left.remove_by(compare),
                Ordering::Greater => node.right.remove_by(compare),
                Ordering::Equal => Some(self.splice()),
            },
            None => None,
        }
    }

    /// Detaches this slot's node and fills the hole: a lone child moves straight up, while a
    /// node with both children trades data with its in-order predecessor instead of moving.
    fn splice(&mut self) -> T {
        // SAFETY: Only called for a slot the caller has already matched as occupied.
        let mut node = unsafe { mem::take(&mut self.0).unreachable() };
        if node.left.is_none() {
            self.0 = mem::take(&mut node.right.0);
            node.into_data()
        } else if node.right.is_none() {
            self.0 = mem::take(&mut node.left.0);
            node.into_data()
        } else {
            // SAFETY: The left branch was just checked to be occupied, so it has a rightmost
            // node.
            let mut rightmost = unsafe { node.left.take_rightmost().unreachable() };
            mem::swap(&mut node.data, &mut rightmost.data);
            self.0 = Some(node);
            rightmost.into_data()
        }
    }

    /// Detaches the leftmost node below this slot, reattaching its right child (if any) in its
    /// place. The returned node has no children.
    pub fn take_leftmost(&mut self) -> Option<Box<Node<T>>> {
        match &mut self.0 {
            Some(node) => match node.left.take_leftmost() {
                Some(leftmost) => Some(leftmost),
                None => {
                    // SAFETY: This slot was matched as occupied just above.
                    let mut node = unsafe { mem::take(&mut self.0).unreachable() };
                    self.0 = mem::take(&mut node.right.0);
                    Some(node)
                },
            },
            None => None,
        }
    }

    /// Detaches the rightmost node below this slot, reattaching its left child (if any) in its
    /// place. The returned node has no children.
    pub fn take_rightmost(&mut self) -> Option<Box<Node<T>>> {
        match &mut self.0 {
            Some(node) => match node.right.take_rightmost() {
                Some(rightmost) => Some(rightmost),
                None => {
                    // SAFETY: This slot was matched as occupied just above.
                    let mut node = unsafe { mem::take(&mut self.0).unreachable() };
                    self.0 = mem::take(&mut node.left.0);
                    Some(node)
                },
            },
            None => None,
        }
    }

    /// Returns the height in edges of the subtree below this slot: [`None`] when the slot is
    /// empty and `Some(0)` for a single node.
    pub fn height(&self) -> Option<usize> {
        self.0.as_ref().map(|node| {
            // An empty child sorts below any occupied height, and a leaf sits at zero.
            cmp::max(node.left.height(), node.right.height()).map_or(0, |tallest| tallest + 1)
        })
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Option<Box<Node<T>>>> for Branch<T> {
    fn from(value: Option<Box<Node<T>>>) -> Self {
        Branch(value)
    }
}

impl<T: Debug> Debug for Branch<T> {
    /// Renders the subtree on its side: the left branch above its node and the right branch
    /// below, each line indented once per depth, with `-` marking empty slots.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|line| String::from("┌    ") + line)
                    .collect::<Vector<_>>()
                    .join("\n"),
                node.data,
                format!("{:?}", node.right)
                    .lines()
                    .map(|line| String::from("└    ") + line)
                    .collect::<Vector<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
