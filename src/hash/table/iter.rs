use std::iter::FusedIterator;
use std::slice;

use crate::contiguous::array;
use crate::hash::table::{Chain, ChainNode};

// The engine's iterators walk the bucket array in slot order and each chain front to back.
// Entries therefore come out grouped by bucket, not in insertion order; the containers re-export
// them behind their own wrapper types.

pub(crate) struct Iter<'a, K, V> {
    pub(crate) buckets: slice::Iter<'a, Chain<K, V>>,
    pub(crate) node: Option<&'a ChainNode<K, V>>,
    pub(crate) remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = node.next.as_deref();
                self.remaining -= 1;
                return Some(&node.entry);
            }
            self.node = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

pub(crate) struct IterMut<'a, K, V> {
    pub(crate) buckets: slice::IterMut<'a, Chain<K, V>>,
    pub(crate) node: Option<&'a mut ChainNode<K, V>>,
    pub(crate) remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = &'a mut (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node.take() {
                // Splitting the node's borrow frees the entry while the walk keeps `next`.
                let ChainNode { entry, next } = node;
                self.node = next.as_deref_mut();
                self.remaining -= 1;
                return Some(entry);
            }
            self.node = self.buckets.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

pub(crate) struct IntoIter<K, V> {
    pub(crate) buckets: array::IntoIter<Chain<K, V>>,
    pub(crate) chain: Chain<K, V>,
    pub(crate) remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut node) = self.chain.take() {
                self.chain = node.next.take();
                self.remaining -= 1;
                return Some(node.entry);
            }
            self.chain = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        // Drain whatever is left so every chain is unlinked a node at a time rather than
        // dropped recursively.
        while self.next().is_some() {}
    }
}
