//! Ordered passenger container
//!
//! A FIFO-biased sequence with value and predicate based extraction. The
//! controller uses one for the car and one per floor for waiting and
//! delivered passengers.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into(),
        }
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Append one element at the tail
    pub fn enqueue(&mut self, value: T) -> &mut Self {
        self.elements.push_back(value);
        self
    }

    /// Append many elements at the tail, keeping their order
    pub fn enqueue_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> &mut Self {
        self.elements.extend(values);
        self
    }

    /// Remove the head element
    pub fn dequeue(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// Remove the first element, scanning from the head, that satisfies `predicate`
    pub fn dequeue_matching<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self.elements.iter().position(predicate)?;
        self.elements.remove(index)
    }

    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().any(predicate)
    }

    /// True for an empty queue as well
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().all(predicate)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, counted from the head
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Remove the first element equal to `value`
    pub fn dequeue_value(&mut self, value: &T) -> Option<T> {
        self.dequeue_matching(|element| element == value)
    }

    /// Remove every element equal to `value` and return them in queue order
    pub fn remove_all_equal(&mut self, value: &T) -> Vec<T> {
        let mut removed = Vec::new();
        let mut kept = VecDeque::with_capacity(self.elements.len());
        for element in self.elements.drain(..) {
            if element == *value {
                removed.push(element);
            } else {
                kept.push_back(element);
            }
        }
        self.elements = kept;
        removed
    }

    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }
}

impl<T: Clone> Queue<T> {
    /// Owned copy of the contents, head first
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.iter().cloned().collect()
    }
}
