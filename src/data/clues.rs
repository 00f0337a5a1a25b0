//! Clue index
//!
//! Collected clues live in a binary search tree, which keeps them unique
//! and hands them back in alphabetical order.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            left: None,
            right: None,
        }
    }
}

fn insert_at(slot: &mut Option<Box<ClueNode>>, text: &str) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(ClueNode::new(text)));
            true
        }
        Some(node) => match text.cmp(node.text.as_str()) {
            Ordering::Less => insert_at(&mut node.left, text),
            Ordering::Greater => insert_at(&mut node.right, text),
            Ordering::Equal => false,
        },
    }
}

/// Alphabetical, duplicate-free set of clues
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a clue. Returns false if it was already filed.
    pub fn insert(&mut self, text: &str) -> bool {
        let added = insert_at(&mut self.root, text);
        if added {
            self.len += 1;
        }
        added
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clues in alphabetical order. Each call starts a fresh walk.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order walk over a [`ClueIndex`]
pub struct Iter<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.text.as_str())
    }
}
