//! Unbalanced binary search tree backing the product index.
//!
//! # Design Decisions
//! - Navigation: strictly smaller ids go left, everything else goes right
//! - No rebalancing: the shape depends only on insertion order, so ascending
//!   ids degrade the tree into a list with O(n) insert/find
//! - Traversal and teardown are iterative; a degenerate tree may be far deeper
//!   than the thread stack allows for recursion

use std::fmt;

use crate::catalog::index::{DuplicateProduct, ProductIndex};
use crate::catalog::product::{Product, ProductId};

struct Node {
    product: Product,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(product: Product) -> Self {
        Self {
            product,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree keyed by product id, never rebalanced.
#[derive(Default)]
pub struct UnbalancedTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl UnbalancedTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// In-order iterator (ascending id).
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Length of the longest root-to-leaf path. Zero for an empty tree.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 1));
        }

        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Some(left) = node.left.as_deref() {
                pending.push((left, level + 1));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, level + 1));
            }
        }

        deepest
    }
}

impl ProductIndex for UnbalancedTree {
    fn insert(&mut self, product: Product) -> Result<(), DuplicateProduct> {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            if product.id < node.product.id {
                slot = &mut node.left;
            } else if product.id == node.product.id {
                return Err(DuplicateProduct(product));
            } else {
                slot = &mut node.right;
            }
        }

        *slot = Some(Box::new(Node::leaf(product)));
        self.len += 1;
        Ok(())
    }

    fn find(&self, id: ProductId) -> Option<&Product> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if id < node.product.id {
                current = node.left.as_deref();
            } else if id == node.product.id {
                return Some(&node.product);
            } else {
                current = node.right.as_deref();
            }
        }
        None
    }

    fn list_in_order(&self) -> Vec<Product> {
        let mut products = Vec::with_capacity(self.len);
        products.extend(self.iter().cloned());
        products
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Debug for UnbalancedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnbalancedTree")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl Drop for UnbalancedTree {
    fn drop(&mut self) {
        // Unlink nodes one at a time; the default drop would recurse once per level.
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// In-order traversal driven by an explicit stack.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.product)
    }
}
