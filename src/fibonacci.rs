//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a forest of heap-ordered trees with:
//! - O(1) insert, merge and find-min
//! - O(1) amortized decrease_key
//! - O(log n) amortized pop
//!
//! # Algorithm Overview
//!
//! Work is deferred as far as possible. Insert and merge only append to the
//! root list; the forest is reorganized lazily when the minimum is removed:
//!
//! - **Insert**: add a single-node tree to the root list
//! - **Pop**: promote the minimum's children to roots, then consolidate the
//!   root list by linking trees of equal rank (similar to binary addition
//!   with carry propagation) until every rank occurs at most once
//! - **Decrease-key**: cut the node from its parent when heap order breaks,
//!   then cascade the cut up through marked ancestors
//! - **Merge**: concatenate root lists
//!
//! # Key Invariants
//!
//! 1. Every tree is heap-ordered (parent's key ≤ child's key)
//! 2. After consolidation, no two roots share a rank
//! 3. A root is never marked; a non-root is marked iff it has lost exactly
//!    one child since it last gained its current parent
//! 4. A node of rank k roots a tree of at least F_{k+2} nodes, which bounds
//!    the maximum rank by log_φ(n)
//!
//! The marking rule is what maintains invariant 4: a node may lose at most
//! one child before being cut itself, so subtrees cannot be hollowed out.
//!
//! # Storage
//!
//! Nodes are shared `Rc<RefCell<_>>` records. Children lists own their
//! subtrees; parent links are `Weak` back-references, so dropping the root
//! list drops the whole forest. Handles hold a `Weak` reference as well,
//! which lets stale handle use be detected instead of dereferencing freed
//! memory.

use crate::traits::{AddressableHeap, Handle, HeapError};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Type alias for strong node reference
type NodeRef<K> = Rc<RefCell<Node<K>>>;
/// Type alias for weak node reference (parent backlinks and handles)
type WeakNodeRef<K> = Weak<RefCell<Node<K>>>;

/// Handle to an element in a Fibonacci heap
#[derive(Debug)]
pub struct FibonacciHandle<K> {
    node: WeakNodeRef<K>,
}

impl<K> Clone for FibonacciHandle<K> {
    fn clone(&self) -> Self {
        FibonacciHandle {
            node: self.node.clone(),
        }
    }
}

impl<K> PartialEq for FibonacciHandle<K> {
    fn eq(&self, other: &Self) -> bool {
        self.node.ptr_eq(&other.node)
    }
}

impl<K> Eq for FibonacciHandle<K> {}

impl<K> Handle for FibonacciHandle<K> {}

impl<K> FibonacciHandle<K> {
    fn upgrade(&self) -> NodeRef<K> {
        self.node
            .upgrade()
            .expect("heap handle used after its element was removed")
    }
}

/// Internal node structure
///
/// A node owns its children; the parent link is weak and never keeps a
/// subtree alive. `removed` supports arbitrary delete: the ordering helper
/// treats a removed-flagged node as smaller than everything else, so delete
/// can float a node to the top without inventing a key below all others.
struct Node<K> {
    key: K,
    parent: WeakNodeRef<K>,
    children: Vec<NodeRef<K>>,
    marked: bool,
    removed: bool,
}

impl<K> Node<K> {
    fn rank(&self) -> usize {
        self.children.len()
    }
}

/// Fibonacci Heap
///
/// The root list and every children list are kept in insertion order: new
/// roots and newly linked children are appended on the right. Equal-key
/// links keep the earlier root as the winner. This makes whole-forest
/// renderings reproducible, which the structural tests rely on.
///
/// # Example
///
/// ```rust
/// use mergeable_heaps::fibonacci::FibonacciHeap;
/// use mergeable_heaps::AddressableHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.push(5);
/// heap.push(3);
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.find_min(), Ok(1));
/// ```
pub struct FibonacciHeap<K: Ord> {
    trees: Vec<NodeRef<K>>,
    min: Option<NodeRef<K>>,
    len: usize,
}

impl<K: Ord + Clone> AddressableHeap<K> for FibonacciHeap<K> {
    type Handle = FibonacciHandle<K>;

    fn new() -> Self {
        Self {
            trees: Vec::new(),
            min: None,
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, key: K) -> Self::Handle {
        let node = Rc::new(RefCell::new(Node {
            key,
            parent: Weak::new(),
            children: Vec::new(),
            marked: false,
            removed: false,
        }));
        let handle = FibonacciHandle {
            node: Rc::downgrade(&node),
        };

        self.trees.push(Rc::clone(&node));
        self.len += 1;

        let replace = match &self.min {
            Some(min) => Self::goes_before(&node, min),
            None => true,
        };
        if replace {
            self.min = Some(node);
        }

        handle
    }

    fn peek(&self) -> Result<K, HeapError> {
        self.min
            .as_ref()
            .map(|min| min.borrow().key.clone())
            .ok_or(HeapError::Empty)
    }

    fn pop(&mut self) -> Result<K, HeapError> {
        let min = self.min.take().ok_or(HeapError::Empty)?;

        // Phase 1: detach the minimum and promote its children to roots.
        self.trees.retain(|root| !Rc::ptr_eq(root, &min));
        self.len -= 1;

        let children = std::mem::take(&mut min.borrow_mut().children);
        for child in &children {
            let mut child = child.borrow_mut();
            child.parent = Weak::new();
            child.marked = false;
        }
        self.trees.extend(children);

        // Phase 2: link trees of equal rank until ranks are unique.
        self.consolidate();

        // Phase 3: rescan the root list for the new minimum.
        self.min = self.search_minimum();

        Ok(Self::into_key(min))
    }

    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError> {
        let node = handle.upgrade();

        if node.borrow().key < new_key {
            return Err(HeapError::KeyIncreased);
        }
        node.borrow_mut().key = new_key;

        let replace = match &self.min {
            Some(min) => Self::goes_before(&node, min),
            None => true,
        };
        if replace {
            self.min = Some(Rc::clone(&node));
        }

        let parent = match node.borrow().parent.upgrade() {
            Some(parent) => parent,
            None => return Ok(()),
        };

        // Heap order still intact: nothing to restructure.
        if !Self::goes_before(&node, &parent) {
            return Ok(());
        }

        self.cut(&node);
        self.cascading_cut(parent);
        Ok(())
    }

    fn delete(&mut self, handle: &Self::Handle) -> Result<K, HeapError> {
        let node = handle.upgrade();
        let key = {
            let mut node = node.borrow_mut();
            node.removed = true;
            node.key.clone()
        };

        // The removed flag orders the node below every live key, so
        // re-submitting its own key floats it to the minimum through the
        // ordinary cut path.
        self.decrease_key(handle, key)?;
        self.pop()
    }

    fn merge(&mut self, mut other: Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = other;
            return;
        }

        self.trees.append(&mut other.trees);
        self.len += other.len;

        let take_other = match (&self.min, &other.min) {
            (Some(mine), Some(theirs)) => Self::goes_before(theirs, mine),
            (None, Some(_)) => true,
            _ => false,
        };
        if take_other {
            self.min = other.min.take();
        }
    }
}

impl<K: Ord + Clone> FibonacciHeap<K> {
    /// Ordering helper shared by every structural decision.
    ///
    /// A removed-flagged node sorts before anything else; otherwise keys
    /// compare strictly, so ties never displace an incumbent.
    fn goes_before(a: &NodeRef<K>, b: &NodeRef<K>) -> bool {
        let a = a.borrow();
        if a.removed {
            return true;
        }
        a.key < b.borrow().key
    }

    /// Moves the key out of a fully detached node.
    fn into_key(node: NodeRef<K>) -> K {
        match Rc::try_unwrap(node) {
            Ok(cell) => cell.into_inner().key,
            // A live clone of the Rc can only be a transient borrow
            // elsewhere; fall back to copying the key out.
            Err(node) => node.borrow().key.clone(),
        }
    }

    /// Links two equal-rank roots, returning the winner.
    ///
    /// The loser is appended to the winner's children. On equal keys the
    /// first argument (the earlier root) wins.
    fn link(first: NodeRef<K>, second: NodeRef<K>) -> NodeRef<K> {
        let (winner, loser) = if Self::goes_before(&second, &first) {
            (second, first)
        } else {
            (first, second)
        };
        {
            let mut loser = loser.borrow_mut();
            loser.parent = Rc::downgrade(&winner);
            loser.marked = false;
        }
        winner.borrow_mut().children.push(loser);
        winner
    }

    /// Shrinks the root list until no two roots share a rank
    ///
    /// Walks the roots in order, keeping a table from rank to the slot of
    /// the tree currently holding that rank. A collision links the two
    /// trees; the winner stays in the earlier root's slot and re-enters the
    /// table at its increased rank (carry propagation). Surviving slots are
    /// compacted back into the root list, preserving order.
    fn consolidate(&mut self) {
        if self.trees.is_empty() {
            return;
        }

        // The Fibonacci property bounds the maximum rank by log_φ(n), so
        // ⌊log₂(n)⌋ + 1 table entries always suffice.
        let max_rank = (self.len.max(1) as f64).log2().floor() as usize;
        let mut slot_of_rank: Vec<Option<usize>> = vec![None; max_rank + 2];
        let mut slots: Vec<Option<NodeRef<K>>> = Vec::with_capacity(self.trees.len());

        for root in std::mem::take(&mut self.trees) {
            let mut tree = root;
            let mut at: Option<usize> = None;
            loop {
                let rank = tree.borrow().rank();
                if rank >= slot_of_rank.len() {
                    slot_of_rank.resize(rank + 1, None);
                }
                match slot_of_rank[rank].take() {
                    Some(slot) => {
                        let other = slots[slot]
                            .take()
                            .expect("rank table entry refers to an occupied slot");
                        let winner = Self::link(other, tree);
                        if let Some(previous) = at {
                            slots[previous] = None;
                        }
                        slots[slot] = Some(Rc::clone(&winner));
                        tree = winner;
                        at = Some(slot);
                    }
                    None => {
                        let slot = match at {
                            Some(slot) => slot,
                            None => {
                                slots.push(Some(Rc::clone(&tree)));
                                slots.len() - 1
                            }
                        };
                        slot_of_rank[rank] = Some(slot);
                        break;
                    }
                }
            }
        }

        self.trees = slots.into_iter().flatten().collect();
    }

    /// Scans the root list for the smallest key, first occurrence winning.
    fn search_minimum(&self) -> Option<NodeRef<K>> {
        let mut roots = self.trees.iter();
        let mut min = Rc::clone(roots.next()?);
        for root in roots {
            if root.borrow().key < min.borrow().key {
                min = Rc::clone(root);
            }
        }
        Some(min)
    }

    /// Cuts a node away from its parent and appends it to the root list
    ///
    /// The node leaves the parent's children list before entering the root
    /// list, so it is never reachable from two containers at once.
    fn cut(&mut self, node: &NodeRef<K>) {
        let parent = match node.borrow().parent.upgrade() {
            Some(parent) => parent,
            None => return,
        };
        parent
            .borrow_mut()
            .children
            .retain(|child| !Rc::ptr_eq(child, node));
        {
            let mut node = node.borrow_mut();
            node.parent = Weak::new();
            node.marked = false;
        }
        self.trees.push(Rc::clone(node));
    }

    /// Walks up from a node that just lost a child
    ///
    /// An unmarked non-root is marked and the walk stops; a marked node is
    /// cut (which unmarks it) and the walk continues with its parent. Roots
    /// stop the walk and stay unmarked.
    fn cascading_cut(&mut self, mut node: NodeRef<K>) {
        loop {
            let parent = match node.borrow().parent.upgrade() {
                Some(parent) => parent,
                None => return,
            };
            if !node.borrow().marked {
                node.borrow_mut().marked = true;
                return;
            }
            self.cut(&node);
            node = parent;
        }
    }
}

impl<K: Ord + Clone> Default for FibonacciHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone> FromIterator<K> for FibonacciHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::new();
        for key in iter {
            heap.push(key);
        }
        heap
    }
}

impl<K: Ord + fmt::Display> FibonacciHeap<K> {
    fn fmt_trees(f: &mut fmt::Formatter<'_>, trees: &[NodeRef<K>]) -> fmt::Result {
        for (index, tree) in trees.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            let node = tree.borrow();
            write!(f, "({:02}", node.key)?;
            if node.marked {
                f.write_str("*")?;
            }
            if !node.children.is_empty() {
                f.write_str(" ")?;
                Self::fmt_trees(f, &node.children)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Renders the forest as S-expressions in root-list order: each tree is
/// `(KK child…)` with zero-padded keys, a `*` after the key of a marked
/// node, and single spaces between siblings. The empty heap renders as the
/// empty string.
impl<K: Ord + fmt::Display> fmt::Display for FibonacciHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_trees(f, &self.trees)
    }
}
