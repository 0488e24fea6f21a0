//! Common traits for the heap implementations in this crate
//!
//! The [`AddressableHeap`] trait provides an API close to Rust's standard
//! heap types while adding the "addressable" operations — `decrease_key` and
//! arbitrary `delete` — that graph algorithms such as Dijkstra's rely on.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `pop` was called on a heap with no elements
    Empty,
    /// `decrease_key` was called with a key greater than the current one
    KeyIncreased,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::KeyIncreased => {
                write!(f, "new key is greater than the current key")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the heap, used for `decrease_key` and `delete`
///
/// This is an opaque type that identifies a specific element in the heap.
/// The exact implementation varies by heap type.
///
/// Handles implement `Clone` so they can be duplicated and stored alongside
/// other bookkeeping. Equality is identity: two handles compare equal iff
/// they refer to the same element.
pub trait Handle: Clone + PartialEq + Eq {}

/// Common operations for mergeable, addressable heap data structures
///
/// All implementations are min-heaps over a key type with a total order.
/// The standard Rust names (`push`, `peek`, `pop`) are the primary methods;
/// `insert`, `find_min` and `extract_min` are provided as aliases for the
/// classical operation names.
///
/// `peek` returns the minimum key by value (hence the `Clone` bound on `K`);
/// `pop` moves the key out of the removed element.
///
/// # Handle contract
///
/// `push` returns a [`Handle`] that stays valid until the element is removed
/// by `pop` or `delete`. Using a handle after its element was removed is
/// detected and aborts; using a live handle against a different heap is
/// undefined.
pub trait AddressableHeap<K: Ord + Clone> {
    /// The handle type for this heap, used to reference elements
    type Handle: Handle;

    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key, returning a handle to the new element
    ///
    /// # Time Complexity
    /// - Fibonacci heap: O(1)
    /// - Binary heap: O(log n)
    fn push(&mut self, key: K) -> Self::Handle;

    /// Inserts a key, returning a handle to the new element
    ///
    /// Alias for `push` under the classical operation name.
    #[inline]
    fn insert(&mut self, key: K) -> Self::Handle {
        self.push(key)
    }

    /// Returns the minimum key without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// All implementations: O(1)
    fn peek(&self) -> Result<K, HeapError>;

    /// Returns the minimum key without removing it
    ///
    /// Alias for `peek` under the classical operation name.
    #[inline]
    fn find_min(&self) -> Result<K, HeapError> {
        self.peek()
    }

    /// Removes and returns the minimum key
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// - Fibonacci heap: O(log n) amortized
    /// - Binary heap: O(log n)
    fn pop(&mut self) -> Result<K, HeapError>;

    /// Removes and returns the minimum key
    ///
    /// Alias for `pop` under the classical operation name.
    #[inline]
    fn extract_min(&mut self) -> Result<K, HeapError> {
        self.pop()
    }

    /// Decreases the key of the element identified by the handle
    ///
    /// Passing the element's current key is a no-op that leaves the heap
    /// untouched.
    ///
    /// # Errors
    /// Returns [`HeapError::KeyIncreased`] if `new_key` is strictly greater
    /// than the current key; the heap is left unchanged.
    ///
    /// # Panics
    /// Panics if the handle's element was already removed from the heap.
    ///
    /// # Time Complexity
    /// - Fibonacci heap: O(1) amortized
    /// - Binary heap: O(log n)
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError>;

    /// Removes the element identified by the handle, regardless of its
    /// position, and returns its key
    ///
    /// # Panics
    /// Panics if the handle's element was already removed from the heap.
    ///
    /// # Time Complexity
    /// - Fibonacci heap: O(log n) amortized
    /// - Binary heap: O(log n)
    fn delete(&mut self, handle: &Self::Handle) -> Result<K, HeapError>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// Both heaps must order their keys the same way (guaranteed by the
    /// shared `Ord` instance).
    ///
    /// # Time Complexity
    /// - Fibonacci heap: O(1)
    /// - Binary heap: O(n)
    fn merge(&mut self, other: Self);
}
