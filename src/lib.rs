//! Mergeable Addressable Heaps
//!
//! This crate provides two mergeable min-heap implementations behind one
//! "addressable" contract — insert returns a stable handle that later
//! identifies the element for `decrease_key` and arbitrary `delete` — plus
//! a generic Dijkstra shortest-path driver that exercises either heap.
//!
//! # Features
//!
//! - **Fibonacci Heap**: O(1) insert, merge and amortized decrease_key;
//!   O(log n) amortized pop
//! - **Binary Heap**: the array-backed baseline; O(log n) for everything
//!   but O(1) peek and O(n) merge
//! - **Dijkstra driver**: shortest paths over any heap implementing the
//!   contract, plus a seeded random graph generator for benchmarks
//!
//! Both heaps render as deterministic text (`Display`): the binary heap as
//! its array, the Fibonacci heap as S-expressions exposing tree shape and
//! mark bits. The structural test suites are written against these
//! renderings.
//!
//! # Example
//!
//! ```rust
//! use mergeable_heaps::fibonacci::FibonacciHeap;
//! use mergeable_heaps::AddressableHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! let handle1 = heap.push(5);
//! heap.push(3);
//! heap.decrease_key(&handle1, 1).unwrap();
//! assert_eq!(heap.find_min(), Ok(1));
//! ```

pub mod binary;
pub mod fibonacci;
pub mod graph;
pub mod pathfinding;
pub mod traits;

// Re-export the main trait and its error type for convenience
pub use traits::{AddressableHeap, HeapError};
