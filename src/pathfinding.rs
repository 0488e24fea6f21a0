//! Dijkstra's single-source shortest path over any [`AddressableHeap`]
//!
//! The driver is generic over the queue implementation so the heaps in this
//! crate can be compared running the same workload.
//!
//! # Design
//!
//! Instead of decreasing the key of a queued vertex when a shorter route to
//! it appears, the driver pushes a fresh `(vertex, distance)` entry and lets
//! the distance table short-circuit the stale ones. This keeps the queue
//! requirements minimal — any heap with `push`/`peek`/`pop` will do — and
//! with non-negative weights a stale entry can never surface a better route
//! than the one already recorded, so the result is unchanged.
//!
//! # Example
//!
//! ```rust
//! use mergeable_heaps::fibonacci::FibonacciHeap;
//! use mergeable_heaps::graph::{Edge, Graph};
//! use mergeable_heaps::pathfinding::{dijkstra, QueueEntry};
//!
//! let mut graph: Graph = vec![Vec::new(); 3];
//! graph[0].push(Edge { to: 1, weight: 1 });
//! graph[1].push(Edge { to: 2, weight: 2 });
//!
//! let path = dijkstra::<FibonacciHeap<QueueEntry>>(&graph, 0, 2);
//! assert_eq!(path, vec![0, 1, 2]);
//! ```

use crate::graph::{Graph, Vertex, Weight};
use crate::traits::AddressableHeap;
use std::cmp::Ordering;

/// Queue key for the search: a vertex tagged with its tentative distance
///
/// Entries order by distance; the vertex index breaks ties so that the
/// ordering is total and consistent with equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub vertex: Vertex,
    pub distance: Weight,
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Computes a shortest path from `source` to `destination`
///
/// Returns the vertices along the path, source and destination inclusive.
/// When `source == destination` the path is just `[source]`; when the
/// destination cannot be reached the reply is `[destination]` alone.
///
/// # Panics
/// Panics if `source` or `destination` is not a vertex of `graph`.
pub fn dijkstra<Q>(graph: &Graph, source: Vertex, destination: Vertex) -> Vec<Vertex>
where
    Q: AddressableHeap<QueueEntry>,
{
    assert!(
        source < graph.len(),
        "source vertex {} out of range for a graph of {} vertices",
        source,
        graph.len()
    );
    assert!(
        destination < graph.len(),
        "destination vertex {} out of range for a graph of {} vertices",
        destination,
        graph.len()
    );

    let mut parent: Vec<Option<Vertex>> = vec![None; graph.len()];
    let mut distance: Vec<Weight> = vec![Weight::MAX; graph.len()];

    let mut queue = Q::new();
    distance[source] = 0;
    queue.push(QueueEntry {
        vertex: source,
        distance: 0,
    });

    while let Ok(head) = queue.peek() {
        if head.vertex == destination {
            break;
        }
        let from = match queue.pop() {
            Ok(entry) => entry.vertex,
            Err(_) => break,
        };
        for edge in &graph[from] {
            let relaxed = distance[from] + edge.weight;
            if relaxed < distance[edge.to] {
                distance[edge.to] = relaxed;
                parent[edge.to] = Some(from);
                queue.push(QueueEntry {
                    vertex: edge.to,
                    distance: relaxed,
                });
            }
        }
    }

    let mut path = vec![destination];
    let mut vertex = destination;
    while let Some(previous) = parent[vertex] {
        path.push(previous);
        vertex = previous;
    }
    path.reverse();
    path
}
