//! Structural tests for the binary heap
//!
//! The `Display` rendering is the internal array in order, so these tests
//! pin the exact element layout after every operation, including the
//! position bookkeeping that keeps handles valid across sifts.

use mergeable_heaps::binary::{BinaryHandle, BinaryHeap};
use mergeable_heaps::{AddressableHeap, HeapError};

/// Already a valid heap shape: `03 05 08 13 21 34 55`
fn seven_keys() -> BinaryHeap<i32> {
    [3, 5, 8, 13, 21, 34, 55].into_iter().collect()
}

struct Reorganized {
    heap: BinaryHeap<i32>,
    node05: BinaryHandle<i32>,
    node88: BinaryHandle<i32>,
}

/// Ten inserts followed by one pop: `05 13 08 42 21 34 55 88 72`
fn reorganized() -> Reorganized {
    let mut heap = BinaryHeap::new();
    heap.push(3);
    let node05 = heap.push(5);
    heap.push(8);
    heap.push(13);
    heap.push(21);
    heap.push(34);
    heap.push(55);
    heap.push(42);
    heap.push(72);
    let node88 = heap.push(88);
    assert_eq!(heap.pop(), Ok(3));

    Reorganized {
        heap,
        node05,
        node88,
    }
}

#[test]
fn empty_heap_renders_nothing() {
    let heap: BinaryHeap<i32> = BinaryHeap::new();

    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
    assert_eq!(heap.find_min(), Err(HeapError::Empty));
    assert_eq!(heap.to_string(), "");
}

#[test]
fn single_element_heap() {
    let heap: BinaryHeap<i32> = [1].into_iter().collect();

    assert_eq!(heap.len(), 1);
    assert_eq!(heap.find_min(), Ok(1));
    assert_eq!(heap.to_string(), "01");
}

#[test]
fn sorted_input_keeps_its_order() {
    let heap = seven_keys();

    assert_eq!(heap.len(), 7);
    assert_eq!(heap.find_min(), Ok(3));
    assert_eq!(heap.to_string(), "03 05 08 13 21 34 55");
}

#[test]
fn insert_sifts_up_along_the_parent_chain() {
    let mut heap = seven_keys();
    heap.push(1);

    assert_eq!(heap.len(), 8);
    assert_eq!(heap.find_min(), Ok(1));
    assert_eq!(heap.to_string(), "01 03 08 05 21 34 55 13");
}

#[test]
fn merge_reheapifies_the_combined_array() {
    let mut heap = seven_keys();
    let other: BinaryHeap<i32> = [1].into_iter().collect();
    heap.merge(other);

    assert_eq!(heap.len(), 8);
    assert_eq!(heap.find_min(), Ok(1));
    assert_eq!(heap.to_string(), "01 03 08 05 21 34 55 13");
}

#[test]
fn merge_with_empty_heap_is_a_noop() {
    let mut heap = seven_keys();
    heap.merge(BinaryHeap::new());

    assert_eq!(heap.to_string(), "03 05 08 13 21 34 55");
}

#[test]
fn pop_moves_the_last_leaf_down() {
    let mut heap = seven_keys();

    assert_eq!(heap.pop(), Ok(3));
    assert_eq!(heap.len(), 6);
    assert_eq!(heap.find_min(), Ok(5));
    assert_eq!(heap.to_string(), "05 13 08 55 21 34");
}

#[test]
fn pop_after_ten_inserts_reorganizes() {
    let fixture = reorganized();

    assert_eq!(fixture.heap.len(), 9);
    assert_eq!(fixture.heap.find_min(), Ok(5));
    assert_eq!(fixture.heap.to_string(), "05 13 08 42 21 34 55 88 72");
}

#[test]
fn decrease_key_of_the_minimum_stays_put() {
    let mut fixture = reorganized();
    fixture.heap.decrease_key(&fixture.node05, 2).unwrap();

    assert_eq!(fixture.heap.find_min(), Ok(2));
    assert_eq!(fixture.heap.to_string(), "02 13 08 42 21 34 55 88 72");
}

#[test]
fn decrease_key_sifts_up_from_the_tracked_position() {
    let mut fixture = reorganized();
    fixture.heap.decrease_key(&fixture.node88, 7).unwrap();

    assert_eq!(fixture.heap.find_min(), Ok(5));
    assert_eq!(fixture.heap.to_string(), "05 07 08 13 21 34 55 42 72");
}

#[test]
fn decrease_key_can_move_the_minimum() {
    let mut fixture = reorganized();
    fixture.heap.decrease_key(&fixture.node88, 0).unwrap();

    assert_eq!(fixture.heap.find_min(), Ok(0));
    assert_eq!(fixture.heap.to_string(), "00 05 08 13 21 34 55 42 72");
}

#[test]
fn decrease_key_rejects_a_larger_key() {
    let mut fixture = reorganized();

    assert_eq!(
        fixture.heap.decrease_key(&fixture.node88, 90),
        Err(HeapError::KeyIncreased)
    );
    assert_eq!(fixture.heap.to_string(), "05 13 08 42 21 34 55 88 72");
}

#[test]
fn delete_of_the_minimum() {
    let mut fixture = reorganized();

    assert_eq!(fixture.heap.delete(&fixture.node05), Ok(5));
    assert_eq!(fixture.heap.len(), 8);
    assert_eq!(fixture.heap.find_min(), Ok(8));
    assert_eq!(fixture.heap.to_string(), "08 13 34 42 21 72 55 88");
}

#[test]
fn delete_of_an_interior_node() {
    let mut fixture = reorganized();

    assert_eq!(fixture.heap.delete(&fixture.node88), Ok(88));
    assert_eq!(fixture.heap.len(), 8);
    assert_eq!(fixture.heap.find_min(), Ok(5));
    assert_eq!(fixture.heap.to_string(), "05 13 08 42 21 34 55 72");
}

#[test]
fn draining_yields_sorted_keys() {
    let mut fixture = reorganized();
    let mut drained = Vec::new();
    while let Ok(key) = fixture.heap.pop() {
        drained.push(key);
    }

    assert_eq!(drained, vec![5, 8, 13, 21, 34, 42, 55, 72, 88]);
}
