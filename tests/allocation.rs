//! Behaviour under allocation failure and teardown order, observed through a global allocator
//! that can be told to fail and can record what it releases.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use textqueue::{handle, BackToFront, QueueError, TextQueue};

const RECORD_CAP: usize = 32;

thread_local! {
    // successful allocations left before the next one fails; `None` never fails
    static ALLOWANCE: Cell<Option<usize>> = const { Cell::new(None) };
    static RECORDING: Cell<bool> = const { Cell::new(false) };
    static RELEASED: Cell<[usize; RECORD_CAP]> = const { Cell::new([0; RECORD_CAP]) };
    static RELEASED_LEN: Cell<usize> = const { Cell::new(0) };
}

struct Controlled;

unsafe impl GlobalAlloc for Controlled {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let fail = ALLOWANCE
            .try_with(|allowance| match allowance.get() {
                Some(0) => true,
                Some(n) => {
                    allowance.set(Some(n - 1));
                    false
                }
                None => false,
            })
            .unwrap_or(false);
        if fail {
            std::ptr::null_mut()
        } else {
            System.alloc(layout)
        }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = RECORDING.try_with(|recording| {
            if recording.get() {
                let len = RELEASED_LEN.with(Cell::get);
                if len < RECORD_CAP {
                    let mut released = RELEASED.with(Cell::get);
                    released[len] = ptr as usize;
                    RELEASED.with(|r| r.set(released));
                    RELEASED_LEN.with(|l| l.set(len + 1));
                }
            }
        });
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: Controlled = Controlled;

fn with_allowance<R>(allocations: usize, f: impl FnOnce() -> R) -> R {
    ALLOWANCE.with(|a| a.set(Some(allocations)));
    let result = f();
    ALLOWANCE.with(|a| a.set(None));
    result
}

fn released_during(f: impl FnOnce()) -> Vec<usize> {
    RELEASED_LEN.with(|l| l.set(0));
    RECORDING.with(|r| r.set(true));
    f();
    RECORDING.with(|r| r.set(false));
    let len = RELEASED_LEN.with(Cell::get);
    RELEASED.with(Cell::get)[..len].to_vec()
}

fn queue_of(values: &[&str]) -> TextQueue {
    let mut queue = TextQueue::new();
    for v in values {
        queue.push_back(v).unwrap();
    }
    queue
}

#[test]
fn failed_value_copy_leaves_queue_unchanged() {
    let mut queue = queue_of(&["a", "b"]);
    let result = with_allowance(0, || queue.push_front("c"));
    assert_eq!(result, Err(QueueError::AllocationFailure));
    let result = with_allowance(0, || queue.push_back("c"));
    assert_eq!(result, Err(QueueError::AllocationFailure));

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.front(), Some("a"));
    assert_eq!(queue.back(), Some("b"));
    assert_eq!(format!("{:?}", queue), r#"["a", "b"]"#);
}

#[test]
fn failed_node_allocation_leaves_queue_unchanged() {
    let mut queue = queue_of(&["a", "b"]);
    // the value copy succeeds, the node does not
    let result = with_allowance(1, || queue.push_front("c"));
    assert_eq!(result, Err(QueueError::AllocationFailure));
    let result = with_allowance(1, || queue.push_back("c"));
    assert_eq!(result, Err(QueueError::AllocationFailure));

    assert_eq!(queue.len(), 2);
    assert_eq!(format!("{:?}", queue), r#"["a", "b"]"#);

    queue.push_front("front").unwrap();
    queue.push_back("back").unwrap();
    assert_eq!(format!("{:?}", queue), r#"["front", "a", "b", "back"]"#);
}

#[test]
fn failed_insert_into_empty_queue_keeps_it_empty() {
    let mut queue = TextQueue::new();
    let result = with_allowance(1, || queue.push_back("lost"));
    assert_eq!(result, Err(QueueError::AllocationFailure));
    assert!(queue.is_empty());
    assert_eq!(queue.front(), None);
    assert_eq!(queue.back(), None);

    queue.push_back("kept").unwrap();
    assert_eq!(queue.front(), Some("kept"));
    assert_eq!(queue.back(), Some("kept"));
}

#[test]
fn create_reports_failure() {
    let result = with_allowance(0, handle::create);
    assert_eq!(result.err(), Some(QueueError::AllocationFailure));
    assert!(handle::create().is_ok());
}

#[test]
fn default_teardown_releases_front_to_back() {
    let queue = queue_of(&["first", "second"]);
    let first = queue.front().unwrap().as_ptr() as usize;
    let second = queue.back().unwrap().as_ptr() as usize;

    let released = released_during(|| drop(queue));
    let values: Vec<usize> = released
        .into_iter()
        .filter(|p| *p == first || *p == second)
        .collect();
    assert_eq!(values, [first, second]);
}

#[test]
fn back_to_front_teardown_releases_in_reverse() {
    let queue: TextQueue<BackToFront> = queue_of(&["first", "second"]).into_drop_order();
    let first = queue.front().unwrap().as_ptr() as usize;
    let second = queue.back().unwrap().as_ptr() as usize;

    let released = released_during(|| drop(queue));
    let values: Vec<usize> = released
        .into_iter()
        .filter(|p| *p == first || *p == second)
        .collect();
    assert_eq!(values, [second, first]);
}

#[test]
fn destroy_releases_front_to_back() {
    let mut queue = handle::create().unwrap();
    handle::insert_back(Some(&mut *queue), "first").unwrap();
    handle::insert_back(Some(&mut *queue), "second").unwrap();
    let first = queue.front().unwrap().as_ptr() as usize;
    let second = queue.back().unwrap().as_ptr() as usize;

    let released = released_during(|| handle::destroy(Some(queue)));
    let values: Vec<usize> = released
        .into_iter()
        .filter(|p| *p == first || *p == second)
        .collect();
    assert_eq!(values, [first, second]);
}
