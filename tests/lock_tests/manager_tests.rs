//! Tests for LockManager
//!
//! These tests verify:
//! - Lock identity per collection name
//! - Distinct locks for distinct names
//! - Lazy creation and registry growth
//! - Concurrent get-or-create yields a single lock
//! - Holding one collection's lock does not block another

use std::sync::{mpsc, Arc, Barrier};
use std::thread;
use std::time::Duration;

use foliodb::LockManager;

// =============================================================================
// Identity Tests
// =============================================================================

#[test]
fn test_same_name_returns_same_lock() {
    let manager = LockManager::new();

    let first = manager.get_lock("users");
    let second = manager.get_lock("users");

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_different_names_return_distinct_locks() {
    let manager = LockManager::new();

    let users = manager.get_lock("users");
    let orders = manager.get_lock("orders");

    assert!(!Arc::ptr_eq(&users, &orders));
}

#[test]
fn test_locks_are_created_lazily() {
    let manager = LockManager::new();
    assert!(manager.is_empty());
    assert!(!manager.contains("users"));

    manager.get_lock("users");
    manager.get_lock("users");
    manager.get_lock("orders");

    assert_eq!(manager.len(), 2);
    assert!(manager.contains("users"));
    assert!(manager.contains("orders"));
}

#[test]
fn test_lock_survives_callers_dropping_it() {
    let manager = LockManager::new();

    let first = manager.get_lock("users");
    let first_ptr = Arc::as_ptr(&first);
    drop(first);

    let second = manager.get_lock("users");
    assert_eq!(Arc::as_ptr(&second), first_ptr);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_get_lock_yields_single_instance() {
    let manager = Arc::new(LockManager::new());
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = Arc::clone(&manager);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                manager.get_lock("users")
            })
        })
        .collect();

    let locks: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(manager.len(), 1);
    for lock in &locks[1..] {
        assert!(Arc::ptr_eq(&locks[0], lock));
    }
}

#[test]
fn test_held_lock_does_not_block_other_collection() {
    let manager = Arc::new(LockManager::new());

    let users = manager.get_lock("users");
    let _users_guard = users.lock();

    let (tx, rx) = mpsc::channel();
    let manager_clone = Arc::clone(&manager);
    let handle = thread::spawn(move || {
        let orders = manager_clone.get_lock("orders");
        let _orders_guard = orders.lock();
        tx.send(()).unwrap();
    });

    // Would time out if "orders" (or the registry) were blocked by "users"
    rx.recv_timeout(Duration::from_secs(5))
        .expect("orders lock blocked by users lock");
    handle.join().unwrap();
}

#[test]
fn test_held_lock_blocks_same_collection() {
    let manager = Arc::new(LockManager::new());

    let users = manager.get_lock("users");
    let guard = users.lock();

    let (tx, rx) = mpsc::channel();
    let manager_clone = Arc::clone(&manager);
    let handle = thread::spawn(move || {
        let users = manager_clone.get_lock("users");
        let _guard = users.lock();
        tx.send(()).unwrap();
    });

    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

    drop(guard);
    rx.recv_timeout(Duration::from_secs(5))
        .expect("waiter never acquired the released lock");
    handle.join().unwrap();
}
