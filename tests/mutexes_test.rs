//! Mutexes and RwLock: shared mutable state across threads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::thread;

#[test]
fn test_mutex_guards_a_counter() {
    let counter = Arc::new(Mutex::new(0));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                let mut guard = counter.lock().expect("lock poisoned");
                *guard += 1;
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
    assert_eq!(*counter.lock().expect("lock poisoned"), 10);
}

#[test]
fn test_mutex_guards_a_map() {
    // Same shape as the ticket store: one lock around a map.
    let registry: Arc<Mutex<HashMap<String, u32>>> = Arc::new(Mutex::new(HashMap::new()));

    let handles: Vec<_> = (0..4)
        .map(|id| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut map = registry.lock().expect("lock poisoned");
                map.insert(format!("worker-{}", id), id);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let map = registry.lock().expect("lock poisoned");
    assert_eq!(map.len(), 4);
    assert_eq!(map.get("worker-2"), Some(&2));
}

#[test]
fn test_guard_released_at_scope_end() {
    let value = Mutex::new(1);

    {
        let mut guard = value.lock().expect("lock poisoned");
        *guard += 1;
    } // guard dropped, lock released

    assert_eq!(*value.lock().expect("lock poisoned"), 2);
}

#[test]
fn test_rwlock_allows_parallel_readers() {
    let config = Arc::new(RwLock::new(String::from("initial")));

    // Two simultaneous read guards are fine.
    let read_a = config.read().expect("lock poisoned");
    let read_b = config.read().expect("lock poisoned");
    assert_eq!(*read_a, "initial");
    assert_eq!(*read_b, "initial");
    drop(read_a);
    drop(read_b);

    *config.write().expect("lock poisoned") = String::from("updated");
    assert_eq!(*config.read().expect("lock poisoned"), "updated");
}

#[tokio::test]
async fn test_tokio_mutex_across_awaits() {
    let shared = Arc::new(tokio::sync::Mutex::new(Vec::new()));

    let tasks: Vec<_> = (0..5)
        .map(|n| {
            let shared = Arc::clone(&shared);
            tokio::spawn(async move {
                let mut guard = shared.lock().await;
                guard.push(n);
            })
        })
        .collect();

    for task in tasks {
        task.await.expect("task panicked");
    }

    let mut values = shared.lock().await.clone();
    values.sort_unstable();
    assert_eq!(values, vec![0, 1, 2, 3, 4]);
}
