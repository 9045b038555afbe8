//! Worker pools: distributing integers across workers via channels.

use std::sync::mpsc;
use std::thread;

/// A worker doubles every task it receives and reports the result.
struct Worker {
    tasks: mpsc::Receiver<i32>,
    results: mpsc::Sender<i32>,
}

impl Worker {
    fn run(self) {
        for task in self.tasks {
            let result = task * 2;
            if self.results.send(result).is_err() {
                break;
            }
        }
    }
}

#[test]
fn test_single_worker() {
    let (task_tx, task_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    let worker = Worker {
        tasks: task_rx,
        results: result_tx,
    };
    thread::spawn(move || worker.run());

    task_tx.send(5).unwrap();
    assert_eq!(result_rx.recv().unwrap(), 10);
}

#[test]
fn test_pool_shares_one_task_queue() {
    let num_workers = 3;
    let num_tasks = 9;

    // std mpsc receivers are single-consumer, so guard the shared
    // receiver with a mutex to fan tasks out.
    use std::sync::{Arc, Mutex};
    let (task_tx, task_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let task_rx = Arc::new(Mutex::new(task_rx));

    for id in 0..num_workers {
        let task_rx = Arc::clone(&task_rx);
        let result_tx = result_tx.clone();
        thread::spawn(move || loop {
            let task = {
                let rx = task_rx.lock().expect("lock poisoned");
                rx.recv()
            };
            match task {
                Ok(n) => {
                    let _ = result_tx.send((id, n * 2));
                }
                Err(_) => break,
            }
        });
    }
    drop(result_tx);

    for n in 1..=num_tasks {
        task_tx.send(n).unwrap();
    }
    drop(task_tx);

    let mut results: Vec<i32> = result_rx.iter().map(|(_, doubled)| doubled).collect();
    results.sort_unstable();
    assert_eq!(results, vec![2, 4, 6, 8, 10, 12, 14, 16, 18]);
}

#[tokio::test]
async fn test_async_worker_pool() {
    let (task_tx, task_rx) = tokio::sync::mpsc::channel::<i32>(16);
    let (result_tx, mut result_rx) = tokio::sync::mpsc::channel::<i32>(16);

    // Tokio mpsc receivers are also single-consumer; share behind a mutex.
    let task_rx = std::sync::Arc::new(tokio::sync::Mutex::new(task_rx));

    for _ in 0..4 {
        let task_rx = std::sync::Arc::clone(&task_rx);
        let result_tx = result_tx.clone();
        tokio::spawn(async move {
            loop {
                let task = {
                    let mut rx = task_rx.lock().await;
                    rx.recv().await
                };
                match task {
                    Some(n) => {
                        let _ = result_tx.send(n * 2).await;
                    }
                    None => break,
                }
            }
        });
    }
    drop(result_tx);

    for n in 1..=6 {
        task_tx.send(n).await.unwrap();
    }
    drop(task_tx);

    let mut results = Vec::new();
    while let Some(doubled) = result_rx.recv().await {
        results.push(doubled);
    }
    results.sort_unstable();
    assert_eq!(results, vec![2, 4, 6, 8, 10, 12]);
}
