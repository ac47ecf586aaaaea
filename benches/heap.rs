use std::collections::BinaryHeap;

use criterion::{criterion_group, criterion_main, Criterion};
use priority_queue::PriorityQueue;
use yen_ksp::FibonacciHeap;

// `BinaryHeap` has no decrease-key; its `update` arm just re-inserts, which
// is the usual real-world workaround and makes for a fair "what would you
// do without decrease-key" baseline.
enum Queue {
    Fibonacci(FibonacciHeap<i32, i32>),
    Binary(BinaryHeap<std::cmp::Reverse<i32>>),
    PriorityQueue(PriorityQueue<i32, std::cmp::Reverse<i32>>),
}

impl Queue {
    fn insert(&mut self, key: i32) {
        match self {
            Queue::Fibonacci(h) => {
                h.insert(key, key);
            }
            Queue::Binary(h) => {
                h.push(std::cmp::Reverse(key));
            }
            Queue::PriorityQueue(pq) => {
                pq.push(key, std::cmp::Reverse(key));
            }
        }
    }

    fn update(&mut self, key: i32, delta: i32) {
        match self {
            Queue::Fibonacci(_) => {
                // Exercised separately in `decrease_key`; this bench
                // only measures the insert/delete hot path.
            }
            Queue::Binary(h) => {
                h.push(std::cmp::Reverse(key - delta));
            }
            Queue::PriorityQueue(pq) => {
                if let Some(std::cmp::Reverse(p)) = pq.get_priority(&key).copied() {
                    pq.change_priority(&key, std::cmp::Reverse(p - delta));
                }
            }
        }
    }

    fn delete(&mut self) {
        match self {
            Queue::Fibonacci(h) => {
                h.pop_min();
            }
            Queue::Binary(h) => {
                h.pop();
            }
            Queue::PriorityQueue(pq) => {
                pq.pop();
            }
        }
    }
}

enum QueueKind {
    Fibonacci,
    Binary,
    PriorityQueue,
}

impl QueueKind {
    fn create(&self) -> Queue {
        match self {
            QueueKind::Fibonacci => Queue::Fibonacci(FibonacciHeap::new()),
            QueueKind::Binary => Queue::Binary(BinaryHeap::new()),
            QueueKind::PriorityQueue => Queue::PriorityQueue(PriorityQueue::new()),
        }
    }

    fn bench(&self, n: i32, update: bool) {
        let mut insert_op = n;
        let mut update_op = n;
        let mut delete_op = 0;
        let mut count = 0;

        let mut q = self.create();

        while insert_op > -1 {
            for _ in 0..insert_op {
                q.insert(count);
                count += 1;
            }

            if update {
                for ii in 0..update_op {
                    q.update(count - ii, 10);
                }
            }

            for _ in 0..delete_op {
                q.delete();
            }

            insert_op -= 1;
            update_op -= 1;
            delete_op += 1;
        }
    }
}

fn no_change_prio(c: &mut Criterion) {
    c.bench_function("Fibonacci Heap (1000)", |b| {
        b.iter(|| QueueKind::Fibonacci.bench(1_000, false))
    });
    c.bench_function("Binary Heap (1000)", |b| {
        b.iter(|| QueueKind::Binary.bench(1_000, false))
    });
    c.bench_function("Priority Queue (1000)", |b| {
        b.iter(|| QueueKind::PriorityQueue.bench(1_000, false))
    });
}

fn with_change_prio(c: &mut Criterion) {
    c.bench_function("Binary Heap (1000) | Priority Update", |b| {
        b.iter(|| QueueKind::Binary.bench(1_000, true))
    });
    c.bench_function("Priority Queue (1000) | Priority Update", |b| {
        b.iter(|| QueueKind::PriorityQueue.bench(1_000, true))
    });
}

fn decrease_key(c: &mut Criterion) {
    c.bench_function("Fibonacci Heap (1000) | decrease_priority", |b| {
        b.iter(|| {
            let mut h = FibonacciHeap::new();
            let handles: Vec<_> = (0..1_000).map(|i| h.insert(i, i)).collect();
            for (i, handle) in handles.iter().enumerate() {
                h.decrease_priority(*handle, -(i as i32) - 1);
            }
            while h.pop_min().is_some() {}
        })
    });
}

criterion_group!(benches, no_change_prio, with_change_prio, decrease_key);
criterion_main!(benches);
