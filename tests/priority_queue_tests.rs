use indexed_sssp::data_structures::{IndexedPriorityQueue, QueueOrder};
use indexed_sssp::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn drain<K, P>(queue: &mut IndexedPriorityQueue<K, P>) -> Vec<(K, P)>
where
    K: Copy + Eq + std::hash::Hash + std::fmt::Debug,
    P: Ord + Copy + std::fmt::Debug,
{
    let mut out = Vec::new();
    while let Ok(entry) = queue.dequeue_with_priority() {
        out.push(entry);
    }
    out
}

#[test]
fn test_min_queue_extracts_in_non_decreasing_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut queue = IndexedPriorityQueue::min();
    for key in 0..200usize {
        queue.enqueue(rng.gen_range(-1_000..1_000i64), key);
    }

    let drained = drain(&mut queue);
    assert_eq!(drained.len(), 200);
    for pair in drained.windows(2) {
        assert!(pair[0].1 <= pair[1].1, "{:?} came before {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_max_queue_extracts_in_non_increasing_order() {
    let mut queue = IndexedPriorityQueue::new(QueueOrder::Max);
    assert_eq!(queue.order(), QueueOrder::Max);
    for (key, priority) in [4, 8, 1, 9, 3, 9, 0].iter().enumerate() {
        queue.enqueue(*priority, key);
    }

    let priorities: Vec<i32> = drain(&mut queue).into_iter().map(|(_, p)| p).collect();
    assert_eq!(priorities, vec![9, 9, 8, 4, 3, 1, 0]);
}

#[test]
fn test_dequeue_empty_queue_fails() {
    let mut queue: IndexedPriorityQueue<usize, i32> = IndexedPriorityQueue::min();
    assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));

    queue.enqueue(1, 0);
    assert_eq!(queue.dequeue(), Ok(0));
    assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
    assert!(queue.is_empty());
}

#[test]
fn test_dequeue_last_remaining_element() {
    let mut queue = IndexedPriorityQueue::min();
    queue.enqueue(7, "only");
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.dequeue_with_priority(), Ok(("only", 7)));
    assert_eq!(queue.len(), 0);
    assert!(!queue.is_in_queue(&"only"));
    assert_eq!(queue.peek(), None);
}

#[test]
fn test_update_priority_moves_element() {
    let mut queue = IndexedPriorityQueue::min();
    for key in 0..10usize {
        queue.enqueue(key as i32 * 10, key);
    }

    // 9 jumps to the front, 0 to the back
    queue.update_priority(&9, -1);
    queue.update_priority(&0, 1_000);
    assert_eq!(queue.priority_of(&9), Some(-1));
    assert_eq!(queue.peek(), Some((9, -1)));

    let order: Vec<usize> = drain(&mut queue).into_iter().map(|(k, _)| k).collect();
    assert_eq!(order, vec![9, 1, 2, 3, 4, 5, 6, 7, 8, 0]);
}

#[test]
fn test_update_priority_matches_fresh_queue() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut queue = IndexedPriorityQueue::min();
    let mut expected: Vec<i64> = Vec::new();

    for key in 0..100usize {
        let p = rng.gen_range(0..10_000i64);
        queue.enqueue(p, key);
        expected.push(p);
    }
    for _ in 0..300 {
        let key = rng.gen_range(0..100usize);
        let p = rng.gen_range(0..10_000i64);
        queue.update_priority(&key, p);
        expected[key] = p;
    }

    for (key, priority) in drain(&mut queue) {
        assert_eq!(expected[key], priority, "key {} carried a stale priority", key);
    }

    let mut sorted = expected.clone();
    sorted.sort();
    let mut replay = IndexedPriorityQueue::min();
    for (key, p) in expected.iter().enumerate() {
        replay.enqueue(*p, key);
    }
    let replayed: Vec<i64> = drain(&mut replay).into_iter().map(|(_, p)| p).collect();
    assert_eq!(replayed, sorted);
}

#[test]
fn test_update_priority_missing_key_is_noop() {
    let mut queue = IndexedPriorityQueue::min();
    queue.enqueue(5, 1usize);
    queue.enqueue(3, 2usize);

    queue.update_priority(&42, 0);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek(), Some((2, 3)));
}

#[test]
fn test_update_priority_updates_every_duplicate() {
    let mut queue = IndexedPriorityQueue::min();
    queue.enqueue(10, 'a');
    queue.enqueue(20, 'b');
    queue.enqueue(30, 'a');
    queue.enqueue(40, 'c');

    queue.update_priority(&'a', 50);

    let drained = drain(&mut queue);
    assert_eq!(drained, vec![('b', 20), ('c', 40), ('a', 50), ('a', 50)]);
}

#[test]
fn test_is_in_queue_tracks_enqueue_and_dequeue() {
    let mut queue = IndexedPriorityQueue::min();
    assert!(!queue.is_in_queue(&1usize));

    queue.enqueue(4, 1usize);
    assert!(queue.is_in_queue(&1));

    queue.enqueue(9, 2usize);
    assert_eq!(queue.dequeue(), Ok(1));
    assert!(!queue.is_in_queue(&1));
    assert!(queue.is_in_queue(&2));

    queue.clear();
    assert!(!queue.is_in_queue(&2));
    assert!(queue.is_empty());
}

#[test]
fn test_duplicate_stays_in_queue_until_last_copy_removed() {
    let mut queue = IndexedPriorityQueue::min();
    queue.enqueue(1, 7usize);
    queue.enqueue(2, 7usize);
    assert_eq!(queue.len(), 2);

    assert_eq!(queue.dequeue(), Ok(7));
    assert!(queue.is_in_queue(&7));
    assert_eq!(queue.dequeue(), Ok(7));
    assert!(!queue.is_in_queue(&7));
}

#[test]
fn test_update_priority_reaches_copy_that_sifted_past_another() {
    let mut queue = IndexedPriorityQueue::min();
    queue.enqueue(50, 'a');
    // Later copy overtakes the earlier one
    queue.enqueue(10, 'a');
    queue.enqueue(100, 'z');

    queue.update_priority(&'a', 5);

    assert_eq!(drain(&mut queue), vec![('a', 5), ('a', 5), ('z', 100)]);
}

#[test]
fn test_duplicates_with_updates_match_model() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut queue = IndexedPriorityQueue::min();
        // Every live entry as (key, priority)
        let mut model: Vec<(usize, i64)> = Vec::new();

        for _ in 0..400 {
            match rng.gen_range(0..10) {
                0..=4 => {
                    // Few keys so copies of one key pile up and swap with each other
                    let key = rng.gen_range(0..8usize);
                    let p = rng.gen_range(0..1_000i64);
                    queue.enqueue(p, key);
                    model.push((key, p));
                }
                5..=7 => {
                    let key = rng.gen_range(0..8usize);
                    let p = rng.gen_range(0..1_000i64);
                    queue.update_priority(&key, p);
                    for entry in model.iter_mut().filter(|(k, _)| *k == key) {
                        entry.1 = p;
                    }
                }
                _ => {
                    let min = model.iter().map(|(_, p)| *p).min();
                    match queue.dequeue_with_priority() {
                        Ok((key, p)) => {
                            assert_eq!(Some(p), min, "seed {} dequeued a non-minimal entry", seed);
                            let at = model
                                .iter()
                                .position(|entry| *entry == (key, p))
                                .unwrap_or_else(|| panic!("seed {}: ({}, {}) not in model", seed, key, p));
                            model.swap_remove(at);
                        }
                        Err(err) => {
                            assert_eq!(err, Error::EmptyQueue);
                            assert!(model.is_empty());
                        }
                    }
                }
            }
            assert_eq!(queue.len(), model.len());
            for key in 0..8usize {
                assert_eq!(queue.is_in_queue(&key), model.iter().any(|(k, _)| *k == key));
            }
        }

        let mut expected: Vec<i64> = model.iter().map(|(_, p)| *p).collect();
        expected.sort();
        let drained: Vec<i64> = drain(&mut queue).into_iter().map(|(_, p)| p).collect();
        assert_eq!(drained, expected, "seed {}", seed);
    }
}
