/// Installs a `tracing` subscriber writing to the test output; honors `RUST_LOG`
#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every storage backend has to pass the very same suite
macro_rules! test_storage_backend {
    ($env:ident, $storage:ty) => {
        #[cfg(test)]
        mod $env {
            use crate::{error::*, node::*, repr::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use std::collections::BTreeMap;

            type Storage = $storage;

            /// Five slots with a single edge `(0, 1)` of weight 3
            fn fixture() -> Storage {
                let mut storage = Storage::new(5);
                storage.set(0, 1, 3).unwrap();
                storage
            }

            fn assert_access_eq(storage: &Storage, u: Node, v: Node, weight: i32) {
                assert_eq!(storage.get(u, v), Ok(weight), "get({u},{v})");
                assert_eq!(storage.get_at((u, v)), Ok(weight), "get_at(({u},{v}))");
                assert_eq!(storage.get_at(u..v), Ok(weight), "get_at({u}..{v})");
                assert_eq!(storage[(u, v)], weight, "[({u},{v})]");
            }

            fn assert_access_fail(storage: &Storage, u: Node, v: Node) {
                let bad = if u >= storage.number_of_slots() { u } else { v };
                assert_eq!(storage.get(u, v), Err(GraphError::InvalidId(bad)));
                assert_eq!(storage.get_at((u, v)), Err(GraphError::InvalidId(bad)));
                assert_eq!(storage.get_at(u..v), Err(GraphError::InvalidId(bad)));
            }

            #[test]
            fn init_len() {
                assert_eq!(fixture().number_of_slots(), 5);
                assert_eq!(Storage::new(0).number_of_slots(), 0);
            }

            #[test]
            fn get() {
                let storage = fixture();
                assert_access_eq(&storage, 0, 1, 3);
                assert_access_eq(&storage, 1, 0, 0);
                assert_access_eq(&storage, 0, 0, 0);
                assert_access_eq(&storage, 4, 4, 0);
            }

            #[test]
            fn set() {
                let mut storage = fixture();
                storage.set(1, 3, 7).unwrap();
                assert_access_eq(&storage, 1, 3, 7);
                assert_access_eq(&storage, 3, 1, 0);

                storage.set_at((2, 4), 8).unwrap();
                assert_access_eq(&storage, 2, 4, 8);

                storage.set_at(4..2, -1).unwrap();
                assert_access_eq(&storage, 4, 2, -1);
                assert_access_eq(&storage, 2, 4, 8);

                storage.set(1, 3, 9).unwrap();
                assert_access_eq(&storage, 1, 3, 9);
            }

            #[test]
            fn set_zero_deletes() {
                let mut storage = fixture();
                storage.set(0, 1, 0).unwrap();
                assert_access_eq(&storage, 0, 1, 0);
                assert_eq!(storage.children(0).unwrap().count(), 0);
                assert_eq!(storage.parents(1).unwrap().count(), 0);
            }

            #[test]
            fn out_of_range() {
                let mut storage = fixture();
                for (u, v) in [(5, 0), (0, 5), (3, 7), (13, 2), (INVALID_NODE, 0)] {
                    assert_access_fail(&storage, u, v);
                    let bad = if u >= 5 { u } else { v };
                    assert_eq!(storage.set(u, v, 1), Err(GraphError::InvalidId(bad)));
                }

                assert_eq!(storage.zero(5), Err(GraphError::InvalidId(5)));
                assert!(storage.children(5).is_err());
                assert!(storage.parents(5).is_err());

                // nothing was touched
                assert_eq!(storage.number_of_slots(), 5);
                assert_access_eq(&storage, 0, 1, 3);
            }

            #[test]
            #[should_panic(expected = "invalid node id: 5")]
            fn index_out_of_range() {
                let storage = fixture();
                let _weight: i32 = storage[(0, 5)];
            }

            #[test]
            fn add_node() {
                let mut storage = fixture();
                assert_eq!(storage.add_node(), 5);
                assert_eq!(storage.number_of_slots(), 6);

                for u in 0..5 {
                    assert_access_eq(&storage, u, 5, 0);
                    assert_access_eq(&storage, 5, u, 0);
                }
                assert_access_eq(&storage, 0, 1, 3);
            }

            #[test]
            fn add_then_set() {
                let mut storage = fixture();
                let u = storage.add_node();

                storage.set(2, u, 4).unwrap();
                assert_access_eq(&storage, 2, u, 4);
                assert_access_eq(&storage, u, 2, 0);
            }

            #[test]
            fn remove() {
                let mut storage = fixture();
                storage.set(2, 4, -3).unwrap();
                assert_eq!(storage.remove(), Ok(4));

                assert_access_fail(&storage, 2, 4);
                assert_access_fail(&storage, 3, 4);
                assert_access_fail(&storage, 4, 2);

                assert_eq!(storage.number_of_slots(), 4);
                assert_access_eq(&storage, 0, 3, 0);
                assert_access_eq(&storage, 0, 1, 3);
            }

            #[test]
            fn add_remove() {
                let mut storage = fixture();
                let u = storage.add_node();

                storage.set(3, 2, 1).unwrap();
                storage.set(3, u, 4).unwrap();
                storage.set(u, 2, 5).unwrap();

                assert_eq!(storage.remove(), Ok(u));
                assert_access_fail(&storage, 3, u);
                assert_access_fail(&storage, u, 2);
                assert_access_eq(&storage, 3, 2, 1);

                // the slot comes back without its old edges
                assert_eq!(storage.add_node(), u);
                assert_access_eq(&storage, 3, u, 0);
                assert_access_eq(&storage, u, 2, 0);
                assert_eq!(storage.parents(u).unwrap().count(), 0);
                assert_eq!(storage.children(3).unwrap().collect_vec(), [2]);
            }

            #[test]
            fn remove_empty() {
                let mut storage = Storage::new(1);
                assert_eq!(storage.remove(), Ok(0));
                assert!(matches!(
                    storage.remove(),
                    Err(GraphError::PreconditionViolation(_))
                ));
                assert_eq!(storage.number_of_slots(), 0);
            }

            #[test]
            fn zero() {
                let mut storage = fixture();
                storage.set(2, 0, 1).unwrap();
                storage.set(2, 2, 1).unwrap();
                storage.set(3, 2, 1).unwrap();
                storage.set(3, 4, 1).unwrap();

                storage.zero(2).unwrap();
                assert_eq!(storage.number_of_slots(), 5);
                for u in 0..5 {
                    assert_access_eq(&storage, 2, u, 0);
                    assert_access_eq(&storage, u, 2, 0);
                }
                assert_access_eq(&storage, 0, 1, 3);
                assert_access_eq(&storage, 3, 4, 1);
            }

            #[test]
            fn children_and_parents() {
                let mut storage = fixture();
                assert_eq!(storage.children(0).unwrap().collect_vec(), [1]);
                assert_eq!(storage.parents(1).unwrap().collect_vec(), [0]);

                storage.set(3, 4, 1).unwrap();
                storage.set(3, 0, 2).unwrap();
                storage.set(3, 2, 3).unwrap();
                storage.set(1, 2, 1).unwrap();
                storage.set(4, 2, 1).unwrap();

                assert_eq!(storage.children(3).unwrap().collect_vec(), [0, 2, 4]);
                assert_eq!(storage.parents(2).unwrap().collect_vec(), [1, 3, 4]);

                // sequences are produced fresh on every call
                assert_eq!(storage.children(3).unwrap().collect_vec(), [0, 2, 4]);
                storage.set(3, 1, 1).unwrap();
                assert_eq!(storage.children(3).unwrap().collect_vec(), [0, 1, 2, 4]);

                storage.set(2, 2, 5).unwrap();
                assert_eq!(storage.children(2).unwrap().collect_vec(), [2]);
                assert_eq!(storage.parents(2).unwrap().collect_vec(), [1, 2, 3, 4]);
            }

            #[test]
            fn random_operations() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for _ in 0..20 {
                    let mut n: Node = rng.random_range(0..8);
                    let mut storage = Storage::new(n);
                    let mut reference: BTreeMap<(Node, Node), i32> = BTreeMap::new();

                    for _ in 0..200 {
                        match rng.random_range(0..10) {
                            0 => {
                                assert_eq!(storage.add_node(), n);
                                n += 1;
                            }
                            1 => {
                                if n == 0 {
                                    assert!(storage.remove().is_err());
                                } else {
                                    n -= 1;
                                    assert_eq!(storage.remove(), Ok(n));
                                    reference.retain(|&(u, v), _| u != n && v != n);
                                }
                            }
                            2 => {
                                let u = rng.random_range(0..n + 1);
                                if u < n {
                                    storage.zero(u).unwrap();
                                    reference.retain(|&(x, y), _| x != u && y != u);
                                } else {
                                    assert!(storage.zero(u).is_err());
                                }
                            }
                            _ => {
                                let u = rng.random_range(0..n + 2);
                                let v = rng.random_range(0..n + 2);
                                let w = rng.random_range(-2..3);
                                if u < n && v < n {
                                    storage.set(u, v, w).unwrap();
                                    if w == 0 {
                                        reference.remove(&(u, v));
                                    } else {
                                        reference.insert((u, v), w);
                                    }
                                } else {
                                    assert!(storage.set(u, v, w).is_err());
                                }
                            }
                        }

                        assert_eq!(storage.number_of_slots(), n);
                        for u in 0..n {
                            for v in 0..n {
                                let expected = reference.get(&(u, v)).copied().unwrap_or(0);
                                assert_eq!(storage.get(u, v), Ok(expected));
                            }

                            let children = reference
                                .keys()
                                .filter_map(|&(x, y)| (x == u).then_some(y))
                                .collect_vec();
                            let parents = reference
                                .keys()
                                .filter_map(|&(x, y)| (y == u).then_some(x))
                                .sorted()
                                .collect_vec();

                            assert_eq!(storage.children(u).unwrap().collect_vec(), children);
                            assert_eq!(storage.parents(u).unwrap().collect_vec(), parents);
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_storage_backend;
