use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rb_forest::{NodeId, RbTree};

/// Key -> multiplicity.
type Model = BTreeMap<i64, usize>;

fn model_keys(model: &Model) -> Vec<i64> {
    model
        .iter()
        .flat_map(|(&k, &n)| std::iter::repeat(k).take(n))
        .collect()
}

fn run_seed(seed: u64, steps: usize, key_space: i64) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut tree = RbTree::new();
    let mut model = Model::new();

    for step in 0..steps {
        let key = rng.gen_range(0..key_space);
        if rng.gen_bool(0.55) {
            tree.insert(key).unwrap();
            *model.entry(key).or_default() += 1;
        } else {
            let removed = tree.delete(&key).is_ok();
            let expected = match model.get_mut(&key) {
                Some(n) => {
                    *n -= 1;
                    if *n == 0 {
                        model.remove(&key);
                    }
                    true
                }
                None => false,
            };
            assert_eq!(removed, expected, "seed {seed} step {step} key {key}");
        }
        if let Err(err) = tree.validate() {
            panic!("seed {seed} step {step}: {err}");
        }
    }

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), model_keys(&model));
    tree.clear();
    assert!(tree.is_empty());
}

#[test]
fn rb_seeded_fuzz_small_key_space_matrix() {
    for seed in 0..16 {
        run_seed(seed, 400, 16);
    }
}

#[test]
fn rb_seeded_fuzz_wide_key_space_matrix() {
    for seed in [1, 7, 42, 1234, 0xdead_beef] {
        run_seed(seed, 2_000, 1_000);
    }
}

#[test]
fn rb_seeded_delete_by_handle_matrix() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(99);
    let mut tree = RbTree::new();
    let mut handles: Vec<(NodeId, i64)> = Vec::new();

    for _ in 0..500 {
        let key = rng.gen_range(-100..100);
        handles.push((tree.insert(key).unwrap(), key));
    }
    tree.validate().unwrap();

    while !handles.is_empty() {
        let at = rng.gen_range(0..handles.len());
        let (id, key) = handles.swap_remove(at);
        assert_eq!(tree.get(id), Some(&key));
        assert_eq!(tree.delete_node(id), Ok(key));
        assert_eq!(tree.get(id), None);
        tree.validate().unwrap();
        assert_eq!(tree.len(), handles.len());
    }
    assert_eq!(tree.root_id(), None);
}
