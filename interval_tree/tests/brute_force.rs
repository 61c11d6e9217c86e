use interval_tree::naive::NaiveArray;
use interval_tree::{Aggregate, IntervalTree, Max, Min, Sum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

const MAX_LEN: usize = 200;
const MAX_VALUE: i64 = 1000;

fn random_range<R: Rng>(rng: &mut R, len: usize) -> (usize, usize) {
    let a = rng.gen_range(1..=len);
    let b = rng.gen_range(1..=len);
    (a.min(b), a.max(b))
}

fn cross_check<A: Aggregate>(seed: u64, rounds: usize, operations: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    for round in 0..rounds {
        let len = rng.gen_range(1..=MAX_LEN);
        let values: Vec<i64> = (0..len)
            .map(|_| rng.gen_range(-MAX_VALUE..=MAX_VALUE))
            .collect();
        let mut tree = IntervalTree::<A>::build(&values).unwrap();
        let mut naive = NaiveArray::<A>::build(&values).unwrap();
        for step in 0..operations {
            let (left, right) = random_range(&mut rng, len);
            match rng.gen_range(0..3) {
                0 => {
                    let value = rng.gen_range(-MAX_VALUE..=MAX_VALUE);
                    tree.assign(left, right, value).unwrap();
                    naive.assign(left, right, value).unwrap();
                }
                1 => {
                    let delta = rng.gen_range(-MAX_VALUE..=MAX_VALUE);
                    tree.add(left, right, delta).unwrap();
                    naive.add(left, right, delta).unwrap();
                }
                _ => {
                    assert_eq!(
                        tree.query(left, right).unwrap(),
                        naive.query(left, right).unwrap(),
                        "{} over [{}, {}] in round {} step {} (seed {})",
                        A::name(),
                        left,
                        right,
                        round,
                        step,
                        seed
                    );
                }
            }
        }
        assert_eq!(tree.to_vec(), naive.values(), "round {} (seed {})", round, seed);
        assert_eq!(tree.total(), naive.query(1, len));
    }
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(2024)]
fn sum_tree_matches_brute_force(#[case] seed: u64) {
    cross_check::<Sum>(seed, 100, 300);
}

#[rstest]
#[case(3)]
#[case(11)]
#[case(99)]
fn max_tree_matches_brute_force(#[case] seed: u64) {
    cross_check::<Max>(seed, 100, 300);
}

#[rstest]
#[case(5)]
#[case(42)]
fn min_tree_matches_brute_force(#[case] seed: u64) {
    cross_check::<Min>(seed, 100, 300);
}

#[test]
fn tiny_arrays_hit_every_boundary() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let len = rng.gen_range(1..=4);
        let values: Vec<i64> = (0..len).map(|_| rng.gen_range(-5..=5)).collect();
        let mut tree = IntervalTree::<Sum>::build(&values).unwrap();
        let mut naive = NaiveArray::<Sum>::build(&values).unwrap();
        for _ in 0..40 {
            let index = rng.gen_range(1..=len);
            if rng.gen_bool(0.5) {
                tree.add(index, index, 1).unwrap();
                naive.add(index, index, 1).unwrap();
            } else {
                tree.assign(1, index, -2).unwrap();
                naive.assign(1, index, -2).unwrap();
            }
            for probe in 1..=len {
                assert_eq!(tree.get(probe).unwrap(), naive.query(probe, probe).unwrap());
            }
        }
    }
}

fn cross_check_near_the_limits<A: Aggregate>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let extremes = [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX];
    for _ in 0..50 {
        let len = rng.gen_range(1..=12);
        let values: Vec<i64> = (0..len)
            .map(|_| extremes[rng.gen_range(0..extremes.len())])
            .collect();
        let mut tree = IntervalTree::<A>::build(&values).unwrap();
        let mut naive = NaiveArray::<A>::build(&values).unwrap();
        for _ in 0..60 {
            let (left, right) = random_range(&mut rng, len);
            let value = extremes[rng.gen_range(0..extremes.len())];
            match rng.gen_range(0..3) {
                0 => assert_eq!(tree.assign(left, right, value), naive.assign(left, right, value)),
                1 => assert_eq!(tree.add(left, right, value), naive.add(left, right, value)),
                _ => assert_eq!(tree.query(left, right), naive.query(left, right)),
            }
        }
        assert_eq!(tree.to_vec(), naive.values());
    }
}

#[rstest]
#[case(8)]
#[case(13)]
fn overflow_is_reported_like_brute_force(#[case] seed: u64) {
    cross_check_near_the_limits::<Sum>(seed);
    cross_check_near_the_limits::<Max>(seed);
    cross_check_near_the_limits::<Min>(seed);
}
