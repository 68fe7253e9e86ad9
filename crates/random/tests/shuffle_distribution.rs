//! Statistical checks that shuffles over many seeds are uniform.

use std::collections::HashMap;

use plainlang_random::{shuffle, Seed};

/// Chi-square critical value for 5 degrees of freedom at p = 0.001.
const CHI_SQUARE_5_DOF_P001: f64 = 20.515;

fn chi_square(counts: &HashMap<Vec<u8>, usize>, categories: usize, trials: usize) -> f64 {
    let expected = trials as f64 / categories as f64;
    counts
        .values()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn permutations_of_three_are_equally_likely_across_seeds() {
    let trials = 60_000;
    let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
    for i in 0..trials {
        let seed = Seed::try_from(i as f64 / trials as f64).unwrap();
        *counts.entry(shuffle(vec![1, 2, 3], seed)).or_default() += 1;
    }

    assert_eq!(counts.len(), 6, "every permutation must occur: {counts:?}");
    let statistic = chi_square(&counts, 6, trials);
    assert!(
        statistic < CHI_SQUARE_5_DOF_P001,
        "chi-square {statistic} too large: {counts:?}"
    );
}

#[test]
fn each_position_receives_each_element_evenly() {
    let trials = 20_000;
    let len = 8;
    let mut hits = vec![vec![0_usize; len]; len];
    for i in 0..trials {
        let seed = Seed::try_from(0.5 + i as f64 / (4.0 * trials as f64)).unwrap();
        let shuffled = shuffle((0..len).collect::<Vec<usize>>(), seed);
        for (position, element) in shuffled.into_iter().enumerate() {
            hits[position][element] += 1;
        }
    }

    let expected = trials as f64 / len as f64;
    for row in &hits {
        for &count in row {
            // 2500 expected, standard deviation about 47.
            assert!(
                (count as f64 - expected).abs() < 300.0,
                "position counts too uneven: {hits:?}"
            );
        }
    }
}
