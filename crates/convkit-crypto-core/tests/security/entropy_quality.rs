//! Shannon entropy and distribution checks on `OsRandom` output.

use convkit_crypto_core::password::{build_char_pool, generate_password, PasswordOptions};
use convkit_crypto_core::random::{OsRandom, RandomnessProvider};

fn shannon_entropy(data: &[u8]) -> f64 {
    let mut counts = [0u64; 256];
    for &b in data {
        counts[usize::from(b)] += 1;
    }
    #[allow(clippy::cast_precision_loss)]
    let len = data.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            #[allow(clippy::cast_precision_loss)]
            let p = c as f64 / len;
            -p * p.log2()
        })
        .sum()
}

#[test]
fn os_random_bytes_near_eight_bits() {
    let mut buf = vec![0u8; 64 * 1024];
    OsRandom.fill_bytes(&mut buf).unwrap();
    let h = shannon_entropy(&buf);
    assert!(h > 7.99, "byte entropy {h} too low");
}

#[test]
fn next_below_covers_small_range_evenly() {
    let mut counts = [0u32; 10];
    for _ in 0..20_000 {
        counts[OsRandom.next_below(10).unwrap() as usize] += 1;
    }
    // Expected 2000 each; 1700..2300 is far outside any plausible fluctuation.
    for (digit, &n) in counts.iter().enumerate() {
        assert!((1_700..2_300).contains(&n), "digit {digit} drawn {n} times");
    }
}

#[test]
fn generated_passwords_use_whole_pool() {
    let pool = build_char_pool(&PasswordOptions::default());
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.extend(generate_password(&OsRandom, 32, &pool).unwrap().chars());
    }
    assert_eq!(seen.len(), pool.chars().count());
}
