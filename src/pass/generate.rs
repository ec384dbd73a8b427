//! Password generation.

use std::io::{self, Write};

use rand::Rng;
use zeroize::Zeroize;

use super::{GenerationConfig, charset};

/// Generate a single password using the thread-local RNG.
pub fn generate(config: &GenerationConfig) -> String {
    generate_with(config, &mut rand::rng())
}

/// Generate a single password drawing from `rng`.
///
/// Each position is sampled independently and uniformly from the charset,
/// with replacement.
pub fn generate_with<R: Rng>(config: &GenerationConfig, rng: &mut R) -> String {
    let chars = charset::build(config);
    let mut buf = Vec::with_capacity(config.output_len());
    fill(&chars, config.output_len(), rng, &mut buf);
    tracing::debug!(
        length = config.length,
        charset = chars.len(),
        "generated password"
    );
    // Safety: charset is all ASCII
    unsafe { String::from_utf8_unchecked(buf) }
}

/// Largest buffer `generate_joined` reserves up front.
const MAX_PRESIZE: usize = 1 << 24;

/// Write `count` newline-terminated passwords to `out`.
/// Each line is zeroized once written.
pub fn generate_batch<W: Write>(
    config: &GenerationConfig,
    count: usize,
    out: &mut W,
) -> io::Result<()> {
    let chars = charset::build(config);
    let mut rng = rand::rng();
    let mut buf = Vec::with_capacity(config.output_len() + 1);

    for _ in 0..count {
        fill(&chars, config.output_len(), &mut rng, &mut buf);
        buf.push(b'\n');
        let written = out.write_all(&buf);
        buf.zeroize();
        written?;
    }
    out.flush()
}

/// Generate `count` passwords joined by newlines (clipboard payload).
/// Caller owns the returned string and should zeroize it.
pub fn generate_joined(config: &GenerationConfig, count: usize) -> String {
    let chars = charset::build(config);
    let mut rng = rand::rng();
    let mut line = Vec::with_capacity(config.output_len());
    let mut joined = Vec::with_capacity(joined_capacity(config.output_len(), count));

    for i in 0..count {
        if i > 0 {
            joined.push(b'\n');
        }
        fill(&chars, config.output_len(), &mut rng, &mut line);
        joined.extend_from_slice(&line);
    }
    line.zeroize();
    // Safety: charset is all ASCII
    unsafe { String::from_utf8_unchecked(joined) }
}

/// Bytes needed for `count` lines of `length` plus separators, clamped so a
/// huge count never overflows or reserves an absurd buffer.
fn joined_capacity(length: usize, count: usize) -> usize {
    length
        .saturating_add(1)
        .saturating_mul(count)
        .min(MAX_PRESIZE)
}

#[inline]
fn fill<R: Rng>(chars: &[u8], length: usize, rng: &mut R, buf: &mut Vec<u8>) {
    buf.clear();
    buf.extend((0..length).map(|_| random_byte(chars, rng)));
}

#[inline]
fn random_byte<R: Rng>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.random_range(0..chars.len())]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const FULL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

    fn config(
        length: i32,
        upper: bool,
        lower: bool,
        numbers: bool,
        symbols: bool,
    ) -> GenerationConfig {
        GenerationConfig {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn eight_chars_from_full_set() {
        let pass = generate(&config(8, true, true, true, true));
        assert_eq!(pass.len(), 8);
        assert!(pass.chars().all(|c| FULL.contains(c)));
    }

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(generate(&config(0, true, true, false, false)), "");
    }

    #[test]
    fn negative_length_is_empty() {
        assert_eq!(generate(&config(-5, true, true, true, true)), "");
    }

    #[test]
    fn no_classes_uses_full_set() {
        let pass = generate(&config(5, false, false, false, false));
        assert_eq!(pass.len(), 5);
        assert!(pass.chars().all(|c| FULL.contains(c)));
    }

    #[test]
    fn lowercase_only() {
        let pass = generate(&config(16, false, true, false, false));
        assert_eq!(pass.len(), 16);
        assert!(pass.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn every_combination_respects_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(7);
        for bits in 0u8..16 {
            let c = config(
                i32::from(bits) + 1,
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
            );
            let pool = charset::build(&c);
            let pass = generate_with(&c, &mut rng);
            assert_eq!(pass.len(), c.output_len());
            assert!(pass.bytes().all(|b| pool.contains(&b)), "flags {bits:04b}: {pass}");
        }
    }

    #[test]
    fn same_seed_same_password() {
        let c = config(16, true, true, true, true);
        let a = generate_with(&c, &mut StdRng::seed_from_u64(42));
        let b = generate_with(&c, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_calls_differ() {
        let c = config(8, true, true, true, true);
        let seen: HashSet<String> = (0..50).map(|_| generate(&c)).collect();
        // 72^8 outcomes; collisions across 50 draws are practically impossible.
        assert!(seen.len() > 45);
    }

    #[test]
    fn draws_cover_the_whole_pool() {
        let c = config(16, true, true, true, true);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.extend(generate_with(&c, &mut rng).bytes());
        }
        assert_eq!(seen.len(), 72);
    }

    #[test]
    fn batch_writes_one_password_per_line() {
        let mut out = Vec::new();
        generate_batch(&config(12, false, false, true, false), 3, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 12 && l.bytes().all(|b| b.is_ascii_digit())));
    }

    #[test]
    fn joined_has_no_trailing_newline() {
        let joined = generate_joined(&config(4, true, false, false, false), 2);
        assert_eq!(joined.len(), 9);
        assert_eq!(joined.matches('\n').count(), 1);
        assert!(!joined.ends_with('\n'));
    }

    #[test]
    fn joined_zero_count_is_empty() {
        assert_eq!(generate_joined(&GenerationConfig::all(8), 0), "");
    }

    #[test]
    fn joined_capacity_saturates() {
        assert_eq!(joined_capacity(8, 3), 27);
        assert_eq!(joined_capacity(8, usize::MAX / 4), MAX_PRESIZE);
        assert_eq!(joined_capacity(usize::MAX, 2), MAX_PRESIZE);
    }

    #[test]
    fn concurrent_callers() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| generate(&GenerationConfig::all(16))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 16);
        }
    }
}
