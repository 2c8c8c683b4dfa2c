//! Simulated transaction receipt: hash and earned points.

use crate::config::{EARNED_POINTS_SPAN, MIN_EARNED_POINTS};
use crate::sim_rng::RandomSource;

const HEX: &[u8; 16] = b"0123456789abcdef";
const TX_HASH_DIGITS: usize = 64;

/// `0x` followed by 64 random lowercase hex digits.
pub fn generate_tx_hash<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let mut hash = String::with_capacity(2 + TX_HASH_DIGITS);
    hash.push_str("0x");
    for _ in 0..TX_HASH_DIGITS {
        hash.push(HEX[rng.pick_index(HEX.len())] as char);
    }
    hash
}

/// First six characters, an ellipsis, then the last four (`0x7a3f...c912`).
pub fn short_hash(hash: &str) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= 10 {
        return hash.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Uniform in `10..=29`.
pub fn draw_earned_points<R: RandomSource + ?Sized>(rng: &mut R) -> u32 {
    MIN_EARNED_POINTS + rng.pick_index(EARNED_POINTS_SPAN) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim_rng::{ScriptedRandom, SimRng};

    #[test]
    fn test_tx_hash_shape() {
        let mut rng = SimRng::from_seed_u64(5);
        let hash = generate_tx_hash(&mut rng);
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_short_hash() {
        let hash = format!("0x7a3f{}c912", "0".repeat(56));
        assert_eq!(short_hash(&hash), "0x7a3f...c912");
        assert_eq!(short_hash("0xabc"), "0xabc");
    }

    #[test]
    fn test_earned_points_bounds() {
        let mut low = ScriptedRandom::new([0.0]);
        let mut high = ScriptedRandom::new([0.999_999]);
        assert_eq!(draw_earned_points(&mut low), 10);
        assert_eq!(draw_earned_points(&mut high), 29);

        let mut rng = SimRng::from_seed_u64(9);
        for _ in 0..1_000 {
            let pts = draw_earned_points(&mut rng);
            assert!((10..=29).contains(&pts));
        }
    }
}
