//! Greeting/farewell detection over raw whitespace tokens.

use chat_rules::TriggerSet;
use rand::seq::SliceRandom;
use rand::Rng;

/// Scan a raw line left to right for a trigger word; on the first hit,
/// return a reply drawn uniformly at random from the set's pool.
///
/// No lemmatization happens here: triggers must fire on the raw words,
/// before normalization could alter them. The first matching word decides;
/// later trigger words in the same line are never looked at.
pub fn detect(set: &TriggerSet, input: &str, rng: &mut impl Rng) -> Option<String> {
    for word in input.split_whitespace() {
        if set.contains(word) {
            return set.responses.choose(rng).cloned();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_match_returns_pool_member() {
        let set = TriggerSet::builtin_greetings();
        let mut rng = rand::thread_rng();

        let reply = detect(&set, "hello there", &mut rng).unwrap();
        assert!(set.responses.contains(&reply));
    }

    #[test]
    fn test_no_match_returns_none() {
        let set = TriggerSet::builtin_greetings();
        let mut rng = rand::thread_rng();

        assert!(detect(&set, "tell me about laptops", &mut rng).is_none());
        assert!(detect(&set, "", &mut rng).is_none());
    }

    #[test]
    fn test_case_insensitive_match() {
        let set = TriggerSet::builtin_farewells();
        let mut rng = rand::thread_rng();

        assert!(detect(&set, "BYE now", &mut rng).is_some());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let set = TriggerSet::builtin_greetings();

        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        assert_eq!(
            detect(&set, "hi", &mut a),
            detect(&set, "hi", &mut b)
        );
    }
}
