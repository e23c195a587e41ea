//! Property tests for the signature matcher

use fsniff::domain::entities::Category;
use fsniff::domain::services::{
    MatchOutcome, SignatureRegistry, classify, classify_outcome, match_signature,
};
use proptest::prelude::*;

fn seeded() -> SignatureRegistry {
    SignatureRegistry::with_seed_signatures().unwrap()
}

fn seeded_entries() -> Vec<(Vec<u8>, String)> {
    seeded()
        .iter()
        .map(|(signature, label)| (signature.as_bytes().to_vec(), label.as_str().to_string()))
        .collect()
}

proptest! {
    #[test]
    fn signature_prefix_matches_its_label(
        index in 0usize..8,
        tail in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let registry = seeded();
        let (signature, label) = &seeded_entries()[index];
        let mut buffer = signature.clone();
        buffer.extend_from_slice(&tail);

        let outcome = match_signature(&buffer, &registry);
        prop_assert_eq!(outcome.label().map(|l| l.as_str()), Some(label.as_str()));
    }

    #[test]
    fn buffers_shorter_than_every_signature_never_match(
        buffer in proptest::collection::vec(any::<u8>(), 0..3),
    ) {
        let registry = seeded();
        let shortest = registry.iter().map(|(s, _)| s.len()).min().unwrap();
        prop_assume!(buffer.len() < shortest);

        let outcome = match_signature(&buffer, &registry);
        if buffer.is_empty() {
            prop_assert_eq!(outcome, MatchOutcome::Empty);
        } else {
            prop_assert_eq!(outcome, MatchOutcome::NoMatch);
        }
    }

    #[test]
    fn matcher_never_panics(buffer in proptest::collection::vec(any::<u8>(), 0..32)) {
        let registry = seeded();
        let outcome = match_signature(&buffer, &registry);
        let category = classify_outcome(&outcome);
        if outcome == MatchOutcome::NoMatch || outcome == MatchOutcome::Empty {
            prop_assert_eq!(category, Category::Unknown);
        } else {
            prop_assert_ne!(category, Category::Unknown);
        }
    }

    #[test]
    fn matched_label_is_a_registered_prefix(buffer in proptest::collection::vec(any::<u8>(), 1..16)) {
        let registry = seeded();
        if let MatchOutcome::Matched(label) = match_signature(&buffer, &registry) {
            let prefix_found = registry
                .iter()
                .any(|(signature, l)| l == &label && buffer.starts_with(signature.as_bytes()));
            prop_assert!(prefix_found);
        }
    }

    #[test]
    fn classify_is_deterministic(label in "[a-z0-9]{0,8}") {
        prop_assert_eq!(classify(&label), classify(&label));
    }

    #[test]
    fn overwrite_keeps_entry_count(index in 0usize..8, label in "[a-z]{1,8}") {
        let mut registry = seeded();
        let (signature, _) = &seeded_entries()[index];

        registry.put(signature, label.as_str()).unwrap();

        prop_assert_eq!(registry.len(), 8);
        prop_assert_eq!(registry.get(signature).unwrap().as_str(), label.as_str());
    }
}
