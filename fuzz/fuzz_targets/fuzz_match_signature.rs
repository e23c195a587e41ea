#![no_main]

use fsniff::{SignatureRegistry, classify, match_signature};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let registry = SignatureRegistry::with_seed_signatures().unwrap();
    let outcome = match_signature(data, &registry);
    if let Some(label) = outcome.label() {
        let _ = classify(label.as_str());
    }
});
