//! Fuzz target for branch name validation.
//!
//! Tests that the validator handles arbitrary input without panicking and
//! that accepted names survive a JSON round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use twig_types::BranchName;

fuzz_target!(|data: &[u8]| {
    let lossy = String::from_utf8_lossy(data);

    if let Ok(name) = BranchName::new(lossy.as_ref()) {
        assert!(!name.as_str().is_empty());
        assert!(!name.as_str().contains(".."));

        let json = serde_json::to_string(&name).expect("branch names serialize");
        let back: BranchName = serde_json::from_str(&json).expect("accepted names deserialize");
        assert_eq!(back, name);
    }

    // Arbitrary JSON must never panic the deserializer
    let _ = serde_json::from_slice::<BranchName>(data);
});
