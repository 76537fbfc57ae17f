#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use memchr::memmem;

#[derive(Arbitrary, Debug)]
struct Case<'a> {
    patterns: Vec<&'a str>,
    text: &'a [u8],
}

fuzz_target!(|case: Case<'_>| {
    // Build over arbitrary patterns; empty ones must error, never panic
    let automaton = match keyscan::matcher::build(&case.patterns) {
        Ok(a) => a,
        Err(_) => {
            assert!(case.patterns.iter().any(|p| p.is_empty()));
            return;
        }
    };

    let report = keyscan::matcher::search(&automaton, case.text);

    // Cross-check every reported pattern against a naive overlapping scan
    for hits in &report {
        let needle = hits.pattern.as_bytes();
        let mut expected = 0usize;
        let mut from = 0usize;
        while let Some(pos) = memmem::find(&case.text[from..], needle) {
            expected += 1;
            from += pos + 1;
        }
        assert_eq!(hits.count, expected, "count mismatch for {:?}", hits.pattern);
        for &(start, end) in &hits.occurrences {
            assert_eq!(&case.text[start..=end], needle);
        }
    }

    // Graph export is read-only; it must not disturb a later scan
    let _ = keyscan::graph::export(&automaton).to_dot();
    assert_eq!(keyscan::matcher::search(&automaton, case.text), report);
});
