//! Tests for the full pipeline over the textual definition format: parse an NFA definition,
//! convert it, export the DFA definition and recognize a word list.

use nfa2dfa::{write_dfa, NfaDefinition};

const NFA_DEFINITION: &str = "\
q0 q1 q2
q0
q2
q0 0 q0
q0 0 q1
q0 1 q0
q1 1 q2
";

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_pipeline_produces_expected_dfa_definition() {
    init();
    let dfa = NfaDefinition::parse(NFA_DEFINITION)
        .unwrap()
        .into_nfa()
        .unwrap()
        .to_dfa()
        .unwrap();

    let mut out = Vec::new();
    write_dfa(&dfa, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "\
q0 q0q1 q0q2
q0
q0q2
q0 0 q0q1
q0 1 q0
q0q1 0 q0q1
q0q1 1 q0q2
q0q2 0 q0q1
q0q2 1 q0
"
    );
}

#[test]
fn test_exported_definition_round_trips_as_nfa() {
    init();
    // A DFA is a special case of an NFA, so its exported definition parses and converts again
    // without changing the language.
    let dfa = NfaDefinition::parse(NFA_DEFINITION)
        .unwrap()
        .into_nfa()
        .unwrap()
        .to_dfa()
        .unwrap();
    let mut out = Vec::new();
    write_dfa(&dfa, &mut out).unwrap();
    let reparsed = NfaDefinition::parse(&String::from_utf8(out).unwrap())
        .unwrap()
        .into_nfa()
        .unwrap();
    let again = reparsed.to_dfa().unwrap();
    for word in ["", "0", "1", "01", "00", "0101", "0111110", "012"] {
        assert_eq!(dfa.accepts(word), again.accepts(word), "word '{}'", word);
    }
}

#[test]
fn test_recognition_report() {
    init();
    let dfa = NfaDefinition::parse(NFA_DEFINITION)
        .unwrap()
        .into_nfa()
        .unwrap()
        .to_dfa()
        .unwrap();
    let report: Vec<String> = dfa
        .recognize(["101", "1100", "010101", "", "012"])
        .iter()
        .map(|r| r.to_string())
        .collect();
    assert_eq!(
        report,
        vec![
            "101 accepted",
            "1100 not accepted",
            "010101 accepted",
            "ε not accepted",
            "012 not accepted",
        ]
    );
}
