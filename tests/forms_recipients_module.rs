use giftdesk::forms::{split_recipient_input, validate, validate_with};

fn entries(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn recipients_module_partitions_without_dropping_entries() {
    let input = entries(&["a@x.com", "not-an-email", "b@x.com"]);
    let batch = validate(&input);

    assert_eq!(batch.len(), 3);
    assert_eq!(batch.addresses(), input);
    assert_eq!(batch.invalid, vec!["not-an-email".to_string()]);
    assert!(batch.entries[0].valid);
    assert!(!batch.entries[1].valid);
    assert!(batch.entries[2].valid);
}

#[test]
fn recipients_module_keeps_input_order_for_invalids() {
    let input = entries(&["bad-one", "a@x.com", "bad-two"]);
    let batch = validate(&input);

    assert_eq!(
        batch.invalid,
        vec!["bad-one".to_string(), "bad-two".to_string()]
    );
}

#[test]
fn recipients_module_is_idempotent_over_addresses() {
    let input = entries(&["a@x.com", "nope", "b@x.com"]);
    let once = validate(&input);
    let twice = validate(&once.addresses());

    assert_eq!(once, twice);
}

#[test]
fn recipients_module_passes_duplicates_through() {
    let input = entries(&["a@x.com", "a@x.com"]);
    let batch = validate(&input);

    assert_eq!(batch.len(), 2);
    assert!(batch.invalid.is_empty());
}

#[test]
fn recipients_module_accepts_injected_predicate() {
    let input = entries(&["keep", "drop"]);
    let batch = validate_with(&input, |raw| raw == "keep");

    assert_eq!(batch.invalid, vec!["drop".to_string()]);
    assert_eq!(batch.addresses(), input);
}

#[test]
fn recipients_module_splits_free_text_input() {
    assert_eq!(
        split_recipient_input("a@x.com, b@x.com;c@x.com\nd@x.com"),
        entries(&["a@x.com", "b@x.com", "c@x.com", "d@x.com"])
    );
    assert!(split_recipient_input("  ,;  ").is_empty());
}
