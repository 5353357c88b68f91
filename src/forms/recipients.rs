use std::sync::OnceLock;

/// One recipient line as typed, plus whether it passed the syntax check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientEntry {
    pub address: String,
    pub valid: bool,
}

/// Validator output: every input entry in order, and the failing subset in
/// the same order. Nothing is dropped; invalid entries stay visible and only
/// block submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientBatch {
    pub entries: Vec<RecipientEntry>,
    pub invalid: Vec<String>,
}

impl RecipientBatch {
    pub fn addresses(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.address.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn email_syntax() -> &'static regex::Regex {
    static EMAIL_SYNTAX: OnceLock<regex::Regex> = OnceLock::new();
    EMAIL_SYNTAX
        .get_or_init(|| regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("email pattern"))
}

/// Default syntax predicate. Duplicates are not rejected here; the platform
/// deduplicates on its side.
pub fn looks_like_email(raw: &str) -> bool {
    email_syntax().is_match(raw)
}

pub fn validate(raw_entries: &[String]) -> RecipientBatch {
    validate_with(raw_entries, looks_like_email)
}

pub fn validate_with(raw_entries: &[String], is_valid: impl Fn(&str) -> bool) -> RecipientBatch {
    let mut entries = Vec::with_capacity(raw_entries.len());
    let mut invalid = Vec::new();
    for raw in raw_entries {
        let valid = is_valid(raw);
        if !valid {
            invalid.push(raw.clone());
        }
        entries.push(RecipientEntry {
            address: raw.clone(),
            valid,
        });
    }
    RecipientBatch { entries, invalid }
}

/// Splits the multi-email prompt input on commas, semicolons and whitespace,
/// trimming and dropping empty tokens.
pub fn split_recipient_input(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_recipient_input_trims_and_filters_empty() {
        assert_eq!(
            split_recipient_input(" a@x.com, b@x.com\n c@x.com ;"),
            vec![
                "a@x.com".to_string(),
                "b@x.com".to_string(),
                "c@x.com".to_string()
            ]
        );
    }

    #[test]
    fn looks_like_email_requires_local_at_dotted_domain() {
        assert!(looks_like_email("a@x.com"));
        assert!(looks_like_email("first.last@sub.domain.org"));
        assert!(!looks_like_email("not-an-email"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a b@x.com"));
        assert!(!looks_like_email("a@@x.com"));
    }
}
