/// Minimum card value, in the platform's base currency unit. The amount
/// prompt enforces this bound; the form machines only store what the prompt
/// lets through.
pub const MIN_AMOUNT: i64 = 5;

/// Edit policy shared by the amount and count fields: a parseable integer
/// replaces the value, an unparseable edit installs `fallback` when no value
/// exists yet and otherwise keeps the last parsed value.
pub fn apply_numeric_edit(current: Option<i64>, raw: &str, fallback: i64) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if current.is_none() => Some(fallback),
        Err(_) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parseable_input_replaces_value() {
        assert_eq!(apply_numeric_edit(None, "10", MIN_AMOUNT), Some(10));
        assert_eq!(apply_numeric_edit(Some(10), " 25 ", MIN_AMOUNT), Some(25));
    }

    #[test]
    fn unparseable_input_falls_back_only_when_unset() {
        assert_eq!(apply_numeric_edit(None, "abc", MIN_AMOUNT), Some(MIN_AMOUNT));
        assert_eq!(apply_numeric_edit(Some(10), "abc", MIN_AMOUNT), Some(10));
    }

    #[test]
    fn negative_values_pass_through() {
        assert_eq!(apply_numeric_edit(None, "-1", 1), Some(-1));
    }
}
