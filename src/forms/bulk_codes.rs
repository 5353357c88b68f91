use crate::forms::numeric::{apply_numeric_edit, MIN_AMOUNT};
use crate::forms::{CardBatchReceipt, FormPhase};

pub const COUNT_FALLBACK: i64 = 1;

/// Field values for the claim-later form: a fixed number of cards issued
/// without recipient emails, distributed as unclaimed codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodesValues {
    pub amount: Option<i64>,
    pub count: i64,
}

impl Default for CodesValues {
    fn default() -> Self {
        Self {
            amount: None,
            count: COUNT_FALLBACK,
        }
    }
}

/// Snapshot handed to the creation call when a submit attempt starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodesDraft {
    pub amount: Option<i64>,
    pub count: i64,
}

/// By-count bulk-create form machine.
#[derive(Debug, Clone, Default)]
pub struct CodesForm {
    pub values: CodesValues,
    pub phase: FormPhase,
    pub submit_error: Option<String>,
}

impl CodesForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit_amount(&mut self, raw: &str) {
        self.values.amount = apply_numeric_edit(self.values.amount, raw, MIN_AMOUNT);
    }

    pub fn edit_count(&mut self, raw: &str) {
        if let Some(next) = apply_numeric_edit(Some(self.values.count), raw, COUNT_FALLBACK) {
            self.values.count = next;
        }
    }

    /// Only a count of exactly zero disables submission; keeping negatives
    /// out is the count prompt's job.
    pub fn is_submit_enabled(&self) -> bool {
        self.values.count != 0
    }

    pub fn begin_submit(&mut self, structurally_valid: bool) -> Option<CodesDraft> {
        if self.phase != FormPhase::Idle || !structurally_valid {
            return None;
        }
        self.phase = FormPhase::Submitting;
        self.submit_error = None;
        Some(CodesDraft {
            amount: self.values.amount,
            count: self.values.count,
        })
    }

    pub fn resolve_submit(&mut self, outcome: Result<CardBatchReceipt, String>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        match outcome {
            Ok(_) => self.phase = FormPhase::Completed,
            Err(message) => {
                self.phase = FormPhase::Idle;
                self.submit_error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_starts_at_fallback() {
        assert_eq!(CodesForm::new().values.count, 1);
    }

    #[test]
    fn amount_fallback_uses_minimum() {
        let mut form = CodesForm::new();
        form.edit_amount("oops");
        assert_eq!(form.values.amount, Some(MIN_AMOUNT));
    }
}
