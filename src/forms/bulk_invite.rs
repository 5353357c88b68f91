use crate::forms::numeric::{apply_numeric_edit, MIN_AMOUNT};
use crate::forms::recipients::validate;
use crate::forms::{CardBatchReceipt, FormPhase};

/// Field values for the by-invitation form. Each recipient receives their
/// card through an invitation email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteValues {
    pub amount: Option<i64>,
    pub recipients: Vec<String>,
    pub custom_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteErrors {
    pub recipients: Vec<String>,
}

/// Snapshot handed to the creation call when a submit attempt starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteDraft {
    pub amount: Option<i64>,
    pub emails: Vec<String>,
    pub custom_message: Option<String>,
}

/// By-invitation bulk-create form machine. Validation failures are carried as
/// data in `errors`; no operation here returns an error.
#[derive(Debug, Clone, Default)]
pub struct InviteForm {
    pub values: InviteValues,
    pub errors: InviteErrors,
    pub phase: FormPhase,
    pub submit_error: Option<String>,
}

impl InviteForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount edits keep the last parsed value; the first unparseable edit on
    /// an unset amount installs MIN_AMOUNT so the field never stays empty.
    /// The lower bound itself is the amount prompt's job.
    pub fn edit_amount(&mut self, raw: &str) {
        self.values.amount = apply_numeric_edit(self.values.amount, raw, MIN_AMOUNT);
    }

    /// Replaces recipients and their inline errors with the validator output.
    pub fn edit_recipients(&mut self, raw_entries: &[String]) {
        let batch = validate(raw_entries);
        self.values.recipients = batch.addresses();
        self.errors.recipients = batch.invalid;
    }

    /// Unconditional replace; the 255-char bound is the prompt's job.
    pub fn edit_custom_message(&mut self, text: &str) {
        self.values.custom_message = Some(text.to_string());
    }

    pub fn recipient_count(&self) -> usize {
        self.values.recipients.len()
    }

    /// Amount validity and funding-source presence are checked by the
    /// delegated structural check at submit time, not re-derived here.
    pub fn is_submit_enabled(&self) -> bool {
        !self.values.recipients.is_empty() && self.errors.recipients.is_empty()
    }

    /// Starts a submit attempt: no-op unless Idle and the delegated
    /// structural check passed, otherwise yields the snapshot to send.
    pub fn begin_submit(&mut self, structurally_valid: bool) -> Option<InviteDraft> {
        if self.phase != FormPhase::Idle || !structurally_valid {
            return None;
        }
        self.phase = FormPhase::Submitting;
        self.submit_error = None;
        Some(InviteDraft {
            amount: self.values.amount,
            emails: self.values.recipients.clone(),
            custom_message: self.values.custom_message.clone(),
        })
    }

    /// Applies the creation outcome. Outcomes delivered while not Submitting
    /// are stale and dropped.
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
