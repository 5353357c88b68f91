pub mod actions;
pub mod bulk_codes;
pub mod bulk_invite;
pub mod navigation;
pub mod numeric;
pub mod recipients;
pub mod screens;

pub use bulk_codes::{CodesDraft, CodesForm, CodesValues};
pub use bulk_invite::{InviteDraft, InviteForm, InviteValues};
pub use numeric::{apply_numeric_edit, MIN_AMOUNT};
pub use recipients::{
    split_recipient_input, validate, validate_with, RecipientBatch, RecipientEntry,
};

/// Submission lifecycle of one form instance. `Idle -> Submitting` is one-way
/// per attempt; an outcome moves the form to `Completed` or back to `Idle`
/// with the failure carried as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Completed,
}

impl FormPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Receipt returned by the platform once a bulk creation lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBatchReceipt {
    pub created: usize,
}
