use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A funding source configured on the collective. Issued cards draw from the
/// first one; choosing between several is the platform's concern.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub balance: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GiftCard {
    pub id: i64,
    pub name: String,
    /// Absent for claim-later cards until someone redeems the code.
    #[serde(default)]
    pub recipient_email: Option<String>,
    #[serde(default)]
    pub is_confirmed: bool,
    pub initial_balance: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
}

/// One page of the issued-card list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardListPage {
    pub offset: u32,
    pub limit: u32,
    pub total: u32,
    #[serde(default)]
    pub cards: Vec<GiftCard>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InviteBatchBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    pub currency: String,
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CodeBatchBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    pub currency: String,
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchCreatedData {
    pub created: usize,
}
