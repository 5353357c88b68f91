use super::types::{BatchCreatedData, CardListPage, CodeBatchBody, InviteBatchBody, PaymentMethod};
use super::ApiError;
use crate::config::Settings;
use crate::forms::{CardBatchReceipt, CodesDraft, InviteDraft};
use crate::listing::CardListQuery;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct PlatformClient {
    api_base: String,
    api_token: String,
    currency: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiEnvelope<T> {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    data: T,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PaymentMethodsData {
    #[serde(default)]
    payment_methods: Vec<PaymentMethod>,
}

#[derive(Debug, Clone, Deserialize)]
struct CardListData {
    #[serde(flatten)]
    page: CardListPage,
}

fn accept<T>(envelope: ApiEnvelope<T>, context: &str) -> Result<T, ApiError> {
    if envelope.ok {
        Ok(envelope.data)
    } else {
        Err(ApiError::Response(
            envelope
                .error
                .unwrap_or_else(|| format!("{context} failed")),
        ))
    }
}

impl PlatformClient {
    pub fn new(settings: &Settings) -> Self {
        let api_base = std::env::var("GIFTDESK_API_BASE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| settings.api_base.clone());
        Self {
            api_base,
            api_token: settings.api_token.clone(),
            currency: settings.currency.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path)
    }

    fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut url = self.endpoint(path);
        if !query.is_empty() {
            let encoded = query
                .iter()
                .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url = format!("{url}?{encoded}");
        }

        let response = ureq::get(&url)
            .set("Authorization", &format!("Bearer {}", self.api_token))
            .call()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        response
            .into_json::<T>()
            .map_err(|e| ApiError::Request(e.to_string()))
    }

    fn post_json<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let response = ureq::post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_token))
            .send_json(serde_json::to_value(body).map_err(|e| ApiError::Request(e.to_string()))?)
            .map_err(|e| ApiError::Request(e.to_string()))?;

        response
            .into_json::<T>()
            .map_err(|e| ApiError::Request(e.to_string()))
    }

    /// Funding sources available on the collective. An empty result means the
    /// creation forms cannot be shown.
    pub fn fetch_payment_methods(
        &self,
        collective_id: i64,
    ) -> Result<Vec<PaymentMethod>, ApiError> {
        let envelope: ApiEnvelope<PaymentMethodsData> = self.get(
            &format!("v1/collectives/{collective_id}/payment-methods"),
            &[],
        )?;
        Ok(accept(envelope, "payment method lookup")?.payment_methods)
    }

    pub fn fetch_gift_cards(&self, query: &CardListQuery) -> Result<CardListPage, ApiError> {
        let mut params = vec![
            ("offset", query.offset.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(is_confirmed) = query.is_confirmed {
            params.push(("isConfirmed", is_confirmed.to_string()));
        }
        let envelope: ApiEnvelope<CardListData> = self.get(
            &format!("v1/collectives/{}/gift-cards", query.collective_id),
            &params,
        )?;
        Ok(accept(envelope, "gift card listing")?.page)
    }

    pub fn create_invite_batch(
        &self,
        collective_id: i64,
        draft: &InviteDraft,
    ) -> Result<CardBatchReceipt, ApiError> {
        let body = InviteBatchBody {
            amount: draft.amount,
            currency: self.currency.clone(),
            emails: draft.emails.clone(),
            custom_message: draft.custom_message.clone(),
        };
        let envelope: ApiEnvelope<BatchCreatedData> = self.post_json(
            &format!("v1/collectives/{collective_id}/gift-cards"),
            &body,
        )?;
        let data = accept(envelope, "gift card creation")?;
        Ok(CardBatchReceipt {
            created: data.created,
        })
    }

    pub fn create_code_batch(
        &self,
        collective_id: i64,
        draft: &CodesDraft,
    ) -> Result<CardBatchReceipt, ApiError> {
        let body = CodeBatchBody {
            amount: draft.amount,
            currency: self.currency.clone(),
            count: draft.count,
        };
        let envelope: ApiEnvelope<BatchCreatedData> = self.post_json(
            &format!("v1/collectives/{collective_id}/gift-cards"),
            &body,
        )?;
        let data = accept(envelope, "gift card creation")?;
        Ok(CardBatchReceipt {
            created: data.created,
        })
    }
}
