use crate::listing::filter::ClaimFilter;

pub const CARDS_PER_PAGE: u32 = 15;

/// Request variables for one page of the card list, derived on every render
/// from externally-owned navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardListQuery {
    pub collective_id: i64,
    pub is_confirmed: Option<bool>,
    pub offset: u32,
    pub limit: u32,
}

/// Offset falls back to 0 when absent or unparseable; a missing or zero limit
/// override falls back to the page size. The offset is not validated against
/// the total.
pub fn derive_list_query(
    collective_id: i64,
    filter_param: Option<&str>,
    offset_param: Option<&str>,
    limit_override: Option<u32>,
) -> CardListQuery {
    CardListQuery {
        collective_id,
        is_confirmed: ClaimFilter::from_query_param(filter_param).is_confirmed(),
        offset: offset_param
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0),
        limit: limit_override
            .filter(|limit| *limit > 0)
            .unwrap_or(CARDS_PER_PAGE),
    }
}
