use crate::listing::filter::ClaimFilter;
use crate::listing::query::{derive_list_query, CardListQuery};

/// Owns the current list request variables and produces the next query to
/// fetch when the filter or page changes. Fetching itself stays outside;
/// a second change before a fetch resolves simply issues a newer query
/// (last-write-wins, no cancellation of the stale one).
#[derive(Debug, Clone)]
pub struct ListController {
    query: CardListQuery,
}

impl ListController {
    pub fn new(query: CardListQuery) -> Self {
        Self { query }
    }

    pub fn from_navigation(
        collective_id: i64,
        filter_param: Option<&str>,
        offset_param: Option<&str>,
        limit_override: Option<u32>,
    ) -> Self {
        Self::new(derive_list_query(
            collective_id,
            filter_param,
            offset_param,
            limit_override,
        ))
    }

    pub fn query(&self) -> &CardListQuery {
        &self.query
    }

    pub fn filter(&self) -> ClaimFilter {
        ClaimFilter::from_is_confirmed(self.query.is_confirmed)
    }

    /// Replaces `isConfirmed` in the current variables and returns the query
    /// to refetch with.
    pub fn request_filter_change(&mut self, is_confirmed: Option<bool>) -> CardListQuery {
        self.query.is_confirmed = is_confirmed;
        self.query.clone()
    }

    /// Filter links always land on the first page.
    pub fn select_filter(&mut self, filter: ClaimFilter) -> CardListQuery {
        self.query.offset = 0;
        self.request_filter_change(filter.is_confirmed())
    }

    pub fn next_page(&mut self, total: u32) -> Option<CardListQuery> {
        let next = self.query.offset.saturating_add(self.query.limit);
        if next >= total {
            return None;
        }
        self.query.offset = next;
        Some(self.query.clone())
    }

    pub fn prev_page(&mut self) -> Option<CardListQuery> {
        if self.query.offset == 0 {
            return None;
        }
        self.query.offset = self.query.offset.saturating_sub(self.query.limit);
        Some(self.query.clone())
    }
}

/// The empty-state line is keyed by which filter produced the empty page,
/// not by the count alone.
pub fn empty_list_message(is_confirmed: Option<bool>) -> &'static str {
    match is_confirmed {
        None => "Create your first gift card!",
        Some(true) => "No gift card claimed yet",
        Some(false) => "No unclaimed gift card",
    }
}
