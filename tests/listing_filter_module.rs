use giftdesk::listing::ClaimFilter;

#[test]
fn listing_filter_module_decodes_absent_and_all_as_everything() {
    assert_eq!(ClaimFilter::from_query_param(None), ClaimFilter::All);
    assert_eq!(ClaimFilter::from_query_param(Some("all")), ClaimFilter::All);
    assert_eq!(ClaimFilter::from_query_param(None).is_confirmed(), None);
}

#[test]
fn listing_filter_module_matches_claimed_exactly() {
    assert_eq!(
        ClaimFilter::from_query_param(Some("claimed")),
        ClaimFilter::Claimed
    );
    assert_eq!(
        ClaimFilter::from_query_param(Some("claimed")).is_confirmed(),
        Some(true)
    );
}

#[test]
fn listing_filter_module_reads_everything_else_as_unclaimed() {
    // "claimed" is an exact match; any other present value falls through
    for raw in ["unclaimed", "xyz", "Claimed", "CLAIMED", ""] {
        assert_eq!(
            ClaimFilter::from_query_param(Some(raw)),
            ClaimFilter::Unclaimed,
            "raw={raw:?}"
        );
        assert_eq!(
            ClaimFilter::from_query_param(Some(raw)).is_confirmed(),
            Some(false)
        );
    }
}

#[test]
fn listing_filter_module_round_trips_is_confirmed() {
    for filter in [
        ClaimFilter::All,
        ClaimFilter::Claimed,
        ClaimFilter::Unclaimed,
    ] {
        assert_eq!(ClaimFilter::from_is_confirmed(filter.is_confirmed()), filter);
    }
}

#[test]
fn listing_filter_module_encodes_link_values() {
    assert_eq!(ClaimFilter::All.as_str(), "all");
    assert_eq!(ClaimFilter::Claimed.as_str(), "claimed");
    assert_eq!(ClaimFilter::Unclaimed.as_str(), "unclaimed");
    assert_eq!(ClaimFilter::Claimed.to_string(), "claimed");
}
