use giftdesk::listing::{
    derive_list_query, empty_list_message, CardListQuery, ClaimFilter, ListController,
    CARDS_PER_PAGE,
};

#[test]
fn listing_controller_module_derives_defaults() {
    let query = derive_list_query(42, None, None, None);
    assert_eq!(
        query,
        CardListQuery {
            collective_id: 42,
            is_confirmed: None,
            offset: 0,
            limit: CARDS_PER_PAGE,
        }
    );
}

#[test]
fn listing_controller_module_derives_filter_and_offset_from_navigation() {
    let query = derive_list_query(42, Some("claimed"), Some("30"), Some(10));
    assert_eq!(query.is_confirmed, Some(true));
    assert_eq!(query.offset, 30);
    assert_eq!(query.limit, 10);

    let unparseable = derive_list_query(42, Some("xyz"), Some("soon"), None);
    assert_eq!(unparseable.is_confirmed, Some(false));
    assert_eq!(unparseable.offset, 0);
}

#[test]
fn listing_controller_module_zero_limit_override_uses_page_size() {
    let query = derive_list_query(42, None, None, Some(0));
    assert_eq!(query.limit, CARDS_PER_PAGE);
}

#[test]
fn listing_controller_module_filter_change_is_last_write_wins() {
    let mut controller = ListController::from_navigation(42, None, Some("15"), None);

    let first = controller.request_filter_change(Some(true));
    let second = controller.request_filter_change(Some(false));
    assert_eq!(first.is_confirmed, Some(true));
    assert_eq!(second.is_confirmed, Some(false));
    assert_eq!(controller.query().is_confirmed, Some(false));
    // plain filter replacement keeps the current offset
    assert_eq!(controller.query().offset, 15);
}

#[test]
fn listing_controller_module_filter_links_reset_offset() {
    let mut controller = ListController::from_navigation(42, Some("claimed"), Some("45"), None);

    let query = controller.select_filter(ClaimFilter::Unclaimed);
    assert_eq!(query.offset, 0);
    assert_eq!(query.is_confirmed, Some(false));
    assert_eq!(controller.filter(), ClaimFilter::Unclaimed);
}

#[test]
fn listing_controller_module_pages_clamp_at_both_ends() {
    let mut controller = ListController::from_navigation(42, None, None, Some(10));

    assert!(controller.prev_page().is_none());

    let next = controller.next_page(25).expect("second page exists");
    assert_eq!(next.offset, 10);
    let next = controller.next_page(25).expect("third page exists");
    assert_eq!(next.offset, 20);
    assert!(controller.next_page(25).is_none());

    let back = controller.prev_page().expect("second page again");
    assert_eq!(back.offset, 10);
}

#[test]
fn listing_controller_module_empty_message_is_keyed_by_filter() {
    assert_eq!(empty_list_message(None), "Create your first gift card!");
    assert_eq!(empty_list_message(Some(true)), "No gift card claimed yet");
    assert_eq!(empty_list_message(Some(false)), "No unclaimed gift card");
}
