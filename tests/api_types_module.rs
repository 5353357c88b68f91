use giftdesk::api::{CardListPage, GiftCard, PaymentMethod};

#[test]
fn api_types_module_parses_camel_case_gift_cards() {
    let card: GiftCard = serde_json::from_str(
        r#"{
            "id": 1871,
            "name": "Gift card from webpack",
            "recipientEmail": "a@x.com",
            "isConfirmed": true,
            "initialBalance": 5000,
            "currency": "USD",
            "createdAt": "2019-03-01T10:00:00Z",
            "expiryDate": "2020-03-01T10:00:00Z"
        }"#,
    )
    .expect("parse gift card");

    assert_eq!(card.id, 1871);
    assert_eq!(card.recipient_email.as_deref(), Some("a@x.com"));
    assert!(card.is_confirmed);
    assert!(card.expiry_date.is_some());
}

#[test]
fn api_types_module_defaults_optional_card_fields() {
    let card: GiftCard = serde_json::from_str(
        r#"{
            "id": 1,
            "name": "Gift card",
            "initialBalance": 500,
            "currency": "EUR",
            "createdAt": "2019-03-01T10:00:00Z"
        }"#,
    )
    .expect("parse minimal gift card");

    assert_eq!(card.recipient_email, None);
    assert!(!card.is_confirmed);
    assert_eq!(card.expiry_date, None);
}

#[test]
fn api_types_module_parses_list_pages() {
    let page: CardListPage = serde_json::from_str(
        r#"{
            "offset": 15,
            "limit": 15,
            "total": 32,
            "cards": [{
                "id": 2,
                "name": "Gift card",
                "initialBalance": 500,
                "currency": "USD",
                "createdAt": "2019-03-01T10:00:00Z"
            }]
        }"#,
    )
    .expect("parse page");

    assert_eq!(page.total, 32);
    assert_eq!(page.cards.len(), 1);
}

#[test]
fn api_types_module_parses_payment_methods() {
    let method: PaymentMethod = serde_json::from_str(
        r#"{"id": 9, "name": "4242", "service": "stripe", "balance": 100000}"#,
    )
    .expect("parse payment method");

    assert_eq!(method.name, "4242");
    assert_eq!(method.service.as_deref(), Some("stripe"));

    let bare: PaymentMethod =
        serde_json::from_str(r#"{"id": 9, "name": "4242"}"#).expect("parse bare method");
    assert_eq!(bare.service, None);
    assert_eq!(bare.balance, None);
}
