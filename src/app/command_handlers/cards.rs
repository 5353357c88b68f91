use crate::api::PlatformClient;
use crate::config::load_settings;
use crate::listing::filter::ClaimFilter;
use crate::listing::query::derive_list_query;
use crate::listing::screens::render_card_list_text;

/// `giftdesk list [filter] [offset]` — the positional arguments stand in for
/// the navigation query parameters and go through the same decoding.
pub(crate) fn cmd_list_cards(args: &[String]) -> Result<String, String> {
    let settings = load_settings().map_err(|e| e.to_string())?;
    let client = PlatformClient::new(&settings);

    let filter_param = args.first().map(String::as_str);
    let offset_param = args.get(1).map(String::as_str);
    let query = derive_list_query(
        settings.collective_id,
        filter_param,
        offset_param,
        settings.page_limit,
    );
    let page = client.fetch_gift_cards(&query).map_err(|e| e.to_string())?;
    Ok(render_card_list_text(
        &settings.collective_slug,
        ClaimFilter::from_is_confirmed(query.is_confirmed),
        &page,
    ))
}
