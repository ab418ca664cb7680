// src/tests/router_tests/listings_tests.rs

use crate::listings::PropertyStore;
use crate::router::AppContext;
use crate::tests::utils::{body_string, card_count, get, property, test_app};

#[test]
fn idle_page_lists_every_property() {
    let app = test_app();
    let mut resp = get(&app, "/");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(&mut resp);
    assert!(body.contains("Search Properties for rent"));
    assert_eq!(card_count(&body), 2);
    assert!(body.contains("value=\"apply\""));
    assert!(!body.contains("Remove Filter"));
    assert!(!body.contains("No properties found"));
}

#[test]
fn apply_filters_by_city_and_price() {
    let app = test_app();
    let mut resp = get(&app, "/?city=austin&price=1500&action=apply");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("data-id=\"austin-1\""));
    assert!(!body.contains("data-id=\"dallas-1\""));

    // Criteria stay in the inputs and the action flips.
    assert!(body.contains("value=\"austin\""));
    assert!(body.contains("value=\"1500\""));
    assert!(body.contains("Remove Filter"));
    assert!(!body.contains("value=\"apply\""));
    assert!(body.contains("Showing <strong>1</strong> of 2 properties."));
}

#[test]
fn zero_matches_show_no_results_indicator() {
    let app = test_app();
    let mut resp = get(&app, "/?price=500&action=apply");

    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 0);
    assert!(body.contains("No properties found"));
    assert!(body.contains("Remove Filter"));
}

#[test]
fn editing_without_apply_keeps_full_list() {
    let app = test_app();
    let mut resp = get(&app, "/?city=austin");

    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 2);
    assert!(body.contains("value=\"austin\""));
    assert!(body.contains("value=\"apply\""));
    assert!(body.contains("Press Apply to filter the list."));
    assert!(!body.contains("No properties found"));
}

#[test]
fn clear_resets_criteria_and_result() {
    let app = test_app();
    let mut resp = get(&app, "/?city=austin&price=1500&action=clear");

    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 2);
    assert!(!body.contains("value=\"austin\""));
    assert!(!body.contains("value=\"1500\""));
    assert!(body.contains("value=\"apply\""));
    assert!(!body.contains("filter-status"));
}

#[test]
fn city_match_ignores_case() {
    let app = test_app();
    let mut lower = get(&app, "/?city=austin&action=apply");
    let mut upper = get(&app, "/?city=AUSTIN&action=apply");

    let lower = body_string(&mut lower);
    let upper = body_string(&mut upper);
    assert_eq!(card_count(&lower), 1);
    assert_eq!(card_count(&upper), 1);
    assert!(upper.contains("data-id=\"austin-1\""));
}

#[test]
fn availability_and_type_filters() {
    let app = test_app();

    let mut resp = get(&app, "/?availableFrom=2024-02-01&action=apply");
    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("data-id=\"austin-1\""));

    let mut resp = get(&app, "/?propertyType=house&action=apply");
    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("data-id=\"dallas-1\""));
}

#[test]
fn garbage_price_and_date_do_not_filter() {
    let app = test_app();
    let mut resp = get(&app, "/?price=cheap&availableFrom=soon&action=apply");

    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 2);
    assert!(!body.contains("No properties found"));
}

#[test]
fn decodes_form_encoded_values() {
    let app = AppContext {
        store: PropertyStore::from_records(vec![
            property("sa-1", "San Antonio", 1000.0, "Town House", "2024-01-01"),
            property("au-1", "Austin", 1000.0, "Apartment", "2024-01-01"),
        ]),
        currency_symbol: "$".to_string(),
        htmx_script: None,
    };

    let mut resp = get(&app, "/?city=san+antonio&propertyType=Town%20House&action=apply");
    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("data-id=\"sa-1\""));
    assert!(body.contains("$1000/"));
}

#[test]
fn card_shows_listing_details() {
    let app = test_app();
    let mut resp = get(&app, "/");
    let body = body_string(&mut resp);

    assert!(body.contains("src=\"https://img.example/austin-1.jpg\""));
    assert!(body.contains("₹1200/<span class=\"per\">month</span>"));
    assert!(body.contains("Apartment austin-1"));
    assert!(body.contains("Austin , TX , USA"));
    assert!(body.contains("2 bedrooms"));
    assert!(body.contains("1 bathrooms"));
    assert!(body.contains("850 sqft"));
    assert!(body.contains("Available From :- Monday, January 1, 2024"));
}

#[test]
fn empty_store_renders_no_cards_and_no_indicator() {
    let app = AppContext {
        store: PropertyStore::default(),
        currency_symbol: "₹".to_string(),
        htmx_script: None,
    };
    let mut resp = get(&app, "/");

    let body = body_string(&mut resp);
    assert_eq!(resp.status(), 200);
    assert_eq!(card_count(&body), 0);
    assert!(!body.contains("No properties found"));
}

#[test]
fn applying_nothing_to_empty_store_shows_no_indicator() {
    let app = AppContext {
        store: PropertyStore::default(),
        currency_symbol: "₹".to_string(),
        htmx_script: None,
    };
    let mut resp = get(&app, "/?action=apply");

    let body = body_string(&mut resp);
    assert_eq!(resp.status(), 200);
    assert_eq!(card_count(&body), 0);
    assert!(!body.contains("No properties found"));
}

#[test]
fn applied_criteria_are_carried_in_the_form() {
    let app = test_app();
    let mut resp = get(&app, "/?city=austin&action=apply");

    let body = body_string(&mut resp);
    assert!(body.contains("name=\"applied\" value=\"1\""));
    assert!(body.contains("name=\"applied.city\" value=\"austin\""));
    assert!(body.contains("name=\"applied.price\" value=\"\""));

    // Nothing applied yet, nothing to carry.
    let mut resp = get(&app, "/?city=austin");
    assert!(!body_string(&mut resp).contains("name=\"applied\""));
}

#[test]
fn draft_edit_after_apply_keeps_filtered_result() {
    let app = test_app();
    let mut resp = get(
        &app,
        "/?city=dallas&availableFrom=&price=&propertyType=\
         &applied=1&applied.city=austin&applied.availableFrom=&applied.price=&applied.propertyType=",
    );

    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("data-id=\"austin-1\""));
    assert!(body.contains("value=\"dallas\""));
    assert!(body.contains("name=\"applied.city\" value=\"austin\""));
    assert!(body.contains("Remove Filter"));
    assert!(!body.contains("value=\"apply\""));
}

#[test]
fn apply_replaces_earlier_result_and_clear_drops_it() {
    let app = test_app();

    let mut resp = get(&app, "/?city=dallas&applied=1&applied.city=austin&action=apply");
    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("data-id=\"dallas-1\""));
    assert!(body.contains("name=\"applied.city\" value=\"dallas\""));

    let mut resp = get(&app, "/?city=dallas&applied=1&applied.city=austin&action=clear");
    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 2);
    assert!(!body.contains("name=\"applied\""));
    assert!(body.contains("value=\"apply\""));
}

#[test]
fn unknown_action_is_bad_request() {
    let app = test_app();
    let mut resp = get(&app, "/?action=sort");

    assert_eq!(resp.status(), 400);
    let body = body_string(&mut resp);
    assert!(body.contains("Unknown action &#39;sort&#39;") || body.contains("Unknown action 'sort'"));
}
