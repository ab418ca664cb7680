use crate::domain::criteria::APPLIED_KEY;
use crate::domain::{CriteriaField, ListingState};
use crate::errors::ServerError;
use crate::listings::PropertyStore;
use crate::responses::{html_response, script_response, stylesheet_response, ResultResp};
use crate::templates::pages::{listings_page, ListingsVm};
use astra::Request;
use log::debug;
use std::collections::HashMap;

const ACTION_KEY: &str = "action";

/// Everything a request handler may read. Immutable once the server starts.
pub struct AppContext {
    pub store: PropertyStore,
    pub currency_symbol: String,
    /// Contents of `htmx.js`, if it was found at startup.
    pub htmx_script: Option<String>,
}

pub fn handle(req: Request, app: &AppContext) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => listings(&req, app),
        ("GET", "/static/main.css") => stylesheet_response(),
        ("GET", "/static/htmx.js") => match &app.htmx_script {
            Some(script) => script_response(script),
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn listings(req: &Request, app: &AppContext) -> ResultResp {
    let params = parse_query(req);
    let records = app.store.records();

    // Rebuild the earlier Apply, then layer the drafts on top.
    let state = if params.contains_key(APPLIED_KEY) {
        fill(ListingState::default(), &params, CriteriaField::applied_key).apply(records)
    } else {
        ListingState::default()
    };
    let state = fill(state, &params, CriteriaField::key);

    let state = match params.get(ACTION_KEY).map(String::as_str) {
        None | Some("") => state,
        Some("apply") => {
            let state = state.apply(records);
            debug!(
                "Applied {:?}: {} of {} properties matched",
                state.criteria(),
                state.filtered().map_or(0, |m| m.len()),
                records.len()
            );
            state
        }
        Some("clear") => state.clear(),
        Some(other) => {
            return Err(ServerError::BadRequest(format!("Unknown action '{other}'")));
        }
    };

    html_response(listings_page(&ListingsVm {
        state: &state,
        properties: records,
        currency_symbol: &app.currency_symbol,
    }))
}

/// Edits every field whose key is present; unknown keys are ignored.
fn fill(
    state: ListingState,
    params: &HashMap<String, String>,
    key: fn(CriteriaField) -> &'static str,
) -> ListingState {
    CriteriaField::ALL
        .iter()
        .fold(state, |state, field| match params.get(key(*field)) {
            Some(value) => state.edit(*field, value.as_str()),
            None => state,
        })
}

/// Decodes the query string; for repeated keys the last value wins.
fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
