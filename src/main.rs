use crate::config::Config;
use crate::listings::{ApiClient, FixtureSource, PropertyStore};
use crate::router::{handle, AppContext};
use astra::Server;
use log::{error, info, warn};
use std::fs;

mod config;
mod domain;
mod errors;
mod listings;
mod logger;
mod responses;
mod router;
mod templates;


fn main() {
    // 1️⃣ Read configuration and start logging
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logger::setup_logger(config.log_level) {
        eprintln!("❌ Logger initialization failed: {e}");
        std::process::exit(1);
    }

    // 2️⃣ Load the listings once; a failed load leaves the store empty
    let store = match &config.properties_file {
        Some(path) => PropertyStore::load(&FixtureSource::new(path)),
        None => match ApiClient::new(&config.listings_api_url) {
            Ok(client) => PropertyStore::load(&client),
            Err(e) => {
                error!("Could not build listings client: {e}");
                PropertyStore::default()
            }
        },
    };

    if store.is_empty() {
        warn!("No listings loaded; the page will show an empty list");
    }

    // 3️⃣ Read htmx from the static directory
    let htmx_path = config.static_dir.join("htmx.js");
    let htmx_script = match fs::read_to_string(&htmx_path) {
        Ok(script) => Some(script),
        Err(e) => {
            warn!("Could not read {}: {e}; inputs will not refresh live", htmx_path.display());
            None
        }
    };

    let app = AppContext {
        store,
        currency_symbol: config.currency_symbol.clone(),
        htmx_script,
    };

    // 4️⃣ Start the server
    info!(
        "Starting server at http://{} with {} properties",
        config.bind_addr,
        app.store.len()
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 5️⃣ Serve requests, passing the app context into closure
    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                warn!("{method} {path} failed: {err}");
                responses::html_error_response(err)
            }
        };

        info!("{method} {path} -> {}", resp.status().as_u16());
        resp
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
