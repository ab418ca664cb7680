use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

pub fn script_response(script: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JAVASCRIPT_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=86400")
        .body(Body::from(script.to_owned()))
        .map_err(|_| ServerError::InternalError)
}
