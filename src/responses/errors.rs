use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML error page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),
        ServerError::BadRequest(msg) => render_error(400, &msg),
        ServerError::InternalError => render_error(500, "Internal Server Error"),
    }
}

fn render_error(status: u16, message: &str) -> Response {
    let body = error_page(status, message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
