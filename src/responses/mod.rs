pub mod css;
pub mod errors;
pub mod html;
pub mod js;

pub use crate::errors::ResultResp;
pub use css::stylesheet_response;
pub use errors::html_error_response;
pub use html::html_response;
pub use js::script_response;
