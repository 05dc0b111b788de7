use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::{error, warn};

/// Convert a ServerError into a rendered HTML error page.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    if status >= 500 {
        error!("request failed: {err}");
    } else {
        warn!("request rejected: {err}");
    }

    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::Config(_)
        | ServerError::Xlsx(_)
        | ServerError::Json(_)
        | ServerError::InternalError => "Internal Server Error".to_string(),
    };

    html_error_response(status, &message)
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
