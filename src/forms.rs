// src/forms.rs
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

/// Decode `a=1&b=two` pairs. Later duplicates win.
pub fn parse_pairs(input: &str) -> HashMap<String, String> {
    form_urlencoded::parse(input.as_bytes())
        .into_owned()
        .collect()
}

pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri().query().map(parse_pairs).unwrap_or_default()
}

/// Largest form body read; anything past it is ignored.
pub const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Read and decode an `application/x-www-form-urlencoded` body.
/// Invalid UTF-8 is decoded lossily rather than rejected.
pub fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(form_urlencoded::parse(&body).into_owned().collect())
}
