//! Request parsing.
//!
//! # Responsibilities
//! - Strip the controller's base path (and an optional front-controller
//!   "/index.php") from the raw request URI
//! - Decompose the remainder into decoded argument tokens
//! - Decode the query string
//!
//! # Design Decisions
//! - The normalized request stays percent-encoded; captures and tokens
//!   decode at bind time
//! - A URI that does not start with the base path is kept unmodified

use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use url::Url;

/// Bound request parameters: query values, captured path variables and
/// fixed action parameters.
pub type Params = HashMap<String, String>;

/// Parser outputs consumed by the matcher and dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// Normalized request: base stripped, no surrounding slashes,
    /// still percent-encoded.
    pub request: String,

    /// Slash-delimited tokens of the request, percent-decoded.
    pub args: Vec<String>,

    /// Decoded query parameters.
    pub query: Params,

    /// Absolute URL of the incoming request.
    pub self_url: String,
}

/// Percent-decode one URI component. `+` decodes to a space, as form
/// encoding requires.
pub fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Parse a raw request URI (path plus optional query string) relative to
/// the controller's resolved base URL.
pub fn parse(uri: &str, base: &Url) -> ParsedRequest {
    let (path, query_str) = match uri.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (uri, None),
    };

    let query = query_str.map(parse_query).unwrap_or_default();

    let request = strip_base(path, base.path()).trim_matches('/').to_string();

    let args: Vec<String> = if request.is_empty() {
        Vec::new()
    } else {
        request.split('/').map(decode).collect()
    };

    let self_url = format!("{}{}", base.origin().ascii_serialization(), uri);

    ParsedRequest {
        request,
        args,
        query,
        self_url,
    }
}

/// Strip the base path, and an optional trailing "/index.php", from the
/// front of `path`. Falls back to the unmodified path when the base does
/// not prefix-match.
fn strip_base<'a>(path: &'a str, base_path: &str) -> &'a str {
    let base_path = base_path.trim_end_matches('/');

    let Some(rest) = path.strip_prefix(base_path) else {
        return path;
    };

    match rest.strip_prefix("/index.php") {
        Some(tail) if tail.is_empty() || tail.starts_with('/') => tail,
        _ => rest,
    }
}

fn parse_query(query: &str) -> Params {
    let mut params = Params::new();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        params.insert(decode(key), decode(value));
    }

    params
}
