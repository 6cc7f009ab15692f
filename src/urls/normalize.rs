//! URL canonicalization.

use url::Url;

use crate::config::schema::RoutingConfig;
use crate::controller::Controller;
use crate::error::RouteError;

/// Absolute base URL for a controller: the site URL, or the engine URL
/// joined with the controller's own base path.
pub fn base_for(config: &RoutingConfig, controller: &dyn Controller) -> Result<Url, RouteError> {
    let raw = if controller.base().is_empty() {
        config.url.clone()
    } else {
        format!(
            "{}/{}",
            config.engine_url().trim_end_matches('/'),
            controller.base()
        )
    };

    Url::parse(&raw)
        .map_err(|err| RouteError::Configuration(format!("invalid base URL {raw:?}: {err}")))
}

/// Join `path_and_query` onto `base` and canonicalize: duplicate slashes
/// collapse, `.` and `..` segments resolve, the trailing slash and the
/// query string survive.
pub fn canonicalize(base: &Url, path_and_query: &str) -> String {
    let (path, query) = match path_and_query.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path_and_query, None),
    };

    let joined = format!("{}/{}", base.path(), path);
    let mut segments: Vec<&str> = Vec::new();

    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut out = base.origin().ascii_serialization();
    for segment in &segments {
        out.push('/');
        out.push_str(segment);
    }
    if path.ends_with('/') || segments.is_empty() {
        out.push('/');
    }
    if let Some(query) = query {
        out.push('?');
        out.push_str(query);
    }

    out
}
