//! Compiled custom route patterns.
//!
//! A registered route is a (path, action) pair: the path carries
//! parenthesized variables ("tag/(name)/"), the action carries optional
//! fixed parameters ("tag;sort=new"). Patterns are compiled here once, at
//! load or registration time, never per request.

use regex::Regex;
use thiserror::Error;

use crate::request::{decode, Params};

/// Why a route spec failed to compile.
#[derive(Debug, Error)]
#[error("route {path:?}: {kind}")]
pub struct PatternError {
    /// The registered path that failed.
    pub path: String,
    pub kind: PatternErrorKind,
}

#[derive(Debug, Error)]
pub enum PatternErrorKind {
    /// A `(` with no closing `)`.
    #[error("unclosed variable")]
    UnclosedVariable,

    /// No action name before the first `;`.
    #[error("empty action")]
    EmptyAction,

    #[error("{0}")]
    Regex(regex::Error),
}

/// The action side of a route spec: a name plus fixed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    name: String,
    params: Vec<(String, String)>,
}

impl ActionSpec {
    /// Split "tag;sort=new;draft" into the name "tag" and the parameters
    /// `sort=new` and `draft=""`. Values are percent-decoded.
    fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.split(';');
        let name = parts.next().unwrap_or_default().to_string();
        if name.is_empty() {
            return None;
        }

        let params = parts
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (key.to_string(), decode(value)),
                None => (part.to_string(), String::new()),
            })
            .collect();

        Some(Self { name, params })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

/// A compiled (path, action) route.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    path: String,
    /// Compiled matcher. The literal root path "/" has none: it matches
    /// exactly the empty request, so the site root is never shadowed by
    /// longer paths.
    regex: Option<Regex>,
    variables: Vec<String>,
    action: ActionSpec,
}

impl RoutePattern {
    /// Compile a registered path and action spec.
    ///
    /// Literal runs of the path are matched verbatim; each `(name)`
    /// becomes a capture of one-or-more non-slash characters. The match
    /// is anchored at the start of the request only, so a pattern matches
    /// any request it prefixes.
    pub fn compile(path: &str, action: &str) -> Result<Self, PatternError> {
        let fail = |kind| PatternError {
            path: path.to_string(),
            kind,
        };

        let action =
            ActionSpec::parse(action).ok_or_else(|| fail(PatternErrorKind::EmptyAction))?;

        if path == "/" {
            return Ok(Self {
                path: path.to_string(),
                regex: None,
                variables: Vec::new(),
                action,
            });
        }

        let mut source = String::from("^");
        let mut variables = Vec::new();
        let mut rest = path.trim_matches('/');

        while let Some(open) = rest.find('(') {
            source.push_str(&regex::escape(&rest[..open]));
            let tail = &rest[open + 1..];
            let close = tail
                .find(')')
                .ok_or_else(|| fail(PatternErrorKind::UnclosedVariable))?;
            variables.push(tail[..close].to_string());
            source.push_str("([^/]+)");
            rest = &tail[close + 1..];
        }
        source.push_str(&regex::escape(rest));

        let regex = Regex::new(&source).map_err(|err| fail(PatternErrorKind::Regex(err)))?;

        Ok(Self {
            path: path.to_string(),
            regex: Some(regex),
            variables,
            action,
        })
    }

    /// The registered path, which is also the registry key.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn action(&self) -> &ActionSpec {
        &self.action
    }

    /// Match the normalized request. On success the captured variables
    /// and the action's fixed parameters bind into `params`, and the
    /// action name is returned. A declared variable with no corresponding
    /// capture binds to "".
    pub fn apply(&self, request: &str, params: &mut Params) -> Option<&str> {
        match &self.regex {
            None => {
                if !request.is_empty() {
                    return None;
                }
            }
            Some(regex) => {
                let caps = regex.captures(request)?;
                for (index, variable) in self.variables.iter().enumerate() {
                    let value = caps
                        .get(index + 1)
                        .map(|m| decode(m.as_str()))
                        .unwrap_or_default();
                    params.insert(variable.clone(), value);
                }
            }
        }

        for (key, value) in &self.action.params {
            params.insert(key.clone(), value.clone());
        }

        Some(&self.action.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_variables_in_order() {
        let pattern = RoutePattern::compile("archive/(year)/(month)/", "archive").unwrap();
        assert_eq!(pattern.variables, vec!["year", "month"]);

        let mut params = Params::new();
        let action = pattern.apply("archive/2024/05", &mut params);
        assert_eq!(action, Some("archive"));
        assert_eq!(params.get("year").map(String::as_str), Some("2024"));
        assert_eq!(params.get("month").map(String::as_str), Some("05"));
    }

    #[test]
    fn matches_are_prefix_anchored() {
        let pattern = RoutePattern::compile("tag/(name)/", "tag").unwrap();
        let mut params = Params::new();

        assert!(pattern.apply("tag/rust/page/2", &mut params).is_some());
        assert!(pattern.apply("rust/tag", &mut Params::new()).is_none());
    }

    #[test]
    fn root_matches_only_the_empty_request() {
        let pattern = RoutePattern::compile("/", "index").unwrap();
        let mut params = Params::new();

        assert_eq!(pattern.apply("", &mut params), Some("index"));
        assert!(pattern.apply("tag/rust", &mut params).is_none());
        assert!(pattern.apply("x", &mut params).is_none());
    }

    #[test]
    fn captures_are_percent_decoded() {
        let pattern = RoutePattern::compile("tag/(name)/", "tag").unwrap();
        let mut params = Params::new();

        pattern.apply("tag/rust%20lang", &mut params);
        assert_eq!(params.get("name").map(String::as_str), Some("rust lang"));
    }

    #[test]
    fn action_params_bind_with_empty_default() {
        let pattern = RoutePattern::compile("tag/(name)/", "tag;sort=new;draft").unwrap();
        let mut params = Params::new();

        assert_eq!(pattern.apply("tag/rust", &mut params), Some("tag"));
        assert_eq!(params.get("sort").map(String::as_str), Some("new"));
        assert_eq!(params.get("draft").map(String::as_str), Some(""));
    }

    #[test]
    fn literal_segments_are_escaped() {
        let pattern = RoutePattern::compile("feed.xml/", "feed").unwrap();
        let mut params = Params::new();

        assert!(pattern.apply("feed.xml", &mut params).is_some());
        assert!(pattern.apply("feedAxml", &mut params).is_none());
    }

    #[test]
    fn unclosed_variable_is_rejected() {
        let err = RoutePattern::compile("tag/(name/", "tag").unwrap_err();
        assert!(matches!(err.kind, PatternErrorKind::UnclosedVariable));
        assert_eq!(err.path, "tag/(name/");
    }

    #[test]
    fn empty_action_is_rejected() {
        let err = RoutePattern::compile("tag/(name)/", ";sort=new").unwrap_err();
        assert!(matches!(err.kind, PatternErrorKind::EmptyAction));
    }
}
