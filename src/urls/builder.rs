//! Clean/dirty URL construction.
//!
//! # Responsibilities
//! - Turn a relative action path into an absolute URL
//! - Translate clean paths to dirty query strings when the routing mode
//!   requires it
//! - Synthesize feed variants for plugin-contributed translations
//!
//! # Design Decisions
//! - Translation is pattern-driven and best effort; round trips are not
//!   guaranteed for plugin-injected rules
//! - Exactly one rule applies per URL, the first that matches; a feed
//!   variant is checked before the rule it was derived from

use regex::Regex;

use crate::config::schema::RoutingConfig;
use crate::controller::Controller;
use crate::error::RouteError;
use crate::hooks::Hooks;
use crate::urls::normalize::{base_for, canonicalize};

/// One clean-to-dirty translation: a pattern over the clean path and its
/// query-string replacement.
#[derive(Debug, Clone)]
pub struct UrlRule {
    regex: Regex,
    replacement: String,
}

impl UrlRule {
    /// Compile a translation rule. The replacement may reference captures
    /// as `$1`, `$2`, ...
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The feed twin of this rule: the same path with a trailing "feed/"
    /// segment, marking the dirty form as a feed request.
    fn feed_variant(&self) -> Option<UrlRule> {
        let source = self.regex.as_str();

        // Keep an end anchor at the end; "feed/" goes in front of it.
        let (head, anchor) = match source.strip_suffix('$') {
            Some(head) if !head.ends_with('\\') => (head, "$"),
            _ => (source, ""),
        };

        let regex = Regex::new(&format!("{head}feed/{anchor}")).ok()?;

        Some(UrlRule {
            regex,
            replacement: format!("{}&feed", self.replacement),
        })
    }

    /// Single-segment fallback: "/tags/" becomes "/?action=tags".
    fn catch_all() -> UrlRule {
        UrlRule {
            regex: Regex::new("/([^/]+)/$").expect("catch-all pattern is valid"),
            replacement: "/?action=$1".to_string(),
        }
    }
}

impl PartialEq for UrlRule {
    fn eq(&self, other: &Self) -> bool {
        self.regex.as_str() == other.regex.as_str() && self.replacement == other.replacement
    }
}

/// Builds absolute URLs consistent with the current routing mode.
#[derive(Clone, Copy)]
pub struct UrlBuilder<'a> {
    config: &'a RoutingConfig,
    hooks: &'a dyn Hooks,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(config: &'a RoutingConfig, hooks: &'a dyn Hooks) -> Self {
        Self { config, hooks }
    }

    /// Construct an absolute URL from a relative one, translating clean
    /// to dirty as the routing mode requires.
    ///
    /// A target beginning with `/` is taken to be dirty already and is
    /// returned canonicalized, untranslated.
    pub fn build(&self, target: &str, controller: &dyn Controller) -> Result<String, RouteError> {
        let base = base_for(self.config, controller)?;

        if target.starts_with('/') {
            return Ok(canonicalize(&base, target));
        }

        // A clean target always ends with a slash.
        let clean = format!("/{}/", target.trim_end_matches('/'));

        if self.config.clean_urls && controller.clean_urls_supported() {
            return Ok(canonicalize(&base, &clean));
        }

        let dirty = self.translate(&clean, controller);
        Ok(canonicalize(&base, &dirty))
    }

    /// Translate a clean path into its dirty query-string form, applying
    /// the first matching rule.
    fn translate(&self, clean: &str, controller: &dyn Controller) -> String {
        let native = controller.url_rules();

        let mut filtered = native.clone();
        self.hooks.filter_urls(&mut filtered);

        let mut rules = Vec::with_capacity(filtered.len() * 2 + 1);
        for rule in filtered {
            // Translations contributed by plugins get a feed variant,
            // checked ahead of the rule it shadows.
            if !native.contains(&rule) {
                if let Some(feed) = rule.feed_variant() {
                    rules.push(feed);
                }
            }
            rules.push(rule);
        }
        rules.push(UrlRule::catch_all());

        for rule in &rules {
            if rule.regex.is_match(clean) {
                tracing::debug!(pattern = rule.pattern(), clean, "url translation applied");
                return rule.regex.replace(clean, rule.replacement.as_str()).into_owned();
            }
        }

        clean.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::NoHooks;

    struct Pages {
        clean: bool,
        rules: Vec<UrlRule>,
    }

    impl Controller for Pages {
        fn name(&self) -> &str {
            "pages"
        }

        fn clean_urls_supported(&self) -> bool {
            self.clean
        }

        fn url_rules(&self) -> Vec<UrlRule> {
            self.rules.clone()
        }
    }

    struct ExtraRules(Vec<UrlRule>);

    impl Hooks for ExtraRules {
        fn exists(&self, _name: &str) -> bool {
            false
        }

        fn call(
            &self,
            _names: &[&str],
            _route: &mut crate::dispatch::route::Route<'_>,
        ) -> crate::hooks::HookOutcome {
            crate::hooks::HookOutcome::Pass
        }

        fn filter_urls(&self, rules: &mut Vec<UrlRule>) {
            rules.extend(self.0.iter().cloned());
        }
    }

    fn config(url: &str, clean_urls: bool) -> RoutingConfig {
        RoutingConfig {
            url: url.into(),
            clean_urls,
            ..RoutingConfig::default()
        }
    }

    fn plain() -> Pages {
        Pages {
            clean: false,
            rules: Vec::new(),
        }
    }

    #[test]
    fn catch_all_builds_a_dirty_single_action_url() {
        let config = config("http://example.com", false);
        let hooks = NoHooks;
        let builder = UrlBuilder::new(&config, &hooks);

        let url = builder.build("tags", &plain()).unwrap();
        assert_eq!(url, "http://example.com/?action=tags");
    }

    #[test]
    fn catch_all_respects_the_controller_base() {
        let config = config("http://example.com/blog", false);
        let hooks = NoHooks;
        let builder = UrlBuilder::new(&config, &hooks);

        let url = builder.build("tags", &plain()).unwrap();
        assert_eq!(url, "http://example.com/blog/?action=tags");
    }

    #[test]
    fn clean_mode_skips_translation() {
        let config = config("http://example.com", true);
        let hooks = NoHooks;
        let builder = UrlBuilder::new(&config, &hooks);

        let controller = Pages {
            clean: true,
            rules: Vec::new(),
        };
        let url = builder.build("tag/rust", &controller).unwrap();
        assert_eq!(url, "http://example.com/tag/rust/");
    }

    #[test]
    fn clean_mode_needs_controller_support() {
        // clean_urls is on, but this controller cannot serve them.
        let config = config("http://example.com", true);
        let hooks = NoHooks;
        let builder = UrlBuilder::new(&config, &hooks);

        let url = builder.build("tags", &plain()).unwrap();
        assert_eq!(url, "http://example.com/?action=tags");
    }

    #[test]
    fn leading_slash_targets_pass_through_untranslated() {
        let config = config("http://example.com/blog", false);
        let hooks = NoHooks;
        let builder = UrlBuilder::new(&config, &hooks);

        let url = builder.build("/?action=view&id=2", &plain()).unwrap();
        assert_eq!(url, "http://example.com/blog/?action=view&id=2");

        let url = builder.build("/a/../b//c", &plain()).unwrap();
        assert_eq!(url, "http://example.com/blog/b/c");
    }

    #[test]
    fn native_rules_translate_without_a_feed_variant() {
        let config = config("http://example.com", false);
        let hooks = NoHooks;
        let builder = UrlBuilder::new(&config, &hooks);

        let controller = Pages {
            clean: false,
            rules: vec![UrlRule::new("/id/([0-9]+)/$", "/?action=view&id=$1").unwrap()],
        };

        let url = builder.build("id/42", &controller).unwrap();
        assert_eq!(url, "http://example.com/?action=view&id=42");

        // No feed twin exists for native rules; the catch-all rewrites
        // the last segment instead.
        let url = builder.build("id/42/feed", &controller).unwrap();
        assert_eq!(url, "http://example.com/id/42/?action=feed");
    }

    #[test]
    fn plugin_rules_gain_a_feed_variant() {
        let config = config("http://example.com", false);
        let hooks = ExtraRules(vec![
            UrlRule::new("/album/([^/]+)/$", "/?action=album&name=$1").unwrap()
        ]);
        let builder = UrlBuilder::new(&config, &hooks);

        let url = builder.build("album/ep", &plain()).unwrap();
        assert_eq!(url, "http://example.com/?action=album&name=ep");

        let url = builder.build("album/ep/feed", &plain()).unwrap();
        assert_eq!(url, "http://example.com/?action=album&name=ep&feed");
    }
}
