use serde::Deserialize;

use super::{ClassName, Error};

/// A request URI normalized into controller/action/parameter segments.
///
/// The first path segment names the controller, the second the action, and
/// the rest are positional parameters. The query string is discarded here;
/// it travels separately in the request data container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    original: String,
    segments: Vec<String>,
}

impl Uri {
    pub fn parse(raw: &str) -> Self {
        let path = raw.split(['?', '#']).next().unwrap_or_default();
        let segments =
            path.split('/').filter(|s| !s.is_empty()).map(str::to_string).collect();
        Self { original: raw.to_string(), segments }
    }

    /// The URI exactly as it was received.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn controller(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn action(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    pub fn parameters(&self) -> &[String] {
        self.segments.get(2..).unwrap_or_default()
    }
}

/// A URI after it has been mapped through the routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedUri {
    pub controller: ClassName,
    pub action: String,
    pub parameters: Vec<String>,
}

/// Maps request URIs onto controller/action pairs.
///
/// The kernel ships the contract and the declarative table only; a concrete
/// matching strategy is supplied by the embedding application.
pub trait Router {
    fn route(&self, uri: &Uri) -> Result<RoutedUri, Error>;
}

/// Declarative routing table loaded from `config/routes.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RoutesConfig {
    pub defaults: RouteDefaults,
    #[serde(default)]
    pub routes: Vec<RouteRule>,
}

/// Fallback controller/action used when no rule matches.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RouteDefaults {
    pub controller: ClassName,
    pub action: String,
}

/// One literal route entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RouteRule {
    pub pattern: String,
    pub controller: ClassName,
    pub action: String,
}

impl RoutesConfig {
    /// Parse a routes table from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        toml::from_str(text).map_err(|err| Error::RoutesInvalid(err.to_string()))
    }
}
