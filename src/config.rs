//! Run configuration
//!
//! `ApiConfig` describes where the API lives; `RunParameters` is the
//! immutable description of one run, resolved once from the command line
//! and passed explicitly through the pipeline.

use crate::error::{Error, Result};
use std::path::PathBuf;
use url::Url;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";

/// Default API version segment
pub const DEFAULT_API_VERSION: &str = "v2.8";

/// Fields requested in list mode
pub const GROUP_FIELDS: &[&str] = &["name", "administrator"];

/// Fields requested in export mode
pub const MEMBER_FIELDS: &[&str] = &[
    "id",
    "first_name",
    "middle_name",
    "last_name",
    "administrator",
];

// ============================================================================
// API Config
// ============================================================================

/// Where and how to reach the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root, e.g. `https://graph.facebook.com`
    pub base_url: String,
    /// Version path segment, e.g. `v2.8`
    pub api_version: String,
    /// User agent string
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: format!("group-export/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Create a new config builder
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Build `<base>/<version>/<segments..>?fields=<fields>`.
    ///
    /// Each segment is percent-encoded, so `/`, `?` and `#` inside an
    /// identifier stay part of that segment.
    pub fn endpoint(&self, segments: &[&str], fields: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        let version = self.api_version.trim_matches('/');

        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend((!version.is_empty()).then_some(version))
            .extend(segments);

        url.query_pairs_mut()
            .append_pair("fields", &fields.join(","));
        Ok(url)
    }
}

/// Builder for [`ApiConfig`]
#[derive(Default)]
pub struct ApiConfigBuilder {
    config: ApiConfig,
}

impl ApiConfigBuilder {
    /// Set the API root
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the version segment (empty to omit it)
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ApiConfig {
        self.config
    }
}

// ============================================================================
// Run Parameters
// ============================================================================

/// Which collection a run walks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Groups the authenticated user belongs to
    List,
    /// Members of one group
    Export {
        /// Group identifier
        group_id: String,
    },
}

impl Mode {
    /// Starting URL for this mode, before the access token is attached
    pub fn start_url(&self, api: &ApiConfig) -> Result<Url> {
        match self {
            Mode::List => api.endpoint(&["me", "groups"], GROUP_FIELDS),
            Mode::Export { group_id } => {
                api.endpoint(&[group_id.as_str(), "members"], MEMBER_FIELDS)
            }
        }
    }

    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            Mode::List => "list",
            Mode::Export { .. } => "export",
        }
    }
}

/// Immutable parameters of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    /// Access token appended to every request
    pub access_token: String,
    /// List or export
    pub mode: Mode,
    /// Export destination; display only when absent
    pub output: Option<PathBuf>,
}

impl RunParameters {
    /// Resolve run parameters from raw options.
    ///
    /// Fails with a usage error when the token is missing or neither list
    /// nor a group id was requested. List wins when both are given.
    pub fn resolve(
        access_token: Option<&str>,
        list: bool,
        group_id: Option<&str>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let access_token = access_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::usage("Missing Required Parameters: --accessToken"))?;

        let group_id = group_id.map(str::trim).filter(|g| !g.is_empty());

        let mode = match (list, group_id) {
            (true, _) => Mode::List,
            (false, Some(id)) => Mode::Export {
                group_id: id.to_string(),
            },
            (false, None) => {
                return Err(Error::usage(
                    "Missing Required Parameters: --list or --groupId",
                ))
            }
        };

        Ok(Self {
            access_token: access_token.to_string(),
            mode,
            output,
        })
    }
}
