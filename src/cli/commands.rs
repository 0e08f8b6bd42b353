//! CLI argument parsing

use crate::config::{ApiConfig, RunParameters, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// List Graph API groups or export a group's members
#[derive(Parser, Debug, Clone)]
#[command(name = "group-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Access token for the Graph API (required)
    #[arg(short = 'a', long = "accessToken", value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// List groups
    #[arg(short, long)]
    pub list: bool,

    /// ID of the group to export
    #[arg(short, long = "groupId", value_name = "ID")]
    pub group_id: Option<String>,

    /// File to store data in (CSV)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// API root URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API version path segment
    #[arg(long, value_name = "VERSION", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the run parameters, failing on missing token or mode
    pub fn run_parameters(&self) -> Result<RunParameters> {
        RunParameters::resolve(
            self.access_token.as_deref(),
            self.list,
            self.group_id.as_deref(),
            self.file.clone(),
        )
    }

    /// API location from the command line
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::builder()
            .base_url(&self.base_url)
            .api_version(&self.api_version)
            .build()
    }
}
