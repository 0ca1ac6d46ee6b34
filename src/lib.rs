//! Brandmark: a brand logo extraction service
//!
//! This crate implements a small pipeline that, given a website URL, fetches
//! the page, infers the company name from the domain, walks an ordered list
//! of heuristic selector rules to find a logo-like element, resolves it to a
//! concrete image resource, and returns the bytes with their content type.

pub mod extract;
pub mod server;

use thiserror::Error;

/// The pipeline stage at which an extraction failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Fetching the target page
    Fetch,
    /// Resolving and fetching the logo resource
    Resolve,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Fetch => write!(f, "fetch"),
            Stage::Resolve => write!(f, "resolve"),
        }
    }
}

/// Errors from the page-fetch stage
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to read body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Errors from the logo-resolution stage
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("target is not a valid URL: {url}")]
    InvalidTarget {
        url: String,
        source: url::ParseError,
    },

    #[error("logo request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("logo fetch from {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read logo body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Main error type for a logo extraction run
///
/// Absence of a logo is not an error; the pipeline returns `Ok(None)` for
/// that outcome. This type only covers hard failures, tagged with the stage
/// that produced them.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("fetch stage failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("resolve stage failed: {0}")]
    Resolve(#[from] ResolveError),
}

impl ExtractError {
    /// Returns the pipeline stage this error originated from
    pub fn stage(&self) -> Stage {
        match self {
            ExtractError::Fetch(_) => Stage::Fetch,
            ExtractError::Resolve(_) => Stage::Resolve,
        }
    }
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

// Re-export commonly used types
pub use extract::{
    build_catalog, build_http_client, extract_logo, infer_company_name, LogoArtifact,
    RuleCategory, SelectorRule,
};
