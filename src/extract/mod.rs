//! Logo extraction pipeline
//!
//! This module contains the core extraction logic:
//! - Company-name inference from the target URL
//! - Page fetching with a browser-like request identity
//! - The ordered heuristic selector catalog
//! - Resolution of a matched element to concrete image bytes
//!
//! The stages run strictly in sequence with no feedback loop; every value
//! is request-scoped and nothing is shared between invocations beyond the
//! HTTP client.

mod catalog;
mod fetcher;
mod name;
mod resolver;

pub use catalog::{build_catalog, RuleCategory, SelectorRule};
pub use fetcher::{build_http_client, fetch_page, DEFAULT_TIMEOUT_SECS};
pub use name::infer_company_name;
pub use resolver::{resolve_logo, LogoArtifact};

use crate::Result;
use reqwest::Client;

/// Runs the full extraction pipeline for one target URL
///
/// Sequences name inference, page fetch, catalog construction, and logo
/// resolution. At most two network round trips are performed: the page, then
/// one image. `Ok(None)` means the pipeline completed but produced no logo;
/// a hard fetch or resolve failure is returned as an error tagged with the
/// failing stage. The two outcomes are distinct and callers must surface
/// them differently.
///
/// # Arguments
///
/// * `client` - The HTTP client (shared across invocations)
/// * `target` - The URL to extract a logo for
pub async fn extract_logo(client: &Client, target: &str) -> Result<Option<LogoArtifact>> {
    let name = infer_company_name(target);
    tracing::debug!("inferred company name for {}: {:?}", target, name);

    let html = fetch_page(client, target).await?;
    tracing::debug!("fetched {} bytes of markup from {}", html.len(), target);

    let rules = build_catalog(name.as_deref());

    let artifact = resolve_logo(client, &html, &rules, target).await?;
    match &artifact {
        Some(a) => tracing::info!(
            "extracted logo for {}: {} bytes, {}",
            target,
            a.content.len(),
            a.content_type
        ),
        None => tracing::info!("no logo found for {}", target),
    }

    Ok(artifact)
}
