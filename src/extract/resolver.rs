//! Logo resolution against parsed markup
//!
//! Resolution runs in two phases. The selection phase is pure: it parses the
//! markup once, walks the catalog in order, and reduces the first match to
//! either inline SVG markup or a resource locator. The resolution phase then
//! performs the single image fetch. The split keeps the parsed tree
//! (`scraper::Html` is not `Send`) out of the async part entirely.

use crate::extract::catalog::SelectorRule;
use crate::ResolveError;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Content type reported for serialized inline SVG matches
const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Content type assumed when the image response does not declare one
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Attribute precedence for extracting a resource locator from a match
const LOCATOR_ATTRIBUTES: [&str; 4] = ["src", "href", "content", "data"];

/// The final result of a successful extraction: raw image bytes plus the
/// MIME content type to serve them under
#[derive(Debug, Clone)]
pub struct LogoArtifact {
    pub content_type: String,
    pub content: Vec<u8>,
}

/// Outcome of the pure selection phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Selection {
    /// A structural SVG rule matched; the serialized element markup
    InlineSvg(String),
    /// An attribute-bearing rule matched; the extracted locator, possibly
    /// relative
    Locator(String),
    /// A rule matched an element carrying none of the locator attributes.
    /// Terminal: resolution must not fall through to later rules.
    MatchedWithoutLocator,
    /// No rule matched anything
    NoMatch,
}

/// Walks the catalog against the markup and reduces the first match
///
/// Rules are evaluated in catalog order; within a rule the first element in
/// document order wins. The first rule with any match decides the outcome,
/// even when that outcome is [`Selection::MatchedWithoutLocator`].
pub(crate) fn select_candidate(html: &str, rules: &[SelectorRule]) -> Selection {
    let document = Html::parse_document(html);

    for rule in rules {
        let Ok(selector) = Selector::parse(&rule.query) else {
            // Name-derived queries can be unparseable for exotic host
            // labels; skip the rule rather than abort the walk.
            tracing::debug!("skipping unparseable selector: {}", rule.query);
            continue;
        };

        let Some(element) = document.select(&selector).next() else {
            continue;
        };

        if !rule.category.extracts_locator() {
            tracing::debug!("rule {:?} matched inline SVG", rule.query);
            return Selection::InlineSvg(element.html());
        }

        let locator = LOCATOR_ATTRIBUTES
            .iter()
            .find_map(|attr| element.value().attr(attr));

        return match locator {
            Some(locator) => {
                tracing::debug!("rule {:?} matched locator {}", rule.query, locator);
                Selection::Locator(locator.to_string())
            }
            None => Selection::MatchedWithoutLocator,
        };
    }

    Selection::NoMatch
}

/// Resolves a locator to an absolute URL
///
/// A root-relative locator (leading "/") is joined against the target's
/// origin, discarding any path on the target. Anything else is fetched
/// as-is, matching the source markup's intent.
fn resolve_locator(locator: &str, target: &str) -> Result<String, ResolveError> {
    if !locator.starts_with('/') {
        return Ok(locator.to_string());
    }

    let base = Url::parse(target).map_err(|e| ResolveError::InvalidTarget {
        url: target.to_string(),
        source: e,
    })?;

    base.join(locator)
        .map(|resolved| resolved.to_string())
        .map_err(|e| ResolveError::InvalidTarget {
            url: target.to_string(),
            source: e,
        })
}

/// Fetches the resolved image URL and packages the response
///
/// One GET with no special headers. A non-2xx response or transport error
/// fails the whole resolution; a matched-but-unfetchable image is a terminal
/// failure, not a signal to try the next rule.
async fn fetch_artifact(client: &Client, image_url: &str) -> Result<LogoArtifact, ResolveError> {
    let response = client
        .get(image_url)
        .send()
        .await
        .map_err(|e| ResolveError::Request {
            url: image_url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ResolveError::Status {
            url: image_url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_string();

    let content = response
        .bytes()
        .await
        .map_err(|e| ResolveError::Body {
            url: image_url.to_string(),
            source: e,
        })?
        .to_vec();

    Ok(LogoArtifact {
        content_type,
        content,
    })
}

/// Resolves the catalog against the markup and produces the final artifact
///
/// Returns `Ok(None)` when no rule matched, or when the first matching rule
/// hit an element with no usable locator attribute. Inline SVG matches are
/// returned directly without a network round trip.
///
/// # Arguments
///
/// * `client` - The HTTP client for the image fetch
/// * `html` - The raw markup of the target page
/// * `rules` - The ordered selector catalog
/// * `target` - The original target URL, used to resolve root-relative
///   locators
pub async fn resolve_logo(
    client: &Client,
    html: &str,
    rules: &[SelectorRule],
    target: &str,
) -> Result<Option<LogoArtifact>, ResolveError> {
    match select_candidate(html, rules) {
        Selection::NoMatch => {
            tracing::debug!("no selector rule matched for {}", target);
            Ok(None)
        }
        Selection::MatchedWithoutLocator => {
            tracing::debug!("matched element without locator attribute for {}", target);
            Ok(None)
        }
        Selection::InlineSvg(markup) => Ok(Some(LogoArtifact {
            content_type: SVG_CONTENT_TYPE.to_string(),
            content: markup.into_bytes(),
        })),
        Selection::Locator(locator) => {
            let image_url = resolve_locator(&locator, target)?;
            tracing::debug!("fetching logo candidate {}", image_url);
            fetch_artifact(client, &image_url).await.map(Some)
        }
    }
}
