//! Company-name inference from a target URL
//!
//! The heuristic takes the first host label of the URL (after stripping an
//! optional scheme and an optional leading "www.") as a probable company
//! name, which the selector catalog then uses to augment its rule list.

use regex::Regex;
use std::sync::LazyLock;

/// Matches an optional scheme, an optional "www." label, and captures the
/// first remaining label up to the next literal dot. The trailing dot is
/// required: a host with no dot (e.g. "localhost") yields no name.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.)?([^./]+)\.").expect("hardcoded pattern is valid")
});

/// Infers a probable company name from a target URL
///
/// This is a best-effort heuristic, not validation: a `None` result is a
/// valid outcome that simply disables name-based selector augmentation
/// downstream. No I/O, no side effects.
///
/// # Examples
///
/// ```
/// use brandmark::infer_company_name;
///
/// assert_eq!(infer_company_name("https://www.olvi.fi"), Some("olvi".to_string()));
/// assert_eq!(infer_company_name("viataito.com"), Some("viataito".to_string()));
/// assert_eq!(infer_company_name("localhost"), None);
/// ```
pub fn infer_company_name(target: &str) -> Option<String> {
    NAME_PATTERN
        .captures(target)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
