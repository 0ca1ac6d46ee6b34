//! Ordered selector catalog for logo candidates
//!
//! The catalog is data, not control flow: an ordered, de-duplicated list of
//! (category, query) pairs evaluated top to bottom by the resolver. The
//! order encodes a confidence ranking, from explicit logo markers down to
//! generic brand imagery signals. Name-derived rules are only ever appended
//! after the base list, so the base prefix is stable regardless of input.

/// Extraction category of a selector rule
///
/// The category decides how a matched element is turned into a result:
/// [`InlineSvg`](RuleCategory::InlineSvg) serializes the element itself,
/// every other category extracts a resource locator from its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Structural `<svg>` element; serialized as inline markup
    InlineSvg,
    /// `<img>`, `<object>` or `<embed>` pointing at an image resource
    Image,
    /// Favicon and touch-icon `<link>` elements
    Icon,
    /// Open Graph / Twitter preview `<meta>` elements
    Social,
    /// Accessibility-labeled elements (`aria-label`, `role="img"`)
    Labeled,
}

impl RuleCategory {
    /// Returns true if matches of this category extract a resource locator
    /// from element attributes (as opposed to serializing inline markup)
    pub fn extracts_locator(&self) -> bool {
        !matches!(self, Self::InlineSvg)
    }
}

/// One structural query used to locate a candidate logo element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorRule {
    pub category: RuleCategory,
    pub query: String,
}

impl SelectorRule {
    fn new(category: RuleCategory, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }
}

/// The fixed base catalog, from explicit logo markers to generic signals
const BASE_RULES: [(RuleCategory, &str); 18] = [
    // Explicit logo references in SVGs and images
    (RuleCategory::InlineSvg, r#"svg[id*="logo"]"#),
    (RuleCategory::InlineSvg, r#"svg[class*="logo"]"#),
    (RuleCategory::Image, r#"img[src*="logo"][src$=".svg"]"#),
    (RuleCategory::Image, r#"object[data*="logo"][data$=".svg"]"#),
    (RuleCategory::Image, r#"embed[src*="logo"][src$=".svg"]"#),
    (RuleCategory::Image, r#"img[class*="logo"]"#),
    (RuleCategory::Image, r#"img[src*="logo"]"#),
    (RuleCategory::Image, r#"img[alt*="logo"]"#),
    (RuleCategory::Image, r#"img[id*="logo"]"#),
    // Favicons, touch icons
    (RuleCategory::Icon, r#"link[rel="apple-touch-icon"]"#),
    (RuleCategory::Icon, r#"link[rel="icon"]"#),
    (RuleCategory::Icon, r#"link[rel="shortcut icon"]"#),
    // Social media preview images
    (RuleCategory::Social, r#"meta[property="og:image"]"#),
    (RuleCategory::Social, r#"meta[name="twitter:image"]"#),
    // Accessibility logo options
    (RuleCategory::Labeled, r#"*[aria-label*="logo"]"#),
    (RuleCategory::Labeled, r#"*[role="img"][aria-label*="logo"]"#),
    (RuleCategory::Labeled, r#"*[aria-label*="logo"][class*="logo"]"#),
    (RuleCategory::Labeled, r#"*[aria-label*="logo"][id*="logo"]"#),
];

/// Builds the ordered selector catalog for one extraction run
///
/// The base rules are always present, in their fixed order. When a company
/// name was inferred, five name-derived rules are appended (image rules
/// before SVG rules), never inserted ahead of the base list. The result is
/// de-duplicated preserving first occurrence. Building performs no I/O and
/// cannot fail.
///
/// # Arguments
///
/// * `name` - The inferred company name, if any
pub fn build_catalog(name: Option<&str>) -> Vec<SelectorRule> {
    let mut rules: Vec<SelectorRule> = BASE_RULES
        .iter()
        .map(|(category, query)| SelectorRule::new(*category, *query))
        .collect();

    if let Some(name) = name {
        rules.push(SelectorRule::new(
            RuleCategory::Image,
            format!(r#"img[alt*="{name}"]"#),
        ));
        rules.push(SelectorRule::new(
            RuleCategory::Image,
            format!(r#"img[class*="{name}"]"#),
        ));
        rules.push(SelectorRule::new(
            RuleCategory::Image,
            format!(r#"img[src*="{name}"]"#),
        ));
        rules.push(SelectorRule::new(
            RuleCategory::InlineSvg,
            format!(r#"svg[alt*="{name}"]"#),
        ));
        rules.push(SelectorRule::new(
            RuleCategory::InlineSvg,
            format!(r#"svg[class*="{name}"]"#),
        ));
    }

    dedup_preserving_order(rules)
}

/// Removes duplicate queries, keeping the first (highest-confidence) entry
fn dedup_preserving_order(rules: Vec<SelectorRule>) -> Vec<SelectorRule> {
    let mut seen = std::collections::HashSet::new();
    rules
        .into_iter()
        .filter(|rule| seen.insert(rule.query.clone()))
        .collect()
}
