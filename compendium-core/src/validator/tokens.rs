//! Styling rules for class strings
//!
//! Pure pattern scans; they never look at a component or its schema.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `bg-blue-500`, `text-gray-900`, `border-red-200`, with optional variant prefixes
static HARD_CODED_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:bg|text|border)-([a-z]+)-(\d+)\b").expect("color pattern compiles")
});

/// Any whitespace-delimited token with a `[...]` arbitrary value
static ARBITRARY_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S*\[[^\]\s]*\]\S*").expect("arbitrary pattern compiles"));

/// Color words that are never palette colors
const EXCLUDED_COLOR_WORDS: &[&str] = &["inherit", "current", "transparent"];

/// A value a rule flagged
#[derive(Debug, Clone, PartialEq)]
pub struct TokenFinding {
    pub rule_id: &'static str,
    pub value: String,
    pub message: String,
}

/// Trait for styling rules
pub trait TokenRule: Send + Sync {
    /// Scan a class string
    fn check(&self, classes: &str) -> Vec<TokenFinding>;

    fn rule_id(&self) -> &'static str;

    fn description(&self) -> &'static str;
}

/// Rule: palette colors must come from design tokens
pub struct HardCodedColorRule;

impl TokenRule for HardCodedColorRule {
    fn rule_id(&self) -> &'static str {
        "hard-coded-color"
    }

    fn description(&self) -> &'static str {
        "Use semantic color tokens instead of palette classes"
    }

    fn check(&self, classes: &str) -> Vec<TokenFinding> {
        HARD_CODED_COLOR
            .captures_iter(classes)
            .filter(|caps| !EXCLUDED_COLOR_WORDS.contains(&&caps[1]))
            .map(|caps| {
                let value = caps[0].to_string();
                TokenFinding {
                    rule_id: self.rule_id(),
                    message: format!(
                        "Hard-coded color '{}'; use a semantic token such as bg-primary or text-muted-foreground",
                        value
                    ),
                    value,
                }
            })
            .collect()
    }
}

/// Rule: no arbitrary `[...]` values
pub struct ArbitraryValueRule;

impl TokenRule for ArbitraryValueRule {
    fn rule_id(&self) -> &'static str {
        "arbitrary-value"
    }

    fn description(&self) -> &'static str {
        "Avoid arbitrary bracket values; use the spacing and color scales"
    }

    fn check(&self, classes: &str) -> Vec<TokenFinding> {
        ARBITRARY_VALUE
            .find_iter(classes)
            .map(|m| {
                let value = m.as_str().to_string();
                TokenFinding {
                    rule_id: self.rule_id(),
                    message: format!("Arbitrary value '{}'; prefer a design token", value),
                    value,
                }
            })
            .collect()
    }
}

/// Outcome of a styling scan. `valid` is true iff nothing was flagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenValidation {
    pub valid: bool,
    pub hard_coded_values: Vec<String>,
    pub warnings: Vec<String>,
}

/// Runs every styling rule over a class string
pub struct TokenValidator {
    rules: Vec<Box<dyn TokenRule>>,
}

impl TokenValidator {
    /// Create validator with the default rules
    pub fn new() -> Self {
        let rules: Vec<Box<dyn TokenRule>> =
            vec![Box::new(HardCodedColorRule), Box::new(ArbitraryValueRule)];

        Self { rules }
    }

    pub fn validate(&self, classes: &str) -> TokenValidation {
        let findings: Vec<TokenFinding> = self
            .rules
            .iter()
            .flat_map(|rule| rule.check(classes))
            .collect();

        TokenValidation {
            valid: findings.is_empty(),
            hard_coded_values: findings.iter().map(|f| f.value.clone()).collect(),
            warnings: findings.into_iter().map(|f| f.message).collect(),
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn TokenRule> {
        self.rules.iter().map(|r| r.as_ref())
    }
}

impl Default for TokenValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan a class string with the default rules
pub fn validate_tokens(classes: &str) -> TokenValidation {
    TokenValidator::new().validate(classes)
}
