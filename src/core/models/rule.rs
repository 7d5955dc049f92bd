//! Line-matching rules and rule sets
//!
//! A [`Rule`] is an anchored regex, optionally paired with a [`ValueSyntax`]
//! that validates the `value` capture and an [`Extractor`] that turns a
//! matched line into an [`Extraction`]. A [`RuleSet`] is an ordered, read-only
//! sequence of rules: the first rule that matches a line wins.

use std::net::Ipv4Addr;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Earliest timestamp the emulated console accepts
const MIN_TIMESTAMP: &str = "2000-01-01 00:00:00";

/// Format of quoted timestamp values
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which catalog a rule set was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flavor {
    /// Custom default settings directives (`key = value`)
    #[default]
    Settings,
    /// Serialized input device parameters (button to touch requests)
    InputParams,
    /// Hand-built rule set
    Custom,
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Settings => write!(f, "settings"),
            Self::InputParams => write!(f, "input-params"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "settings" | "custom-default-settings" => Ok(Self::Settings),
            "input-params" | "params" => Ok(Self::InputParams),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("unknown flavor: {s}")),
        }
    }
}

/// Accepted syntax of a directive's value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueSyntax {
    /// `true` or `false`
    Bool,
    /// Whole number within an inclusive range
    Integer {
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },
    /// Decimal number within an inclusive range
    Float {
        /// Smallest accepted value
        min: f64,
        /// Largest accepted value
        max: f64,
    },
    /// Double-quoted text without quotes or backslashes inside
    Text,
    /// Double-quoted member of a fixed list
    Choice(&'static [&'static str]),
    /// Double-quoted dotted IPv4 address
    Ipv4,
    /// Double-quoted `YYYY-MM-DD HH:MM:SS`, passed on as Unix seconds
    Timestamp,
}

impl ValueSyntax {
    /// Regex fragment matching the raw value text
    #[must_use]
    pub fn fragment(&self) -> String {
        match self {
            Self::Bool => "true|false".to_string(),
            Self::Integer { .. } => "-?[0-9]+".to_string(),
            Self::Float { .. } => r"-?[0-9]+(?:\.[0-9]+)?".to_string(),
            Self::Text => r#""[^"\\\r\n]*""#.to_string(),
            Self::Choice(choices) => {
                let alternatives: Vec<String> = choices.iter().map(|c| regex::escape(c)).collect();
                format!("\"(?:{})\"", alternatives.join("|"))
            },
            Self::Ipv4 => r#""[0-9]{1,3}(?:\.[0-9]{1,3}){3}""#.to_string(),
            Self::Timestamp => r#""[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}""#.to_string(),
        }
    }

    /// Check a raw value that already matched [`Self::fragment`]
    #[must_use]
    pub fn accepts(&self, raw: &str) -> bool {
        match self {
            Self::Bool | Self::Text | Self::Choice(_) => true,
            Self::Integer { min, max } => {
                raw.parse::<i64>().is_ok_and(|v| (*min..=*max).contains(&v))
            },
            Self::Float { min, max } => {
                raw.parse::<f64>().is_ok_and(|v| (*min..=*max).contains(&v))
            },
            Self::Ipv4 => unquote(raw).parse::<Ipv4Addr>().is_ok(),
            Self::Timestamp => parse_timestamp(raw).is_some(),
        }
    }

    /// Render the raw value as a C call argument
    #[must_use]
    pub fn argument(&self, raw: &str) -> String {
        match self {
            Self::Timestamp => {
                parse_timestamp(raw).map_or_else(|| raw.to_string(), |t| t.to_string())
            },
            _ => raw.to_string(),
        }
    }
}

fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(raw)
}

/// Parse a quoted timestamp into Unix seconds, rejecting dates before 2000
fn parse_timestamp(raw: &str) -> Option<i64> {
    let time = NaiveDateTime::parse_from_str(unquote(raw), TIMESTAMP_FORMAT).ok()?;
    let min = NaiveDateTime::parse_from_str(MIN_TIMESTAMP, TIMESTAMP_FORMAT).ok()?;
    (time >= min).then(|| time.and_utc().timestamp())
}

/// Turns a matched line into a setter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extractor {
    /// Setter function name
    pub function: String,
    /// C type of the setter's parameter
    pub c_type: &'static str,
}

impl Extractor {
    /// Create an extractor for a setter function
    #[must_use]
    pub fn new(function: impl Into<String>, c_type: &'static str) -> Self {
        Self {
            function: function.into(),
            c_type,
        }
    }
}

/// Structured data extracted from a matched line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Setter function name
    pub name: String,
    /// C type of the setter's parameter
    #[serde(rename = "type")]
    pub value_type: String,
    /// Complete call expression, including the trailing `;`
    pub call: String,
}

/// A single line-matching rule
#[derive(Debug, Clone)]
pub struct Rule {
    id: String,
    pattern: Regex,
    value: Option<ValueSyntax>,
    extractor: Option<Extractor>,
}

impl Rule {
    /// Create a rule from an anchored regex
    ///
    /// A named `value` group, when present, is what [`Self::with_value`]
    /// validates and what extraction passes to the setter.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex. Rule patterns come from
    /// static catalogs, so an invalid one is a programming error.
    #[must_use]
    pub fn new(id: impl Into<String>, pattern: &str) -> Self {
        let id = id.into();
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid pattern for rule '{id}': {e}"));
        Self {
            id,
            pattern,
            value: None,
            extractor: None,
        }
    }

    /// Create a `key = value` directive rule
    #[must_use]
    pub fn directive(key: &str, syntax: ValueSyntax) -> Self {
        let pattern =
            format!(r"^{}[ \t]*=[ \t]*(?P<value>{})$", regex::escape(key), syntax.fragment());
        Self::new(key, &pattern).with_value(syntax)
    }

    /// Validate the `value` capture with a syntax
    #[must_use]
    pub fn with_value(mut self, syntax: ValueSyntax) -> Self {
        self.value = Some(syntax);
        self
    }

    /// Attach an extractor
    #[must_use]
    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Rule identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this rule extracts data from matched lines
    #[must_use]
    pub const fn extracts(&self) -> bool {
        self.extractor.is_some()
    }

    /// Check whether the rule matches a line
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.matched_value(line).is_some()
    }

    /// Extract a setter call from a line, if the rule matches and extracts
    #[must_use]
    pub fn extract(&self, line: &str) -> Option<Extraction> {
        self.evaluate(line)?.extraction
    }

    /// Match a line once and build its extraction from the same capture
    #[must_use]
    pub fn evaluate(&self, line: &str) -> Option<RuleMatch<'_>> {
        let raw = self.matched_value(line)?;
        let extraction = self.extractor.as_ref().map(|extractor| {
            let argument =
                self.value.map_or_else(|| raw.to_string(), |syntax| syntax.argument(raw));
            Extraction {
                name: extractor.function.clone(),
                value_type: extractor.c_type.to_string(),
                call: format!("{}({argument});", extractor.function),
            }
        });

        Some(RuleMatch {
            rule: self,
            extraction,
        })
    }

    /// The `value` capture of a matching line (empty if the rule has none)
    fn matched_value<'l>(&self, line: &'l str) -> Option<&'l str> {
        let captures = self.pattern.captures(line)?;
        let raw = captures.name("value").map_or("", |m| m.as_str());

        match &self.value {
            Some(syntax) if !syntax.accepts(raw) => None,
            _ => Some(raw),
        }
    }
}

/// A rule that accepted a line
#[derive(Debug, Clone)]
pub struct RuleMatch<'r> {
    /// The accepting rule
    pub rule: &'r Rule,
    /// Extraction, when the rule carries an extractor
    pub extraction: Option<Extraction>,
}

/// An ordered, immutable sequence of rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    flavor: Flavor,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set; order encodes priority
    #[must_use]
    pub const fn new(flavor: Flavor, rules: Vec<Rule>) -> Self {
        Self { flavor, rules }
    }

    /// Catalog this set was built from
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// First rule that matches a line
    #[must_use]
    pub fn first_match(&self, line: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(line))
    }

    /// Evaluate rules in order and return the first that accepts a line
    #[must_use]
    pub fn evaluate(&self, line: &str) -> Option<RuleMatch<'_>> {
        self.rules.iter().find_map(|rule| rule.evaluate(line))
    }

    /// Iterate rules in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
