//! Syntactic validators used by the property panel.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").expect("valid hex pattern"));

static NAMED_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]{1,24}$").expect("valid name pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validator {
    /// `#rgb`, `#rrggbb`, or a color name.
    Color,
    /// `A:B` with both parts positive, or a bare positive number.
    Ratio,
}

impl Validator {
    pub fn check(self, value: &str) -> bool {
        validate(self, value)
    }
}

impl FromStr for Validator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(Validator::Color),
            "ratio" => Ok(Validator::Ratio),
            other => Err(format!("unknown validator: {}", other)),
        }
    }
}

/// Empty input is always valid; it clears the field.
pub fn validate(kind: Validator, value: &str) -> bool {
    let v = value.trim();
    if v.is_empty() {
        return true;
    }

    match kind {
        Validator::Ratio => {
            if v.contains(':') {
                let parts: Vec<&str> = v.split(':').map(str::trim).collect();
                match parts.as_slice() {
                    [a, b] => is_positive(a) && is_positive(b),
                    _ => false,
                }
            } else {
                is_positive(v)
            }
        }
        Validator::Color => {
            if v.starts_with('#') {
                HEX_COLOR.is_match(v)
            } else {
                NAMED_COLOR.is_match(v)
            }
        }
    }
}

fn is_positive(s: &str) -> bool {
    s.parse::<f64>().map(|n| n.is_finite() && n > 0.0).unwrap_or(false)
}
