//! # Document
//!
//! Root aggregate of the builder: window metadata plus the ordered tabs.
//!
//! ```text
//! Document
//!  ├─ window: WindowConfig (title, size, tags, ...)
//!  └─ tabs[]
//!      └─ items[]          (Item)
//!          └─ items[]      (only inside `group`)
//! ```

use crate::error::ModelError;
use crate::item::Item;
use crate::value::{lenient_number, Scalar};
use serde::{Deserialize, Serialize};

/// Section used for tabs without one.
pub const DEFAULT_SECTION: &str = "Main";

const SAMPLE_FIXTURE: &str = include_str!("../fixtures/sample.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

impl Document {
    /// Fresh document with a single empty tab.
    pub fn new() -> Self {
        Self {
            window: WindowConfig {
                title: Some("Window".to_string()),
                ..Default::default()
            },
            tabs: vec![Tab::new("New Tab")],
        }
    }

    /// The preview fixture shipped with the builder.
    pub fn sample() -> Self {
        Self::from_json(SAMPLE_FIXTURE).unwrap_or_else(|_| Self::new())
    }

    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn tab_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }

    /// Normalize every item of every tab.
    pub fn normalize_all(&mut self) {
        for tab in &mut self.tabs {
            for item in &mut tab.items {
                item.normalize_deep();
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Window-level presentation fields. Everything is optional; unset fields
/// are left out of the generated window call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Literal or `lua:`-prefixed expression, e.g. `lua:UDim2.fromOffset(580,460)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resizable: Option<bool>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub side_bar_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub background_image_transparency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_search_bar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_bar_enabled: Option<bool>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Legacy title key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Scalar>,
}

impl Tag {
    /// Display title, falling back to the legacy key.
    pub fn label(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.text.as_deref().filter(|t| !t.is_empty()))
    }

    /// Parse one `title|color|radius` line.
    pub fn from_line(line: &str) -> Tag {
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        let title = parts.first().copied().filter(|t| !t.is_empty()).unwrap_or("Tag");
        let color = parts.get(1).copied().filter(|c| !c.is_empty());
        let radius = parts.get(2).copied().filter(|r| !r.is_empty()).map(|r| {
            r.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Scalar::Number)
                .unwrap_or_else(|| Scalar::Text(r.to_string()))
        });

        Tag {
            title: Some(title.to_string()),
            text: None,
            color: color.map(str::to_string),
            radius,
        }
    }

    /// Inverse of [`Tag::from_line`], trailing empty parts dropped.
    pub fn to_line(&self) -> String {
        let radius = match &self.radius {
            Some(Scalar::Number(n)) => n.to_string(),
            Some(Scalar::Text(s)) => s.clone(),
            None => String::new(),
        };
        let line = [
            self.label().unwrap_or_default(),
            self.color.as_deref().unwrap_or_default(),
            radius.as_str(),
        ]
        .join("|");
        line.trim_end_matches('|').to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_section")]
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_title: Option<bool>,
    #[serde(default)]
    pub items: Vec<Item>,
}

fn default_section() -> String {
    DEFAULT_SECTION.to_string()
}

impl Tab {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            section: default_section(),
            locked: None,
            show_title: None,
            items: Vec::new(),
        }
    }

    /// Grouping key: trimmed section, `"Main"` when blank.
    pub fn section_name(&self) -> &str {
        let trimmed = self.section.trim();
        if trimmed.is_empty() {
            DEFAULT_SECTION
        } else {
            trimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_fixture_loads() {
        let doc = Document::from_json(SAMPLE_FIXTURE).expect("sample fixture parses");
        assert_eq!(doc.tabs.len(), 2);
        assert_eq!(doc.tabs[1].items.len(), 10);
        assert_eq!(doc.window.tags.len(), 2);
        assert_eq!(Document::sample(), doc);
    }

    #[test]
    fn test_new_document_has_one_tab() {
        let doc = Document::new();
        assert_eq!(doc.tabs.len(), 1);
        assert_eq!(doc.tabs[0].section, "Main");
        assert!(doc.tabs[0].items.is_empty());
    }

    #[test]
    fn test_section_name_trims_and_defaults() {
        let mut tab = Tab::new("t");
        tab.section = "  Combat ".to_string();
        assert_eq!(tab.section_name(), "Combat");

        tab.section = "   ".to_string();
        assert_eq!(tab.section_name(), "Main");

        let tab: Tab = serde_json::from_str(r#"{ "title": "x" }"#).unwrap();
        assert_eq!(tab.section, "Main");
    }

    #[test]
    fn test_tag_lines() {
        let tag = Tag::from_line("v1.2|#ff8a00|8");
        assert_eq!(tag.title.as_deref(), Some("v1.2"));
        assert_eq!(tag.color.as_deref(), Some("#ff8a00"));
        assert_eq!(tag.radius, Some(Scalar::Number(8.0)));
        assert_eq!(tag.to_line(), "v1.2|#ff8a00|8");

        let tag = Tag::from_line("|red|round");
        assert_eq!(tag.title.as_deref(), Some("Tag"));
        assert_eq!(tag.radius, Some(Scalar::Text("round".to_string())));

        let tag = Tag::from_line("beta");
        assert_eq!(tag.to_line(), "beta");
    }

    #[test]
    fn test_window_numbers_are_lenient() {
        let window: WindowConfig =
            serde_json::from_str(r#"{ "sideBarWidth": "200", "backgroundImageTransparency": "" }"#).unwrap();
        assert_eq!(window.side_bar_width, Some(200.0));
        assert_eq!(window.background_image_transparency, None);
    }
}
