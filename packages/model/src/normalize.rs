//! Canonicalization of item fields after edits.
//!
//! `normalize` is idempotent: a second call never changes anything.

use crate::item::*;
use crate::value::Flag;

impl Item {
    /// Canonicalize this item's fields in place.
    pub fn normalize(&mut self) {
        match self {
            Item::Toggle(toggle) => {
                let current = toggle.type_value.as_deref().unwrap_or("Toggle");
                let canonical = if current.eq_ignore_ascii_case("checkbox") {
                    "Checkbox"
                } else {
                    "Toggle"
                };
                toggle.type_value = Some(canonical.to_string());
            }

            Item::Section(section) => {
                if let Some(align) = section.text_x_alignment.as_mut().filter(|a| !a.is_empty()) {
                    *align = match align.to_lowercase().as_str() {
                        "center" => "Center",
                        "right" => "Right",
                        _ => "Left",
                    }
                    .to_string();
                }
                if let Some(t) = section.text_transparency.as_mut() {
                    *t = clamp01(*t);
                }
            }

            Item::Paragraph(paragraph) => {
                let has_title = paragraph.title.as_deref().is_some_and(|t| !t.is_empty());
                if !has_title {
                    if let Some(text) = paragraph.text.as_ref().filter(|t| !t.is_empty()) {
                        paragraph.title = Some(text.clone());
                    }
                }
            }

            Item::Button(button) => {
                if let Some(justify) = button.justify.as_mut().filter(|j| !j.is_empty()) {
                    *justify = match justify.to_lowercase().as_str() {
                        "center" => "Center",
                        "left" => "Left",
                        "right" => "Right",
                        _ => "Between",
                    }
                    .to_string();
                }
                if let Some(size) = button.size.as_mut().filter(|s| !s.is_empty()) {
                    *size = match size.to_lowercase().as_str() {
                        "small" => "Small",
                        "large" => "Large",
                        _ => "Default",
                    }
                    .to_string();
                }
            }

            Item::Slider(slider) => {
                // A textbox stays on unless explicitly "false"; a tooltip is
                // only on when explicitly "true".
                if let Some(Flag::Text(s)) = &slider.is_textbox {
                    slider.is_textbox = Some(Flag::Bool(!s.eq_ignore_ascii_case("false")));
                }
                if let Some(Flag::Text(s)) = &slider.is_tooltip {
                    slider.is_tooltip = Some(Flag::Bool(s.eq_ignore_ascii_case("true")));
                }
            }

            Item::Colorpicker(picker) => {
                if let Some(t) = picker.transparency.as_mut() {
                    *t = clamp01(*t);
                }
            }

            Item::Dropdown(dropdown) => {
                if let Some(width) = dropdown.menu_width.as_mut() {
                    if *width < 0.0 {
                        *width = 0.0;
                    }
                }
            }

            Item::Input(input) => input.normalize_input_type("Input"),
            Item::Textarea(input) => input.normalize_input_type("Textarea"),

            Item::Group(_)
            | Item::Keybind(_)
            | Item::Code(_)
            | Item::Divider(_)
            | Item::Space(_)
            | Item::Image(_)
            | Item::Video(_)
            | Item::Unknown(_) => {}
        }
    }

    /// Normalize this item and every descendant.
    pub fn normalize_deep(&mut self) {
        self.normalize();
        if let Some(children) = self.children_mut() {
            for child in children {
                child.normalize_deep();
            }
        }
    }
}

impl InputItem {
    fn normalize_input_type(&mut self, fallback: &str) {
        let current = self.input_type.as_deref().filter(|t| !t.is_empty()).unwrap_or(fallback);
        let canonical = if current.eq_ignore_ascii_case("textarea") {
            "Textarea"
        } else {
            "Input"
        };
        self.input_type = Some(canonical.to_string());
    }
}

fn clamp01(n: f64) -> f64 {
    if n.is_nan() {
        n
    } else {
        n.clamp(0.0, 1.0)
    }
}
