use crate::error::ModelError;
use crate::value::{lenient_number, Flag};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// The sixteen element kinds, in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Section,
    Group,
    Paragraph,
    Button,
    Toggle,
    Slider,
    Keybind,
    Input,
    Textarea,
    Dropdown,
    Code,
    Colorpicker,
    Divider,
    Space,
    Image,
    Video,
}

impl ItemKind {
    pub const ALL: [ItemKind; 16] = [
        ItemKind::Section,
        ItemKind::Group,
        ItemKind::Paragraph,
        ItemKind::Button,
        ItemKind::Toggle,
        ItemKind::Slider,
        ItemKind::Keybind,
        ItemKind::Input,
        ItemKind::Textarea,
        ItemKind::Dropdown,
        ItemKind::Code,
        ItemKind::Colorpicker,
        ItemKind::Divider,
        ItemKind::Space,
        ItemKind::Image,
        ItemKind::Video,
    ];

    /// Lowercase type tag as stored in documents.
    pub fn tag(self) -> &'static str {
        match self {
            ItemKind::Section => "section",
            ItemKind::Group => "group",
            ItemKind::Paragraph => "paragraph",
            ItemKind::Button => "button",
            ItemKind::Toggle => "toggle",
            ItemKind::Slider => "slider",
            ItemKind::Keybind => "keybind",
            ItemKind::Input => "input",
            ItemKind::Textarea => "textarea",
            ItemKind::Dropdown => "dropdown",
            ItemKind::Code => "code",
            ItemKind::Colorpicker => "colorpicker",
            ItemKind::Divider => "divider",
            ItemKind::Space => "space",
            ItemKind::Image => "image",
            ItemKind::Video => "video",
        }
    }

    /// Palette label.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Section => "Section",
            ItemKind::Group => "Group",
            ItemKind::Paragraph => "Paragraph",
            ItemKind::Button => "Button",
            ItemKind::Toggle => "Toggle",
            ItemKind::Slider => "Slider",
            ItemKind::Keybind => "Keybind",
            ItemKind::Input => "Input",
            ItemKind::Textarea => "Textarea",
            ItemKind::Dropdown => "Dropdown",
            ItemKind::Code => "Code",
            ItemKind::Colorpicker => "Colorpicker",
            ItemKind::Divider => "Divider",
            ItemKind::Space => "Space",
            ItemKind::Image => "Image",
            ItemKind::Video => "Video",
        }
    }
}

impl FromStr for ItemKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownItemType(s.to_string()))
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One node of the UI description tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Section(SectionItem),
    Group(GroupItem),
    Paragraph(ParagraphItem),
    Button(ButtonItem),
    Toggle(ToggleItem),
    Slider(SliderItem),
    Keybind(KeybindItem),
    Input(InputItem),
    Textarea(InputItem),
    Dropdown(DropdownItem),
    Code(CodeItem),
    Colorpicker(ColorpickerItem),
    Divider(DividerItem),
    Space(SpaceItem),
    Image(ImageItem),
    Video(VideoItem),

    /// Any object whose tag this build does not know, kept verbatim
    /// (tag included) so partially-migrated documents load and save
    /// unchanged. The serializer skips it.
    #[serde(untagged)]
    Unknown(Map<String, Value>),
}

impl Item {
    pub fn kind(&self) -> Option<ItemKind> {
        Some(match self {
            Item::Section(_) => ItemKind::Section,
            Item::Group(_) => ItemKind::Group,
            Item::Paragraph(_) => ItemKind::Paragraph,
            Item::Button(_) => ItemKind::Button,
            Item::Toggle(_) => ItemKind::Toggle,
            Item::Slider(_) => ItemKind::Slider,
            Item::Keybind(_) => ItemKind::Keybind,
            Item::Input(_) => ItemKind::Input,
            Item::Textarea(_) => ItemKind::Textarea,
            Item::Dropdown(_) => ItemKind::Dropdown,
            Item::Code(_) => ItemKind::Code,
            Item::Colorpicker(_) => ItemKind::Colorpicker,
            Item::Divider(_) => ItemKind::Divider,
            Item::Space(_) => ItemKind::Space,
            Item::Image(_) => ItemKind::Image,
            Item::Video(_) => ItemKind::Video,
            Item::Unknown(_) => return None,
        })
    }

    /// Type tag. Unrecognized items report the tag they were loaded with,
    /// or `"unknown"` when they had none.
    pub fn type_tag(&self) -> &str {
        match self {
            Item::Unknown(raw) => raw.get("type").and_then(Value::as_str).unwrap_or("unknown"),
            _ => self.kind().map(ItemKind::tag).unwrap_or("unknown"),
        }
    }

    pub fn title(&self) -> Option<&str> {
        let title = match self {
            Item::Section(i) => &i.title,
            Item::Group(i) => &i.title,
            Item::Paragraph(i) => &i.title,
            Item::Button(i) => &i.title,
            Item::Toggle(i) => &i.title,
            Item::Slider(i) => &i.title,
            Item::Keybind(i) => &i.title,
            Item::Input(i) | Item::Textarea(i) => &i.title,
            Item::Dropdown(i) => &i.title,
            Item::Code(i) => &i.title,
            Item::Colorpicker(i) => &i.title,
            Item::Divider(_) | Item::Space(_) | Item::Image(_) | Item::Video(_) | Item::Unknown(_) => {
                return None
            }
        };
        title.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Item::Group(_))
    }

    /// Children of a group; `None` for every other kind.
    pub fn children(&self) -> Option<&Vec<Item>> {
        match self {
            Item::Group(group) => Some(&group.items),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Item>> {
        match self {
            Item::Group(group) => Some(&mut group.items),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "box", skip_serializing_if = "Option::is_none")]
    pub boxed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub text_transparency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_x_alignment: Option<String>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParagraphItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Legacy title field from older fixtures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub image_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub thumbnail_size: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<ParagraphButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_value: Option<String>,
    pub value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_textbox: Option<Flag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_tooltip: Option<Flag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<bool>,
}

/// Shared by `input` and `textarea`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_none: Option<bool>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub menu_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_copy: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorpickerItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub transparency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DividerItem {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceItem {
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("Colorpicker".parse::<ItemKind>().unwrap(), ItemKind::Colorpicker);
        assert_eq!("TEXTAREA".parse::<ItemKind>().unwrap(), ItemKind::Textarea);
        assert!("carousel".parse::<ItemKind>().is_err());
    }

    #[test]
    fn test_item_json_shape() {
        let json = r#"{ "type": "slider", "title": "Speed", "min": 0, "max": "200", "value": 16 }"#;
        let item: Item = serde_json::from_str(json).unwrap();

        match &item {
            Item::Slider(slider) => {
                assert_eq!(slider.title.as_deref(), Some("Speed"));
                assert_eq!(slider.max, Some(200.0));
                assert_eq!(slider.step, None);
            }
            other => panic!("Expected slider, got {:?}", other),
        }

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["type"], "slider");
        assert_eq!(back["max"], 200.0);
    }

    #[test]
    fn test_unknown_tag_keeps_raw_object() {
        let item: Item = serde_json::from_str(r#"{ "type": "carousel", "title": "x", "speed": 3 }"#).unwrap();
        assert!(matches!(item, Item::Unknown(_)));
        assert_eq!(item.kind(), None);
        assert_eq!(item.type_tag(), "carousel");
        assert_eq!(item.title(), None);

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back, serde_json::json!({ "type": "carousel", "title": "x", "speed": 3 }));

        let untyped: Item = serde_json::from_str(r#"{ "title": "x" }"#).unwrap();
        assert_eq!(untyped.type_tag(), "unknown");
    }

    #[test]
    fn test_only_groups_have_children() {
        let group: Item = serde_json::from_str(r#"{ "type": "group", "items": [{ "type": "divider" }] }"#).unwrap();
        assert!(group.is_group());
        assert_eq!(group.children().map(Vec::len), Some(1));

        let button: Item = serde_json::from_str(r#"{ "type": "button" }"#).unwrap();
        assert!(button.children().is_none());
    }

    #[test]
    fn test_section_box_key() {
        let item: Item = serde_json::from_str(r#"{ "type": "section", "box": true, "textXAlignment": "center" }"#).unwrap();
        match item {
            Item::Section(section) => {
                assert_eq!(section.boxed, Some(true));
                assert_eq!(section.text_x_alignment.as_deref(), Some("center"));
            }
            other => panic!("Expected section, got {:?}", other),
        }
    }
}
