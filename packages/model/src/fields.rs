//! # Field descriptors
//!
//! Static property-panel tables, one per item kind plus the window and tab
//! levels, and the commit path that turns raw panel input into a stored
//! value.
//!
//! ## Commit
//!
//! ```text
//! raw input → FieldDescriptor::parse_input → set_field → normalize
//! ```
//!
//! A failed parse leaves the target untouched. Empty input always clears
//! the field.

use crate::document::{Tab, Tag, WindowConfig};
use crate::error::FieldError;
use crate::item::{Item, ItemKind};
use crate::validate::Validator;
use crate::value::{patch_field, read_field};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Checkbox,
    Select,
    Textarea,
    /// One value per line.
    List,
    /// One paragraph button title per line.
    Buttons,
    Ratio,
    /// One `title|color|radius` window tag per line.
    Tags,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub options: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor {
        key,
        label,
        kind,
        help: None,
        options: &[],
        min: None,
        max: None,
        validator: None,
    }
}

impl FieldDescriptor {
    const fn help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    const fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    const fn validated(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// Raw value coming out of a panel widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Checked(bool),
    Text(String),
}

impl From<&str> for FieldInput {
    fn from(s: &str) -> Self {
        FieldInput::Text(s.to_string())
    }
}

impl From<bool> for FieldInput {
    fn from(b: bool) -> Self {
        FieldInput::Checked(b)
    }
}

impl FieldDescriptor {
    /// Convert raw input into the JSON value stored under `key`.
    /// `Value::Null` means "clear the field".
    pub fn parse_input(&self, input: &FieldInput) -> Result<Value, FieldError> {
        let raw = match (self.kind, input) {
            (FieldKind::Checkbox, FieldInput::Checked(checked)) => return Ok(Value::Bool(*checked)),
            (FieldKind::Checkbox, FieldInput::Text(_)) => {
                return Err(FieldError::WrongInput {
                    key: self.key.to_string(),
                    expected: "a checkbox state",
                })
            }
            (_, FieldInput::Checked(_)) => {
                return Err(FieldError::WrongInput {
                    key: self.key.to_string(),
                    expected: "text",
                })
            }
            (_, FieldInput::Text(raw)) => raw,
        };

        match self.kind {
            FieldKind::Number => self.parse_number(raw),
            FieldKind::Ratio => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(Value::Null);
                }
                self.check(Validator::Ratio, trimmed)?;
                Ok(Value::String(trimmed.to_string()))
            }
            FieldKind::Text | FieldKind::Select | FieldKind::Textarea => {
                if raw.is_empty() {
                    return Ok(Value::Null);
                }
                if let Some(validator) = self.validator {
                    self.check(validator, raw)?;
                }
                Ok(Value::String(raw.clone()))
            }
            FieldKind::List => Ok(Value::Array(lines(raw).map(|l| json!(l)).collect())),
            FieldKind::Buttons => Ok(Value::Array(lines(raw).map(|l| json!({ "title": l })).collect())),
            FieldKind::Tags => {
                let tags: Vec<Tag> = lines(raw).map(Tag::from_line).collect();
                serde_json::to_value(tags).map_err(|e| FieldError::Rejected {
                    key: self.key.to_string(),
                    message: e.to_string(),
                })
            }
            FieldKind::Checkbox => Err(FieldError::WrongInput {
                key: self.key.to_string(),
                expected: "a checkbox state",
            }),
        }
    }

    fn parse_number(&self, raw: &str) -> Result<Value, FieldError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Value::Null);
        }

        let n = trimmed
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| FieldError::Invalid {
                key: self.key.to_string(),
                value: raw.to_string(),
            })?;

        let below = self.min.is_some_and(|min| n < min);
        let above = self.max.is_some_and(|max| n > max);
        if below || above {
            return Err(FieldError::OutOfRange {
                key: self.key.to_string(),
                value: n,
            });
        }

        Ok(json!(n))
    }

    fn check(&self, validator: Validator, value: &str) -> Result<(), FieldError> {
        if validator.check(value) {
            Ok(())
        } else {
            Err(FieldError::Invalid {
                key: self.key.to_string(),
                value: value.to_string(),
            })
        }
    }
}

fn lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n').map(str::trim).filter(|l| !l.is_empty())
}

/// Anything the property panel can edit.
pub trait FieldTarget: Serialize + DeserializeOwned {
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Hook run after every successful commit.
    fn after_commit(&mut self) {}

    fn descriptor(&self, key: &str) -> Result<&'static FieldDescriptor, FieldError> {
        self.fields()
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| FieldError::UnknownField(key.to_string()))
    }

    /// Current stored value, `None` when unset.
    fn field_value(&self, key: &str) -> Option<Value> {
        read_field(self, key)
    }

    /// Copy of `self` with `key` replaced; `self` is left as is.
    fn patched(&self, key: &str, value: Value) -> Result<Self, FieldError> {
        self.descriptor(key)?;
        patch_field(self, key, value).map_err(|e| FieldError::Rejected {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    /// Store an already-parsed value, then run [`FieldTarget::after_commit`].
    fn set_field(&mut self, key: &str, value: Value) -> Result<(), FieldError> {
        *self = self.patched(key, value)?;
        self.after_commit();
        Ok(())
    }

    /// Parse, store, and normalize raw panel input.
    fn commit(&mut self, key: &str, input: &FieldInput) -> Result<(), FieldError> {
        let value = self.descriptor(key)?.parse_input(input)?;
        self.set_field(key, value)
    }
}

impl FieldTarget for Item {
    fn fields(&self) -> &'static [FieldDescriptor] {
        self.kind().map(ItemKind::fields).unwrap_or(&[])
    }

    fn after_commit(&mut self) {
        self.normalize();
    }

    // A payload that no longer fits its tag would reload as an unknown
    // item, so it is refused instead.
    fn set_field(&mut self, key: &str, value: Value) -> Result<(), FieldError> {
        let updated = self.patched(key, value)?;
        if updated.kind() != self.kind() {
            return Err(FieldError::Rejected {
                key: key.to_string(),
                message: format!("value does not fit a {} item", self.type_tag()),
            });
        }
        *self = updated;
        self.after_commit();
        Ok(())
    }
}

impl FieldTarget for WindowConfig {
    fn fields(&self) -> &'static [FieldDescriptor] {
        WINDOW_FIELDS
    }
}

impl FieldTarget for Tab {
    fn fields(&self) -> &'static [FieldDescriptor] {
        TAB_FIELDS
    }
}

impl ItemKind {
    pub fn fields(self) -> &'static [FieldDescriptor] {
        match self {
            ItemKind::Section => SECTION_FIELDS,
            ItemKind::Group => GROUP_FIELDS,
            ItemKind::Paragraph => PARAGRAPH_FIELDS,
            ItemKind::Image => IMAGE_FIELDS,
            ItemKind::Divider | ItemKind::Space => &[],
            ItemKind::Code => CODE_FIELDS,
            ItemKind::Video => VIDEO_FIELDS,
            ItemKind::Button => BUTTON_FIELDS,
            ItemKind::Toggle => TOGGLE_FIELDS,
            ItemKind::Slider => SLIDER_FIELDS,
            ItemKind::Input | ItemKind::Textarea => INPUT_FIELDS,
            ItemKind::Dropdown => DROPDOWN_FIELDS,
            ItemKind::Colorpicker => COLORPICKER_FIELDS,
            ItemKind::Keybind => KEYBIND_FIELDS,
        }
    }
}

use FieldKind::*;

pub static WINDOW_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text).help("Window title text"),
    field("author", "Author", Text).help("Optional author string"),
    field("folder", "Folder", Text).help("Folder name for configs"),
    field("theme", "Theme", Text).help("Theme name (e.g. Dark)"),
    field("size", "Size (lua:UDim2...)", Text).help("lua:UDim2.fromOffset(580,460)"),
    field("minSize", "MinSize (lua:Vector2...)", Text).help("lua:Vector2.new(560,350)"),
    field("maxSize", "MaxSize (lua:Vector2...)", Text).help("lua:Vector2.new(850,560)"),
    field("transparent", "Transparent", Checkbox).help("true/false"),
    field("resizable", "Resizable", Checkbox),
    field("sideBarWidth", "SideBarWidth", Number).help("Number (e.g. 200)").min(0.0),
    field("background", "Background", Text).help("rbxassetid:// or video:URL"),
    field("backgroundImageTransparency", "BackgroundImageTransparency", Number)
        .help("0..1")
        .min(0.0)
        .max(1.0),
    field("hideSearchBar", "HideSearchBar", Checkbox),
    field("scrollBarEnabled", "ScrollBarEnabled", Checkbox),
    field("tags", "Tags (title|color|radius per line)", Tags).help("Example: v1.2|#ff8a00|8"),
];

pub static TAB_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text).help("Tab title"),
    field("locked", "Locked", Checkbox),
    field("section", "Tab Section (builder)", Text).help("Groups tabs in sidebar section"),
];

static SECTION_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text).help("Section title"),
    field("box", "Box", Checkbox),
    field("fontWeight", "FontWeight", Select)
        .options(&["Regular", "Semibold", "Bold"])
        .help("Regular/Semibold/Bold"),
    field("textTransparency", "TextTransparency", Number).help("0..1").min(0.0).max(1.0),
    field("textXAlignment", "TextXAlignment", Select)
        .options(&["Left", "Center", "Right"])
        .help("Left/Center/Right"),
    field("textSize", "TextSize", Number).help("Number (e.g. 18)").min(0.0),
    field("opened", "Opened", Checkbox),
];

static GROUP_FIELDS: &[FieldDescriptor] = &[field("title", "Title", Text).help("Builder-only group title")];

static PARAGRAPH_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text).help("Paragraph title"),
    field("desc", "Desc", Textarea).help("Paragraph description"),
    field("color", "Color (name or #hex)", Text)
        .help("Name or #RRGGBB")
        .validated(Validator::Color),
    field("image", "Image", Text).help("rbxassetid:// or URL"),
    field("imageSize", "ImageSize", Number).help("Number (e.g. 20)").min(0.0),
    field("thumbnail", "Thumbnail", Text).help("rbxassetid:// or URL"),
    field("thumbnailSize", "ThumbnailSize", Number).help("Number (e.g. 80)").min(0.0),
    field("buttons", "Buttons (one per line)", Buttons).help("One per line"),
    field("locked", "Locked", Checkbox),
];

static IMAGE_FIELDS: &[FieldDescriptor] = &[
    field("src", "Image src", Text).help("rbxassetid:// or URL"),
    field("aspectRatio", "AspectRatio", Ratio)
        .options(&["16:9", "4:3", "1:1", "3:2", "21:9"])
        .help("16:9 or 1.777"),
    field("radius", "Radius", Number).help("Corner radius").min(0.0),
];

static CODE_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text).help("Filename/title"),
    field("code", "Code", Textarea).help("Code content"),
    field("onCopy", "OnCopy (stub)", Checkbox),
];

static VIDEO_FIELDS: &[FieldDescriptor] = &[field("src", "Video src", Text)];

static BUTTON_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text),
    field("desc", "Desc", Text),
    field("locked", "Locked", Checkbox),
    field("callback", "Callback (stub)", Checkbox),
];

static TOGGLE_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text),
    field("desc", "Desc", Text),
    field("typeValue", "Type (Toggle/Checkbox)", Select)
        .options(&["Toggle", "Checkbox"])
        .help("Toggle or Checkbox"),
    field("value", "Value", Checkbox).help("true/false"),
    field("locked", "Locked", Checkbox),
    field("callback", "Callback (stub)", Checkbox),
];

static SLIDER_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text),
    field("desc", "Desc", Text),
    field("min", "Min", Number).help("Min value"),
    field("max", "Max", Number).help("Max value"),
    field("value", "Default", Number).help("Default value"),
    field("step", "Step", Number).help("Step (e.g. 1)").min(0.0),
    field("locked", "Locked", Checkbox),
    field("callback", "Callback (stub)", Checkbox),
];

static INPUT_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text),
    field("desc", "Desc", Text),
    field("value", "Value", Text).help("Default value"),
    field("inputType", "Type", Select)
        .options(&["Input", "Textarea"])
        .help("Input or Textarea"),
    field("placeholder", "Placeholder", Text).help("Placeholder text"),
    field("callback", "Callback (stub)", Checkbox),
];

static DROPDOWN_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text),
    field("desc", "Desc", Text),
    field("options", "Values (one per line)", List).help("Values list"),
    field("value", "Value", Text).help("Selected value"),
    field("multi", "Multi", Checkbox).help("Multi-select"),
    field("allowNone", "AllowNone", Checkbox).help("Allow none"),
    field("callback", "Callback (stub)", Checkbox),
];

static COLORPICKER_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text),
    field("desc", "Desc", Text),
    field("value", "Default", Text)
        .help("#RRGGBB or name")
        .validated(Validator::Color),
    field("transparency", "Transparency", Number).help("0..1").min(0.0).max(1.0),
    field("locked", "Locked", Checkbox),
    field("callback", "Callback (stub)", Checkbox),
];

static KEYBIND_FIELDS: &[FieldDescriptor] = &[
    field("title", "Title", Text),
    field("desc", "Desc", Text),
    field("value", "Value", Text).help("Key name (e.g. G)"),
    field("locked", "Locked", Checkbox),
    field("callback", "Callback (stub)", Checkbox),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;

    #[test]
    fn test_every_descriptor_key_round_trips_through_serde() {
        // Setting a field must change the stored record; a typo in a key
        // would be silently dropped by serde instead.
        for kind in ItemKind::ALL {
            for descriptor in kind.fields() {
                let mut item = Item::new(kind);
                let input = match descriptor.kind {
                    FieldKind::Checkbox => FieldInput::Checked(true),
                    FieldKind::Number => FieldInput::from("1"),
                    FieldKind::Ratio => FieldInput::from("4:3"),
                    FieldKind::Text | FieldKind::Textarea | FieldKind::Select => {
                        if descriptor.validator == Some(Validator::Color) {
                            FieldInput::from("#123456")
                        } else {
                            FieldInput::from(descriptor.options.first().copied().unwrap_or("Probe"))
                        }
                    }
                    FieldKind::List | FieldKind::Buttons | FieldKind::Tags => FieldInput::from("one\ntwo"),
                };
                item.commit(descriptor.key, &input)
                    .unwrap_or_else(|e| panic!("{}.{}: {}", kind, descriptor.key, e));
                assert!(
                    item.field_value(descriptor.key).is_some(),
                    "{}.{} not stored",
                    kind,
                    descriptor.key
                );
            }
        }
    }

    #[test]
    fn test_number_bounds() {
        let mut item = Item::new(ItemKind::Colorpicker);
        let err = item.commit("transparency", &FieldInput::from("1.5")).unwrap_err();
        assert!(matches!(err, FieldError::OutOfRange { .. }));
        assert_eq!(item.field_value("transparency"), None);

        item.commit("transparency", &FieldInput::from("0.25")).unwrap();
        assert_eq!(item.field_value("transparency"), Some(json!(0.25)));

        let err = item.commit("transparency", &FieldInput::from("half")).unwrap_err();
        assert!(matches!(err, FieldError::Invalid { .. }));
        assert_eq!(item.field_value("transparency"), Some(json!(0.25)));
    }

    #[test]
    fn test_empty_input_clears() {
        let mut item = Item::new(ItemKind::Slider);
        item.commit("step", &FieldInput::from("")).unwrap();
        assert_eq!(item.field_value("step"), None);

        let mut item = Item::new(ItemKind::Colorpicker);
        item.commit("value", &FieldInput::from("")).unwrap();
        assert_eq!(item.field_value("value"), None);
    }

    #[test]
    fn test_invalid_color_keeps_value() {
        let mut item = Item::new(ItemKind::Colorpicker);
        let err = item.commit("value", &FieldInput::from("#ffff")).unwrap_err();
        assert!(matches!(err, FieldError::Invalid { .. }));
        assert_eq!(item.field_value("value"), Some(json!("#30ff6a")));
    }

    #[test]
    fn test_ratio_is_trimmed() {
        let mut item = Item::new(ItemKind::Image);
        item.commit("aspectRatio", &FieldInput::from(" 16:9 ")).unwrap();
        assert_eq!(item.field_value("aspectRatio"), Some(json!("16:9")));

        assert!(item.commit("aspectRatio", &FieldInput::from("16:0")).is_err());
        assert_eq!(item.field_value("aspectRatio"), Some(json!("16:9")));
    }

    #[test]
    fn test_commit_normalizes() {
        let mut item = Item::new(ItemKind::Toggle);
        item.commit("typeValue", &FieldInput::from("checkbox")).unwrap();
        assert_eq!(item.field_value("typeValue"), Some(json!("Checkbox")));
    }

    #[test]
    fn test_list_and_buttons() {
        let mut item = Item::new(ItemKind::Dropdown);
        item.commit("options", &FieldInput::from(" a \n\n b ")).unwrap();
        assert_eq!(item.field_value("options"), Some(json!(["a", "b"])));

        let mut item = Item::new(ItemKind::Paragraph);
        item.commit("buttons", &FieldInput::from("Yes\nNo")).unwrap();
        assert_eq!(
            item.field_value("buttons"),
            Some(json!([{ "title": "Yes" }, { "title": "No" }]))
        );
    }

    #[test]
    fn test_unknown_and_mistyped_fields() {
        let mut item = Item::new(ItemKind::Divider);
        assert_eq!(
            item.commit("title", &FieldInput::from("x")),
            Err(FieldError::UnknownField("title".to_string()))
        );

        let mut item = Item::new(ItemKind::Button);
        assert!(matches!(
            item.commit("locked", &FieldInput::from("yes")),
            Err(FieldError::WrongInput { .. })
        ));
    }

    #[test]
    fn test_ill_typed_value_keeps_item_kind() {
        let mut item = Item::new(ItemKind::Slider);
        let before = item.clone();

        let err = item.set_field("max", json!("lots")).unwrap_err();
        assert!(matches!(err, FieldError::Rejected { .. }));
        assert_eq!(item, before);
        assert_eq!(item.kind(), Some(ItemKind::Slider));
    }

    #[test]
    fn test_window_and_tab_targets() {
        let mut window = WindowConfig::default();
        window.commit("tags", &FieldInput::from("v1.2|#ff8a00|8\nbeta")).unwrap();
        assert_eq!(window.tags.len(), 2);
        assert_eq!(window.tags[0].radius, Some(Scalar::Number(8.0)));

        window.commit("sideBarWidth", &FieldInput::from("200")).unwrap();
        assert_eq!(window.side_bar_width, Some(200.0));
        assert!(window.commit("sideBarWidth", &FieldInput::from("-1")).is_err());

        let mut tab = Tab::new("Main tab");
        tab.commit("section", &FieldInput::from("Combat")).unwrap();
        assert_eq!(tab.section, "Combat");
        tab.commit("section", &FieldInput::from("")).unwrap();
        assert_eq!(tab.section, "Main");
        tab.commit("locked", &FieldInput::Checked(true)).unwrap();
        assert_eq!(tab.locked, Some(true));
    }
}
