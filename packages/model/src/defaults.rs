//! Default payloads for newly created items.
//!
//! Every call builds a fresh value, so inserted items never share state with
//! each other or with this table.

use crate::item::*;

impl Item {
    /// Build the default item for a palette kind, normalized.
    pub fn new(kind: ItemKind) -> Item {
        let mut item = default_payload(kind);
        item.normalize();
        item
    }
}

fn title(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn default_payload(kind: ItemKind) -> Item {
    match kind {
        ItemKind::Section => Item::Section(SectionItem {
            title: title("Section"),
            ..Default::default()
        }),
        ItemKind::Group => Item::Group(GroupItem {
            title: title("Group"),
            items: Vec::new(),
        }),
        ItemKind::Paragraph => Item::Paragraph(ParagraphItem {
            title: title("Paragraph"),
            desc: Some("Description".to_string()),
            ..Default::default()
        }),
        ItemKind::Button => Item::Button(ButtonItem {
            title: title("Button"),
            desc: Some(String::new()),
            ..Default::default()
        }),
        ItemKind::Toggle => Item::Toggle(ToggleItem {
            title: title("Toggle"),
            type_value: Some("Toggle".to_string()),
            value: false,
            ..Default::default()
        }),
        ItemKind::Slider => Item::Slider(SliderItem {
            title: title("Slider"),
            min: Some(0.0),
            max: Some(100.0),
            step: Some(1.0),
            value: Some(50.0),
            ..Default::default()
        }),
        ItemKind::Keybind => Item::Keybind(KeybindItem {
            title: title("Keybind"),
            value: Some("G".to_string()),
            ..Default::default()
        }),
        ItemKind::Input => Item::Input(InputItem {
            title: title("Input"),
            placeholder: Some("Enter text".to_string()),
            input_type: Some("Input".to_string()),
            ..Default::default()
        }),
        ItemKind::Textarea => Item::Textarea(InputItem {
            title: title("Textarea"),
            placeholder: Some("Enter text".to_string()),
            input_type: Some("Textarea".to_string()),
            ..Default::default()
        }),
        ItemKind::Dropdown => Item::Dropdown(DropdownItem {
            title: title("Dropdown"),
            options: vec!["Option 1".to_string(), "Option 2".to_string()],
            ..Default::default()
        }),
        ItemKind::Code => Item::Code(CodeItem {
            title: title("Code"),
            code: Some("print(\"Hello\")".to_string()),
            language: Some("lua".to_string()),
            ..Default::default()
        }),
        ItemKind::Colorpicker => Item::Colorpicker(ColorpickerItem {
            title: title("Colorpicker"),
            value: Some("#30ff6a".to_string()),
            ..Default::default()
        }),
        ItemKind::Divider => Item::Divider(DividerItem {}),
        ItemKind::Space => Item::Space(SpaceItem { size: Some(8.0) }),
        ItemKind::Image => Item::Image(ImageItem {
            src: Some("../docs/ui.png".to_string()),
            ..Default::default()
        }),
        ItemKind::Video => Item::Video(VideoItem {
            src: Some(String::new()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_default() {
        for kind in ItemKind::ALL {
            let item = Item::new(kind);
            assert_eq!(item.kind(), Some(kind));
        }
    }

    #[test]
    fn test_slider_default() {
        match Item::new(ItemKind::Slider) {
            Item::Slider(s) => {
                assert_eq!(s.min, Some(0.0));
                assert_eq!(s.max, Some(100.0));
                assert_eq!(s.step, Some(1.0));
                assert_eq!(s.value, Some(50.0));
            }
            other => panic!("Expected slider, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_do_not_alias() {
        let mut first = Item::new(ItemKind::Group);
        let second = Item::new(ItemKind::Group);

        first
            .children_mut()
            .unwrap()
            .push(Item::new(ItemKind::Divider));

        assert_eq!(second.children().map(Vec::len), Some(0));
        assert_eq!(Item::new(ItemKind::Group).children().map(Vec::len), Some(0));
    }

    #[test]
    fn test_defaults_are_already_normal() {
        for kind in ItemKind::ALL {
            let item = Item::new(kind);
            let mut again = item.clone();
            again.normalize();
            assert_eq!(item, again, "{} default changed under normalize", kind);
        }
    }
}
