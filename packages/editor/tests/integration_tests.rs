//! Integration tests for editor crate

use windstudio_editor::{EditSession, Mutation, Selection};
use windstudio_model::{Document, FieldInput, Item, ItemKind};

#[test]
fn test_session_lifecycle() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::sample());

    session.select_item(1, vec![9]);
    session.apply(Mutation::AddElement { kind: ItemKind::Group })?;
    assert_eq!(session.selection(), &Selection::item(1, vec![10]));

    session.apply(Mutation::AddElement { kind: ItemKind::Keybind })?;
    assert_eq!(session.selection(), &Selection::item(1, vec![10, 0]));

    session.commit_field("value", FieldInput::from("F"))?;
    session.commit_field("title", FieldInput::from("Fly"))?;

    let lua = session.export_text();
    assert!(lua.contains("local Tab_2_Group0_10 = Tab_2:Group({})"));
    assert!(lua.contains("    Tab_2_Group0_10:Keybind({\n        Title = \"Fly\",\n        Value = \"F\",\n"));
    assert_eq!(session.version(), 4);
    Ok(())
}

#[test]
fn test_add_tab_then_rename_and_regroup() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::sample());

    session.apply(Mutation::AddTab)?;
    assert_eq!(session.selection(), &Selection::tab(2));

    session.commit_field("title", FieldInput::from("Settings"))?;
    session.commit_field("section", FieldInput::from("Config"))?;
    session.commit_field("locked", FieldInput::Checked(true))?;

    let lua = session.export_text();
    assert!(lua.contains("local Section_Config = Window:Section({ Title = \"Config\", Opened = true })"));
    assert!(lua.contains("local Tab_3 = Section_Config:Tab({\n    Title = \"Settings\",\n    Locked = true,\n})"));
    Ok(())
}

#[test]
fn test_window_commits_reach_export() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::sample());
    session.select_window();

    session.commit_field("size", FieldInput::from("lua:UDim2.fromOffset(580,460)"))?;
    session.commit_field("tags", FieldInput::from("v2|#ff8a00|8"))?;

    let lua = session.export_text();
    assert!(lua.contains("    Size = UDim2.fromOffset(580,460),\n"));
    assert!(lua.contains("Window:Tag({\n    Title = \"v2\",\n    Color = Color3.fromHex(\"#ff8a00\"),\n    Radius = 8,\n})"));
    assert!(!lua.contains("v1.6.64"));
    Ok(())
}

#[test]
fn test_stale_selection_reads_as_nothing_selected() {
    let mut session = EditSession::new(Document::sample());
    session.select_item(0, vec![4]);
    assert!(session.selected_item().is_some());

    session.apply(Mutation::Delete).unwrap();
    session.select_item(0, vec![4]);

    assert!(session.selected_item().is_none());
    assert!(session.fields_for_selection().is_empty());

    let result = session.apply(Mutation::Duplicate).unwrap();
    assert!(!result.applied);

    let result = session
        .commit_field("title", FieldInput::from("ghost"))
        .unwrap();
    assert!(!result.applied);
}

#[test]
fn test_commit_normalizes_item() {
    let mut session = EditSession::new(Document::new());
    session.apply(Mutation::AddElement { kind: ItemKind::Section }).unwrap();
    session
        .commit_field("textXAlignment", FieldInput::from("center"))
        .unwrap();

    match session.selected_item() {
        Some(Item::Section(section)) => assert_eq!(section.text_x_alignment.as_deref(), Some("Center")),
        other => panic!("Expected section, got {:?}", other),
    }
}

#[test]
fn test_session_from_json_normalizes() {
    let mut session = EditSession::from_json(
        r#"{ "window": {}, "tabs": [{ "title": "T", "items": [{ "type": "toggle", "typeValue": "CHECKBOX" }] }] }"#,
    )
    .unwrap();
    session.select_item(0, vec![0]);

    let states = session.field_states();
    let type_value = states.iter().find(|s| s.descriptor.key == "typeValue").unwrap();
    assert_eq!(type_value.value, Some(serde_json::json!("Checkbox")));

    assert!(EditSession::from_json("{ not json").is_err());
}
