use serde::Serialize;
use wasm_bindgen::prelude::*;
use windstudio_compiler_lua::{CompileOptions, DEFAULT_FILE_NAME};
use windstudio_editor::{EditSession, Locator, Mutation, Selection};
use windstudio_model::{Document, FieldInput, ItemKind};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

/// `null`/absent selects the window, `[]` the tab, `[i, j]` an item.
fn parse_path(path_json: Option<&str>) -> Result<Option<Vec<usize>>, String> {
    match path_json.map(str::trim) {
        None | Some("") | Some("null") => Ok(None),
        Some(json) => serde_json::from_str(json)
            .map(Some)
            .map_err(|e| format!("Invalid path {}: {}", json, e)),
    }
}

/// One editing session held by the browser host.
#[wasm_bindgen]
pub struct Studio {
    session: EditSession,
}

impl Studio {
    fn open(fixture: Option<&str>, loader_url: Option<&str>) -> Result<Studio, String> {
        let session = match fixture {
            Some(source) => EditSession::from_json(source).map_err(|e| format!("Load error: {}", e))?,
            None => EditSession::new(Document::new()),
        };
        let options = match loader_url {
            Some(url) => CompileOptions::default().with_loader_url(url),
            None => CompileOptions::default(),
        };
        Ok(Studio {
            session: session.with_options(options),
        })
    }

    /// Returns whether the mutation changed anything.
    fn run(&mut self, mutation: Mutation) -> Result<bool, String> {
        self.session
            .apply(mutation)
            .map(|result| result.applied)
            .map_err(|e| e.to_string())
    }

    fn select_path(&mut self, tab_index: usize, path_json: Option<&str>) -> Result<(), String> {
        let path = parse_path(path_json)?;
        self.session.select(Selection { tab_index, path });
        Ok(())
    }

    fn add_element_named(&mut self, kind: &str) -> Result<bool, String> {
        let kind: ItemKind = kind.parse().map_err(|e: windstudio_model::ModelError| e.to_string())?;
        self.run(Mutation::AddElement { kind })
    }

    fn move_path(&mut self, tab_index: usize, from_json: &str, to_json: &str) -> Result<bool, String> {
        let from = parse_path(Some(from_json))?.unwrap_or_default();
        let to = parse_path(Some(to_json))?.unwrap_or_default();
        self.run(Mutation::MoveTo {
            from: Locator::new(tab_index, from),
            to: Locator::new(tab_index, to),
        })
    }
}

#[wasm_bindgen]
impl Studio {
    /// Open a fixture (JSON) or, when `fixture` is absent, a fresh document.
    #[wasm_bindgen(constructor)]
    pub fn new(fixture: Option<String>, loader_url: Option<String>) -> Result<Studio, JsValue> {
        Studio::open(fixture.as_deref(), loader_url.as_deref()).map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.session.version() as f64
    }

    pub fn select(&mut self, tab_index: usize, path_json: Option<String>) -> Result<(), JsValue> {
        self.select_path(tab_index, path_json.as_deref()).map_err(js_error)
    }

    /// Apply a serialized mutation, e.g. `{"op":"moveUp"}`.
    #[wasm_bindgen(js_name = applyJson)]
    pub fn apply_json(&mut self, mutation_json: &str) -> Result<bool, JsValue> {
        let mutation: Mutation =
            serde_json::from_str(mutation_json).map_err(|e| js_error(format!("Invalid mutation: {}", e)))?;
        self.run(mutation).map_err(js_error)
    }

    #[wasm_bindgen(js_name = addElement)]
    pub fn add_element(&mut self, kind: &str) -> Result<bool, JsValue> {
        self.add_element_named(kind).map_err(js_error)
    }

    #[wasm_bindgen(js_name = addTab)]
    pub fn add_tab(&mut self) -> Result<bool, JsValue> {
        self.run(Mutation::AddTab).map_err(js_error)
    }

    pub fn duplicate(&mut self) -> Result<bool, JsValue> {
        self.run(Mutation::Duplicate).map_err(js_error)
    }

    #[wasm_bindgen(js_name = moveUp)]
    pub fn move_up(&mut self) -> Result<bool, JsValue> {
        self.run(Mutation::MoveUp).map_err(js_error)
    }

    #[wasm_bindgen(js_name = moveDown)]
    pub fn move_down(&mut self) -> Result<bool, JsValue> {
        self.run(Mutation::MoveDown).map_err(js_error)
    }

    /// Drag reorder inside one container of tab `tab_index`.
    #[wasm_bindgen(js_name = moveTo)]
    pub fn move_to(&mut self, tab_index: usize, from_json: &str, to_json: &str) -> Result<bool, JsValue> {
        self.move_path(tab_index, from_json, to_json).map_err(js_error)
    }

    pub fn delete(&mut self) -> Result<bool, JsValue> {
        self.run(Mutation::Delete).map_err(js_error)
    }

    #[wasm_bindgen(js_name = commitField)]
    pub fn commit_field(&mut self, key: &str, text: &str) -> Result<bool, JsValue> {
        self.run(Mutation::SetField {
            key: key.to_string(),
            input: FieldInput::from(text),
        })
        .map_err(js_error)
    }

    #[wasm_bindgen(js_name = commitCheckbox)]
    pub fn commit_checkbox(&mut self, key: &str, checked: bool) -> Result<bool, JsValue> {
        self.run(Mutation::SetField {
            key: key.to_string(),
            input: FieldInput::from(checked),
        })
        .map_err(js_error)
    }

    #[wasm_bindgen(js_name = documentJson)]
    pub fn document_json(&self) -> Result<String, JsValue> {
        to_json(self.session.document()).map_err(js_error)
    }

    #[wasm_bindgen(js_name = selectionJson)]
    pub fn selection_json(&self) -> Result<String, JsValue> {
        to_json(self.session.selection()).map_err(js_error)
    }

    /// Field descriptors with current values for the property panel.
    #[wasm_bindgen(js_name = fieldsJson)]
    pub fn fields_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.field_states()).map_err(js_error)
    }

    #[wasm_bindgen(js_name = outlineJson)]
    pub fn outline_json(&self, filter: Option<String>) -> Result<String, JsValue> {
        to_json(&self.session.outline(filter.as_deref().unwrap_or(""))).map_err(js_error)
    }

    #[wasm_bindgen(js_name = exportText)]
    pub fn export_text(&self) -> String {
        self.session.export_text()
    }

    /// Name the host should use when offering the script as a download.
    #[wasm_bindgen(js_name = exportFileName)]
    pub fn export_file_name(&self, requested: Option<String>) -> String {
        let requested = requested.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        self.session.export_file(&requested).file_name
    }
}

/// Palette of insertable item kinds as `[{ "tag", "label" }]`.
#[wasm_bindgen(js_name = paletteJson)]
pub fn palette_json() -> Result<String, JsValue> {
    #[derive(Serialize)]
    struct Entry {
        tag: &'static str,
        label: &'static str,
    }

    let entries: Vec<Entry> = ItemKind::ALL
        .iter()
        .map(|kind| Entry {
            tag: kind.tag(),
            label: kind.label(),
        })
        .collect();
    to_json(&entries).map_err(js_error)
}
