//! Export verbs: the generated script as text, or wrapped as a named file.
//! Both go through the same compile call, so their contents always agree.

use crate::compiler::compile_to_lua;
use crate::context::CompileOptions;
use serde::Serialize;
use std::path::{Path, PathBuf};
use windstudio_model::Document;

pub const DEFAULT_FILE_NAME: &str = "windui-preview.lua";
pub const MIME_TYPE: &str = "text/plain";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Write into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}

pub fn export_text(document: &Document, options: &CompileOptions) -> String {
    compile_to_lua(document, options.clone())
}

pub fn export_file(document: &Document, options: &CompileOptions, file_name: &str) -> ExportFile {
    let file_name = if file_name.trim().is_empty() {
        DEFAULT_FILE_NAME
    } else {
        file_name
    };
    ExportFile {
        file_name: file_name.to_string(),
        mime_type: MIME_TYPE,
        contents: export_text(document, options),
    }
}
