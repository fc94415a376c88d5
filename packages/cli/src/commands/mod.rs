pub mod compile;
pub mod init;
pub mod outline;

pub use compile::{compile, CompileArgs};
pub use init::{init, InitArgs};
pub use outline::{outline, OutlineArgs};

use anyhow::{Context, Result};
use std::path::PathBuf;
use windstudio_editor::EditSession;

/// Read a document fixture relative to `cwd` and open a session on it.
pub(crate) fn open_fixture(path: &str, cwd: &str) -> Result<EditSession> {
    let fixture_path = PathBuf::from(cwd).join(path);
    let source = std::fs::read_to_string(&fixture_path)
        .with_context(|| format!("Cannot read {}", fixture_path.display()))?;

    EditSession::from_json(&source).with_context(|| format!("Invalid document {}", fixture_path.display()))
}
