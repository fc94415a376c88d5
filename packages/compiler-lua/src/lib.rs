mod compiler;
mod context;
mod export;
pub mod literal;

pub use compiler::compile_to_lua;
pub use context::{CompileOptions, CompilerContext, DEFAULT_LOADER_URL};
pub use export::{export_file, export_text, ExportFile, DEFAULT_FILE_NAME, MIME_TYPE};
