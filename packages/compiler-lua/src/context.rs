use std::cell::{Cell, RefCell};

/// WindUI release loader fetched by the generated preamble.
pub const DEFAULT_LOADER_URL: &str = "https://github.com/Footagesus/WindUI/releases/latest/download/main.lua";

/// Options for Lua compilation
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOptions {
    /// URL passed to `game:HttpGet` in the bootstrap line
    pub loader_url: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            loader_url: DEFAULT_LOADER_URL.to_string(),
        }
    }
}

impl CompileOptions {
    pub fn with_loader_url(mut self, url: impl Into<String>) -> Self {
        self.loader_url = url.into();
        self
    }
}

/// Compilation context for managing state during code generation
pub struct CompilerContext {
    buffer: RefCell<String>,
    indent_level: Cell<usize>,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: RefCell::new(String::new()),
            indent_level: Cell::new(0),
            options,
        }
    }

    pub fn add_line(&self, text: &str) {
        let mut buffer = self.buffer.borrow_mut();
        for _ in 0..self.indent_level.get() {
            buffer.push_str("    ");
        }
        buffer.push_str(text);
        buffer.push('\n');
    }

    /// `Key = value,` inside a table constructor.
    pub fn add_field(&self, key: &str, value: &str) {
        self.add_line(&format!("{} = {},", key, value));
    }

    pub fn indent(&self) {
        self.indent_level.set(self.indent_level.get() + 1);
    }

    pub fn dedent(&self) {
        let level = self.indent_level.get();
        if level > 0 {
            self.indent_level.set(level - 1);
        }
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }
}
