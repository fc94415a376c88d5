//! Lua literal conversion.
//!
//! Every raw string the compiler writes goes through one of these functions.
//! [`lua_value`] is the only place that honors the `lua:` passthrough marker
//! and the Roblox constructor prefixes.

/// Prefix marking a raw Lua expression, emitted without quoting.
pub const PASSTHROUGH_MARKER: &str = "lua:";

const CONSTRUCTOR_PREFIXES: [&str; 5] = ["UDim2.", "Color3.", "ColorSequence.", "Vector2.", "NumberSequence."];

/// Quoted Lua string with `\`, `"` and newlines escaped.
pub fn lua_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn lua_number(value: f64) -> String {
    value.to_string()
}

pub fn lua_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Passthrough-aware conversion for free-form string fields.
pub fn lua_value(value: &str) -> String {
    let trimmed = value.trim();
    if let Some(raw) = trimmed.strip_prefix(PASSTHROUGH_MARKER) {
        return raw.to_string();
    }
    if is_constructor(trimmed) {
        return trimmed.to_string();
    }
    lua_string(trimmed)
}

/// `#hex` becomes `Color3.fromHex(...)`; empty becomes `nil`.
pub fn lua_color(value: &str) -> String {
    if value.is_empty() {
        return "nil".to_string();
    }
    if value.starts_with('#') {
        return format!("Color3.fromHex({})", lua_string(value));
    }
    if let Some(raw) = value.strip_prefix(PASSTHROUGH_MARKER) {
        return raw.to_string();
    }
    if value.starts_with("Color3.") {
        return value.to_string();
    }
    lua_string(value)
}

/// `{ "a", "b" }`, or `{}` when empty.
pub fn lua_list<S: AsRef<str>>(values: &[S]) -> String {
    if values.is_empty() {
        return "{}".to_string();
    }
    let parts: Vec<String> = values.iter().map(|v| lua_string(v.as_ref())).collect();
    format!("{{ {} }}", parts.join(", "))
}

/// Lua identifier fragment: non-word characters become `_`, a leading digit
/// gets a `_` prefix.
pub fn safe_name(name: &str) -> String {
    let name = if name.is_empty() { "item" } else { name };
    let mut out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

fn is_constructor(value: &str) -> bool {
    CONSTRUCTOR_PREFIXES.iter().any(|p| value.starts_with(p))
}
