use crate::context::{CompileOptions, CompilerContext};
use crate::literal::{lua_bool, lua_color, lua_list, lua_number, lua_string, lua_value, safe_name};
use std::collections::HashSet;
use tracing::debug;
use windstudio_model::*;

/// Compile a WindStudio document to a WindUI Lua script.
///
/// Pure and deterministic: the same document always yields the same text.
pub fn compile_to_lua(document: &Document, options: CompileOptions) -> String {
    let ctx = CompilerContext::new(options);

    compile_preamble(&ctx);
    compile_window(&document.window, &ctx);
    compile_tags(&document.window.tags, &ctx);

    let sections = group_by_section(&document.tabs);
    compile_sections(&sections, &ctx);
    let tab_vars = compile_tabs(&document.tabs, &sections, &ctx);

    for (tab, tab_var) in document.tabs.iter().zip(&tab_vars) {
        ctx.add_line(&format!("-- {}", tab_label(tab)));
        compile_items(tab_var, &tab.items, 0, &ctx);
    }

    debug!(
        sections = sections.len(),
        tabs = document.tabs.len(),
        "compiled document to lua"
    );

    // Joined lines, no final newline.
    let mut output = ctx.get_output();
    if output.ends_with('\n') {
        output.pop();
    }
    output
}

fn compile_preamble(ctx: &CompilerContext) {
    ctx.add_line(&format!(
        "local WindUI = loadstring(game:HttpGet({}))()",
        lua_string(&ctx.options.loader_url)
    ));
    ctx.add_line("if not WindUI then return end");
}

fn compile_window(window: &WindowConfig, ctx: &CompilerContext) {
    ctx.add_line("local Window = WindUI:CreateWindow({");
    ctx.indent();

    ctx.add_field("Title", &lua_string(text(&window.title).unwrap_or("WindUI")));
    if let Some(author) = text(&window.author) {
        ctx.add_field("Author", &lua_string(author));
    }
    if let Some(folder) = text(&window.folder) {
        ctx.add_field("Folder", &lua_string(folder));
    }
    if let Some(theme) = text(&window.theme) {
        ctx.add_field("Theme", &lua_string(theme));
    }
    if let Some(size) = text(&window.size) {
        ctx.add_field("Size", &lua_value(size));
    }
    if let Some(min_size) = text(&window.min_size) {
        ctx.add_field("MinSize", &lua_value(min_size));
    }
    if let Some(max_size) = text(&window.max_size) {
        ctx.add_field("MaxSize", &lua_value(max_size));
    }
    if let Some(resizable) = window.resizable {
        ctx.add_field("Resizable", lua_bool(resizable));
    }
    if let Some(enabled) = window.scroll_bar_enabled {
        ctx.add_field("ScrollBarEnabled", lua_bool(enabled));
    }
    if let Some(hide) = window.hide_search_bar {
        ctx.add_field("HideSearchBar", lua_bool(hide));
    }
    if let Some(width) = non_zero(window.side_bar_width) {
        ctx.add_field("SideBarWidth", &lua_number(width));
    }
    if let Some(transparent) = window.transparent {
        ctx.add_field("Transparent", lua_bool(transparent));
    }
    if let Some(background) = text(&window.background) {
        ctx.add_field("Background", &lua_string(background));
    }
    if let Some(t) = window.background_image_transparency {
        ctx.add_field("BackgroundImageTransparency", &lua_number(t));
    }

    ctx.dedent();
    ctx.add_line("})");
}

fn compile_tags(tags: &[Tag], ctx: &CompilerContext) {
    for tag in tags {
        ctx.add_line("Window:Tag({");
        ctx.indent();
        ctx.add_field("Title", &lua_string(tag.label().unwrap_or("Tag")));
        if let Some(color) = text(&tag.color) {
            ctx.add_field("Color", &lua_color(color));
        }
        match &tag.radius {
            Some(Scalar::Number(n)) => ctx.add_field("Radius", &lua_number(*n)),
            Some(Scalar::Text(s)) => ctx.add_field("Radius", &lua_value(s)),
            None => {}
        }
        ctx.dedent();
        ctx.add_line("})");
    }
}

/// A distinct section name, its Lua variable, and its tabs' indices.
struct SectionGroup {
    name: String,
    var: String,
    tabs: Vec<usize>,
}

/// Buckets tabs by section name in first-seen order.
fn group_by_section(tabs: &[Tab]) -> Vec<SectionGroup> {
    let mut groups: Vec<SectionGroup> = Vec::new();
    let mut used_vars = HashSet::new();

    for (index, tab) in tabs.iter().enumerate() {
        let name = tab.section_name();
        if let Some(group) = groups.iter_mut().find(|g| g.name == name) {
            group.tabs.push(index);
            continue;
        }

        let base = format!("Section_{}", safe_name(name));
        let mut var = base.clone();
        let mut suffix = 2;
        while !used_vars.insert(var.clone()) {
            var = format!("{}_{}", base, suffix);
            suffix += 1;
        }

        groups.push(SectionGroup {
            name: name.to_string(),
            var,
            tabs: vec![index],
        });
    }

    groups
}

fn compile_sections(sections: &[SectionGroup], ctx: &CompilerContext) {
    for section in sections {
        ctx.add_line(&format!(
            "local {} = Window:Section({{ Title = {}, Opened = true }})",
            section.var,
            lua_string(&section.name)
        ));
    }
}

/// Declares every tab, in document order, under its section's variable.
/// Ordinals are global and never reset per section.
fn compile_tabs(tabs: &[Tab], sections: &[SectionGroup], ctx: &CompilerContext) -> Vec<String> {
    let mut vars = Vec::with_capacity(tabs.len());
    for (index, tab) in tabs.iter().enumerate() {
        let section_var = sections
            .iter()
            .find(|s| s.tabs.contains(&index))
            .map(|s| s.var.as_str())
            .unwrap_or("Window");
        let var = format!("Tab_{}", index + 1);

        ctx.add_line(&format!("local {} = {}:Tab({{", var, section_var));
        ctx.indent();
        ctx.add_field("Title", &lua_string(tab_label(tab)));
        flag_field("Locked", tab.locked, ctx);
        ctx.dedent();
        ctx.add_line("})");

        vars.push(var);
    }
    vars
}

fn tab_label(tab: &Tab) -> &str {
    if tab.title.is_empty() {
        "Tab"
    } else {
        &tab.title
    }
}

fn compile_items(parent: &str, items: &[Item], depth: usize, ctx: &CompilerContext) {
    for (index, item) in items.iter().enumerate() {
        compile_item(parent, item, depth, index, ctx);
    }
}

fn compile_item(parent: &str, item: &Item, depth: usize, index: usize, ctx: &CompilerContext) {
    match item {
        Item::Section(section) => {
            open_call(parent, "Section", ctx);
            title_field(&section.title, "Section", ctx);
            if let Some(boxed) = section.boxed {
                ctx.add_field("Box", lua_bool(boxed));
            }
            if let Some(weight) = text(&section.font_weight) {
                ctx.add_field("FontWeight", &lua_string(weight));
            }
            if let Some(t) = section.text_transparency {
                ctx.add_field("TextTransparency", &lua_number(t));
            }
            if let Some(align) = text(&section.text_x_alignment) {
                ctx.add_field("TextXAlignment", &lua_string(align));
            }
            if let Some(size) = non_zero(section.text_size) {
                ctx.add_field("TextSize", &lua_number(size));
            }
            if let Some(opened) = section.opened {
                ctx.add_field("Opened", lua_bool(opened));
            }
            close_call(ctx);
        }

        Item::Paragraph(paragraph) => {
            open_call(parent, "Paragraph", ctx);
            let title = text(&paragraph.title)
                .or_else(|| text(&paragraph.text))
                .unwrap_or("Paragraph");
            ctx.add_field("Title", &lua_string(title));
            if let Some(desc) = text(&paragraph.desc) {
                ctx.add_field("Desc", &lua_string(desc));
            }
            if let Some(color) = text(&paragraph.color) {
                ctx.add_field("Color", &lua_color(color));
            }
            if let Some(image) = text(&paragraph.image) {
                ctx.add_field("Image", &lua_string(image));
            }
            if let Some(size) = non_zero(paragraph.image_size) {
                ctx.add_field("ImageSize", &lua_number(size));
            }
            if let Some(thumbnail) = text(&paragraph.thumbnail) {
                ctx.add_field("Thumbnail", &lua_string(thumbnail));
            }
            if let Some(size) = non_zero(paragraph.thumbnail_size) {
                ctx.add_field("ThumbnailSize", &lua_number(size));
            }
            if !paragraph.buttons.is_empty() {
                compile_paragraph_buttons(&paragraph.buttons, ctx);
            }
            flag_field("Locked", paragraph.locked, ctx);
            close_call(ctx);
        }

        Item::Divider(_) => ctx.add_line(&format!("{}:Divider()", parent)),
        Item::Space(_) => ctx.add_line(&format!("{}:Space()", parent)),

        Item::Image(image) => match text(&image.src).filter(|src| is_remote_image(src)) {
            Some(src) => {
                open_call(parent, "Image", ctx);
                ctx.add_field("Image", &lua_string(src));
                if let Some(ratio) = text(&image.aspect_ratio) {
                    ctx.add_field("AspectRatio", &lua_string(ratio));
                }
                if let Some(radius) = image.radius {
                    ctx.add_field("Radius", &lua_number(radius));
                }
                close_call(ctx);
            }
            None => {
                ctx.add_line("-- TODO: replace local image path with rbxassetid:// or https URL");
                ctx.add_line(&format!("{}:Image({{ Image = \"\" }})", parent));
            }
        },

        Item::Code(code) => {
            open_call(parent, "Code", ctx);
            title_field(&code.title, "code", ctx);
            ctx.add_field("Code", &lua_string(code.code.as_deref().unwrap_or_default()));
            stub_callback("OnCopy", code.on_copy, ctx);
            close_call(ctx);
        }

        Item::Group(group) => {
            let var = format!("{}_Group{}_{}", parent, depth, index);
            ctx.add_line(&format!("local {} = {}:Group({{}})", var, parent));
            ctx.indent();
            compile_items(&var, &group.items, depth + 1, ctx);
            ctx.dedent();
        }

        Item::Button(button) => {
            open_call(parent, "Button", ctx);
            title_field(&button.title, "Button", ctx);
            desc_field(&button.desc, ctx);
            flag_field("Locked", button.locked, ctx);
            stub_callback("Callback", button.callback, ctx);
            close_call(ctx);
        }

        Item::Toggle(toggle) => {
            open_call(parent, "Toggle", ctx);
            title_field(&toggle.title, "Toggle", ctx);
            desc_field(&toggle.desc, ctx);
            let is_checkbox = toggle
                .type_value
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case("checkbox"));
            ctx.add_field("Type", &lua_string(if is_checkbox { "Checkbox" } else { "Toggle" }));
            ctx.add_field("Value", lua_bool(toggle.value));
            flag_field("Locked", toggle.locked, ctx);
            stub_callback("Callback", toggle.callback, ctx);
            close_call(ctx);
        }

        Item::Input(input) => {
            open_call(parent, "Input", ctx);
            title_field(&input.title, "Input", ctx);
            desc_field(&input.desc, ctx);
            if let Some(value) = text(&input.value) {
                ctx.add_field("Value", &lua_string(value));
            }
            if let Some(kind) = text(&input.input_type).filter(|t| *t != "Input") {
                ctx.add_field("Type", &lua_string(kind));
            }
            ctx.add_field("Placeholder", &lua_string(input.placeholder.as_deref().unwrap_or_default()));
            stub_callback("Callback", input.callback, ctx);
            close_call(ctx);
        }

        Item::Textarea(input) => {
            open_call(parent, "Input", ctx);
            title_field(&input.title, "Textarea", ctx);
            desc_field(&input.desc, ctx);
            if let Some(value) = text(&input.value) {
                ctx.add_field("Value", &lua_string(value));
            }
            ctx.add_field("Type", &lua_string("Textarea"));
            ctx.add_field("Placeholder", &lua_string(input.placeholder.as_deref().unwrap_or_default()));
            stub_callback("Callback", input.callback, ctx);
            close_call(ctx);
        }

        Item::Dropdown(dropdown) => {
            open_call(parent, "Dropdown", ctx);
            title_field(&dropdown.title, "Dropdown", ctx);
            desc_field(&dropdown.desc, ctx);
            ctx.add_field("Values", &lua_list(&dropdown.options));
            if let Some(value) = text(&dropdown.value) {
                ctx.add_field("Value", &lua_string(value));
            }
            flag_field("Multi", dropdown.multi, ctx);
            flag_field("AllowNone", dropdown.allow_none, ctx);
            stub_callback("Callback", dropdown.callback, ctx);
            close_call(ctx);
        }

        Item::Slider(slider) => {
            open_call(parent, "Slider", ctx);
            title_field(&slider.title, "Slider", ctx);
            desc_field(&slider.desc, ctx);
            ctx.add_field(
                "Value",
                &format!(
                    "{{ Min = {}, Max = {}, Default = {} }}",
                    lua_number(slider.min.unwrap_or(0.0)),
                    lua_number(slider.max.unwrap_or(100.0)),
                    lua_number(slider.value.unwrap_or(0.0))
                ),
            );
            ctx.add_field("Step", &lua_number(slider.step.unwrap_or(1.0)));
            flag_field("Locked", slider.locked, ctx);
            stub_callback("Callback", slider.callback, ctx);
            close_call(ctx);
        }

        Item::Colorpicker(picker) => {
            open_call(parent, "Colorpicker", ctx);
            title_field(&picker.title, "Colorpicker", ctx);
            desc_field(&picker.desc, ctx);
            ctx.add_field("Default", &lua_color(picker.value.as_deref().unwrap_or_default()));
            if let Some(t) = picker.transparency {
                ctx.add_field("Transparency", &lua_number(t));
            }
            flag_field("Locked", picker.locked, ctx);
            stub_callback("Callback", picker.callback, ctx);
            close_call(ctx);
        }

        Item::Keybind(keybind) => {
            open_call(parent, "Keybind", ctx);
            title_field(&keybind.title, "Keybind", ctx);
            ctx.add_field("Value", &lua_string(text(&keybind.value).unwrap_or("G")));
            desc_field(&keybind.desc, ctx);
            flag_field("Locked", keybind.locked, ctx);
            stub_callback("Callback", keybind.callback, ctx);
            close_call(ctx);
        }

        Item::Video(video) => {
            ctx.add_line(&format!(
                "{}:Video({{ Video = {} }})",
                parent,
                lua_string(video.src.as_deref().unwrap_or_default())
            ));
        }

        Item::Unknown(_) => {}
    }
}

fn compile_paragraph_buttons(buttons: &[ParagraphButton], ctx: &CompilerContext) {
    ctx.add_line("Buttons = {");
    ctx.indent();
    for button in buttons {
        ctx.add_line("{");
        ctx.indent();
        ctx.add_field("Title", &lua_string(text(&button.title).unwrap_or("Button")));
        ctx.add_field("Callback", "function() end");
        ctx.dedent();
        ctx.add_line("},");
    }
    ctx.dedent();
    ctx.add_line("},");
}

fn open_call(parent: &str, method: &str, ctx: &CompilerContext) {
    ctx.add_line(&format!("{}:{}({{", parent, method));
    ctx.indent();
}

fn close_call(ctx: &CompilerContext) {
    ctx.dedent();
    ctx.add_line("})");
}

fn title_field(title: &Option<String>, fallback: &str, ctx: &CompilerContext) {
    ctx.add_field("Title", &lua_string(text(title).unwrap_or(fallback)));
}

fn desc_field(desc: &Option<String>, ctx: &CompilerContext) {
    if let Some(desc) = text(desc) {
        ctx.add_field("Desc", &lua_string(desc));
    }
}

/// Emitted only when set to `true`.
fn flag_field(key: &str, flag: Option<bool>, ctx: &CompilerContext) {
    if flag == Some(true) {
        ctx.add_field(key, "true");
    }
}

fn stub_callback(key: &str, enabled: Option<bool>, ctx: &CompilerContext) {
    if enabled == Some(true) {
        ctx.add_field(key, "function() end");
    }
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|n| *n != 0.0)
}

fn is_remote_image(src: &str) -> bool {
    src.starts_with("http") || src.starts_with("rbxassetid://")
}
