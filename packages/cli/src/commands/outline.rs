use super::open_fixture;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use windstudio_editor::OutlineEntry;

#[derive(Debug, Args)]
pub struct OutlineArgs {
    /// Document fixture to inspect
    pub fixture: String,

    /// Dim entries whose label does not contain this text
    #[arg(long, default_value = "")]
    pub filter: String,
}

pub fn outline(args: OutlineArgs, cwd: &str) -> Result<()> {
    let session = open_fixture(&args.fixture, cwd)?;

    for entry in session.outline(&args.filter) {
        println!("{}", render_entry(&entry));
    }

    Ok(())
}

fn render_entry(entry: &OutlineEntry) -> String {
    let indent = "  ".repeat(entry.depth);
    if entry.dimmed {
        format!("{}{}", indent, entry.label.dimmed())
    } else if entry.depth == 0 {
        format!("{}{}", indent, entry.label.bold())
    } else {
        format!("{}{}", indent, entry.label)
    }
}
