//! Category commands: list, add.
//!
//! These talk to the category file directly instead of going through the
//! dialogue worker.

use anyhow::{bail, Result};
use clap::Subcommand;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::state::AppState;

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// List the categories offered when adding a record.
    #[command(alias = "ls")]
    List,

    /// Add a category (no-op if it already exists).
    Add {
        /// Category name, e.g. "Патч-панель".
        name: String,
    },
}

pub async fn run(state: &AppState, action: CategoryCommand, json: bool) -> Result<()> {
    match action {
        CategoryCommand::List => list_categories(state, json).await,
        CategoryCommand::Add { name } => add_category(state, &name, json).await,
    }
}

/// Print the category list as a numbered table.
pub async fn list_categories(state: &AppState, json: bool) -> Result<()> {
    let categories = state.category_registry().load().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Category").fg(Color::Cyan),
        ]);

    for (i, name) in categories.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(name)]);
    }

    println!();
    println!("{table}");
    println!(
        "  {}",
        style(format!("Stored in {}", state.categories_file.display())).dim()
    );
    println!();

    Ok(())
}

/// Add `name` to the persisted list.
pub async fn add_category(state: &AppState, name: &str, json: bool) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("category name must not be empty");
    }

    let added = state.category_registry().add_if_absent(name).await?;

    if json {
        println!("{}", serde_json::json!({ "name": name, "added": added }));
    } else if added {
        println!(
            "  {} Category '{}' added",
            style("✓").green().bold(),
            style(name).bold()
        );
    } else {
        println!(
            "  {} Category '{}' already exists",
            style("i").blue().bold(),
            style(name).bold()
        );
    }

    Ok(())
}
