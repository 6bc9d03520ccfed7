use anyhow::Context;
use clap::Parser;
use fyp_directory::BookmarkStore;
use fyp_directory::Catalog;
use fyp_directory::types::SupervisorRecord;

use crate::render;

/// CLI for bookmark commands.
#[derive(Debug, Parser)]
pub struct BookmarksCli {
    #[command(subcommand)]
    pub cmd: BookmarksCommand,
}

/// Bookmark subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum BookmarksCommand {
    /// List bookmarked supervisors.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Bookmark a supervisor by id.
    Add { id: String },
    /// Remove a bookmark by id.
    Remove { id: String },
    /// Bookmark a supervisor, or remove the bookmark if already present.
    Toggle { id: String },
    /// Report whether a supervisor is bookmarked.
    Check { id: String },
    /// Remove every bookmark, replacing an unreadable list.
    Clear,
}

fn lookup<'a>(catalog: &'a Catalog, id: &str) -> anyhow::Result<&'a SupervisorRecord> {
    catalog
        .find(id)
        .with_context(|| format!("supervisor id not found: {id}"))
}

/// Execute the bookmarks command.
pub fn run(catalog: &Catalog, bookmarks: &BookmarkStore, cli: BookmarksCli) -> anyhow::Result<()> {
    match cli.cmd {
        BookmarksCommand::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&bookmarks.get_all())?);
            } else if bookmarks.is_empty() {
                println!("No bookmarks yet.");
            } else {
                let entries = bookmarks.get_all();
                for entry in &entries {
                    println!("{}", render::bookmark_line(entry));
                }
                println!("{}", render::bookmark_count(entries.len()));
            }
        }
        BookmarksCommand::Add { id } => {
            let record = lookup(catalog, &id)?;
            if bookmarks.add(record) {
                println!("Bookmarked {}", record.name);
            } else if bookmarks.is_bookmarked(&record.id) {
                println!("Already bookmarked {}", record.name);
            } else {
                anyhow::bail!("could not bookmark {id}");
            }
        }
        BookmarksCommand::Remove { id } => {
            if bookmarks.remove(&id) {
                println!("Removed {id}");
            } else {
                println!("Not bookmarked: {id}");
            }
        }
        BookmarksCommand::Toggle { id } => {
            let record = lookup(catalog, &id)?;
            if bookmarks.toggle(record) {
                println!("Bookmarked {}", record.name);
            } else {
                println!("Removed bookmark for {}", record.name);
            }
        }
        BookmarksCommand::Check { id } => {
            let state = if bookmarks.is_bookmarked(&id) {
                "bookmarked"
            } else {
                "not bookmarked"
            };
            println!("{id}: {state}");
        }
        BookmarksCommand::Clear => {
            if !bookmarks.clear() {
                anyhow::bail!("could not clear bookmarks");
            }
            println!("Cleared bookmarks");
        }
    }
    Ok(())
}
