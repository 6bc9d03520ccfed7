use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fyp_directory::Catalog;
use fyp_directory::factory;
use fyp_directory::factory::Backend;

pub mod bookmarks;
pub mod browse;
mod render;

pub use bookmarks::BookmarksCli;
pub use browse::ListArgs;

/// Browse FYP supervisors and keep a bookmark list.
#[derive(Debug, Parser)]
#[command(name = "fyp", version)]
pub struct Cli {
    /// Catalog JSON file to use instead of the built-in supervisor list.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Bookmark storage backend (defaults to $FYP_BOOKMARK_BACKEND, then file).
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendArg>,

    /// Directory holding persisted bookmarks (defaults to $FYP_DATA_DIR).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum BackendArg {
    File,
    Memory,
    Sqlite,
}

impl BackendArg {
    fn resolve(self) -> Backend {
        match self {
            BackendArg::File => Backend::File,
            BackendArg::Memory => Backend::Memory,
            BackendArg::Sqlite => {
                let be = Backend::parse("sqlite");
                if be == Backend::File {
                    tracing::warn!("sqlite backend not compiled; using file backend");
                }
                be
            }
        }
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List supervisors matching the given filters.
    List(ListArgs),
    /// Show one supervisor in full.
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// List the research domains.
    Domains,
    /// List the departments.
    Departments,
    /// Manage bookmarked supervisors.
    Bookmarks(BookmarksCli),
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            Catalog::from_json(&data)
                .with_context(|| format!("invalid catalog {}", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = load_catalog(cli.catalog.as_ref())?;
    let data_dir = cli.data_dir.unwrap_or_else(factory::default_data_dir);
    let backend = cli.backend.map(BackendArg::resolve);
    let bookmarks = factory::open_bookmarks(&data_dir, backend)?;

    match cli.cmd {
        Command::List(args) => browse::list(&catalog, &bookmarks, &args)?,
        Command::Show { id, json } => browse::show(&catalog, &bookmarks, &id, json)?,
        Command::Domains => {
            for domain in &catalog.research_domains {
                println!("{domain}");
            }
        }
        Command::Departments => {
            for department in &catalog.departments {
                println!("{department}");
            }
        }
        Command::Bookmarks(cmd) => bookmarks::run(&catalog, &bookmarks, cmd)?,
    }
    Ok(())
}
