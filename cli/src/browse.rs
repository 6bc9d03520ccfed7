use anyhow::Context;
use fyp_directory::BookmarkStore;
use fyp_directory::Catalog;
use fyp_directory::DirectoryView;
use fyp_directory::types::Availability;
use fyp_directory::types::FilterSpec;
use fyp_directory::types::SortCriterion;
use fyp_directory::types::SortDirection;
use fyp_directory::types::SortSpec;

use crate::render;

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Research domain text to match (case-insensitive substring).
    #[arg(long)]
    pub domain: Option<String>,

    /// Slot band: high (5+), medium (2-4) or low (0-1). Overrides the slot bounds.
    #[arg(long)]
    pub availability: Option<String>,

    #[arg(long, default_value_t = 0)]
    pub min_slots: u32,

    #[arg(long)]
    pub max_slots: Option<u32>,

    /// Free-text search across names, bios, projects and other text.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Sort by name, slots or rating. Unknown values sort by name.
    #[arg(long, default_value = "name")]
    pub sort: String,

    #[arg(long)]
    pub desc: bool,

    /// Print matching records as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn filter_spec(&self) -> anyhow::Result<FilterSpec> {
        let spec = FilterSpec {
            domain: self.domain.clone(),
            min_slots: self.min_slots,
            max_slots: self.max_slots,
            search_query: self.search.clone(),
        };
        Ok(match &self.availability {
            Some(band) => spec.with_availability(band.parse::<Availability>()?),
            None => spec,
        })
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec {
            criterion: SortCriterion::parse_or_default(&self.sort),
            direction: if self.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        }
    }
}

pub fn list(catalog: &Catalog, bookmarks: &BookmarkStore, args: &ListArgs) -> anyhow::Result<()> {
    let mut view = DirectoryView::new(catalog.supervisors.clone());
    view.apply(args.filter_spec()?, args.sort_spec());

    if args.json {
        println!("{}", serde_json::to_string_pretty(view.visible())?);
        return Ok(());
    }
    if view.visible().is_empty() {
        println!("No supervisors match these filters.");
    }
    let saved = bookmarks.get_all();
    for record in view.visible() {
        let marked = saved.iter().any(|b| b.id == record.id);
        println!("{}", render::record_line(record, marked));
    }
    println!("{}", view.summary());
    println!("{}", render::bookmark_count(bookmarks.len()));
    Ok(())
}

pub fn show(
    catalog: &Catalog,
    bookmarks: &BookmarkStore,
    id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let record = catalog
        .find(id)
        .with_context(|| format!("supervisor id not found: {id}"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print!("{}", render::record_detail(record, bookmarks.is_bookmarked(id)));
    }
    Ok(())
}
