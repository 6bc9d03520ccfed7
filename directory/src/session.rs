use crate::filter::filter;
use crate::sort::sort_by_spec;
use crate::types::FilterSpec;
use crate::types::SortSpec;
use crate::types::SupervisorRecord;

/// Everything a front end needs to render the directory listing.
#[derive(Clone, Debug)]
pub struct DirectoryView {
    all: Vec<SupervisorRecord>,
    pub filters: FilterSpec,
    pub sort: SortSpec,
    visible: Vec<SupervisorRecord>,
}

impl DirectoryView {
    pub fn new(records: Vec<SupervisorRecord>) -> Self {
        let mut view = Self {
            all: records,
            filters: FilterSpec::default(),
            sort: SortSpec::default(),
            visible: Vec::new(),
        };
        view.refresh();
        view
    }

    pub fn apply(&mut self, filters: FilterSpec, sort: SortSpec) {
        self.filters = filters;
        self.sort = sort;
        self.refresh();
    }

    pub fn all(&self) -> &[SupervisorRecord] {
        &self.all
    }

    pub fn visible(&self) -> &[SupervisorRecord] {
        &self.visible
    }

    pub fn summary(&self) -> String {
        let total = self.all.len();
        let noun = if total == 1 { "result" } else { "results" };
        format!("Showing {} of {total} {noun}", self.visible.len())
    }

    fn refresh(&mut self) {
        self.visible = sort_by_spec(&filter(&self.all, &self.filters), self.sort);
    }
}
