use std::fmt::Write as _;

use fyp_directory::types::BookmarkEntry;
use fyp_directory::types::SupervisorRecord;

fn rating(r: Option<f64>) -> String {
    r.map(|r| format!("{r:.1}")).unwrap_or_else(|| "-".to_string())
}

pub(crate) fn record_line(record: &SupervisorRecord, bookmarked: bool) -> String {
    let mark = if bookmarked { '*' } else { ' ' };
    format!(
        "{mark} {id:<14} {name:<22} {domain:<28} slots {avail}/{max}  rating {rating}",
        id = record.id,
        name = record.name,
        domain = record.research_domain,
        avail = record.available_slots,
        max = record.max_slots,
        rating = rating(record.rating),
    )
}

pub(crate) fn bookmark_line(entry: &BookmarkEntry) -> String {
    format!(
        "{id:<14} {name:<22} {domain:<28} slots {avail}  rating {rating}  {email}",
        id = entry.id,
        name = entry.name,
        domain = entry.research_domain,
        avail = entry.available_slots,
        rating = rating(entry.rating),
        email = entry.contact_info.email(),
    )
}

pub(crate) fn bookmark_count(n: usize) -> String {
    format!("{n} bookmarked")
}

pub(crate) fn record_detail(record: &SupervisorRecord, bookmarked: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", record.name, record.id);
    if !record.title.is_empty() {
        let _ = writeln!(out, "{}, {}", record.title, record.department);
    }
    let _ = writeln!(out, "Domain: {}", record.research_domain);
    if !record.specialization.is_empty() {
        let _ = writeln!(out, "Specialization: {}", record.specialization.join(", "));
    }
    let _ = writeln!(
        out,
        "Slots: {}/{}  Rating: {}",
        record.available_slots,
        record.max_slots,
        rating(record.rating)
    );
    let _ = writeln!(out, "Email: {}", record.contact_info.email());
    if !record.bio.is_empty() {
        let _ = writeln!(out, "{}", record.bio);
    }
    for project in &record.projects {
        let _ = writeln!(out, "- {project}");
    }
    if !record.requirements.is_empty() {
        let _ = writeln!(out, "Requirements: {}", record.requirements);
    }
    let _ = writeln!(out, "Bookmarked: {}", if bookmarked { "yes" } else { "no" });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fyp_directory::Catalog;

    #[test]
    fn line_marks_bookmarks_and_unrated() {
        let mut record = Catalog::builtin().supervisors[1].clone();
        record.rating = None;
        let line = record_line(&record, true);
        assert!(line.starts_with("* SUP-2023-002"));
        assert!(line.contains("slots 0/3"));
        assert!(line.ends_with("rating -"));
    }

    #[test]
    fn counts_bookmarks() {
        assert_eq!(bookmark_count(0), "0 bookmarked");
        assert_eq!(bookmark_count(3), "3 bookmarked");
    }

    #[test]
    fn detail_lists_projects() {
        let record = &Catalog::builtin().supervisors[0];
        let detail = record_detail(record, false);
        assert!(detail.contains("- AI for Medical Diagnosis"));
        assert!(detail.contains("Email: ali.khan@university.edu"));
        assert!(detail.ends_with("Bookmarked: no\n"));
    }
}
