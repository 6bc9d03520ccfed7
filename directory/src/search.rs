//! Free-text search over a typed registry of record fields.

use crate::types::ContactInfo;
use crate::types::SupervisorRecord;

/// A named record field and the string values it exposes to search.
pub struct SearchField {
    pub name: &'static str,
    pub searchable: bool,
    pub values: fn(&SupervisorRecord) -> Vec<&str>,
}

/// Every string-bearing field of [`SupervisorRecord`]. Lists and the
/// structured contact are scanned one level deep.
pub const SEARCH_FIELDS: &[SearchField] = &[
    field("id", true, id),
    field("name", true, name),
    field("title", true, title),
    field("department", true, department),
    field("researchDomain", true, research_domain),
    field("specialization", true, specialization),
    field("bio", true, bio),
    field("projects", true, projects),
    field("requirements", true, requirements),
    field("profileImage", false, profile_image),
    field("contactInfo", false, contact_info),
    field("isAvailable", false, no_strings),
];

const fn field(
    name: &'static str,
    searchable: bool,
    values: fn(&SupervisorRecord) -> Vec<&str>,
) -> SearchField {
    SearchField {
        name,
        searchable,
        values,
    }
}

fn id(r: &SupervisorRecord) -> Vec<&str> {
    vec![r.id.as_str()]
}

fn name(r: &SupervisorRecord) -> Vec<&str> {
    vec![r.name.as_str()]
}

fn title(r: &SupervisorRecord) -> Vec<&str> {
    vec![r.title.as_str()]
}

fn department(r: &SupervisorRecord) -> Vec<&str> {
    vec![r.department.as_str()]
}

fn research_domain(r: &SupervisorRecord) -> Vec<&str> {
    vec![r.research_domain.as_str()]
}

fn specialization(r: &SupervisorRecord) -> Vec<&str> {
    r.specialization.iter().map(String::as_str).collect()
}

fn bio(r: &SupervisorRecord) -> Vec<&str> {
    vec![r.bio.as_str()]
}

fn projects(r: &SupervisorRecord) -> Vec<&str> {
    r.projects.iter().map(String::as_str).collect()
}

fn requirements(r: &SupervisorRecord) -> Vec<&str> {
    vec![r.requirements.as_str()]
}

fn profile_image(r: &SupervisorRecord) -> Vec<&str> {
    r.profile_image.as_deref().into_iter().collect()
}

fn no_strings(_: &SupervisorRecord) -> Vec<&str> {
    Vec::new()
}

fn contact_info(r: &SupervisorRecord) -> Vec<&str> {
    match &r.contact_info {
        ContactInfo::Details {
            email,
            phone,
            office,
        } => std::iter::once(email.as_str())
            .chain(phone.as_deref())
            .chain(office.as_deref())
            .collect(),
        ContactInfo::Bare(s) => vec![s.as_str()],
    }
}

/// Case-insensitive substring match of `query` against the searchable
/// fields of `record`. An empty query matches everything.
pub fn matches(record: &SupervisorRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    SEARCH_FIELDS
        .iter()
        .filter(|field| field.searchable)
        .flat_map(|field| (field.values)(record))
        .any(|value| value.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SupervisorRecord {
        SupervisorRecord {
            id: "SUP-9".to_string(),
            name: "Dr. Quinn".to_string(),
            title: "Lecturer".to_string(),
            department: "Computer Science".to_string(),
            research_domain: "Computer Vision".to_string(),
            specialization: vec!["Image Segmentation".to_string()],
            available_slots: 1,
            max_slots: 2,
            contact_info: ContactInfo::Details {
                email: "quinn@campus.edu".to_string(),
                phone: None,
                office: Some("Annex 7".to_string()),
            },
            profile_image: Some("https://img.example/portrait.jpg".to_string()),
            bio: "Works on medical imaging.".to_string(),
            rating: None,
            projects: vec!["Tumour Boundary Detection".to_string()],
            requirements: "OpenCV".to_string(),
            is_available: true,
        }
    }

    #[test]
    fn empty_query_matches() {
        assert!(matches(&sample(), ""));
    }

    #[test]
    fn scans_list_fields() {
        assert!(matches(&sample(), "boundary"));
        assert!(matches(&sample(), "SEGMENTATION"));
    }

    #[test]
    fn skips_excluded_fields() {
        assert!(!matches(&sample(), "campus.edu"));
        assert!(!matches(&sample(), "annex"));
        assert!(!matches(&sample(), "portrait"));
        assert!(!matches(&sample(), "true"));
    }

    #[test]
    fn excluded_fields_are_registered() {
        let excluded: Vec<&str> = SEARCH_FIELDS
            .iter()
            .filter(|f| !f.searchable)
            .map(|f| f.name)
            .collect();
        assert_eq!(excluded, vec!["profileImage", "contactInfo", "isAvailable"]);
    }
}
