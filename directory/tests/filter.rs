use fyp_directory::Catalog;
use fyp_directory::filter;
use fyp_directory::sort;
use fyp_directory::types::FilterSpec;
use fyp_directory::types::SortCriterion;
use fyp_directory::types::SortDirection;
use fyp_directory::types::SupervisorRecord;
use pretty_assertions::assert_eq;

fn ids(records: &[SupervisorRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

fn is_subsequence(sub: &[SupervisorRecord], all: &[SupervisorRecord]) -> bool {
    let mut it = all.iter();
    sub.iter().all(|s| it.any(|a| a.id == s.id))
}

fn specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::default(),
        FilterSpec {
            domain: Some("science".to_string()),
            ..Default::default()
        },
        FilterSpec {
            min_slots: 2,
            max_slots: Some(3),
            ..Default::default()
        },
        FilterSpec {
            search_query: "learning".to_string(),
            ..Default::default()
        },
        FilterSpec {
            domain: Some("computer".to_string()),
            min_slots: 1,
            search_query: "dr.".to_string(),
            ..Default::default()
        },
    ]
}

#[test]
fn filter_is_an_ordered_subsequence() {
    let records = Catalog::builtin().supervisors;
    for spec in specs() {
        let out = filter(&records, &spec);
        assert!(is_subsequence(&out, &records), "{spec:?}");
    }
}

#[test]
fn empty_search_keeps_domain_and_slot_subset() {
    let records = Catalog::builtin().supervisors;
    let spec = FilterSpec {
        domain: Some("c".to_string()),
        min_slots: 1,
        max_slots: Some(3),
        search_query: String::new(),
    };
    let expected: Vec<&str> = records
        .iter()
        .filter(|r| r.research_domain.to_lowercase().contains('c'))
        .filter(|r| (1..=3).contains(&r.available_slots))
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids(&filter(&records, &spec)), expected);
}

#[test]
fn search_reaches_project_titles_but_not_contact_or_image() {
    let records = Catalog::builtin().supervisors;
    let by_project = FilterSpec {
        search_query: "autonomous vehicle".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&filter(&records, &by_project)), vec!["SUP-2023-001"]);

    let by_email = FilterSpec {
        search_query: "ali.khan@university".to_string(),
        ..Default::default()
    };
    assert!(filter(&records, &by_email).is_empty());

    let by_phone = FilterSpec {
        search_query: "1234567".to_string(),
        ..Default::default()
    };
    assert!(filter(&records, &by_phone).is_empty());

    let by_image = FilterSpec {
        search_query: "randomuser".to_string(),
        ..Default::default()
    };
    assert!(filter(&records, &by_image).is_empty());
}

#[test]
fn descending_is_reverse_of_ascending() {
    let records = Catalog::builtin().supervisors;
    for c in [SortCriterion::Name, SortCriterion::Slots, SortCriterion::Rating] {
        let asc = sort(&records, c, SortDirection::Asc);
        let mut reversed = asc.clone();
        reversed.reverse();
        let desc = sort(&asc, c, SortDirection::Desc);
        assert_eq!(ids(&desc), ids(&reversed), "{c:?}");
    }
}

#[test]
fn rating_ties_keep_input_order_when_ascending() {
    let records = Catalog::builtin().supervisors;
    let out = sort(&records, SortCriterion::Rating, SortDirection::Asc);
    let top: Vec<&str> = ids(&out).into_iter().rev().take(2).collect();
    // 003 and 008 share the top rating; reversed, the later one comes first.
    assert_eq!(top, vec!["SUP-2023-008", "SUP-2023-003"]);
}
