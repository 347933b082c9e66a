use std::collections::HashSet;

use folio_core::catalog::{catalog_logo_src, catalog_resume_url, project_by_id};
use folio_core::PROJECT_CATALOG;

#[test]
fn catalog_is_populated_with_unique_ids() {
    assert!(!PROJECT_CATALOG.is_empty());
    let ids: HashSet<u32> = PROJECT_CATALOG.iter().map(|project| project.id).collect();
    assert_eq!(ids.len(), PROJECT_CATALOG.len());
}

#[test]
fn catalog_links_are_never_blank() {
    for project in PROJECT_CATALOG {
        if let Some(link) = project.link {
            assert!(!link.trim().is_empty(), "project {} has blank link", project.id);
        }
        assert!(!project.image.is_empty());
    }
}

#[test]
fn lookup_by_id_matches_catalog_entry() {
    let first = &PROJECT_CATALOG[0];
    assert_eq!(project_by_id(first.id), Some(first));
    assert_eq!(project_by_id(u32::MAX), None);
}

#[test]
fn branding_urls_resolve() {
    assert!(!catalog_resume_url().is_empty());
    assert!(!catalog_logo_src().is_empty());
}
