//! Ordered, read-only project list consumed by the animated components.

mod builtin;
mod project;

pub use project::ProjectRecord;

use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate project id: {0}")]
    DuplicateId(String),
    #[error("catalog has no projects")]
    Empty,
}

/// Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    /// Every project, in works-page order.
    pub fn all_projects() -> Self {
        Self::new(builtin::records())
    }

    /// The four-project rotation of the home-page flip card.
    pub fn select_works() -> Self {
        let all = builtin::records();
        let projects = builtin::SELECT_WORKS
            .iter()
            .filter_map(|id| all.iter().find(|p| p.id == *id).cloned())
            .collect();
        Self::new(projects)
    }

    /// Load a JSON array of project records.
    ///
    /// Unlike [`Catalog::new`], this rejects empty lists and duplicate ids,
    /// since a hand-edited file is the usual source of both.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(data)?;
        if projects.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.clone()) {
                return Err(CatalogError::DuplicateId(project.id.to_string()));
            }
        }
        Ok(Self::new(projects))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.projects.get(index)
    }

    /// Out-of-range requests (negative or past the end) resolve to the
    /// nearest valid entry. `None` only for an empty catalog.
    pub fn get_clamped(&self, index: i64) -> Option<&ProjectRecord> {
        let last = self.projects.len().checked_sub(1)?;
        let index = usize::try_from(index.max(0)).unwrap_or(0).min(last);
        self.projects.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_orders() {
        let all = Catalog::all_projects();
        assert_eq!(all.len(), 9);
        let ids: Vec<&str> = all.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "sonix",
                "imessage",
                "sealove",
                "google-nest",
                "kroger",
                "kohler",
                "sync",
                "7west",
                "zillow"
            ]
        );

        let select = Catalog::select_works();
        assert_eq!(select.len(), 4);
        assert_eq!(select.projects()[3].marquee_key, "GOOGLE NEST");
    }

    #[test]
    fn clamped_lookup() {
        let catalog = Catalog::select_works();
        assert_eq!(catalog.get_clamped(-3).map(|p| p.id.as_str()), Some("sonix"));
        assert_eq!(
            catalog.get_clamped(99).map(|p| p.id.as_str()),
            Some("google-nest")
        );
        assert!(Catalog::default().get_clamped(0).is_none());
    }

    #[test]
    fn marquee_key_display_form() {
        let mut project = Catalog::select_works().projects()[0].clone();
        project.marquee_key = "  sonix ".into();
        assert_eq!(project.display_marquee_key(), "SONIX");
    }

    #[test]
    fn json_catalog_validation() {
        let one = r#"[{
            "id": "a", "title": "A", "shortTitle": "A", "year": 2024,
            "marqueeKey": "A", "tags": ["UXD"], "categories": "UX",
            "description": "", "images": ["a.jpg"], "heroImage": "a.jpg"
        }]"#;
        let catalog = Catalog::from_json(one).expect("single record parses");
        assert_eq!(catalog.len(), 1);

        let dup = format!("[{0},{0}]", &one[1..one.len() - 1]);
        assert!(matches!(
            Catalog::from_json(&dup),
            Err(CatalogError::DuplicateId(ref id)) if id == "a"
        ));
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
    }
}
