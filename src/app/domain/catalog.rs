//! The read-only set of available tutorials.
//!
//! A catalog is loaded once at startup, either from the copy embedded in the
//! binary or from a TOML file on disk:
//!
//! ```toml
//! [[tutorials]]
//! id = "weather-app"
//! title = "React Weather App"
//!
//! [[tutorials.steps]]
//! title = "Introduction"
//! content = "..."
//! ```
//!
//! Tutorials are listed in file order.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::tutorial::{Tutorial, TutorialId};
use crate::app::infrastructure::error::{AppError, Result};

const BUILTIN_CATALOG: &str = include_str!("../../../assets/catalog.toml");

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tutorials: Vec<Tutorial>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tutorials: Vec<Tutorial>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids and tutorials without steps.
    pub fn new(tutorials: Vec<Tutorial>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tutorial in &tutorials {
            if tutorial.id.as_str().trim().is_empty() {
                return Err(AppError::Catalog(format!(
                    "tutorial \"{}\" has an empty id",
                    tutorial.title
                )));
            }
            if !seen.insert(tutorial.id.clone()) {
                return Err(AppError::Catalog(format!(
                    "duplicate tutorial id \"{}\"",
                    tutorial.id
                )));
            }
            if tutorial.steps.is_empty() {
                return Err(AppError::Catalog(format!(
                    "tutorial \"{}\" has no steps",
                    tutorial.id
                )));
            }
        }
        Ok(Self { tutorials })
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::new(file.tutorials)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load `path` when given, falling back to the built-in catalog.
    /// The error that forced the fallback is returned alongside.
    pub fn load_or_builtin(path: Option<&Path>) -> (Self, Option<AppError>) {
        let mut failure = None;
        if let Some(path) = path {
            match Self::load(path) {
                Ok(catalog) => {
                    tracing::info!(
                        path = %path.display(),
                        tutorials = catalog.len(),
                        "catalog loaded"
                    );
                    return (catalog, None);
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), "failed to load catalog: {e}");
                    failure = Some(e);
                }
            }
        }

        match Self::builtin() {
            Ok(catalog) => {
                tracing::info!(tutorials = catalog.len(), "using built-in catalog");
                (catalog, failure)
            }
            Err(e) => {
                tracing::error!("built-in catalog is invalid: {e}");
                (Self::default(), failure.or(Some(e)))
            }
        }
    }

    pub fn get(&self, id: &TutorialId) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TutorialId) -> bool {
        self.get(id).is_some()
    }

    /// Tutorial at a listing position.
    pub fn nth(&self, position: usize) -> Option<&Tutorial> {
        self.tutorials.get(position)
    }

    pub fn tutorials(&self) -> &[Tutorial] {
        &self.tutorials
    }

    pub fn len(&self) -> usize {
        self.tutorials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tutorials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::tutorial::Step;

    fn tutorial(id: &str, steps: usize) -> Tutorial {
        Tutorial {
            id: TutorialId::new(id),
            title: format!("Tutorial {}", id),
            steps: (0..steps)
                .map(|i| Step::new(format!("Step {}", i), format!("Body {}", i)))
                .collect(),
        }
    }

    #[test]
    fn test_builtin_catalog_has_weather_app() {
        let catalog = Catalog::builtin().unwrap();
        let weather = catalog.get(&TutorialId::new("weather-app")).unwrap();
        assert_eq!(weather.title, "React Weather App");
        assert_eq!(weather.step_count(), 5);
        assert_eq!(weather.steps[0].title, "Introduction");
        assert_eq!(weather.steps[4].title, "Finishing Touches");
        assert!(weather.steps[1].content.contains("WeatherApp.tsx"));
    }

    #[test]
    fn test_listing_keeps_file_order() {
        let text = r#"
            [[tutorials]]
            id = "zeta"
            title = "Zeta"
            [[tutorials.steps]]
            title = "Only"
            content = "z"

            [[tutorials]]
            id = "alpha"
            title = "Alpha"
            [[tutorials.steps]]
            title = "Only"
            content = "a"
        "#;
        let catalog = Catalog::from_toml_str(text).unwrap();
        let ids: Vec<&str> = catalog.tutorials().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha"]);
        assert_eq!(catalog.nth(1).unwrap().title, "Alpha");
        assert!(catalog.nth(2).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![tutorial("a", 1), tutorial("a", 2)]).unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_tutorial_without_steps_rejected() {
        let err = Catalog::new(vec![tutorial("empty", 0)]).unwrap_err();
        assert!(err.to_string().contains("no steps"));
    }

    #[test]
    fn test_blank_id_rejected() {
        let err = Catalog::new(vec![tutorial("  ", 1)]).unwrap_err();
        assert!(err.to_string().contains("empty id"));
    }

    #[test]
    fn test_malformed_toml_is_toml_error() {
        let err = Catalog::from_toml_str("[[tutorials]]\nid = ").unwrap_err();
        assert!(matches!(err, AppError::Toml(_)));
    }

    #[test]
    fn test_empty_file_is_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_bad_override_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[tutorials]]\nid = \"bare\"\ntitle = \"Bare\"\nsteps = []\n").unwrap();

        let (catalog, failure) = Catalog::load_or_builtin(Some(&path));
        assert!(catalog.contains(&TutorialId::new("weather-app")));
        assert!(matches!(failure, Some(AppError::Catalog(_))));
    }

    #[test]
    fn test_no_override_uses_builtin() {
        let (catalog, failure) = Catalog::load_or_builtin(None);
        assert_eq!(catalog, Catalog::builtin().unwrap());
        assert!(failure.is_none());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            concat!(
                "[[tutorials]]\nid = \"x\"\ntitle = \"X\"\n",
                "[[tutorials.steps]]\ntitle = \"S\"\ncontent = \"C\"\n",
            ),
        )
        .unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(&TutorialId::new("x")));

        let missing = Catalog::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, AppError::Io(_)));
    }
}
