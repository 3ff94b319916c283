use std::collections::HashSet;
use std::path::Path;

use crate::config::ContentSource;
use crate::error::ContentError;
use crate::models::Content;

const EMBEDDED_CONTENT: &str = include_str!("../content/default.json");

impl Content {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn load(source: &ContentSource) -> Result<Self, ContentError> {
        let content = match source {
            ContentSource::Embedded => {
                log::info!("using embedded content");
                Self::embedded()?
            }
            ContentSource::File(path) => {
                log::info!("loading content from {}", path.display());
                Self::from_path(path)?
            }
        };

        log::debug!(
            "content: {} paths, {} weeks, {} lessons, {} resource categories",
            content.paths.len(),
            content.curriculum.weeks.len(),
            content.curriculum.total_lessons(),
            content.resources.len()
        );
        Ok(content)
    }

    /// Lesson ids must be unique across the whole curriculum.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for lesson in self.curriculum.lessons() {
            if !seen.insert(lesson.id) {
                return Err(ContentError::DuplicateLesson { id: lesson.id });
            }
        }
        Ok(())
    }
}
