use std::path::{Path, PathBuf};

pub const CONTENT_ENV_VAR: &str = "JOURNEY_CONTENT";
const CONTENT_FILE_NAME: &str = "content.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Embedded,
    File(PathBuf),
}

/// Picks the content source: explicit flag, then `JOURNEY_CONTENT`, then a
/// `content.json` in the user's config directory, then the built-in tables.
pub fn content_source(flag: Option<PathBuf>) -> ContentSource {
    let env_path = std::env::var_os(CONTENT_ENV_VAR).map(PathBuf::from);
    let config_dir = dirs::config_dir().map(|d| d.join("journey"));
    resolve(flag, env_path, config_dir.as_deref())
}

fn resolve(
    flag: Option<PathBuf>,
    env_path: Option<PathBuf>,
    config_dir: Option<&Path>,
) -> ContentSource {
    let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();
    if let Some(path) = flag.filter(non_empty).or(env_path.filter(non_empty)) {
        return ContentSource::File(path);
    }

    if let Some(dir) = config_dir {
        let candidate = dir.join(CONTENT_FILE_NAME);
        if candidate.is_file() {
            return ContentSource::File(candidate);
        }
    }

    ContentSource::Embedded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        let source = resolve(
            Some(PathBuf::from("/tmp/flag.json")),
            Some(PathBuf::from("/tmp/env.json")),
            None,
        );
        assert_eq!(source, ContentSource::File(PathBuf::from("/tmp/flag.json")));
    }

    #[test]
    fn env_used_without_flag() {
        let source = resolve(None, Some(PathBuf::from("/tmp/env.json")), None);
        assert_eq!(source, ContentSource::File(PathBuf::from("/tmp/env.json")));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let source = resolve(None, Some(PathBuf::new()), None);
        assert_eq!(source, ContentSource::Embedded);
    }

    #[test]
    fn empty_flag_falls_through_to_env() {
        let source = resolve(
            Some(PathBuf::new()),
            Some(PathBuf::from("/tmp/env.json")),
            None,
        );
        assert_eq!(source, ContentSource::File(PathBuf::from("/tmp/env.json")));
    }

    #[test]
    fn empty_flag_falls_through_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CONTENT_FILE_NAME);
        std::fs::write(&file, "{}").unwrap();

        let source = resolve(Some(PathBuf::new()), None, Some(dir.path()));
        assert_eq!(source, ContentSource::File(file));
    }

    #[test]
    fn config_dir_file_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CONTENT_FILE_NAME);
        std::fs::write(&file, "{}").unwrap();

        let source = resolve(None, None, Some(dir.path()));
        assert_eq!(source, ContentSource::File(file));
    }

    #[test]
    fn missing_config_file_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let source = resolve(None, None, Some(dir.path()));
        assert_eq!(source, ContentSource::Embedded);
    }

    #[test]
    fn no_inputs_is_embedded() {
        assert_eq!(resolve(None, None, None), ContentSource::Embedded);
    }
}
