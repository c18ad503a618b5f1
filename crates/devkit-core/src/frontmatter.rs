use crate::error::{DevkitError, Result};
use std::path::Path;

/// YAML front matter parsed from the head of a markdown component file.
#[derive(Debug, Clone)]
pub struct FrontMatter {
    pub fields: serde_yaml::Mapping,
}

impl FrontMatter {
    /// Split a `---` delimited YAML block off the front of `content`.
    ///
    /// Returns the parsed block and the remaining markdown body. Content
    /// without a front matter block is an error; component files are
    /// required to carry one.
    pub fn parse<'a>(path: &Path, content: &'a str) -> Result<(Self, &'a str)> {
        let Some(rest) = content.strip_prefix("---") else {
            return Err(DevkitError::MissingFrontMatter(path.to_path_buf()));
        };
        let Some(end) = rest.find("\n---") else {
            return Err(DevkitError::MissingFrontMatter(path.to_path_buf()));
        };
        let yaml = &rest[..end];
        let body = rest[end + 4..].trim_start_matches('\n');
        let fields: serde_yaml::Mapping = serde_yaml::from_str(yaml)?;
        Ok((Self { fields }, body))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(path, &content)?.0)
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }
}

/// Best-effort description lookup for index generation. Unreadable or
/// unparseable files yield `None` rather than failing the install.
pub fn description_of(path: &Path) -> Option<String> {
    let fm = FrontMatter::load(path).ok()?;
    fm.description().map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_fields_and_body() {
        let content = "---\nname: crud-patterns\ndescription: CRUD patterns for Spring Boot\n---\n\n# Skill\nbody\n";
        let (fm, body) = FrontMatter::parse(&PathBuf::from("SKILL.md"), content).unwrap();
        assert_eq!(fm.name(), Some("crud-patterns"));
        assert_eq!(fm.description(), Some("CRUD patterns for Spring Boot"));
        assert!(body.starts_with("\n# Skill") || body.starts_with("# Skill"));
    }

    #[test]
    fn missing_front_matter_is_an_error() {
        let err = FrontMatter::parse(&PathBuf::from("a.md"), "# Just markdown\n").unwrap_err();
        assert!(matches!(err, DevkitError::MissingFrontMatter(_)));
    }

    #[test]
    fn unterminated_front_matter_is_an_error() {
        let err =
            FrontMatter::parse(&PathBuf::from("a.md"), "---\nname: incomplete\n").unwrap_err();
        assert!(matches!(err, DevkitError::MissingFrontMatter(_)));
    }

    #[test]
    fn description_of_tolerates_bad_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("agent.md");
        std::fs::write(&path, "no front matter here").unwrap();
        assert_eq!(description_of(&path), None);
        assert_eq!(description_of(&dir.path().join("missing.md")), None);
    }
}
