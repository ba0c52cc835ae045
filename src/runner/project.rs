//! Scratch projects pointing the tool at a single registry.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::RegistryConfig;
use crate::error::Result;

/// File name of the project descriptor.
pub const PYPROJECT: &str = "pyproject.toml";

#[derive(Debug, Serialize)]
struct PyProject<'a> {
    project: ProjectTable<'a>,
    tool: ToolTable<'a>,
}

#[derive(Debug, Serialize)]
struct ProjectTable<'a> {
    name: String,
    version: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct ToolTable<'a> {
    uv: UvTable<'a>,
}

#[derive(Debug, Serialize)]
struct UvTable<'a> {
    index: Vec<IndexEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct IndexEntry<'a> {
    name: &'a str,
    url: &'a str,
    default: bool,
}

/// Render the `pyproject.toml` declaring `registry` as the default index.
pub fn render_pyproject(registry: &RegistryConfig) -> Result<String> {
    let doc = PyProject {
        project: ProjectTable {
            name: format!("{}-test", registry.name),
            version: "0.1.0",
            description: "Test registry",
        },
        tool: ToolTable {
            uv: UvTable {
                index: vec![IndexEntry {
                    name: &registry.name,
                    url: &registry.url,
                    default: true,
                }],
            },
        },
    };

    Ok(toml::to_string(&doc).map_err(anyhow::Error::from)?)
}

/// A temporary project directory, removed when dropped.
#[derive(Debug)]
pub struct ScratchProject {
    dir: TempDir,
}

impl ScratchProject {
    /// Create a fresh directory containing the descriptor for `registry`.
    pub fn create(registry: &RegistryConfig) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(&format!("{}-test-", registry.name))
            .tempdir()?;
        fs::write(dir.path().join(PYPROJECT), render_pyproject(registry)?)?;
        tracing::debug!("Created scratch project at {}", dir.path().display());
        Ok(Self { dir })
    }

    /// Project root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the descriptor file.
    pub fn pyproject(&self) -> PathBuf {
        self.dir.path().join(PYPROJECT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(name: &str, url: &str) -> RegistryConfig {
        RegistryConfig {
            name: name.to_string(),
            url: url.to_string(),
            token: Some("t".to_string()),
            package: Some("p".to_string()),
            username: "__token__".to_string(),
        }
    }

    fn parse(text: &str) -> toml::Table {
        toml::from_str::<toml::Table>(text).unwrap()
    }

    #[test]
    fn descriptor_declares_project() {
        let doc = parse(&render_pyproject(&registry("aws", "https://a.test/simple")).unwrap());
        let project = doc["project"].as_table().unwrap();

        assert_eq!(project["name"].as_str(), Some("aws-test"));
        assert_eq!(project["version"].as_str(), Some("0.1.0"));
        assert_eq!(project["description"].as_str(), Some("Test registry"));
    }

    #[test]
    fn descriptor_declares_default_index() {
        let doc = parse(&render_pyproject(&registry("aws", "https://a.test/simple")).unwrap());
        let index = doc["tool"]["uv"]["index"].as_array().unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index[0]["name"].as_str(), Some("aws"));
        assert_eq!(index[0]["url"].as_str(), Some("https://a.test/simple"));
        assert_eq!(index[0]["default"].as_bool(), Some(true));
    }

    #[test]
    fn descriptor_escapes_url() {
        let url = r#"https://a.test/"quoted"\path"#;
        let doc = parse(&render_pyproject(&registry("aws", url)).unwrap());
        assert_eq!(doc["tool"]["uv"]["index"][0]["url"].as_str(), Some(url));
    }

    #[test]
    fn scratch_project_writes_descriptor() {
        let project = ScratchProject::create(&registry("aws", "https://a.test")).unwrap();
        let text = fs::read_to_string(project.pyproject()).unwrap();

        assert!(project.path().is_dir());
        assert!(text.contains("aws-test"));
    }

    #[test]
    fn scratch_project_is_removed_on_drop() {
        let project = ScratchProject::create(&registry("aws", "https://a.test")).unwrap();
        let path = project.path().to_path_buf();
        drop(project);

        assert!(!path.exists());
    }
}
