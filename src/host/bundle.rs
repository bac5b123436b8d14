//! Read-only bundled resources.
//!
//! The bundle is the first resolution tier: deployable files shipped alongside
//! the application, addressed by relative path (`workflows/<name>.yaml`,
//! `user_config/<name>.json`).

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{ResolveError, ResolveResult};

/// A read-only source of bundled resources.
#[async_trait]
pub trait ResourceBundle: Send + Sync {
    /// Resolve a bundle-relative path to a display location (for logging).
    fn locate(&self, path: &str) -> String;

    /// Fetch the resource at a bundle-relative path.
    async fn fetch(&self, path: &str) -> ResolveResult<String>;

    /// List resource names (file stems) under a bundle-relative directory.
    async fn list(&self, dir: &str) -> ResolveResult<Vec<String>>;
}

/// Bundle rooted at a local directory.
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ResourceBundle for DirBundle {
    fn locate(&self, path: &str) -> String {
        self.root.join(path).display().to_string()
    }

    async fn fetch(&self, path: &str) -> ResolveResult<String> {
        let full = self.root.join(path);
        Ok(tokio::fs::read_to_string(&full).await?)
    }

    async fn list(&self, dir: &str) -> ResolveResult<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(self.root.join(dir)).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let known_format = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("yaml") | Some("yml") | Some("json")
            );
            if known_format {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Bundle served over HTTP from a base URL.
pub struct HttpBundle {
    base: String,
    client: reqwest::Client,
}

impl HttpBundle {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ResourceBundle for HttpBundle {
    fn locate(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    async fn fetch(&self, path: &str) -> ResolveResult<String> {
        let url = self.locate(path);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ResolveError::Fetch(format!(
                "HTTP {} fetching {}",
                response.status(),
                url
            )));
        }
        Ok(response.text().await?)
    }

    async fn list(&self, _dir: &str) -> ResolveResult<Vec<String>> {
        // HTTP bundles have no directory index.
        Err(ResolveError::Unsupported(
            "listing is not supported for HTTP bundles".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_dir_bundle_fetch() {
        let temp_dir = tempfile::tempdir().unwrap();
        let workflows = temp_dir.path().join("workflows");
        fs::create_dir_all(&workflows).unwrap();
        fs::write(workflows.join("demo.yaml"), "workflow:\n  steps: {}\n").unwrap();

        let bundle = DirBundle::new(temp_dir.path());
        let content = bundle.fetch("workflows/demo.yaml").await.unwrap();
        assert!(content.contains("steps"));
    }

    #[tokio::test]
    async fn test_dir_bundle_missing_file_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let bundle = DirBundle::new(temp_dir.path());

        let result = bundle.fetch("workflows/absent.yaml").await;
        assert!(result.is_err(), "missing files must surface as errors");
    }

    #[tokio::test]
    async fn test_dir_bundle_list() {
        let temp_dir = tempfile::tempdir().unwrap();
        let workflows = temp_dir.path().join("workflows");
        fs::create_dir_all(&workflows).unwrap();
        fs::write(workflows.join("b.yaml"), "").unwrap();
        fs::write(workflows.join("a.yml"), "").unwrap();
        fs::write(workflows.join("notes.txt"), "").unwrap();

        let bundle = DirBundle::new(temp_dir.path());
        let names = bundle.list("workflows").await.unwrap();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_http_bundle_locate() {
        let bundle = HttpBundle::new("http://localhost:3901/");
        assert_eq!(
            bundle.locate("workflows/demo.yaml"),
            "http://localhost:3901/workflows/demo.yaml"
        );
    }
}
