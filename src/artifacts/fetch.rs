use std::path::{Path, PathBuf};

use reqwest::{header::CONTENT_TYPE, Client as HttpClient};

use crate::error::{AppError, AppResult};

/// A named artifact and the identifier it is stored under remotely
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub file_name: String,
    pub remote_id: Option<String>,
}

impl ArtifactSpec {
    pub fn new(file_name: impl Into<String>, remote_id: Option<String>) -> Self {
        Self {
            file_name: file_name.into(),
            remote_id,
        }
    }
}

/// Local artifact directory backed by remote storage
#[derive(Clone)]
pub struct ArtifactStore {
    http_client: HttpClient,
    dir: PathBuf,
    url_template: String,
}

impl ArtifactStore {
    pub fn new(
        http_client: HttpClient,
        dir: impl Into<PathBuf>,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            dir: dir.into(),
            url_template: url_template.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Download URL for a remote identifier
    pub fn remote_url(&self, remote_id: &str) -> String {
        self.url_template.replace("{id}", remote_id)
    }

    /// Downloads every artifact that is not already on disk
    ///
    /// Existing files are trusted as-is. No retries: the first failure aborts.
    pub async fn ensure_present(&self, specs: &[ArtifactSpec]) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        for spec in specs {
            let path = self.dir.join(&spec.file_name);

            if tokio::fs::try_exists(&path).await? {
                tracing::info!(file = %spec.file_name, "Artifact present, skipping download");
                continue;
            }

            let remote_id = spec.remote_id.as_deref().ok_or_else(|| {
                AppError::Artifact(format!(
                    "{} is missing from {} and no remote identifier is configured",
                    spec.file_name,
                    self.dir.display()
                ))
            })?;

            let bytes = self.download(remote_id, &path).await?;
            tracing::info!(
                file = %spec.file_name,
                remote_id = %remote_id,
                bytes,
                "Artifact downloaded"
            );
        }

        Ok(())
    }

    /// Fetches one artifact into `path`
    ///
    /// The body lands in a `.part` sibling first and is renamed into place, so
    /// `path` only ever holds a complete download. Bodies that cannot be an
    /// artifact (HTML interstitials, anything not starting a JSON array) are
    /// rejected before touching disk, so the next start fetches again.
    async fn download(&self, remote_id: &str, path: &Path) -> AppResult<usize> {
        let url = self.remote_url(remote_id);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::Artifact(format!(
                "download of {} returned status {}",
                remote_id,
                response.status()
            )));
        }

        let is_html = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html"));
        if is_html {
            return Err(AppError::Artifact(format!(
                "download of {} returned an HTML page instead of the artifact",
                remote_id
            )));
        }

        let body = response.bytes().await?;
        if !is_json_array(&body) {
            return Err(AppError::Artifact(format!(
                "download of {} is not a JSON array",
                remote_id
            )));
        }

        let partial = path.with_extension("part");
        tokio::fs::write(&partial, &body).await?;
        tokio::fs::rename(&partial, path).await?;

        Ok(body.len())
    }
}

/// Both artifacts are JSON arrays
fn is_json_array(body: &[u8]) -> bool {
    body.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'[')
}
