//! Integration tests for publishing formulas to a tap.
//!
//! These tests drive the public API against an in-memory repository host
//! without requiring actual GitHub API calls.

use async_trait::async_trait;
use brewtap_homebrew::{
    CommitMeta, ContentLookup, ExistingContent, HomebrewBackend, RepositoryClient,
    RepositoryMetadata,
};
use brewtap_release::error::Result;
use brewtap_release::{
    DARWIN_AMD64, Error, ProjectConfig, PublishStatus, ReleaseBackend, ReleaseContext,
    RemoteOperation, RepoSlug,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Repository host holding files in memory, keyed by `owner/repo:path`.
///
/// Each write bumps a revision counter that stands in for the content hash,
/// and an update with a stale hash is rejected like GitHub does.
#[derive(Default)]
struct MemoryHost {
    files: Mutex<HashMap<String, (String, Vec<u8>)>>,
    revision: AtomicUsize,
    requests: AtomicUsize,
}

impl MemoryHost {
    fn key(repo: &RepoSlug, path: &str) -> String {
        format!("{repo}:{path}")
    }

    fn file(&self, repo: &str, path: &str) -> Option<String> {
        let files = self.files.lock().unwrap();
        files
            .get(&format!("{repo}:{path}"))
            .map(|(_, content)| String::from_utf8(content.clone()).unwrap())
    }

    fn sha(&self, repo: &str, path: &str) -> Option<String> {
        let files = self.files.lock().unwrap();
        files.get(&format!("{repo}:{path}")).map(|(sha, _)| sha.clone())
    }

    fn next_sha(&self) -> String {
        format!("rev-{}", self.revision.fetch_add(1, Ordering::SeqCst))
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositoryClient for MemoryHost {
    async fn repository(&self, repo: &RepoSlug) -> Result<RepositoryMetadata> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(RepositoryMetadata {
            homepage: None,
            description: Some("Sync formulas from releases".to_string()),
            html_url: repo.html_url(),
        })
    }

    async fn get_content(&self, repo: &RepoSlug, path: &str) -> Result<ContentLookup> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let files = self.files.lock().unwrap();
        Ok(match files.get(&Self::key(repo, path)) {
            Some((sha, _)) => ContentLookup::Found(ExistingContent { sha: sha.clone() }),
            None => ContentLookup::NotFound,
        })
    }

    async fn create_file(
        &self,
        repo: &RepoSlug,
        path: &str,
        content: &[u8],
        _commit: &CommitMeta,
    ) -> Result<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let sha = self.next_sha();
        let mut files = self.files.lock().unwrap();
        let key = Self::key(repo, path);
        if files.contains_key(&key) {
            return Err(Error::remote(RemoteOperation::CreateFile, "422 sha wasn't supplied"));
        }
        files.insert(key, (sha, content.to_vec()));
        Ok(())
    }

    async fn update_file(
        &self,
        repo: &RepoSlug,
        path: &str,
        content: &[u8],
        _commit: &CommitMeta,
        sha: &str,
    ) -> Result<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let next = self.next_sha();
        let mut files = self.files.lock().unwrap();
        match files.get_mut(&Self::key(repo, path)) {
            Some(entry) if entry.0 == sha => {
                *entry = (next, content.to_vec());
                Ok(())
            }
            _ => Err(Error::remote(RemoteOperation::UpdateFile, "409 Conflict")),
        }
    }
}

fn context(dist: &TempDir, tag: &str, caveats: &str) -> ReleaseContext {
    let yaml = format!(
        r#"
build:
  binary_name: tap_sync
release:
  repo: acme/tap-sync
brew:
  repo: acme/homebrew-tap
  caveats: "{caveats}"
"#
    );
    let mut config = ProjectConfig::from_yaml(&yaml).unwrap();
    config.validate().unwrap();
    config.dist = dist.path().to_path_buf();
    ReleaseContext::new(config, tag).with_archive(DARWIN_AMD64, "tap_sync_Darwin_x86_64")
}

fn dist() -> TempDir {
    let dist = TempDir::new().unwrap();
    std::fs::write(dist.path().join("tap_sync_Darwin_x86_64.tar.gz"), b"hello").unwrap();
    dist
}

/// Tests for the create-then-update lifecycle of a formula.
mod lifecycle {
    use super::*;

    /// The first release creates the formula; the next one updates it.
    #[tokio::test]
    async fn creates_then_updates() {
        let dist = dist();
        let backend = HomebrewBackend::new(MemoryHost::default());

        let first = backend.publish(&context(&dist, "v1.0.0", "")).await.unwrap();
        assert_eq!(first.status, PublishStatus::Created);

        let second = backend.publish(&context(&dist, "v1.1.0", "")).await.unwrap();
        assert_eq!(second.status, PublishStatus::Updated);
    }

    /// Publishing the same release twice leaves identical content.
    #[tokio::test]
    async fn republishing_is_idempotent() {
        let dist = dist();
        let backend = HomebrewBackend::new(MemoryHost::default());

        backend.publish(&context(&dist, "v1.0.0", "")).await.unwrap();
        let formula = backend.generate_formula(&context(&dist, "v1.0.0", "")).await.unwrap();
        backend.publish(&context(&dist, "v1.0.0", "")).await.unwrap();

        // generate_formula output matches what was written
        let written = backend.client().file("acme/homebrew-tap", "tap_sync.rb");
        assert_eq!(written.as_deref(), Some(formula.as_str()));
    }

    /// The rendered formula reflects the release and repository metadata.
    #[tokio::test]
    async fn written_formula_content() {
        let dist = dist();
        let backend = HomebrewBackend::new(MemoryHost::default());

        backend
            .publish(&context(&dist, "v2.0.0", "Run tap_sync init"))
            .await
            .unwrap();

        let formula = backend
            .client()
            .file("acme/homebrew-tap", "tap_sync.rb")
            .unwrap();
        let expected = r#"class TapSync < Formula
  desc "Sync formulas from releases"
  homepage "https://github.com/acme/tap-sync"
  url "https://github.com/acme/tap-sync/releases/download/v2.0.0/tap_sync_Darwin_x86_64.tar.gz"
  version "v2.0.0"
  sha256 "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"

  def install
    bin.install "tap_sync"
  end

  def caveats
    "Run tap_sync init"
  end
end
"#;
        assert_eq!(formula, expected);
    }
}

/// Tests for stage preconditions.
mod preconditions {
    use super::*;

    /// An unconfigured tap makes the stage a no-op with no remote calls.
    #[tokio::test]
    async fn empty_tap_makes_no_requests() {
        let dist = dist();
        let mut ctx = context(&dist, "v1.0.0", "");
        ctx.config.brew.repo = String::new();
        let backend = HomebrewBackend::new(MemoryHost::default());

        let result = backend.publish(&ctx).await.unwrap();

        assert!(result.is_skipped());
        assert_eq!(backend.client().requests(), 0);
    }

    /// Without a darwin/amd64 archive nothing is written.
    #[tokio::test]
    async fn missing_darwin_archive_fails() {
        let dist = dist();
        let mut ctx = context(&dist, "v1.0.0", "");
        ctx.archives.insert(DARWIN_AMD64.to_string(), String::new());
        let backend = HomebrewBackend::new(MemoryHost::default());

        let err = backend.publish(&ctx).await.unwrap_err();

        assert!(err.is_no_darwin_build());
        assert!(backend.client().sha("acme/homebrew-tap", "tap_sync.rb").is_none());
    }
}
