use anyhow::{Result, Context};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::{Config, DOC_EXTENSION};
use crate::document_processor::MarkdownDocument;
use crate::file_utils::FileManager;
use crate::git_utils::GitRepository;
use crate::translation_service::TranslationService;

// @module: Application controller for the translation pipeline

/// Main application controller for documentation translation
///
/// Sequences the pipeline for every changed file, strictly one at a
/// time: read, split front matter, translate, reassemble, derive the
/// output name, write. The commit/push step runs once, only after every
/// file has been written. The first error aborts the remaining batch.
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Translation service built from the configuration
    service: TranslationService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        // Resolving the provider here means an unsupported selector
        // fails before any file or network activity
        let service = TranslationService::new(config.clone())?;

        Ok(Self { config, service })
    }

    /// Create a controller around an existing service (used with the mock provider)
    pub fn with_service(config: Config, service: TranslationService) -> Self {
        Self { config, service }
    }

    /// Run the translation pipeline for the repository at the given root
    pub async fn run<P: AsRef<Path>>(&self, repo_root: P) -> Result<()> {
        let start_time = std::time::Instant::now();

        // Configuration problems must surface before any file is read
        self.config.validate()
            .context("Configuration validation failed")?;

        let repo = GitRepository::new(repo_root.as_ref());
        let changed_files = repo.list_changed_files(&self.config.file_extensions).await?;

        if changed_files.is_empty() {
            info!("No changed files to translate, skipping commit");
            return Ok(());
        }

        info!(
            "Translating {} changed file(s) to {} using {}",
            changed_files.len(),
            self.config.target_language,
            self.service.provider_name()
        );

        let progress = ProgressBar::new(changed_files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for relative_path in &changed_files {
            progress.set_message(relative_path.display().to_string());

            let output_path = self.process_file(repo.root(), relative_path).await
                .with_context(|| format!("Failed to translate {:?}", relative_path))?;

            info!("Translated {} -> {}", relative_path.display(), output_path.display());
            progress.inc(1);
        }

        progress.finish_and_clear();

        // Persistence is a barrier: it runs once, after every write
        repo.stage_all().await?;
        repo.commit(&self.commit_message()).await?;
        repo.push().await?;

        info!(
            "Translation completed in {}.",
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Translate one changed file and write its output
    async fn process_file(&self, root: &Path, relative_path: &Path) -> Result<PathBuf> {
        let input_path = root.join(relative_path);
        let content = FileManager::read_to_string(&input_path)?;

        // Front matter is only meaningful for documentation files;
        // every other watched extension is translated as plain body
        let document = if Self::has_doc_extension(relative_path) {
            MarkdownDocument::parse(&content)?
        } else {
            MarkdownDocument::body_only(&content)
        };

        let translated = self.service.translate(&document.body).await?;
        let rendered = document.with_body(translated).render()?;

        let output_path = FileManager::derive_output_path(
            &input_path,
            &self.config.output_format,
            &self.config.target_language_code,
        );
        FileManager::write_to_file(&output_path, &rendered)?;

        Ok(output_path)
    }

    /// Commit message embedding the target language name
    fn commit_message(&self) -> String {
        format!("docs: add {} translations", self.config.target_language)
    }

    /// Whether a path carries the documentation extension
    fn has_doc_extension(path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(DOC_EXTENSION))
            .unwrap_or(false)
    }

    /// Format a duration for the completion log line
    fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        if total_secs >= 60 {
            format!("{}m {}s", total_secs / 60, total_secs % 60)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
