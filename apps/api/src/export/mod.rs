//! PDF export: render in print mode, lay out, write the file, hand back the bytes.
//!
//! One export runs at a time. A second request while one is in flight is
//! rejected with `Conflict` rather than queued. The in-flight flag doubles as
//! the "export mode" marker and is cleared by a guard on every exit path.

pub mod handlers;
pub mod pdf;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::layout::{layout_document, PageGeometry};
use crate::models::resume::ResumeData;
use crate::render::{render_with_mode, RenderMode};
use pdf::{write_pdf, DocumentInfo};

const FALLBACK_FILENAME_STEM: &str = "Your";

/// Page and resolution settings for an export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportOptions {
    pub page_width_in: f32,
    pub page_height_in: f32,
    pub margin_in: f32,
    /// Layout resolution multiplier; mapped back to points when written.
    pub scale: f32,
}

impl Default for ExportOptions {
    /// US Letter, half-inch margins, 2x resolution.
    fn default() -> Self {
        ExportOptions {
            page_width_in: 8.5,
            page_height_in: 11.0,
            margin_in: 0.5,
            scale: 2.0,
        }
    }
}

impl ExportOptions {
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::from_inches(
            self.page_width_in,
            self.page_height_in,
            self.margin_in,
            self.scale,
        )
    }
}

#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// `<full name>_Resume.pdf`, or `Your_Resume.pdf` when the name is blank.
/// Path separators and quotes are replaced so the name stays a single file.
pub fn export_filename(full_name: &str) -> String {
    let stem = if full_name.trim().is_empty() {
        FALLBACK_FILENAME_STEM.to_string()
    } else {
        full_name
            .chars()
            .map(|c| match c {
                '/' | '\\' | '"' => '-',
                c if c.is_control() => '-',
                c => c,
            })
            .collect()
    };
    format!("{stem}_Resume.pdf")
}

pub struct PdfExporter {
    export_dir: PathBuf,
    options: ExportOptions,
    in_flight: AtomicBool,
}

impl PdfExporter {
    pub fn new(export_dir: PathBuf) -> Self {
        Self::with_options(export_dir, ExportOptions::default())
    }

    pub fn with_options(export_dir: PathBuf, options: ExportOptions) -> Self {
        PdfExporter {
            export_dir,
            options,
            in_flight: AtomicBool::new(false),
        }
    }

    /// True while an export is running.
    pub fn is_exporting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn export(&self, data: ResumeData) -> Result<ExportArtifact, AppError> {
        let _guard = ExportGuard::acquire(&self.in_flight)?;

        match self.run(data).await {
            Ok(artifact) => {
                info!(
                    "Exported {} ({} page(s), {} bytes)",
                    artifact.path.display(),
                    artifact.page_count,
                    artifact.bytes.len()
                );
                Ok(artifact)
            }
            Err(e) => {
                let detail = format!("{e:#}");
                error!("PDF export failed: {detail}");
                Err(AppError::Export(detail))
            }
        }
    }

    async fn run(&self, data: ResumeData) -> anyhow::Result<ExportArtifact> {
        let filename = export_filename(&data.personal_info.full_name);
        let geometry = self.options.geometry();
        let title = filename.trim_end_matches(".pdf").replace('_', " ");

        // Layout is CPU-bound; keep it off the async workers.
        let (bytes, page_count) = tokio::task::spawn_blocking(move || {
            let tree = render_with_mode(&data, RenderMode::Print);
            let pages = layout_document(&tree, &geometry);
            let info = DocumentInfo {
                title,
                created: Utc::now(),
            };
            (write_pdf(&pages, &geometry, &info), pages.len())
        })
        .await
        .context("PDF layout task failed")?;

        tokio::fs::create_dir_all(&self.export_dir)
            .await
            .with_context(|| format!("creating export dir {}", self.export_dir.display()))?;
        let path = self.export_dir.join(&filename);
        tokio::fs::write(&path, &bytes)
            .await
            .with_context(|| format!("writing {}", path.display()))?;

        Ok(ExportArtifact {
            filename,
            path,
            bytes,
            page_count,
        })
    }
}

/// Holds the in-flight flag for the duration of one export.
struct ExportGuard<'a>(&'a AtomicBool);

impl<'a> ExportGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, AppError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::Conflict("An export is already in progress".to_string()))?;
        Ok(ExportGuard(flag))
    }
}

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::{empty_resume, full_resume};

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Jane Q Doe"), "Jane Q Doe_Resume.pdf");
        assert_eq!(export_filename(""), "Your_Resume.pdf");
        assert_eq!(export_filename("   "), "Your_Resume.pdf");
        assert_eq!(export_filename("a/b\\c"), "a-b-c_Resume.pdf");
    }

    #[tokio::test]
    async fn test_export_writes_pdf_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PdfExporter::new(dir.path().join("out"));

        let artifact = exporter.export(full_resume()).await.unwrap();
        assert_eq!(artifact.filename, "Jane Q Doe_Resume.pdf");
        assert_eq!(artifact.page_count, 1);
        assert!(artifact.bytes.starts_with(b"%PDF-1.4"));

        let on_disk = std::fs::read(&artifact.path).unwrap();
        assert_eq!(on_disk, artifact.bytes);
        assert!(!exporter.is_exporting());
    }

    #[tokio::test]
    async fn test_blank_name_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PdfExporter::new(dir.path().to_path_buf());
        let artifact = exporter.export(empty_resume()).await.unwrap();
        assert_eq!(artifact.filename, "Your_Resume.pdf");
        assert!(dir.path().join("Your_Resume.pdf").exists());
    }

    #[tokio::test]
    async fn test_overlapping_export_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PdfExporter::new(dir.path().to_path_buf());

        let held = ExportGuard::acquire(&exporter.in_flight).unwrap();
        assert!(exporter.is_exporting());
        let err = exporter.export(full_resume()).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        drop(held);
        assert!(!exporter.is_exporting());
        assert!(exporter.export(full_resume()).await.is_ok());
    }

    #[tokio::test]
    async fn test_failure_clears_export_mode() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the export directory should be.
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let exporter = PdfExporter::new(blocker);

        let err = exporter.export(full_resume()).await.unwrap_err();
        // The detail keeps the whole context chain, not just the outer message.
        match err {
            AppError::Export(detail) => {
                assert!(detail.starts_with("creating export dir"), "{detail}");
                assert!(detail.contains(": "), "{detail}");
            }
            other => panic!("expected export error, got {other:?}"),
        }
        assert!(!exporter.is_exporting());
    }
}
