//! Pluggable content generator behind the "AI Assist" dialog.
//!
//! Default: `MockContentGenerator` (canned text, random pick, keyword lookup).
//! `AppState` holds an `Arc<dyn ContentGenerator>` so a real backend can be
//! swapped in at startup without touching the handlers.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::catalog::{
    fill_title, match_role, EDUCATION_TEMPLATES, EXPERIENCE_TEMPLATES, SUMMARY_TEMPLATES,
};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    #[default]
    Summary,
    Experience,
    Education,
    Skills,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub category: ContentCategory,
    pub job_title: String,
    /// Collected for future backends; the mock generator ignores it.
    #[serde(default)]
    pub job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the content backend without touching callers.
///
/// Output shape per category:
/// - summary / education: a single string
/// - experience: narrative, a blank line, then one achievement per line
/// - skills: `", "`-separated names
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AppError>;

    /// Short label for logs and responses ("mock", ...).
    fn backend(&self) -> &'static str;
}

/// Validates the request, waits out the artificial delay, then asks the backend.
///
/// A blank job title is rejected before any waiting happens. Whitespace-only
/// counts as blank, so a title of "   " is refused rather than echoed into content.
pub async fn generate_content(
    generator: &dyn ContentGenerator,
    request: &GenerationRequest,
    delay: Duration,
) -> Result<String, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("Please enter a job title".to_string()));
    }

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let content = generator.generate(request).await?;
    info!(
        "Generated {:?} content for '{}' via {} backend",
        request.category,
        request.job_title,
        generator.backend()
    );
    Ok(content)
}

// ────────────────────────────────────────────────────────────────────────────
// MockContentGenerator: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Picks uniformly among fixed templates; skills come from a role lookup table.
pub struct MockContentGenerator {
    rng: Mutex<StdRng>,
}

impl MockContentGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic picks, for tests.
    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick<'a>(&self, options: &[&'a str]) -> &'a str {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        options[rng.gen_range(0..options.len())]
    }

    pub fn compose(&self, category: ContentCategory, job_title: &str) -> String {
        match category {
            ContentCategory::Summary => fill_title(self.pick(&SUMMARY_TEMPLATES), job_title),
            ContentCategory::Experience => fill_title(self.pick(&EXPERIENCE_TEMPLATES), job_title),
            ContentCategory::Education => self.pick(&EDUCATION_TEMPLATES).to_string(),
            ContentCategory::Skills => match_role(job_title).1.to_string(),
        }
    }
}

impl Default for MockContentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentGenerator for MockContentGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        Ok(self.compose(request.category, &request.job_title))
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn request(category: ContentCategory, title: &str) -> GenerationRequest {
        GenerationRequest {
            category,
            job_title: title.to_string(),
            job_description: None,
        }
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let generator = MockContentGenerator::with_seed(1);
        for title in ["", "   ", "\t\n"] {
            let err = generate_content(
                &generator,
                &request(ContentCategory::Summary, title),
                Duration::ZERO,
            )
            .await
            .unwrap_err();
            assert!(matches!(err, AppError::Validation(msg) if msg == "Please enter a job title"));
        }
    }

    #[tokio::test]
    async fn test_summary_contains_title() {
        let generator = MockContentGenerator::with_seed(2);
        let text = generate_content(
            &generator,
            &request(ContentCategory::Summary, "Platform Engineer"),
            Duration::ZERO,
        )
        .await
        .unwrap();
        assert!(text.contains("Platform Engineer"));
        assert!(SUMMARY_TEMPLATES
            .iter()
            .any(|t| fill_title(t, "Platform Engineer") == text));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_is_observed() {
        let generator = MockContentGenerator::with_seed(3);
        let started = tokio::time::Instant::now();
        generate_content(
            &generator,
            &request(ContentCategory::Education, "Analyst"),
            Duration::from_millis(1500),
        )
        .await
        .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn test_skills_follow_role_lookup() {
        let generator = MockContentGenerator::with_seed(4);
        let skills = generator.compose(ContentCategory::Skills, "Senior Data Scientist");
        assert_eq!(skills, match_role("Data Scientist").1);
    }

    #[test]
    fn test_random_picks_cover_every_education_template() {
        let generator = MockContentGenerator::with_seed(5);
        let seen: HashSet<String> = (0..200)
            .map(|_| generator.compose(ContentCategory::Education, "Anything"))
            .collect();
        assert_eq!(seen.len(), EDUCATION_TEMPLATES.len());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = MockContentGenerator::with_seed(9);
        let b = MockContentGenerator::with_seed(9);
        for _ in 0..10 {
            assert_eq!(
                a.compose(ContentCategory::Experience, "x"),
                b.compose(ContentCategory::Experience, "x")
            );
        }
    }

    #[test]
    fn test_request_category_defaults_to_summary() {
        let req: GenerationRequest =
            serde_json::from_str(r#"{"job_title": "Designer"}"#).unwrap();
        assert_eq!(req.category, ContentCategory::Summary);
        assert!(req.job_description.is_none());
    }
}
