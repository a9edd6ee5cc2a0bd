// Content generation behind the "AI Assist" dialog.
// Generate fills a pending slot; apply writes it into the store; clear drops it.

pub mod apply;
pub mod catalog;
pub mod generator;
pub mod handlers;

use serde::Serialize;

pub use generator::{ContentCategory, ContentGenerator, MockContentGenerator};

/// Generated text held until the user applies or clears it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingContent {
    pub category: ContentCategory,
    pub job_title: String,
    pub content: String,
}
