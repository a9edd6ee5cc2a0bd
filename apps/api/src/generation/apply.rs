//! Turns generated text into resume mutations, one rule per category.

use serde::Serialize;

use crate::generation::generator::ContentCategory;
use crate::models::resume::{
    EducationDraft, EntryId, ExperienceDraft, PersonalInfoPatch, SkillDraft,
};
use crate::store::ResumeStore;

const GENERATED_COMPANY: &str = "AI Generated Company";
const GENERATED_EXPERIENCE_START: &str = "01/2023";
const GENERATED_EXPERIENCE_END: &str = "Present";
const GENERATED_EXPERIENCE_LOCATION: &str = "Remote";

const EDUCATION_DELIMITER: &str = " from ";
const FALLBACK_DEGREE: &str = "Degree";
const FALLBACK_INSTITUTION: &str = "University";
const GENERATED_EDUCATION_START: &str = "09/2018";
const GENERATED_EDUCATION_END: &str = "06/2022";
const GENERATED_EDUCATION_LOCATION: &str = "University Location";

const SKILL_DELIMITER: &str = ", ";

/// What an apply step changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AppliedContent {
    SummaryReplaced,
    ExperienceAdded { id: EntryId },
    EducationAdded { id: EntryId },
    SkillsAdded { ids: Vec<EntryId> },
}

impl AppliedContent {
    /// User-facing confirmation line.
    pub fn message(&self) -> &'static str {
        match self {
            AppliedContent::SummaryReplaced => "Professional summary applied to your resume",
            AppliedContent::ExperienceAdded { .. } => "Experience added to your resume",
            AppliedContent::EducationAdded { .. } => "Education added to your resume",
            AppliedContent::SkillsAdded { .. } => "Skills added to your resume",
        }
    }
}

pub fn apply_generated(
    store: &mut ResumeStore,
    category: ContentCategory,
    job_title: &str,
    content: &str,
) -> AppliedContent {
    match category {
        ContentCategory::Summary => {
            store.update_personal_info(PersonalInfoPatch {
                summary: Some(content.to_string()),
                ..PersonalInfoPatch::default()
            });
            AppliedContent::SummaryReplaced
        }
        ContentCategory::Experience => {
            let id = store.add_experience(experience_draft(job_title, content));
            AppliedContent::ExperienceAdded { id }
        }
        ContentCategory::Education => {
            let id = store.add_education(education_draft(job_title, content));
            AppliedContent::EducationAdded { id }
        }
        ContentCategory::Skills => {
            let ids = content
                .split(SKILL_DELIMITER)
                .map(|name| store.add_skill(SkillDraft::named(name)))
                .collect();
            AppliedContent::SkillsAdded { ids }
        }
    }
}

/// Narrative before the first blank line; non-empty lines of the next block
/// become achievements, with one empty row if there are none.
fn experience_draft(job_title: &str, content: &str) -> ExperienceDraft {
    let mut blocks = content.split("\n\n");
    let description = blocks.next().unwrap_or_default().to_string();
    let mut achievements: Vec<String> = blocks
        .next()
        .map(|block| {
            block
                .split('\n')
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    if achievements.is_empty() {
        achievements.push(String::new());
    }

    ExperienceDraft {
        company: GENERATED_COMPANY.to_string(),
        position: job_title.to_string(),
        start_date: GENERATED_EXPERIENCE_START.to_string(),
        end_date: GENERATED_EXPERIENCE_END.to_string(),
        location: Some(GENERATED_EXPERIENCE_LOCATION.to_string()),
        description,
        achievements,
    }
}

/// Splits on the literal `" from "`: first part is the degree, second the
/// institution. A degree or institution containing the delimiter splits
/// wrongly; that behaviour is kept as-is.
fn education_draft(job_title: &str, content: &str) -> EducationDraft {
    let mut parts = content.split(EDUCATION_DELIMITER);
    let degree = parts
        .next()
        .filter(|p| !p.is_empty())
        .unwrap_or(FALLBACK_DEGREE);
    let institution = parts
        .next()
        .filter(|p| !p.is_empty())
        .unwrap_or(FALLBACK_INSTITUTION);

    EducationDraft {
        institution: institution.to_string(),
        degree: degree.to_string(),
        field_of_study: Some(job_title.to_string()),
        start_date: GENERATED_EDUCATION_START.to_string(),
        end_date: GENERATED_EDUCATION_END.to_string(),
        location: Some(GENERATED_EDUCATION_LOCATION.to_string()),
        description: Some(String::new()),
    }
}
