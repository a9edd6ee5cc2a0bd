use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::template::{AccentColor, TemplateKind};

/// Opaque identifier assigned to a list entry when it is created.
pub type EntryId = Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: String,
    /// Free text; may be the literal "Present".
    pub end_date: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: Option<String>,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: EntryId,
    pub name: String,
    /// 1–5; only the creative layout reads it.
    pub level: Option<u8>,
}

/// The aggregate root held by the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillEntry>,
    pub selected_template: TemplateKind,
    pub color: AccentColor,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo {
                website: Some(String::new()),
                linkedin: Some(String::new()),
                ..PersonalInfo::default()
            },
            education: Vec::new(),
            experience: Vec::new(),
            skills: Vec::new(),
            selected_template: TemplateKind::Minimal,
            color: AccentColor::default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Drafts (entry without id), input to the `add_*` mutators
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl EducationDraft {
    pub fn into_entry(self, id: EntryId) -> EducationEntry {
        EducationEntry {
            id,
            institution: self.institution,
            degree: self.degree,
            field_of_study: self.field_of_study,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: Option<String>,
    pub description: String,
    pub achievements: Vec<String>,
}

impl ExperienceDraft {
    pub fn into_entry(self, id: EntryId) -> ExperienceEntry {
        ExperienceEntry {
            id,
            company: self.company,
            position: self.position,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            description: self.description,
            achievements: with_slot(self.achievements),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillDraft {
    pub name: String,
    pub level: Option<u8>,
}

impl SkillDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
        }
    }

    pub fn into_entry(self, id: EntryId) -> SkillEntry {
        SkillEntry {
            id,
            name: self.name,
            level: self.level,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Patches: partial updates merged into existing records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfoPatch {
    pub fn apply_to(self, info: &mut PersonalInfo) {
        merge(&mut info.full_name, self.full_name);
        merge(&mut info.job_title, self.job_title);
        merge(&mut info.email, self.email);
        merge(&mut info.phone, self.phone);
        merge(&mut info.location, self.location);
        merge_opt(&mut info.website, self.website);
        merge_opt(&mut info.linkedin, self.linkedin);
        merge(&mut info.summary, self.summary);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl EducationPatch {
    pub fn apply_to(self, entry: &mut EducationEntry) {
        merge(&mut entry.institution, self.institution);
        merge(&mut entry.degree, self.degree);
        merge_opt(&mut entry.field_of_study, self.field_of_study);
        merge(&mut entry.start_date, self.start_date);
        merge(&mut entry.end_date, self.end_date);
        merge_opt(&mut entry.location, self.location);
        merge_opt(&mut entry.description, self.description);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
}

impl ExperiencePatch {
    pub fn achievements(achievements: Vec<String>) -> Self {
        Self {
            achievements: Some(achievements),
            ..Self::default()
        }
    }

    pub fn apply_to(self, entry: &mut ExperienceEntry) {
        merge(&mut entry.company, self.company);
        merge(&mut entry.position, self.position);
        merge(&mut entry.start_date, self.start_date);
        merge(&mut entry.end_date, self.end_date);
        merge_opt(&mut entry.location, self.location);
        merge(&mut entry.description, self.description);
        merge(&mut entry.achievements, self.achievements.map(with_slot));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<u8>,
}

impl SkillPatch {
    pub fn apply_to(self, entry: &mut SkillEntry) {
        merge(&mut entry.name, self.name);
        merge_opt(&mut entry.level, self.level);
    }
}

/// An experience always carries at least one, possibly blank, achievement row.
fn with_slot(mut achievements: Vec<String>) -> Vec<String> {
    if achievements.is_empty() {
        achievements.push(String::new());
    }
    achievements
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn merge_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
