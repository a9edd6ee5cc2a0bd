//! Resume data store: the single session record and its mutators.
//!
//! Every mutator is synchronous and total. Update/remove against an unknown id
//! leaves the record untouched and returns `false` so callers can report it;
//! nothing here validates field contents.
//!
//! The store is owned by `AppState` behind one `RwLock` and handed to handlers
//! explicitly; there is no process-global resume.

use tracing::debug;
use uuid::Uuid;

use crate::models::resume::{
    EducationDraft, EducationPatch, EntryId, ExperienceDraft, ExperiencePatch, PersonalInfoPatch,
    ResumeData, SkillDraft, SkillPatch,
};
use crate::models::template::{AccentColor, TemplateKind};

#[derive(Debug, Clone, Default)]
pub struct ResumeStore {
    data: ResumeData,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    pub fn snapshot(&self) -> ResumeData {
        self.data.clone()
    }

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        patch.apply_to(&mut self.data.personal_info);
    }

    // ── Education ──────────────────────────────────────────────────────────

    pub fn add_education(&mut self, draft: EducationDraft) -> EntryId {
        let id = new_entry_id();
        self.data.education.push(draft.into_entry(id));
        debug!("Added education entry {id}");
        id
    }

    pub fn update_education(&mut self, id: EntryId, patch: EducationPatch) -> bool {
        match self.data.education.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                patch.apply_to(entry);
                true
            }
            None => false,
        }
    }

    pub fn remove_education(&mut self, id: EntryId) -> bool {
        let before = self.data.education.len();
        self.data.education.retain(|e| e.id != id);
        before != self.data.education.len()
    }

    // ── Experience ─────────────────────────────────────────────────────────

    pub fn add_experience(&mut self, draft: ExperienceDraft) -> EntryId {
        let id = new_entry_id();
        self.data.experience.push(draft.into_entry(id));
        debug!("Added experience entry {id}");
        id
    }

    pub fn update_experience(&mut self, id: EntryId, patch: ExperiencePatch) -> bool {
        match self.data.experience.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                patch.apply_to(entry);
                true
            }
            None => false,
        }
    }

    pub fn remove_experience(&mut self, id: EntryId) -> bool {
        let before = self.data.experience.len();
        self.data.experience.retain(|e| e.id != id);
        before != self.data.experience.len()
    }

    // ── Skills ─────────────────────────────────────────────────────────────

    pub fn add_skill(&mut self, draft: SkillDraft) -> EntryId {
        let id = new_entry_id();
        self.data.skills.push(draft.into_entry(id));
        debug!("Added skill entry {id}");
        id
    }

    pub fn update_skill(&mut self, id: EntryId, patch: SkillPatch) -> bool {
        match self.data.skills.iter_mut().find(|s| s.id == id) {
            Some(entry) => {
                patch.apply_to(entry);
                true
            }
            None => false,
        }
    }

    pub fn remove_skill(&mut self, id: EntryId) -> bool {
        let before = self.data.skills.len();
        self.data.skills.retain(|s| s.id != id);
        before != self.data.skills.len()
    }

    // ── Presentation ───────────────────────────────────────────────────────

    pub fn set_template(&mut self, template: TemplateKind) {
        self.data.selected_template = template;
    }

    pub fn set_color(&mut self, color: AccentColor) {
        self.data.color = color;
    }

    pub fn reset(&mut self) {
        self.data = ResumeData::default();
    }
}

fn new_entry_id() -> EntryId {
    Uuid::new_v4()
}
