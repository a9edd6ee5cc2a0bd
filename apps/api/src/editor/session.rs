//! Form editor state and the row-level actions the editor panels perform.
//!
//! `EditorSession` is transient view state: it is never part of `ResumeData`
//! and is not cleared by a resume reset.

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    EducationDraft, EntryId, ExperienceDraft, ExperiencePatch, SkillDraft,
};
use crate::store::ResumeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorTab {
    #[default]
    Personal,
    Experience,
    Education,
    Skills,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditorSession {
    pub active_tab: EditorTab,
    /// Text typed into the "Add a skill" box, not yet committed.
    pub new_skill: String,
}

/// Outcome of an achievement-row action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOutcome {
    Applied,
    /// The action was disabled for this row (e.g. removing the last achievement).
    Disabled,
    /// No experience entry with that id.
    MissingEntry,
    /// The entry exists but has no row at that index.
    MissingRow,
}

impl EditorSession {
    pub fn set_active_tab(&mut self, tab: EditorTab) {
        self.active_tab = tab;
    }

    pub fn set_new_skill(&mut self, text: impl Into<String>) {
        self.new_skill = text.into();
    }

    /// Adds the buffered skill if it is non-blank after trimming, then clears the buffer.
    ///
    /// A blank buffer is left as typed and nothing is added.
    pub fn commit_new_skill(&mut self, store: &mut ResumeStore) -> Option<EntryId> {
        let name = self.new_skill.trim();
        if name.is_empty() {
            return None;
        }
        let id = store.add_skill(SkillDraft::named(name));
        self.new_skill.clear();
        Some(id)
    }
}

/// Appends an experience entry with every field blank and one empty achievement row.
pub fn add_blank_experience(store: &mut ResumeStore) -> EntryId {
    store.add_experience(ExperienceDraft {
        location: Some(String::new()),
        achievements: vec![String::new()],
        ..ExperienceDraft::default()
    })
}

/// Appends an education entry with every field blank.
pub fn add_blank_education(store: &mut ResumeStore) -> EntryId {
    store.add_education(EducationDraft {
        field_of_study: Some(String::new()),
        location: Some(String::new()),
        description: Some(String::new()),
        ..EducationDraft::default()
    })
}

pub fn add_achievement(store: &mut ResumeStore, experience_id: EntryId) -> RowOutcome {
    let Some(mut rows) = achievements_of(store, experience_id) else {
        return RowOutcome::MissingEntry;
    };
    rows.push(String::new());
    store.update_experience(experience_id, ExperiencePatch::achievements(rows));
    RowOutcome::Applied
}

pub fn update_achievement(
    store: &mut ResumeStore,
    experience_id: EntryId,
    index: usize,
    text: String,
) -> RowOutcome {
    let Some(mut rows) = achievements_of(store, experience_id) else {
        return RowOutcome::MissingEntry;
    };
    let Some(slot) = rows.get_mut(index) else {
        return RowOutcome::MissingRow;
    };
    *slot = text;
    store.update_experience(experience_id, ExperiencePatch::achievements(rows));
    RowOutcome::Applied
}

/// Removes one achievement row. Disabled while the entry holds a single row,
/// so every experience keeps at least one editable input.
pub fn remove_achievement(
    store: &mut ResumeStore,
    experience_id: EntryId,
    index: usize,
) -> RowOutcome {
    let Some(mut rows) = achievements_of(store, experience_id) else {
        return RowOutcome::MissingEntry;
    };
    if rows.len() <= 1 {
        return RowOutcome::Disabled;
    }
    if index >= rows.len() {
        return RowOutcome::MissingRow;
    }
    rows.remove(index);
    store.update_experience(experience_id, ExperiencePatch::achievements(rows));
    RowOutcome::Applied
}

fn achievements_of(store: &ResumeStore, experience_id: EntryId) -> Option<Vec<String>> {
    store
        .data()
        .experience
        .iter()
        .find(|e| e.id == experience_id)
        .map(|e| e.achievements.clone())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn achievements(store: &ResumeStore, id: EntryId) -> Vec<String> {
        achievements_of(store, id).unwrap()
    }

    #[test]
    fn test_blank_experience_has_one_empty_achievement() {
        let mut store = ResumeStore::new();
        let id = add_blank_experience(&mut store);
        let entry = store.data().experience.last().unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.company, "");
        assert_eq!(entry.position, "");
        assert_eq!(entry.achievements, vec![String::new()]);
    }

    #[test]
    fn test_blank_entries_are_appended_at_the_end() {
        let mut store = ResumeStore::new();
        let first = add_blank_education(&mut store);
        let second = add_blank_education(&mut store);
        let ids: Vec<_> = store.data().education.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(store.data().education[1].degree, "");
    }

    #[test]
    fn test_removing_sole_achievement_is_a_no_op() {
        let mut store = ResumeStore::new();
        let id = add_blank_experience(&mut store);
        update_achievement(&mut store, id, 0, "Shipped v1".to_string());

        assert_eq!(remove_achievement(&mut store, id, 0), RowOutcome::Disabled);
        assert_eq!(achievements(&store, id), vec!["Shipped v1".to_string()]);
    }

    #[test]
    fn test_removing_achievement_shrinks_by_one() {
        let mut store = ResumeStore::new();
        let id = add_blank_experience(&mut store);
        add_achievement(&mut store, id);
        add_achievement(&mut store, id);
        update_achievement(&mut store, id, 0, "a".to_string());
        update_achievement(&mut store, id, 1, "b".to_string());
        update_achievement(&mut store, id, 2, "c".to_string());

        assert_eq!(remove_achievement(&mut store, id, 1), RowOutcome::Applied);
        assert_eq!(
            achievements(&store, id),
            vec!["a".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_remove_out_of_range_reports_missing_row() {
        let mut store = ResumeStore::new();
        let id = add_blank_experience(&mut store);
        add_achievement(&mut store, id);
        assert_eq!(remove_achievement(&mut store, id, 9), RowOutcome::MissingRow);
        assert_eq!(achievements(&store, id).len(), 2);
    }

    #[test]
    fn test_row_actions_on_unknown_entry() {
        let mut store = ResumeStore::new();
        let ghost = Uuid::new_v4();
        assert_eq!(add_achievement(&mut store, ghost), RowOutcome::MissingEntry);
        assert_eq!(
            update_achievement(&mut store, ghost, 0, "x".into()),
            RowOutcome::MissingEntry
        );
        assert_eq!(
            remove_achievement(&mut store, ghost, 0),
            RowOutcome::MissingEntry
        );
    }

    #[test]
    fn test_commit_new_skill_trims_and_clears() {
        let mut store = ResumeStore::new();
        let mut session = EditorSession::default();
        session.set_new_skill("  Kubernetes  ");

        let id = session.commit_new_skill(&mut store);

        assert!(id.is_some());
        assert_eq!(store.data().skills[0].name, "Kubernetes");
        assert_eq!(session.new_skill, "");
    }

    #[test]
    fn test_commit_blank_skill_is_ignored() {
        let mut store = ResumeStore::new();
        let mut session = EditorSession::default();
        session.set_new_skill("   ");
        assert_eq!(session.commit_new_skill(&mut store), None);
        assert!(store.data().skills.is_empty());
    }

    #[test]
    fn test_tab_defaults_to_personal() {
        let mut session = EditorSession::default();
        assert_eq!(session.active_tab, EditorTab::Personal);
        session.set_active_tab(EditorTab::Skills);
        assert_eq!(session.active_tab, EditorTab::Skills);
    }
}
