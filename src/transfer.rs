use crate::models::{AppData, ExportDocument, ImportDocument};
use chrono::{DateTime, Utc};
use tracing::error;

pub const EXPORT_VERSION: &str = "1.0";

pub fn export_document(data: &AppData, now: DateTime<Utc>) -> ExportDocument {
    ExportDocument {
        todos: data.todos.clone(),
        achievements: data.achievements.clone(),
        export_date: now,
        version: EXPORT_VERSION,
    }
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("list-hidupku-backup-{}.json", now.date_naive().format("%Y-%m-%d"))
}

/// Applies an imported backup. The goal list is replaced wholesale when the
/// document carries a `todos` array, and the achievements list when one is
/// present; anything malformed leaves the state untouched. Returns whether
/// the list was replaced.
pub fn apply_import(data: &mut AppData, raw: &[u8]) -> bool {
    let document: ImportDocument = match serde_json::from_slice(raw) {
        Ok(document) => document,
        Err(err) => {
            error!("failed to parse import document: {err}");
            return false;
        }
    };

    let Some(todos) = document.todos else {
        error!("import document has no todos array, ignoring");
        return false;
    };

    data.todos = todos;
    if let Some(achievements) = document.achievements {
        data.achievements = achievements;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Priority};
    use crate::store::{add_goal, toggle_goal};
    use chrono::TimeZone;

    fn sample_data() -> AppData {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let mut data = AppData::default();
        add_goal(&mut data.todos, "Climb Everest", Category::Adventure, Priority::High, Some(35), now).unwrap();
        let id = add_goal(&mut data.todos, "Learn piano", Category::Learning, Priority::Low, None, now)
            .unwrap()
            .id;
        toggle_goal(&mut data.todos, &id, Some(now), None, now);
        data.achievements.push("first_goal".to_string());
        data
    }

    #[test]
    fn export_then_import_round_trips() {
        let source = sample_data();
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let raw = serde_json::to_vec(&export_document(&source, now)).unwrap();

        let mut restored = AppData::default();
        assert!(apply_import(&mut restored, &raw));

        assert_eq!(restored.todos.len(), source.todos.len());
        for (a, b) in restored.todos.iter().zip(&source.todos) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.text, b.text);
            assert_eq!(a.category, b.category);
            assert_eq!(a.priority, b.priority);
            assert_eq!(a.completed, b.completed);
            assert_eq!(a.completed_date, b.completed_date);
        }
        assert_eq!(restored.achievements, source.achievements);
    }

    #[test]
    fn malformed_json_leaves_state_untouched() {
        let mut data = sample_data();
        let before = data.todos.len();
        assert!(!apply_import(&mut data, b"{not json"));
        assert_eq!(data.todos.len(), before);
    }

    #[test]
    fn missing_todos_key_is_ignored() {
        let mut data = sample_data();
        let before = data.todos.len();
        assert!(!apply_import(&mut data, br#"{"achievements": ["legend"]}"#));
        assert_eq!(data.todos.len(), before);
        assert_eq!(data.achievements, vec!["first_goal".to_string()]);
    }

    #[test]
    fn import_without_achievements_keeps_existing_ones() {
        let mut data = sample_data();
        assert!(apply_import(&mut data, br#"{"todos": []}"#));
        assert!(data.todos.is_empty());
        assert_eq!(data.achievements, vec!["first_goal".to_string()]);
    }

    #[test]
    fn file_name_carries_the_export_date() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 23, 59, 0).unwrap();
        assert_eq!(export_file_name(now), "list-hidupku-backup-2026-03-02.json");
    }

    #[test]
    fn completed_date_serializes_with_the_given_day() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let mut goals = Vec::new();
        let id = add_goal(&mut goals, "Climb Everest", Category::Adventure, Priority::High, Some(35), now)
            .unwrap()
            .id;
        toggle_goal(&mut goals, &id, Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()), None, now);

        let json = serde_json::to_value(&goals[0]).unwrap();
        let serialized = json["completedDate"].as_str().unwrap();
        assert!(serialized.starts_with("2024-06-01"));

        toggle_goal(&mut goals, &id, None, None, now);
        let json = serde_json::to_value(&goals[0]).unwrap();
        assert!(json.get("completedDate").is_none());
        assert!(json.get("proofPhoto").is_none());
    }
}
