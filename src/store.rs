use crate::models::{Category, Goal, Priority};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Prepends a new goal (newest first). Text that trims to empty is a silent
/// no-op and returns `None`.
pub fn add_goal(
    goals: &mut Vec<Goal>,
    text: &str,
    category: Category,
    priority: Priority,
    target_age: Option<u32>,
    now: DateTime<Utc>,
) -> Option<Goal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let goal = Goal {
        id: Uuid::new_v4().to_string(),
        text: text.to_string(),
        completed: false,
        created_at: now,
        completed_date: None,
        proof_photo: None,
        category,
        priority,
        target_age,
    };
    goals.insert(0, goal.clone());
    Some(goal)
}

/// Flips the completion state of the matching goal. Completing sets the
/// completion date (falling back to `now`) and attaches the optional proof
/// photo; un-completing clears both. Unknown id is a no-op.
pub fn toggle_goal(
    goals: &mut [Goal],
    id: &str,
    completed_date: Option<DateTime<Utc>>,
    proof_photo: Option<String>,
    now: DateTime<Utc>,
) -> bool {
    let Some(goal) = goals.iter_mut().find(|goal| goal.id == id) else {
        return false;
    };

    if goal.completed {
        goal.completed = false;
        goal.completed_date = None;
        goal.proof_photo = None;
    } else {
        goal.completed = true;
        goal.completed_date = Some(completed_date.unwrap_or(now));
        goal.proof_photo = proof_photo;
    }
    true
}

pub fn edit_goal(goals: &mut [Goal], id: &str, text: &str) -> bool {
    let Some(goal) = goals.iter_mut().find(|goal| goal.id == id) else {
        return false;
    };
    goal.text = text.to_string();
    true
}

pub fn delete_goal(goals: &mut Vec<Goal>, id: &str) -> bool {
    let before = goals.len();
    goals.retain(|goal| goal.id != id);
    goals.len() != before
}

/// Removes every completed goal and returns how many were dropped.
pub fn clear_completed(goals: &mut Vec<Goal>) -> usize {
    let before = goals.len();
    goals.retain(|goal| !goal.completed);
    before - goals.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut goals = Vec::new();
        let now = at(2026, 3, 1);
        add_goal(&mut goals, "See the northern lights", Category::Travel, Priority::Medium, None, now).unwrap();
        add_goal(&mut goals, "Run a marathon", Category::Adventure, Priority::High, Some(28), now).unwrap();

        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].text, "Run a marathon");
        assert_eq!(goals[1].text, "See the northern lights");
        assert!(!goals[0].completed);
        assert_ne!(goals[0].id, goals[1].id);
    }

    #[test]
    fn add_rejects_blank_text_silently() {
        let mut goals = Vec::new();
        assert!(add_goal(&mut goals, "   ", Category::Personal, Priority::Low, None, at(2026, 3, 1)).is_none());
        assert!(goals.is_empty());
    }

    #[test]
    fn add_trims_text() {
        let mut goals = Vec::new();
        add_goal(&mut goals, "  Learn piano  ", Category::Learning, Priority::Low, None, at(2026, 3, 1)).unwrap();
        assert_eq!(goals[0].text, "Learn piano");
    }

    #[test]
    fn toggle_round_trip_clears_completion_fields() {
        let mut goals = Vec::new();
        let now = at(2026, 3, 1);
        let id = add_goal(&mut goals, "Climb Everest", Category::Adventure, Priority::High, Some(35), now)
            .unwrap()
            .id;

        let done = at(2024, 6, 1);
        assert!(toggle_goal(&mut goals, &id, Some(done), Some("data:image/png;base64,xyz".into()), now));
        assert!(goals[0].completed);
        assert_eq!(goals[0].completed_date, Some(done));
        assert!(goals[0].proof_photo.is_some());

        assert!(toggle_goal(&mut goals, &id, None, None, now));
        assert!(!goals[0].completed);
        assert_eq!(goals[0].completed_date, None);
        assert_eq!(goals[0].proof_photo, None);
        assert_eq!(goals[0].text, "Climb Everest");
    }

    #[test]
    fn toggle_defaults_completion_date_to_now() {
        let mut goals = Vec::new();
        let now = at(2026, 3, 1);
        let id = add_goal(&mut goals, "Write a book", Category::Career, Priority::Medium, None, now)
            .unwrap()
            .id;

        toggle_goal(&mut goals, &id, None, None, now);
        assert_eq!(goals[0].completed_date, Some(now));
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut goals = Vec::new();
        let now = at(2026, 3, 1);
        add_goal(&mut goals, "Learn to dive", Category::Adventure, Priority::Low, None, now).unwrap();
        assert!(!toggle_goal(&mut goals, "missing", None, None, now));
        assert!(!goals[0].completed);
    }

    #[test]
    fn edit_replaces_text_only() {
        let mut goals = Vec::new();
        let now = at(2026, 3, 1);
        let id = add_goal(&mut goals, "Visit Japan", Category::Travel, Priority::Medium, Some(30), now)
            .unwrap()
            .id;

        assert!(edit_goal(&mut goals, &id, "Visit Japan in spring"));
        assert_eq!(goals[0].text, "Visit Japan in spring");
        assert_eq!(goals[0].target_age, Some(30));
        assert!(!edit_goal(&mut goals, "missing", "x"));
    }

    #[test]
    fn delete_and_clear_completed() {
        let mut goals = Vec::new();
        let now = at(2026, 3, 1);
        let a = add_goal(&mut goals, "A", Category::Personal, Priority::Low, None, now).unwrap().id;
        let b = add_goal(&mut goals, "B", Category::Personal, Priority::Low, None, now).unwrap().id;
        add_goal(&mut goals, "C", Category::Personal, Priority::Low, None, now).unwrap();

        toggle_goal(&mut goals, &b, None, None, now);
        assert!(delete_goal(&mut goals, &a));
        assert!(!delete_goal(&mut goals, &a));
        assert_eq!(goals.len(), 2);

        assert_eq!(clear_completed(&mut goals), 1);
        assert_eq!(goals.len(), 1);
        assert!(goals.iter().all(|goal| !goal.completed));
    }
}
