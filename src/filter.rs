use crate::models::{Category, Goal, TimelineEntry};
use crate::stats::CURRENT_AGE;
use chrono::{DateTime, Datelike, Utc};
use std::cmp::Ordering;

/// List-view filter tag: a completion status or one of the six categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
    Category(Category),
}

impl Filter {
    /// Unknown or missing tags fall back to `All`.
    pub fn parse(raw: Option<&str>) -> Filter {
        match raw {
            Some("active") => Filter::Active,
            Some("completed") => Filter::Completed,
            Some(tag) => Category::ALL
                .into_iter()
                .find(|category| category.key() == tag)
                .map(Filter::Category)
                .unwrap_or(Filter::All),
            None => Filter::All,
        }
    }

    fn matches(self, goal: &Goal) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !goal.completed,
            Filter::Completed => goal.completed,
            Filter::Category(category) => goal.category == category,
        }
    }
}

/// Filter and free-text search compose as a logical AND. The search is a
/// case-insensitive substring match on the goal text or the category name.
pub fn apply(goals: &[Goal], filter: Filter, query: Option<&str>) -> Vec<Goal> {
    let query = query.map(str::to_lowercase).filter(|q| !q.is_empty());
    goals
        .iter()
        .filter(|goal| filter.matches(goal))
        .filter(|goal| match &query {
            Some(q) => {
                goal.text.to_lowercase().contains(q) || goal.category.key().contains(q.as_str())
            }
            None => true,
        })
        .cloned()
        .collect()
}

pub fn timeline(goals: &[Goal]) -> Vec<TimelineEntry> {
    timeline_at(Utc::now(), goals)
}

/// Timeline ordering: goals with a target age come first, ascending by
/// target age; the rest follow ascending by creation time. Each entry
/// carries the projected calendar year for its target age.
pub fn timeline_at(now: DateTime<Utc>, goals: &[Goal]) -> Vec<TimelineEntry> {
    let current_year = now.date_naive().year();

    let mut ordered: Vec<Goal> = goals.to_vec();
    ordered.sort_by(|a, b| match (a.target_age, b.target_age) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.created_at.cmp(&b.created_at),
    });

    ordered
        .into_iter()
        .map(|goal| {
            let target_year = goal
                .target_age
                .map(|age| current_year + (age as i32 - CURRENT_AGE as i32));
            TimelineEntry {
                near: target_year.is_some_and(|year| year <= current_year + 2),
                past: target_year.is_some_and(|year| year < current_year),
                target_year,
                goal,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use crate::store::{add_goal, toggle_goal};
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn parse_falls_back_to_all() {
        assert_eq!(Filter::parse(None), Filter::All);
        assert_eq!(Filter::parse(Some("bogus")), Filter::All);
        assert_eq!(Filter::parse(Some("active")), Filter::Active);
        assert_eq!(Filter::parse(Some("travel")), Filter::Category(Category::Travel));
    }

    #[test]
    fn category_filter_ignores_completion_state() {
        let now = at(2026, 3, 1);
        let mut goals = Vec::new();
        add_goal(&mut goals, "Road trip", Category::Travel, Priority::Medium, None, now).unwrap();
        let id = add_goal(&mut goals, "See Iceland", Category::Travel, Priority::Medium, None, now)
            .unwrap()
            .id;
        add_goal(&mut goals, "Get promoted", Category::Career, Priority::High, None, now).unwrap();
        toggle_goal(&mut goals, &id, None, None, now);

        let travel = apply(&goals, Filter::Category(Category::Travel), None);
        assert_eq!(travel.len(), 2);
        assert!(travel.iter().all(|goal| goal.category == Category::Travel));
    }

    #[test]
    fn search_matches_text_or_category_case_insensitively() {
        let now = at(2026, 3, 1);
        let mut goals = Vec::new();
        add_goal(&mut goals, "Climb Everest", Category::Adventure, Priority::High, None, now).unwrap();
        add_goal(&mut goals, "Learn French", Category::Learning, Priority::Low, None, now).unwrap();

        let by_text = apply(&goals, Filter::All, Some("EVEREST"));
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].text, "Climb Everest");

        let by_category = apply(&goals, Filter::All, Some("advent"));
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].category, Category::Adventure);
    }

    #[test]
    fn filter_and_search_compose_as_and() {
        let now = at(2026, 3, 1);
        let mut goals = Vec::new();
        let id = add_goal(&mut goals, "Surf in Bali", Category::Adventure, Priority::Medium, None, now)
            .unwrap()
            .id;
        add_goal(&mut goals, "Surf camp fund", Category::Career, Priority::Low, None, now).unwrap();
        toggle_goal(&mut goals, &id, None, None, now);

        let hits = apply(&goals, Filter::Active, Some("surf"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Surf camp fund");
    }

    #[test]
    fn timeline_orders_targets_first_then_by_creation() {
        let mut goals = Vec::new();
        add_goal(&mut goals, "no target old", Category::Personal, Priority::Low, None, at(2025, 1, 1)).unwrap();
        add_goal(&mut goals, "no target new", Category::Personal, Priority::Low, None, at(2025, 6, 1)).unwrap();
        add_goal(&mut goals, "at 40", Category::Travel, Priority::Medium, Some(40), at(2025, 3, 1)).unwrap();
        add_goal(&mut goals, "at 28", Category::Career, Priority::High, Some(28), at(2025, 4, 1)).unwrap();

        let entries = timeline_at(at(2026, 3, 1), &goals);
        let names: Vec<_> = entries.iter().map(|entry| entry.goal.text.as_str()).collect();
        assert_eq!(names, ["at 28", "at 40", "no target old", "no target new"]);
    }

    #[test]
    fn timeline_projects_target_years() {
        let mut goals = Vec::new();
        add_goal(&mut goals, "soon", Category::Career, Priority::High, Some(27), at(2026, 1, 1)).unwrap();
        add_goal(&mut goals, "late", Category::Travel, Priority::Low, Some(24), at(2026, 1, 1)).unwrap();

        let entries = timeline_at(at(2026, 3, 1), &goals);
        // target 24 projects one year behind the current year
        assert_eq!(entries[0].target_year, Some(2025));
        assert!(entries[0].past && entries[0].near);
        // target 27 lands two years out, inside the near-term window
        assert_eq!(entries[1].target_year, Some(2028));
        assert!(!entries[1].past && entries[1].near);
    }
}
