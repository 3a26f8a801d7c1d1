use crate::models::{
    AgeTarget, CategoryBreakdown, Counts, Goal, MonthlyPoint, Priority, PrioritySlice,
    StatsResponse,
};
use chrono::{DateTime, Datelike, Duration, Months, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Baseline age for target-age projections. The data model has no user
/// profile to derive this from, so it stays fixed.
pub const CURRENT_AGE: u32 = 25;

const MONTH_COUNT: u32 = 6;

pub fn build_stats(goals: &[Goal]) -> StatsResponse {
    build_stats_at(Utc::now(), goals)
}

pub fn build_stats_at(now: DateTime<Utc>, goals: &[Goal]) -> StatsResponse {
    let total = goals.len();
    let completed = goals.iter().filter(|goal| goal.completed).count();
    let active = total - completed;
    let completion_rate = if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let mut by_category: BTreeMap<_, (usize, usize)> = BTreeMap::new();
    for goal in goals {
        let entry = by_category.entry(goal.category).or_default();
        entry.0 += 1;
        if goal.completed {
            entry.1 += 1;
        }
    }
    let categories = by_category
        .iter()
        .map(|(&category, &(total, completed))| CategoryBreakdown {
            category,
            label: category.label(),
            emoji: category.emoji(),
            total,
            completed,
            rate: if total > 0 {
                completed as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();

    let priorities = [Priority::High, Priority::Medium, Priority::Low]
        .into_iter()
        .map(|priority| PrioritySlice {
            priority,
            total: goals.iter().filter(|goal| goal.priority == priority).count(),
            completed: goals
                .iter()
                .filter(|goal| goal.priority == priority && goal.completed)
                .count(),
        })
        .collect();

    // Buckets by creation month, not completion month, matching the
    // behavior the analytics chart has always shown.
    let today = now.date_naive();
    let mut monthly = Vec::with_capacity(MONTH_COUNT as usize);
    for offset in (0..MONTH_COUNT).rev() {
        let month = today - Months::new(offset);
        let count = goals
            .iter()
            .filter(|goal| {
                let created = goal.created_at.date_naive();
                goal.completed && created.year() == month.year() && created.month() == month.month()
            })
            .count();
        monthly.push(MonthlyPoint {
            month: month.format("%b").to_string(),
            completed: count,
        });
    }

    let week_ago = now - Duration::days(7);
    let this_week_completed = goals
        .iter()
        .filter(|goal| goal.completed && goal.created_at >= week_ago)
        .count();
    let completed_today = goals
        .iter()
        .filter(|goal| goal.completed && goal.created_at.date_naive() == today)
        .count();

    let distinct_categories = goals
        .iter()
        .map(|goal| goal.category)
        .collect::<BTreeSet<_>>()
        .len();
    let with_target_age = goals.iter().filter(|goal| goal.target_age.is_some()).count();
    let high_priority_completed = goals
        .iter()
        .filter(|goal| goal.completed && goal.priority == Priority::High)
        .count();

    let mut age_targets: Vec<AgeTarget> = goals
        .iter()
        .filter(|goal| !goal.completed)
        .filter_map(|goal| {
            let target_age = goal.target_age?;
            let years_left = i64::from(target_age) - i64::from(CURRENT_AGE);
            Some(AgeTarget {
                goal: goal.text.clone(),
                years_left,
                priority: goal.priority,
                category: goal.category,
                near_term: years_left <= 2,
                overdue: years_left <= 0,
            })
        })
        .collect();
    age_targets.sort_by_key(|target| target.years_left);

    let mut recent: Vec<Goal> = goals
        .iter()
        .filter(|goal| goal.completed && goal.completed_date.is_some())
        .cloned()
        .collect();
    recent.sort_by(|a, b| b.completed_date.cmp(&a.completed_date));
    recent.truncate(5);

    StatsResponse {
        total,
        completed,
        active,
        completion_rate,
        categories,
        priorities,
        monthly,
        this_week_completed,
        completed_today,
        distinct_categories,
        with_target_age,
        high_priority_completed,
        age_targets,
        recent,
    }
}

/// Sidebar tallies: total/active/completed plus per-category counts.
pub fn counts(goals: &[Goal]) -> Counts {
    let total = goals.len();
    let completed = goals.iter().filter(|goal| goal.completed).count();
    let mut categories = BTreeMap::new();
    for goal in goals {
        *categories.entry(goal.category).or_insert(0) += 1;
    }

    Counts {
        total,
        active: total - completed,
        completed,
        categories,
    }
}
