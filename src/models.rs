use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Life-domain tag for a goal. The set is fixed; every lookup table in the
/// app (labels, emoji, filters) matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Travel,
    Adventure,
    Career,
    Learning,
    #[default]
    Personal,
    Achievement,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Travel,
        Category::Adventure,
        Category::Career,
        Category::Learning,
        Category::Personal,
        Category::Achievement,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Travel => "travel",
            Category::Adventure => "adventure",
            Category::Career => "career",
            Category::Learning => "learning",
            Category::Personal => "personal",
            Category::Achievement => "achievement",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Travel => "Travel & Places",
            Category::Adventure => "Adventure & Sports",
            Category::Career => "Career & Business",
            Category::Learning => "Learning & Skills",
            Category::Personal => "Personal & Relationships",
            Category::Achievement => "Achievements & Goals",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Travel => "\u{1F30D}",
            Category::Adventure => "\u{1F3D4}\u{FE0F}",
            Category::Career => "\u{1F4BC}",
            Category::Learning => "\u{1F4DA}",
            Category::Personal => "\u{2764}\u{FE0F}",
            Category::Achievement => "\u{1F3C6}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// A single bucket-list entry. `completed_date` and `proof_photo` are only
/// ever set while `completed` is true; toggling a goal back clears both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_photo: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_age: Option<u32>,
}

/// Entire persisted state: the goal list plus the independently trivial
/// achievements list and theme flag, stored as one JSON object under the
/// keys `todos`, `achievements` and `theme`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppData {
    pub todos: Vec<Goal>,
    pub achievements: Vec<String>,
    pub theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGoalRequest {
    pub text: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub target_age: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleGoalRequest {
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub proof_photo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditGoalRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}

#[derive(Debug, Default, Deserialize)]
pub struct GoalQuery {
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

/// Status and per-category tallies shown on the filter sidebar.
#[derive(Debug, Serialize)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub categories: BTreeMap<Category, usize>,
}

#[derive(Debug, Serialize)]
pub struct GoalListResponse {
    pub goals: Vec<Goal>,
    pub counts: Counts,
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: Category,
    pub label: &'static str,
    pub emoji: &'static str,
    pub total: usize,
    pub completed: usize,
    pub rate: f64,
}

#[derive(Debug, Serialize)]
pub struct PrioritySlice {
    pub priority: Priority,
    pub total: usize,
    pub completed: usize,
}

#[derive(Debug, Serialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub completed: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeTarget {
    pub goal: String,
    pub years_left: i64,
    pub priority: Priority,
    pub category: Category,
    pub near_term: bool,
    pub overdue: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    pub completion_rate: f64,
    pub categories: Vec<CategoryBreakdown>,
    pub priorities: Vec<PrioritySlice>,
    pub monthly: Vec<MonthlyPoint>,
    pub this_week_completed: usize,
    pub completed_today: usize,
    pub distinct_categories: usize,
    pub with_target_age: usize,
    pub high_priority_completed: usize,
    pub age_targets: Vec<AgeTarget>,
    pub recent: Vec<Goal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub goal: Goal,
    pub target_year: Option<i32>,
    pub near: bool,
    pub past: bool,
}

/// Backup document written by export and accepted by import.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub todos: Vec<Goal>,
    pub achievements: Vec<String>,
    pub export_date: DateTime<Utc>,
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDocument {
    #[serde(default)]
    pub todos: Option<Vec<Goal>>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
}
