use crate::models::StatsResponse;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Completion,
    Diversity,
    Speed,
    Milestone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Umum",
            Rarity::Rare => "Langka",
            Rarity::Epic => "Epik",
            Rarity::Legendary => "Legendaris",
        }
    }
}

/// Which derived statistic a badge threshold is checked against.
#[derive(Debug, Clone, Copy)]
enum Metric {
    Completed,
    DistinctCategories,
    HighPriorityCompleted,
    ThisWeekCompleted,
    WithTargetAge,
}

impl Metric {
    fn value(self, stats: &StatsResponse) -> usize {
        match self {
            Metric::Completed => stats.completed,
            Metric::DistinctCategories => stats.distinct_categories,
            Metric::HighPriorityCompleted => stats.high_priority_completed,
            Metric::ThisWeekCompleted => stats.this_week_completed,
            Metric::WithTargetAge => stats.with_target_age,
        }
    }
}

struct Rule {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    requirement: usize,
    metric: Metric,
    category: BadgeCategory,
    rarity: Rarity,
}

/// Badge definitions in display order. Unlock state is never persisted; it
/// is recomputed from the current goal list, so a badge can re-lock after
/// an import or a cleared goal.
const RULES: [Rule; 9] = [
    Rule {
        id: "first_goal",
        title: "Langkah Pertama",
        description: "Menyelesaikan impian pertama Anda",
        icon: "\u{2B50}",
        requirement: 1,
        metric: Metric::Completed,
        category: BadgeCategory::Completion,
        rarity: Rarity::Common,
    },
    Rule {
        id: "goal_hunter",
        title: "Pemburu Impian",
        description: "Menyelesaikan 5 impian",
        icon: "\u{1F3AF}",
        requirement: 5,
        metric: Metric::Completed,
        category: BadgeCategory::Completion,
        rarity: Rarity::Common,
    },
    Rule {
        id: "dream_achiever",
        title: "Pewujud Mimpi",
        description: "Menyelesaikan 10 impian",
        icon: "\u{1F3C6}",
        requirement: 10,
        metric: Metric::Completed,
        category: BadgeCategory::Completion,
        rarity: Rarity::Rare,
    },
    Rule {
        id: "legend",
        title: "Legenda Hidup",
        description: "Menyelesaikan 25 impian",
        icon: "\u{1F451}",
        requirement: 25,
        metric: Metric::Completed,
        category: BadgeCategory::Completion,
        rarity: Rarity::Legendary,
    },
    Rule {
        id: "explorer",
        title: "Penjelajah",
        description: "Memiliki impian di 3 kategori berbeda",
        icon: "\u{1F396}\u{FE0F}",
        requirement: 3,
        metric: Metric::DistinctCategories,
        category: BadgeCategory::Diversity,
        rarity: Rarity::Common,
    },
    Rule {
        id: "renaissance",
        title: "Renaissance Soul",
        description: "Memiliki impian di semua 6 kategori",
        icon: "\u{2764}\u{FE0F}",
        requirement: 6,
        metric: Metric::DistinctCategories,
        category: BadgeCategory::Diversity,
        rarity: Rarity::Epic,
    },
    Rule {
        id: "prioritizer",
        title: "Fokus Tinggi",
        description: "Menyelesaikan 3 impian prioritas tinggi",
        icon: "\u{26A1}",
        requirement: 3,
        metric: Metric::HighPriorityCompleted,
        category: BadgeCategory::Milestone,
        rarity: Rarity::Rare,
    },
    Rule {
        id: "speed_demon",
        title: "Pelaju Impian",
        description: "Menyelesaikan 3 impian dalam seminggu",
        icon: "\u{26A1}",
        requirement: 3,
        metric: Metric::ThisWeekCompleted,
        category: BadgeCategory::Speed,
        rarity: Rarity::Epic,
    },
    Rule {
        id: "planner",
        title: "Perencana Ulung",
        description: "Membuat 10 impian dengan target umur",
        icon: "\u{1F4C5}",
        requirement: 10,
        metric: Metric::WithTargetAge,
        category: BadgeCategory::Milestone,
        rarity: Rarity::Rare,
    },
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: usize,
    pub current: usize,
    pub unlocked: bool,
    pub category: BadgeCategory,
    pub rarity: Rarity,
    pub rarity_label: &'static str,
}

pub fn evaluate(stats: &StatsResponse) -> Vec<Badge> {
    RULES
        .iter()
        .map(|rule| {
            let current = rule.metric.value(stats);
            Badge {
                id: rule.id,
                title: rule.title,
                description: rule.description,
                icon: rule.icon,
                requirement: rule.requirement,
                current,
                unlocked: current >= rule.requirement,
                category: rule.category,
                rarity: rule.rarity,
                rarity_label: rule.rarity.label(),
            }
        })
        .collect()
}
