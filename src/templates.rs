use crate::models::{Category, Priority};
use serde::Serialize;

/// Pre-made goal ideas grouped by category on the templates panel. Adding
/// one goes through the ordinary add operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub priority: Priority,
    pub target_age: Option<u32>,
    pub description: &'static str,
    pub icon: &'static str,
    pub tags: &'static [&'static str],
}

pub const TEMPLATES: [GoalTemplate; 18] = [
    GoalTemplate {
        id: "1",
        title: "Keliling 7 Benua",
        category: Category::Travel,
        priority: Priority::High,
        target_age: Some(40),
        description: "Mengunjungi setiap benua dan merasakan kebudayaan yang berbeda",
        icon: "\u{1F30D}",
        tags: &["adventure", "culture", "long-term"],
    },
    GoalTemplate {
        id: "2",
        title: "Backpacking ke Asia Tenggara",
        category: Category::Travel,
        priority: Priority::Medium,
        target_age: Some(30),
        description: "Menjelajahi negara-negara ASEAN dengan budget backpacker",
        icon: "\u{1F392}",
        tags: &["budget-friendly", "culture", "adventure"],
    },
    GoalTemplate {
        id: "3",
        title: "Melihat Aurora Borealis",
        category: Category::Travel,
        priority: Priority::Medium,
        target_age: Some(35),
        description: "Menyaksikan keajaiban cahaya aurora di langit malam",
        icon: "\u{1F30C}",
        tags: &["nature", "bucket-list", "seasonal"],
    },
    GoalTemplate {
        id: "4",
        title: "Mendaki Gunung Everest",
        category: Category::Adventure,
        priority: Priority::High,
        target_age: Some(35),
        description: "Mencapai puncak tertinggi dunia dan mengatasi tantangan fisik terbesar",
        icon: "\u{1F3D4}\u{FE0F}",
        tags: &["extreme", "physical", "challenge"],
    },
    GoalTemplate {
        id: "5",
        title: "Lari Marathon",
        category: Category::Adventure,
        priority: Priority::Medium,
        target_age: Some(28),
        description: "Menyelesaikan lari marathon 42km untuk pertama kali",
        icon: "\u{1F3C3}",
        tags: &["fitness", "achievement", "health"],
    },
    GoalTemplate {
        id: "6",
        title: "Belajar Menyelam",
        category: Category::Adventure,
        priority: Priority::Low,
        target_age: Some(30),
        description: "Mendapat sertifikat diving dan mengeksplorasi dunia bawah laut",
        icon: "\u{1F93F}",
        tags: &["skill", "nature", "certification"],
    },
    GoalTemplate {
        id: "7",
        title: "Memulai Bisnis Sendiri",
        category: Category::Career,
        priority: Priority::High,
        target_age: Some(32),
        description: "Membangun startup atau bisnis yang memberikan dampak positif",
        icon: "\u{1F680}",
        tags: &["entrepreneurship", "financial", "impact"],
    },
    GoalTemplate {
        id: "8",
        title: "Menjadi Expert di Bidang IT",
        category: Category::Career,
        priority: Priority::High,
        target_age: Some(30),
        description: "Mencapai level senior/expert dalam teknologi dan programming",
        icon: "\u{1F4BB}",
        tags: &["professional", "skill", "technology"],
    },
    GoalTemplate {
        id: "9",
        title: "Menulis Buku Bestseller",
        category: Category::Career,
        priority: Priority::Medium,
        target_age: Some(40),
        description: "Menerbitkan buku yang menginspirasi banyak orang",
        icon: "\u{1F4D6}",
        tags: &["creative", "impact", "legacy"],
    },
    GoalTemplate {
        id: "10",
        title: "Menguasai 5 Bahasa",
        category: Category::Learning,
        priority: Priority::Medium,
        target_age: Some(35),
        description: "Berbicara lancar dalam 5 bahasa yang berbeda",
        icon: "\u{1F5E3}\u{FE0F}",
        tags: &["language", "communication", "culture"],
    },
    GoalTemplate {
        id: "11",
        title: "Belajar Memainkan Piano",
        category: Category::Learning,
        priority: Priority::Low,
        target_age: Some(28),
        description: "Mahir memainkan piano klasik dan lagu-lagu favorit",
        icon: "\u{1F3B9}",
        tags: &["music", "hobby", "creative"],
    },
    GoalTemplate {
        id: "12",
        title: "Belajar Memasak Masakan Dunia",
        category: Category::Learning,
        priority: Priority::Low,
        target_age: Some(30),
        description: "Menguasai teknik memasak dari berbagai negara",
        icon: "\u{1F468}\u{200D}\u{1F373}",
        tags: &["culinary", "skill", "culture"],
    },
    GoalTemplate {
        id: "13",
        title: "Menikah dengan Pasangan Hidup",
        category: Category::Personal,
        priority: Priority::High,
        target_age: Some(30),
        description: "Membangun keluarga bahagia dengan orang yang tepat",
        icon: "\u{1F48D}",
        tags: &["relationship", "milestone", "family"],
    },
    GoalTemplate {
        id: "14",
        title: "Memiliki Rumah Sendiri",
        category: Category::Personal,
        priority: Priority::High,
        target_age: Some(35),
        description: "Membeli rumah impian untuk keluarga",
        icon: "\u{1F3E0}",
        tags: &["financial", "milestone", "stability"],
    },
    GoalTemplate {
        id: "15",
        title: "Volunteer untuk Amal",
        category: Category::Personal,
        priority: Priority::Medium,
        target_age: Some(25),
        description: "Memberikan kontribusi nyata untuk masyarakat yang membutuhkan",
        icon: "\u{1F91D}",
        tags: &["charity", "impact", "giving-back"],
    },
    GoalTemplate {
        id: "16",
        title: "Mencapai Financial Freedom",
        category: Category::Achievement,
        priority: Priority::High,
        target_age: Some(40),
        description: "Memiliki passive income yang cukup untuk hidup nyaman",
        icon: "\u{1F4B0}",
        tags: &["financial", "investment", "retirement"],
    },
    GoalTemplate {
        id: "17",
        title: "Menurunkan Berat Badan Ideal",
        category: Category::Achievement,
        priority: Priority::Medium,
        target_age: Some(27),
        description: "Mencapai berat badan dan bentuk tubuh yang sehat",
        icon: "\u{2696}\u{FE0F}",
        tags: &["health", "fitness", "lifestyle"],
    },
    GoalTemplate {
        id: "18",
        title: "Membuat Film Dokumenter",
        category: Category::Achievement,
        priority: Priority::Low,
        target_age: Some(35),
        description: "Memproduksi dokumenter tentang topik yang bermakna",
        icon: "\u{1F3AC}",
        tags: &["creative", "impact", "storytelling"],
    },
];
