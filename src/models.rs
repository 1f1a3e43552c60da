//! Frontend Models
//!
//! Data structures for the mock story catalog and the search criteria.

use serde::{Deserialize, Serialize};

/// Story category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Adventure,
    Fantasy,
    Animals,
    Bedtime,
    FairyTale,
}

impl Category {
    /// All categories, in the order the chips are rendered
    pub const ALL: &'static [Category] = &[
        Category::Adventure,
        Category::Fantasy,
        Category::Animals,
        Category::Bedtime,
        Category::FairyTale,
    ];

    /// Stable tag used for filtering and navigation params
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Adventure => "adventure",
            Category::Fantasy => "fantasy",
            Category::Animals => "animals",
            Category::Bedtime => "bedtime",
            Category::FairyTale => "fairy-tale",
        }
    }

    /// Display label for chips and cards
    pub fn label(&self) -> &'static str {
        match self {
            Category::Adventure => "Adventure",
            Category::Fantasy => "Fantasy",
            Category::Animals => "Animals",
            Category::Bedtime => "Bedtime",
            Category::FairyTale => "Fairy Tale",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.tag() == tag)
    }
}

/// Book/story record seeded by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub duration_minutes: u32,
    pub category: Category,
    pub age_range: String,
    pub description: String,
    pub rating: f32,
    pub is_favorite: bool,
    /// Opaque asset path; stored and forwarded, never decoded
    pub image: String,
}

/// Category side of the search criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

/// What the Stories screen is currently narrowing the catalog by
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub query: String,
}

impl FilterCriteria {
    pub fn all() -> Self {
        Self {
            category: CategoryFilter::All,
            query: String::new(),
        }
    }
}
