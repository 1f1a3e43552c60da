//! Catalog Search
//!
//! Stable, single-pass narrowing of the book collection by category tag and
//! case-insensitive substring query. Recomputed from the full collection on
//! every keystroke.

use crate::models::{Book, CategoryFilter, FilterCriteria};

/// Keep books matching the criteria, preserving catalog order.
///
/// Category gate first (exact tag match unless All), then a non-empty query
/// must appear, lowercased, in the title OR author OR description.
pub fn filter_books(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let query = criteria.query.to_lowercase();
    books
        .iter()
        .filter(|book| match criteria.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => book.category == category,
        })
        .filter(|book| {
            if query.is_empty() {
                return true;
            }
            book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query)
                || book.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn make_book(id: u32, title: &str, author: &str, category: Category, desc: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            duration_minutes: 5,
            category,
            age_range: "4-8".to_string(),
            description: desc.to_string(),
            rating: 4.5,
            is_favorite: false,
            image: format!("assets/covers/{}.png", id),
        }
    }

    fn sample() -> Vec<Book> {
        vec![
            make_book(1, "The Lost Compass", "Mira Holt", Category::Adventure, "A map, a storm, a secret island"),
            make_book(2, "Moonlit Dragons", "Sam Reyes", Category::Fantasy, "Dragons who only fly at night"),
            make_book(3, "Badger's Big Day", "Mira Holt", Category::Animals, "A shy badger finds his voice"),
            make_book(4, "Goodnight, Harbor", "Lena Okafor", Category::Bedtime, "The boats go to sleep one by one"),
            make_book(5, "The Glass Slipper, Retold", "Sam Reyes", Category::FairyTale, "An old tale with a new ending"),
        ]
    }

    fn ids(books: &[Book]) -> Vec<u32> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn all_and_empty_query_returns_everything_unchanged() {
        let books = sample();
        let out = filter_books(&books, &FilterCriteria::all());
        assert_eq!(out, books);
    }

    #[test]
    fn category_gate_is_exact() {
        let books = sample();
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::Adventure),
            query: String::new(),
        };
        assert_eq!(ids(&filter_books(&books, &criteria)), vec![1]);
    }

    #[test]
    fn query_matches_title_author_or_description() {
        let books = sample();

        // Title
        let criteria = FilterCriteria { category: CategoryFilter::All, query: "compass".to_string() };
        assert_eq!(ids(&filter_books(&books, &criteria)), vec![1]);

        // Author, hits two books
        let criteria = FilterCriteria { category: CategoryFilter::All, query: "mira".to_string() };
        assert_eq!(ids(&filter_books(&books, &criteria)), vec![1, 3]);

        // Description only
        let criteria = FilterCriteria { category: CategoryFilter::All, query: "boats".to_string() };
        assert_eq!(ids(&filter_books(&books, &criteria)), vec![4]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let books = sample();
        let criteria = FilterCriteria { category: CategoryFilter::All, query: "MOONLIT".to_string() };
        assert_eq!(ids(&filter_books(&books, &criteria)), vec![2]);
    }

    #[test]
    fn category_and_query_compose() {
        let books = sample();
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::Fantasy),
            query: "sam".to_string(),
        };
        assert_eq!(ids(&filter_books(&books, &criteria)), vec![2]);

        // Same query, wrong category
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::Adventure),
            query: "sam".to_string(),
        };
        assert!(filter_books(&books, &criteria).is_empty());
    }

    #[test]
    fn no_match_returns_empty() {
        let books = sample();
        let criteria = FilterCriteria { category: CategoryFilter::All, query: "zeppelin".to_string() };
        assert!(filter_books(&books, &criteria).is_empty());
    }

    #[test]
    fn output_is_a_subset_in_original_order() {
        let books = sample();
        for query in ["a", "the", "o", ""] {
            let criteria = FilterCriteria { category: CategoryFilter::All, query: query.to_string() };
            let out = filter_books(&books, &criteria);
            let out_ids = ids(&out);
            let mut expected = ids(&books);
            expected.retain(|id| out_ids.contains(id));
            assert_eq!(out_ids, expected, "order broken for query {:?}", query);
        }
    }
}
