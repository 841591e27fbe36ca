//! Curated explore categories.
//!
//! Picking a category runs an ordinary search with the category name as the
//! query text.

/// Explore menu entries, in display order.
pub const EXPLORE_CATEGORIES: [&str; 12] = [
    "Fiction",
    "Non-Fiction",
    "Science & Technology",
    "History",
    "Fantasy",
    "Romance",
    "Mystery & Thriller",
    "Children's Books",
    "Art & Design",
    "Poetry & Literature",
    "Philosophy",
    "Comics & Graphic Novels",
];

/// Query used by the welcome screen shortcut.
pub const EXAMPLE_QUERY: &str = "Harry Potter";
