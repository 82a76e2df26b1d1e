use serde::Serialize;
use std::fmt;

use crate::core::catalog::Catalog;
use crate::utils::error::Result;

/// Point-in-time snapshot of the catalog aggregates, suitable for both
/// console output and JSON serialization.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub user_count: usize,
    pub book_count: usize,
    pub most_read_book: Option<String>,
    pub highest_rated_book: Option<String>,
    pub most_positive_user: Option<String>,
    pub top_books: Vec<TopBookEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopBookEntry {
    pub title: String,
    pub read_count: u32,
    pub average_rating: f64,
}

impl CatalogReport {
    pub fn build(catalog: &Catalog, top_n: usize) -> Self {
        let top_books = catalog
            .get_n_most_read_books(top_n)
            .into_iter()
            .map(|book| TopBookEntry {
                title: book.title().to_string(),
                read_count: catalog.read_count(book),
                average_rating: book.average_rating(),
            })
            .collect();

        Self {
            user_count: catalog.user_count(),
            book_count: catalog.book_count(),
            most_read_book: catalog.most_read_book().map(|b| b.to_string()),
            highest_rated_book: catalog.highest_rated_book().map(|b| b.to_string()),
            most_positive_user: catalog.most_positive_user().map(|u| u.to_string()),
            top_books,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Catalog: {} users, {} books",
            self.user_count, self.book_count
        )?;
        let none = "(none)";
        writeln!(
            f,
            "Most read book:     {}",
            self.most_read_book.as_deref().unwrap_or(none)
        )?;
        writeln!(
            f,
            "Highest rated book: {}",
            self.highest_rated_book.as_deref().unwrap_or(none)
        )?;
        writeln!(
            f,
            "Most positive user: {}",
            self.most_positive_user.as_deref().unwrap_or(none)
        )?;
        writeln!(f, "Top {} by read count:", self.top_books.len())?;
        for (i, entry) in self.top_books.iter().enumerate() {
            writeln!(
                f,
                "  {}. {} ({} reads, avg {:.2})",
                i + 1,
                entry.title,
                entry.read_count,
                entry.average_rating
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_user("Alan", "alan@test.com").unwrap();
        catalog.add_user("Ada", "ada@test.org").unwrap();

        let dune = catalog.create_novel("Dune", "Frank Herbert", 1).unwrap();
        let rust = catalog
            .create_non_fiction("Learning Rust", "Rust", "beginner", 2)
            .unwrap();

        catalog.add_book_to_user(&dune, "alan@test.com", Some(4.0)).unwrap();
        catalog.add_book_to_user(&dune, "ada@test.org", Some(3.0)).unwrap();
        catalog.add_book_to_user(&rust, "ada@test.org", Some(2.0)).unwrap();
        catalog
    }

    #[test]
    fn test_report_snapshots_aggregates() {
        let report = CatalogReport::build(&sample_catalog(), 2);

        assert_eq!(report.user_count, 2);
        assert_eq!(report.book_count, 2);
        assert_eq!(report.most_read_book.as_deref(), Some("Dune by Frank Herbert"));
        assert_eq!(
            report.highest_rated_book.as_deref(),
            Some("Dune by Frank Herbert")
        );
        assert_eq!(report.top_books.len(), 2);
        assert_eq!(report.top_books[0].title, "Dune");
        assert_eq!(report.top_books[0].read_count, 2);
    }

    #[test]
    fn test_report_on_empty_catalog() {
        let report = CatalogReport::build(&Catalog::new(), 3);
        assert!(report.most_read_book.is_none());
        assert!(report.highest_rated_book.is_none());
        assert!(report.most_positive_user.is_none());
        assert!(report.top_books.is_empty());
    }

    #[test]
    fn test_report_json_rendering() {
        let report = CatalogReport::build(&sample_catalog(), 1);
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["user_count"], 2);
        assert_eq!(value["top_books"][0]["title"], "Dune");
    }
}
