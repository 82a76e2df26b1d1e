use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::Catalog;
use crate::domain::{Book, MAX_RATING, MIN_RATING};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_rating, Validate,
};

/// TOML seed document for preloading a catalog: a `[library]` header,
/// `[[books]]`, `[[users]]` and `[[readings]]` tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub library: Option<LibraryInfo>,
    #[serde(default)]
    pub books: Vec<BookSpec>,
    #[serde(default)]
    pub users: Vec<UserSpec>,
    #[serde(default)]
    pub readings: Vec<ReadingSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryInfo {
    pub name: String,
    pub description: Option<String>,
}

/// A book to create. The specialization is inferred from the optional
/// fields: `author` makes a novel, `subject` + `level` a manual,
/// neither a plain book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSpec {
    pub title: String,
    pub isbn: u64,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSpec {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingSpec {
    pub email: String,
    pub isbn: u64,
    pub rating: Option<f64>,
}

impl SeedConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn library_name(&self) -> &str {
        self.library
            .as_ref()
            .map(|l| l.name.as_str())
            .unwrap_or("unnamed library")
    }

    /// Replays the seed through the public catalog API. Per-entry
    /// refusals (duplicate isbn, duplicate e-mail, unknown reader) are
    /// logged as warnings and skipped; the rest of the seed still loads.
    pub fn build_catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();
        let mut created: Vec<Book> = Vec::new();

        for spec in &self.books {
            let result = match (&spec.author, &spec.subject, &spec.level) {
                (Some(author), _, _) => catalog.create_novel(&spec.title, author, spec.isbn),
                (None, Some(subject), Some(level)) => {
                    catalog.create_non_fiction(&spec.title, subject, level, spec.isbn)
                }
                _ => catalog.create_book(&spec.title, spec.isbn),
            };
            match result {
                Ok(book) => created.push(book),
                Err(err) => tracing::warn!("skipping book '{}': {}", spec.title, err),
            }
        }

        for user in &self.users {
            if let Err(err) = catalog.add_user(&user.name, &user.email) {
                tracing::warn!("skipping user '{}': {}", user.name, err);
            }
        }

        for reading in &self.readings {
            let Some(book) = created.iter().find(|b| b.isbn() == reading.isbn) else {
                tracing::warn!("skipping reading: no book with isbn {}", reading.isbn);
                continue;
            };
            if let Err(err) = catalog.add_book_to_user(book, &reading.email, reading.rating) {
                tracing::warn!("skipping reading of '{}': {}", book.title(), err);
            }
        }

        catalog
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        for (i, book) in self.books.iter().enumerate() {
            validate_non_empty_string(&format!("books[{}].title", i), &book.title)?;
        }

        for (i, user) in self.users.iter().enumerate() {
            validate_non_empty_string(&format!("users[{}].name", i), &user.name)?;
            validate_email(&format!("users[{}].email", i), &user.email)?;
        }

        for (i, reading) in self.readings.iter().enumerate() {
            if let Some(rating) = reading.rating {
                validate_rating(
                    &format!("readings[{}].rating", i),
                    rating,
                    MIN_RATING,
                    MAX_RATING,
                )?;
            }
            if !self.books.iter().any(|b| b.isbn == reading.isbn) {
                return Err(CatalogError::InvalidConfigValueError {
                    field: format!("readings[{}].isbn", i),
                    value: reading.isbn.to_string(),
                    reason: "No seeded book carries this isbn".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_SEED: &str = r#"
[library]
name = "test shelf"

[[books]]
title = "Dune"
isbn = 1
author = "Frank Herbert"

[[books]]
title = "Learning Rust"
isbn = 2
subject = "Rust"
level = "beginner"

[[users]]
name = "Alan"
email = "alan@test.com"

[[readings]]
email = "alan@test.com"
isbn = 1
rating = 4.0

[[readings]]
email = "alan@test.com"
isbn = 2
"#;

    #[test]
    fn test_parse_basic_seed() {
        let seed = SeedConfig::from_toml_str(BASIC_SEED).unwrap();
        assert_eq!(seed.library_name(), "test shelf");
        assert_eq!(seed.books.len(), 2);
        assert_eq!(seed.books[0].author.as_deref(), Some("Frank Herbert"));
        assert_eq!(seed.users.len(), 1);
        assert_eq!(seed.readings[1].rating, None);
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn test_build_catalog_from_seed() {
        let seed = SeedConfig::from_toml_str(BASIC_SEED).unwrap();
        let catalog = seed.build_catalog();

        assert_eq!(catalog.user_count(), 1);
        assert_eq!(catalog.book_count(), 2);
        assert_eq!(
            catalog.most_read_book().unwrap().to_string(),
            "Dune by Frank Herbert"
        );
        let user = catalog.user("alan@test.com").unwrap();
        assert_eq!(user.books_read(), 2);
        assert_eq!(user.average_rating(), 2.0);
    }

    #[test]
    fn test_validation_rejects_bad_email() {
        let seed = SeedConfig::from_toml_str(
            r#"
[[users]]
name = "B"
email = "bad-email"
"#,
        )
        .unwrap();
        assert!(seed.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_rating() {
        let seed = SeedConfig::from_toml_str(
            r#"
[[books]]
title = "T"
isbn = 1

[[readings]]
email = "a@test.com"
isbn = 1
rating = 9.5
"#,
        )
        .unwrap();
        assert!(seed.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unresolvable_isbn() {
        let seed = SeedConfig::from_toml_str(
            r#"
[[readings]]
email = "a@test.com"
isbn = 7
"#,
        )
        .unwrap();
        assert!(seed.validate().is_err());
    }

    #[test]
    fn test_duplicate_seed_entries_are_skipped() {
        let seed = SeedConfig::from_toml_str(
            r#"
[[books]]
title = "A"
isbn = 1

[[books]]
title = "B"
isbn = 1

[[users]]
name = "Alan"
email = "alan@test.com"

[[users]]
name = "Alan again"
email = "alan@test.com"
"#,
        )
        .unwrap();
        let catalog = seed.build_catalog();
        assert_eq!(catalog.user_count(), 1);
        // The duplicate isbn produced no record; nothing was read, so
        // the books store stays empty.
        assert_eq!(catalog.book_count(), 0);
    }
}
