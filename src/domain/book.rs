use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::utils::error::{CatalogError, Result};

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 4.0;

/// Closed set of book specializations. Extra descriptive fields live on
/// the variant; identity and ratings live on [`Book`] itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookKind {
    Standard,
    Novel { author: String },
    NonFiction { subject: String, level: String },
}

/// A book record. Two records are equal iff title and isbn match;
/// ratings and kind never participate in equality or hashing, so a
/// record stays a stable mapping key while its rating list grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    title: String,
    isbn: u64,
    ratings: Vec<f64>,
    #[serde(flatten)]
    kind: BookKind,
}

impl Book {
    pub fn new(title: impl Into<String>, isbn: u64) -> Self {
        Self {
            title: title.into(),
            isbn,
            ratings: Vec::new(),
            kind: BookKind::Standard,
        }
    }

    pub fn novel(title: impl Into<String>, author: impl Into<String>, isbn: u64) -> Self {
        Self {
            title: title.into(),
            isbn,
            ratings: Vec::new(),
            kind: BookKind::Novel {
                author: author.into(),
            },
        }
    }

    pub fn non_fiction(
        title: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
        isbn: u64,
    ) -> Self {
        Self {
            title: title.into(),
            isbn,
            ratings: Vec::new(),
            kind: BookKind::NonFiction {
                subject: subject.into(),
                level: level.into(),
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn isbn(&self) -> u64 {
        self.isbn
    }

    pub fn kind(&self) -> &BookKind {
        &self.kind
    }

    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            BookKind::Novel { author } => Some(author),
            _ => None,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        match &self.kind {
            BookKind::NonFiction { subject, .. } => Some(subject),
            _ => None,
        }
    }

    pub fn level(&self) -> Option<&str> {
        match &self.kind {
            BookKind::NonFiction { level, .. } => Some(level),
            _ => None,
        }
    }

    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    /// Replaces the isbn on this record only; the catalog's issued-isbn
    /// set is not re-indexed.
    pub fn set_isbn(&mut self, isbn: u64) {
        self.isbn = isbn;
        tracing::info!("ISBN number has been updated");
    }

    /// Accepts ratings in [0, 4]; anything else is refused with no
    /// mutation. Refusal is recoverable, not fatal.
    pub fn add_rating(&mut self, rating: f64) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CatalogError::InvalidRating);
        }
        self.ratings.push(rating);
        Ok(())
    }

    /// Arithmetic mean of accepted ratings, 0 when none exist.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        self.ratings.iter().sum::<f64>() / self.ratings.len() as f64
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.isbn.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BookKind::Standard => write!(f, "Book titled {}", self.title),
            BookKind::Novel { author } => write!(f, "{} by {}", self.title, author),
            BookKind::NonFiction { subject, level } => {
                write!(f, "{} - a {} manual on {}", self.title, level, subject)
            }
        }
    }
}
