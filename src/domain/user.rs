use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A registered reader. `books` maps a book title to the rating the
/// user gave it, if any; an unrated read is recorded as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    name: String,
    email: String,
    books: HashMap<String, Option<f64>>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            books: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn change_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        tracing::info!("User's e-mail has been successfully updated");
    }

    /// Records a read book, overwriting any prior rating for the same
    /// title.
    pub fn read_book(&mut self, title: impl Into<String>, rating: Option<f64>) {
        self.books.insert(title.into(), rating);
    }

    pub fn books_read(&self) -> usize {
        self.books.len()
    }

    pub fn rating_for(&self, title: &str) -> Option<Option<f64>> {
        self.books.get(title).copied()
    }

    /// Mean over everything the user has read: unrated reads count in
    /// the denominator but contribute nothing. 0 when nothing was read.
    pub fn average_rating(&self) -> f64 {
        if self.books.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.books.values().filter_map(|r| *r).sum();
        sum / self.books.len() as f64
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }
}

impl Eq for User {}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User {}, e-mail: {}, books read: {}",
            self.name,
            self.email,
            self.books.len()
        )
    }
}
