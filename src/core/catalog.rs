use std::collections::HashSet;
use std::fmt;

use crate::domain::{Book, User};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::is_valid_email;

/// A catalogued book together with how many users have read it.
#[derive(Debug, Clone)]
struct BookEntry {
    book: Book,
    read_count: u32,
}

/// Sole entry point of the system: owns the users and books, mediates
/// creation and association, and answers the aggregate queries.
///
/// Both stores are insertion-ordered and scanned linearly. Tie-breaking
/// in every aggregate is pinned to first-inserted, so the order has to
/// be observable; with catalogs this small a Vec scan is the whole
/// indexing strategy.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    users: Vec<User>,
    books: Vec<BookEntry>,
    issued_isbns: HashSet<u64>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_isbn(&mut self, isbn: u64) -> Result<()> {
        if !self.issued_isbns.insert(isbn) {
            return Err(CatalogError::DuplicateIsbn { isbn });
        }
        Ok(())
    }

    /// Creates a plain book record, refusing an already-issued isbn.
    pub fn create_book(&mut self, title: impl Into<String>, isbn: u64) -> Result<Book> {
        self.issue_isbn(isbn)?;
        Ok(Book::new(title, isbn))
    }

    pub fn create_novel(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: u64,
    ) -> Result<Book> {
        self.issue_isbn(isbn)?;
        Ok(Book::novel(title, author, isbn))
    }

    pub fn create_non_fiction(
        &mut self,
        title: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
        isbn: u64,
    ) -> Result<Book> {
        self.issue_isbn(isbn)?;
        Ok(Book::non_fiction(title, subject, level, isbn))
    }

    pub fn add_user(&mut self, name: impl Into<String>, email: impl Into<String>) -> Result<()> {
        self.add_user_with_books(name, email, &[])
    }

    /// Registers a user, then associates each initial book at no rating.
    pub fn add_user_with_books(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        initial_books: &[Book],
    ) -> Result<()> {
        let email = email.into();
        if !is_valid_email(&email) {
            return Err(CatalogError::InvalidEmail { email });
        }
        if self.user(&email).is_some() {
            return Err(CatalogError::DuplicateEmail { email });
        }

        self.users.push(User::new(name, email.clone()));
        for book in initial_books {
            self.add_book_to_user(book, &email, None)?;
        }
        Ok(())
    }

    /// Associates a book with an existing user. The user's title entry
    /// stores the rating as given; a supplied rating is additionally
    /// appended to the catalogued book's rating list, where an
    /// out-of-range value is discarded with a warning. The association
    /// and the read-count update happen either way.
    pub fn add_book_to_user(
        &mut self,
        book: &Book,
        email: &str,
        rating: Option<f64>,
    ) -> Result<()> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.email() == email)
            .ok_or_else(|| CatalogError::UnknownUser {
                email: email.to_string(),
            })?;
        user.read_book(book.title(), rating);

        let idx = match self.books.iter().position(|e| e.book == *book) {
            Some(idx) => idx,
            None => {
                self.books.push(BookEntry {
                    book: book.clone(),
                    read_count: 0,
                });
                self.books.len() - 1
            }
        };
        let entry = &mut self.books[idx];

        if let Some(rating) = rating {
            if let Err(err) = entry.book.add_rating(rating) {
                tracing::warn!(
                    "Discarding rating {} for '{}': {}",
                    rating,
                    entry.book.title(),
                    err
                );
            }
        }
        entry.read_count += 1;
        Ok(())
    }

    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email() == email)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn books(&self) -> impl Iterator<Item = (&Book, u32)> {
        self.books.iter().map(|e| (&e.book, e.read_count))
    }

    pub fn read_count(&self, book: &Book) -> u32 {
        self.books
            .iter()
            .find(|e| e.book == *book)
            .map(|e| e.read_count)
            .unwrap_or(0)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// The book with the strictly highest read count; ties go to the
    /// first-inserted. None on an empty catalog.
    pub fn most_read_book(&self) -> Option<&Book> {
        let mut best: Option<&BookEntry> = None;
        let mut best_count = 0;
        for entry in &self.books {
            if entry.read_count > best_count {
                best_count = entry.read_count;
                best = Some(entry);
            }
        }
        best.map(|e| &e.book)
    }

    /// Strict running maximum over book averages, starting from a floor
    /// of 0: a book with no ratings (average 0) never wins, so a catalog
    /// where nothing was rated yields None.
    pub fn highest_rated_book(&self) -> Option<&Book> {
        let mut best: Option<&Book> = None;
        let mut best_avg = 0.0;
        for entry in &self.books {
            let avg = entry.book.average_rating();
            if avg > best_avg {
                best_avg = avg;
                best = Some(&entry.book);
            }
        }
        best
    }

    /// Same strict-maximum-from-0 logic over user averages.
    pub fn most_positive_user(&self) -> Option<&User> {
        let mut best: Option<&User> = None;
        let mut best_avg = 0.0;
        for user in &self.users {
            let avg = user.average_rating();
            if avg > best_avg {
                best_avg = avg;
                best = Some(user);
            }
        }
        best
    }

    /// Up to `n` books by descending read count. Books are collected in
    /// count tiers starting at the current maximum; within a tier,
    /// insertion order governs, and collection stops mid-tier once `n`
    /// books are selected. Empty for n = 0 or an empty catalog.
    pub fn get_n_most_read_books(&self, n: usize) -> Vec<&Book> {
        let mut selected = Vec::new();
        if n == 0 {
            return selected;
        }
        let Some(max_count) = self.books.iter().map(|e| e.read_count).max() else {
            return selected;
        };

        for count in (1..=max_count).rev() {
            for entry in &self.books {
                if entry.read_count == count && selected.len() < n {
                    selected.push(&entry.book);
                }
            }
            if selected.len() >= n {
                break;
            }
        }
        selected
    }

    pub fn print_catalog(&self) {
        for entry in &self.books {
            println!("{}", entry.book);
        }
    }

    pub fn print_users(&self) {
        for user in &self.users {
            println!("{}", user);
        }
    }

    pub fn print_users_names(&self) {
        for user in &self.users {
            println!("{}", user.name());
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Catalog holding {} users and {} books",
            self.users.len(),
            self.books.len()
        )
    }
}
