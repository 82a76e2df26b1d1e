use std::io::Write;
use tempfile::NamedTempFile;
use tome_rater::utils::validation::Validate;
use tome_rater::{CatalogReport, SeedConfig};

const SEED: &str = r#"
[library]
name = "integration shelf"
description = "seed used by the integration tests"

[[books]]
title = "Dune"
isbn = 1
author = "Frank Herbert"

[[books]]
title = "Learning Rust"
isbn = 2
subject = "Rust"
level = "beginner"

[[books]]
title = "Notebook"
isbn = 3

[[users]]
name = "Alan"
email = "alan@test.com"

[[users]]
name = "Ada"
email = "ada@uni.edu"

[[readings]]
email = "alan@test.com"
isbn = 1
rating = 4.0

[[readings]]
email = "ada@uni.edu"
isbn = 1
rating = 3.0

[[readings]]
email = "ada@uni.edu"
isbn = 2
rating = 2.0
"#;

#[test]
fn test_seed_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SEED.as_bytes()).unwrap();

    let seed = SeedConfig::from_file(file.path()).unwrap();
    assert_eq!(seed.library_name(), "integration shelf");
    seed.validate().unwrap();

    let catalog = seed.build_catalog();
    assert_eq!(catalog.user_count(), 2);
    // The unread Notebook never enters the read store.
    assert_eq!(catalog.book_count(), 2);
    assert_eq!(
        catalog.most_read_book().unwrap().to_string(),
        "Dune by Frank Herbert"
    );
    assert_eq!(
        catalog.highest_rated_book().unwrap().to_string(),
        "Dune by Frank Herbert"
    );
    assert_eq!(catalog.most_positive_user().unwrap().name(), "Alan");
}

#[test]
fn test_seed_drives_the_report() {
    let seed = SeedConfig::from_toml_str(SEED).unwrap();
    let catalog = seed.build_catalog();

    let report = CatalogReport::build(&catalog, 2);
    assert_eq!(report.top_books.len(), 2);
    assert_eq!(report.top_books[0].title, "Dune");
    assert_eq!(report.top_books[0].read_count, 2);
    assert_eq!(report.top_books[1].title, "Learning Rust");

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["book_count"], 2);
}

#[test]
fn test_malformed_seed_is_a_parse_error() {
    assert!(SeedConfig::from_toml_str("[[books]]\ntitle = 3\n").is_err());
}

#[test]
fn test_missing_seed_file_is_an_io_error() {
    assert!(SeedConfig::from_file("/nonexistent/seed.toml").is_err());
}
