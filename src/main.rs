use anyhow::Context;
use clap::Parser;
use tome_rater::utils::{logger, validation::Validate};
use tome_rater::{Catalog, CatalogReport, CliConfig, SeedConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tome-rater");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let catalog = match &config.seed {
        Some(path) => {
            let seed = SeedConfig::from_file(path)
                .with_context(|| format!("Failed to load seed file {}", path.display()))?;
            if let Err(e) = seed.validate() {
                tracing::error!("Seed validation failed: {}", e);
                std::process::exit(1);
            }
            tracing::info!("Loaded seed '{}'", seed.library_name());
            seed.build_catalog()
        }
        None => {
            tracing::info!("No seed file given, using the built-in sample");
            sample_catalog()?
        }
    };

    let report = CatalogReport::build(&catalog, config.top_n);
    if config.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", catalog);
        println!();
        catalog.print_catalog();
        println!();
        catalog.print_users();
        println!();
        catalog.print_users_names();
        println!();
        print!("{}", report);
    }

    Ok(())
}

/// Demo data used when no seed file is given.
fn sample_catalog() -> tome_rater::Result<Catalog> {
    let mut catalog = Catalog::new();

    let dune = catalog.create_novel("Dune", "Frank Herbert", 9780441013593)?;
    let emma = catalog.create_novel("Emma", "Jane Austen", 9780141439587)?;
    let rust_book = catalog.create_non_fiction(
        "The Rust Programming Language",
        "Rust",
        "beginner",
        9781718503106,
    )?;
    let almanac = catalog.create_book("Poor Richard's Almanack", 9781557090744)?;

    catalog.add_user("Alan", "alan@test.com")?;
    catalog.add_user("Ada", "ada@uni.edu")?;
    catalog.add_user_with_books("Basia", "basia@ksiazki.pl", &[almanac])?;

    catalog.add_book_to_user(&dune, "alan@test.com", Some(4.0))?;
    catalog.add_book_to_user(&dune, "ada@uni.edu", Some(3.0))?;
    catalog.add_book_to_user(&emma, "ada@uni.edu", Some(2.0))?;
    catalog.add_book_to_user(&rust_book, "alan@test.com", Some(4.0))?;
    catalog.add_book_to_user(&rust_book, "basia@ksiazki.pl", None)?;

    Ok(catalog)
}
