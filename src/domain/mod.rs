// Domain layer: book and user records. No catalog logic here; the
// records only know about their own fields and invariants.

pub mod book;
pub mod user;

pub use book::{Book, BookKind, MAX_RATING, MIN_RATING};
pub use user::User;
