//! # Filmdex Core
//!
//! In-memory movie catalog with an analytical query engine.
//!
//! The catalog is a static, fully-loaded snapshot: movies carry a title, a
//! duration, and an ordered list of viewer ratings on a 0-100 scale. The
//! [`query`] module answers analytical questions over that snapshot with
//! stateless functions (rating statistics, duration ordering, rating-count
//! filters, title and keyword matching).
//!
//! ## Quick Start
//!
//! ```rust
//! use filmdex_core::{query, Catalog};
//!
//! fn main() -> filmdex_core::Result<()> {
//!     let catalog = Catalog::from_json_str(
//!         r#"[
//!             {"title": "ad astra", "duration": 7380,
//!              "ratings": [{"rating": 64}, {"rating": 72, "comment": "slow burn"}]},
//!             {"title": "stalker", "duration": 9720,
//!              "ratings": [{"rating": 91}]}
//!         ]"#,
//!     )?;
//!
//!     let top = query::top_rated_movies(1, catalog.movies());
//!     assert_eq!(top[0].title(), "stalker");
//!
//!     let long = query::longest_movie_with_high_rating(60.0, catalog.movies())?;
//!     assert_eq!(long.map(|m| m.title()), Some("stalker"));
//!     # Ok(())
//! }
//! ```
//!
//! Every query is a pure function of its inputs except
//! [`query::fb_ratings`], which is an explicit, documented mutation of one
//! movie's rating comments.

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod movie;
pub mod query;
#[cfg(test)]
mod query_tests;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use movie::{Movie, Rating, MAX_RATING};
