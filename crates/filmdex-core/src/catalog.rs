//! Catalog loading and access.
//!
//! A [`Catalog`] is the full in-memory collection of movies subject to
//! query, loaded once from the external JSON format and treated as a
//! read-only snapshot afterwards. The expected format is a list of records:
//!
//! ```json
//! [
//!     {"title": "stalker", "duration": 9720,
//!      "ratings": [{"rating": 91, "comment": ""}]}
//! ]
//! ```
//!
//! `duration` is whole seconds; `comment` is optional and defaults to empty.
//! Rating values above 100 are rejected at load time, never clamped.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::movie::{Movie, MAX_RATING};

/// The full in-memory collection of movies subject to query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Wraps an already-constructed movie list.
    ///
    /// Movies built through [`crate::Rating::new`] already satisfy the
    /// rating-range invariant, so no revalidation happens here.
    #[must_use]
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Loads a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] on malformed input and
    /// [`Error::RatingOutOfRange`] when a rating value exceeds 100.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.checked()
    }

    /// Loads a catalog from any reader producing the JSON format.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let catalog: Self = serde_json::from_reader(reader)?;
        catalog.checked()
    }

    /// Loads a catalog from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened, plus the
    /// [`Self::from_reader`] error cases.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validates load-time invariants and logs the catalog size.
    fn checked(self) -> Result<Self> {
        for movie in &self.movies {
            for rating in movie.ratings() {
                if rating.value() > MAX_RATING {
                    return Err(Error::RatingOutOfRange(rating.value()));
                }
            }
        }
        debug!(movies = self.movies.len(), "catalog loaded");
        Ok(self)
    }

    /// Returns the movies in catalog order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Returns mutable access to the movies.
    ///
    /// Needed only for [`crate::query::fb_ratings`] call sites; every other
    /// query reads the catalog through [`Self::movies`].
    pub fn movies_mut(&mut self) -> &mut [Movie] {
        &mut self.movies
    }

    /// Returns the movie at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Returns the number of movies in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns `true` if the catalog holds no movies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}
