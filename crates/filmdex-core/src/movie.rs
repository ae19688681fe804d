//! Movie and rating data model.
//!
//! These types mirror the external catalog format: a movie is a title, a
//! duration with second-level precision, and an ordered list of viewer
//! ratings. Ratings have no identity beyond their position in that list and
//! are owned exclusively by their parent movie.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Maximum rating value on the 0-100 viewer scale.
pub const MAX_RATING: u8 = 100;

/// A single viewer score attached to a movie.
///
/// The value is an integer in `[0, 100]`; the comment is free text, empty by
/// default, and mutable (see [`crate::query::fb_ratings`]).
///
/// # Example
///
/// ```rust
/// use filmdex_core::Rating;
///
/// let rating = Rating::new(87).unwrap().with_comment("rewatched twice");
/// assert_eq!(rating.value(), 87);
/// assert_eq!(rating.comment(), "rewatched twice");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rating {
    #[serde(rename = "rating")]
    value: u8,
    #[serde(default)]
    comment: String,
}

impl Rating {
    /// Creates a rating with an empty comment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RatingOutOfRange`] if `value` exceeds 100. Values
    /// are never clamped.
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_RATING {
            return Err(Error::RatingOutOfRange(value));
        }
        Ok(Self {
            value,
            comment: String::new(),
        })
    }

    /// Attaches a comment (builder pattern).
    #[must_use]
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    /// Returns the rating value on the 0-100 scale.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns the viewer comment (empty if none was given).
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Replaces the viewer comment.
    pub fn set_comment(&mut self, comment: &str) {
        self.comment = comment.to_string();
    }
}

/// A movie record: title, duration, and an ordered list of ratings.
///
/// Rating order is the load order; it is not semantically meaningful beyond
/// stable iteration.
///
/// # Example
///
/// ```rust
/// use filmdex_core::{Movie, Rating};
/// use std::time::Duration;
///
/// let movie = Movie::new("stalker", Duration::from_secs(9720))
///     .with_ratings(vec![Rating::new(91).unwrap()]);
///
/// assert_eq!(movie.title(), "stalker");
/// assert_eq!(movie.rating_count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    title: String,
    #[serde(with = "duration_secs")]
    duration: Duration,
    #[serde(default)]
    ratings: Vec<Rating>,
}

impl Movie {
    /// Creates a movie with no ratings.
    #[must_use]
    pub fn new(title: &str, duration: Duration) -> Self {
        Self {
            title: title.to_string(),
            duration,
            ratings: Vec::new(),
        }
    }

    /// Replaces the rating list (builder pattern).
    #[must_use]
    pub fn with_ratings(mut self, ratings: Vec<Rating>) -> Self {
        self.ratings = ratings;
        self
    }

    /// Appends a rating to the end of the list.
    pub fn push_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    /// Returns the movie title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the movie duration (second-level precision).
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the ratings in load order.
    #[must_use]
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Returns mutable access to the ratings, for comment updates.
    pub fn ratings_mut(&mut self) -> &mut [Rating] {
        &mut self.ratings
    }

    /// Returns the number of ratings.
    #[must_use]
    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }
}

/// Serializes `Duration` as whole seconds, the catalog wire format.
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
