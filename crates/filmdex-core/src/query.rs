//! Query engine over an in-memory movie catalog.
//!
//! Stateless functions taking an immutable movie slice (plus query
//! parameters) and producing a derived value: a movie, a list of movies, or
//! a number. Each call completes in time linear or linearithmic in the
//! catalog and rating-list sizes, performs no I/O, and never mutates its
//! input — with the single documented exception of [`fb_ratings`].
//!
//! Threshold parameters are validated at the boundary: a non-finite
//! threshold fails fast with [`Error::InvalidThreshold`] instead of being
//! silently clamped.

// SAFETY: Numeric casts here are intentional:
// - u64 rating sums fit f64 exactly (values <= 100, counts bounded by memory)
// - usize list lengths cast to f64 for the mean divisor
#![allow(clippy::cast_precision_loss)]

use crate::error::{Error, Result};
use crate::movie::Movie;

/// Computes the arithmetic mean of a movie's rating values.
///
/// A movie with zero ratings has no defined average; this returns
/// `f64::NAN` in that case (documented choice, check with `is_nan`). NaN
/// averages never satisfy any threshold comparison, so unrated movies drop
/// out of every rating-filtered query.
#[must_use]
pub fn average_rating(movie: &Movie) -> f64 {
    let ratings = movie.ratings();
    if ratings.is_empty() {
        return f64::NAN;
    }
    let sum: u64 = ratings.iter().map(|r| u64::from(r.value())).sum();
    sum as f64 / ratings.len() as f64
}

/// Sort key used by [`top_rated_movies`]: unrated movies sort last.
fn rated_or_lowest(movie: &Movie) -> f64 {
    let avg = average_rating(movie);
    if avg.is_nan() {
        f64::NEG_INFINITY
    } else {
        avg
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidThreshold { name, value })
    }
}

/// Returns the movie with maximum duration among those whose average rating
/// is at least `min_rating`.
///
/// On equal maximum duration the first movie in catalog order wins
/// (deterministic tie-break). `Ok(None)` when no movie qualifies.
///
/// # Errors
///
/// Returns [`Error::InvalidThreshold`] if `min_rating` is not finite.
pub fn longest_movie_with_high_rating(min_rating: f64, movies: &[Movie]) -> Result<Option<&Movie>> {
    ensure_finite("min_rating", min_rating)?;
    let mut longest: Option<&Movie> = None;
    for movie in movies {
        if average_rating(movie) >= min_rating
            && longest.is_none_or(|best| movie.duration() > best.duration())
        {
            longest = Some(movie);
        }
    }
    Ok(longest)
}

/// Returns the movie with minimum duration among those whose average rating
/// is at most `max_rating`.
///
/// Same tie-break as [`longest_movie_with_high_rating`]: first in catalog
/// order on equal minimum duration. `Ok(None)` when no movie qualifies.
///
/// # Errors
///
/// Returns [`Error::InvalidThreshold`] if `max_rating` is not finite.
pub fn shortest_movie_with_low_rating(max_rating: f64, movies: &[Movie]) -> Result<Option<&Movie>> {
    ensure_finite("max_rating", max_rating)?;
    let mut shortest: Option<&Movie> = None;
    for movie in movies {
        if average_rating(movie) <= max_rating
            && shortest.is_none_or(|best| movie.duration() < best.duration())
        {
            shortest = Some(movie);
        }
    }
    Ok(shortest)
}

/// Returns up to `n` movies ordered by average rating descending.
///
/// The sort is stable: movies with equal average rating keep their relative
/// catalog order. Unrated movies (NaN average) sort after every rated
/// movie. When `n` exceeds the catalog size, all movies are returned.
#[must_use]
pub fn top_rated_movies(n: usize, movies: &[Movie]) -> Vec<&Movie> {
    let mut ranked: Vec<&Movie> = movies.iter().collect();
    ranked.sort_by(|a, b| rated_or_lowest(b).total_cmp(&rated_or_lowest(a)));
    ranked.truncate(n);
    ranked
}

/// Returns all movies ordered by duration descending.
///
/// Stable on ties (catalog order preserved for equal durations); the input
/// slice is left untouched.
#[must_use]
pub fn sort_by_time_descending(movies: &[Movie]) -> Vec<&Movie> {
    let mut sorted: Vec<&Movie> = movies.iter().collect();
    sorted.sort_by(|a, b| b.duration().cmp(&a.duration()));
    sorted
}

/// Returns every movie with at most `n` ratings, in catalog order.
#[must_use]
pub fn find_n_ratings(n: usize, movies: &[Movie]) -> Vec<&Movie> {
    movies.iter().filter(|m| m.rating_count() <= n).collect()
}

/// Returns movies whose average rating lies strictly between `min` and
/// `max` (exclusive on both ends), in catalog order.
///
/// `min == max` is a valid call yielding an empty result, since no value is
/// strictly between equal bounds.
///
/// # Errors
///
/// Returns [`Error::InvalidThreshold`] on a non-finite bound and
/// [`Error::InvalidRange`] when `min > max`.
pub fn movies_between_ratings(min: f64, max: f64, movies: &[Movie]) -> Result<Vec<&Movie>> {
    ensure_finite("min", min)?;
    ensure_finite("max", max)?;
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }
    Ok(movies
        .iter()
        .filter(|m| {
            let avg = average_rating(m);
            avg > min && avg < max
        })
        .collect())
}

/// Annotates a movie's ratings with divisibility comments, fizzbuzz style.
///
/// For each rating value: divisible by 15 sets the comment to
/// `"Divisible by 3 and 5"`, by 3 only `"Divisible by 3"`, by 5 only
/// `"Divisible by 5"`; anything else keeps its existing comment. A value of
/// 0 is divisible by both and gets `"Divisible by 3 and 5"`.
///
/// This is the one mutating operation in the engine: it rewrites the
/// comments of ratings reachable from `movie` in place and returns the same
/// movie for chaining. Callers sharing a movie across threads must
/// serialize access around this call; everything else in this module only
/// reads.
pub fn fb_ratings(movie: &mut Movie) -> &mut Movie {
    for rating in movie.ratings_mut() {
        let comment = match (rating.value() % 3, rating.value() % 5) {
            (0, 0) => "Divisible by 3 and 5",
            (0, _) => "Divisible by 3",
            (_, 0) => "Divisible by 5",
            _ => continue,
        };
        rating.set_comment(comment);
    }
    movie
}

/// Returns the first movie whose title equals `title` exactly.
///
/// Case-sensitive, whole-title equality (not substring). `None` when no
/// movie matches.
#[must_use]
pub fn search_by_title<'a>(title: &str, movies: &'a [Movie]) -> Option<&'a Movie> {
    movies.iter().find(|m| m.title() == title)
}

/// Returns every movie whose title contains at least one of the given
/// keywords, in catalog order.
///
/// Case-sensitive substring containment with OR semantics across keywords;
/// a movie matching several keywords still appears once.
pub fn find_by_keywords<'a, S: AsRef<str>>(keywords: &[S], movies: &'a [Movie]) -> Vec<&'a Movie> {
    movies
        .iter()
        .filter(|m| keywords.iter().any(|k| m.title().contains(k.as_ref())))
        .collect()
}
