//! Tests for the query engine.

use super::error::Error;
use super::movie::{Movie, Rating};
use super::query::{
    average_rating, fb_ratings, find_by_keywords, find_n_ratings, longest_movie_with_high_rating,
    movies_between_ratings, search_by_title, shortest_movie_with_low_rating,
    sort_by_time_descending, top_rated_movies,
};
use std::time::Duration;

fn movie(title: &str, secs: u64, values: &[u8]) -> Movie {
    Movie::new(title, Duration::from_secs(secs)).with_ratings(
        values
            .iter()
            .map(|&v| Rating::new(v).unwrap())
            .collect(),
    )
}

/// Six movies covering ties, an unrated entry, and overlapping titles.
fn sample_catalog() -> Vec<Movie> {
    vec![
        movie("ad astra", 5400, &[60, 70, 80]),     // avg 70
        movie("blade runner", 9000, &[90, 90]),     // avg 90
        movie("casablanca", 6000, &[30]),           // avg 30
        movie("drive", 9000, &[75, 85]),            // avg 80, duration tie with blade runner
        movie("dune part two", 12000, &[]),         // no ratings, NaN average
        movie("drive my car", 10740, &[40, 50]),    // avg 45
    ]
}

#[test]
fn test_average_rating_mean() {
    assert_eq!(average_rating(&movie("x", 60, &[60, 70, 80])), 70.0);
    assert_eq!(average_rating(&movie("x", 60, &[55, 56])), 55.5);
}

#[test]
fn test_average_rating_identical_values_exact() {
    assert_eq!(average_rating(&movie("x", 60, &[70, 70, 70])), 70.0);
}

#[test]
fn test_average_rating_empty_is_nan() {
    assert!(average_rating(&movie("x", 60, &[])).is_nan());
}

#[test]
fn test_longest_movie_with_high_rating() {
    let movies = sample_catalog();

    // avg >= 70: ad astra, blade runner, drive; blade runner and drive tie
    // at 9000s, first in catalog order wins
    let result = longest_movie_with_high_rating(70.0, &movies).unwrap();
    assert_eq!(result.map(Movie::title), Some("blade runner"));

    // No movie averages 100
    assert!(longest_movie_with_high_rating(100.0, &movies)
        .unwrap()
        .is_none());
}

#[test]
fn test_longest_excludes_unrated() {
    let movies = sample_catalog();

    // dune part two is the longest movie but has no ratings; its NaN
    // average qualifies for no threshold, even 0.0
    let result = longest_movie_with_high_rating(0.0, &movies).unwrap();
    assert_eq!(result.map(Movie::title), Some("drive my car"));
}

#[test]
fn test_longest_rejects_nan_threshold() {
    let movies = sample_catalog();
    let result = longest_movie_with_high_rating(f64::NAN, &movies);
    assert!(matches!(result, Err(Error::InvalidThreshold { .. })));
}

#[test]
fn test_longest_on_empty_catalog() {
    assert!(longest_movie_with_high_rating(50.0, &[]).unwrap().is_none());
}

#[test]
fn test_shortest_movie_with_low_rating() {
    let movies = sample_catalog();

    // avg <= 45: casablanca (6000s), drive my car (10740s)
    let result = shortest_movie_with_low_rating(45.0, &movies).unwrap();
    assert_eq!(result.map(Movie::title), Some("casablanca"));

    // Nothing averages 0 or below
    assert!(shortest_movie_with_low_rating(0.0, &movies)
        .unwrap()
        .is_none());
}

#[test]
fn test_shortest_rejects_infinite_threshold() {
    let movies = sample_catalog();
    let result = shortest_movie_with_low_rating(f64::INFINITY, &movies);
    assert!(matches!(result, Err(Error::InvalidThreshold { .. })));
}

#[test]
fn test_top_rated_movies() {
    let movies = sample_catalog();

    let top = top_rated_movies(3, &movies);
    let titles: Vec<&str> = top.iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["blade runner", "drive", "ad astra"]);
}

#[test]
fn test_top_rated_movies_n_exceeds_catalog() {
    let movies = sample_catalog();

    let top = top_rated_movies(100, &movies);
    assert_eq!(top.len(), movies.len());
    // Unrated movie sorts last
    assert_eq!(top.last().map(|m| m.title()), Some("dune part two"));
}

#[test]
fn test_top_rated_movies_stable_on_ties() {
    let movies = vec![
        movie("first", 60, &[50]),
        movie("second", 120, &[50]),
        movie("third", 180, &[50]),
    ];
    let top = top_rated_movies(3, &movies);
    let titles: Vec<&str> = top.iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn test_sort_by_time_descending() {
    let movies = sample_catalog();

    let sorted = sort_by_time_descending(&movies);
    let titles: Vec<&str> = sorted.iter().map(|m| m.title()).collect();
    assert_eq!(
        titles,
        vec![
            "dune part two",
            "drive my car",
            "blade runner", // 9000s tie resolved by catalog order
            "drive",
            "casablanca",
            "ad astra",
        ]
    );

    // Input order untouched
    assert_eq!(movies[0].title(), "ad astra");
    assert_eq!(sorted.len(), movies.len());
}

#[test]
fn test_find_n_ratings() {
    let movies = sample_catalog();

    let few = find_n_ratings(1, &movies);
    let titles: Vec<&str> = few.iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["casablanca", "dune part two"]);

    let unrated = find_n_ratings(0, &movies);
    assert_eq!(unrated.len(), 1);
    assert_eq!(unrated[0].title(), "dune part two");
}

#[test]
fn test_movies_between_ratings() {
    let movies = sample_catalog();

    // Strictly between 30 and 80: ad astra (70), drive my car (45);
    // casablanca (30) and drive (80) sit on the bounds and are excluded
    let between = movies_between_ratings(30.0, 80.0, &movies).unwrap();
    let titles: Vec<&str> = between.iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["ad astra", "drive my car"]);
}

#[test]
fn test_movies_between_equal_bounds_empty() {
    let movies = sample_catalog();
    assert!(movies_between_ratings(70.0, 70.0, &movies)
        .unwrap()
        .is_empty());
}

#[test]
fn test_movies_between_inverted_range_rejected() {
    let movies = sample_catalog();
    let result = movies_between_ratings(80.0, 40.0, &movies);
    assert!(matches!(result, Err(Error::InvalidRange { .. })));
}

#[test]
fn test_movies_between_nan_bound_rejected() {
    let movies = sample_catalog();
    let result = movies_between_ratings(f64::NAN, 80.0, &movies);
    assert!(matches!(result, Err(Error::InvalidThreshold { .. })));
}

#[test]
fn test_fb_ratings() {
    let mut m = movie("x", 60, &[0, 3, 5, 15, 30, 98]);
    m.ratings_mut()[5].set_comment("keeper");

    fb_ratings(&mut m);

    let comments: Vec<&str> = m.ratings().iter().map(Rating::comment).collect();
    assert_eq!(
        comments,
        vec![
            "Divisible by 3 and 5", // 0 divides by everything
            "Divisible by 3",
            "Divisible by 5",
            "Divisible by 3 and 5",
            "Divisible by 3 and 5",
            "keeper", // 98 divides by neither, comment untouched
        ]
    );
}

#[test]
fn test_fb_ratings_returns_same_movie_for_chaining() {
    let mut m = movie("x", 60, &[45]);
    let returned = fb_ratings(&mut m);
    assert_eq!(returned.title(), "x");
    assert_eq!(returned.ratings()[0].comment(), "Divisible by 3 and 5");
}

#[test]
fn test_search_by_title_exact() {
    let movies = sample_catalog();

    // "drive" matches exactly, not "drive my car"
    let result = search_by_title("drive", &movies).unwrap();
    assert_eq!(result.title(), "drive");
    assert_eq!(result.duration(), Duration::from_secs(9000));

    assert!(search_by_title("Drive", &movies).is_none()); // case-sensitive
    assert!(search_by_title("driv", &movies).is_none()); // no substring match
    assert!(search_by_title("memento", &movies).is_none());
}

#[test]
fn test_search_by_title_idempotent() {
    let movies = sample_catalog();
    let a = search_by_title("casablanca", &movies).map(Movie::title);
    let b = search_by_title("casablanca", &movies).map(Movie::title);
    assert_eq!(a, b);
}

#[test]
fn test_find_by_keywords() {
    let movies = sample_catalog();

    // "drive" hits both drive titles; "blanca" hits casablanca; each movie
    // appears once even if several keywords match
    let found = find_by_keywords(&["drive", "blanca", "zzz"], &movies);
    let titles: Vec<&str> = found.iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["casablanca", "drive", "drive my car"]);
}

#[test]
fn test_find_by_keywords_case_sensitive() {
    let movies = sample_catalog();
    assert!(find_by_keywords(&["Drive"], &movies).is_empty());
}

#[test]
fn test_find_by_keywords_empty_list() {
    let movies = sample_catalog();
    assert!(find_by_keywords::<&str>(&[], &movies).is_empty());
}
