//! Filmdex CLI - analytical queries over a movie catalog file.
//!
//! Loads a JSON catalog (a list of `{title, duration, ratings}` records)
//! and exposes every query-engine operation as a subcommand.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::time::Instant;

use filmdex_core::movie::Movie;
use filmdex_core::{query, Catalog};

/// Filmdex - analytical queries over a movie catalog
#[derive(Parser, Debug)]
#[command(name = "filmdex")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the catalog JSON file
    #[arg(short, long, default_value = "movies.json", env = "FILMDEX_CATALOG")]
    catalog: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Print query timing
    #[arg(long)]
    timing: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Average rating of a movie, looked up by exact title
    Average {
        /// Exact movie title (case-sensitive)
        title: String,
    },
    /// Longest movie whose average rating is at least MIN
    Longest {
        /// Minimum average rating (0-100)
        min: f64,
    },
    /// Shortest movie whose average rating is at most MAX
    Shortest {
        /// Maximum average rating (0-100)
        max: f64,
    },
    /// Top N movies by average rating
    Top {
        /// Number of movies to return
        n: usize,
    },
    /// All movies ordered by duration, longest first
    SortByTime,
    /// Movies with at most N ratings
    FewRatings {
        /// Maximum rating count
        n: usize,
    },
    /// Movies with average rating strictly between MIN and MAX
    Between {
        /// Exclusive lower bound
        min: f64,
        /// Exclusive upper bound
        max: f64,
    },
    /// Annotate a movie's ratings with divisibility comments
    Fizzbuzz {
        /// Exact movie title (case-sensitive)
        title: String,
    },
    /// Find a movie by exact title
    Search {
        /// Exact movie title (case-sensitive)
        title: String,
    },
    /// Movies whose title contains any of the given keywords
    Keywords {
        /// Case-sensitive keyword substrings (OR semantics)
        keywords: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut catalog = Catalog::from_json_file(&args.catalog)
        .with_context(|| format!("failed to load catalog from '{}'", args.catalog))?;

    let start = Instant::now();
    run_command(&args.command, &mut catalog, args.format)?;

    if args.timing {
        println!("{} {:?}", "Elapsed:".bold(), start.elapsed());
    }
    Ok(())
}

fn run_command(command: &Command, catalog: &mut Catalog, format: OutputFormat) -> Result<()> {
    match command {
        Command::Average { title } => {
            let movie = query::search_by_title(title, catalog.movies())
                .with_context(|| format!("no movie titled '{title}'"))?;
            let avg = query::average_rating(movie);
            if avg.is_nan() {
                println!("'{}' has no ratings", movie.title().green());
            } else {
                println!("{} {avg:.2}", "Average rating:".bold());
            }
        }
        Command::Longest { min } => {
            let result = query::longest_movie_with_high_rating(*min, catalog.movies())?;
            print_optional_movie(result, format);
        }
        Command::Shortest { max } => {
            let result = query::shortest_movie_with_low_rating(*max, catalog.movies())?;
            print_optional_movie(result, format);
        }
        Command::Top { n } => {
            print_movies(&query::top_rated_movies(*n, catalog.movies()), format)?;
        }
        Command::SortByTime => {
            print_movies(&query::sort_by_time_descending(catalog.movies()), format)?;
        }
        Command::FewRatings { n } => {
            print_movies(&query::find_n_ratings(*n, catalog.movies()), format)?;
        }
        Command::Between { min, max } => {
            print_movies(
                &query::movies_between_ratings(*min, *max, catalog.movies())?,
                format,
            )?;
        }
        Command::Fizzbuzz { title } => {
            let index = catalog
                .movies()
                .iter()
                .position(|m| m.title() == title)
                .with_context(|| format!("no movie titled '{title}'"))?;
            let movie = query::fb_ratings(&mut catalog.movies_mut()[index]);
            print_ratings(movie, format)?;
        }
        Command::Search { title } => {
            print_optional_movie(query::search_by_title(title, catalog.movies()), format);
        }
        Command::Keywords { keywords } => {
            print_movies(&query::find_by_keywords(keywords, catalog.movies()), format)?;
        }
    }
    Ok(())
}

fn print_optional_movie(movie: Option<&Movie>, format: OutputFormat) {
    match movie {
        Some(movie) => print_movie(movie, format),
        None => println!("No movie qualifies."),
    }
}

fn print_movie(movie: &Movie, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let avg = query::average_rating(movie);
            println!("{} {}", "Title:   ".bold(), movie.title().green());
            println!("{} {}", "Duration:".bold(), format_duration_secs(movie.duration().as_secs()));
            println!("{} {}", "Ratings: ".bold(), movie.rating_count());
            println!("{} {}", "Average: ".bold(), format_average(avg));
        }
        OutputFormat::Json => match serde_json::to_string_pretty(movie) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("serialization failed: {err}"),
        },
    }
}

fn print_movies(movies: &[&Movie], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if movies.is_empty() {
                println!("No movies found.");
                return Ok(());
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Title", "Duration", "Ratings", "Average"]);
            for movie in movies {
                table.add_row(vec![
                    movie.title().to_string(),
                    format_duration_secs(movie.duration().as_secs()),
                    movie.rating_count().to_string(),
                    format_average(query::average_rating(movie)),
                ]);
            }
            println!("{table}");
            println!("{} movie(s)", movies.len());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(movies).context("serialization failed")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn print_ratings(movie: &Movie, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{} {}", "Title:".bold(), movie.title().green());
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Rating", "Comment"]);
            for rating in movie.ratings() {
                table.add_row(vec![rating.value().to_string(), rating.comment().to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(movie.ratings())
                .context("serialization failed")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn format_average(avg: f64) -> String {
    if avg.is_nan() {
        "-".to_string()
    } else {
        format!("{avg:.2}")
    }
}

/// Formats whole seconds as `H:MM:SS`.
fn format_duration_secs(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
