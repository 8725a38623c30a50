use std::io::Write;

mod clients;
use clients::imdb_client::ImdbClient;

pub mod config;
use config::ScraperConfig;

mod extractors;
use extractors::movie_extractor::MovieExtractor;

pub mod model;

mod presenters;
use presenters::console_presenter::ConsolePresenter;

pub use extractors::movie_extractor::ExtractedMovies;
pub use model::movie::{MovieEntry, SkippedRating};

/// Fetches the chart described by `config`, then writes every movie rated at
/// least `min_rating` to `out`, lowest rating first. Ratings that could not be
/// read are reported on `out` before the results.
pub async fn run<W: Write>(
    config: ScraperConfig,
    min_rating: f64,
    out: &mut W,
) -> Result<(), String> {
    let client = ImdbClient::new(&config)?;
    let document = client.fetch_document().await?;

    let extracted = MovieExtractor::extract_movies(&document, &config.selectors);
    log::info!(
        "Extracted {} movies from {} ({} skipped)",
        extracted.movies.len(),
        client.chart_url(),
        extracted.skipped.len()
    );

    for skipped in extracted.skipped.iter() {
        if let Err(e) = writeln!(out, "{}", skipped) {
            return Err(format!("Error when writing diagnostic: {:?}", e));
        }
    }

    if let Err(e) = ConsolePresenter::print_sorted_movies(&extracted.movies, min_rating, out) {
        return Err(format!("Error when printing movies: {:?}", e));
    }

    Ok(())
}

pub fn extract_movies_from_html(html_body: &str, config: &ScraperConfig) -> ExtractedMovies {
    MovieExtractor::extract_movies_from_html(html_body, &config.selectors)
}

pub fn print_sorted_movies<W: Write>(
    movies: &[MovieEntry],
    min_rating: f64,
    out: &mut W,
) -> std::io::Result<()> {
    ConsolePresenter::print_sorted_movies(movies, min_rating, out)
}

pub fn parse_min_rating(input: &str) -> Result<f64, String> {
    match input.trim().parse::<f64>() {
        Ok(rating) if !rating.is_nan() => Ok(rating),
        _ => Err(format!(
            "Invalid minimum rating '{}', expected a number such as 7.5",
            input.trim()
        )),
    }
}
