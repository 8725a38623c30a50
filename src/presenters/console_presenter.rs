use std::io::{self, Write};

use crate::model::movie::MovieEntry;

#[derive(Debug)]
pub struct ConsolePresenter {}

impl ConsolePresenter {
    /// Stable ascending sort, so equal ratings keep their extraction order.
    pub fn sorted_by_rating(movies: &[MovieEntry]) -> Vec<&MovieEntry> {
        let mut sorted: Vec<&MovieEntry> = movies.iter().collect();
        sorted.sort_by(|a, b| a.rating().total_cmp(&b.rating()));
        sorted
    }

    pub fn filter_by_min_rating(movies: Vec<&MovieEntry>, min_rating: f64) -> Vec<&MovieEntry> {
        movies
            .into_iter()
            .filter(|movie| movie.rating() >= min_rating)
            .collect()
    }

    pub fn format_entry(movie: &MovieEntry) -> String {
        // Debug keeps the trailing ".0" on whole ratings.
        format!("Movie Name: {}, Rating: {:?}", movie.title(), movie.rating())
    }

    pub fn print_sorted_movies<W: Write>(
        movies: &[MovieEntry],
        min_rating: f64,
        out: &mut W,
    ) -> io::Result<()> {
        let sorted = ConsolePresenter::sorted_by_rating(movies);
        let selected = ConsolePresenter::filter_by_min_rating(sorted, min_rating);
        log::debug!(
            "{} of {} movies have a rating of at least {}",
            selected.len(),
            movies.len(),
            min_rating
        );

        for movie in selected {
            writeln!(out, "{}", ConsolePresenter::format_entry(movie))?;
        }
        out.flush()
    }
}
