use select::{document::Document, node::Node, predicate::Name};

use crate::{
    config::{ChartSelectors, ElementSelector},
    model::movie::{MovieEntry, SkippedRating},
};

#[derive(Debug, Default, PartialEq)]
pub struct ExtractedMovies {
    /// Successfully parsed entries, in document order.
    pub movies: Vec<MovieEntry>,
    /// Pairs whose rating could not be read as a number, in document order.
    pub skipped: Vec<SkippedRating>,
}

#[derive(Debug)]
pub struct MovieExtractor {}

impl MovieExtractor {
    pub fn extract_movies_from_html(
        html_body: &str,
        selectors: &ChartSelectors,
    ) -> ExtractedMovies {
        MovieExtractor::extract_movies(&Document::from(html_body), selectors)
    }

    pub fn extract_movies(document: &Document, selectors: &ChartSelectors) -> ExtractedMovies {
        let titles: Vec<String> = MovieExtractor::find_matching(document, &selectors.title)
            .map(|n| n.text().trim().to_string())
            .collect();
        let ratings: Vec<String> = MovieExtractor::find_matching(document, &selectors.rating)
            .map(|n| n.text())
            .collect();

        log::debug!(
            "Found {} title elements and {} rating elements",
            titles.len(),
            ratings.len()
        );
        if titles.len() != ratings.len() {
            // Pairing is positional; trailing unmatched elements are dropped.
            log::warn!(
                "Title count ({}) does not match rating count ({}), only the first {} will be paired",
                titles.len(),
                ratings.len(),
                titles.len().min(ratings.len())
            );
        }

        let mut extracted = ExtractedMovies::default();
        for (title, rating_text) in titles.into_iter().zip(ratings) {
            let token = rating_text
                .split_whitespace()
                .next()
                .unwrap_or("")
                .to_string();

            match MovieExtractor::parse_rating(&token) {
                Some(rating) => {
                    log::debug!("Extracted movie {} with rating {}", title, rating);
                    extracted.movies.push(MovieEntry::new(title, rating));
                }
                None => {
                    let skipped = SkippedRating { title, token };
                    log::debug!("{}", skipped);
                    extracted.skipped.push(skipped);
                }
            }
        }

        extracted
    }

    fn find_matching<'a>(
        document: &'a Document,
        selector: &'a ElementSelector,
    ) -> impl Iterator<Item = Node<'a>> + 'a {
        document
            .find(Name(selector.tag.as_str()))
            .filter(move |n| MovieExtractor::has_all_classes(n, &selector.classes))
    }

    fn has_all_classes(node: &Node, classes: &[String]) -> bool {
        if classes.is_empty() {
            return true;
        }
        match node.attr("class") {
            Some(class_attr) => {
                let tokens: Vec<&str> = class_attr.split_ascii_whitespace().collect();
                classes.iter().all(|c| tokens.contains(&c.as_str()))
            }
            None => false,
        }
    }

    fn parse_rating(token: &str) -> Option<f64> {
        match token.parse::<f64>() {
            Ok(rating) if rating.is_finite() => Some(rating),
            _ => None,
        }
    }
}
