use std::fmt;

#[derive(Debug, Clone, PartialOrd, PartialEq)]
pub struct MovieEntry {
    title: String,
    rating: f64,
}

impl MovieEntry {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        MovieEntry {
            title: title.into(),
            rating,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }
}

/// A title/rating pair that was dropped because its rating token is not a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRating {
    pub title: String,
    pub token: String,
}

impl fmt::Display for SkippedRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not convert rating '{}' for movie '{}' to a float.",
            self.token, self.title
        )
    }
}
