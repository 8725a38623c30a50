use std::collections::BTreeMap;

pub const DEFAULT_CHART_URL: &str = "https://www.imdb.com/chart/moviemeter";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Tag name plus the class tokens an element must carry to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSelector {
    pub tag: String,
    pub classes: Vec<String>,
}

impl ElementSelector {
    /// `class_attr` is split on whitespace, so a multi-token class string works.
    pub fn new(tag: &str, class_attr: &str) -> Self {
        ElementSelector {
            tag: tag.to_string(),
            classes: class_attr
                .split_ascii_whitespace()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSelectors {
    pub title: ElementSelector,
    pub rating: ElementSelector,
}

impl Default for ChartSelectors {
    fn default() -> Self {
        ChartSelectors {
            title: ElementSelector::new("h3", "ipc-title__text"),
            rating: ElementSelector::new(
                "span",
                "ipc-rating-star ipc-rating-star--base ipc-rating-star--imdb sc-9ab53865-1 iXEijC ratingGroup--imdb-rating",
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub selectors: ChartSelectors,
}

impl ScraperConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string());

        ScraperConfig {
            url: DEFAULT_CHART_URL.to_string(),
            headers,
            selectors: ChartSelectors::default(),
        }
    }
}
