use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use select::document::Document;

use crate::config::ScraperConfig;

#[derive(Debug, Clone)]
pub struct ImdbClient {
    client: Client,
    chart_url: String,
}

impl ImdbClient {
    pub fn new(config: &ScraperConfig) -> Result<Self, String> {
        let headers = ImdbClient::build_headers(config)?;
        let client = match Client::builder().default_headers(headers).build() {
            Ok(client) => client,
            Err(e) => return Err(format!("Failed to build HTTP client. Error was {:?}", e)),
        };

        Ok(Self {
            client,
            chart_url: config.url.clone(),
        })
    }

    fn build_headers(config: &ScraperConfig) -> Result<HeaderMap, String> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.headers.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| format!("Invalid header name '{}': {}", name, e))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| format!("Invalid value for header '{}': {}", name, e))?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    pub fn chart_url(&self) -> &str {
        &self.chart_url
    }

    pub async fn fetch_document(&self) -> Result<Document, String> {
        log::info!("Fetching movie chart from {}", self.chart_url);
        let html = self.get_html_from_url(&self.chart_url).await?;
        log::debug!("Received {} bytes of HTML", html.len());
        Ok(Document::from(html.as_str()))
    }

    pub async fn get_html_from_url(&self, url: &str) -> Result<String, String> {
        match self.client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if !status.is_success() {
                    return Err(format!(
                        "Request to url {} failed with status {}",
                        url, status
                    ));
                }
                match resp.text().await {
                    Ok(text) => Ok(text),
                    Err(e) => Err(format!(
                        "Failed to get text from url {}. Error was {}",
                        url, e
                    )),
                }
            }
            Err(e) => Err(format!(
                "Failed to get HTML for url: {}. Received error: {:?}",
                url, e
            )),
        }
    }
}
