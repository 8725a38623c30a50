#[cfg(test)]
mod tests {

    use std::{fs::File, io::Read};

    use imdb_top_rated::config::{ScraperConfig, DEFAULT_USER_AGENT};
    use mockito::Server;

    const CHART_PATH: &str = "/chart/moviemeter";

    #[tokio::test]
    async fn prints_fixture_chart_above_threshold() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", CHART_PATH)
            .match_header("user-agent", DEFAULT_USER_AGENT)
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(get_file_content("./tests/resources/moviemeter.html"))
            .create_async()
            .await;

        let config = ScraperConfig::default().with_url(format!("{}{}", server.url(), CHART_PATH));
        let mut out = Vec::new();
        imdb_top_rated::run(config, 7.0, &mut out).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Could not convert rating 'N/A' for movie 'Untitled Sequel' to a float.\n\
             Movie Name: Paper Lanterns, Rating: 7.0\n\
             Movie Name: Solar Drift, Rating: 8.1\n\
             Movie Name: Ninth Gate Road, Rating: 9.0\n"
        );
    }

    #[tokio::test]
    async fn sends_configured_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", CHART_PATH)
            .match_header("accept-language", "en-US")
            .with_status(200)
            .with_body("<html><body></body></html>")
            .create_async()
            .await;

        let config = ScraperConfig::default()
            .with_url(format!("{}{}", server.url(), CHART_PATH))
            .with_header("Accept-Language", "en-US");
        let mut out = Vec::new();
        imdb_top_rated::run(config, 0.0, &mut out).await.unwrap();

        mock.assert_async().await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_fatal() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", CHART_PATH)
            .with_status(503)
            .create_async()
            .await;

        let config = ScraperConfig::default().with_url(format!("{}{}", server.url(), CHART_PATH));
        let mut out = Vec::new();
        let err = imdb_top_rated::run(config, 7.0, &mut out).await.unwrap_err();

        assert!(err.contains("503"), "unexpected error: {}", err);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn unreachable_host_is_fatal() {
        let config = ScraperConfig::default().with_url("http://127.0.0.1:1/chart/moviemeter");
        let mut out = Vec::new();

        let err = imdb_top_rated::run(config, 7.0, &mut out).await.unwrap_err();

        assert!(err.contains("127.0.0.1:1"), "unexpected error: {}", err);
    }

    #[test]
    fn fixture_extraction_keeps_document_order() {
        let html = get_file_content("./tests/resources/moviemeter.html");

        let extracted =
            imdb_top_rated::extract_movies_from_html(&html, &ScraperConfig::default());

        let movies: Vec<(&str, f64)> = extracted
            .movies
            .iter()
            .map(|m| (m.title(), m.rating()))
            .collect();
        assert_eq!(
            movies,
            vec![
                ("Solar Drift", 8.1),
                ("The Quiet Harbor", 6.5),
                ("Ninth Gate Road", 9.0),
                ("Paper Lanterns", 7.0),
            ]
        );
        assert_eq!(extracted.skipped.len(), 1);
        assert_eq!(extracted.skipped[0].title, "Untitled Sequel");
    }

    #[test]
    fn printing_twice_is_identical() {
        let movies = vec![
            imdb_top_rated::MovieEntry::new("Movie A", 8.1),
            imdb_top_rated::MovieEntry::new("Movie B", 6.5),
            imdb_top_rated::MovieEntry::new("Movie C", 9.0),
        ];

        let mut first = Vec::new();
        let mut second = Vec::new();
        imdb_top_rated::print_sorted_movies(&movies, 7.0, &mut first).unwrap();
        imdb_top_rated::print_sorted_movies(&movies, 7.0, &mut second).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8(first).unwrap(),
            "Movie Name: Movie A, Rating: 8.1\nMovie Name: Movie C, Rating: 9.0\n"
        );
    }

    fn get_file_content(file_path: &str) -> String {
        let mut file = match File::open(file_path) {
            Ok(file) => file,
            Err(e) => panic!("Error opening fixture file {}: {}", file_path, e),
        };

        let mut content = String::new();
        if let Err(e) = file.read_to_string(&mut content) {
            panic!("Failed to read fixture file {}: {}", file_path, e);
        }

        content
    }
}
