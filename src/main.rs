use std::{env, io, io::prelude::*, process};

use imdb_top_rated::config::ScraperConfig;

mod logging;

fn get_min_rating_input() -> Result<String, String> {
    match env::args().nth(1) {
        None => {
            print!("Enter the minimum rating (e.g., 7.5): ");
            io::stdout()
                .flush()
                .map_err(|e| format!("could not flush stdout: {}", e))?;
            let mut user_input = String::new();
            io::stdin()
                .read_line(&mut user_input)
                .map_err(|e| format!("Failed to read user input: {}", e))?;
            Ok(user_input)
        }
        Some(rating) => Ok(rating),
    }
}

#[tokio::main]
async fn main() {
    logging::setup_logging();

    let min_rating =
        match get_min_rating_input().and_then(|input| imdb_top_rated::parse_min_rating(&input)) {
            Ok(rating) => rating,
            Err(e) => {
                log::error!("{}", e);
                process::exit(1);
            }
        };

    let mut stdout = io::stdout().lock();
    if let Err(e) = imdb_top_rated::run(ScraperConfig::default(), min_rating, &mut stdout).await {
        log::error!("{}", e);
        process::exit(1);
    }
}
