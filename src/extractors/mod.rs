pub mod movie_extractor;
