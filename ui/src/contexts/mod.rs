pub mod movie_details;

pub use movie_details::{MovieDetailsContext, use_movie_details_context};
