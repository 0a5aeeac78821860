pub mod not_found;
pub mod search;

pub use not_found::NotFoundPage;
pub use search::SearchPage;
