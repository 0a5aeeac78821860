pub mod layout;
pub mod movie_details;
pub mod pagination_controls;
pub mod search_bar;
pub mod search_results;

pub use layout::MainLayout;
pub use movie_details::MovieDetailsPanel;
pub use pagination_controls::PaginationControls;
pub use search_bar::MovieSearchBar;
pub use search_results::MovieSearchResults;
