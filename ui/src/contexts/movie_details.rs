use payloads::{MovieDetails, MovieId};
use yew::prelude::*;

/// What the search results and details panel may see and do.
///
/// The owning component keeps the selection and panel visibility in its own
/// state and hands this down to its subtree with a `ContextProvider`.
#[derive(Clone, PartialEq)]
pub struct MovieDetailsContext {
    pub show_movie_details: bool,
    pub movie_details: MovieDetails,
    pub details_data_is_loading: bool,
    pub toggle_visibility: Callback<()>,
    pub set_selected_id: Callback<MovieId>,
}

impl MovieDetailsContext {
    /// Select a movie and make sure the panel is open.
    pub fn select(&self, movie_id: MovieId) {
        self.set_selected_id.emit(movie_id);
        if !self.show_movie_details {
            self.toggle_visibility.emit(());
        }
    }
}

#[hook]
pub fn use_movie_details_context() -> MovieDetailsContext {
    use_context::<MovieDetailsContext>().expect(
        "use_movie_details_context must be used within a MovieDetailsContext provider",
    )
}
