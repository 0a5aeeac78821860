//! State owned by the two fetch hooks.
//!
//! Each hook keeps its state in a reducer and remembers the ticket of the
//! request it issued last. A response is committed only when the ticket it
//! was issued with is still current, so a slow response for an older request
//! can never overwrite the state of a newer one. Tickets carry a generation,
//! which tells apart two requests for the same query or id.

use payloads::{MovieDetails, MovieId, SearchPage, SearchQuery, SearchResultItem};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::prelude::*;

/// One issued request: what was asked for and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    pub key: K,
    /// Starts at 1 and grows with every request a tracker issues
    pub generation: u64,
}

/// Ticket of the request a hook is currently waiting on.
#[derive(Debug)]
pub struct RequestTracker<K> {
    current: RefCell<Option<Ticket<K>>>,
    issued: Cell<u64>,
}

impl<K> Default for RequestTracker<K> {
    fn default() -> Self {
        Self {
            current: RefCell::new(None),
            issued: Cell::new(0),
        }
    }
}

impl<K: Clone + PartialEq> RequestTracker<K> {
    /// Mark a request for `key` as current, superseding every earlier one,
    /// including earlier requests for the same key.
    pub fn issue(&self, key: K) -> Ticket<K> {
        let generation = self.issued.get() + 1;
        self.issued.set(generation);
        let ticket = Ticket { key, generation };
        *self.current.borrow_mut() = Some(ticket.clone());
        ticket
    }

    pub fn clear(&self) {
        *self.current.borrow_mut() = None;
    }

    pub fn is_current(&self, ticket: &Ticket<K>) -> bool {
        self.current.borrow().as_ref() == Some(ticket)
    }

    pub fn current(&self) -> Option<K> {
        self.current
            .borrow()
            .as_ref()
            .map(|ticket| ticket.key.clone())
    }
}

/// Values for the caller's "no results" and "search error" flags after a
/// search resolves. The two are never both set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFlags {
    pub no_results: bool,
    pub error: bool,
}

impl SearchFlags {
    pub fn from_outcome(outcome: &Result<SearchPage, String>) -> Self {
        match outcome {
            Ok(page) if page.is_empty() => Self {
                no_results: true,
                error: false,
            },
            Ok(_) => Self {
                no_results: false,
                error: false,
            },
            Err(_) => Self {
                no_results: false,
                error: true,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Query of the latest request, `None` when idle with no query
    pub query: Option<SearchQuery>,
    /// Generation of the latest request, 0 when none was issued
    pub generation: u64,
    pub is_loading: bool,
    pub results: Vec<SearchResultItem>,
    pub page_count: u32,
}

impl SearchState {
    fn is_waiting_on(&self, ticket: &Ticket<SearchQuery>) -> bool {
        self.generation == ticket.generation
            && self.query.as_ref() == Some(&ticket.key)
    }
}

pub enum SearchAction {
    Clear,
    Begin(Ticket<SearchQuery>),
    Resolve {
        ticket: Ticket<SearchQuery>,
        outcome: Result<SearchPage, String>,
    },
}

impl Reducible for SearchState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SearchAction::Clear => Rc::new(SearchState::default()),
            SearchAction::Begin(ticket) => Rc::new(SearchState {
                query: Some(ticket.key),
                generation: ticket.generation,
                is_loading: true,
                ..(*self).clone()
            }),
            SearchAction::Resolve { ticket, outcome } => {
                if !self.is_waiting_on(&ticket) {
                    tracing::debug!(
                        query = ?ticket.key,
                        generation = ticket.generation,
                        "discarding stale search response"
                    );
                    return self;
                }
                let (results, page_count) = match outcome {
                    Ok(page) if page.is_empty() => (Vec::new(), 0),
                    Ok(page) => (page.results, page.page_count),
                    Err(_) => (Vec::new(), 0),
                };
                Rc::new(SearchState {
                    query: Some(ticket.key),
                    generation: ticket.generation,
                    is_loading: false,
                    results,
                    page_count,
                })
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsState {
    /// Identifier of the latest request, `None` when nothing is selected
    pub movie_id: Option<MovieId>,
    /// Generation of the latest request, 0 when none was issued
    pub generation: u64,
    pub is_loading: bool,
    pub details: MovieDetails,
    /// The latest request failed; details are empty
    pub failed: bool,
}

pub enum DetailsAction {
    Clear,
    Begin(Ticket<MovieId>),
    Resolve {
        ticket: Ticket<MovieId>,
        outcome: Result<MovieDetails, String>,
    },
}

impl DetailsState {
    /// Whether selecting `movie_id` should issue a new request.
    ///
    /// The empty id never does, and neither does the id already requested.
    pub fn needs_fetch(&self, movie_id: &MovieId) -> bool {
        !movie_id.is_empty() && self.movie_id.as_ref() != Some(movie_id)
    }

    fn is_waiting_on(&self, ticket: &Ticket<MovieId>) -> bool {
        self.generation == ticket.generation
            && self.movie_id.as_ref() == Some(&ticket.key)
    }
}

impl Reducible for DetailsState {
    type Action = DetailsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DetailsAction::Clear => Rc::new(DetailsState::default()),
            DetailsAction::Begin(ticket) => Rc::new(DetailsState {
                movie_id: Some(ticket.key),
                generation: ticket.generation,
                is_loading: true,
                details: MovieDetails::default(),
                failed: false,
            }),
            DetailsAction::Resolve { ticket, outcome } => {
                if !self.is_waiting_on(&ticket) {
                    tracing::debug!(
                        movie_id = %ticket.key,
                        generation = ticket.generation,
                        "discarding stale details response"
                    );
                    return self;
                }
                let (details, failed) = match outcome {
                    Ok(details) => (details, false),
                    Err(_) => (MovieDetails::default(), true),
                };
                Rc::new(DetailsState {
                    movie_id: Some(ticket.key),
                    generation: ticket.generation,
                    is_loading: false,
                    details,
                    failed,
                })
            }
        }
    }
}
