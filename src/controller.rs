use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::api::{ApiError, ListingsApi};
use crate::catalog::{Category, Condition};
use crate::data_models::{Listing, ListingId};
use crate::filter::{FilterError, FilterState};
use crate::navigator::{Navigator, Route};
use crate::render::SearchPageView;

/// What happened to the result set after a fetch resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the result set; holds the number of listings.
    Applied(usize),
    /// The request failed; the previous result set is still shown.
    Failed,
    /// A newer request was issued meanwhile, so this response was dropped.
    Superseded,
}

#[derive(Debug, Default)]
struct PageState {
    filter: FilterState,
    results: Vec<Listing>,
    last_error: Option<String>,
    /// Ticket of the most recently issued request.
    latest_ticket: u64,
}

/// Backs one search page: filter selections, the current results, and
/// navigation to a listing's detail page.
pub struct SearchController<A, N> {
    api: A,
    navigator: N,
    state: Mutex<PageState>,
}

impl<A, N> SearchController<A, N>
where
    A: ListingsApi,
    N: Navigator,
{
    pub fn new(api: A, navigator: N) -> Self {
        Self {
            api,
            navigator,
            state: Mutex::new(PageState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Loads the unfiltered listing set. Called once when the page mounts.
    pub async fn initialize(&self) -> FetchOutcome {
        let ticket = self.issue_ticket(None).await;
        debug!(ticket, "loading all listings");
        let response = self.api.list_all().await;
        self.apply(ticket, "initial load", response).await
    }

    /// Makes `filter` the current selection and fetches the matching listings.
    pub async fn search(&self, filter: FilterState) -> FetchOutcome {
        let ticket = self.issue_ticket(Some(filter.clone())).await;
        debug!(ticket, ?filter, "searching");
        let response = self.api.search(&filter).await;
        self.apply(ticket, "search", response).await
    }

    /// Searches with whatever the filter holds right now.
    pub async fn submit(&self) -> FetchOutcome {
        let filter = self.filter().await;
        self.search(filter).await
    }

    pub fn select_listing(&self, id: impl Into<ListingId>) {
        self.navigator.navigate(Route::Product(id.into()));
    }

    pub async fn set_query(&self, query: impl Into<String>) {
        self.state.lock().await.filter.set_query(query);
    }

    pub async fn set_max_age(&self, years: u8) -> Result<(), FilterError> {
        self.state.lock().await.filter.set_max_age(years)
    }

    pub async fn set_category(&self, category: Option<Category>) {
        self.state.lock().await.filter.set_category(category);
    }

    pub async fn set_condition(&self, condition: Option<Condition>) {
        self.state.lock().await.filter.set_condition(condition);
    }

    pub async fn filter(&self) -> FilterState {
        self.state.lock().await.filter.clone()
    }

    pub async fn results(&self) -> Vec<Listing> {
        self.state.lock().await.results.clone()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.lock().await.last_error.clone()
    }

    pub async fn view(&self) -> SearchPageView {
        let state = self.state.lock().await;
        SearchPageView::new(&state.results, state.last_error.clone())
    }

    // Ticket issue and response application share the state lock, so a
    // response can only land if no newer request has been issued.
    async fn issue_ticket(&self, filter: Option<FilterState>) -> u64 {
        let mut state = self.state.lock().await;
        if let Some(filter) = filter {
            state.filter = filter;
        }
        state.latest_ticket += 1;
        state.latest_ticket
    }

    async fn apply(
        &self,
        ticket: u64,
        action: &str,
        response: Result<Vec<Listing>, ApiError>,
    ) -> FetchOutcome {
        let mut state = self.state.lock().await;
        if ticket != state.latest_ticket {
            debug!(ticket, latest = state.latest_ticket, "dropping stale {action} response");
            return FetchOutcome::Superseded;
        }

        match response {
            Ok(listings) => {
                let count = listings.len();
                info!(count, "{action} returned listings");
                state.results = listings;
                state.last_error = None;
                FetchOutcome::Applied(count)
            }
            Err(e) => {
                warn!("{action} failed: {:#}", e);
                state.last_error = Some(e.to_string());
                FetchOutcome::Failed
            }
        }
    }
}
