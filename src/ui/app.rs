use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::api::ApiError;
use crate::catalog::{categories_of, filter_products, Product, ProductId};
use crate::config::UiConfig;
use crate::favorites::FavoritesStore;
use crate::repository::{FetchTicket, ProductRepository};
use crate::ui::debounce::SearchDebouncer;
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::favorites::{FavoritesIntent, FavoritesReducer, FavoritesScreenState};
use crate::ui::list::{ListIntent, ListReducer, ListScreenState};
use crate::ui::mvi::Reducer;
use crate::ui::route::Route;

/// Requests the UI hands to the network worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchProducts { ticket: FetchTicket },
    FetchCategories,
    FetchProduct { id: ProductId },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    history: Vec<Route>,
    repository: ProductRepository,
    favorites: FavoritesStore,
    categories: Vec<String>,
    /// Set once the categories endpoint answered; until then categories
    /// are derived from the loaded products.
    categories_from_api: bool,
    /// Product list screen (MVI pattern).
    list: ListScreenState,
    /// Product detail screen (MVI pattern).
    detail: DetailState,
    /// Favorites screen (MVI pattern).
    favorites_screen: FavoritesScreenState,
    debouncer: SearchDebouncer,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(favorites: FavoritesStore, config: &UiConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            route: Route::List,
            history: Vec::new(),
            repository: ProductRepository::new(),
            favorites,
            categories: Vec::new(),
            categories_from_api: false,
            list: ListScreenState::default(),
            detail: DetailState::default(),
            favorites_screen: FavoritesScreenState::default(),
            debouncer: SearchDebouncer::new(config.search_debounce()),
            command_sender: None,
            last_command_error: None,
        };
        app.dispatch_list(ListIntent::SetSort(config.sort_order()));
        app
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Kick off the initial requests and show `route`.
    pub fn start(&mut self, route: Route) {
        self.request_products();
        if let Err(err) = self.send_command(UiCommand::FetchCategories) {
            self.on_categories_loaded(Err(err));
        }
        self.route = route;
        self.enter_route();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn repository(&self) -> &ProductRepository {
        &self.repository
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn list_state(&self) -> &ListScreenState {
        &self.list
    }

    pub fn detail_state(&self) -> &DetailState {
        &self.detail
    }

    pub fn favorites_screen(&self) -> &FavoritesScreenState {
        &self.favorites_screen
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// The product list as currently filtered and sorted.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_products(self.repository.products(), &self.list.criteria)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.visible_products().get(self.list.selected).copied()
    }

    pub fn selected_favorite(&self) -> Option<&Product> {
        self.favorites.list().get(self.favorites_screen.selected)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.history.push(self.route);
        self.route = route;
        self.enter_route();
    }

    /// Return to the previous screen, or the list when there is none.
    pub fn back(&mut self) {
        self.route = self.history.pop().unwrap_or(Route::List);
        self.enter_route();
    }

    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_product().map(|p| p.id) {
            self.navigate(Route::Product(id));
        }
    }

    pub fn open_selected_favorite(&mut self) {
        if let Some(id) = self.selected_favorite().map(|p| p.id) {
            self.navigate(Route::Product(id));
        }
    }

    fn enter_route(&mut self) {
        match self.route {
            Route::Product(id) => self.open_product(id),
            Route::List => {
                self.dispatch_detail(DetailIntent::Close);
                self.clamp_list_selection();
            }
            Route::Favorites => {
                self.dispatch_detail(DetailIntent::Close);
                self.clamp_favorites_selection();
            }
        }
    }

    fn open_product(&mut self, id: ProductId) {
        let local = self
            .repository
            .find(id)
            .or_else(|| self.favorites.get(id))
            .cloned();
        let missing = local.is_none();
        self.dispatch_detail(DetailIntent::Open { id, product: local });
        if missing {
            if let Err(err) = self.send_command(UiCommand::FetchProduct { id }) {
                self.on_product_loaded(id, Err(err));
            }
        }
    }

    // ========================================================================
    // Network results
    // ========================================================================

    /// Start a product collection fetch. The returned ticket identifies the
    /// response that may complete it. A request the worker cannot accept
    /// completes the ticket with an error on the spot.
    pub fn request_products(&mut self) -> FetchTicket {
        let ticket = self.repository.begin_fetch();
        if let Err(err) = self.send_command(UiCommand::FetchProducts { ticket }) {
            self.on_products_loaded(ticket, Err(err));
        }
        ticket
    }

    pub fn on_products_loaded(&mut self, ticket: FetchTicket, result: Result<Vec<Product>, ApiError>) {
        if !self.repository.complete(ticket, result) {
            return;
        }
        if !self.categories_from_api {
            self.categories = categories_of(self.repository.products());
        }
        self.clamp_list_selection();
    }

    pub fn on_categories_loaded(&mut self, result: Result<Vec<String>, ApiError>) {
        match result {
            Ok(categories) => {
                let current = self.list.criteria.category.clone();
                if current.is_some_and(|c| !categories.contains(&c)) {
                    self.dispatch_list(ListIntent::SetCategory(None));
                }
                self.categories = categories;
                self.categories_from_api = true;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load categories, deriving from products");
                self.categories = categories_of(self.repository.products());
            }
        }
    }

    pub fn on_product_loaded(&mut self, id: ProductId, result: Result<Option<Product>, ApiError>) {
        let product = match result {
            Ok(product) => product,
            Err(err) => {
                tracing::warn!(product_id = %id, error = %err, "Product lookup failed");
                None
            }
        };
        self.dispatch_detail(DetailIntent::Resolved { id, product });
    }

    // ========================================================================
    // List screen
    // ========================================================================

    pub fn enter_search(&mut self) {
        self.dispatch_list(ListIntent::EnterSearch);
    }

    /// Leave search mode. Text still waiting in the debouncer is applied
    /// when its quiet period ends.
    pub fn exit_search(&mut self) {
        self.dispatch_list(ListIntent::ExitSearch);
    }

    pub fn type_search(&mut self, ch: char, now: Instant) {
        self.dispatch_list(ListIntent::SearchChar(ch));
        self.debouncer.input(self.list.search_input.clone(), now);
    }

    pub fn search_backspace(&mut self, now: Instant) {
        self.dispatch_list(ListIntent::SearchBackspace);
        self.debouncer.input(self.list.search_input.clone(), now);
    }

    /// Apply the search box immediately and leave search mode.
    pub fn submit_search(&mut self) {
        let text = self
            .debouncer
            .flush()
            .unwrap_or_else(|| self.list.search_input.clone());
        self.apply_search(text);
        self.dispatch_list(ListIntent::ExitSearch);
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let categories = self.categories.clone();
        self.dispatch_list(ListIntent::CycleCategory {
            categories,
            forward,
        });
    }

    pub fn cycle_sort(&mut self) {
        self.dispatch_list(ListIntent::CycleSort);
    }

    pub fn move_selection(&mut self, down: bool) {
        match self.route {
            Route::List => {
                let visible = self.visible_products().len();
                self.dispatch_list(if down {
                    ListIntent::MoveDown { visible }
                } else {
                    ListIntent::MoveUp
                });
            }
            Route::Favorites => {
                let len = self.favorites.len();
                self.dispatch_favorites(if down {
                    FavoritesIntent::MoveDown { len }
                } else {
                    FavoritesIntent::MoveUp
                });
            }
            Route::Product(_) => {}
        }
    }

    /// Typed search text not applied to the list yet.
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// How long the event loop may block: one tick, or less when the
    /// debouncer is due sooner.
    pub fn poll_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        self.debouncer
            .time_remaining(now)
            .map_or(tick_rate, |remaining| remaining.min(tick_rate))
    }

    /// Fire the debouncer if its quiet period has elapsed.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(text) = self.debouncer.poll(now) {
            self.apply_search(text);
        }
    }

    fn apply_search(&mut self, text: String) {
        tracing::debug!(search = %text, "Applying search");
        self.dispatch_list(ListIntent::ApplySearch(text));
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    /// Toggle the product under the cursor on whichever screen is shown.
    pub fn toggle_current_favorite(&mut self) {
        let product = match self.route {
            Route::List => self.selected_product().cloned(),
            Route::Product(_) => self.detail.product().cloned(),
            Route::Favorites => self.selected_favorite().cloned(),
        };
        if let Some(product) = product {
            self.favorites.toggle(&product);
            self.clamp_favorites_selection();
        }
    }

    pub fn remove_selected_favorite(&mut self) {
        if let Some(id) = self.selected_favorite().map(|p| p.id) {
            self.favorites.remove(id);
            self.clamp_favorites_selection();
        }
    }

    // ========================================================================
    // Detail screen
    // ========================================================================

    pub fn increment_quantity(&mut self) {
        self.dispatch_detail(DetailIntent::Increment);
    }

    pub fn decrement_quantity(&mut self) {
        self.dispatch_detail(DetailIntent::Decrement);
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    fn dispatch_list(&mut self, intent: ListIntent) {
        let clamp = matches!(
            intent,
            ListIntent::ApplySearch(_)
                | ListIntent::CycleCategory { .. }
                | ListIntent::SetCategory(_)
        );
        dispatch_mvi!(self, list, ListReducer, intent);
        if clamp {
            self.clamp_list_selection();
        }
    }

    fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    fn dispatch_favorites(&mut self, intent: FavoritesIntent) {
        dispatch_mvi!(self, favorites_screen, FavoritesReducer, intent);
    }

    fn clamp_list_selection(&mut self) {
        let visible = self.visible_products().len();
        dispatch_mvi!(self, list, ListReducer, ListIntent::ClampSelection { visible });
    }

    fn clamp_favorites_selection(&mut self) {
        let len = self.favorites.len();
        self.dispatch_favorites(FavoritesIntent::Clamp { len });
    }

    /// Queue a request for the worker. Without a sender nothing is queued
    /// and completions are delivered by the caller.
    fn send_command(&mut self, command: UiCommand) -> Result<(), ApiError> {
        let Some(sender) = &self.command_sender else {
            return Ok(());
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to queue request");
                self.last_command_error = Some(format!("Request queue failed: {err}"));
                Err(ApiError::Dispatch {
                    reason: err.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Rating, SortOrder};
    use crate::storage::{FavoritesPersistence, MemoryStore};
    use std::sync::Arc;

    fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            price,
            description: format!("{title} description"),
            category: category.to_string(),
            image: String::new(),
            rating: Rating { rate: 4.0, count: 10 },
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Backpack", 109.95, "men's clothing"),
            product(2, "Ring", 9.99, "jewelery"),
            product(3, "Monitor", 599.0, "electronics"),
        ]
    }

    fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
        let persistence = FavoritesPersistence::new(Arc::new(MemoryStore::new()));
        let mut app = App::new(FavoritesStore::new(persistence), &UiConfig::default());
        let (tx, rx) = mpsc::channel(16);
        app.set_command_sender(tx);
        (app, rx)
    }

    fn loaded_app() -> (App, mpsc::Receiver<UiCommand>) {
        let (mut app, rx) = make_app();
        let ticket = app.request_products();
        app.on_products_loaded(ticket, Ok(catalog()));
        (app, rx)
    }

    #[test]
    fn start_requests_products_and_categories() {
        let (mut app, mut rx) = make_app();
        app.start(Route::List);
        assert!(matches!(rx.try_recv(), Ok(UiCommand::FetchProducts { .. })));
        assert_eq!(rx.try_recv(), Ok(UiCommand::FetchCategories));
        assert_eq!(app.repository().status(), crate::repository::LoadStatus::Loading);
    }

    #[test]
    fn initial_sort_comes_from_config() {
        let persistence = FavoritesPersistence::new(Arc::new(MemoryStore::new()));
        let config = UiConfig {
            default_sort: "title".to_string(),
            ..UiConfig::default()
        };
        let app = App::new(FavoritesStore::new(persistence), &config);
        assert_eq!(app.list_state().criteria.sort, SortOrder::Title);
    }

    #[test]
    fn visible_products_are_sorted_by_price() {
        let (app, _rx) = loaded_app();
        let ids: Vec<u64> = app.visible_products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(app.categories().len(), 3);
    }

    #[test]
    fn categories_from_api_win_over_derived() {
        let (mut app, _rx) = make_app();
        app.on_categories_loaded(Ok(vec!["electronics".to_string()]));
        let ticket = app.request_products();
        app.on_products_loaded(ticket, Ok(catalog()));
        assert_eq!(app.categories(), &["electronics".to_string()]);
    }

    #[test]
    fn search_applies_after_debounce() {
        let (mut app, _rx) = loaded_app();
        let start = Instant::now();
        app.enter_search();
        for ch in "ring".chars() {
            app.type_search(ch, start);
        }
        assert_eq!(app.visible_products().len(), 3);

        app.on_tick(start + Duration::from_millis(100));
        assert_eq!(app.visible_products().len(), 3);

        app.on_tick(start + Duration::from_millis(500));
        let titles: Vec<&str> = app.visible_products().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Ring"]);
    }

    #[test]
    fn submit_search_applies_immediately() {
        let (mut app, _rx) = loaded_app();
        app.enter_search();
        app.type_search('m', Instant::now());
        app.type_search('o', Instant::now());
        app.submit_search();
        assert!(!app.list_state().search_mode);
        assert_eq!(app.visible_products().len(), 1);
    }

    #[test]
    fn selection_is_clamped_when_filter_shrinks_list() {
        let (mut app, _rx) = loaded_app();
        app.move_selection(true);
        app.move_selection(true);
        assert_eq!(app.list_state().selected, 2);
        app.cycle_category(true);
        assert!(app.list_state().selected < app.visible_products().len().max(1));
    }

    #[test]
    fn open_known_product_does_not_fetch() {
        let (mut app, mut rx) = loaded_app();
        while rx.try_recv().is_ok() {}
        app.open_selected();
        assert_eq!(app.route(), Route::Product(ProductId(2)));
        assert!(app.detail_state().product().is_some());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn open_unknown_product_fetches_and_resolves_not_found() {
        let (mut app, mut rx) = loaded_app();
        while rx.try_recv().is_ok() {}
        app.navigate(Route::Product(ProductId(99)));
        assert_eq!(
            rx.try_recv(),
            Ok(UiCommand::FetchProduct { id: ProductId(99) })
        );
        assert_eq!(app.detail_state(), &DetailState::Loading { id: ProductId(99) });

        app.on_product_loaded(ProductId(99), Ok(None));
        assert_eq!(app.detail_state(), &DetailState::NotFound { id: ProductId(99) });
    }

    #[test]
    fn back_returns_through_history() {
        let (mut app, _rx) = loaded_app();
        app.navigate(Route::Favorites);
        app.navigate(Route::Product(ProductId(1)));
        app.back();
        assert_eq!(app.route(), Route::Favorites);
        app.back();
        assert_eq!(app.route(), Route::List);
        app.back();
        assert_eq!(app.route(), Route::List);
    }

    #[test]
    fn toggle_favorite_from_list_and_remove_from_favorites() {
        let (mut app, _rx) = loaded_app();
        app.toggle_current_favorite();
        assert!(app.favorites().is_favorite(ProductId(2)));

        app.navigate(Route::Favorites);
        assert_eq!(app.selected_favorite().map(|p| p.id), Some(ProductId(2)));
        app.remove_selected_favorite();
        assert!(app.favorites().is_empty());
        assert_eq!(app.favorites_screen().selected, 0);
    }

    #[test]
    fn toggle_favorite_on_detail_screen() {
        let (mut app, _rx) = loaded_app();
        app.navigate(Route::Product(ProductId(3)));
        app.toggle_current_favorite();
        assert!(app.favorites().is_favorite(ProductId(3)));
        app.toggle_current_favorite();
        assert!(!app.favorites().is_favorite(ProductId(3)));
    }

    #[test]
    fn stale_products_response_is_ignored() {
        let (mut app, _rx) = make_app();
        let first = app.request_products();
        let second = app.request_products();
        app.on_products_loaded(second, Ok(catalog()));
        app.on_products_loaded(first, Ok(vec![]));
        assert_eq!(app.repository().products().len(), 3);
    }

    #[test]
    fn closed_queue_fails_fetch_instead_of_loading_forever() {
        let (mut app, rx) = make_app();
        drop(rx);
        app.request_products();
        assert_eq!(app.repository().status(), crate::repository::LoadStatus::Error);
        assert!(app
            .repository()
            .last_error()
            .is_some_and(|e| e.contains("could not be queued")));
        assert_eq!(
            app.last_command_error(),
            Some("Request queue failed: channel closed")
        );
    }

    #[test]
    fn closed_queue_resolves_product_lookup_as_not_found() {
        let (mut app, rx) = make_app();
        drop(rx);
        app.navigate(Route::Product(ProductId(42)));
        assert_eq!(app.detail_state(), &DetailState::NotFound { id: ProductId(42) });
    }

    #[test]
    fn queue_error_clears_after_successful_send() {
        let (mut app, rx) = make_app();
        drop(rx);
        app.request_products();
        assert!(app.last_command_error().is_some());

        let (tx, _rx) = mpsc::channel(4);
        app.set_command_sender(tx);
        app.request_products();
        assert_eq!(app.last_command_error(), None);
        assert_eq!(app.repository().status(), crate::repository::LoadStatus::Loading);
    }

    #[test]
    fn poll_timeout_shrinks_to_debounce_deadline() {
        let (mut app, _rx) = loaded_app();
        let start = Instant::now();
        let tick = Duration::from_millis(250);
        assert_eq!(app.poll_timeout(start, tick), tick);

        app.enter_search();
        app.type_search('r', start);
        assert!(app.search_pending());
        assert_eq!(
            app.poll_timeout(start + Duration::from_millis(400), tick),
            Duration::from_millis(100)
        );

        app.on_tick(start + Duration::from_millis(500));
        assert!(!app.search_pending());
        assert_eq!(app.poll_timeout(start + Duration::from_millis(500), tick), tick);
    }

    #[test]
    fn submit_search_consumes_pending_text() {
        let (mut app, _rx) = loaded_app();
        let start = Instant::now();
        app.enter_search();
        app.type_search('r', start);
        app.submit_search();
        assert!(!app.search_pending());
        assert_eq!(app.list_state().criteria.search, "r");
    }

    #[test]
    fn category_missing_from_api_list_is_reset() {
        let (mut app, _rx) = loaded_app();
        app.cycle_category(true);
        assert!(app.list_state().criteria.category.is_some());

        app.on_categories_loaded(Ok(vec!["books".to_string()]));
        assert_eq!(app.list_state().criteria.category, None);
        assert_eq!(app.visible_products().len(), 3);
    }

    #[test]
    fn quantity_changes_only_on_detail() {
        let (mut app, _rx) = loaded_app();
        app.navigate(Route::Product(ProductId(1)));
        app.increment_quantity();
        app.increment_quantity();
        app.decrement_quantity();
        assert!(matches!(
            app.detail_state(),
            DetailState::Ready { quantity, .. } if quantity.get() == 2
        ));
    }
}
