use gloo_storage::{SessionStorage, Storage};
use log::debug;
use shared::CatalogFilter;

const FILTER_KEY: &str = "dashboard.catalog_filter";

/// Filter state saved earlier in this browser session, if any
pub fn load_filter() -> CatalogFilter {
    SessionStorage::get::<CatalogFilter>(FILTER_KEY).unwrap_or_default()
}

pub fn save_filter(filter: &CatalogFilter) {
    if let Err(e) = SessionStorage::set(FILTER_KEY, filter) {
        debug!("Could not persist catalog filter: {}", e);
    }
}

/// Counts the loads a view has started, so a response for a superseded load can be dropped
#[derive(Debug, Default)]
pub struct LoadGeneration(u64);

impl LoadGeneration {
    /// Starts a new load and returns its ticket
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_filter_round_trips_through_session_storage() {
        SessionStorage::delete(FILTER_KEY);
        assert_eq!(load_filter(), CatalogFilter::default());

        let mut filter = CatalogFilter::default();
        filter.set_min_price_input("12.7");
        filter.toggle_genre("RPG");
        filter.toggle_tag("Story");
        save_filter(&filter);

        let restored = load_filter();
        assert_eq!(restored, filter);
        assert_eq!(restored.min_price.text(), "12.7");
        SessionStorage::delete(FILTER_KEY);
    }

    #[wasm_bindgen_test]
    fn test_unreadable_saved_filter_falls_back_to_default() {
        SessionStorage::set(FILTER_KEY, "not a filter").unwrap();
        assert_eq!(load_filter(), CatalogFilter::default());
        SessionStorage::delete(FILTER_KEY);
    }
}
