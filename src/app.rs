use crate::models::Hotel;
use crate::search::country::CountrySearch;
use crate::search::evaluate::filter_hotels;
use crate::search::form::{FieldChange, RawFieldChange, SearchForm};
use crate::search::persist::FilterStore;
use crate::sources::HotelSource;
use crate::view::{build_view, CatalogView, Pagination};
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// The catalog browser: feed source, filter form, country picker, result
/// pager and the currently displayed hotel list.
///
/// Fetches are sequential awaits on a single task, so the most recently
/// completed load is always the one displayed. A failed reload keeps the
/// previous list on screen; the caller surfaces the error and may retry by
/// calling the same operation again.
pub struct Application<Src: HotelSource, S: FilterStore> {
    source: Src,
    form: SearchForm<S>,
    country_search: CountrySearch,
    pager: Pagination,
    hotels: Vec<Hotel>,
    loaded_at: Option<DateTime<Utc>>,
}

impl<Src: HotelSource, S: FilterStore> Application<Src, S> {
    /// Load the full feed once and derive the country list for the picker.
    pub async fn mount(source: Src, store: S) -> Result<Self> {
        let hotels = source.fetch().await?;
        info!(
            "Mounted catalog with {} hotels from '{}' source",
            hotels.len(),
            source.source_name()
        );

        // The picker starts empty and picks up the country list once the
        // initial load completes, like any later feed change would.
        let mut country_search = CountrySearch::default();
        country_search.set_available(unique_countries(&hotels));

        Ok(Self {
            source,
            form: SearchForm::new(store),
            country_search,
            pager: Pagination::default(),
            hotels,
            loaded_at: Some(Utc::now()),
        })
    }

    pub fn view(&self) -> CatalogView<'_> {
        build_view(&self.hotels, &self.pager)
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn form(&self) -> &SearchForm<S> {
        &self.form
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Apply one typed form change
    pub fn change(&mut self, change: FieldChange) {
        self.form.apply(change);
    }

    /// Apply a wire-level form change (unknown fields ignored, bad numbers
    /// rejected)
    pub fn handle_raw(&mut self, raw: &RawFieldChange<'_>) {
        self.form.handle_raw(raw);
    }

    pub fn set_country_query(&mut self, query: impl Into<String>) {
        self.country_search.set_query(query);
    }

    pub fn country_query(&self) -> &str {
        self.country_search.query()
    }

    pub fn visible_countries(&self) -> &[String] {
        self.country_search.visible()
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page);
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    /// Submit the form: snapshot the specification, reload the feed, show the
    /// matching subset from page zero. On a failed reload the previous list
    /// stays on screen and the error propagates.
    pub async fn apply_filters(&mut self) -> Result<()> {
        let snapshot = self.form.submit();
        let full = match self.source.fetch().await {
            Ok(full) => full,
            Err(err) => {
                warn!("Keeping previous results, feed reload failed: {err:#}");
                return Err(err);
            }
        };

        self.hotels = filter_hotels(&snapshot, &full);
        self.loaded_at = Some(Utc::now());
        self.pager.reset();
        info!("Filter applied, {} of {} hotels match", self.hotels.len(), full.len());
        Ok(())
    }

    /// Reset pathway shared by the form's clear control and the empty-state
    /// button: default specification, cleared country search, full feed
    /// reloaded, page index back to zero.
    pub async fn reset(&mut self) -> Result<()> {
        self.form.reset();
        self.country_search.clear();

        let full = match self.source.fetch().await {
            Ok(full) => full,
            Err(err) => {
                warn!("Keeping previous results, feed reload failed: {err:#}");
                return Err(err);
            }
        };

        self.hotels = full;
        self.loaded_at = Some(Utc::now());
        self.pager.reset();
        info!("Filters reset, showing all {} hotels", self.hotels.len());
        Ok(())
    }
}

/// Unique countries in first-seen feed order, for the picker
fn unique_countries(hotels: &[Hotel]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    hotels
        .iter()
        .filter(|hotel| seen.insert(hotel.country.clone()))
        .map(|hotel| hotel.country.clone())
        .collect()
}
