use crate::search::filters::Filters;
use crate::search::persist::{self, FilterStore};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};

/// Edit to a multi-valued filter dimension
#[derive(Debug, Clone, PartialEq)]
pub enum SetEdit<T> {
    Add(T),
    Remove(T),
}

/// One typed change message per filter field.
///
/// Controls emit these instead of stringly-keyed events, so a field change
/// carries a properly-typed payload and adding a field is an exhaustiveness
/// error rather than a silent runtime branch. The paired price controls
/// (numeric boxes and range slider) emit `PriceRange` so both bounds commit
/// in one update.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Country(SetEdit<String>),
    HotelType(SetEdit<String>),
    StarCount(SetEdit<u8>),
    ReviewCount(i32),
    PriceFrom(i64),
    PriceTo(i64),
    PriceRange { from: i64, to: i64 },
}

/// A field change as it arrives off the wire: field name, raw string value,
/// and for checkbox-style controls whether the box ended up checked.
#[derive(Debug, Clone)]
pub struct RawFieldChange<'a> {
    pub field: &'a str,
    pub value: &'a str,
    /// `Some(true)` adds to a multi-valued field, `Some(false)` removes;
    /// `None` marks a single-valued control.
    pub checked: Option<bool>,
}

/// Why a raw change could not be turned into a typed one
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeError {
    UnknownField(String),
    InvalidNumber { field: &'static str, value: String },
}

impl fmt::Display for ChangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(field) => write!(f, "unknown filter field '{field}'"),
            Self::InvalidNumber { field, value } => {
                write!(f, "'{value}' is not a valid number for '{field}'")
            }
        }
    }
}

impl FieldChange {
    /// Convert a wire-level change into a typed message. The field name
    /// decides how the value is parsed; no value-type hint is consulted.
    pub fn parse(raw: &RawFieldChange<'_>) -> Result<Self, ChangeError> {
        fn edit<T>(raw: &RawFieldChange<'_>, value: T) -> SetEdit<T> {
            match raw.checked {
                Some(false) => SetEdit::Remove(value),
                _ => SetEdit::Add(value),
            }
        }

        fn number<T: std::str::FromStr>(
            raw: &RawFieldChange<'_>,
            field: &'static str,
        ) -> Result<T, ChangeError> {
            raw.value.trim().parse().map_err(|_| ChangeError::InvalidNumber {
                field,
                value: raw.value.to_string(),
            })
        }

        match raw.field {
            "country" => Ok(Self::Country(edit(raw, raw.value.to_string()))),
            "type" => Ok(Self::HotelType(edit(raw, raw.value.to_string()))),
            "starCount" => {
                let stars = number(raw, "starCount")?;
                Ok(Self::StarCount(edit(raw, stars)))
            }
            "reviewCount" => Ok(Self::ReviewCount(number(raw, "reviewCount")?)),
            "priceFrom" => Ok(Self::PriceFrom(number(raw, "priceFrom")?)),
            "priceTo" => Ok(Self::PriceTo(number(raw, "priceTo")?)),
            other => Err(ChangeError::UnknownField(other.to_string())),
        }
    }
}

/// The filter form: an in-progress specification plus the injected
/// persistence port.
///
/// The form starts from the stored specification when one is present (falling
/// open to the default on anything malformed) and echoes every accepted
/// change back to the store. `submit` hands out a snapshot; the form's own
/// state is never shared by reference.
pub struct SearchForm<S: FilterStore> {
    filters: Filters,
    store: S,
}

impl<S: FilterStore> SearchForm<S> {
    pub fn new(store: S) -> Self {
        let filters = persist::load_filters(&store).unwrap_or_default();
        Self { filters, store }
    }

    /// The in-progress specification
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Apply one typed change and persist the updated specification
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Country(edit) => apply_edit(&mut self.filters.country, edit),
            FieldChange::HotelType(edit) => apply_edit(&mut self.filters.types, edit),
            FieldChange::StarCount(edit) => apply_edit(&mut self.filters.star_count, edit),
            FieldChange::ReviewCount(count) => self.filters.review_count = count,
            FieldChange::PriceFrom(price) => self.filters.price_from = price,
            FieldChange::PriceTo(price) => self.filters.price_to = price,
            FieldChange::PriceRange { from, to } => {
                self.filters.price_from = from;
                self.filters.price_to = to;
            }
        }
        persist::save_filters(&mut self.store, &self.filters);
    }

    /// Apply a wire-level change. An unknown field is a no-op; a value that
    /// fails to parse rejects the change and keeps the prior specification.
    pub fn handle_raw(&mut self, raw: &RawFieldChange<'_>) {
        match FieldChange::parse(raw) {
            Ok(change) => self.apply(change),
            Err(err @ ChangeError::UnknownField(_)) => debug!("Ignoring form change: {err}"),
            Err(err) => warn!("Rejecting form change: {err}"),
        }
    }

    /// Snapshot the current specification for the evaluator. Later edits to
    /// the form do not touch the returned value.
    pub fn submit(&self) -> Filters {
        self.filters.clone()
    }

    /// Replace the specification wholesale with the default and persist it.
    /// Transient sub-widget state (the country search text) lives outside the
    /// form; the caller clears it alongside this call.
    pub fn reset(&mut self) {
        self.filters = Filters::default();
        persist::save_filters(&mut self.store, &self.filters);
    }
}

fn apply_edit<T: Ord>(set: &mut BTreeSet<T>, edit: SetEdit<T>) {
    match edit {
        SetEdit::Add(value) => {
            set.insert(value);
        }
        SetEdit::Remove(value) => {
            set.remove(&value);
        }
    }
}
