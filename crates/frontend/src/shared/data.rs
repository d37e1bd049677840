//! Page-side glue around the store: load with seed fallback, save, and
//! route failures into the page's error banner.

use super::storage::BrowserStore;
use contracts::domain::common::{AggregateRoot, Repository};
use contracts::usecases::UseCaseError;
use leptos::logging::log;
use leptos::prelude::*;

/// Banner text of a page; `None` hides it.
pub type Banner = RwSignal<Option<String>>;

pub fn report(banner: Banner, err: impl Into<UseCaseError>) {
    let err = err.into();
    log!("page error: {}", err);
    let text = match &err.details {
        Some(details) if !err.is_validation() => format!("{} ({})", err.message, details),
        _ => err.message.clone(),
    };
    banner.set(Some(text));
}

/// Value of `result`, or `fallback()` after reporting the failure.
pub fn or_report<T, E: Into<UseCaseError>>(
    banner: Banner,
    result: Result<T, E>,
    fallback: impl FnOnce() -> T,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            report(banner, err);
            fallback()
        }
    }
}

/// Whole collection, seeding it on first use. A corrupted blob is reported
/// and the page carries on with the seed.
pub fn load_list<T: AggregateRoot>(banner: Banner) -> Vec<T> {
    or_report(banner, Repository::<T>::new(&BrowserStore).list(), T::seed)
}

/// Same as [`load_list`] for collections whose seed depends on the clock.
pub fn load_list_with<T: AggregateRoot>(banner: Banner, seed: impl Fn() -> Vec<T>) -> Vec<T> {
    or_report(banner, Repository::<T>::new(&BrowserStore).list_or_seed(&seed), &seed)
}

/// Write the whole collection back. Returns whether it worked.
pub fn save_list<T: AggregateRoot>(banner: Banner, items: &[T]) -> bool {
    match Repository::<T>::new(&BrowserStore).save_all(items) {
        Ok(()) => true,
        Err(err) => {
            report(banner, err);
            false
        }
    }
}

/// Browser confirm dialog; a missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
