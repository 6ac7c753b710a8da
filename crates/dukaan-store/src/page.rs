//! The loading / error / success triad every page honors.

use crate::error::{StoreError, StoreResult};
use dukaan_data::DataResult;
use dukaan_i18n::{Language, TextKey};
use std::future::Future;

/// What kind of listing came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyContext {
    Cart,
    Search,
    Generic,
}

impl EmptyContext {
    pub fn message(&self, language: Language) -> &'static str {
        match self {
            EmptyContext::Cart => TextKey::EmptyCart.get(language),
            EmptyContext::Search | EmptyContext::Generic => TextKey::NoResults.get(language),
        }
    }
}

/// What a page should render.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    /// The load failed; render the error view with a retry action.
    Failed(String),
    /// The load succeeded with nothing to show.
    Empty(EmptyContext),
    Ready(T),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PageState::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Error message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PageState<U> {
        match self {
            PageState::Loading => PageState::Loading,
            PageState::Failed(message) => PageState::Failed(message),
            PageState::Empty(context) => PageState::Empty(context),
            PageState::Ready(value) => PageState::Ready(f(value)),
        }
    }
}

impl<T> PageState<Vec<T>> {
    /// Settle a listing load.
    pub fn from_list(result: StoreResult<Vec<T>>, empty: EmptyContext) -> Self {
        match result {
            Ok(items) if items.is_empty() => PageState::Empty(empty),
            Ok(items) => PageState::Ready(items),
            Err(err) => PageState::Failed(err.to_string()),
        }
    }
}

impl<T> From<StoreResult<T>> for PageState<T> {
    fn from(result: StoreResult<T>) -> Self {
        match result {
            Ok(value) => PageState::Ready(value),
            Err(err) => PageState::Failed(err.to_string()),
        }
    }
}

/// Await one service call as a page load.
pub async fn load<T>(
    what: &'static str,
    call: impl Future<Output = DataResult<T>>,
) -> StoreResult<T> {
    call.await.map_err(|err| {
        tracing::warn!(what, error = %err, "page load failed");
        StoreError::load_failed(what, err)
    })
}

/// Run two service calls concurrently. The load fails as a whole if either
/// call fails.
pub async fn load_both<A, B>(
    what: &'static str,
    first: impl Future<Output = DataResult<A>>,
    second: impl Future<Output = DataResult<B>>,
) -> StoreResult<(A, B)> {
    load(what, futures::future::try_join(first, second)).await
}
