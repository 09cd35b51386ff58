//! Content API shapes and the fetch tri-state.
//!
//! The site's content API is an external collaborator: this crate only
//! defines the response shapes it returns, the pending/failed/ready
//! state a rendering layer consumes, and a seam (`ContentSource`) that
//! lets the cache wrap any fetch implementation. No HTTP client lives
//! here.

use crate::error::FetchError;
use serde::{Deserialize, Serialize};

/// A single rendered page: home, about-me, a blog entry or a diary
/// entry all share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub html: String,
}

/// One entry in the blog index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogLink {
    pub title: String,
    pub path: String,
}

/// The blog index: its own path plus the list of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogIndex {
    pub path: String,
    pub list: Vec<BlogLink>,
}

/// The three states a fetch can be in, as consumed by a rendering
/// layer. The core's job ends at producing `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Failed(FetchError),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// The ready value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Pending => FetchState::Pending,
            FetchState::Failed(err) => FetchState::Failed(err),
            FetchState::Ready(value) => FetchState::Ready(f(value)),
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(err) => FetchState::Failed(err),
        }
    }
}

/// Abstraction over the content API boundary.
///
/// `key` is the stable cache key for a page: the blog path, the diary
/// id, or a fixed name like `home`. Fetching the same key twice must
/// be observationally idempotent, which is what makes caching by key
/// sound.
pub trait ContentSource {
    fn page(&self, key: &str) -> Result<PageContent, FetchError>;
    fn blog_index(&self) -> Result<BlogIndex, FetchError>;
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn page(&self, key: &str) -> Result<PageContent, FetchError> {
        (**self).page(key)
    }

    fn blog_index(&self) -> Result<BlogIndex, FetchError> {
        (**self).blog_index()
    }
}
