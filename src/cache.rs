// Caching mechanism for storing fetched page content locally.
//
// ⚠️ VERSION BUMP REQUIRED:
// Changes to PageContent or BlogIndex require incrementing
// CACHE_VERSION below to invalidate stale caches.
use crate::content::{BlogIndex, ContentSource, PageContent};
use crate::context::AppContext;
use crate::error::FetchError;
use crate::storage::LocalStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

// Increment this whenever the cached shapes change to invalidate old caches
const CACHE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct PageCache {
    // If this field is missing in the JSON (old cache), it defaults to 0.
    #[serde(default)]
    version: u32,
    page: PageContent,
}

#[derive(Serialize, Deserialize)]
struct IndexCache {
    #[serde(default)]
    version: u32,
    index: BlogIndex,
}

pub struct ContentCache;

impl ContentCache {
    fn get_index_path(ctx: &dyn AppContext) -> Option<PathBuf> {
        ctx.get_cache_dir().ok().map(|p| p.join("blog_index.json"))
    }

    fn get_page_path(ctx: &dyn AppContext, key: &str) -> Option<PathBuf> {
        ctx.get_cache_dir().ok().map(|dir| {
            let mut hasher = DefaultHasher::new();
            key.hash(&mut hasher);
            let filename = format!("page_{:x}.json", hasher.finish());
            dir.join(filename)
        })
    }

    pub fn save_page(ctx: &dyn AppContext, key: &str, page: &PageContent) -> Result<()> {
        if let Some(path) = Self::get_page_path(ctx, key) {
            LocalStorage::with_lock(&path, || {
                let data = PageCache {
                    version: CACHE_VERSION,
                    page: page.clone(),
                };
                let json = serde_json::to_string_pretty(&data)?;
                LocalStorage::atomic_write(&path, json)?;
                Ok(())
            })?;
        }
        Ok(())
    }

    /// Load a cached page. A missing, unreadable or stale-version cache
    /// file is `None`, never an error: the caller just re-fetches.
    pub fn load_page(ctx: &dyn AppContext, key: &str) -> Result<Option<PageContent>> {
        if let Some(path) = Self::get_page_path(ctx, key)
            && path.exists()
        {
            return LocalStorage::with_lock(&path, || {
                let json = fs::read_to_string(&path)?;
                if let Ok(cache) = serde_json::from_str::<PageCache>(&json)
                    && cache.version == CACHE_VERSION
                {
                    return Ok(Some(cache.page));
                }
                // Version mismatch or parse failure: treat the cache as
                // invalid to force a re-fetch.
                Ok(None)
            });
        }
        Ok(None)
    }

    pub fn save_index(ctx: &dyn AppContext, index: &BlogIndex) -> Result<()> {
        if let Some(path) = Self::get_index_path(ctx) {
            LocalStorage::with_lock(&path, || {
                let data = IndexCache {
                    version: CACHE_VERSION,
                    index: index.clone(),
                };
                let json = serde_json::to_string_pretty(&data)?;
                LocalStorage::atomic_write(&path, json)?;
                Ok(())
            })?;
        }
        Ok(())
    }

    pub fn load_index(ctx: &dyn AppContext) -> Result<Option<BlogIndex>> {
        if let Some(path) = Self::get_index_path(ctx)
            && path.exists()
        {
            return LocalStorage::with_lock(&path, || {
                let json = fs::read_to_string(&path)?;
                if let Ok(cache) = serde_json::from_str::<IndexCache>(&json)
                    && cache.version == CACHE_VERSION
                {
                    return Ok(Some(cache.index));
                }
                Ok(None)
            });
        }
        Ok(None)
    }
}

/// A [`ContentSource`] that consults the on-disk cache before its
/// inner source, and fills the cache on a successful fetch.
pub struct CachedSource<'a, S> {
    ctx: &'a dyn AppContext,
    inner: S,
}

impl<'a, S: ContentSource> CachedSource<'a, S> {
    pub fn new(ctx: &'a dyn AppContext, inner: S) -> Self {
        Self { ctx, inner }
    }
}

impl<S: ContentSource> ContentSource for CachedSource<'_, S> {
    fn page(&self, key: &str) -> Result<PageContent, FetchError> {
        if let Ok(Some(page)) = ContentCache::load_page(self.ctx, key) {
            return Ok(page);
        }
        let page = self.inner.page(key)?;
        if let Err(e) = ContentCache::save_page(self.ctx, key, &page) {
            log::warn!("Failed to cache page {}: {}", key, e);
        }
        Ok(page)
    }

    fn blog_index(&self) -> Result<BlogIndex, FetchError> {
        if let Ok(Some(index)) = ContentCache::load_index(self.ctx) {
            return Ok(index);
        }
        let index = self.inner.blog_index()?;
        if let Err(e) = ContentCache::save_index(self.ctx, &index) {
            log::warn!("Failed to cache blog index: {}", e);
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn page_cache_round_trip() {
        let ctx = TestContext::new();
        let page = PageContent {
            html: "<h1>home</h1>".to_string(),
        };
        assert_eq!(ContentCache::load_page(&ctx, "home").unwrap(), None);
        ContentCache::save_page(&ctx, "home", &page).unwrap();
        assert_eq!(ContentCache::load_page(&ctx, "home").unwrap(), Some(page));
    }

    #[test]
    fn distinct_keys_do_not_collide() {
        let ctx = TestContext::new();
        let a = PageContent {
            html: "a".to_string(),
        };
        let b = PageContent {
            html: "b".to_string(),
        };
        ContentCache::save_page(&ctx, "blog/2022/one", &a).unwrap();
        ContentCache::save_page(&ctx, "blog/2022/two", &b).unwrap();
        assert_eq!(
            ContentCache::load_page(&ctx, "blog/2022/one").unwrap(),
            Some(a)
        );
        assert_eq!(
            ContentCache::load_page(&ctx, "blog/2022/two").unwrap(),
            Some(b)
        );
    }

    #[test]
    fn stale_version_loads_as_absent() {
        let ctx = TestContext::new();
        let page = PageContent {
            html: "old".to_string(),
        };
        ContentCache::save_page(&ctx, "home", &page).unwrap();

        // Rewrite the cache file with a version from the future.
        let path = ContentCache::get_page_path(&ctx, "home").unwrap();
        let json = format!(
            r#"{{"version": {}, "page": {{"html": "old"}}}}"#,
            CACHE_VERSION + 1
        );
        LocalStorage::atomic_write(&path, json).unwrap();

        assert_eq!(ContentCache::load_page(&ctx, "home").unwrap(), None);
    }
}
