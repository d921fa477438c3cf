use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};
use lru::LruCache;
use crate::enums::analysis_mode::AnalysisMode;

/// Identity of an analysis request: the exact code text, the resolved
/// language tag and the mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    code: String,
    language: String,
    mode: AnalysisMode,
}

impl CacheKey {
    pub fn new(code: &str, language: &str, mode: AnalysisMode) -> Self {
        Self {
            code: code.to_string(),
            language: language.to_string(),
            mode,
        }
    }
}

/// Process-wide memo of successful model replies. A capacity of 0 disables it.
pub struct ResponseCache {
    entries: Option<Mutex<LruCache<CacheKey, String>>>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    pub fn get(&self, key: &CacheKey) -> Option<String> {
        let mut entries = self.lock()?;
        entries.get(key).cloned()
    }

    pub fn insert(&self, key: CacheKey, reply: String) {
        if let Some(mut entries) = self.lock() {
            entries.put(key, reply);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Some(mut entries) = self.lock() {
            entries.clear();
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, LruCache<CacheKey, String>>> {
        let entries = self.entries.as_ref()?;
        Some(entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}
