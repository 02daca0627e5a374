use std::{sync::Arc, time::Duration};

use crate::{cache::ListCache, models::category::Category, store::CategoryStore};

pub type CategoryListCache = ListCache<Arc<Vec<Category>>>;

// Estado compartido por todos los handlers (se clona por request, todo va en Arc)
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CategoryStore>,
    pub categories_cache: Arc<CategoryListCache>,
    pub invalidate_cache_on_write: bool,
}

impl AppState {
    pub fn new(
        store: Arc<dyn CategoryStore>,
        cache_ttl: Duration,
        invalidate_cache_on_write: bool,
    ) -> Self {
        Self {
            store,
            categories_cache: Arc::new(ListCache::new("categories", cache_ttl)),
            invalidate_cache_on_write,
        }
    }

    // Se llama después de cada create/update/delete exitoso
    pub async fn categories_changed(&self) {
        if self.invalidate_cache_on_write {
            self.categories_cache.invalidate().await;
        }
    }
}
