// Caché del listado de categorías: una sola entrada con TTL absoluto (moka).
// Las invalidaciones no esperan a una carga en curso.

use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use moka::future::Cache;

// Tope del TTL aceptado (moka no admite vidas absurdas)
pub const MAX_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

pub struct ListCache<V> {
    name: &'static str,
    inner: Cache<(), V>,
    // Se incrementa en cada invalidación para descartar cargas que empezaron antes
    generation: AtomicU64,
}

impl<V> ListCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, ttl: Duration) -> Self {
        Self {
            name,
            inner: Cache::builder()
                .max_capacity(1)
                .time_to_live(ttl.min(MAX_TTL))
                .build(),
            generation: AtomicU64::new(0),
        }
    }

    // Devuelve lo cacheado o ejecuta `load`. Misses concurrentes cargan una sola vez
    // y un error del loader no se guarda.
    pub async fn get_or_try_insert_with<Fut, E>(&self, load: Fut) -> Result<V, Arc<E>>
    where
        Fut: Future<Output = Result<V, E>>,
        E: Send + Sync + 'static,
    {
        if let Some(value) = self.inner.get(&()).await {
            tracing::debug!(cache = self.name, "cache hit");
            return Ok(value);
        }

        let started = self.generation.load(Ordering::SeqCst);
        let name = self.name;
        let value = self
            .inner
            .try_get_with((), async move {
                tracing::debug!(cache = name, "cache miss");
                load.await
            })
            .await?;

        // Hubo una escritura mientras cargábamos: no dejamos el listado viejo en caché
        if self.generation.load(Ordering::SeqCst) != started {
            self.inner.invalidate(&()).await;
        }

        Ok(value)
    }

    pub async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.invalidate(&()).await;
        tracing::debug!(cache = self.name, "cache invalidated");
    }
}
