use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;

use super::{CategoryStore, StoreError};
use crate::models::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Find,
    Insert,
    Update,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Write,
    Other,
}

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<Category>,
}

// Store en memoria para las pruebas: cuenta lecturas del listado y escrituras,
// aplica la restricción UNIQUE del slug como Postgres y permite inyectar fallos
#[derive(Default)]
pub struct InMemoryCategoryStore {
    table: Mutex<Table>,
    faults: Mutex<HashMap<Op, Fault>>,
    list_calls: AtomicUsize,
    writes: AtomicUsize,
    list_delay: Mutex<Option<Duration>>,
    // Simula un DELETE concurrente entre la lectura y el guardado
    vanish_after_find: AtomicBool,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Category>) -> Self {
        let next_id = rows.iter().map(|c| c.id).max().unwrap_or(0);
        Self {
            table: Mutex::new(Table { next_id, rows }),
            ..Self::default()
        }
    }

    pub fn fail_on(&self, op: Op, fault: Fault) {
        self.faults.lock().unwrap().insert(op, fault);
    }

    pub fn delay_list(&self, delay: Duration) {
        *self.list_delay.lock().unwrap() = Some(delay);
    }

    pub fn vanish_after_find(&self) {
        self.vanish_after_find.store(true, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<Category> {
        self.table.lock().unwrap().rows.clone()
    }

    fn check(&self, op: Op) -> Result<(), StoreError> {
        match self.faults.lock().unwrap().get(&op) {
            Some(Fault::Write) => Err(StoreError::Write(format!("{:?} rechazado", op))),
            Some(Fault::Other) => Err(StoreError::Other(format!("{:?} falló", op))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check(Op::List)?;
        let rows = self.rows();

        let delay = *self.list_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(rows)
    }

    async fn find(&self, id: i32) -> Result<Option<Category>, StoreError> {
        self.check(Op::Find)?;
        let mut table = self.table.lock().unwrap();
        let found = table.rows.iter().find(|c| c.id == id).cloned();
        if found.is_some() && self.vanish_after_find.load(Ordering::SeqCst) {
            table.rows.retain(|c| c.id != id);
        }
        Ok(found)
    }

    async fn insert(&self, category: &Category) -> Result<Category, StoreError> {
        self.check(Op::Insert)?;
        let mut table = self.table.lock().unwrap();
        if table.rows.iter().any(|c| c.slug == category.slug) {
            return Err(StoreError::Write(format!("slug duplicado: {}", category.slug)));
        }

        table.next_id += 1;
        let created = Category {
            id: table.next_id,
            ..category.clone()
        };
        table.rows.push(created.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(created)
    }

    async fn update(&self, category: &Category) -> Result<Category, StoreError> {
        self.check(Op::Update)?;
        let mut table = self.table.lock().unwrap();
        if table
            .rows
            .iter()
            .any(|c| c.id != category.id && c.slug == category.slug)
        {
            return Err(StoreError::Write(format!("slug duplicado: {}", category.slug)));
        }

        let row = table
            .rows
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| {
                StoreError::Other(format!("la categoría {} ya no existe", category.id))
            })?;
        *row = category.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(category.clone())
    }

    async fn remove(&self, id: i32) -> Result<(), StoreError> {
        self.check(Op::Remove)?;
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);
        if table.rows.len() == before {
            return Err(StoreError::Other(format!("la categoría {} ya no existe", id)));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
