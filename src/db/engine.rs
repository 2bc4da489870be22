//! Generic CRUD engine shared by every entity DAO.
//!
//! Each entity supplies its catalog keys, its positional bind hooks and its
//! row mapper through the [`Entity`] trait; the engine owns connection
//! acquisition, statement preparation and error propagation. Every call
//! acquires its own pooled connection and returns it on scope exit, on the
//! success path and on every error path alike.

use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, Row, params_from_iter};
use std::marker::PhantomData;

/// Catalog keys for the five statements every entity supports.
pub struct QueryKeys {
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
    pub by_id: &'static str,
    pub all: &'static str,
}

/// Capability set a persistable entity supplies to the engine.
pub trait Entity: Sized {
    /// Entity name used in diagnostics.
    const NAME: &'static str;
    const KEYS: QueryKeys;

    /// Draft form of the entity, before an id has been assigned.
    type New;

    /// Positional parameters for the create statement.
    fn create_params(new: &Self::New) -> Vec<Value>;

    /// Positional parameters for the update statement, without the id;
    /// the engine binds the id as the final parameter.
    fn update_params(&self) -> Vec<Value>;

    /// Build the entity from the current result row.
    fn from_row(row: &Row) -> rusqlite::Result<Self>;

    fn id(&self) -> i64;
    fn assign_id(new: Self::New, id: i64) -> Self;
}

/// Stateless CRUD engine for one entity type, borrowing the shared store.
pub struct Dao<'s, T> {
    pub(crate) store: &'s Store,
    entity: PhantomData<T>,
}

impl<'s, T: Entity> Dao<'s, T> {
    pub(crate) fn new(store: &'s Store) -> Self {
        Self {
            store,
            entity: PhantomData,
        }
    }

    /// Insert a draft and return the persisted entity with its generated id.
    pub fn create(&self, new: T::New) -> AppResult<T> {
        let conn = self.store.acquire()?;
        let sql = self.store.catalog().sql(T::KEYS.create)?;
        let mut stmt = conn.prepare_cached(sql)?;
        let affected = stmt.execute(params_from_iter(T::create_params(&new)))?;
        if affected == 0 {
            return Err(AppError::NothingInserted(T::NAME));
        }
        let id = conn.last_insert_rowid();
        Ok(T::assign_id(new, id))
    }

    /// Look an entity up by id. `Ok(None)` when no row matches.
    pub fn get_by_id(&self, id: i64) -> AppResult<Option<T>> {
        let conn = self.store.acquire()?;
        let sql = self.store.catalog().sql(T::KEYS.by_id)?;
        let mut stmt = conn.prepare_cached(sql)?;
        let found = stmt.query_row([id], T::from_row).optional()?;
        Ok(found)
    }

    /// Every entity, in the order the catalog query defines.
    pub fn get_all(&self) -> AppResult<Vec<T>> {
        let conn = self.store.acquire()?;
        let sql = self.store.catalog().sql(T::KEYS.all)?;
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt.query_map([], T::from_row)?;
        let items = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Write every mutable field of `entity` back to its row.
    /// The row count is discarded; there is no concurrency check.
    pub fn update(&self, entity: &T) -> AppResult<()> {
        let conn = self.store.acquire()?;
        let sql = self.store.catalog().sql(T::KEYS.update)?;
        let mut stmt = conn.prepare_cached(sql)?;
        let mut bound = entity.update_params();
        bound.push(Value::from(entity.id()));
        stmt.execute(params_from_iter(bound))?;
        Ok(())
    }

    /// Delete by id. Deleting an id that no longer exists is not an error.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.store.acquire()?;
        let sql = self.store.catalog().sql(T::KEYS.delete)?;
        let mut stmt = conn.prepare_cached(sql)?;
        stmt.execute([id])?;
        Ok(())
    }
}
