//! Process-wide database state: the connection pool plus the query catalog.
//!
//! A `Store` is built once at startup and then only borrowed. There is no
//! lazy global construction; every failure while opening it is a fatal
//! startup error.

use crate::config::Config;
use crate::db::catalog::QueryCatalog;
use crate::db::engine::Dao;
use crate::db::goals::GoalDao;
use crate::db::initialize;
use crate::db::pool::{self, DbPool, PooledConn};
use crate::db::users::UserDao;
use crate::errors::AppResult;

#[derive(Debug)]
pub struct Store {
    pool: DbPool,
    catalog: QueryCatalog,
}

impl Store {
    /// Open the store described by the configuration: load the query
    /// catalog, build the pool and make sure the schema exists.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let catalog = QueryCatalog::load(cfg)?;
        let pool = pool::build(&cfg.database, cfg.max_connections)?;
        {
            let conn = pool.get()?;
            initialize::init_db(&conn)?;
        }
        Ok(Self { pool, catalog })
    }

    /// Borrow a pooled connection; it returns to the pool when dropped.
    pub fn acquire(&self) -> AppResult<PooledConn> {
        Ok(self.pool.get()?)
    }

    pub fn catalog(&self) -> &QueryCatalog {
        &self.catalog
    }

    pub fn users(&self) -> UserDao<'_> {
        Dao::new(self)
    }

    pub fn goals(&self) -> GoalDao<'_> {
        Dao::new(self)
    }
}
