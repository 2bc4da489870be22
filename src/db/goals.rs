//! Goal DAO: capability wiring for the CRUD engine plus owner-scoped reads.
//!
//! Goal reads join the users table so every returned goal carries a fully
//! populated owner, not just the foreign key. The owner is fixed at create
//! time; the update statement never rebinds it.

use crate::db::engine::{Dao, Entity, QueryKeys};
use crate::errors::AppResult;
use crate::models::{Goal, NewGoal};
use rusqlite::Row;
use rusqlite::types::Value;

pub type GoalDao<'s> = Dao<'s, Goal>;

impl Entity for Goal {
    const NAME: &'static str = "goal";
    const KEYS: QueryKeys = QueryKeys {
        create: "create.goal",
        update: "update.goal",
        delete: "delete.goal.by.id",
        by_id: "get.goal.by.id",
        all: "get.all.goal",
    };

    type New = NewGoal;

    // Bind order: title, cost, summary, posted_at, description, owner id.
    fn create_params(new: &NewGoal) -> Vec<Value> {
        vec![
            Value::from(new.title.clone()),
            Value::from(new.cost.to_string()),
            Value::from(new.summary.clone()),
            Value::from(new.posted_at.to_rfc3339()),
            Value::from(new.description.clone()),
            Value::from(new.owner.id),
        ]
    }

    fn update_params(&self) -> Vec<Value> {
        vec![
            Value::from(self.title.clone()),
            Value::from(self.cost.to_string()),
            Value::from(self.summary.clone()),
            Value::from(self.posted_at.to_rfc3339()),
            Value::from(self.description.clone()),
        ]
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Self::map_row(row)
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(new: NewGoal, id: i64) -> Self {
        Self {
            id,
            title: new.title,
            cost: new.cost,
            summary: new.summary,
            posted_at: new.posted_at,
            description: new.description,
            owner: new.owner,
        }
    }
}

impl Dao<'_, Goal> {
    /// Every goal owned by `user_id`, oldest first.
    /// A user without goals yields an empty list, not an error.
    pub fn get_by_user_id(&self, user_id: i64) -> AppResult<Vec<Goal>> {
        let conn = self.store.acquire()?;
        let sql = self.store.catalog().sql("get.goals.by.user.id")?;
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt.query_map([user_id], Goal::map_row)?;
        let goals = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(goals)
    }
}
