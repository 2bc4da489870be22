//! User DAO: capability wiring for the CRUD engine plus user-only finders.

use crate::db::engine::{Dao, Entity, QueryKeys};
use crate::errors::AppResult;
use crate::models::{NewUser, User};
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, Row};

pub type UserDao<'s> = Dao<'s, User>;

impl Entity for User {
    const NAME: &'static str = "user";
    const KEYS: QueryKeys = QueryKeys {
        create: "create.user",
        update: "update.user",
        delete: "delete.user.by.id",
        by_id: "get.user.by.id",
        all: "get.all.user",
    };

    type New = NewUser;

    // Bind order: first name, last name, username, password, email, salary.
    fn create_params(new: &NewUser) -> Vec<Value> {
        vec![
            Value::from(new.first_name.clone()),
            Value::from(new.last_name.clone()),
            Value::from(new.username.clone()),
            Value::from(new.password.clone()),
            Value::from(new.email.clone()),
            Value::from(new.month_salary.to_string()),
        ]
    }

    fn update_params(&self) -> Vec<Value> {
        vec![
            Value::from(self.first_name.clone()),
            Value::from(self.last_name.clone()),
            Value::from(self.username.clone()),
            Value::from(self.password.clone()),
            Value::from(self.email.clone()),
            Value::from(self.month_salary.to_string()),
        ]
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Self::map_row(row)
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(new: NewUser, id: i64) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            username: new.username,
            password: new.password,
            email: new.email,
            month_salary: new.month_salary,
        }
    }
}

impl Dao<'_, User> {
    /// Look a user up by username. `Ok(None)` when nobody matches.
    pub fn get_by_nickname(&self, username: &str) -> AppResult<Option<User>> {
        let conn = self.store.acquire()?;
        let sql = self.store.catalog().sql("get.user.by.nick")?;
        let mut stmt = conn.prepare_cached(sql)?;
        let found = stmt.query_row([username], User::map_row).optional()?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ann() -> NewUser {
        NewUser {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            username: "annl".to_string(),
            password: "x".to_string(),
            email: "a@b.c".to_string(),
            month_salary: dec!(1000.0),
        }
    }

    #[test]
    fn create_params_follow_column_order() {
        let params = <User as Entity>::create_params(&ann());
        assert_eq!(params.len(), 6);
        assert_eq!(params[0], Value::from("Ann".to_string()));
        assert_eq!(params[2], Value::from("annl".to_string()));
        assert_eq!(params[5], Value::from("1000.0".to_string()));
    }

    #[test]
    fn update_params_leave_the_id_to_the_engine() {
        let user = User::assign_id(ann(), 42);
        let params = user.update_params();
        assert_eq!(params.len(), 6);
        assert!(!params.contains(&Value::from(42i64)));
    }

    #[test]
    fn assign_id_preserves_draft_fields() {
        let user = User::assign_id(ann(), 9);
        assert_eq!(user.id, 9);
        assert_eq!(user.username, "annl");
        assert_eq!(user.month_salary, dec!(1000.0));
    }
}
