use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::db::log;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::NewUser;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

use super::{ask_confirmation, parse_amount};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let store = Store::open(cfg)?;

        return match action {
            UserAction::Add {
                first_name,
                last_name,
                username,
                password,
                email,
                salary,
            } => add(
                &store, first_name, last_name, username, password, email, salary,
            ),
            UserAction::List => list(&store),
            UserAction::Show { username } => show(&store, username),
            UserAction::Set {
                id,
                first_name,
                last_name,
                username,
                password,
                email,
                salary,
            } => set(
                &store, *id, first_name, last_name, username, password, email, salary,
            ),
            UserAction::Del { id, yes } => del(&store, *id, *yes),
        };
    }

    Ok(())
}

fn add(
    store: &Store,
    first_name: &str,
    last_name: &str,
    username: &str,
    password: &str,
    email: &str,
    salary: &str,
) -> AppResult<()> {
    let draft = NewUser {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        email: email.to_string(),
        month_salary: parse_amount(salary)?,
    };

    let user = store.users().create(draft)?;

    let conn = store.acquire()?;
    log::record(
        &conn,
        "user.add",
        &user.username,
        &format!("Created user #{} {}", user.id, user.full_name()),
    )?;

    success(format!(
        "User #{} created: {} ({})",
        user.id,
        user.full_name(),
        user.username
    ));
    Ok(())
}

fn list(store: &Store) -> AppResult<()> {
    let users = store.users().get_all()?;

    if users.is_empty() {
        info("No users yet. Add one with `goalbook user add`.");
        return Ok(());
    }

    let mut table = Table::new(vec!["ID", "USERNAME", "NAME", "EMAIL", "SALARY"]);
    for user in &users {
        table.add_row(vec![
            user.id.to_string(),
            user.username.clone(),
            user.full_name(),
            user.email.clone(),
            user.month_salary.to_string(),
        ]);
    }

    println!("👤 Users:\n");
    print!("{}", table.render());
    Ok(())
}

fn show(store: &Store, username: &str) -> AppResult<()> {
    match store.users().get_by_nickname(username)? {
        Some(user) => {
            let goals = store.goals().get_by_user_id(user.id)?;

            println!("👤 User #{}", user.id);
            println!("   Name:   {}", user.full_name());
            println!("   Nick:   {}", user.username);
            println!("   Email:  {}", user.email);
            println!("   Salary: {}", user.month_salary);
            println!("   Goals:  {}", goals.len());
        }
        None => warning(format!("No user with username '{}'", username)),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn set(
    store: &Store,
    id: i64,
    first_name: &Option<String>,
    last_name: &Option<String>,
    username: &Option<String>,
    password: &Option<String>,
    email: &Option<String>,
    salary: &Option<String>,
) -> AppResult<()> {
    let mut user = match store.users().get_by_id(id)? {
        Some(u) => u,
        None => {
            warning(format!("No user with id {}", id));
            return Ok(());
        }
    };

    if let Some(v) = first_name {
        user.first_name = v.clone();
    }
    if let Some(v) = last_name {
        user.last_name = v.clone();
    }
    if let Some(v) = username {
        user.username = v.clone();
    }
    if let Some(v) = password {
        user.password = v.clone();
    }
    if let Some(v) = email {
        user.email = v.clone();
    }
    if let Some(v) = salary {
        user.month_salary = parse_amount(v)?;
    }

    store.users().update(&user)?;

    let conn = store.acquire()?;
    log::record(
        &conn,
        "user.set",
        &user.username,
        &format!("Updated user #{}", user.id),
    )?;

    success(format!("User #{} updated.", user.id));
    Ok(())
}

fn del(store: &Store, id: i64, yes: bool) -> AppResult<()> {
    let user = match store.users().get_by_id(id)? {
        Some(u) => u,
        None => {
            warning(format!("No user with id {}", id));
            return Ok(());
        }
    };

    // The owner foreign key is RESTRICT; refuse early with a clear message
    // instead of surfacing the constraint error.
    let goals = store.goals().get_by_user_id(id)?;
    if !goals.is_empty() {
        warning(format!(
            "User #{} still owns {} goal(s); delete them first.",
            id,
            goals.len()
        ));
        return Ok(());
    }

    if !yes
        && !ask_confirmation(&format!(
            "Delete user #{} ({})? This action is irreversible.",
            id, user.username
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    store.users().delete(id)?;

    let conn = store.acquire()?;
    log::record(
        &conn,
        "user.del",
        &user.username,
        &format!("Deleted user #{}", id),
    )?;

    success(format!("User #{} ({}) has been deleted.", id, user.username));
    Ok(())
}
