use crate::cli::parser::{Commands, GoalAction};
use crate::config::Config;
use crate::db::log;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::NewGoal;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

use super::{ask_confirmation, parse_amount};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal { action } = cmd {
        let store = Store::open(cfg)?;

        return match action {
            GoalAction::Add {
                user,
                title,
                cost,
                summary,
                description,
            } => add(&store, *user, title, cost, summary, description),
            GoalAction::List { user } => list(&store, *user),
            GoalAction::Show { id } => show(&store, *id),
            GoalAction::Set {
                id,
                title,
                cost,
                summary,
                description,
            } => set(&store, *id, title, cost, summary, description),
            GoalAction::Del { id, yes } => del(&store, *id, *yes),
        };
    }

    Ok(())
}

fn add(
    store: &Store,
    user_id: i64,
    title: &str,
    cost: &str,
    summary: &str,
    description: &str,
) -> AppResult<()> {
    let owner = match store.users().get_by_id(user_id)? {
        Some(u) => u,
        None => {
            warning(format!(
                "No user with id {}; register the user first.",
                user_id
            ));
            return Ok(());
        }
    };

    let draft = NewGoal::new(
        title.to_string(),
        parse_amount(cost)?,
        summary.to_string(),
        description.to_string(),
        owner,
    );

    let goal = store.goals().create(draft)?;

    let conn = store.acquire()?;
    log::record(
        &conn,
        "goal.add",
        &goal.title,
        &format!("Created goal #{} for user #{}", goal.id, goal.owner.id),
    )?;

    success(format!(
        "Goal #{} created: {} ({})",
        goal.id, goal.title, goal.cost
    ));
    Ok(())
}

fn list(store: &Store, user: Option<i64>) -> AppResult<()> {
    let goals = match user {
        Some(user_id) => store.goals().get_by_user_id(user_id)?,
        None => store.goals().get_all()?,
    };

    if goals.is_empty() {
        info("No goals found.");
        return Ok(());
    }

    let mut table = Table::new(vec!["ID", "TITLE", "COST", "OWNER", "POSTED"]);
    for goal in &goals {
        table.add_row(vec![
            goal.id.to_string(),
            goal.title.clone(),
            goal.cost.to_string(),
            goal.owner.username.clone(),
            goal.posted_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    println!("🎯 Goals:\n");
    print!("{}", table.render());
    Ok(())
}

fn show(store: &Store, id: i64) -> AppResult<()> {
    match store.goals().get_by_id(id)? {
        Some(goal) => {
            println!("🎯 Goal #{}", goal.id);
            println!("   Title:       {}", goal.title);
            println!("   Cost:        {}", goal.cost);
            println!("   Summary:     {}", goal.summary);
            println!("   Description: {}", goal.description);
            println!("   Posted:      {}", goal.posted_at.format("%Y-%m-%d %H:%M"));
            println!("   Owner:       {} (#{})", goal.owner.username, goal.owner.id);
        }
        None => warning(format!("No goal with id {}", id)),
    }
    Ok(())
}

fn set(
    store: &Store,
    id: i64,
    title: &Option<String>,
    cost: &Option<String>,
    summary: &Option<String>,
    description: &Option<String>,
) -> AppResult<()> {
    let mut goal = match store.goals().get_by_id(id)? {
        Some(g) => g,
        None => {
            warning(format!("No goal with id {}", id));
            return Ok(());
        }
    };

    if let Some(v) = title {
        goal.title = v.clone();
    }
    if let Some(v) = cost {
        goal.cost = parse_amount(v)?;
    }
    if let Some(v) = summary {
        goal.summary = v.clone();
    }
    if let Some(v) = description {
        goal.description = v.clone();
    }

    store.goals().update(&goal)?;

    let conn = store.acquire()?;
    log::record(
        &conn,
        "goal.set",
        &goal.title,
        &format!("Updated goal #{}", goal.id),
    )?;

    success(format!("Goal #{} updated.", goal.id));
    Ok(())
}

fn del(store: &Store, id: i64, yes: bool) -> AppResult<()> {
    let goal = match store.goals().get_by_id(id)? {
        Some(g) => g,
        None => {
            warning(format!("No goal with id {}", id));
            return Ok(());
        }
    };

    if !yes
        && !ask_confirmation(&format!(
            "Delete goal #{} ('{}')? This action is irreversible.",
            id, goal.title
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    store.goals().delete(id)?;

    let conn = store.acquire()?;
    log::record(
        &conn,
        "goal.del",
        &goal.title,
        &format!("Deleted goal #{}", id),
    )?;

    success(format!("Goal #{} ('{}') has been deleted.", id, goal.title));
    Ok(())
}
