use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{gbk, init_db_with_user, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    gbk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_user_add_and_show() {
    let db_path = setup_test_db("cli_user_show");
    init_db_with_user(&db_path);

    gbk()
        .args(["--db", &db_path, "user", "show", "annl"])
        .assert()
        .success()
        .stdout(contains("Ann Lee").and(contains("annl")));
}

#[test]
fn test_user_list_shows_registered_users() {
    let db_path = setup_test_db("cli_user_list");
    init_db_with_user(&db_path);

    gbk()
        .args(["--db", &db_path, "user", "list"])
        .assert()
        .success()
        .stdout(contains("USERNAME").and(contains("annl")));
}

#[test]
fn test_user_show_unknown_warns() {
    let db_path = setup_test_db("cli_user_unknown");
    init_db_with_user(&db_path);

    gbk()
        .args(["--db", &db_path, "user", "show", "ghost"])
        .assert()
        .success()
        .stdout(contains("No user with username 'ghost'"));
}

#[test]
fn test_user_add_rejects_bad_salary() {
    let db_path = setup_test_db("cli_bad_salary");

    gbk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    gbk()
        .args([
            "--db", &db_path, "user", "add", "--first", "Ann", "--last", "Lee", "--nick", "annl",
            "--password", "x", "--email", "a@b.c", "--salary", "a lot",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn test_user_set_updates_email() {
    let db_path = setup_test_db("cli_user_set");
    init_db_with_user(&db_path);

    gbk()
        .args([
            "--db",
            &db_path,
            "user",
            "set",
            "1",
            "--email",
            "ann@new.example",
        ])
        .assert()
        .success()
        .stdout(contains("User #1 updated."));

    gbk()
        .args(["--db", &db_path, "user", "show", "annl"])
        .assert()
        .success()
        .stdout(contains("ann@new.example"));
}

#[test]
fn test_goal_add_and_scoped_list() {
    let db_path = setup_test_db("cli_goal_scoped");
    init_db_with_user(&db_path);

    // second user
    gbk()
        .args([
            "--db", &db_path, "user", "add", "--first", "Bob", "--last", "Mori", "--nick", "bobm",
            "--password", "pw", "--email", "b@c.d", "--salary", "2100.50",
        ])
        .assert()
        .success();

    for (user, title, cost) in [
        ("1", "Bike", "450.00"),
        ("1", "Laptop", "1200.00"),
        ("2", "Camera", "799.99"),
    ] {
        gbk()
            .args([
                "--db", &db_path, "goal", "add", "--user", user, "--title", title, "--cost", cost,
            ])
            .assert()
            .success()
            .stdout(contains("created"));
    }

    gbk()
        .args(["--db", &db_path, "goal", "list", "--user", "1"])
        .assert()
        .success()
        .stdout(
            contains("Bike")
                .and(contains("Laptop"))
                .and(contains("Camera").not()),
        );

    gbk()
        .args(["--db", &db_path, "goal", "list"])
        .assert()
        .success()
        .stdout(contains("Bike").and(contains("Camera")));
}

#[test]
fn test_goal_add_for_unknown_user_warns() {
    let db_path = setup_test_db("cli_goal_no_owner");
    init_db_with_user(&db_path);

    gbk()
        .args([
            "--db", &db_path, "goal", "add", "--user", "99", "--title", "Bike", "--cost", "450.00",
        ])
        .assert()
        .success()
        .stdout(contains("No user with id 99"));
}

#[test]
fn test_goal_set_updates_title() {
    let db_path = setup_test_db("cli_goal_set");
    init_db_with_user(&db_path);

    gbk()
        .args([
            "--db", &db_path, "goal", "add", "--user", "1", "--title", "Bike", "--cost", "450.00",
        ])
        .assert()
        .success();

    gbk()
        .args(["--db", &db_path, "goal", "set", "1", "--title", "E-Bike"])
        .assert()
        .success()
        .stdout(contains("Goal #1 updated."));

    gbk()
        .args(["--db", &db_path, "goal", "show", "1"])
        .assert()
        .success()
        .stdout(contains("E-Bike"));
}

#[test]
fn test_goal_del_with_yes_flag() {
    let db_path = setup_test_db("cli_goal_del");
    init_db_with_user(&db_path);

    gbk()
        .args([
            "--db", &db_path, "goal", "add", "--user", "1", "--title", "Bike", "--cost", "450.00",
        ])
        .assert()
        .success();

    gbk()
        .args(["--db", &db_path, "goal", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    gbk()
        .args(["--db", &db_path, "goal", "show", "1"])
        .assert()
        .success()
        .stdout(contains("No goal with id 1"));
}

#[test]
fn test_user_del_refused_while_goals_exist() {
    let db_path = setup_test_db("cli_user_del_guard");
    init_db_with_user(&db_path);

    gbk()
        .args([
            "--db", &db_path, "goal", "add", "--user", "1", "--title", "Bike", "--cost", "450.00",
        ])
        .assert()
        .success();

    gbk()
        .args(["--db", &db_path, "user", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("still owns"));

    // the user is still there
    gbk()
        .args(["--db", &db_path, "user", "show", "annl"])
        .assert()
        .success()
        .stdout(contains("annl"));
}

#[test]
fn test_user_del_after_goals_are_gone() {
    let db_path = setup_test_db("cli_user_del_clean");
    init_db_with_user(&db_path);

    gbk()
        .args(["--db", &db_path, "user", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    gbk()
        .args(["--db", &db_path, "user", "show", "annl"])
        .assert()
        .success()
        .stdout(contains("No user with username 'annl'"));
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("cli_log_print");
    init_db_with_user(&db_path);

    gbk()
        .args([
            "--db", &db_path, "goal", "add", "--user", "1", "--title", "Bike", "--cost", "450.00",
        ])
        .assert()
        .success();

    gbk()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("init")
                .and(contains("user.add"))
                .and(contains("goal.add")),
        );
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("cli_db_maint");
    init_db_with_user(&db_path);

    gbk()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    gbk()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Users:").and(contains("Goals:")));

    gbk()
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));
}
