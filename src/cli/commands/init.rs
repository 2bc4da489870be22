use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::store::Store;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with its schema
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    //
    // 1) CONFIG AND DATABASE FILES
    //
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    println!("⚙️  Initializing goalbook…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    //
    // 2) SCHEMA
    //
    // `cfg` already carries the --db override, so the tables land in the
    // database every later command will actually use.
    let store = Store::open(cfg)?;

    println!("✅ Database initialized at {}", &cfg.database);

    //
    // 3) INTERNAL LOG (non-blocking)
    //
    let logged = store.acquire().and_then(|conn| {
        log::record(
            &conn,
            "init",
            "database",
            &format!("Database initialized at {}", &cfg.database),
        )
    });
    if let Err(e) = logged {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 goalbook initialization completed!");
    Ok(())
}
