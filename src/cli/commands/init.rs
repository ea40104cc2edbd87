use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::utils::formatting::opt_time;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the work schedule, seeded from `default_schedule`
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rTimebank…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    let schedule = init_db(&conn, &cfg.default_schedule)?;

    println!("✅ Database initialized at {}", &db_path);
    println!(
        "🕘 Work schedule: {} → {} (lunch {} - {})",
        schedule.entry_time,
        schedule.exit_time,
        opt_time(schedule.lunch_start),
        opt_time(schedule.lunch_end)
    );

    ttlog_soft(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rTimebank initialization completed!");
    Ok(())
}
