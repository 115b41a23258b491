use crate::config::Config;
use crate::core::template::TemplateLogic;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use rusqlite::Connection;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the default template workbook, if missing
///  - the SQLite database schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing timestudy…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    // Bootstrap the template workbook the `new` command copies from.
    if !cli.test {
        let template = Path::new(&cfg.template_file);
        if !template.exists() {
            TemplateLogic::write(template)?;
            println!("📋 Template created: {}", template.display());
        }
    }

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &cfg.database);

    // Internal log entry is non-blocking.
    if let Err(e) = log::tslog(
        &conn,
        "init",
        &cfg.database,
        &format!("Database initialized at {}", &cfg.database),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 timestudy initialization completed!");
    Ok(())
}
