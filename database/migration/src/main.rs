mod m20240301_0900_create_tables;
mod m20240305_1030_add_parts_indexes;
mod m20240412_1100_add_reports_and_messages;

use colored::Colorize;
use sea_orm_migration::{sea_orm::Database, MigrationTrait, MigratorTrait};

const CONFIG_ENV_PREFIX: &str = "MIGRATION";
const CONFIG_ENV_SEPARATOR: &str = "__";
const CONFIG: &str = "config";
const ACTION_KEY: &str = "migrate.action";
const ACTION_UP: &str = "up";
const ACTION_DOWN: &str = "down";
const DB_CON: &str = "migrate.dbcon";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_0900_create_tables::Migration),
            Box::new(m20240305_1030_add_parts_indexes::Migration),
            Box::new(m20240412_1100_add_reports_and_messages::Migration),
        ]
    }
}

enum Action {
    Up,
    Down,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {e:#}", "Migration failed".red());
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = config::Config::builder()
        .add_source(
            config::File::with_name(CONFIG).required(false).format(config::FileFormat::Yaml),
        )
        .add_source(
            config::Environment::with_prefix(CONFIG_ENV_PREFIX).separator(CONFIG_ENV_SEPARATOR),
        )
        .build()?;
    let action = config.get_string(ACTION_KEY)?;
    let db_con = config.get_string(DB_CON)?;
    let action = match action.as_str() {
        ACTION_UP => Action::Up,
        ACTION_DOWN => Action::Down,
        _ => anyhow::bail!(
            "{ACTION_KEY} must be either {ACTION_UP} or {ACTION_DOWN}, got {action}"
        ),
    };
    let db = Database::connect(db_con.as_str()).await?;
    match action {
        Action::Up => Migrator::up(&db, None).await?,
        Action::Down => Migrator::down(&db, None).await?,
    }
    Ok(())
}
