use anyhow::Context;
use sea_orm::DatabaseConnection;

pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn new(dburl: &str) -> anyhow::Result<Self> {
        let connection = sea_orm::Database::connect(dburl)
            .await
            .context("Could not connect to database")?;
        Ok(Database { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}

impl From<DatabaseConnection> for Database {
    fn from(connection: DatabaseConnection) -> Self {
        Database { connection }
    }
}
