pub mod models;
pub mod schema;

use std::env;

use diesel::{Connection, ConnectionError, PgConnection};

/// Panics when unset; called once at startup so a misconfigured process
/// exits before it starts serving.
pub fn database_url() -> String {
    env::var("DATABASE_URL")
        .expect("Environment variable 'DATABASE_URL' must be set")
}

pub fn establish_connection() -> Result<PgConnection, ConnectionError> {
    PgConnection::establish(&database_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "DATABASE_URL")]
    fn missing_database_url_exits_with_clear_message() {
        env::remove_var("DATABASE_URL");
        database_url();
    }
}
