use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, error::AppError, model::user::CreateUserParam, service::auth::AuthService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up-to-date before the server accepts
/// requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite database through `SqliteStore` and expire after
/// seven days of inactivity.
///
/// # Arguments
/// - `db` - Connected database whose pool is shared with the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Ensures an admin account exists.
///
/// When no admin exists and both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are configured, an
/// approved admin is created with those credentials. Without credentials a warning is logged
/// so the operator knows nobody can approve new registrations yet.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the optional seed credentials
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let auth_service = AuthService::new(db);

    if auth_service.admin_exists().await? {
        return Ok(());
    }

    match (&config.admin_email, &config.admin_password) {
        (Some(email), Some(password)) => {
            let admin = auth_service
                .create_admin(CreateUserParam {
                    name: "Administrator".to_string(),
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?;

            tracing::info!("Seeded admin account {} (id {})", admin.email, admin.id);
        }
        _ => {
            tracing::warn!(
                "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one at startup"
            );
        }
    }

    Ok(())
}
