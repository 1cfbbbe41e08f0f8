use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::CreateUserParams,
    service::{image::ImageKind, user::UserService},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up to date before the application accepts requests.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the per-entity upload directories under the static root.
pub async fn ensure_upload_dirs(config: &Config) -> Result<(), AppError> {
    for kind in [ImageKind::Dog, ImageKind::News] {
        let dir = config.static_dir.join(kind.dir_name());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    Ok(())
}

/// Seeds the default admin user when no user with that name exists.
///
/// The seeded credentials are admin/admin, intended to be changed on first
/// login in any real deployment.
pub async fn ensure_admin_user(db: &DatabaseConnection) -> Result<(), AppError> {
    let repo = UserRepository::new(db);

    if repo.find_by_username("admin").await?.is_some() {
        tracing::info!("Admin user already exists");
        return Ok(());
    }

    let service = UserService::new(db);
    service
        .create(CreateUserParams {
            username: "admin".to_string(),
            password: "admin".to_string(),
            email: "admin@example.com".to_string(),
            role: "Admin".to_string(),
        })
        .await?;

    tracing::info!("Created default admin user");

    Ok(())
}
