//! Table creation and seeding
//!
//! Creates the two tables when missing and inserts the sample dataset
//! only into an empty `cities` table, so restarts keep existing rows.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, Schema, Set,
};

use crate::domain::seed::sample_cities;
use crate::entity::{cities, points_of_interest};

/// Open a connection pool for the given database URL
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_string());
    options.sqlx_logging(false);
    if url.starts_with("sqlite::memory:") {
        // Every pooled connection would otherwise get its own empty database
        options.max_connections(1).min_connections(1);
    }
    Database::connect(options).await
}

/// Create tables if needed and seed them on first start
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut create_cities = schema.create_table_from_entity(cities::Entity);
    create_cities.if_not_exists();
    db.execute(backend.build(&create_cities)).await?;

    let mut create_points = schema.create_table_from_entity(points_of_interest::Entity);
    create_points.if_not_exists();
    db.execute(backend.build(&create_points)).await?;

    if cities::Entity::find().count(db).await? > 0 {
        tracing::debug!("Cities table already populated, skipping seed");
        return Ok(());
    }

    let seed = sample_cities();
    let city_rows: Vec<cities::ActiveModel> = seed
        .iter()
        .map(|c| cities::ActiveModel {
            id: Set(c.id.0),
            name: Set(c.name.clone()),
            description: Set(c.description.clone()),
        })
        .collect();
    let point_rows: Vec<points_of_interest::ActiveModel> = seed
        .iter()
        .flat_map(|c| c.points_of_interest.iter())
        .map(|p| points_of_interest::ActiveModel {
            id: Set(p.id.0),
            city_id: Set(p.city_id.0),
            name: Set(p.name.clone()),
            description: Set(p.description.clone()),
        })
        .collect();

    cities::Entity::insert_many(city_rows)
        .exec_without_returning(db)
        .await?;
    points_of_interest::Entity::insert_many(point_rows)
        .exec_without_returning(db)
        .await?;

    tracing::info!("Seeded {} cities", seed.len());
    Ok(())
}
