//! SQLite storage adapter for entity properties.
//!
//! Values are stored as text exactly as handed over by the caller; this crate
//! neither validates nor coerces them.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

mod property;
mod schema;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool, SqliteRow};
use std::path::Path;

use vzprop_types::prelude::*;
use vzprop_types::property_adapter::{PropertyAdapter, PropertyRow};

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map a single-row query result, turning a missing row into `Error::NotFound`
pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> ClResult<T>
where
	F: FnOnce(SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

pub(crate) fn collect_res<T>(
	iter: impl Iterator<Item = Result<T, sqlx::Error>>,
) -> ClResult<Vec<T>> {
	let mut items = Vec::new();
	for item in iter {
		items.push(item.inspect_err(inspect).map_err(|_| Error::DbError)?);
	}
	Ok(items)
}

#[derive(Debug)]
pub struct PropertyAdapterSqlite {
	db: SqlitePool,
}

impl PropertyAdapterSqlite {
	/// Open (or create) the property database at `path`
	pub async fn new(path: impl AsRef<Path>) -> ClResult<Self> {
		let path = path.as_ref();
		if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(dir).await?;
		}

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path)
			.create_if_missing(true)
			.foreign_keys(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		info!("Property database opened: {}", path.display());
		Ok(Self { db })
	}
}

#[async_trait]
impl PropertyAdapter for PropertyAdapterSqlite {
	async fn create_property(
		&self,
		entity: EntityId,
		name: &str,
		value: &str,
	) -> ClResult<PropertyId> {
		property::create(&self.db, entity, name, value).await
	}

	async fn update_property(&self, id: PropertyId, value: &str) -> ClResult<()> {
		property::update(&self.db, id, value).await
	}

	async fn read_property(&self, id: PropertyId) -> ClResult<PropertyRow> {
		property::read(&self.db, id).await
	}

	async fn read_property_by_name(
		&self,
		entity: EntityId,
		name: &str,
	) -> ClResult<Option<PropertyRow>> {
		property::read_by_name(&self.db, entity, name).await
	}

	async fn list_properties(&self, entity: EntityId) -> ClResult<Vec<PropertyRow>> {
		property::list(&self.db, entity).await
	}

	async fn delete_property(&self, id: PropertyId) -> ClResult<()> {
		property::delete(&self.db, id).await
	}

	async fn delete_entity_properties(&self, entity: EntityId) -> ClResult<u64> {
		property::delete_by_entity(&self.db, entity).await
	}
}

// vim: ts=4
