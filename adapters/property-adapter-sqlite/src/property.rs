//! Property rows
//!
//! Plain CRUD on the `properties` table. Values are opaque text here.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use vzprop_types::prelude::*;
use vzprop_types::property_adapter::PropertyRow;

use crate::{collect_res, inspect, map_res};

fn row_to_property(row: &SqliteRow) -> Result<PropertyRow, sqlx::Error> {
	Ok(PropertyRow {
		id: PropertyId(row.try_get("id")?),
		entity: EntityId(row.try_get("entity_id")?),
		name: row.try_get("name")?,
		value: row.try_get("value")?,
	})
}

pub(crate) async fn create(
	db: &SqlitePool,
	entity: EntityId,
	name: &str,
	value: &str,
) -> ClResult<PropertyId> {
	let res = sqlx::query("INSERT INTO properties (entity_id, name, value) VALUES (?, ?, ?)")
		.bind(entity.0)
		.bind(name)
		.bind(value)
		.execute(db)
		.await;

	match res {
		Ok(res) => {
			let id = u32::try_from(res.last_insert_rowid()).map_err(|_| Error::DbError)?;
			debug!("DB: property '{}' of entity {} inserted as {}", name, entity, id);
			Ok(PropertyId(id))
		}
		Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
			Err(Error::Conflict(format!("Entity {} already has property '{}'", entity, name)))
		}
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

pub(crate) async fn update(db: &SqlitePool, id: PropertyId, value: &str) -> ClResult<()> {
	let res = sqlx::query("UPDATE properties SET value = ? WHERE id = ?")
		.bind(value)
		.bind(id.0)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

pub(crate) async fn read(db: &SqlitePool, id: PropertyId) -> ClResult<PropertyRow> {
	let res = sqlx::query("SELECT id, entity_id, name, value FROM properties WHERE id = ?")
		.bind(id.0)
		.fetch_one(db)
		.await;

	map_res(res, |row| row_to_property(&row))
}

pub(crate) async fn read_by_name(
	db: &SqlitePool,
	entity: EntityId,
	name: &str,
) -> ClResult<Option<PropertyRow>> {
	let row = sqlx::query(
		"SELECT id, entity_id, name, value FROM properties WHERE entity_id = ? AND name = ?",
	)
	.bind(entity.0)
	.bind(name)
	.fetch_optional(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	row.as_ref().map(row_to_property).transpose().inspect_err(inspect).map_err(|_| Error::DbError)
}

/// List properties of an entity, ordered by name
pub(crate) async fn list(db: &SqlitePool, entity: EntityId) -> ClResult<Vec<PropertyRow>> {
	let rows = sqlx::query(
		"SELECT id, entity_id, name, value FROM properties WHERE entity_id = ? ORDER BY name",
	)
	.bind(entity.0)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(row_to_property))
}

pub(crate) async fn delete(db: &SqlitePool, id: PropertyId) -> ClResult<()> {
	let res = sqlx::query("DELETE FROM properties WHERE id = ?")
		.bind(id.0)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

pub(crate) async fn delete_by_entity(db: &SqlitePool, entity: EntityId) -> ClResult<u64> {
	let res = sqlx::query("DELETE FROM properties WHERE entity_id = ?")
		.bind(entity.0)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

// vim: ts=4
