//! Database schema initialization

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Properties
	//************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS properties (
		id integer NOT NULL,
		entity_id integer NOT NULL,
		name text NOT NULL,
		value text NOT NULL,
		PRIMARY KEY(id),
		UNIQUE(entity_id, name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
