//! Property adapter CRUD operation tests
//!
//! Tests Create, Read, Update, Delete operations on the properties table

use tempfile::TempDir;
use vzprop_property_adapter_sqlite::PropertyAdapterSqlite;
use vzprop_types::error::Error;
use vzprop_types::property_adapter::PropertyAdapter;
use vzprop_types::types::{EntityId, PropertyId};

async fn create_test_adapter() -> (PropertyAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = PropertyAdapterSqlite::new(temp_dir.path().join("data").join("properties.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

#[tokio::test]
async fn test_create_and_read_property() {
	let (adapter, _temp) = create_test_adapter().await;
	let entity = EntityId(1);

	let id = adapter.create_property(entity, "title", "Heat pump").await.expect("Should create");

	let row = adapter.read_property(id).await.expect("Should read");
	assert_eq!(row.id, id);
	assert_eq!(row.entity, entity);
	assert_eq!(&*row.name, "title");
	assert_eq!(&*row.value, "Heat pump");
}

#[tokio::test]
async fn test_ids_are_distinct() {
	let (adapter, _temp) = create_test_adapter().await;

	let a = adapter.create_property(EntityId(1), "title", "A").await.expect("Should create");
	let b = adapter.create_property(EntityId(2), "title", "B").await.expect("Should create");
	assert_ne!(a, b);
}

#[tokio::test]
async fn test_duplicate_name_conflicts() {
	let (adapter, _temp) = create_test_adapter().await;
	let entity = EntityId(1);

	adapter.create_property(entity, "color", "#ff0000").await.expect("Should create");
	let res = adapter.create_property(entity, "color", "#00ff00").await;

	assert!(matches!(res, Err(Error::Conflict(_))), "Should reject duplicate property");
}

#[tokio::test]
async fn test_update_property() {
	let (adapter, _temp) = create_test_adapter().await;

	let id = adapter.create_property(EntityId(1), "resolution", "1000").await.expect("Should create");
	adapter.update_property(id, "2000").await.expect("Should update");

	let row = adapter.read_property(id).await.expect("Should read");
	assert_eq!(&*row.value, "2000");

	let res = adapter.update_property(PropertyId(9999), "1").await;
	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_read_missing_property() {
	let (adapter, _temp) = create_test_adapter().await;

	assert!(matches!(adapter.read_property(PropertyId(42)).await, Err(Error::NotFound)));
	let row = adapter.read_property_by_name(EntityId(1), "title").await.expect("Should query");
	assert!(row.is_none());
}

#[tokio::test]
async fn test_read_by_name_and_list() {
	let (adapter, _temp) = create_test_adapter().await;
	let entity = EntityId(5);

	for (name, value) in [("style", "lines"), ("cost", "0.25"), ("active", "1")] {
		adapter.create_property(entity, name, value).await.expect("Should create");
	}
	adapter.create_property(EntityId(6), "style", "points").await.expect("Should create");

	let row = adapter.read_property_by_name(entity, "cost").await.expect("Should query");
	assert_eq!(row.map(|r| r.value), Some("0.25".into()));

	let names: Vec<_> = adapter
		.list_properties(entity)
		.await
		.expect("Should list")
		.into_iter()
		.map(|r| r.name.to_string())
		.collect();
	assert_eq!(names, ["active", "cost", "style"]);
}

#[tokio::test]
async fn test_delete_property() {
	let (adapter, _temp) = create_test_adapter().await;

	let id = adapter.create_property(EntityId(1), "public", "0").await.expect("Should create");
	adapter.delete_property(id).await.expect("Should delete");

	assert!(matches!(adapter.read_property(id).await, Err(Error::NotFound)));
	assert!(matches!(adapter.delete_property(id).await, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_delete_entity_properties() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.create_property(EntityId(1), "title", "A").await.expect("Should create");
	adapter.create_property(EntityId(1), "color", "#000000").await.expect("Should create");
	adapter.create_property(EntityId(2), "title", "B").await.expect("Should create");

	let count = adapter.delete_entity_properties(EntityId(1)).await.expect("Should delete");
	assert_eq!(count, 2);
	assert!(adapter.list_properties(EntityId(1)).await.expect("Should list").is_empty());
	assert_eq!(adapter.list_properties(EntityId(2)).await.expect("Should list").len(), 1);
}

#[tokio::test]
async fn test_reopen_keeps_rows() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let path = temp_dir.path().join("properties.db");

	let id = {
		let adapter = PropertyAdapterSqlite::new(&path).await.expect("Should open");
		adapter.create_property(EntityId(3), "gap", "15").await.expect("Should create")
	};

	let adapter = PropertyAdapterSqlite::new(&path).await.expect("Should reopen");
	let row = adapter.read_property(id).await.expect("Should read");
	assert_eq!(&*row.value, "15");
}

// vim: ts=4
