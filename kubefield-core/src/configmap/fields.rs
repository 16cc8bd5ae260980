//! Field-level ConfigMap operations
//!
//! Each call is one fetch, plus one persist for `update_field`. Nothing is
//! retried or cached between calls.

use super::accessor::{GetUpdater, Getter};
use crate::error::{FieldError, FieldResult};
use crate::types::NamespacedName;
use k8s_openapi::api::core::v1::ConfigMap;
use std::collections::BTreeMap;
use tracing::{debug, info};

async fn fetch<G: Getter + ?Sized>(getter: &G, key: &NamespacedName) -> FieldResult<ConfigMap> {
    debug!(configmap = %key, "fetching ConfigMap");
    getter
        .get_configmap(key)
        .await
        .map_err(|e| FieldError::from_accessor(key, e))
}

/// Read a single field from the ConfigMap at `key`
pub async fn read_key<G: Getter + ?Sized>(
    getter: &G,
    field: &str,
    key: &NamespacedName,
) -> FieldResult<String> {
    let configmap = fetch(getter, key).await?;

    configmap
        .data
        .and_then(|mut data| data.remove(field))
        .ok_or_else(|| FieldError::FieldMissing {
            key: key.clone(),
            field: field.to_string(),
        })
}

/// Read every field of the ConfigMap at `key`
///
/// A ConfigMap without data yields an empty map.
pub async fn read_data<G: Getter + ?Sized>(
    getter: &G,
    key: &NamespacedName,
) -> FieldResult<BTreeMap<String, String>> {
    let configmap = fetch(getter, key).await?;
    Ok(configmap.data.unwrap_or_default())
}

/// Set `field` to `value` in the ConfigMap at `key`, keeping all other fields.
///
/// This is a read-modify-write through the accessor: the fetched ConfigMap is
/// written back in full. Concurrent writers are not detected, the last
/// write wins.
pub async fn update_field<U: GetUpdater + ?Sized>(
    get_updater: &U,
    key: &NamespacedName,
    field: &str,
    value: &str,
) -> FieldResult<()> {
    let mut configmap = fetch(get_updater, key).await?;

    configmap
        .data
        .get_or_insert_with(BTreeMap::new)
        .insert(field.to_string(), value.to_string());

    debug!(configmap = %key, field, "persisting ConfigMap");
    get_updater
        .update_configmap(configmap)
        .await
        .map_err(FieldError::Accessor)?;

    info!(configmap = %key, field, "updated ConfigMap field");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configmap::builder;
    use crate::configmap::memory::InMemoryConfigMaps;

    fn key() -> NamespacedName {
        NamespacedName::new("namespace", "name")
    }

    async fn store() -> InMemoryConfigMaps {
        let store = InMemoryConfigMaps::new();
        store
            .insert(
                builder()
                    .set_name("name")
                    .set_namespace("namespace")
                    .set_field("field1", "value1")
                    .set_field("field2", "value2")
                    .build(),
            )
            .await;
        store
    }

    #[tokio::test]
    async fn test_read_key() {
        let store = store().await;

        assert_eq!(read_key(&store, "field1", &key()).await.unwrap(), "value1");
        assert_eq!(read_key(&store, "field2", &key()).await.unwrap(), "value2");

        let err = read_key(&store, "field3", &key()).await.unwrap_err();
        assert!(err.is_field_missing());
    }

    #[tokio::test]
    async fn test_update_field_keeps_other_fields() {
        let store = store().await;

        update_field(&store, &key(), "field1", "newValue")
            .await
            .unwrap();

        assert_eq!(read_key(&store, "field1", &key()).await.unwrap(), "newValue");
        assert_eq!(read_key(&store, "field2", &key()).await.unwrap(), "value2");
        assert_eq!(store.update_count(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_configmap_does_not_persist() {
        let store = store().await;
        let missing = NamespacedName::new("namespace", "other");

        let err = update_field(&store, &missing, "field1", "x")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.update_count(), 0);
    }
}
