//! Database integration tests
//!
//! Tests database operations using real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::{TestDatabase, UserFactory};
    use crate::{assert_err, assert_ok};
    use userbench_rs::ServiceError;
    use userbench_rs::core::bulk_load::BulkStore;
    use userbench_rs::core::models::User;
    use userbench_rs::storage::{Database, DatabaseBackendType};

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
        assert_ok!(db.db().health_check().await);
    }

    #[tokio::test]
    async fn test_migration_is_idempotent() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().migrate().await);
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let db = TestDatabase::new().await;

        let created = assert_ok!(db.db().create_user(&UserFactory::named("alice")).await);
        assert!(created.id > 0);
        assert_eq!(created.name, "alice");

        let found = assert_ok!(db.db().find_user(created.id).await);
        assert_eq!(found, Some(created));

        assert_eq!(assert_ok!(db.db().find_user(9999).await), None);
    }

    #[tokio::test]
    async fn test_create_with_duplicate_id_conflicts() {
        let db = TestDatabase::new().await;

        assert_ok!(db.db().create_user(&UserFactory::with_id(7, "first")).await);
        let err = assert_err!(db.db().create_user(&UserFactory::with_id(7, "second")).await);
        assert!(matches!(err, ServiceError::Conflict(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_list_users_ordered_and_paginated() {
        let db = TestDatabase::seeded(5).await;

        let all = assert_ok!(db.db().list_users(None, None).await);
        let ids: Vec<i64> = all.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let page = assert_ok!(db.db().list_users(Some(1), Some(2)).await);
        let ids: Vec<i64> = page.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_update_user_name() {
        let db = TestDatabase::seeded(2).await;

        let updated = assert_ok!(db.db().update_user_name(2, "renamed").await);
        assert_eq!(updated, User { id: 2, name: "renamed".to_string() });

        let err = assert_err!(db.db().update_user_name(42, "ghost").await);
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let db = TestDatabase::seeded(4).await;

        assert!(assert_ok!(db.db().delete_user(3).await));
        assert!(!assert_ok!(db.db().delete_user(3).await));
        assert_eq!(assert_ok!(db.db().count_users().await), 3);

        assert_eq!(assert_ok!(db.db().clear_users().await), 3);
        assert_eq!(assert_ok!(db.db().count_users().await), 0);
    }

    #[tokio::test]
    async fn test_max_identifier() {
        let db = TestDatabase::new().await;
        assert_eq!(assert_ok!(db.db().max_identifier().await), 0);

        assert_ok!(db.db().create_user(&UserFactory::with_id(41, "x")).await);
        assert_eq!(assert_ok!(db.db().max_identifier().await), 41);
    }

    #[tokio::test]
    async fn test_batch_insert_is_atomic() {
        let db = TestDatabase::seeded(3).await;

        // Row 3 already exists, so the whole batch must roll back
        let batch: Vec<User> = (2..=6).map(User::synthetic).collect();
        assert!(db.db().insert_users(batch).await.is_err());
        assert_eq!(assert_ok!(db.db().count_users().await), 3);

        let batch: Vec<User> = (4..=6).map(User::synthetic).collect();
        assert_eq!(assert_ok!(db.db().insert_users(batch).await), 3);
        assert_eq!(assert_ok!(db.db().max_identifier().await), 6);
        assert_eq!(assert_ok!(db.db().insert_users(Vec::new()).await), 0);
    }

    #[tokio::test]
    async fn test_create_after_explicit_ids_does_not_collide() {
        let db = TestDatabase::seeded(10).await;
        assert_ok!(db.db().reconcile_identifier_sequence().await);

        let created = assert_ok!(db.db().create_user(&UserFactory::named("next")).await);
        assert!(created.id > 10);
    }

    #[tokio::test]
    async fn test_stats() {
        let db = TestDatabase::seeded(6).await;
        let stats = assert_ok!(db.db().stats().await);
        assert_eq!(stats.total_users, 6);
        assert_eq!(stats.max_user_id, 6);
    }

    #[tokio::test]
    async fn test_file_backed_database_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("users.db");
        let config = userbench_rs::config::DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            max_connections: 2,
            ..crate::common::database::test_db_config()
        };

        let db = assert_ok!(Database::new(&config).await);
        assert_ok!(db.migrate().await);
        assert_ok!(db.create_user(&UserFactory::named("persisted")).await);
        assert!(path.exists());
        assert_ok!(db.close().await);
    }
}
