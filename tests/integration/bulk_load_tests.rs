//! Bulk loader integration tests against in-memory SQLite

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{TestDatabase, UserFactory};
    use std::time::Duration;
    use userbench_rs::core::bulk_load::{BulkLoadRequest, BulkLoader};

    #[tokio::test]
    async fn test_bulk_load_into_empty_table() {
        let db = TestDatabase::new().await;
        let loader = BulkLoader::new(db.db_arc());

        let summary = loader.run(BulkLoadRequest::new(10, 4, 2)).await;

        assert!(summary.success, "errors: {:?}", summary.errors);
        assert_eq!(summary.processed_records, 10);
        assert_eq!(summary.id_range, "1-10");
        assert_eq!(assert_ok!(db.db().count_users().await), 10);

        let user = assert_ok!(db.db().find_user(7).await).unwrap();
        assert_eq!(user.name, "user7");
    }

    #[tokio::test]
    async fn test_bulk_load_continues_after_existing_rows() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().create_user(&UserFactory::with_id(41, "existing")).await);

        let summary = BulkLoader::new(db.db_arc())
            .run(BulkLoadRequest::new(25, 10, 3))
            .await;

        assert!(summary.success);
        assert_eq!(summary.starting_id, 42);
        assert_eq!(summary.ending_id, 66);
        assert_eq!(assert_ok!(db.db().count_users().await), 26);
    }

    #[tokio::test]
    async fn test_consecutive_jobs_do_not_overlap() {
        let db = TestDatabase::new().await;
        let loader = BulkLoader::new(db.db_arc()).with_shutdown_grace(Duration::from_secs(5));

        let first = loader.run(BulkLoadRequest::new(100, 30, 4)).await;
        let second = loader.run(BulkLoadRequest::new(100, 30, 4)).await;

        assert!(first.success && second.success);
        assert_eq!(second.starting_id, first.ending_id + 1);
        assert_eq!(assert_ok!(db.db().count_users().await), 200);
        assert_eq!(assert_ok!(db.db().max_user_id().await), 200);
    }

    #[tokio::test]
    async fn test_more_workers_than_connections() {
        // One pooled connection, many workers: batches queue on the pool
        let db = TestDatabase::new().await;

        let summary = BulkLoader::new(db.db_arc())
            .run(BulkLoadRequest::new(500, 7, 32))
            .await;

        assert!(summary.success, "errors: {:?}", summary.errors);
        assert_eq!(summary.processed_records, 500);
        assert_eq!(summary.ending_id, 500);
    }

    #[tokio::test]
    async fn test_starting_id_follows_current_max_after_deletes() {
        let db = TestDatabase::new().await;
        let loader = BulkLoader::new(db.db_arc());

        assert!(loader.run(BulkLoadRequest::new(10, 5, 1)).await.success);
        assert_ok!(db.db().delete_user(10).await);
        assert_ok!(db.db().delete_user(9).await);

        let summary = loader.run(BulkLoadRequest::new(4, 2, 2)).await;
        assert!(summary.success);
        assert_eq!(summary.id_range, "9-12");
        assert_eq!(assert_ok!(db.db().count_users().await), 12);
    }
}
