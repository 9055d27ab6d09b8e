//! HTTP API tests through the actix test harness

#[cfg(test)]
mod tests {
    use crate::common::{TestDatabase, test_config};
    use actix_web::{http::StatusCode, test, web};
    use serde_json::{Value, json};
    use userbench_rs::config::Config;
    use userbench_rs::server::server::HttpServer;
    use userbench_rs::server::state::AppState;
    use userbench_rs::utils::error::ErrorResponse;
    use userbench_rs::{JobSummary, User};

    async fn state_with(config: Config) -> web::Data<AppState> {
        let db = TestDatabase::new().await;
        let database = db.db().clone();
        web::Data::new(AppState::new(config, database))
    }

    macro_rules! app {
        () => {
            app!(test_config())
        };
        ($config:expr) => {
            test::init_service(HttpServer::create_app(state_with($config).await)).await
        };
    }

    #[actix_web::test]
    async fn test_user_crud_lifecycle() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "alice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: User = test::read_body_json(resp).await;
        assert_eq!(created.name, "alice");

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", created.id))
            .to_request();
        let fetched: User = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::put()
            .uri(&format!("/users/{}", created.id))
            .set_json(json!({ "name": "alicia" }))
            .to_request();
        let updated: User = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.name, "alicia");

        let req = test::TestRequest::get().uri("/users").to_request();
        let listed: Vec<User> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![updated]);

        let req = test::TestRequest::delete()
            .uri(&format!("/users/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_create_user_validation() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "id": 5, "name": "bob" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "id": 5, "name": "bobby" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_missing_user_update_and_delete() {
        let app = app!();

        let req = test::TestRequest::put()
            .uri("/users/404")
            .set_json(json!({ "name": "nobody" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/users/404").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_bulk_insert_then_clear() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/users/bulk-insert?batchSize=4&threadPoolSize=2&totalRecords=10")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["processedRecords"], 10);
        assert_eq!(body["threadPoolSize"], 2);
        assert_eq!(body["idRange"], "1-10");
        assert!(body.get("errors").is_none());

        let req = test::TestRequest::delete().uri("/users/clear").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["deletedCount"], 10);
        assert_eq!(body["message"], "All users cleared");
    }

    #[actix_web::test]
    async fn test_bulk_insert_uses_configured_defaults() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/users/bulk-insert?workerCount=3")
            .to_request();
        let summary: JobSummary = test::call_and_read_body_json(&app, req).await;

        assert!(summary.success);
        assert_eq!(summary.total_records, 50);
        assert_eq!(summary.batch_size, 10);
        assert_eq!(summary.thread_pool_size, 3);
        assert_eq!(summary.ending_id, 50);
    }

    #[actix_web::test]
    async fn test_bulk_insert_rejects_bad_parameters() {
        let app = app!();

        for uri in [
            "/users/bulk-insert?batchSize=0",
            "/users/bulk-insert?threadPoolSize=-1",
            "/users/bulk-insert?batchSize=100000",
            "/users/bulk-insert?totalRecords=abc",
        ] {
            let req = test::TestRequest::post().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_bulk_insert_above_i64_max_reports_failure() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "id": i64::MAX, "name": "last" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/users/bulk-insert?batchSize=1&threadPoolSize=1&totalRecords=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let summary: JobSummary = test::read_body_json(resp).await;
        assert!(!summary.success);
        assert_eq!(summary.processed_records, 0);
        assert_eq!(summary.errors.len(), 1);

        let req = test::TestRequest::get().uri("/users").to_request();
        let listed: Vec<User> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 1);
    }

    #[actix_web::test]
    async fn test_ram_allocation_and_release() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/system-tuning/ram?sizeMB=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["heldMB"], 2);
        assert!(body.get("memoryBeforeMB").is_some());
        assert!(body.get("memoryAfterMB").is_some());

        let req = test::TestRequest::get().uri("/system-tuning/ram").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "heldMB": 2, "capacityMB": 8 }));

        let req = test::TestRequest::delete()
            .uri("/system-tuning/ram")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["releasedMB"], 2);
    }

    #[actix_web::test]
    async fn test_ram_rejects_invalid_sizes() {
        let app = app!();

        for uri in [
            "/system-tuning/ram?sizeMB=0",
            "/system-tuning/ram?sizeMB=-5",
            "/system-tuning/ram?sizeMB=9",
            "/system-tuning/ram",
        ] {
            let req = test::TestRequest::post().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_cpu_stress_bounds() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/system-tuning/cpu?seconds=0")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/system-tuning/cpu?seconds=6")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/system-tuning/cpu?seconds=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("Started CPU stress for 1s on "));
    }
}
