//! HTTP tests for the directory API against the in-memory backend

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use core_kernel::{MemoryStore, RecordingStore, TimestampPolicy};
use domain_company::Company;
use domain_employee::Employee;
use interface_api::{create_router, AppState};
use test_utils::{CompanyFixtures, EmployeeFixtures};

fn server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).unwrap()
}

fn seeded_state() -> AppState {
    AppState::from_stores(
        Arc::new(MemoryStore::with_records(vec![CompanyFixtures::acme(), CompanyFixtures::beta()])),
        Arc::new(MemoryStore::with_records(vec![EmployeeFixtures::ana()])),
        TimestampPolicy::Trusted,
    )
}

// ============================================================================
// Company routes
// ============================================================================

mod company_routes {
    use super::*;

    #[tokio::test]
    async fn test_list_returns_every_company() {
        let server = server(seeded_state());

        let response = server.get("/api/company").await;
        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0]["companyCode"], "C1");
    }

    #[tokio::test]
    async fn test_get_unknown_code_is_404() {
        let server = server(seeded_state());

        server
            .get("/api/company/NOPE")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_creates_and_sets_location() {
        let server = server(AppState::in_memory(TimestampPolicy::Trusted));

        let response = server
            .post("/api/company")
            .json(&json!({ "siteId": "S1", "companyCode": "C9", "companyName": "Gamma" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.header("location"), "/api/company/C9");

        let fetched: Value = server.get("/api/company/C9").await.json();
        assert_eq!(fetched["companyName"], "Gamma");
    }

    #[tokio::test]
    async fn test_put_with_mismatched_code_is_400() {
        let server = server(seeded_state());

        server
            .put("/api/company/C1")
            .json(&json!({ "siteId": "S1", "companyCode": "C2" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_put_merges_and_returns_204() {
        let server = server(seeded_state());

        server
            .put("/api/company/C1")
            .json(&json!({ "siteId": "S1", "companyCode": "C1", "country": "AU" }))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let fetched: Value = server.get("/api/company/C1").await.json();
        assert_eq!(fetched["country"], "AU");
        assert_eq!(fetched["companyName"], "Acme");
    }

    #[tokio::test]
    async fn test_put_unknown_company_is_404() {
        let server = server(AppState::in_memory(TimestampPolicy::Trusted));

        server
            .put("/api/company/C1")
            .json(&json!({ "siteId": "S1", "companyCode": "C1" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_save_inserts_then_updates() {
        let server = server(AppState::in_memory(TimestampPolicy::ServerStamped));
        let body = json!({ "siteId": "S1", "companyCode": "C5", "companyName": "Delta" });

        let first: Value = server.post("/api/company/save").json(&body).await.json();
        assert_eq!(first["saved"], true);
        server
            .post("/api/company/save")
            .json(&json!({ "siteId": "S1", "companyCode": "C5", "phoneNumber": "555" }))
            .await
            .assert_status_ok();

        let all: Vec<Value> = server.get("/api/company").await.json();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["companyName"], "Delta");
        assert_eq!(all[0]["phoneNumber"], "555");
        assert!(all[0]["lastModified"].is_string());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let server = server(seeded_state());

        server
            .delete("/api/company/C2")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get("/api/company/C2")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .delete("/api/company/C2")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// Employee routes
// ============================================================================

mod employee_routes {
    use super::*;

    #[tokio::test]
    async fn test_get_known_employee() {
        let server = server(seeded_state());

        let body: Value = server.get("/api/employee/E1").await.json();
        assert_eq!(body["employeeName"], "Ana Kowalski");
        assert_eq!(body["emailAddress"], "ana@example.com");
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_with_details() {
        let server = server(AppState::in_memory(TimestampPolicy::Trusted));

        let response = server
            .post("/api/employee")
            .json(&json!({ "siteId": "S1", "employeeCode": "E2", "emailAddress": "nope" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        assert!(body["details"][0].as_str().unwrap().starts_with("email_address"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let server = server(AppState::in_memory(TimestampPolicy::Trusted));

        server
            .post("/api/employee")
            .text("{ not json")
            .content_type("application/json")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_code_is_rejected_by_domain() {
        let server = server(AppState::in_memory(TimestampPolicy::Trusted));

        let response = server
            .post("/api/employee/save")
            .json(&json!({ "siteId": "S1", "employeeCode": "   " }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_put_employee_updates_status() {
        let server = server(seeded_state());

        server
            .put("/api/employee/E1")
            .json(&json!({ "siteId": "S1", "employeeCode": "E1", "employeeStatus": "On Leave" }))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let body: Value = server.get("/api/employee/E1").await.json();
        assert_eq!(body["employeeStatus"], "On Leave");
        assert_eq!(body["occupation"], "Engineer");
    }
}

// ============================================================================
// Health and failures
// ============================================================================

mod health_routes {
    use super::*;

    #[tokio::test]
    async fn test_health_is_always_ok() {
        let server = server(AppState::in_memory(TimestampPolicy::Trusted));
        let body: Value = server.get("/health").await.json();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_each_store() {
        let server = server(AppState::in_memory(TimestampPolicy::Trusted));

        let response = server.get("/health/ready").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["stores"].as_array().unwrap().len(), 2);
        assert_eq!(body["stores"][0]["adapter_id"], "memory-company-store");
    }

    #[tokio::test]
    async fn test_failing_store_gives_503_and_500() {
        let companies = RecordingStore::<Company>::new();
        let state = AppState::from_stores(
            Arc::new(companies.clone()),
            Arc::new(MemoryStore::<Employee>::new()),
            TimestampPolicy::Trusted,
        );
        let server = server(state);
        companies.set_failing(true);

        server
            .get("/health/ready")
            .await
            .assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let response = server.get("/api/company").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "store_failure");
        assert_eq!(body["message"], "Internal server error.");
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let server = server(AppState::in_memory(TimestampPolicy::Trusted));
        let response = server.get("/api/employee").await;
        assert!(!response.header("x-request-id").is_empty());
    }
}
