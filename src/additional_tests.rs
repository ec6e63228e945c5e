#[cfg(test)]
mod additional_coverage_tests {
    use crate::config::AppConfig;
    use crate::openapi::ApiDoc;
    use crate::routes;
    use actix_web::{App, test, web::Data};
    use serde_json::Value;
    use utoipa::OpenApi;

    fn staging_config() -> AppConfig {
        AppConfig {
            port: 4000,
            version: "2.3.1".to_string(),
            environment: "staging".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_both_endpoints_report_same_environment() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(staging_config()))
                .configure(routes::configure),
        )
        .await;

        let root_req = test::TestRequest::get().uri("/").to_request();
        let root_body: Value = test::read_body_json(test::call_service(&app, root_req).await).await;

        let health_req = test::TestRequest::get().uri("/health").to_request();
        let health_body: Value =
            test::read_body_json(test::call_service(&app, health_req).await).await;

        assert_eq!(root_body["environment"], "staging");
        assert_eq!(
            root_body["environment"], health_body["environment"],
            "Both endpoints should report the same environment"
        );
    }

    #[actix_web::test]
    async fn test_default_configuration_end_to_end() {
        let defaults = AppConfig {
            port: 3000,
            version: "1.0.0".to_string(),
            environment: "unknown".to_string(),
        };
        let app = test::init_service(
            App::new()
                .app_data(Data::new(defaults))
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["environment"], "unknown");
    }

    #[actix_web::test]
    async fn test_unknown_route_returns_404() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(staging_config()))
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/does-not-exist").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404, "Unmatched routes should return 404");

        let body = test::read_body(resp).await;
        assert!(body.is_empty(), "Default 404 carries an empty body");
    }

    #[::core::prelude::v1::test]
    fn test_openapi_document_lists_contract_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi())
            .expect("OpenAPI document should serialize to JSON");

        assert!(
            doc["paths"].get("/").is_some(),
            "OpenAPI document should describe the root endpoint"
        );
        assert!(
            doc["paths"].get("/health").is_some(),
            "OpenAPI document should describe the health endpoint"
        );
        assert!(
            doc["components"]["schemas"].get("DeploymentInfo").is_some(),
            "DeploymentInfo schema should be registered"
        );
        assert!(
            doc["components"]["schemas"].get("HealthStatus").is_some(),
            "HealthStatus schema should be registered"
        );
    }
}
