//! HTTP-level tests driving the router in-process.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use cyberguardian::config::IdStrategy;
use cyberguardian::storage::{SequentialIdGenerator, Store};
use cyberguardian::web::{AppState, ConfigInfo, router};

fn test_router() -> Router {
    let store = Store::new(Box::new(SequentialIdGenerator::new()));
    let config = ConfigInfo {
        port: 3000,
        bind_address: "127.0.0.1".to_string(),
        health_port: 0,
        log_format: "pretty".to_string(),
        log_level: "debug".to_string(),
        id_strategy: IdStrategy::Sequential,
    };
    router(AppState::new(store, config))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a request and decode the body as JSON (`Null` when empty)
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn threat_body(title: &str, severity: &str, category: &str) -> Value {
    json!({
        "title": title,
        "description": "Deceptive messages that steal credentials",
        "severity": severity,
        "category": category,
        "mitigation": "Security awareness training",
        "tags": ["email", "social-engineering"]
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_router();
    let (status, body) = send(&app, get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn test_create_then_get_threat() {
    let app = test_router();

    let (status, created) = send(
        &app,
        json_request(
            Method::POST,
            "/api/threats",
            threat_body("Phishing Attacks", "high", "Social Engineering"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "1");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let (status, fetched) = send(&app, get_request("/api/threats/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_unknown_threat() {
    let app = test_router();
    let (status, body) = send(&app, get_request("/api/threats/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Threat not found");
}

#[tokio::test]
async fn test_delete_twice() {
    let app = test_router();
    let (_, created) = send(
        &app,
        json_request(
            Method::POST,
            "/api/glossary",
            json!({
                "term": "Firewall",
                "definition": "Filters network traffic",
                "category": "Network Security",
                "relatedTerms": ["IDS"]
            }),
        ),
    )
    .await;
    let uri = format!("/api/glossary/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, delete_request(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, delete_request(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Glossary term not found");
}

#[tokio::test]
async fn test_patch_unknown_id() {
    let app = test_router();
    let (status, body) = send(
        &app,
        json_request(Method::PATCH, "/api/blog/42", json!({ "published": true })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Blog post not found");
}

#[tokio::test]
async fn test_patch_merges_fields() {
    let app = test_router();
    let _ = send(
        &app,
        json_request(
            Method::POST,
            "/api/threats",
            threat_body("Ransomware", "high", "Malware"),
        ),
    )
    .await;

    let (status, updated) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/threats/1",
            json!({ "severity": "critical" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["severity"], "critical");
    assert_eq!(updated["title"], "Ransomware");
}

#[tokio::test]
async fn test_invalid_severity_is_rejected() {
    let app = test_router();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/threats",
            threat_body("Zero-day", "extreme", "Exploits"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid data");
    assert!(body["details"].is_object());
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let app = test_router();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/tools",
            json!({ "description": "no name", "category": "Assessment" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid data");
}

#[tokio::test]
async fn test_empty_title_reports_field() {
    let app = test_router();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/threats",
            threat_body("", "low", "Malware"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["title"][0]["code"], "length");
}

#[tokio::test]
async fn test_tool_routes_and_filters() {
    let app = test_router();
    for (name, active) in [("Password Strength Checker", true), ("Legacy Scanner", false)] {
        let (status, _) = send(
            &app,
            json_request(
                Method::POST,
                "/api/tools",
                json!({
                    "name": name,
                    "description": "",
                    "category": "Assessment",
                    "icon": "Shield",
                    "isActive": active,
                    "features": []
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get_request("/api/tools?active=true")).await;
    assert_eq!(status, StatusCode::OK);
    let tools = body.as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "Password Strength Checker");
    assert!(tools[0].get("url").is_none());

    let (_, body) = send(&app, get_request("/api/tools?category=assessment")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_threat_search_filter() {
    let app = test_router();
    for (title, severity) in [("SQL Injection", "high"), ("Phishing", "medium")] {
        let _ = send(
            &app,
            json_request(
                Method::POST,
                "/api/threats",
                threat_body(title, severity, "Web Application"),
            ),
        )
        .await;
    }

    let (_, body) = send(&app, get_request("/api/threats?search=sql")).await;
    let found = body.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["title"], "SQL Injection");

    let (_, body) = send(&app, get_request("/api/threats?severity=medium")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_password_check() {
    let app = test_router();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/tools/password-check",
            json!({ "password": "Abc12345!" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 5);
    assert_eq!(body["strength"], "Very Strong");
    assert_eq!(body["color"], "green");

    let (_, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/tools/password-check",
            json!({ "password": "abc" }),
        ),
    )
    .await;
    assert_eq!(body["score"], 1);
    assert_eq!(body["strength"], "Very Weak");
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_password_required() {
    let app = test_router();
    for payload in [json!({}), json!({ "password": "" })] {
        let (status, body) = send(
            &app,
            json_request(Method::POST, "/api/tools/password-check", payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Password is required");
    }
}

#[tokio::test]
async fn test_vulnerability_scan() {
    let app = test_router();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/tools/vulnerability-scan",
            json!({ "target": "https://example.com" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["target"], "https://example.com");
    assert_eq!(body["vulnerabilities"].as_array().unwrap().len(), 3);
    assert_eq!(body["summary"]["total"], 3);

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/tools/vulnerability-scan", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Target is required");
}

#[tokio::test]
async fn test_analytics_totals() {
    let app = test_router();
    for (date, threats, incidents, resolved, pending) in
        [("2024-01", 45, 12, 10, 2), ("2024-02", 52, 15, 13, 2)]
    {
        let (status, _) = send(
            &app,
            json_request(
                Method::POST,
                "/api/analytics",
                json!({
                    "date": date,
                    "threats": threats,
                    "incidents": incidents,
                    "resolved": resolved,
                    "pending": pending
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, samples) = send(&app, get_request("/api/analytics")).await;
    assert_eq!(samples.as_array().unwrap().len(), 2);

    let (status, summary) = send(&app, get_request("/api/analytics/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["samples"], 2);
    assert_eq!(summary["totals"]["threats"], 97);
    assert_eq!(summary["totals"]["incidents"], 27);
    assert_eq!(summary["totals"]["resolved"], 23);
    assert_eq!(summary["totals"]["pending"], 4);
}

#[tokio::test]
async fn test_negative_analytics_count_is_rejected() {
    let app = test_router();
    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/analytics",
            json!({
                "date": "2024-01",
                "threats": -5,
                "incidents": 0,
                "resolved": 0,
                "pending": 0
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = test_router();
    let (status, body) = send(&app, get_request("/api/nothing-here")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_status_counts_records() {
    let app = test_router();
    let _ = send(
        &app,
        json_request(
            Method::POST,
            "/api/blog",
            json!({
                "title": "Zero Trust in Practice",
                "content": "...",
                "excerpt": "...",
                "author": "Security Team",
                "tags": ["zero-trust"],
                "published": false
            }),
        ),
    )
    .await;

    let (status, body) = send(&app, get_request("/api/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["records"]["blogPosts"], 1);
    assert_eq!(body["records"]["threats"], 0);
}

#[tokio::test]
async fn test_config_endpoint() {
    let app = test_router();
    let (status, body) = send(&app, get_request("/api/config")).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    let health = items.iter().find(|i| i["env"] == "HEALTH_PORT").unwrap();
    assert_eq!(health["value"], "disabled");
    let ids = items.iter().find(|i| i["env"] == "ID_STRATEGY").unwrap();
    assert_eq!(ids["value"], "sequential");
}

#[tokio::test]
async fn test_openapi_document() {
    let app = test_router();
    let (status, body) = send(&app, get_request("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/threats/{id}").is_some());
    assert!(body["paths"].get("/api/tools/password-check").is_some());
}

#[tokio::test]
async fn test_rejected_query_parameters_use_json_body() {
    let app = test_router();
    for uri in [
        "/api/threats?severity=extreme",
        "/api/tools?active=yes",
        "/api/blog?published=maybe",
    ] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
            "{uri}"
        );

        let (status, body) = send(&app, get_request(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid data");
        assert_eq!(body["details"]["query"][0]["code"], "invalid_query");
    }
}

#[tokio::test]
async fn test_whitespace_scan_target_is_accepted() {
    let app = test_router();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/tools/vulnerability-scan",
            json!({ "target": "   " }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["target"], "   ");

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/tools/vulnerability-scan",
            json!({ "target": "" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Target is required");
}

#[tokio::test]
async fn test_null_optional_fields_are_treated_as_absent() {
    let app = test_router();
    let (status, created) = send(
        &app,
        json_request(
            Method::POST,
            "/api/tools",
            json!({
                "name": "Port Scanner",
                "description": "",
                "category": "Assessment",
                "icon": "Radar",
                "url": null,
                "isActive": true,
                "features": []
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("url").is_none());

    let uri = format!("/api/tools/{}", created["id"].as_str().unwrap());
    let (status, updated) = send(
        &app,
        json_request(Method::PATCH, &uri, json!({ "name": null, "isActive": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Port Scanner");
    assert_eq!(updated["isActive"], false);
}

#[tokio::test]
async fn test_unsupported_method_returns_json() {
    let app = test_router();
    let (status, body) = send(&app, get_request("/api/tools/password-check")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");

    let (status, body) = send(&app, delete_request("/api/analytics")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}
