//! Router tests: requests go through the full axum stack, the upstream is mocked

use super::*;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use reqwest::Client;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn app_for(server: &MockServer) -> Router {
    router(AppState::new(SleeperClient::with_client(
        Client::new(),
        &server.uri(),
    )))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[cfg(test)]
mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let server = MockServer::start().await;
        let (status, body) = send(app_for(&server), get_request("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["uptime"].as_f64().unwrap() >= 0.0);
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_routes_are_mounted_under_api_prefix() {
        let server = MockServer::start().await;
        let (status, body) = send(app_for(&server), get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_api_info() {
        let server = MockServer::start().await;
        let (status, body) = send(app_for(&server), get_request("/api")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(body["endpoints"]["health"], "/api/health");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let server = MockServer::start().await;
        let (status, body) = send(app_for(&server), get_request("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "API endpoint not found" }));
    }
}

#[cfg(test)]
mod user_route_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_user_found() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/user/abc_123",
            json!({ "user_id": "42", "username": "abc_123", "display_name": "ABC" }),
        )
        .await;

        let (status, body) = send(app_for(&server), get_request("/sleeper/user/abc_123")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_id"], "42");
        assert_eq!(body["display_name"], "ABC");
    }

    #[tokio::test]
    async fn test_get_user_unknown_is_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (status, body) = send(app_for(&server), get_request("/sleeper/user/ghost")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found" }));
    }

    #[tokio::test]
    async fn test_get_user_invalid_username_is_400() {
        let server = MockServer::start().await;
        let (status, body) = send(app_for(&server), get_request("/sleeper/user/abc%20def")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid username"));
    }

    #[tokio::test]
    async fn test_get_leagues_with_season_override() {
        let server = MockServer::start().await;
        mount_json(&server, "/user/abc_123", json!({ "user_id": "42", "username": "abc_123" })).await;
        mount_json(
            &server,
            "/user/42/leagues/nfl/2022",
            json!([{
                "league_id": "1",
                "name": "Old League",
                "season": "2022",
                "sport": "nfl",
                "status": "complete"
            }]),
        )
        .await;

        let (status, body) = send(
            app_for(&server),
            get_request("/sleeper/user/abc_123/leagues?season=2022"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Old League");
    }

    #[tokio::test]
    async fn test_get_leagues_invalid_season_is_400() {
        let server = MockServer::start().await;
        let (status, body) = send(
            app_for(&server),
            get_request("/sleeper/user/abc_123/leagues?season=22"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid season: 22");
    }

    #[tokio::test]
    async fn test_get_leagues_unknown_user_is_404() {
        let server = MockServer::start().await;
        mount_json(&server, "/user/ghost", json!(null)).await;

        let (status, body) =
            send(app_for(&server), get_request("/sleeper/user/ghost/leagues")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }
}

#[cfg(test)]
mod roster_route_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_roster_found() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/league/77/rosters",
            json!([{ "roster_id": 5, "owner_id": "42", "starters": ["4046"], "players": ["4046"] }]),
        )
        .await;

        let (status, body) = send(app_for(&server), get_request("/sleeper/league/77/roster/42")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roster_id"], 5);
        assert_eq!(body["starters"], json!(["4046"]));
    }

    #[tokio::test]
    async fn test_get_roster_missing_is_404() {
        let server = MockServer::start().await;
        mount_json(&server, "/league/77/rosters", json!([])).await;

        let (status, body) = send(app_for(&server), get_request("/sleeper/league/77/roster/42")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Roster not found for this user" }));
    }

    #[tokio::test]
    async fn test_get_roster_rejects_encoded_path_in_league_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let (status, body) = send(
            app_for(&server),
            get_request("/sleeper/league/x%2F..%2F..%2Fuser%2Fvictim/roster/u"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid league id"));
    }

    #[tokio::test]
    async fn test_get_roster_rejects_encoded_path_in_user_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let (status, body) =
            send(app_for(&server), get_request("/sleeper/league/77/roster/a%2F..%2Fb")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid user id"));
    }
}

#[cfg(test)]
mod players_status_route_tests {
    use super::*;

    #[tokio::test]
    async fn test_players_status_filters_directory() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/players/nfl",
            json!({
                "a": { "player_id": "a", "full_name": "A", "position": "WR", "team": "DAL", "injury_status": "Out" },
                "b": { "player_id": "b", "full_name": "B", "position": "RB", "team": "SF", "injury_status": "active" }
            }),
        )
        .await;

        let (status, body) = send(
            app_for(&server),
            post_json("/sleeper/players/status", r#"{"playerIds":["a","b","c"]}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["player_id"], "a");
    }

    #[tokio::test]
    async fn test_players_status_rejects_bad_bodies() {
        let server = MockServer::start().await;
        for payload in [
            r#"{}"#,
            r#"{"playerIds":[]}"#,
            r#"{"playerIds":"a"}"#,
            r#"{"playerIds":["a", 1]}"#,
            r#"not json"#,
        ] {
            let (status, body) = send(
                app_for(&server),
                post_json("/sleeper/players/status", payload),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
            assert!(body["error"].is_string(), "{payload}");
        }
    }
}

#[cfg(test)]
mod questionable_route_tests {
    use super::*;

    #[tokio::test]
    async fn test_questionable_unknown_user_is_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (status, body) =
            send(app_for(&server), get_request("/sleeper/user/ghost/questionable")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found" }));
    }

    #[tokio::test]
    async fn test_questionable_reports_username_before_season() {
        let server = MockServer::start().await;

        let (status, body) = send(
            app_for(&server),
            get_request("/sleeper/user/abc%20def/questionable?season=22"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid username"));
    }

    #[tokio::test]
    async fn test_questionable_all_healthy_is_empty_list() {
        let server = MockServer::start().await;
        mount_json(&server, "/user/abc_123", json!({ "user_id": "42", "username": "abc_123" })).await;
        mount_json(
            &server,
            "/user/42/leagues/nfl/2024",
            json!([{
                "league_id": "1",
                "name": "Main",
                "season": "2024",
                "sport": "nfl",
                "status": "in_season"
            }]),
        )
        .await;
        mount_json(
            &server,
            "/players/nfl",
            json!({ "a": { "player_id": "a", "full_name": "A", "position": "QB", "team": "BUF" } }),
        )
        .await;
        mount_json(
            &server,
            "/league/1/rosters",
            json!([{ "roster_id": 1, "owner_id": "42", "starters": ["a"], "players": ["a"] }]),
        )
        .await;

        let (status, body) = send(
            app_for(&server),
            get_request("/api/sleeper/user/abc_123/questionable?season=2024"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_questionable_upstream_failure_is_generic_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/abc_123"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let (status, body) = send(
            app_for(&server),
            get_request("/sleeper/user/abc_123/questionable"),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }
}
