//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{
    admin_token, assert_error, assert_json, assert_status, check_test_env, create_code,
    fixtures::*, register_player, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let registered: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.user.username, request.username);
    assert_eq!(registered.token_type, "Bearer");
    assert!(!registered.user.is_admin);

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let logged_in: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logged_in.user.id, registered.user.id);
    assert!(logged_in.expires_in > 0);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/auth/register", &request).await.unwrap();

    let duplicate = RegisterRequest {
        email: request.email.clone(),
        ..RegisterRequest::unique()
    };
    let response = server.post("/api/auth/register", &duplicate).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_TAKEN");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass1".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Scan and Claim Tests
// ============================================================================

#[tokio::test]
async fn test_scan_and_claim_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await.unwrap();
    let code = create_code(&server, &admin, 25).await.unwrap();
    let player = register_player(&server).await.unwrap();

    // resolving is public and case-insensitive
    let path = format!("/api/qr/{}", code.code.to_lowercase());
    let response = server.get(&path).await.unwrap();
    let view: CodeViewResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.id, code.id);
    assert_eq!(view.found_count, 0);

    let claim_path = format!("/api/qr/{}/claim", code.code);
    let response = server
        .post_auth_empty(&claim_path, &player.access_token)
        .await
        .unwrap();
    let claimed: ClaimResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(claimed.claim.code_id, code.id);
    assert_eq!(claimed.user_totals.total_found, 1);
    assert_eq!(claimed.user_totals.total_points, 25);
    assert!(claimed.message.contains(&code.name));

    let response = server
        .post_auth_empty(&claim_path, &player.access_token)
        .await
        .unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err, "ALREADY_CLAIMED");

    let response = server.get(&path).await.unwrap();
    let view: CodeViewResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.found_count, 1);
    assert_eq!(view.claims[0]["user_id"], player.user.id.as_str());
    assert!(view.claims[0].get("username").is_none());
}

#[tokio::test]
async fn test_unknown_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let player = register_player(&server).await.unwrap();

    let response = server.get("/api/qr/NO-SUCH-CODE-EVER").await.unwrap();
    let err = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err, "UNKNOWN_CODE");

    let response = server
        .post_auth_empty("/api/qr/NO-SUCH-CODE-EVER/claim", &player.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_inactive_code_cannot_be_claimed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await.unwrap();
    let code = create_code(&server, &admin, 10).await.unwrap();
    let early = register_player(&server).await.unwrap();
    let late = register_player(&server).await.unwrap();
    let claim_path = format!("/api/qr/{}/claim", code.code);

    server
        .post_auth_empty(&claim_path, &early.access_token)
        .await
        .unwrap();

    let response = server
        .patch_auth(&format!("/api/admin/qr-codes/{}/toggle-active", code.id), &admin)
        .await
        .unwrap();
    let toggled: AdminCodeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggled.is_active);

    let response = server
        .post_auth_empty(&claim_path, &late.access_token)
        .await
        .unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err, "CODE_INACTIVE");

    // points already earned stay
    let response = server
        .get_auth("/api/user/stats", &early.access_token)
        .await
        .unwrap();
    let stats: UserStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_points, 10);

    let response = server.get_auth("/api/qr/all", &late.access_token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let listed = body["codes"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"] == code.id.as_str());
    assert!(!listed);
}

#[tokio::test]
async fn test_concurrent_claims_single_winner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await.unwrap();
    let code = create_code(&server, &admin, 10).await.unwrap();
    let player = register_player(&server).await.unwrap();
    let claim_path = format!("/api/qr/{}/claim", code.code);

    let attempts = (0..8).map(|_| server.post_auth_empty(&claim_path, &player.access_token));
    let statuses: Vec<StatusCode> = join_all(attempts)
        .await
        .into_iter()
        .map(|r| r.unwrap().status())
        .collect();

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::BAD_REQUEST).count(),
        7
    );

    let response = server
        .get_auth("/api/user/stats", &player.access_token)
        .await
        .unwrap();
    let stats: UserStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_found, 1);
    assert_eq!(stats.total_points, 10);
}

// ============================================================================
// Player and Leaderboard Tests
// ============================================================================

#[tokio::test]
async fn test_stats_history_and_leaderboard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await.unwrap();
    let small = create_code(&server, &admin, 5).await.unwrap();
    let big = create_code(&server, &admin, 500).await.unwrap();
    let leader = register_player(&server).await.unwrap();
    let trailer = register_player(&server).await.unwrap();

    for code in [&small, &big] {
        server
            .post_auth_empty(&format!("/api/qr/{}/claim", code.code), &leader.access_token)
            .await
            .unwrap();
    }
    server
        .post_auth_empty(&format!("/api/qr/{}/claim", small.code), &trailer.access_token)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/user/found-codes", &leader.access_token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let history: Vec<&str> = body["found_codes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["code"].as_str())
        .collect();
    assert_eq!(history, vec![big.code.as_str(), small.code.as_str()]);

    let response = server
        .get_auth("/api/user/stats", &leader.access_token)
        .await
        .unwrap();
    let leader_stats: UserStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let response = server
        .get_auth("/api/user/stats", &trailer.access_token)
        .await
        .unwrap();
    let trailer_stats: UserStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(leader_stats.total_points, 505);
    assert_eq!(leader_stats.found_codes.len(), 2);
    assert!(leader_stats.rank < trailer_stats.rank);

    let response = server.get("/api/leaderboard").await.unwrap();
    let board: LeaderboardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(board.total_players, board.leaderboard.len());
    let ranks: Vec<u32> = board.leaderboard.iter().map(|e| e.rank).collect();
    assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    let points: Vec<i64> = board.leaderboard.iter().map(|e| e.total_points).collect();
    assert!(points.windows(2).all(|w| w[0] >= w[1]));

    let leader_entry = board
        .leaderboard
        .iter()
        .find(|e| e.user_id == leader.user.id)
        .unwrap();
    assert_eq!(leader_entry.rank, leader_stats.rank);
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_routes_reject_players() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let player = register_player(&server).await.unwrap();

    for path in ["/api/admin/stats", "/api/admin/users", "/api/admin/qr-codes"] {
        let response = server.get_auth(path, &player.access_token).await.unwrap();
        let err = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
        assert_eq!(err, "INSUFFICIENT_PERMISSIONS");
    }

    let response = server.get("/api/admin/stats").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_code_management() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await.unwrap();
    let code = create_code(&server, &admin, 10).await.unwrap();
    assert!(code.is_active);
    assert_eq!(code.found_count, 0);

    let duplicate = CreateCodeRequest {
        code: code.code.to_lowercase(),
        ..CreateCodeRequest::unique(10)
    };
    let response = server
        .post_auth("/api/admin/qr-codes", &admin, &duplicate)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/admin/qr-codes/{}", code.id),
            &admin,
            &serde_json::json!({ "points": 40, "name": "Renamed" }),
        )
        .await
        .unwrap();
    let updated: AdminCodeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.points, 40);
    assert_eq!(updated.name, "Renamed");

    let player = register_player(&server).await.unwrap();
    server
        .post_auth_empty(&format!("/api/qr/{}/claim", code.code), &player.access_token)
        .await
        .unwrap();

    let response = server.get_auth("/api/admin/qr-codes", &admin).await.unwrap();
    let codes: Vec<AdminCodeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let listed = codes.iter().find(|c| c.id == code.id).unwrap();
    assert_eq!(listed.claimants.len(), 1);
    assert_eq!(listed.claimants[0].user_id, player.user.id);
    assert_eq!(listed.claimants[0].username, player.user.username);

    let response = server
        .delete_auth(&format!("/api/admin/qr-codes/{}", code.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // the claim went with the code
    let response = server
        .get_auth("/api/user/stats", &player.access_token)
        .await
        .unwrap();
    let stats: UserStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_points, 0);

    let response = server
        .delete_auth(&format!("/api/admin/qr-codes/{}", code.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .delete_auth("/api/admin/qr-codes/not-a-number", &admin)
        .await
        .unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_admin_user_management() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await.unwrap();
    let player = register_player(&server).await.unwrap();

    let response = server.get_auth("/api/admin/users", &admin).await.unwrap();
    let users: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let admin_id = users
        .iter()
        .find(|u| u["email"] == integration_tests::TEST_ADMIN_EMAIL)
        .and_then(|u| u["id"].as_str())
        .map(String::from)
        .unwrap();
    assert!(users.iter().any(|u| u["id"] == player.user.id.as_str()));

    let response = server
        .delete_auth(&format!("/api/admin/users/{admin_id}"), &admin)
        .await
        .unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err, "CANNOT_DELETE_SELF");

    let response = server
        .delete_auth(&format!("/api/admin/users/{}", player.user.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // the deleted player's token no longer works
    let response = server
        .get_auth("/api/user/stats", &player.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/api/admin/stats", &admin).await.unwrap();
    let stats: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stats["total_users"].as_i64().unwrap() >= 1);
    assert!(stats["top_users"].as_array().unwrap().len() <= 5);
}
