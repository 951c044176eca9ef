//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Datelike, Utc};
use integration_tests::{
    assert_json, assert_status, check_test_env, confirmation_code_for, fixtures::*, set_role,
    TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Helpers
// ============================================================================

/// Sign up a fresh user and exchange the mailed code for a token
async fn signup_and_token(server: &TestServer) -> (SignupRequest, String) {
    let request = SignupRequest::unique();
    let response = server.post("/api/v1/auth/signup", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let code = confirmation_code_for(&request.username)
        .await
        .unwrap()
        .expect("signup should store a confirmation code");

    let token_request = TokenRequest {
        username: request.username.clone(),
        confirmation_code: code,
    };
    let response = server.post("/api/v1/auth/token", &token_request).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (request, token.access_token)
}

/// Sign up a user and promote them to admin
async fn admin_token(server: &TestServer) -> (SignupRequest, String) {
    let (request, token) = signup_and_token(server).await;
    set_role(&request.username, "admin").await.unwrap();
    (request, token)
}

/// Sign up a user and promote them to moderator
async fn moderator_token(server: &TestServer) -> (SignupRequest, String) {
    let (request, token) = signup_and_token(server).await;
    set_role(&request.username, "moderator").await.unwrap();
    (request, token)
}

/// Create a title as admin and return its id
async fn create_title(server: &TestServer, admin: &str) -> String {
    let request = CreateTitleRequest::unique();
    let response = server
        .post_auth("/api/v1/titles", admin, &request)
        .await
        .unwrap();
    let title: TitleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    title.id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Signup Flow Tests
// ============================================================================

#[tokio::test]
async fn test_signup_stores_confirmation_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = SignupRequest::unique();

    let response = server.post("/api/v1/auth/signup", &request).await.unwrap();
    let body: SignupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.username, request.username);
    assert_eq!(body.email, request.email);

    let code = confirmation_code_for(&request.username).await.unwrap();
    assert!(code.is_some());
}

#[tokio::test]
async fn test_signup_retry_is_idempotent_and_rotates_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = SignupRequest::unique();

    server.post("/api/v1/auth/signup", &request).await.unwrap();
    let first_code = confirmation_code_for(&request.username).await.unwrap();

    // Same (username, email) pair: accepted again, code regenerated
    let response = server.post("/api/v1/auth/signup", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let second_code = confirmation_code_for(&request.username).await.unwrap();

    assert!(first_code.is_some());
    assert!(second_code.is_some());
    assert_ne!(first_code, second_code);
}

#[tokio::test]
async fn test_signup_email_mismatch_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = SignupRequest::unique();
    server.post("/api/v1/auth/signup", &request).await.unwrap();
    let code_before = confirmation_code_for(&request.username).await.unwrap();

    // Same username, different email: rejected without mutation
    let mismatched = SignupRequest {
        username: request.username.clone(),
        email: format!("other{}@example.com", unique_suffix()),
    };
    let response = server.post("/api/v1/auth/signup", &mismatched).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let code_after = confirmation_code_for(&request.username).await.unwrap();
    assert_eq!(code_before, code_after);
}

#[tokio::test]
async fn test_signup_email_conflict_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = SignupRequest::unique();
    server.post("/api/v1/auth/signup", &request).await.unwrap();

    // Different username, same email
    let conflicting = SignupRequest {
        username: format!("other{}", unique_suffix()),
        email: request.email.clone(),
    };
    let response = server.post("/api/v1/auth/signup", &conflicting).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_signup_reserved_usernames_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    for username in ["me", "admin"] {
        let request = SignupRequest {
            username: username.to_string(),
            email: format!("reserved{}@example.com", unique_suffix()),
        };
        let response = server.post("/api/v1/auth/signup", &request).await.unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }
}

#[tokio::test]
async fn test_signup_invalid_username_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = SignupRequest {
        username: "not a username".to_string(),
        email: format!("bad{}@example.com", unique_suffix()),
    };
    let response = server.post("/api/v1/auth/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Token Issuance Tests
// ============================================================================

#[tokio::test]
async fn test_token_issued_for_valid_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, token) = signup_and_token(&server).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_token_rejected_for_wrong_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = SignupRequest::unique();
    server.post("/api/v1/auth/signup", &request).await.unwrap();

    let token_request = TokenRequest {
        username: request.username.clone(),
        confirmation_code: "WrongCode".to_string(),
    };
    let response = server.post("/api/v1/auth/token", &token_request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_token_rejected_for_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token_request = TokenRequest {
        username: format!("nobody{}", unique_suffix()),
        confirmation_code: "Whatever1".to_string(),
    };
    let response = server.post("/api/v1/auth/token", &token_request).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_token_reusable_until_replaced() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = SignupRequest::unique();
    server.post("/api/v1/auth/signup", &request).await.unwrap();
    let code = confirmation_code_for(&request.username).await.unwrap().unwrap();

    // Issuance does not consume the code
    for _ in 0..2 {
        let token_request = TokenRequest {
            username: request.username.clone(),
            confirmation_code: code.clone(),
        };
        let response = server.post("/api/v1/auth/token", &token_request).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_users_me_roundtrip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (request, token) = signup_and_token(&server).await;

    let response = server.get_auth("/api/v1/users/me", &token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.username, request.username);
    assert_eq!(me.role, "user");

    let response = server
        .patch_auth(
            "/api/v1/users/me",
            &token,
            &serde_json::json!({"bio": "hello"}),
        )
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.bio.as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_users_me_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/users/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_user_directory_is_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, user_token) = signup_and_token(&server).await;
    let (_, admin) = admin_token(&server).await;

    let response = server.get_auth("/api/v1/users", &user_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth("/api/v1/users", &admin).await.unwrap();
    let page: PaginatedResponse<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.pagination.limit > 0);
    assert!(!page.data.is_empty());
}

// ============================================================================
// Catalogue Policy Tests
// ============================================================================

#[tokio::test]
async fn test_catalogue_mutation_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, user_token) = signup_and_token(&server).await;
    let (_, moderator) = moderator_token(&server).await;
    let (_, admin) = admin_token(&server).await;

    let request = CreateCategoryRequest::unique();

    // Anonymous: unauthorized
    let response = server.post("/api/v1/categories", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Regular user and moderator: forbidden
    let response = server
        .post_auth("/api/v1/categories", &user_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/api/v1/categories", &moderator, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Admin: created
    let response = server
        .post_auth("/api/v1/categories", &admin, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_catalogue_listing_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    for path in ["/api/v1/categories", "/api/v1/genres", "/api/v1/titles"] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}

#[tokio::test]
async fn test_duplicate_slug_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, admin) = admin_token(&server).await;

    let request = CreateGenreRequest::unique();
    let response = server
        .post_auth("/api/v1/genres", &admin, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/genres", &admin, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Title Tests
// ============================================================================

#[tokio::test]
async fn test_title_year_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, admin) = admin_token(&server).await;
    let current_year = Utc::now().year();

    // Next year: rejected
    let mut request = CreateTitleRequest::unique();
    request.year = current_year + 1;
    let response = server.post_auth("/api/v1/titles", &admin, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Current year: accepted
    let mut request = CreateTitleRequest::unique();
    request.year = current_year;
    let response = server.post_auth("/api/v1/titles", &admin, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_title_with_category_and_genres() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, admin) = admin_token(&server).await;

    let category = CreateCategoryRequest::unique();
    server.post_auth("/api/v1/categories", &admin, &category).await.unwrap();
    let genre = CreateGenreRequest::unique();
    server.post_auth("/api/v1/genres", &admin, &genre).await.unwrap();

    let mut request = CreateTitleRequest::unique();
    request.category = Some(category.slug.clone());
    request.genre = vec![genre.slug.clone()];

    let response = server.post_auth("/api/v1/titles", &admin, &request).await.unwrap();
    let title: TitleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(title.category.as_ref().map(|c| c.slug.as_str()), Some(category.slug.as_str()));
    assert_eq!(title.genre.len(), 1);
    assert!(title.rating.is_none());

    // Unknown genre slug: rejected
    let mut request = CreateTitleRequest::unique();
    request.genre = vec![format!("missing-{}", unique_suffix())];
    let response = server.post_auth("/api/v1/titles", &admin, &request).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_category_delete_nulls_title_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, admin) = admin_token(&server).await;

    let category = CreateCategoryRequest::unique();
    server.post_auth("/api/v1/categories", &admin, &category).await.unwrap();

    let mut request = CreateTitleRequest::unique();
    request.category = Some(category.slug.clone());
    let response = server.post_auth("/api/v1/titles", &admin, &request).await.unwrap();
    let title: TitleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/categories/{}", category.slug), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The title survives with no category
    let response = server.get(&format!("/api/v1/titles/{}", title.id)).await.unwrap();
    let title: TitleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(title.category.is_none());
}

// ============================================================================
// Review Tests
// ============================================================================

#[tokio::test]
async fn test_review_unique_per_title_and_author() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, admin) = admin_token(&server).await;
    let (_, alice) = signup_and_token(&server).await;
    let (_, bob) = signup_and_token(&server).await;

    let title_id = create_title(&server, &admin).await;
    let reviews_path = format!("/api/v1/titles/{title_id}/reviews");

    let request = CreateReviewRequest {
        text: "Excellent".to_string(),
        score: 9,
    };
    let response = server.post_auth(&reviews_path, &alice, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Second review by the same author: conflict
    let response = server.post_auth(&reviews_path, &alice, &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Different author: accepted
    let request = CreateReviewRequest {
        text: "Average".to_string(),
        score: 5,
    };
    let response = server.post_auth(&reviews_path, &bob, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same author, different title: accepted
    let other_title = create_title(&server, &admin).await;
    let request = CreateReviewRequest {
        text: "Also fine".to_string(),
        score: 7,
    };
    let response = server
        .post_auth(&format!("/api/v1/titles/{other_title}/reviews"), &alice, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_title_rating_is_average_of_scores() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, admin) = admin_token(&server).await;
    let (_, alice) = signup_and_token(&server).await;
    let (_, bob) = signup_and_token(&server).await;

    let title_id = create_title(&server, &admin).await;
    let reviews_path = format!("/api/v1/titles/{title_id}/reviews");

    server
        .post_auth(&reviews_path, &alice, &CreateReviewRequest { text: "great".into(), score: 8 })
        .await
        .unwrap();
    server
        .post_auth(&reviews_path, &bob, &CreateReviewRequest { text: "meh".into(), score: 5 })
        .await
        .unwrap();

    let response = server.get(&format!("/api/v1/titles/{title_id}")).await.unwrap();
    let title: TitleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(title.rating, Some(6.5));
}

#[tokio::test]
async fn test_review_score_bounds_enforced() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, admin) = admin_token(&server).await;
    let (_, alice) = signup_and_token(&server).await;

    let title_id = create_title(&server, &admin).await;
    let reviews_path = format!("/api/v1/titles/{title_id}/reviews");

    for score in [0, 11] {
        let request = CreateReviewRequest {
            text: "out of range".to_string(),
            score,
        };
        let response = server.post_auth(&reviews_path, &alice, &request).await.unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }
}

#[tokio::test]
async fn test_review_object_policy() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, admin) = admin_token(&server).await;
    let (_, alice) = signup_and_token(&server).await;
    let (_, bob) = signup_and_token(&server).await;
    let (_, moderator) = moderator_token(&server).await;

    let title_id = create_title(&server, &admin).await;
    let reviews_path = format!("/api/v1/titles/{title_id}/reviews");

    let response = server
        .post_auth(
            &reviews_path,
            &alice,
            &CreateReviewRequest { text: "mine".into(), score: 6 },
        )
        .await
        .unwrap();
    let review: ReviewResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let review_path = format!("{reviews_path}/{}", review.id);

    // A stranger cannot edit it
    let response = server
        .patch_auth(&review_path, &bob, &serde_json::json!({"score": 1}))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The author can
    let response = server
        .patch_auth(&review_path, &alice, &serde_json::json!({"score": 7}))
        .await
        .unwrap();
    let updated: ReviewResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.score, 7);
    // Partial edits never reset the creation timestamp
    assert_eq!(updated.pub_date, review.pub_date);

    // A moderator can delete someone else's review
    let response = server.delete_auth(&review_path, &moderator).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_anonymous_can_read_reviews_but_not_write() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, admin) = admin_token(&server).await;
    let title_id = create_title(&server, &admin).await;
    let reviews_path = format!("/api/v1/titles/{title_id}/reviews");

    let response = server.get(&reviews_path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post(&reviews_path, &CreateReviewRequest { text: "anon".into(), score: 5 })
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle_and_cascade() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let (_, admin) = admin_token(&server).await;
    let (_, alice) = signup_and_token(&server).await;
    let (_, bob) = signup_and_token(&server).await;

    let title_id = create_title(&server, &admin).await;
    let reviews_path = format!("/api/v1/titles/{title_id}/reviews");

    let response = server
        .post_auth(
            &reviews_path,
            &alice,
            &CreateReviewRequest { text: "discuss".into(), score: 8 },
        )
        .await
        .unwrap();
    let review: ReviewResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let comments_path = format!("{reviews_path}/{}/comments", review.id);

    // Bob comments on Alice's review
    let response = server
        .post_auth(&comments_path, &bob, &CreateCommentRequest { text: "agreed".into() })
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Alice cannot edit Bob's comment
    let comment_path = format!("{comments_path}/{}", comment.id);
    let response = server
        .patch_auth(&comment_path, &alice, &serde_json::json!({"text": "edited"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Deleting the title cascades to the review and its comments
    let response = server
        .delete_auth(&format!("/api/v1/titles/{title_id}"), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/v1/titles/{title_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
