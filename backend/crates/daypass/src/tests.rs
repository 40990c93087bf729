//! Unit tests for the daypass crate

#[cfg(test)]
mod code_vectors {
    use crate::domain::code::derive_daily_code;

    // Cross-implementation conformance vectors: HMAC-SHA-256, hex
    // digits only, zero-padded. The bot-side derivation must agree.
    #[test]
    fn test_pinned_vector() {
        assert_eq!(
            derive_daily_code("42", "2024-01-01", "s3cret", 6).unwrap(),
            "857983"
        );
    }

    #[test]
    fn test_determinism() {
        let a = derive_daily_code("42", "2024-01-01", "s3cret", 6);
        let b = derive_daily_code("42", "2024-01-01", "s3cret", 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sensitivity() {
        // Changing subject, day, or secret changes the code
        assert_eq!(
            derive_daily_code("43", "2024-01-01", "s3cret", 6).unwrap(),
            "285840"
        );
        assert_eq!(
            derive_daily_code("42", "2024-01-02", "s3cret", 6).unwrap(),
            "534482"
        );
        assert_eq!(
            derive_daily_code("42", "2024-01-01", "other", 6).unwrap(),
            "899192"
        );
    }

    #[test]
    fn test_zero_padding_when_digest_is_digit_poor() {
        // A 64-char hex digest never yields 64 decimal digits, so a
        // request longer than the digit count exercises the padding.
        let code = derive_daily_code("42", "2024-01-01", "s3cret", 64).unwrap();
        assert_eq!(code.len(), 64);
        assert!(code.ends_with("00"), "short digit strings pad with zeros");
    }
}

#[cfg(test)]
mod verify_use_case {
    use crate::application::config::DaypassConfig;
    use crate::application::{VerifyCodeInput, VerifyCodeUseCase};
    use crate::domain::token;
    use crate::error::DaypassError;
    use chrono::{DateTime, Utc};
    use std::sync::Arc;

    const KEY: [u8; 32] = [7u8; 32];

    fn config_with_secret() -> Arc<DaypassConfig> {
        Arc::new(DaypassConfig {
            shared_secret: Some("s3cret".to_string()),
            signing_key: KEY,
            ..Default::default()
        })
    }

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_correct_code_issues_valid_token() {
        let use_case = VerifyCodeUseCase::new(config_with_secret());
        let now = at("2024-01-01T10:00:00Z");

        let output = use_case
            .execute(
                VerifyCodeInput {
                    subject_id: "42".to_string(),
                    code: "857983".to_string(),
                },
                now,
            )
            .unwrap();

        assert_eq!(output.expires_at, at("2024-01-02T00:00:00Z"));

        let claims = token::validate(&output.token, now, &KEY).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.day, "2024-01-01");
    }

    #[test]
    fn test_submitted_code_is_normalized() {
        let use_case = VerifyCodeUseCase::new(config_with_secret());
        let result = use_case.execute(
            VerifyCodeInput {
                subject_id: "42".to_string(),
                code: " 857 983 ".to_string(),
            },
            at("2024-01-01T10:00:00Z"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_wrong_code_rejected() {
        let use_case = VerifyCodeUseCase::new(config_with_secret());
        let result = use_case.execute(
            VerifyCodeInput {
                subject_id: "42".to_string(),
                code: "000000".to_string(),
            },
            at("2024-01-01T10:00:00Z"),
        );
        assert!(matches!(result, Err(DaypassError::InvalidCode)));
    }

    #[test]
    fn test_yesterdays_code_rejected_after_rollover() {
        let use_case = VerifyCodeUseCase::new(config_with_secret());
        let result = use_case.execute(
            VerifyCodeInput {
                subject_id: "42".to_string(),
                code: "857983".to_string(),
            },
            at("2024-01-02T00:00:00Z"),
        );
        assert!(matches!(result, Err(DaypassError::InvalidCode)));
    }

    #[test]
    fn test_missing_secret_fails_closed() {
        let use_case = VerifyCodeUseCase::new(Arc::new(DaypassConfig {
            signing_key: KEY,
            ..Default::default()
        }));
        let result = use_case.execute(
            VerifyCodeInput {
                subject_id: "42".to_string(),
                code: "857983".to_string(),
            },
            at("2024-01-01T10:00:00Z"),
        );
        assert!(matches!(result, Err(DaypassError::MissingSecret)));
    }
}

#[cfg(test)]
mod http_surface {
    use crate::application::config::DaypassConfig;
    use crate::domain::code::derive_daily_code;
    use crate::domain::day::day_key;
    use crate::domain::token;
    use crate::presentation::middleware::{
        AuthSubject, DaypassMiddlewareState, require_daily_session,
    };
    use crate::presentation::router::daypass_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::{Extension, Router, routing::get};
    use chrono::Utc;
    use platform::rate_limit::RateLimitConfig;
    use std::sync::Arc;
    use tower::ServiceExt;

    const KEY: [u8; 32] = [7u8; 32];

    fn config() -> Arc<DaypassConfig> {
        Arc::new(DaypassConfig {
            shared_secret: Some("s3cret".to_string()),
            signing_key: KEY,
            ..Default::default()
        })
    }

    fn todays_code(subject: &str) -> String {
        derive_daily_code(subject, &day_key(Utc::now()), "s3cret", 6).unwrap()
    }

    async fn post_verify(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/verify")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_verify_success() {
        let app = daypass_router(config());
        let (status, body) = post_verify(
            app,
            serde_json::json!({ "subjectId": "42", "code": todays_code("42") }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let bearer = body["token"].as_str().unwrap();
        let claims = token::validate(bearer, Utc::now(), &KEY).unwrap();
        assert_eq!(claims.sub, "42");
        assert!(body["expiresAtUtc"].as_str().unwrap().ends_with("T00:00:00.000Z"));
    }

    #[tokio::test]
    async fn test_verify_missing_fields() {
        let app = daypass_router(config());
        let (status, body) = post_verify(app, serde_json::json!({ "subjectId": "42" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing_fields");
    }

    #[tokio::test]
    async fn test_verify_wrong_code() {
        let app = daypass_router(config());
        let (status, body) =
            post_verify(app, serde_json::json!({ "subjectId": "42", "code": "000000" })).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid_code");
    }

    #[tokio::test]
    async fn test_verify_missing_secret() {
        let app = daypass_router(Arc::new(DaypassConfig {
            signing_key: KEY,
            ..Default::default()
        }));
        let (status, body) =
            post_verify(app, serde_json::json!({ "subjectId": "42", "code": "857983" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "missing_bot_secret");
    }

    #[tokio::test]
    async fn test_verify_rate_limited() {
        let app = daypass_router(Arc::new(DaypassConfig {
            shared_secret: Some("s3cret".to_string()),
            signing_key: KEY,
            verify_rate_limit: RateLimitConfig::new(2, 60),
            ..Default::default()
        }));

        for _ in 0..2 {
            let (status, _) = post_verify(
                app.clone(),
                serde_json::json!({ "subjectId": "42", "code": "000000" }),
            )
            .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
        }

        let (status, body) = post_verify(
            app,
            serde_json::json!({ "subjectId": "42", "code": "000000" }),
        )
        .await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"], "too_many_attempts");
    }

    fn protected_app() -> Router {
        let state = DaypassMiddlewareState { config: config() };
        Router::new()
            .route(
                "/protected",
                get(|Extension(subject): Extension<AuthSubject>| async move { subject.subject_id }),
            )
            .layer(axum::middleware::from_fn(move |req, next| {
                let state = state.clone();
                async move { require_daily_session(state, req, next).await }
            }))
    }

    async fn get_protected(app: Router, bearer: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method("GET").uri("/protected");
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_middleware_missing_token() {
        let (status, body) = get_protected(protected_app(), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "missing_token");
    }

    #[tokio::test]
    async fn test_middleware_garbage_token() {
        let (status, body) = get_protected(protected_app(), Some("not-a-token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "invalid_token");
    }

    #[tokio::test]
    async fn test_middleware_attaches_subject() {
        let (bearer, _) = token::issue("42", Utc::now(), &KEY);
        let (status, body) = get_protected(protected_app(), Some(&bearer)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"42");
    }

    #[tokio::test]
    async fn test_middleware_rejects_wrong_key_token() {
        let (bearer, _) = token::issue("42", Utc::now(), &[9u8; 32]);
        let (status, _) = get_protected(protected_app(), Some(&bearer)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
