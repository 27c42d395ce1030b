//! Crate-level tests for the auth use cases, router and bearer gate
//! (in-memory repository, no database)

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::{
        AuthConfig, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, TokenIssuer,
        TokenVerifier,
    };
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryAuthRepository;

    struct Fixture {
        repo: Arc<InMemoryAuthRepository>,
        config: Arc<AuthConfig>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                repo: Arc::new(InMemoryAuthRepository::new()),
                config: Arc::new(AuthConfig::development().with_pepper(b"test-pepper".to_vec())),
            }
        }

        fn sign_up(&self) -> SignUpUseCase<InMemoryAuthRepository> {
            SignUpUseCase::new(self.repo.clone(), self.config.clone())
        }

        fn sign_in(&self) -> SignInUseCase<InMemoryAuthRepository> {
            SignInUseCase::new(
                self.repo.clone(),
                Arc::new(TokenIssuer::new(&self.config)),
                self.config.clone(),
            )
        }
    }

    fn input(user_name: &str, password: &str) -> SignUpInput {
        SignUpInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    fn login(user_name: &str, password: &str) -> SignInInput {
        SignInInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_then_authenticate() {
        let fx = Fixture::new();

        let created = fx.sign_up().execute(input("alice", "secret123")).await.unwrap();
        assert_eq!(created.user_name, "alice");

        let identity = fx
            .sign_in()
            .authenticate(login("alice", "secret123"))
            .await
            .unwrap();
        assert_eq!(identity, created);
    }

    #[tokio::test]
    async fn test_user_name_is_case_insensitive() {
        let fx = Fixture::new();
        fx.sign_up().execute(input("Alice", "secret123")).await.unwrap();

        let identity = fx
            .sign_in()
            .authenticate(login("ALICE", "secret123"))
            .await
            .unwrap();
        assert_eq!(identity.user_name, "alice");
    }

    #[tokio::test]
    async fn test_duplicate_user_name_rejected() {
        let fx = Fixture::new();
        fx.sign_up().execute(input("alice", "secret123")).await.unwrap();

        let result = fx.sign_up().execute(input("ALICE", "another-password")).await;
        assert!(matches!(result, Err(AuthError::UserNameTaken)));
    }

    #[tokio::test]
    async fn test_sign_up_validation() {
        let fx = Fixture::new();

        let result = fx.sign_up().execute(input("a", "secret123")).await;
        assert!(matches!(result, Err(AuthError::InvalidUserName(_))));

        let result = fx.sign_up().execute(input("alice", "short")).await;
        assert!(matches!(result, Err(AuthError::PasswordValidation(_))));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_fail_alike() {
        let fx = Fixture::new();
        fx.sign_up().execute(input("alice", "secret123")).await.unwrap();

        let wrong = fx.sign_in().authenticate(login("alice", "wrong")).await;
        let unknown = fx.sign_in().authenticate(login("bob", "secret123")).await;
        let malformed = fx.sign_in().authenticate(login("!", "secret123")).await;

        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
        assert!(matches!(malformed, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_sign_in_issues_verifiable_token() {
        let fx = Fixture::new();
        let created = fx.sign_up().execute(input("alice", "secret123")).await.unwrap();

        let output = fx.sign_in().execute(login("alice", "secret123")).await.unwrap();
        assert!(!output.token.token.is_empty());

        let identity = TokenVerifier::new(&fx.config)
            .verify(&output.token.token)
            .unwrap();
        assert_eq!(identity, created);
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::AuthConfig;
    use crate::infra::memory::InMemoryAuthRepository;
    use crate::presentation::router::auth_router_generic;

    fn app() -> Router {
        auth_router_generic(
            InMemoryAuthRepository::new(),
            Arc::new(AuthConfig::development()),
        )
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_register_returns_created() {
        let response = app()
            .oneshot(post_json(
                "/register",
                json!({"username": "alice", "password": "secret123"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["username"], "alice");
        assert!(body["id"].as_i64().unwrap() > 0);
        assert!(body.get("password").is_none());
        assert!(body.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_is_conflict() {
        let app = app();
        let request = || {
            post_json(
                "/register",
                json!({"username": "alice", "password": "secret123"}),
            )
        };

        let first = app.clone().oneshot(request()).await.unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app.oneshot(request()).await.unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(second).await["status"], 409);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app()
            .oneshot(post_json("/login", json!({"username": "alice"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_flow() {
        let app = app();
        app.clone()
            .oneshot(post_json(
                "/register",
                json!({"username": "alice", "password": "secret123"}),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(post_json(
                "/login",
                json!({"username": "alice", "password": "wrong"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(post_json(
                "/login",
                json!({"username": "alice", "password": "secret123"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(!body["token"].as_str().unwrap().is_empty());
        assert_eq!(body["token_type"], "Bearer");
        assert!(body["expires_at"].as_i64().unwrap() > 0);
    }
}

#[cfg(test)]
mod storage_failure_tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::AuthConfig;
    use crate::domain::entity::user::{NewUser, User};
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::user_name::UserName;
    use crate::error::AuthResult;
    use crate::presentation::router::auth_router_generic;

    /// Every call fails the way a dropped connection does
    struct UnreachableUserRepository;

    fn connection_lost() -> sqlx::Error {
        sqlx::Error::Protocol("connection to db-9.internal:5432 reset".to_string())
    }

    impl UserRepository for UnreachableUserRepository {
        async fn create(&self, _user: &NewUser) -> AuthResult<User> {
            Err(connection_lost().into())
        }

        async fn find_by_user_name(&self, _user_name: &UserName) -> AuthResult<Option<User>> {
            Err(connection_lost().into())
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_opaque_server_error() {
        let app = auth_router_generic(
            UnreachableUserRepository,
            Arc::new(AuthConfig::development()),
        );

        for uri in ["/register", "/login"] {
            let request = Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"username": "alice", "password": "secret123"}).to_string(),
                ))
                .unwrap();

            let response = app.clone().oneshot(request).await.unwrap();
            // Not a 401: a broken store must not look like bad credentials
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let text = String::from_utf8_lossy(&bytes);
            assert!(!text.contains("db-9"), "{uri} leaked: {text}");

            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["status"], 500);
        }
    }
}

#[cfg(test)]
mod middleware_tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::{Router, middleware, routing::get};
    use chrono::{Duration, Utc};
    use kernel::id::UserId;
    use tower::ServiceExt;

    use crate::application::{AuthConfig, TokenIssuer, TokenVerifier};
    use crate::domain::entity::identity::Identity;
    use crate::presentation::middleware::{AuthenticatedUser, require_bearer};

    async fn whoami(AuthenticatedUser(identity): AuthenticatedUser) -> String {
        identity.user_name
    }

    fn setup() -> (Router, TokenIssuer) {
        let config = AuthConfig::development();
        let verifier = Arc::new(TokenVerifier::new(&config));
        let app = Router::new()
            .route("/whoami", get(whoami))
            .route_layer(middleware::from_fn_with_state(verifier, require_bearer));
        (app, TokenIssuer::new(&config))
    }

    fn identity() -> Identity {
        Identity {
            user_id: UserId::from_i64(1),
            user_name: "alice".to_string(),
        }
    }

    fn get_with(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_passes_identity_through() {
        let (app, issuer) = setup();
        let token = issuer.issue(&identity()).unwrap().token;

        let response = app
            .oneshot(get_with(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"alice");
    }

    #[tokio::test]
    async fn test_rejections_are_uniform() {
        let (app, issuer) = setup();
        let expired = issuer
            .issue_at(&identity(), Utc::now() - Duration::hours(48))
            .unwrap()
            .token;
        let expired_header = format!("Bearer {expired}");

        let cases = [
            None,
            Some("Basic dXNlcjpwYXNz"),
            Some("Bearer "),
            Some("Bearer not-a-jwt"),
            Some(expired_header.as_str()),
        ];

        let mut bodies = Vec::new();
        for case in cases {
            let response = app.clone().oneshot(get_with(case)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "case {case:?}");
            assert_eq!(
                response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
                "Bearer"
            );
            bodies.push(to_bytes(response.into_body(), usize::MAX).await.unwrap());
        }

        assert!(bodies.windows(2).all(|w| w[0] == w[1]));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::InvalidBody("x".into()), StatusCode::BAD_REQUEST),
            (AuthError::UserNameTaken, StatusCode::CONFLICT),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::ExpiredToken, StatusCode::UNAUTHORIZED),
            (
                AuthError::Signing("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }
}
