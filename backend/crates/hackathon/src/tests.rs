//! Unit tests for Hackathon crate

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use account::application::{AccountConfig, RegisterInput, RegisterUseCase};
    use account::domain::value_object::{session_token::SessionClaims, user_name::UserName};
    use account::presentation::AccountAppState;
    use account::MemoryAccountRepository;
    use chrono::{DateTime, Duration, Utc};
    use kernel::clock::FixedClock;

    pub const SECRET: [u8; 32] = [3u8; 32];
    pub const T0: i64 = 1_700_000_000;

    pub fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    pub fn config() -> AccountConfig {
        AccountConfig {
            session_secret: SECRET,
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Account store holding Alice, plus a state built on it
    pub async fn account_with_alice() -> (AccountAppState<MemoryAccountRepository>, Arc<FixedClock>)
    {
        let repo = MemoryAccountRepository::new();
        let clock = Arc::new(FixedClock::at_epoch(T0));
        let state = AccountAppState::new(repo, config(), clock.clone());

        RegisterUseCase::new(state.repo.clone(), state.config.clone())
            .execute(RegisterInput {
                full_name: "Alice Smith".to_string(),
                school_name: "Central High".to_string(),
                class_level: "10".to_string(),
                password: "pw1".to_string(),
                phone_no: "555-0100".to_string(),
                email: "alice@example.com".to_string(),
                birthdate: "2005-03-14".to_string(),
                country: "IN".to_string(),
                state: "KA".to_string(),
                city: "Bengaluru".to_string(),
                address: "1 Main St".to_string(),
            })
            .await
            .unwrap();

        (state, clock)
    }

    pub fn alice() -> UserName {
        UserName::from_db("alicesmith2005")
    }

    /// `name=value` session cookie for Alice
    pub fn alice_cookie(config: &AccountConfig) -> String {
        let token = SessionClaims::new(alice(), at(T0) + Duration::weeks(1)).sign(&SECRET);
        format!("{}={}", config.session_cookie_name, token)
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use account::domain::value_object::user_name::UserName;

    use super::support::*;
    use crate::application::{ListSubmissionsUseCase, SubmitEntryInput, SubmitEntryUseCase};
    use crate::domain::repository::SubmissionRepository;
    use crate::domain::value_object::team_name::TeamName;
    use crate::error::HackathonError;
    use crate::infra::MemorySubmissionRepository;

    fn entry(team_name: &str, code: &str) -> SubmitEntryInput {
        SubmitEntryInput {
            team_name: team_name.to_string(),
            code: code.to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_creates_team_and_submission() {
        let repo = MemorySubmissionRepository::new();
        let use_case = SubmitEntryUseCase::new(Arc::new(repo.clone()));

        let submission = use_case
            .execute(&alice(), entry("Byte Busters", "print('hi')"), at(T0))
            .await
            .unwrap();
        assert_eq!(submission.id, Some(1));
        assert_eq!(submission.team_name.as_str(), "Byte Busters");

        let team = repo
            .find_team(&TeamName::from_db("Byte Busters"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(team.code, "print('hi')");
        assert_eq!(team.submission_time, "2023-11-14T22:13:20Z");
    }

    #[tokio::test]
    async fn test_duplicate_team_records_nothing() {
        let repo = MemorySubmissionRepository::new();
        let use_case = SubmitEntryUseCase::new(Arc::new(repo.clone()));

        use_case
            .execute(&alice(), entry("Byte Busters", "v1"), at(T0))
            .await
            .unwrap();

        let bob = UserName::from_db("bobjones1999");
        let result = use_case
            .execute(&bob, entry("Byte Busters", "v2"), at(T0 + 60))
            .await;
        assert!(matches!(result, Err(HackathonError::DuplicateTeam)));
        assert_eq!(repo.submission_count().await, 1);

        // The first team keeps its code
        let team = repo
            .find_team(&TeamName::from_db("Byte Busters"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(team.code, "v1");
    }

    #[tokio::test]
    async fn test_concurrent_claims_of_one_team_name() {
        let repo = MemorySubmissionRepository::new();
        let use_case = SubmitEntryUseCase::new(Arc::new(repo.clone()));
        let alice = alice();
        let bob = UserName::from_db("bobjones1999");

        let (a, b) = tokio::join!(
            use_case.execute(&alice, entry("Race", "a"), at(T0)),
            use_case.execute(&bob, entry("Race", "b"), at(T0)),
        );
        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        assert_eq!(repo.submission_count().await, 1);
    }

    #[tokio::test]
    async fn test_invalid_forms_rejected() {
        let repo = MemorySubmissionRepository::new();
        let use_case = SubmitEntryUseCase::new(Arc::new(repo.clone()));

        let too_long = "t".repeat(81);
        for (team_name, code) in [("", "x"), ("Team", ""), (too_long.as_str(), "x")] {
            let result = use_case
                .execute(&alice(), entry(team_name, code), at(T0))
                .await;
            assert!(matches!(result, Err(HackathonError::InvalidForm(_))));
        }
        assert_eq!(repo.submission_count().await, 0);
    }

    #[tokio::test]
    async fn test_list_only_own_submissions_oldest_first() {
        let repo = MemorySubmissionRepository::new();
        let shared = Arc::new(repo);
        let submit = SubmitEntryUseCase::new(shared.clone());
        let bob = UserName::from_db("bobjones1999");

        submit
            .execute(&alice(), entry("First", "1"), at(T0))
            .await
            .unwrap();
        submit
            .execute(&bob, entry("Other", "2"), at(T0 + 1))
            .await
            .unwrap();
        submit
            .execute(&alice(), entry("Second", "3"), at(T0 + 2))
            .await
            .unwrap();

        let listed = ListSubmissionsUseCase::new(shared)
            .execute(&alice())
            .await
            .unwrap();
        let teams: Vec<&str> = listed.iter().map(|s| s.team_name.as_str()).collect();
        assert_eq!(teams, vec!["First", "Second"]);
    }
}

#[cfg(test)]
mod error_tests {
    use account::AccountError;
    use axum::http::StatusCode;

    use crate::error::HackathonError;

    #[test]
    fn test_status_codes() {
        assert_eq!(HackathonError::DuplicateTeam.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            HackathonError::InvalidForm("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HackathonError::from(AccountError::DuplicateUsername).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_storage_details_hidden() {
        let app_error = HackathonError::Storage(sqlx::Error::PoolTimedOut).to_app_error();
        assert_eq!(app_error.message(), "Submission failed");
        assert!(!app_error.message().contains("pool"));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::*;
    use crate::infra::MemorySubmissionRepository;
    use crate::presentation::hackathon_router_generic;

    async fn app() -> (Router, MemorySubmissionRepository, String) {
        let (account, _) = account_with_alice().await;
        let cookie = alice_cookie(&account.config);
        let repo = MemorySubmissionRepository::new();
        (hackathon_router_generic(account, repo.clone()), repo, cookie)
    }

    fn post(body: &Value, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_requires_session() {
        let (app, repo, _) = app().await;

        let response = app.clone().oneshot(get(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/api/account/login");

        let response = app
            .oneshot(post(&json!({"teamName": "T", "code": "x"}), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(repo.submission_count().await, 0);
    }

    #[tokio::test]
    async fn test_overview_shows_user_and_credits() {
        let (app, _, cookie) = app().await;

        let response = app.oneshot(get(Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["username"], "alicesmith2005");
        assert_eq!(body["fullName"], "Alice Smith");
        // Passing the gate accrued the first point
        assert_eq!(body["credits"], 101);
        assert_eq!(body["submissions"], json!([]));
    }

    #[tokio::test]
    async fn test_submit_then_listed() {
        let (app, _, cookie) = app().await;

        let response = app
            .clone()
            .oneshot(post(
                &json!({"teamName": "Byte Busters", "code": "fn main() {}"}),
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["teamName"], "Byte Busters");

        let body = body_json(app.oneshot(get(Some(&cookie))).await.unwrap()).await;
        assert_eq!(body["submissions"][0]["teamName"], "Byte Busters");
        assert_eq!(body["submissions"][0]["code"], "fn main() {}");
    }

    #[tokio::test]
    async fn test_duplicate_team_is_conflict() {
        let (app, repo, cookie) = app().await;
        let body = json!({"teamName": "Byte Busters", "code": "x"});

        app.clone()
            .oneshot(post(&body, Some(&cookie)))
            .await
            .unwrap();
        let response = app.oneshot(post(&body, Some(&cookie))).await.unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(repo.submission_count().await, 1);
    }

    #[tokio::test]
    async fn test_empty_team_name_is_bad_request() {
        let (app, _, cookie) = app().await;

        let response = app
            .oneshot(post(&json!({"teamName": "", "code": "x"}), Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
