//! PostgreSQL repository tests
//!
//! Each test starts its own container, so they need Docker:
//! `cargo test -p domain_auth -- --ignored`

use chrono::{Duration, Utc};
use domain_auth::*;
use test_utils::{TestDataBuilder, TestDatabase};

async fn register(repo: &PgCredentialRepository, login: &str) -> UserAuth {
    repo.create_user(NewUser {
        login: login.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        is_admin: false,
    })
    .await
    .unwrap()
}

fn session(id: &str, login: &str, access_token: &str) -> CreateSession {
    CreateSession {
        id: id.to_string(),
        user_login: login.to_string(),
        access_token: access_token.to_string(),
        refresh_token: format!("refresh-{id}"),
        expires_at: Utc::now() + Duration::hours(24),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_user_and_lookup() {
    let db = TestDatabase::new().await;
    let repo = PgCredentialRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_create_user");
    let login = builder.login("alice");

    let created = register(&repo, &login).await;
    let found = repo.get_user_auth(&login).await.unwrap();

    assert_eq!(found, Some(created));
    assert_eq!(repo.get_user_auth("nobody").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_login_is_taken() {
    let db = TestDatabase::new().await;
    let repo = PgCredentialRepository::new(db.connection());
    let login = TestDataBuilder::from_test_name("pg_duplicate").login("alice");

    register(&repo, &login).await;
    let result = repo
        .create_user(NewUser {
            login: login.clone(),
            password_hash: "hash".to_string(),
            is_admin: true,
        })
        .await;

    assert!(matches!(result, Err(AuthServiceError::LoginTaken(taken)) if taken == login));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_session_lifecycle() {
    let db = TestDatabase::new().await;
    let credentials = PgCredentialRepository::new(db.connection());
    let sessions = PgSessionRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_session_lifecycle");
    let alice = builder.login("alice");
    let bob = builder.login("bob");
    register(&credentials, &alice).await;
    register(&credentials, &bob).await;

    let created = sessions.create(session("s1", &alice, "a1")).await.unwrap();
    sessions.create(session("s2", &alice, "a2")).await.unwrap();
    sessions.create(session("s3", &bob, "b1")).await.unwrap();
    assert!(!created.is_revoked);

    // Same jti again is a plain storage failure
    assert!(sessions.create(session("s1", &alice, "a9")).await.is_err());

    sessions.renew("s1", "a1-renewed").await.unwrap();
    let renewed = sessions.get_by_id("s1").await.unwrap().unwrap();
    assert_eq!(renewed.access_token, "a1-renewed");
    assert_eq!(renewed.refresh_token, "refresh-s1");

    sessions.revoke_by_access_token("a1-renewed").await.unwrap();
    sessions.revoke_by_access_token("a1-renewed").await.unwrap();
    assert!(sessions.get_by_id("s1").await.unwrap().unwrap().is_revoked);
    assert!(!sessions.get_by_id("s2").await.unwrap().unwrap().is_revoked);

    sessions.revoke_all_for_login(&alice).await.unwrap();
    assert!(sessions.get_by_id("s2").await.unwrap().unwrap().is_revoked);
    assert!(!sessions.get_by_id("s3").await.unwrap().unwrap().is_revoked);

    assert_eq!(sessions.get_by_id("missing").await.unwrap(), None);
}
