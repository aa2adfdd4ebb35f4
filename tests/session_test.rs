use studio_catalog::core::session::SESSION_KEY;
use studio_catalog::{CliConfig, LocalStorage, SessionGate, SessionState};
use tempfile::TempDir;

fn test_config(storage_path: &str) -> CliConfig {
    CliConfig {
        storage_path: storage_path.to_string(),
        default_catalog_url: "https://example.com/pricing.json".to_string(),
        webhook_url: "https://example.com/hook".to_string(),
        // Explicit override so the test does not depend on ADMIN_PASSWORD.
        admin_secret: Some("TestSecret123".to_string()),
        verbose: false,
    }
}

#[tokio::test]
async fn test_wrong_password_is_rejected_and_state_stays_anonymous() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(base_path.clone());
    let mut gate = SessionGate::restore(storage, test_config(&base_path)).await;

    assert_eq!(gate.state(), SessionState::Anonymous);
    assert!(!gate.login("wrong").await);
    assert_eq!(gate.state(), SessionState::Anonymous);
    assert!(!temp_dir.path().join(SESSION_KEY).exists());
}

#[tokio::test]
async fn test_login_persists_across_a_simulated_restart() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(base_path.clone());
    let mut gate = SessionGate::restore(storage, test_config(&base_path)).await;

    assert!(gate.login("TestSecret123").await);
    assert_eq!(gate.state(), SessionState::Authenticated);
    drop(gate);

    // Fresh gate over the same storage stands in for a process restart.
    let storage = LocalStorage::new(base_path.clone());
    let gate = SessionGate::restore(storage, test_config(&base_path)).await;
    assert_eq!(gate.state(), SessionState::Authenticated);
}

#[tokio::test]
async fn test_logout_clears_the_persisted_flag() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(base_path.clone());
    let mut gate = SessionGate::restore(storage, test_config(&base_path)).await;
    assert!(gate.login("TestSecret123").await);

    gate.logout().await;
    assert_eq!(gate.state(), SessionState::Anonymous);
    assert!(!temp_dir.path().join(SESSION_KEY).exists());

    let storage = LocalStorage::new(base_path.clone());
    let gate = SessionGate::restore(storage, test_config(&base_path)).await;
    assert_eq!(gate.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_logout_without_a_session_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(base_path.clone());
    let mut gate = SessionGate::restore(storage, test_config(&base_path)).await;

    gate.logout().await;
    assert_eq!(gate.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_retries_are_unlimited() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(base_path.clone());
    let mut gate = SessionGate::restore(storage, test_config(&base_path)).await;

    for _ in 0..5 {
        assert!(!gate.login("nope").await);
    }
    assert!(gate.login("TestSecret123").await);
}
