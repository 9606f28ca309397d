// tests/user_flow.rs
//
// The demo flow: create a user, activate it, project it for display.

use anyhow::Result;
use respack::{UserService, UserStatus};

#[test]
fn test_create_and_inspect_user() -> Result<()> {
    let service = UserService::new();

    let user = service.create_user("alice", "alice@example.com")?;
    let info = service.user_info(&user);

    assert_eq!(info.username, "alice");
    assert_eq!(info.email, "alice@example.com");
    assert_eq!(info.status, UserStatus::Active);
    assert_eq!(info.status.to_string(), "active");
    Ok(())
}

#[test]
fn test_rejected_user_is_never_constructed() {
    let service = UserService::new();
    assert!(service.create_user("alice", "not-an-email").is_err());
}
