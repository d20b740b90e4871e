use axum::http::StatusCode;
use restobook::middleware::auth::AuthUser;
use restobook::middleware::role::{ROLE_ADMIN, ROLE_USER, check_role};
use restobook::modules::auth::model::Claims;

fn create_test_auth_user(roles: Vec<&str>) -> AuthUser {
    let claims = Claims {
        sub: "00000000-0000-0000-0000-000000000000".to_string(),
        roles: roles.into_iter().map(String::from).collect(),
        iat: 1234567890,
        exp: 9999999999,
    };
    AuthUser(claims)
}

#[test]
fn test_check_role_accepts_member() {
    let auth_user = create_test_auth_user(vec!["admin"]);
    assert!(check_role(&auth_user, ROLE_ADMIN).is_ok());

    let auth_user = create_test_auth_user(vec!["user"]);
    assert!(check_role(&auth_user, ROLE_USER).is_ok());

    let auth_user = create_test_auth_user(vec!["admin", "user"]);
    assert!(check_role(&auth_user, ROLE_ADMIN).is_ok());
    assert!(check_role(&auth_user, ROLE_USER).is_ok());
}

#[test]
fn test_check_role_empty_roles_message() {
    let auth_user = create_test_auth_user(vec![]);
    let err = check_role(&auth_user, ROLE_ADMIN).unwrap_err();

    assert_eq!(err.status, StatusCode::FORBIDDEN);
    assert_eq!(err.message, "Access denied. No roles found.");
}

#[test]
fn test_check_role_missing_role_message() {
    let auth_user = create_test_auth_user(vec!["user"]);
    let err = check_role(&auth_user, ROLE_ADMIN).unwrap_err();

    assert_eq!(err.status, StatusCode::FORBIDDEN);
    assert_eq!(err.message, "Access denied.");
}

#[test]
fn test_denial_messages_are_distinct() {
    let no_roles = check_role(&create_test_auth_user(vec![]), ROLE_ADMIN).unwrap_err();
    let wrong_role = check_role(&create_test_auth_user(vec!["user"]), ROLE_ADMIN).unwrap_err();

    assert_ne!(no_roles.message, wrong_role.message);
}

#[test]
fn test_admin_does_not_imply_user() {
    // Role membership is exact; holding admin does not grant user routes
    let auth_user = create_test_auth_user(vec!["admin"]);
    let err = check_role(&auth_user, ROLE_USER).unwrap_err();

    assert_eq!(err.status, StatusCode::FORBIDDEN);
    assert_eq!(err.message, "Access denied.");
}

#[test]
fn test_has_role() {
    let auth_user = create_test_auth_user(vec!["user"]);
    assert!(auth_user.has_role("user"));
    assert!(!auth_user.has_role("admin"));
}
