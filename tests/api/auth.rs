//! Tests for ApiClient::get_current_user.

use tireflow::model::user::UserRole;
use tireflow_test_utils::prelude::*;

/// Tests fetching the signed-in user.
///
/// Expected: Ok(Some) with the user's role
#[tokio::test]
async fn returns_signed_in_user() -> Result<(), TestError> {
    let user = factory::mock_user_with_role(UserRole::Supervisor);
    let test = TestBuilder::new()
        .with_current_user_endpoint(Some(user.clone()), 1)
        .build()
        .await?;

    let result = test.api.get_current_user().await?;

    assert_eq!(result, Some(user));

    test.assert_mocks();

    Ok(())
}

/// Tests fetching the user without a session.
///
/// Verifies that a 401 is read as "nobody signed in" rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn no_session_is_none() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_current_user_endpoint(None, 1)
        .build()
        .await?;

    let result = test.api.get_current_user().await?;

    assert!(result.is_none());

    test.assert_mocks();

    Ok(())
}

/// Tests the login and logout links.
///
/// Expected: both links live under the API base URL
#[tokio::test]
async fn auth_links_use_base_url() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    assert_eq!(test.api.login_url(), format!("{}/auth/login", test.server.url()));
    assert_eq!(test.api.logout_url(), format!("{}/auth/logout", test.server.url()));

    Ok(())
}
