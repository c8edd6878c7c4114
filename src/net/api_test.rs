use super::*;
use crate::config::Environment;

#[test]
fn user_endpoint_appends_id() {
    assert_eq!(user_endpoint("/api", 42), "/api/42");
}

#[test]
fn login_endpoint_appends_login() {
    assert_eq!(login_endpoint("http://localhost:3000"), "http://localhost:3000/login");
}

#[test]
fn http_api_takes_base_from_config() {
    let api = HttpUserApi::new(&ApiConfig::for_environment(Environment::Production));
    assert_eq!(api.base(), "/api");
}

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status { status: 401 }.to_string(), "request failed: 401");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_calls_are_unavailable() {
    let api = HttpUserApi::new(&ApiConfig::for_environment(Environment::Development));
    let creds = Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    futures::executor::block_on(async {
        assert_eq!(api.list().await, Err(ApiError::Unavailable));
        assert_eq!(api.get(1).await, Err(ApiError::Unavailable));
        assert_eq!(api.update(1, &UserPatch::default()).await, Err(ApiError::Unavailable));
        assert_eq!(api.login(&creds).await, Err(ApiError::Unavailable));
    });
}
