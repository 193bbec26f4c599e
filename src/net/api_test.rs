use super::*;

#[test]
fn endpoints_use_configured_base() {
    let config = PortalConfig::default();
    assert_eq!(login_endpoint(&config), "/api/v1/auth/login");
    assert_eq!(projects_endpoint(&config), "/api/v1/projects");
    assert_eq!(delete_project_endpoint(&config, 9), "/api/v1/admin/projects/9");
}

#[test]
fn endpoints_follow_api_base_override() {
    let config = PortalConfig::with_api_base(Some("https://api.example.com/v1"));
    assert_eq!(delete_project_endpoint(&config, 3), "https://api.example.com/v1/admin/projects/3");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header(Some("abc")), Some("Bearer abc".to_owned()));
}

#[test]
fn bearer_header_skips_missing_or_blank_token() {
    assert_eq!(bearer_header(None), None);
    assert_eq!(bearer_header(Some("  ")), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_is_unavailable_natively() {
    let api = HttpApi::new(&PortalConfig::default());
    let result = futures::executor::block_on(api.list_projects(Some("tok")));
    assert!(matches!(result, Err(ApiError::Transport(_))));
}
