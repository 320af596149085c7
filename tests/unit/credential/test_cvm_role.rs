use mockito::Server;
use tencentcloud_vpc::credential::{CredentialSource, CvmRoleProvider, Provider, Refresh};
use tencentcloud_vpc::error::AppError;
use tencentcloud_vpc::metadata::MetadataClient;

const ROLE_BODY: &str = r#"{
    "TmpSecretId": "AKIDrole",
    "TmpSecretKey": "rolesecret",
    "ExpiredTime": 1900000000,
    "Expiration": "2030-03-17T17:46:40Z",
    "Token": "roletoken",
    "Code": "Success"
}"#;

#[tokio::test]
async fn test_role_name_is_discovered() {
    let mut server = Server::new_async().await;
    let name_mock = server
        .mock("GET", "/cam/security-credentials/")
        .with_status(200)
        .with_body("vpc-operator\n")
        .expect(1)
        .create_async()
        .await;
    let role_mock = server
        .mock("GET", "/cam/security-credentials/vpc-operator")
        .with_status(200)
        .with_body(ROLE_BODY)
        .expect(1)
        .create_async()
        .await;

    let provider = CvmRoleProvider::default().with_metadata(MetadataClient::new(server.url()));
    let credential = provider.get_credential().await.unwrap().resolve().await.unwrap();

    assert_eq!(credential.secret_id, "AKIDrole");
    assert_eq!(credential.secret_key, "rolesecret");
    assert_eq!(credential.token(), "roletoken");
    name_mock.assert_async().await;
    role_mock.assert_async().await;
}

#[tokio::test]
async fn test_known_role_name_skips_discovery() {
    let mut server = Server::new_async().await;
    let role_mock = server
        .mock("GET", "/cam/security-credentials/given-role")
        .with_status(200)
        .with_body(ROLE_BODY)
        .expect(1)
        .create_async()
        .await;

    let provider = CvmRoleProvider::new("given-role").with_metadata(MetadataClient::new(server.url()));
    let fetched = provider.fetch().await.unwrap();

    assert_eq!(fetched.expires_at, 1_900_000_000);
    role_mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_role_is_unavailable() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/cam/security-credentials/")
        .with_status(404)
        .create_async()
        .await;

    let provider = CvmRoleProvider::default().with_metadata(MetadataClient::new(server.url()));
    let err = provider.get_credential().await.err().expect("should be Err");
    assert!(matches!(err, AppError::CredentialUnavailable(_)));
}

#[tokio::test]
async fn test_unsuccessful_code_is_credential_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/cam/security-credentials/r")
        .with_status(200)
        .with_body(r#"{"Code": "Failed"}"#)
        .create_async()
        .await;

    let provider = CvmRoleProvider::new("r").with_metadata(MetadataClient::new(server.url()));
    let err = provider.fetch().await.unwrap_err();
    assert_eq!(err.sdk_code(), Some("ClientError.CredentialError"));
    assert!(err.to_string().contains("code=Failed"));
}
