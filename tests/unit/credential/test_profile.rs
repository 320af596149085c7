use std::io::Write;
use tempfile::NamedTempFile;
use tencentcloud_vpc::credential::{CredentialSource, IniFile, ProfileProvider, Provider};

const CREDENTIALS: &str = "\
# tencent cloud credentials
region = ap-guangzhou

[default]
secret_id = AKIDprofile
secret_key = profilesecret
; comment
debug = true
retries = 3

[other]
secret_id =
";

#[test]
fn test_parse_sections_and_comments() {
    let ini = IniFile::parse(CREDENTIALS, "credentials").unwrap();
    assert!(ini.has_section("default"));
    assert!(ini.has_section("other"));
    assert_eq!(ini.get("default", "secret_id"), Some("AKIDprofile"));
    assert_eq!(ini.get("default", "secret_key"), Some("profilesecret"));
    assert_eq!(ini.get("____GLOBAL____", "region"), Some("ap-guangzhou"));
    assert_eq!(ini.get("other", "secret_id"), None);
}

#[test]
fn test_typed_getters() {
    let ini = IniFile::parse(CREDENTIALS, "credentials").unwrap();
    assert_eq!(ini.get_bool("default", "debug").unwrap(), Some(true));
    assert_eq!(ini.get_i64("default", "retries").unwrap(), Some(3));
    assert_eq!(ini.get_i64("default", "missing").unwrap(), None);
    let err = ini.get_i64("default", "secret_id").unwrap_err();
    assert_eq!(err.sdk_code(), Some("ClientError.INIError"));
}

#[test]
fn test_wrong_section_reports_line() {
    let err = IniFile::parse("a = b\n\n[default\nx = y\n", "broken.ini").unwrap_err();
    assert_eq!(err.sdk_code(), Some("ClientError.INIError"));
    assert!(err.to_string().contains("broken.ini line 3 is not valid: wrong section"));

    let err = IniFile::parse("[]\n", "empty.ini").unwrap_err();
    assert!(err.to_string().contains("line 1"));
}

#[tokio::test]
async fn test_profile_provider_reads_default_section() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CREDENTIALS.as_bytes()).unwrap();

    let provider = ProfileProvider::with_path(file.path());
    let credential = provider.get_credential().await.unwrap().resolve().await.unwrap();
    assert_eq!(credential.secret_id, "AKIDprofile");
    assert_eq!(credential.secret_key, "profilesecret");
}

#[tokio::test]
async fn test_profile_provider_requires_both_keys() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[default]\nsecret_id = only-id\n").unwrap();

    let provider = ProfileProvider::with_path(file.path());
    let err = provider.get_credential().await.unwrap_err();
    assert_eq!(err.sdk_code(), Some("ClientError.CredentialError"));
}

#[tokio::test]
async fn test_profile_provider_missing_file_is_ini_error() {
    let dir = tempfile::tempdir().unwrap();
    let provider = ProfileProvider::with_path(dir.path().join("nope"));
    let err = provider.get_credential().await.unwrap_err();
    assert_eq!(err.sdk_code(), Some("ClientError.INIError"));
}

#[test]
fn test_default_path_is_below_platform_home() {
    let expected = dirs::home_dir().map(|home| home.join(".tencentcloud").join("credentials"));
    assert_eq!(ProfileProvider::default_path(), expected);
    if let Some(path) = ProfileProvider::default_path() {
        assert!(path.ends_with(".tencentcloud/credentials"));
    }
}
