use reqwest::StatusCode;
use tencentcloud_vpc::error::AppError;
use tencentcloud_vpc::model::response::{CommonResponse, parse_error, parse_response};
use tencentcloud_vpc::vpc::responses::DescribeVpcsResponse;

const VPCS_BODY: &str = r#"{
    "Response": {
        "TotalCount": 1,
        "VpcSet": [{
            "VpcName": "default",
            "VpcId": "vpc-2wdhuyfj",
            "CidrBlock": "172.16.0.0/16",
            "IsDefault": true,
            "EnableMulticast": false,
            "DnsServerSet": ["183.60.83.19", "183.60.82.98"],
            "TagSet": [{"Key": "env", "Value": "prod"}]
        }],
        "RequestId": "d7b4bc0d-5f5a-4a3a-8c3a-2f4b8f1f0d11"
    }
}"#;

#[test]
fn test_parse_typed_response() {
    let response: DescribeVpcsResponse =
        parse_response(StatusCode::OK, VPCS_BODY.as_bytes()).unwrap();
    assert_eq!(response.total_count, Some(1));
    assert_eq!(
        response.request_id.as_deref(),
        Some("d7b4bc0d-5f5a-4a3a-8c3a-2f4b8f1f0d11")
    );
    let vpcs = response.vpc_set.unwrap();
    assert_eq!(vpcs[0].vpc_id.as_deref(), Some("vpc-2wdhuyfj"));
    assert_eq!(vpcs[0].is_default, Some(true));
    assert_eq!(vpcs[0].dns_server_set.len(), 2);
    assert_eq!(vpcs[0].tag_set[0].key.as_deref(), Some("env"));
}

#[test]
fn test_parse_error_response() {
    let body = r#"{"Response": {"Error": {"Code": "InvalidParameterValue.Malformed", "Message": "bad vpc id"}, "RequestId": "req-9"}}"#;
    let err = parse_response::<DescribeVpcsResponse>(StatusCode::OK, body.as_bytes()).unwrap_err();
    match err {
        AppError::Sdk(e) => {
            assert_eq!(e.code, "InvalidParameterValue.Malformed");
            assert_eq!(e.message, "bad vpc id");
            assert_eq!(e.request_id, "req-9");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_non_200_status_is_http_error() {
    let err = parse_response::<DescribeVpcsResponse>(StatusCode::SERVICE_UNAVAILABLE, b"busy")
        .unwrap_err();
    match err {
        AppError::Http { status, body } => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body, "busy");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_malformed_body_is_json_error() {
    let err = parse_response::<DescribeVpcsResponse>(StatusCode::OK, b"<html>").unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[test]
fn test_parse_error_ignores_empty_code() {
    let body = r#"{"Response": {"Error": {"Code": "", "Message": ""}, "RequestId": "r"}}"#;
    assert!(parse_error(body.as_bytes()).is_ok());
    assert!(parse_error(br#"{"Response": {"RequestId": "r"}}"#).is_ok());
}

#[test]
fn test_common_response_exposes_raw_object() {
    let response: CommonResponse = parse_response(StatusCode::OK, VPCS_BODY.as_bytes()).unwrap();
    assert_eq!(
        response.request_id(),
        Some("d7b4bc0d-5f5a-4a3a-8c3a-2f4b8f1f0d11")
    );
    assert_eq!(response.get("TotalCount"), Some(&serde_json::json!(1)));

    let rewrapped: serde_json::Value =
        serde_json::from_str(&response.to_json_string().unwrap()).unwrap();
    assert_eq!(rewrapped["Response"]["VpcSet"][0]["VpcId"], "vpc-2wdhuyfj");
}

#[test]
fn test_default_response_shell() {
    let response = DescribeVpcsResponse::default();
    assert!(response.vpc_set.is_none());
    assert!(response.request_id.is_none());
}
