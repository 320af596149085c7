use assert_json_diff::assert_json_eq;
use serde_json::json;
use std::time::Duration;
use tencentcloud_vpc::error::AppError;
use tencentcloud_vpc::model::request::{
    ApiRequest, BaseRequest, CommonRequest, RequestContext, flatten_params,
};
use tencentcloud_vpc::vpc::models::{Filter, Route};
use tencentcloud_vpc::vpc::requests::{
    AllocateAddressesRequest, CreateRoutesRequest, DescribeVpcsRequest,
};

#[test]
fn test_base_request_completes_common_params() {
    let mut base = BaseRequest::new("vpc", "2017-03-12", "DescribeVpcs");
    base.complete_common_params("ap-shanghai");

    let params = base.params();
    assert_eq!(params["Action"], "DescribeVpcs");
    assert_eq!(params["Version"], "2017-03-12");
    assert_eq!(params["Region"], "ap-shanghai");
    assert_eq!(params["Timestamp"], base.timestamp().to_string());
    assert!(params["RequestClient"].starts_with("SDK_RUST_"));
    assert!(params["Nonce"].parse::<u32>().is_ok());
    assert_eq!(base.path, "/");
}

#[test]
fn test_base_request_omits_empty_region() {
    let mut base = BaseRequest::new("vpc", "2017-03-12", "DescribeVpcs");
    base.complete_common_params("");
    assert!(!base.params().contains_key("Region"));
}

#[test]
fn test_typed_request_serializes_only_set_fields() {
    let request = DescribeVpcsRequest {
        filters: Some(vec![Filter::new("vpc-name", ["default"])]),
        limit: Some("20".to_string()),
        ..DescribeVpcsRequest::new()
    };

    assert_json_eq!(
        request.to_json_value().unwrap(),
        json!({
            "Filters": [{"Name": "vpc-name", "Values": ["default"]}],
            "Limit": "20"
        })
    );
    assert_eq!(request.base().action(), "DescribeVpcs");
    assert!(!request.is_idempotent());
}

#[test]
fn test_empty_request_serializes_to_empty_object() {
    let request = DescribeVpcsRequest::new();
    assert_eq!(request.to_json_string().unwrap(), "{}");
}

#[test]
fn test_client_token_requests_are_idempotent() {
    let mut request = AllocateAddressesRequest::new();
    assert!(request.is_idempotent());
    let slot = request.client_token_mut().expect("token slot");
    *slot = Some("token-1".to_string());
    assert_eq!(request.client_token.as_deref(), Some("token-1"));

    let mut other = DescribeVpcsRequest::new();
    assert!(other.client_token_mut().is_none());
}

#[test]
fn test_flatten_params_indexes_arrays_from_zero() {
    let request = CreateRoutesRequest {
        route_table_id: Some("rtb-1".to_string()),
        routes: Some(vec![Route {
            destination_cidr_block: Some("10.0.1.0/24".to_string()),
            gateway_type: Some("NORMAL_CVM".to_string()),
            gateway_id: Some("172.16.0.5".to_string()),
            enabled: Some(true),
            ..Route::default()
        }]),
        ..CreateRoutesRequest::new()
    };

    let flat = flatten_params(&request.to_json_value().unwrap());
    assert_eq!(flat["RouteTableId"], "rtb-1");
    assert_eq!(flat["Routes.0.DestinationCidrBlock"], "10.0.1.0/24");
    assert_eq!(flat["Routes.0.GatewayType"], "NORMAL_CVM");
    assert_eq!(flat["Routes.0.GatewayId"], "172.16.0.5");
    assert_eq!(flat["Routes.0.Enabled"], "true");
    assert_eq!(flat.len(), 5);
}

#[test]
fn test_flatten_params_drops_nulls() {
    let flat = flatten_params(&json!({"A": null, "B": [1, null, 3], "C": {"D": "x"}}));
    assert_eq!(flat.get("A"), None);
    assert_eq!(flat["B.0"], "1");
    assert_eq!(flat.get("B.1"), None);
    assert_eq!(flat["B.2"], "3");
    assert_eq!(flat["C.D"], "x");
}

#[test]
fn test_common_request_accepts_json_string() {
    let mut request = CommonRequest::new("vpc", "2017-03-12", "DescribeVpcs");
    request
        .set_action_parameters(r#"{"Limit": "10", "VpcIds": ["vpc-1"]}"#)
        .unwrap();
    assert_json_eq!(
        request.to_json_value().unwrap(),
        json!({"Limit": "10", "VpcIds": ["vpc-1"]})
    );
}

#[test]
fn test_common_request_accepts_bytes_and_map() {
    let mut request = CommonRequest::new("vpc", "2017-03-12", "DescribeVpcs");
    request.set_action_parameters(b"{\"Offset\": \"0\"}".to_vec()).unwrap();
    assert_eq!(request.action_parameters()["Offset"], "0");

    let mut map = serde_json::Map::new();
    map.insert("Limit".to_string(), json!("5"));
    request.set_action_parameters(map).unwrap();
    assert_eq!(request.action_parameters().len(), 1);
    assert_eq!(request.action_parameters()["Limit"], "5");
}

#[test]
fn test_common_request_rejects_bad_parameters() {
    let mut request = CommonRequest::new("vpc", "2017-03-12", "DescribeVpcs");

    let err = request.set_action_parameters("{not json").unwrap_err();
    assert_eq!(err.sdk_code(), Some("ClientError.ParseJsonError"));

    let err = request.set_action_parameters("[1, 2]").unwrap_err();
    assert_eq!(err.sdk_code(), Some("ClientError.InvalidParameter"));
}

#[tokio::test]
async fn test_context_cancelled_before_run() {
    let context = RequestContext::background();
    context.cancel();
    let result = context.run(async { Ok(1) }).await;
    assert!(matches!(result, Err(AppError::Cancelled)));
}

#[tokio::test]
async fn test_context_deadline_elapses() {
    let context = RequestContext::background().with_timeout(Duration::from_millis(20));
    let result: Result<(), AppError> = context
        .run(async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
    assert!(matches!(result, Err(AppError::Timeout)));
}

#[tokio::test]
async fn test_context_background_completes() {
    let context = RequestContext::background();
    assert!(context.deadline().is_none());
    assert!(!context.is_cancelled());
    let result = context.run(async { Ok("done") }).await.unwrap();
    assert_eq!(result, "done");
}

#[test]
fn test_set_context_lands_on_request() {
    let context = RequestContext::background();
    let mut request = DescribeVpcsRequest::new();
    request.set_context(context.clone());
    context.cancel();
    assert!(request.base().context().is_cancelled());
}
