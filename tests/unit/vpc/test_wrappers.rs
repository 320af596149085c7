use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use tencentcloud_vpc::application::client::Client;
use tencentcloud_vpc::application::config::ClientProfile;
use tencentcloud_vpc::credential::Credential;
use tencentcloud_vpc::error::AppError;
use tencentcloud_vpc::model::request::{ApiRequest, RequestContext};
use tencentcloud_vpc::vpc::VpcClient;
use tencentcloud_vpc::vpc::models::{Filter, SecurityGroupPolicy, SecurityGroupPolicySet};
use tencentcloud_vpc::vpc::requests::*;
use tencentcloud_vpc::vpc::responses::*;

fn profile_for(server: &ServerGuard) -> ClientProfile {
    let mut profile = ClientProfile::default();
    profile.http_profile.scheme = "http".to_string();
    profile.http_profile.endpoint = Some(server.host_with_port());
    profile
}

fn vpc_for(server: &ServerGuard) -> VpcClient {
    VpcClient::new(
        Credential::new("AKIDvpc", "vpcsecret"),
        "ap-guangzhou",
        profile_for(server),
    )
}

#[test]
fn test_requests_are_bound_to_vpc_service() {
    assert_eq!(CreateVpcRequest::new().base().action(), "CreateVpc");
    assert_eq!(DescribeVpcsRequest::new().base().action(), "DescribeVpcs");
    assert_eq!(CreateRoutesRequest::new().base().action(), "CreateRoutes");
    assert_eq!(
        AllocateAddressesRequest::new().base().action(),
        "AllocateAddresses"
    );
    assert_eq!(
        AssignIpv6AddressesRequest::new().base().action(),
        "AssignIpv6Addresses"
    );
    assert_eq!(DescribeFlowLogsRequest::new().base().action(), "DescribeFlowLogs");

    let request = DescribeSubnetsRequest::new();
    assert_eq!(request.base().service(), "vpc");
    assert_eq!(request.base().version(), "2017-03-12");
}

#[test]
fn test_default_response_shells_exist() {
    assert_eq!(CreateVpcResponse::default().vpc, None);
    assert_eq!(DeleteVpcResponse::default().request_id, None);
    assert_eq!(DescribeRouteTablesResponse::default().route_table_set, None);
}

#[tokio::test]
async fn test_action_without_credential_fails_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/").expect(0).create_async().await;

    let vpc = VpcClient::from_client(Client::init("ap-guangzhou").with_profile(profile_for(&server)));
    let err = vpc.create_vpc(None).await.unwrap_err();

    match err {
        AppError::MissingCredential { action } => assert_eq!(action, "CreateVpc"),
        other => panic!("Unexpected error: {:?}", other),
    }
    assert_eq!(
        vpc.delete_subnet(None).await.unwrap_err().to_string(),
        "DeleteSubnet require credential"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_none_sends_empty_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("X-TC-Action", "DescribeVpcs")
        .match_header("X-TC-Version", "2017-03-12")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body(r#"{"Response": {"TotalCount": 0, "VpcSet": [], "RequestId": "r-empty"}}"#)
        .expect(1)
        .create_async()
        .await;

    let response = vpc_for(&server).describe_vpcs(None).await.unwrap();

    assert_eq!(response.total_count, Some(0));
    assert_eq!(response.vpc_set, Some(vec![]));
    assert_eq!(response.request_id.as_deref(), Some("r-empty"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_vpc_round_trip() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("X-TC-Action", "CreateVpc")
        .match_body(Matcher::Json(json!({
            "VpcName": "flannel",
            "CidrBlock": "10.8.0.0/16",
            "DnsServers": ["183.60.83.19"]
        })))
        .with_status(200)
        .with_body(
            r#"{"Response": {"Vpc": {"VpcId": "vpc-k9kg3fmx", "VpcName": "flannel", "CidrBlock": "10.8.0.0/16", "IsDefault": false}, "RequestId": "r-create"}}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let request = CreateVpcRequest {
        vpc_name: Some("flannel".to_string()),
        cidr_block: Some("10.8.0.0/16".to_string()),
        dns_servers: Some(vec!["183.60.83.19".to_string()]),
        ..CreateVpcRequest::new()
    };
    let response = vpc_for(&server).create_vpc(request).await.unwrap();

    let created = response.vpc.unwrap();
    assert_eq!(created.vpc_id.as_deref(), Some("vpc-k9kg3fmx"));
    assert_eq!(created.is_default, Some(false));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_nested_models_are_serialized_in_pascal_case() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("X-TC-Action", "CreateSecurityGroupPolicies")
        .match_body(Matcher::Json(json!({
            "SecurityGroupId": "sg-ohuuioma",
            "SecurityGroupPolicySet": {
                "Ingress": [{
                    "Protocol": "TCP",
                    "Port": "8472",
                    "CidrBlock": "10.0.0.0/8",
                    "Action": "ACCEPT"
                }]
            }
        })))
        .with_status(200)
        .with_body(r#"{"Response": {"RequestId": "r-sg"}}"#)
        .expect(1)
        .create_async()
        .await;

    let request = CreateSecurityGroupPoliciesRequest {
        security_group_id: Some("sg-ohuuioma".to_string()),
        security_group_policy_set: Some(SecurityGroupPolicySet {
            ingress: vec![SecurityGroupPolicy {
                protocol: Some("TCP".to_string()),
                port: Some("8472".to_string()),
                cidr_block: Some("10.0.0.0/8".to_string()),
                action: Some("ACCEPT".to_string()),
                ..SecurityGroupPolicy::default()
            }],
            ..SecurityGroupPolicySet::default()
        }),
        ..CreateSecurityGroupPoliciesRequest::new()
    };
    let response = vpc_for(&server)
        .create_security_group_policies(request)
        .await
        .unwrap();

    assert_eq!(response.request_id.as_deref(), Some("r-sg"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_error_surfaces_code() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            r#"{"Response": {"Error": {"Code": "ResourceNotFound", "Message": "vpc not found"}, "RequestId": "r-404"}}"#,
        )
        .create_async()
        .await;

    let request = DeleteVpcRequest {
        vpc_id: Some("vpc-missing".to_string()),
        ..DeleteVpcRequest::new()
    };
    let err = vpc_for(&server).delete_vpc(request).await.unwrap_err();

    assert_eq!(err.sdk_code(), Some("ResourceNotFound"));
    assert_eq!(err.request_id(), Some("r-404"));
}

#[tokio::test]
async fn test_cancelled_context_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/").expect(0).create_async().await;

    let context = RequestContext::background();
    context.cancel();
    let request = DescribeSubnetsRequest {
        filters: Some(vec![Filter::new("vpc-id", ["vpc-1"])]),
        ..DescribeSubnetsRequest::new()
    };
    let err = vpc_for(&server)
        .describe_subnets_with_context(context, request)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Cancelled));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_describe_route_tables_decodes_routes() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .match_header("X-TC-Action", "DescribeRouteTables")
        .match_body(Matcher::PartialJson(json!({
            "Filters": [{"Name": "vpc-id", "Values": ["vpc-2wdhuyfj"]}]
        })))
        .with_status(200)
        .with_body(
            r#"{"Response": {
                "TotalCount": 1,
                "RouteTableSet": [{
                    "VpcId": "vpc-2wdhuyfj",
                    "RouteTableId": "rtb-l2h8d7c2",
                    "RouteTableName": "default",
                    "Main": true,
                    "AssociationSet": [{"SubnetId": "subnet-1", "RouteTableId": "rtb-l2h8d7c2"}],
                    "RouteSet": [{
                        "RouteId": 1088,
                        "DestinationCidrBlock": "10.244.1.0/24",
                        "GatewayType": "NORMAL_CVM",
                        "GatewayId": "172.16.0.5",
                        "Enabled": true,
                        "RouteType": "USER",
                        "RouteItemId": "rti-1"
                    }]
                }],
                "RequestId": "r-rt"
            }}"#,
        )
        .create_async()
        .await;

    let request = DescribeRouteTablesRequest {
        filters: Some(vec![Filter::new("vpc-id", ["vpc-2wdhuyfj"])]),
        ..DescribeRouteTablesRequest::new()
    };
    let response = vpc_for(&server)
        .describe_route_tables(request)
        .await
        .unwrap();

    let tables = response.route_table_set.unwrap();
    assert_eq!(tables[0].main, Some(true));
    assert_eq!(tables[0].association_set.len(), 1);
    assert_eq!(tables[0].route_set[0].route_id, Some(1088));
    assert_eq!(tables[0].route_set[0].route_type.as_deref(), Some("USER"));
}
