//! Typed client of the VPC service, version `2017-03-12`
//!
//! Each action `X` is exposed twice on [`VpcClient`]: `x(request)` runs with a
//! background context and `x_with_context(context, request)` lets the caller
//! cancel the call or put a deadline on it. Passing `None` sends an empty
//! request.

pub mod models;
pub mod requests;
pub mod responses;
pub mod route_sync;

use crate::application::client::Client;
use crate::application::config::ClientProfile;
use crate::credential::Credential;
use crate::error::{AppError, TcResult};
use crate::model::request::{ApiRequest, RequestContext};
use requests::*;
use responses::*;

/// Client of the VPC service
#[derive(Debug, Clone)]
pub struct VpcClient {
    client: Client,
}

impl VpcClient {
    /// Client for `region` signing with `credential`
    pub fn new(credential: Credential, region: impl Into<String>, profile: ClientProfile) -> Self {
        Self {
            client: Client::init(region)
                .with_profile(profile)
                .with_credential(credential),
        }
    }

    /// Client for `region` with long term keys and the default profile
    pub fn new_with_secret_id(
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::init(region).with_secret_id(secret_id, secret_key),
        }
    }

    /// Wraps an already configured generic client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Underlying generic client
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn call<R, T>(&self, context: RequestContext, mut request: R) -> TcResult<T>
    where
        R: ApiRequest,
        T: serde::de::DeserializeOwned,
    {
        if self.client.credential().is_none() {
            return Err(AppError::MissingCredential {
                action: request.base().action().to_string(),
            });
        }
        request.set_context(context);
        self.client.send(&mut request).await
    }
}

macro_rules! vpc_actions {
    ($( $(#[$meta:meta])* $method:ident, $method_ctx:ident, $req:ident => $resp:ident; )*) => {
        impl VpcClient {
            $(
                $(#[$meta])*
                pub async fn $method(&self, request: impl Into<Option<$req>>) -> TcResult<$resp> {
                    self.$method_ctx(RequestContext::background(), request).await
                }

                #[doc = concat!("Same as [`VpcClient::", stringify!($method), "`] under `context`")]
                pub async fn $method_ctx(
                    &self,
                    context: RequestContext,
                    request: impl Into<Option<$req>>,
                ) -> TcResult<$resp> {
                    let request = request.into().unwrap_or_else($req::new);
                    self.call(context, request).await
                }
            )*
        }
    };
}

vpc_actions! {
    /// Allocates elastic IPs
    allocate_addresses, allocate_addresses_with_context,
        AllocateAddressesRequest => AllocateAddressesResponse;
    /// Lists elastic IPs
    describe_addresses, describe_addresses_with_context,
        DescribeAddressesRequest => DescribeAddressesResponse;
    /// Releases elastic IPs
    release_addresses, release_addresses_with_context,
        ReleaseAddressesRequest => ReleaseAddressesResponse;
    /// Binds an elastic IP
    associate_address, associate_address_with_context,
        AssociateAddressRequest => AssociateAddressResponse;
    /// Unbinds an elastic IP
    disassociate_address, disassociate_address_with_context,
        DisassociateAddressRequest => DisassociateAddressResponse;

    /// Creates a VPC
    create_vpc, create_vpc_with_context, CreateVpcRequest => CreateVpcResponse;
    /// Lists VPCs
    describe_vpcs, describe_vpcs_with_context, DescribeVpcsRequest => DescribeVpcsResponse;
    /// Modifies a VPC
    modify_vpc_attribute, modify_vpc_attribute_with_context,
        ModifyVpcAttributeRequest => ModifyVpcAttributeResponse;
    /// Deletes a VPC
    delete_vpc, delete_vpc_with_context, DeleteVpcRequest => DeleteVpcResponse;

    /// Creates a subnet
    create_subnet, create_subnet_with_context, CreateSubnetRequest => CreateSubnetResponse;
    /// Lists subnets
    describe_subnets, describe_subnets_with_context,
        DescribeSubnetsRequest => DescribeSubnetsResponse;
    /// Deletes a subnet
    delete_subnet, delete_subnet_with_context, DeleteSubnetRequest => DeleteSubnetResponse;

    /// Creates a route table
    create_route_table, create_route_table_with_context,
        CreateRouteTableRequest => CreateRouteTableResponse;
    /// Lists route tables
    describe_route_tables, describe_route_tables_with_context,
        DescribeRouteTablesRequest => DescribeRouteTablesResponse;
    /// Deletes a route table
    delete_route_table, delete_route_table_with_context,
        DeleteRouteTableRequest => DeleteRouteTableResponse;
    /// Adds routes
    create_routes, create_routes_with_context, CreateRoutesRequest => CreateRoutesResponse;
    /// Removes routes
    delete_routes, delete_routes_with_context, DeleteRoutesRequest => DeleteRoutesResponse;
    /// Replaces routes
    replace_routes, replace_routes_with_context, ReplaceRoutesRequest => ReplaceRoutesResponse;

    /// Creates a security group
    create_security_group, create_security_group_with_context,
        CreateSecurityGroupRequest => CreateSecurityGroupResponse;
    /// Lists security groups
    describe_security_groups, describe_security_groups_with_context,
        DescribeSecurityGroupsRequest => DescribeSecurityGroupsResponse;
    /// Deletes a security group
    delete_security_group, delete_security_group_with_context,
        DeleteSecurityGroupRequest => DeleteSecurityGroupResponse;
    /// Reads the rules of a security group
    describe_security_group_policies, describe_security_group_policies_with_context,
        DescribeSecurityGroupPoliciesRequest => DescribeSecurityGroupPoliciesResponse;
    /// Replaces the rules of a security group
    modify_security_group_policies, modify_security_group_policies_with_context,
        ModifySecurityGroupPoliciesRequest => ModifySecurityGroupPoliciesResponse;
    /// Adds rules to a security group
    create_security_group_policies, create_security_group_policies_with_context,
        CreateSecurityGroupPoliciesRequest => CreateSecurityGroupPoliciesResponse;

    /// Creates a network ACL
    create_network_acl, create_network_acl_with_context,
        CreateNetworkAclRequest => CreateNetworkAclResponse;
    /// Lists network ACLs
    describe_network_acls, describe_network_acls_with_context,
        DescribeNetworkAclsRequest => DescribeNetworkAclsResponse;

    /// Creates a NAT gateway
    create_nat_gateway, create_nat_gateway_with_context,
        CreateNatGatewayRequest => CreateNatGatewayResponse;
    /// Lists NAT gateways
    describe_nat_gateways, describe_nat_gateways_with_context,
        DescribeNatGatewaysRequest => DescribeNatGatewaysResponse;
    /// Deletes a NAT gateway
    delete_nat_gateway, delete_nat_gateway_with_context,
        DeleteNatGatewayRequest => DeleteNatGatewayResponse;

    /// Creates a VPN gateway
    create_vpn_gateway, create_vpn_gateway_with_context,
        CreateVpnGatewayRequest => CreateVpnGatewayResponse;
    /// Lists VPN gateways
    describe_vpn_gateways, describe_vpn_gateways_with_context,
        DescribeVpnGatewaysRequest => DescribeVpnGatewaysResponse;

    /// Creates a cloud connect network
    create_ccn, create_ccn_with_context, CreateCcnRequest => CreateCcnResponse;
    /// Lists cloud connect networks
    describe_ccns, describe_ccns_with_context, DescribeCcnsRequest => DescribeCcnsResponse;
    /// Attaches instances to a cloud connect network
    attach_ccn_instances, attach_ccn_instances_with_context,
        AttachCcnInstancesRequest => AttachCcnInstancesResponse;

    /// Creates a direct connect gateway
    create_direct_connect_gateway, create_direct_connect_gateway_with_context,
        CreateDirectConnectGatewayRequest => CreateDirectConnectGatewayResponse;
    /// Lists direct connect gateways
    describe_direct_connect_gateways, describe_direct_connect_gateways_with_context,
        DescribeDirectConnectGatewaysRequest => DescribeDirectConnectGatewaysResponse;

    /// Creates an elastic network interface
    create_network_interface, create_network_interface_with_context,
        CreateNetworkInterfaceRequest => CreateNetworkInterfaceResponse;
    /// Lists elastic network interfaces
    describe_network_interfaces, describe_network_interfaces_with_context,
        DescribeNetworkInterfacesRequest => DescribeNetworkInterfacesResponse;
    /// Attaches an elastic network interface
    attach_network_interface, attach_network_interface_with_context,
        AttachNetworkInterfaceRequest => AttachNetworkInterfaceResponse;

    /// Creates a flow log
    create_flow_log, create_flow_log_with_context, CreateFlowLogRequest => CreateFlowLogResponse;
    /// Lists flow logs
    describe_flow_logs, describe_flow_logs_with_context,
        DescribeFlowLogsRequest => DescribeFlowLogsResponse;

    /// Assigns an IPv6 CIDR to a VPC
    assign_ipv6_cidr_block, assign_ipv6_cidr_block_with_context,
        AssignIpv6CidrBlockRequest => AssignIpv6CidrBlockResponse;
    /// Assigns IPv6 addresses to an interface
    assign_ipv6_addresses, assign_ipv6_addresses_with_context,
        AssignIpv6AddressesRequest => AssignIpv6AddressesResponse;
}
