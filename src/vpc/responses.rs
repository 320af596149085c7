//! Typed responses of the VPC actions
//!
//! Each type is the content of the `Response` object of the reply. Fields the
//! service did not return stay `None`.

use crate::vpc::models::{
    Address, Ccn, DirectConnectGateway, FlowLog, Ipv6Address, NatGateway, NetworkAcl,
    NetworkInterface, Route, RouteTable, SecurityGroup, SecurityGroupPolicySet, Subnet, Vpc,
    VpnGateway,
};
use serde::{Deserialize, Serialize};

macro_rules! vpc_response {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
            /// Id of the request, quote it when reporting a problem
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub request_id: Option<String>,
        }
    };
}

vpc_response!(
    /// Result of `AllocateAddresses`
    AllocateAddressesResponse {
        /// Allocated EIP ids
        address_set: Vec<String>,
        /// Async task id
        task_id: String,
    }
);

vpc_response!(
    /// Result of `DescribeAddresses`
    DescribeAddressesResponse {
        /// Total number of matches
        total_count: u64,
        /// EIPs of this page
        address_set: Vec<Address>,
    }
);

vpc_response!(
    /// Result of `ReleaseAddresses`
    ReleaseAddressesResponse {
        /// Async task id
        task_id: String,
    }
);

vpc_response!(
    /// Result of `AssociateAddress`
    AssociateAddressResponse {
        /// Async task id
        task_id: String,
    }
);

vpc_response!(
    /// Result of `DisassociateAddress`
    DisassociateAddressResponse {
        /// Async task id
        task_id: String,
    }
);

vpc_response!(
    /// Result of `CreateVpc`
    CreateVpcResponse {
        /// Created VPC
        vpc: Vpc,
    }
);

vpc_response!(
    /// Result of `DescribeVpcs`
    DescribeVpcsResponse {
        /// Total number of matches
        total_count: u64,
        /// VPCs of this page
        vpc_set: Vec<Vpc>,
    }
);

vpc_response!(
    /// Result of `ModifyVpcAttribute`
    ModifyVpcAttributeResponse {}
);

vpc_response!(
    /// Result of `DeleteVpc`
    DeleteVpcResponse {}
);

vpc_response!(
    /// Result of `CreateSubnet`
    CreateSubnetResponse {
        /// Created subnet
        subnet: Subnet,
    }
);

vpc_response!(
    /// Result of `DescribeSubnets`
    DescribeSubnetsResponse {
        /// Total number of matches
        total_count: u64,
        /// Subnets of this page
        subnet_set: Vec<Subnet>,
    }
);

vpc_response!(
    /// Result of `DeleteSubnet`
    DeleteSubnetResponse {}
);

vpc_response!(
    /// Result of `CreateRouteTable`
    CreateRouteTableResponse {
        /// Created route table
        route_table: RouteTable,
    }
);

vpc_response!(
    /// Result of `DescribeRouteTables`
    DescribeRouteTablesResponse {
        /// Total number of matches
        total_count: u64,
        /// Route tables of this page
        route_table_set: Vec<RouteTable>,
    }
);

vpc_response!(
    /// Result of `DeleteRouteTable`
    DeleteRouteTableResponse {}
);

vpc_response!(
    /// Result of `CreateRoutes`
    CreateRoutesResponse {
        /// Number of routes added
        total_count: u64,
        /// Route table after the change
        route_table_set: Vec<RouteTable>,
    }
);

vpc_response!(
    /// Result of `DeleteRoutes`
    DeleteRoutesResponse {
        /// Route table after the change
        route_set: Vec<Route>,
    }
);

vpc_response!(
    /// Result of `ReplaceRoutes`
    ReplaceRoutesResponse {
        /// Routes before the change
        old_route_set: Vec<Route>,
        /// Routes after the change
        new_route_set: Vec<Route>,
    }
);

vpc_response!(
    /// Result of `CreateSecurityGroup`
    CreateSecurityGroupResponse {
        /// Created security group
        security_group: SecurityGroup,
    }
);

vpc_response!(
    /// Result of `DescribeSecurityGroups`
    DescribeSecurityGroupsResponse {
        /// Security groups of this page
        security_group_set: Vec<SecurityGroup>,
        /// Total number of matches
        total_count: u64,
    }
);

vpc_response!(
    /// Result of `DeleteSecurityGroup`
    DeleteSecurityGroupResponse {}
);

vpc_response!(
    /// Result of `DescribeSecurityGroupPolicies`
    DescribeSecurityGroupPoliciesResponse {
        /// Rules of the group
        security_group_policy_set: SecurityGroupPolicySet,
    }
);

vpc_response!(
    /// Result of `ModifySecurityGroupPolicies`
    ModifySecurityGroupPoliciesResponse {}
);

vpc_response!(
    /// Result of `CreateSecurityGroupPolicies`
    CreateSecurityGroupPoliciesResponse {}
);

vpc_response!(
    /// Result of `CreateNetworkAcl`
    CreateNetworkAclResponse {
        /// Created ACL
        network_acl: NetworkAcl,
    }
);

vpc_response!(
    /// Result of `DescribeNetworkAcls`
    DescribeNetworkAclsResponse {
        /// ACLs of this page
        network_acl_set: Vec<NetworkAcl>,
        /// Total number of matches
        total_count: u64,
    }
);

vpc_response!(
    /// Result of `CreateNatGateway`
    CreateNatGatewayResponse {
        /// Created gateways
        nat_gateway_set: Vec<NatGateway>,
        /// Number of gateways created
        total_count: u64,
    }
);

vpc_response!(
    /// Result of `DescribeNatGateways`
    DescribeNatGatewaysResponse {
        /// Gateways of this page
        nat_gateway_set: Vec<NatGateway>,
        /// Total number of matches
        total_count: u64,
    }
);

vpc_response!(
    /// Result of `DeleteNatGateway`
    DeleteNatGatewayResponse {}
);

vpc_response!(
    /// Result of `CreateVpnGateway`
    CreateVpnGatewayResponse {
        /// Created gateway
        vpn_gateway: VpnGateway,
    }
);

vpc_response!(
    /// Result of `DescribeVpnGateways`
    DescribeVpnGatewaysResponse {
        /// Total number of matches
        total_count: u64,
        /// Gateways of this page
        vpn_gateway_set: Vec<VpnGateway>,
    }
);

vpc_response!(
    /// Result of `CreateCcn`
    CreateCcnResponse {
        /// Created CCN
        ccn: Ccn,
    }
);

vpc_response!(
    /// Result of `DescribeCcns`
    DescribeCcnsResponse {
        /// Total number of matches
        total_count: u64,
        /// CCNs of this page
        ccn_set: Vec<Ccn>,
    }
);

vpc_response!(
    /// Result of `AttachCcnInstances`
    AttachCcnInstancesResponse {}
);

vpc_response!(
    /// Result of `CreateDirectConnectGateway`
    CreateDirectConnectGatewayResponse {
        /// Created gateway
        direct_connect_gateway: DirectConnectGateway,
    }
);

vpc_response!(
    /// Result of `DescribeDirectConnectGateways`
    DescribeDirectConnectGatewaysResponse {
        /// Total number of matches
        total_count: u64,
        /// Gateways of this page
        direct_connect_gateway_set: Vec<DirectConnectGateway>,
    }
);

vpc_response!(
    /// Result of `CreateNetworkInterface`
    CreateNetworkInterfaceResponse {
        /// Created interface
        network_interface: NetworkInterface,
    }
);

vpc_response!(
    /// Result of `DescribeNetworkInterfaces`
    DescribeNetworkInterfacesResponse {
        /// Interfaces of this page
        network_interface_set: Vec<NetworkInterface>,
        /// Total number of matches
        total_count: u64,
    }
);

vpc_response!(
    /// Result of `AttachNetworkInterface`
    AttachNetworkInterfaceResponse {}
);

vpc_response!(
    /// Result of `CreateFlowLog`
    CreateFlowLogResponse {
        /// Created flow logs
        flow_log: Vec<FlowLog>,
    }
);

vpc_response!(
    /// Result of `DescribeFlowLogs`
    DescribeFlowLogsResponse {
        /// Flow logs of this page
        flow_log: Vec<FlowLog>,
        /// Total number of matches
        total_num: u64,
    }
);

vpc_response!(
    /// Result of `AssignIpv6CidrBlock`
    AssignIpv6CidrBlockResponse {
        /// Assigned IPv6 CIDR
        ipv6_cidr_block: String,
    }
);

vpc_response!(
    /// Result of `AssignIpv6Addresses`
    AssignIpv6AddressesResponse {
        /// Assigned addresses
        ipv6_address_set: Vec<Ipv6Address>,
    }
);
