//! Typed requests of the VPC actions
//!
//! Every request is bound to `("vpc", "2017-03-12", <action>)` by its `new()`
//! constructor. Unset fields are left out of the payload.

use crate::constants::{VPC_API_VERSION, VPC_SERVICE};
use crate::model::request::{BaseRequest, impl_api_request};
use crate::vpc::models::{
    CcnInstance, Filter, Ipv6Address, PrivateIpAddressSpecification, Route,
    SecurityGroupPolicySet, Tag,
};
use serde::Serialize;

macro_rules! vpc_request {
    (
        $(#[$meta:meta])*
        $name:ident, $action:literal $(, $token:ident)? {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, Serialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            /// Routing, headers and context of the call
            #[serde(skip)]
            pub base: BaseRequest,
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl_api_request!($name, VPC_SERVICE, VPC_API_VERSION, $action $(, $token)?);
    };
}

// Elastic IPs

vpc_request!(
    /// Allocates elastic IPs
    AllocateAddressesRequest, "AllocateAddresses", client_token {
        /// Number of EIPs, 1 by default
        address_count: u64,
        /// ISP, `BGP` by default
        internet_service_provider: String,
        /// Billing mode
        internet_charge_type: String,
        /// Bandwidth in Mbps
        internet_max_bandwidth_out: u64,
        /// `EIP`, `AnycastEIP`, `HighQualityEIP`, ...
        address_type: String,
        /// Tags applied to the EIPs
        tags: Vec<Tag>,
        /// Name of the EIPs
        address_name: String,
        /// Idempotency token
        client_token: String,
    }
);

vpc_request!(
    /// Lists elastic IPs
    DescribeAddressesRequest, "DescribeAddresses" {
        /// EIP ids, exclusive with `filters`
        address_ids: Vec<String>,
        /// Filters such as `address-id`, `address-name`, `address-ip`
        filters: Vec<Filter>,
        /// Offset
        offset: u64,
        /// Page size, at most 100
        limit: u64,
    }
);

vpc_request!(
    /// Releases elastic IPs
    ReleaseAddressesRequest, "ReleaseAddresses" {
        /// EIP ids
        address_ids: Vec<String>,
    }
);

vpc_request!(
    /// Binds an elastic IP to an instance or an interface
    AssociateAddressRequest, "AssociateAddress" {
        /// EIP id
        address_id: String,
        /// CVM instance id
        instance_id: String,
        /// Network interface id
        network_interface_id: String,
        /// Private IP on the interface
        private_ip_address: String,
        /// Whether binding an already bound EIP moves it
        eip_direct_connection: bool,
    }
);

vpc_request!(
    /// Unbinds an elastic IP
    DisassociateAddressRequest, "DisassociateAddress" {
        /// EIP id
        address_id: String,
        /// Whether a new public IP is allocated to the instance
        reallocate_normal_public_ip: bool,
    }
);

// VPCs

vpc_request!(
    /// Creates a VPC
    CreateVpcRequest, "CreateVpc" {
        /// Name, at most 60 characters
        vpc_name: String,
        /// IPv4 CIDR inside 10.0.0.0/12, 172.16.0.0/12 or 192.168.0.0/16
        cidr_block: String,
        /// Whether multicast is on, `"true"` or `"false"`
        enable_multicast: String,
        /// DNS servers, at most 4
        dns_servers: Vec<String>,
        /// DHCP domain name
        domain_name: String,
        /// Tags
        tags: Vec<Tag>,
    }
);

vpc_request!(
    /// Lists VPCs
    DescribeVpcsRequest, "DescribeVpcs" {
        /// VPC ids, exclusive with `filters`
        vpc_ids: Vec<String>,
        /// Filters such as `vpc-name`, `is-default`, `vpc-id`, `cidr-block`
        filters: Vec<Filter>,
        /// Offset
        offset: String,
        /// Page size
        limit: String,
    }
);

vpc_request!(
    /// Modifies the attributes of a VPC
    ModifyVpcAttributeRequest, "ModifyVpcAttribute" {
        /// VPC id
        vpc_id: String,
        /// New name
        vpc_name: String,
        /// Whether multicast is on, `"true"` or `"false"`
        enable_multicast: String,
        /// DNS servers
        dns_servers: Vec<String>,
        /// DHCP domain name
        domain_name: String,
    }
);

vpc_request!(
    /// Deletes a VPC
    DeleteVpcRequest, "DeleteVpc" {
        /// VPC id
        vpc_id: String,
    }
);

// Subnets

vpc_request!(
    /// Creates a subnet
    CreateSubnetRequest, "CreateSubnet" {
        /// VPC id
        vpc_id: String,
        /// Name
        subnet_name: String,
        /// IPv4 CIDR inside the VPC CIDR
        cidr_block: String,
        /// Availability zone
        zone: String,
        /// Tags
        tags: Vec<Tag>,
    }
);

vpc_request!(
    /// Lists subnets
    DescribeSubnetsRequest, "DescribeSubnets" {
        /// Subnet ids, exclusive with `filters`
        subnet_ids: Vec<String>,
        /// Filters such as `subnet-id`, `vpc-id`, `cidr-block`, `zone`
        filters: Vec<Filter>,
        /// Offset
        offset: String,
        /// Page size
        limit: String,
    }
);

vpc_request!(
    /// Deletes a subnet
    DeleteSubnetRequest, "DeleteSubnet" {
        /// Subnet id
        subnet_id: String,
    }
);

// Route tables

vpc_request!(
    /// Creates a route table
    CreateRouteTableRequest, "CreateRouteTable" {
        /// VPC id
        vpc_id: String,
        /// Name
        route_table_name: String,
        /// Tags
        tags: Vec<Tag>,
    }
);

vpc_request!(
    /// Lists route tables
    DescribeRouteTablesRequest, "DescribeRouteTables" {
        /// Filters such as `route-table-id`, `vpc-id`, `association.main`
        filters: Vec<Filter>,
        /// Route table ids, exclusive with `filters`
        route_table_ids: Vec<String>,
        /// Offset
        offset: String,
        /// Page size
        limit: String,
    }
);

vpc_request!(
    /// Deletes a route table
    DeleteRouteTableRequest, "DeleteRouteTable" {
        /// Route table id
        route_table_id: String,
    }
);

vpc_request!(
    /// Adds routes to a route table
    CreateRoutesRequest, "CreateRoutes" {
        /// Route table id
        route_table_id: String,
        /// Routes to add
        routes: Vec<Route>,
    }
);

vpc_request!(
    /// Removes routes from a route table
    DeleteRoutesRequest, "DeleteRoutes" {
        /// Route table id
        route_table_id: String,
        /// Routes to remove, identified by `route_id`
        routes: Vec<Route>,
    }
);

vpc_request!(
    /// Replaces routes of a route table in place
    ReplaceRoutesRequest, "ReplaceRoutes" {
        /// Route table id
        route_table_id: String,
        /// New routes, identified by `route_id`
        routes: Vec<Route>,
    }
);

// Security groups

vpc_request!(
    /// Creates a security group
    CreateSecurityGroupRequest, "CreateSecurityGroup" {
        /// Name
        group_name: String,
        /// Description
        group_description: String,
        /// Project id, `"0"` by default
        project_id: String,
        /// Tags
        tags: Vec<Tag>,
    }
);

vpc_request!(
    /// Lists security groups
    DescribeSecurityGroupsRequest, "DescribeSecurityGroups" {
        /// Security group ids, exclusive with `filters`
        security_group_ids: Vec<String>,
        /// Filters such as `security-group-id`, `security-group-name`
        filters: Vec<Filter>,
        /// Offset
        offset: String,
        /// Page size
        limit: String,
    }
);

vpc_request!(
    /// Deletes a security group
    DeleteSecurityGroupRequest, "DeleteSecurityGroup" {
        /// Security group id
        security_group_id: String,
    }
);

vpc_request!(
    /// Reads the rules of a security group
    DescribeSecurityGroupPoliciesRequest, "DescribeSecurityGroupPolicies" {
        /// Security group id
        security_group_id: String,
        /// Filters such as `protocol`, `port`, `action`
        filters: Vec<Filter>,
    }
);

vpc_request!(
    /// Replaces the rules of a security group
    ModifySecurityGroupPoliciesRequest, "ModifySecurityGroupPolicies" {
        /// Security group id
        security_group_id: String,
        /// New rules
        security_group_policy_set: SecurityGroupPolicySet,
        /// Whether an empty direction clears its rules
        sort_policys: bool,
    }
);

vpc_request!(
    /// Adds rules to a security group
    CreateSecurityGroupPoliciesRequest, "CreateSecurityGroupPolicies" {
        /// Security group id
        security_group_id: String,
        /// Rules to add, one direction per call
        security_group_policy_set: SecurityGroupPolicySet,
    }
);

// Network ACLs

vpc_request!(
    /// Creates a network ACL
    CreateNetworkAclRequest, "CreateNetworkAcl" {
        /// VPC id
        vpc_id: String,
        /// Name
        network_acl_name: String,
        /// Tags
        tags: Vec<Tag>,
    }
);

vpc_request!(
    /// Lists network ACLs
    DescribeNetworkAclsRequest, "DescribeNetworkAcls" {
        /// Filters such as `vpc-id`, `network-acl-id`, `network-acl-name`
        filters: Vec<Filter>,
        /// ACL ids, exclusive with `filters`
        network_acl_ids: Vec<String>,
        /// Offset
        offset: u64,
        /// Page size
        limit: u64,
    }
);

// NAT gateways

vpc_request!(
    /// Creates a NAT gateway
    CreateNatGatewayRequest, "CreateNatGateway" {
        /// Name
        nat_gateway_name: String,
        /// VPC id
        vpc_id: String,
        /// Maximum outbound bandwidth in Mbps
        internet_max_bandwidth_out: u64,
        /// Maximum concurrent connections
        max_concurrent_connection: u64,
        /// Number of EIPs to allocate
        address_count: u64,
        /// Existing EIPs to bind
        public_ip_addresses: Vec<String>,
        /// Availability zone
        zone: String,
        /// Tags
        tags: Vec<Tag>,
        /// Subnet of the gateway
        subnet_id: String,
    }
);

vpc_request!(
    /// Lists NAT gateways
    DescribeNatGatewaysRequest, "DescribeNatGateways" {
        /// Gateway ids, exclusive with `filters`
        nat_gateway_ids: Vec<String>,
        /// Filters such as `nat-gateway-id`, `vpc-id`, `nat-gateway-name`
        filters: Vec<Filter>,
        /// Offset
        offset: u64,
        /// Page size
        limit: u64,
    }
);

vpc_request!(
    /// Deletes a NAT gateway
    DeleteNatGatewayRequest, "DeleteNatGateway" {
        /// Gateway id
        nat_gateway_id: String,
    }
);

// VPN gateways

vpc_request!(
    /// Creates a VPN gateway
    CreateVpnGatewayRequest, "CreateVpnGateway" {
        /// VPC id
        vpc_id: String,
        /// Name
        vpn_gateway_name: String,
        /// Bandwidth in Mbps
        internet_max_bandwidth_out: u64,
        /// `POSTPAID_BY_HOUR` or `PREPAID`
        instance_charge_type: String,
        /// Availability zone
        zone: String,
        /// `IPSEC`, `SSL` or `CCN`
        #[serde(rename = "Type")]
        gateway_type: String,
        /// Tags
        tags: Vec<Tag>,
    }
);

vpc_request!(
    /// Lists VPN gateways
    DescribeVpnGatewaysRequest, "DescribeVpnGateways" {
        /// Gateway ids, exclusive with `filters`
        vpn_gateway_ids: Vec<String>,
        /// Filters such as `vpc-id`, `vpn-gateway-id`, `vpn-gateway-type`
        filters: Vec<Filter>,
        /// Offset
        offset: u64,
        /// Page size
        limit: u64,
    }
);

// Cloud connect networks

vpc_request!(
    /// Creates a cloud connect network
    CreateCcnRequest, "CreateCcn" {
        /// Name
        ccn_name: String,
        /// Description
        ccn_description: String,
        /// `PT`, `AU` or `AG`
        qos_level: String,
        /// `POSTPAID` or `PREPAID`
        instance_charge_type: String,
        /// `OUTER_REGION_LIMIT` or `INTER_REGION_LIMIT`
        bandwidth_limit_type: String,
        /// Tags
        tags: Vec<Tag>,
    }
);

vpc_request!(
    /// Lists cloud connect networks
    DescribeCcnsRequest, "DescribeCcns" {
        /// CCN ids, exclusive with `filters`
        ccn_ids: Vec<String>,
        /// Filters such as `ccn-id`, `ccn-name`, `state`
        filters: Vec<Filter>,
        /// Offset
        offset: u64,
        /// Page size
        limit: u64,
        /// Sort field
        order_field: String,
        /// `ASC` or `DESC`
        order_direction: String,
    }
);

vpc_request!(
    /// Attaches network instances to a cloud connect network
    AttachCcnInstancesRequest, "AttachCcnInstances" {
        /// CCN id
        ccn_id: String,
        /// Instances to attach
        instances: Vec<CcnInstance>,
        /// Owner of the CCN when attaching across accounts
        ccn_uin: String,
    }
);

// Direct connect gateways

vpc_request!(
    /// Creates a direct connect gateway
    CreateDirectConnectGatewayRequest, "CreateDirectConnectGateway" {
        /// Name
        direct_connect_gateway_name: String,
        /// `VPC` or `CCN`
        network_type: String,
        /// VPC or CCN id
        network_instance_id: String,
        /// `NORMAL` or `NAT`
        gateway_type: String,
        /// Availability zone
        zone: String,
    }
);

vpc_request!(
    /// Lists direct connect gateways
    DescribeDirectConnectGatewaysRequest, "DescribeDirectConnectGateways" {
        /// Gateway ids, exclusive with `filters`
        direct_connect_gateway_ids: Vec<String>,
        /// Filters such as `direct-connect-gateway-id`, `vpc-id`, `gateway-type`
        filters: Vec<Filter>,
        /// Offset
        offset: u64,
        /// Page size
        limit: u64,
    }
);

// Elastic network interfaces

vpc_request!(
    /// Creates an elastic network interface
    CreateNetworkInterfaceRequest, "CreateNetworkInterface" {
        /// VPC id
        vpc_id: String,
        /// Name
        network_interface_name: String,
        /// Subnet id
        subnet_id: String,
        /// Description
        network_interface_description: String,
        /// Number of private IPs allocated automatically
        secondary_private_ip_address_count: u64,
        /// Security groups to bind
        security_group_ids: Vec<String>,
        /// Private IPs to assign
        private_ip_addresses: Vec<PrivateIpAddressSpecification>,
        /// Tags
        tags: Vec<Tag>,
    }
);

vpc_request!(
    /// Lists elastic network interfaces
    DescribeNetworkInterfacesRequest, "DescribeNetworkInterfaces" {
        /// Interface ids, exclusive with `filters`
        network_interface_ids: Vec<String>,
        /// Filters such as `vpc-id`, `subnet-id`, `attachment.instance-id`
        filters: Vec<Filter>,
        /// Offset
        offset: u64,
        /// Page size
        limit: u64,
    }
);

vpc_request!(
    /// Attaches an elastic network interface to a CVM
    AttachNetworkInterfaceRequest, "AttachNetworkInterface" {
        /// Interface id
        network_interface_id: String,
        /// CVM instance id
        instance_id: String,
        /// `0` for a standard interface, `1` for an extended one
        attach_type: u64,
    }
);

// Flow logs

vpc_request!(
    /// Creates a flow log
    CreateFlowLogRequest, "CreateFlowLog" {
        /// Name
        flow_log_name: String,
        /// `VPC`, `SUBNET`, `NETWORKINTERFACE`, `CCN`, ...
        resource_type: String,
        /// Resource id
        resource_id: String,
        /// `ACCEPT`, `REJECT` or `ALL`
        traffic_type: String,
        /// VPC id, required unless the resource is a CCN
        vpc_id: String,
        /// Description
        flow_log_description: String,
        /// CLS log set
        cloud_log_id: String,
        /// Tags
        tags: Vec<Tag>,
    }
);

vpc_request!(
    /// Lists flow logs
    DescribeFlowLogsRequest, "DescribeFlowLogs" {
        /// VPC id
        vpc_id: String,
        /// Flow log id
        flow_log_id: String,
        /// Name
        flow_log_name: String,
        /// Resource type
        resource_type: String,
        /// Resource id
        resource_id: String,
        /// Traffic type
        traffic_type: String,
        /// CLS log set
        cloud_log_id: String,
        /// Sort field
        order_field: String,
        /// `ASC` or `DESC`
        order_direction: String,
        /// Offset
        offset: u64,
        /// Page size
        limit: u64,
        /// Filters
        filters: Filter,
    }
);

// IPv6

vpc_request!(
    /// Assigns an IPv6 CIDR to a VPC
    AssignIpv6CidrBlockRequest, "AssignIpv6CidrBlock" {
        /// VPC id
        vpc_id: String,
    }
);

vpc_request!(
    /// Assigns IPv6 addresses to a network interface
    AssignIpv6AddressesRequest, "AssignIpv6Addresses" {
        /// Interface id
        network_interface_id: String,
        /// Addresses to assign, exclusive with the count
        ipv6_addresses: Vec<Ipv6Address>,
        /// Number of addresses allocated automatically
        ipv6_address_count: u64,
    }
);
