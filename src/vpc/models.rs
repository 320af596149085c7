//! Value types shared by VPC requests and responses
//!
//! Field names follow the wire schema in PascalCase; every field is optional
//! because the service omits what does not apply.

use serde::{Deserialize, Serialize};

/// Filter of a `Describe*` action
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    /// Attribute name, e.g. `vpc-id`
    pub name: String,
    /// Accepted values, OR-ed together
    pub values: Vec<String>,
}

impl Filter {
    /// Filter on `name` matching any of `values`
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Resource tag
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Tag value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Tag `key=value`
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// Route of a route table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    /// Destination IPv4 CIDR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_cidr_block: Option<String>,
    /// Next hop type, e.g. `NORMAL_CVM`, `NAT`, `VPN`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_type: Option<String>,
    /// Next hop address or id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// Route id, unique within its table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<u64>,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_description: Option<String>,
    /// Whether the route is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `USER`, `NETD` or `CCN`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_type: Option<String>,
    /// Table the route belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    /// Destination IPv6 CIDR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ipv6_cidr_block: Option<String>,
    /// Globally unique route id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_item_id: Option<String>,
}

/// Subnet to route table binding
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RouteTableAssociation {
    /// Subnet id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    /// Route table id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
}

/// Route table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RouteTable {
    /// VPC id
    pub vpc_id: Option<String>,
    /// Route table id
    pub route_table_id: Option<String>,
    /// Name
    pub route_table_name: Option<String>,
    /// Subnets bound to the table
    #[serde(default)]
    pub association_set: Vec<RouteTableAssociation>,
    /// Routes
    #[serde(default)]
    pub route_set: Vec<Route>,
    /// Whether this is the default table of the VPC
    pub main: Option<bool>,
    /// Creation time
    pub created_time: Option<String>,
    /// Tags
    #[serde(default)]
    pub tag_set: Vec<Tag>,
}

/// Virtual private cloud
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Vpc {
    /// Name
    pub vpc_name: Option<String>,
    /// VPC id
    pub vpc_id: Option<String>,
    /// IPv4 CIDR
    pub cidr_block: Option<String>,
    /// Whether this is the default VPC
    pub is_default: Option<bool>,
    /// Whether multicast is on
    pub enable_multicast: Option<bool>,
    /// Creation time
    pub created_time: Option<String>,
    /// DNS servers
    #[serde(default)]
    pub dns_server_set: Vec<String>,
    /// DHCP domain name
    pub domain_name: Option<String>,
    /// DHCP options id
    pub dhcp_options_id: Option<String>,
    /// Whether DHCP is on
    pub enable_dhcp: Option<bool>,
    /// IPv6 CIDR
    pub ipv6_cidr_block: Option<String>,
    /// Tags
    #[serde(default)]
    pub tag_set: Vec<Tag>,
}

/// Subnet
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    /// VPC id
    pub vpc_id: Option<String>,
    /// Subnet id
    pub subnet_id: Option<String>,
    /// Name
    pub subnet_name: Option<String>,
    /// IPv4 CIDR
    pub cidr_block: Option<String>,
    /// Whether this is the default subnet
    pub is_default: Option<bool>,
    /// Whether broadcast is on
    pub enable_broadcast: Option<bool>,
    /// Availability zone
    pub zone: Option<String>,
    /// Bound route table
    pub route_table_id: Option<String>,
    /// Creation time
    pub created_time: Option<String>,
    /// Free IPv4 addresses
    pub available_ip_address_count: Option<u64>,
    /// IPv6 CIDR
    pub ipv6_cidr_block: Option<String>,
    /// Bound network ACL
    pub network_acl_id: Option<String>,
    /// Total IPv4 addresses
    pub total_ip_address_count: Option<u64>,
    /// Tags
    #[serde(default)]
    pub tag_set: Vec<Tag>,
}

/// Elastic IP
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    /// EIP id, `eip-...`
    pub address_id: Option<String>,
    /// Name
    pub address_name: Option<String>,
    /// `CREATING`, `BINDED`, `UNBIND`, ...
    pub address_status: Option<String>,
    /// Public IP
    pub address_ip: Option<String>,
    /// Bound instance
    pub instance_id: Option<String>,
    /// Creation time
    pub created_time: Option<String>,
    /// Bound network interface
    pub network_interface_id: Option<String>,
    /// Bound private IP
    pub private_address_ip: Option<String>,
    /// Whether the EIP is isolated for arrears
    pub is_arrears: Option<bool>,
    /// Whether the EIP is blocked
    pub is_blocked: Option<bool>,
    /// Whether the EIP is EIP direct
    pub is_eip_direct_connection: Option<bool>,
    /// `EIP`, `AnycastEIP`, `HighQualityEIP`, ...
    pub address_type: Option<String>,
    /// Whether releasing the instance releases the EIP
    pub cascade_release: Option<bool>,
    /// ISP, e.g. `BGP`
    pub internet_service_provider: Option<String>,
    /// Bandwidth in Mbps
    pub bandwidth: Option<u64>,
    /// Billing mode
    pub internet_charge_type: Option<String>,
    /// Tags
    #[serde(default)]
    pub tag_set: Vec<Tag>,
}

/// Security group
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroup {
    /// Security group id, `sg-...`
    pub security_group_id: Option<String>,
    /// Name
    pub security_group_name: Option<String>,
    /// Description
    pub security_group_desc: Option<String>,
    /// Project id
    pub project_id: Option<String>,
    /// Whether this is the default group
    pub is_default: Option<bool>,
    /// Creation time
    pub created_time: Option<String>,
    /// Tags
    #[serde(default)]
    pub tag_set: Vec<Tag>,
    /// Update time
    pub update_time: Option<String>,
}

/// One security group rule
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroupPolicy {
    /// Position in the rule list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_index: Option<i64>,
    /// `TCP`, `UDP`, `ICMP`, `ICMPv6` or `ALL`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Port, range or `ALL`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// IPv4 CIDR
    #[serde(rename = "CidrBlock", skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    /// IPv6 CIDR
    #[serde(rename = "Ipv6CidrBlock", skip_serializing_if = "Option::is_none")]
    pub ipv6_cidr_block: Option<String>,
    /// Peer security group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_id: Option<String>,
    /// `ACCEPT` or `DROP`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_description: Option<String>,
    /// Last modification time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_time: Option<String>,
}

/// Ingress and egress rules of a security group
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroupPolicySet {
    /// Rule set version, incremented on every change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Egress rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub egress: Vec<SecurityGroupPolicy>,
    /// Ingress rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingress: Vec<SecurityGroupPolicy>,
}

/// Network ACL
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkAcl {
    /// VPC id
    pub vpc_id: Option<String>,
    /// ACL id, `acl-...`
    pub network_acl_id: Option<String>,
    /// Name
    pub network_acl_name: Option<String>,
    /// Creation time
    pub created_time: Option<String>,
    /// Bound subnets
    #[serde(default)]
    pub subnet_set: Vec<Subnet>,
}

/// NAT gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NatGateway {
    /// Gateway id, `nat-...`
    pub nat_gateway_id: Option<String>,
    /// Name
    pub nat_gateway_name: Option<String>,
    /// Creation time
    pub created_time: Option<String>,
    /// `PENDING`, `AVAILABLE`, `FAILED`, ...
    pub state: Option<String>,
    /// Maximum outbound bandwidth in Mbps
    pub internet_max_bandwidth_out: Option<u64>,
    /// Maximum concurrent connections
    pub max_concurrent_connection: Option<u64>,
    /// VPC id
    pub vpc_id: Option<String>,
    /// Availability zone
    pub zone: Option<String>,
    /// Tags
    #[serde(default)]
    pub tag_set: Vec<Tag>,
}

/// VPN gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct VpnGateway {
    /// Gateway id, `vpngw-...`
    pub vpn_gateway_id: Option<String>,
    /// VPC id
    pub vpc_id: Option<String>,
    /// Name
    pub vpn_gateway_name: Option<String>,
    /// `IPSEC`, `SSL` or `CCN`
    #[serde(rename = "Type")]
    pub gateway_type: Option<String>,
    /// `PENDING`, `DELETING`, `AVAILABLE`
    pub state: Option<String>,
    /// Public IP
    pub public_ip_address: Option<String>,
    /// Renewal flag
    pub renew_flag: Option<String>,
    /// Billing mode
    pub instance_charge_type: Option<String>,
    /// Bandwidth in Mbps
    pub internet_max_bandwidth_out: Option<u64>,
    /// Creation time
    pub created_time: Option<String>,
    /// Expiry time of prepaid gateways
    pub expired_time: Option<String>,
    /// Availability zone
    pub zone: Option<String>,
}

/// Cloud connect network
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Ccn {
    /// CCN id, `ccn-...`
    pub ccn_id: Option<String>,
    /// Name
    pub ccn_name: Option<String>,
    /// Description
    pub ccn_description: Option<String>,
    /// Number of attached instances
    pub instance_count: Option<u64>,
    /// Creation time
    pub create_time: Option<String>,
    /// `ISOLATED` or `AVAILABLE`
    pub state: Option<String>,
    /// `AG`, `PT`, ...
    pub qos_level: Option<String>,
    /// Billing mode
    pub instance_charge_type: Option<String>,
    /// Bandwidth limit type
    pub bandwidth_limit_type: Option<String>,
    /// Tags
    #[serde(default)]
    pub tag_set: Vec<Tag>,
}

/// Instance attached to a CCN
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CcnInstance {
    /// Instance id, e.g. a VPC id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Region of the instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_region: Option<String>,
    /// `VPC`, `DIRECTCONNECT`, `BMVPC`, `VPNGW`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CcnInstance {
    /// Instance `instance_id` living in `instance_region`
    pub fn new(instance_id: impl Into<String>, instance_region: impl Into<String>) -> Self {
        Self {
            instance_id: Some(instance_id.into()),
            instance_region: Some(instance_region.into()),
            ..Self::default()
        }
    }
}

/// Direct connect gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DirectConnectGateway {
    /// Gateway id, `dcg-...`
    pub direct_connect_gateway_id: Option<String>,
    /// Name
    pub direct_connect_gateway_name: Option<String>,
    /// VPC or CCN id the gateway belongs to
    pub vpc_id: Option<String>,
    /// `VPC` or `CCN`
    pub network_type: Option<String>,
    /// Network instance id
    pub network_instance_id: Option<String>,
    /// `NORMAL` or `NAT`
    pub gateway_type: Option<String>,
    /// Creation time
    pub create_time: Option<String>,
    /// Gateway IP
    pub direct_connect_gateway_ip: Option<String>,
    /// CCN id
    pub ccn_id: Option<String>,
    /// Availability zone
    pub zone: Option<String>,
}

/// Private IP of a network interface
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PrivateIpAddressSpecification {
    /// Private IP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    /// Whether this is the primary IP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    /// Public IP mapped to it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip_address: Option<String>,
    /// Bound EIP id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the IP is wan blocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_wan_ip_blocked: Option<bool>,
    /// `PENDING`, `MIGRATING`, `DELETING`, `AVAILABLE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// IPv6 address of a network interface
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Ipv6Address {
    /// IPv6 address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Whether this is the primary IPv6
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    /// Bound EIP id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether public access is blocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_wan_ip_blocked: Option<bool>,
    /// `PENDING`, `MIGRATING`, `DELETING`, `AVAILABLE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Ipv6Address {
    /// Address to assign
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }
}

/// Instance a network interface is attached to
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkInterfaceAttachment {
    /// CVM instance id
    pub instance_id: Option<String>,
    /// Index on the instance
    pub device_index: Option<u64>,
    /// Owner account
    pub instance_account_id: Option<String>,
    /// Attach time
    pub attach_time: Option<String>,
}

/// Elastic network interface
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkInterface {
    /// ENI id, `eni-...`
    pub network_interface_id: Option<String>,
    /// Name
    pub network_interface_name: Option<String>,
    /// Description
    pub network_interface_description: Option<String>,
    /// Subnet id
    pub subnet_id: Option<String>,
    /// VPC id
    pub vpc_id: Option<String>,
    /// Bound security groups
    #[serde(default)]
    pub group_set: Vec<String>,
    /// Whether this is the primary interface of its instance
    pub primary: Option<bool>,
    /// MAC address
    pub mac_address: Option<String>,
    /// `PENDING`, `AVAILABLE`, `ATTACHING`, `DETACHING`, `DELETING`
    pub state: Option<String>,
    /// Private IPs
    #[serde(default)]
    pub private_ip_address_set: Vec<PrivateIpAddressSpecification>,
    /// Attachment, when attached
    pub attachment: Option<NetworkInterfaceAttachment>,
    /// Availability zone
    pub zone: Option<String>,
    /// Creation time
    pub created_time: Option<String>,
    /// IPv6 addresses
    #[serde(default)]
    pub ipv6_address_set: Vec<Ipv6Address>,
    /// Tags
    #[serde(default)]
    pub tag_set: Vec<Tag>,
}

/// Flow log
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FlowLog {
    /// VPC id
    pub vpc_id: Option<String>,
    /// Flow log id, `fl-...`
    pub flow_log_id: Option<String>,
    /// Name
    pub flow_log_name: Option<String>,
    /// `VPC`, `SUBNET`, `NETWORKINTERFACE`, `CCN`, ...
    pub resource_type: Option<String>,
    /// Resource id
    pub resource_id: Option<String>,
    /// `ACCEPT`, `REJECT` or `ALL`
    pub traffic_type: Option<String>,
    /// CLS log set
    pub cloud_log_id: Option<String>,
    /// CLS log state
    pub cloud_log_state: Option<String>,
    /// Description
    pub flow_log_description: Option<String>,
    /// Creation time
    pub created_time: Option<String>,
    /// Tags
    #[serde(default)]
    pub tag_set: Vec<Tag>,
    /// Whether collection is on
    pub enable: Option<bool>,
}
