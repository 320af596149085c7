//! Keeps a host route in the VPC route table
//!
//! An overlay network running on CVMs needs the subnet of every node routed to
//! that node. [`RouteSync::ensure_route`] makes sure the first route table of
//! the VPC sends `destination_cidr` to the CVM at `gateway_ip`.

use crate::error::{AppError, TcResult};
use crate::vpc::VpcClient;
use crate::vpc::models::{Filter, Route, RouteTable};
use crate::vpc::requests::{CreateRoutesRequest, DeleteRoutesRequest, DescribeRouteTablesRequest};
use tracing::{debug, info, warn};

/// Next hop type of a route to a CVM
pub const GATEWAY_TYPE_NORMAL_CVM: &str = "NORMAL_CVM";
/// Route type of routes created by users
pub const ROUTE_TYPE_USER: &str = "USER";

/// What [`RouteSync::ensure_route`] had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// An enabled route was already there
    AlreadyPresent,
    /// A new route was added
    Created,
}

/// Synchronises CVM routes of one VPC
#[derive(Debug, Clone)]
pub struct RouteSync {
    vpc: VpcClient,
}

impl RouteSync {
    /// Route synchroniser using `vpc`
    pub fn new(vpc: VpcClient) -> Self {
        Self { vpc }
    }

    /// Underlying VPC client
    #[must_use]
    pub fn vpc(&self) -> &VpcClient {
        &self.vpc
    }

    /// First route table of `vpc_id`
    pub async fn route_table(&self, vpc_id: &str) -> TcResult<RouteTable> {
        let request = DescribeRouteTablesRequest {
            filters: Some(vec![Filter::new("vpc-id", [vpc_id])]),
            ..DescribeRouteTablesRequest::new()
        };
        let response = self.vpc.describe_route_tables(request).await?;
        response
            .route_table_set
            .and_then(|tables| tables.into_iter().next())
            .ok_or_else(|| AppError::NoRouteTable(vpc_id.to_string()))
    }

    /// Routes `destination_cidr` to the CVM at `gateway_ip`
    ///
    /// Matching routes that are disabled are always deleted. A new enabled
    /// route is created only when no enabled match is left.
    pub async fn ensure_route(
        &self,
        vpc_id: &str,
        destination_cidr: &str,
        gateway_ip: &str,
    ) -> TcResult<RouteOutcome> {
        let table = self.route_table(vpc_id).await?;
        let table_id = table
            .route_table_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::InvalidInput(format!(
                    "DescribeRouteTables returned a table without RouteTableId for {vpc_id}"
                )))?;
        debug!("Using route table {} of {}", table_id, vpc_id);

        let mut enabled_found = false;
        for route in table
            .route_set
            .iter()
            .filter(|route| is_cvm_route_to(route, destination_cidr, gateway_ip))
        {
            if route.enabled == Some(true) {
                enabled_found = true;
                continue;
            }
            warn!(
                "Deleting disabled route {} via {} (id {:?}) from {}",
                destination_cidr, gateway_ip, route.route_id, table_id
            );
            let request = DeleteRoutesRequest {
                route_table_id: Some(table_id.clone()),
                routes: Some(vec![Route {
                    route_id: route.route_id,
                    ..Route::default()
                }]),
                ..DeleteRoutesRequest::new()
            };
            self.vpc.delete_routes(request).await?;
        }

        if enabled_found {
            debug!(
                "Route {} via {} already exists in {}",
                destination_cidr, gateway_ip, table_id
            );
            return Ok(RouteOutcome::AlreadyPresent);
        }

        let request = CreateRoutesRequest {
            route_table_id: Some(table_id.clone()),
            routes: Some(vec![Route {
                destination_cidr_block: Some(destination_cidr.to_string()),
                gateway_type: Some(GATEWAY_TYPE_NORMAL_CVM.to_string()),
                gateway_id: Some(gateway_ip.to_string()),
                enabled: Some(true),
                ..Route::default()
            }]),
            ..CreateRoutesRequest::new()
        };
        self.vpc.create_routes(request).await?;
        info!(
            "Created route {} via {} in {}",
            destination_cidr, gateway_ip, table_id
        );
        Ok(RouteOutcome::Created)
    }
}

fn is_cvm_route_to(route: &Route, destination_cidr: &str, gateway_ip: &str) -> bool {
    route.destination_cidr_block.as_deref() == Some(destination_cidr)
        && route.gateway_id.as_deref() == Some(gateway_ip)
        && route.gateway_type.as_deref() == Some(GATEWAY_TYPE_NORMAL_CVM)
        && route.route_type.as_deref() == Some(ROUTE_TYPE_USER)
}
