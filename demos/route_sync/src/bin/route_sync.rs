/// Routes a node subnet to this CVM in the VPC route table
///
/// Region and VPC are read from the instance metadata service, so this has to
/// run on the CVM that should receive the traffic. Keys come from
/// `ACCESS_KEY_ID` / `ACCESS_KEY_SECRET`, falling back to the default chain.
///
/// To run this demo:
/// ```bash
/// cargo run --bin route_sync -- 10.244.1.0/24 [gateway-ip]
/// ```
use std::env;
use std::process::ExitCode;
use tencentcloud_vpc::prelude::*;

async fn run(destination_cidr: &str, gateway_ip: Option<String>) -> TcResult<RouteOutcome> {
    let metadata = MetadataClient::default();
    let region = metadata.region().await?;
    let vpc_id = metadata.vpc_id().await?;
    let gateway_ip = match gateway_ip {
        Some(ip) => ip,
        None => metadata.get("local-ipv4").await?,
    };
    info!("Instance in {} ({}), gateway {}", vpc_id, region, gateway_ip);

    let chain = ProviderChain::default()
        .with(EnvProvider::new("ACCESS_KEY_ID", "ACCESS_KEY_SECRET"))
        .with(default_provider_chain());
    let config = Config::new();
    let client = Client::init(region)
        .with_profile(config.profile)
        .with_provider(&chain)
        .await?;

    RouteSync::new(VpcClient::from_client(client))
        .ensure_route(&vpc_id, destination_cidr, &gateway_ip)
        .await
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logger();

    let mut args = env::args().skip(1);
    let Some(destination_cidr) = args.next() else {
        error!("Usage: route_sync <destination-cidr> [gateway-ip]");
        return ExitCode::FAILURE;
    };

    match run(&destination_cidr, args.next()).await {
        Ok(RouteOutcome::AlreadyPresent) => {
            info!("Route to {} already in place", destination_cidr);
            ExitCode::SUCCESS
        }
        Ok(RouteOutcome::Created) => {
            info!("Route to {} created", destination_cidr);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to sync route to {}: {}", destination_cidr, e);
            ExitCode::FAILURE
        }
    }
}
