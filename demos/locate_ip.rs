use std::io;
use std::net::IpAddr;

use telekom_odg::{Credentials, Environment, IpAddresses, LocateIp, OdgClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let addresses = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<IpAddr>())
        .collect::<Result<Vec<_>, _>>()?;
    let addresses = IpAddresses::new(addresses).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "usage: locate_ip <ip> [<ip>...]",
        )
    })?;

    let client = OdgClient::builder(Credentials::from_env()?)
        .environment(Environment::from_env()?)
        .build()?;
    client.authorize().await?;

    let response = client.locate_ip(LocateIp::new(addresses)).await?;
    println!("{response:#}");

    Ok(())
}
