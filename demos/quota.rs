use telekom_odg::{AccountBalance, Credentials, Environment, ModuleId, OdgClient, OdgError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let module = std::env::var("ODG_MODULE")
        .unwrap_or_else(|_| "SmsSandbox".to_owned())
        .parse::<ModuleId>()?;

    let client = OdgClient::builder(Credentials::from_env()?)
        .environment(Environment::from_env()?)
        .build()?;
    client.authorize().await?;

    match client.quota(module).await {
        Ok(quota) => println!("{module}: {quota:#}"),
        Err(OdgError::HttpStatus { status, body }) => {
            eprintln!("quota request rejected with {status}: {body}");
        }
        Err(err) => return Err(err.into()),
    }

    let balance = client.account_balance(AccountBalance::default()).await?;
    println!("balance: {balance:#}");

    Ok(())
}
