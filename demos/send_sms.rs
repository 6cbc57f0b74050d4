use std::io;

use telekom_odg::{
    Credentials, Environment, MessageText, OdgClient, RawPhoneNumber, SendSms, SendSmsOptions,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let phone_raw = std::env::var("ODG_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ODG_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("ODG_MESSAGE")
        .unwrap_or_else(|_| "Hello from the telekom-odg demo.".to_owned());

    let client = OdgClient::builder(Credentials::from_env()?)
        .environment(Environment::from_env()?)
        .build()?;
    let token = client.authorize().await?;
    println!("authorized until {}", token.valid_until());

    let request = SendSms::new(
        RawPhoneNumber::new(phone_raw)?,
        MessageText::new(message)?,
        SendSmsOptions::default(),
    );
    let response = client.send_sms(request).await?;
    println!("{response:#}");

    Ok(())
}
