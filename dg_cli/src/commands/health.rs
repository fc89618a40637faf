use crate::client::CliClient;
use crate::error::Result;

pub async fn handle(client: &CliClient) -> Result<()> {
    let body = client.health().await?;
    println!("{body}");
    Ok(())
}
