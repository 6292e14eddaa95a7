use connectwise::{ClientConfig, ConnectWiseClient, Gettable, Paginateable, RequestParams};
use flexi_logger::Logger;
use futures::TryStreamExt;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Logger::try_with_env_or_str("info")?.log_to_stderr().start()?;

    // Reads connectwise.toml if present, then CWM_* variables
    let mut config = ClientConfig::load("connectwise.toml")?;
    config.apply_env_overrides();
    if let Err(errors) = config.validate() {
        for error in errors {
            eprintln!("Configuration error: {error}");
        }
        return Err("invalid configuration".into());
    }

    let client = ConnectWiseClient::connect(&config).await?;
    info!("Using {}", client.base_url());

    let slas = client.service().slas;
    let total = slas.count.get(None, None).await?;
    println!("=== {} SLAs ===", total.count);

    let first_page = slas
        .paginated(1, 25, Some(RequestParams::new().order_by("name")))
        .await?;
    let mut stream = std::pin::pin!(first_page.into_stream());
    while let Some(sla) = stream.try_next().await? {
        println!(
            "{:>5}  {:<30} respond {}h, resolve {}h",
            sla.id.unwrap_or_default(),
            sla.name,
            sla.respond_hours,
            sla.resolution_hours
        );
    }

    if let Some(id) = std::env::args().nth(1).and_then(|arg| arg.parse().ok()) {
        println!("\n=== Priorities of SLA {id} ===");
        for priority in slas.id(id).priorities.get(None, None).await? {
            let name = priority
                .priority
                .and_then(|p| p.name)
                .unwrap_or_default();
            println!("{name:<30} resolve {}h", priority.resolution_hours);
        }
    }

    Ok(())
}
