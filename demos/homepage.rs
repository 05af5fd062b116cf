use challenge_client::{ChallengeClient, ClientConfig, Credentials, HomePage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "challenge_client=debug".into()),
        )
        .init();

    let config = ClientConfig::load()?;
    let client = ChallengeClient::from_config(&config)?;

    let session = client
        .login(&Credentials {
            username: std::env::var("CHALLENGE_USERNAME")?,
            password: std::env::var("CHALLENGE_PASSWORD")?,
        })
        .await?;
    println!("Logged in as {}", session.name);

    match client.home_page(&session).await? {
        HomePage::Featured { event, view } => {
            println!("Featured event: {}", event.name);
            for tab in view.tabs() {
                let marker = if view.active() == Some(*tab) { "*" } else { " " };
                println!(" {marker} {}", tab.label());
            }
        }
        HomePage::EventList(events) => {
            println!("No featured event; {} active", events.len());
            for event in events {
                println!("  {} ({})", event.name, event.status);
            }
        }
    }

    let unread = client.unread_notification_count(&session).await?;
    println!("{unread} unread notifications");
    Ok(())
}
