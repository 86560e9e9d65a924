use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use post_service::domain::post::PostCommandHandler;
use post_service::event_sourcing::store::InMemoryEventStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging with environment-based filtering; override with
    // RUST_LOG, e.g. RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,post_service=debug")),
        )
        .init();

    tracing::info!("Starting post command service demo");

    // The in-memory store plays both collaborator roles: event history
    // reader for replay, emission sink for produced events.
    let store = Arc::new(InMemoryEventStore::new());
    let handler = PostCommandHandler::new(store.clone(), store.clone());

    // Raw envelopes, as the transport layer would hand them over.
    let post = handler
        .handle_raw(r#"{"type":"CreateContent","payload":{"text":"hello world"}}"#)
        .await?;
    tracing::info!(post_id = %post.post_id, "Created post");
    let id = post.post_id.clone();

    let raw = format!(
        r#"{{"type":"DisableContent","payload":{{}},"meta":{{"urlParams":{{"postId":"{id}"}}}}}}"#
    );
    let post = handler.handle_raw(&raw).await?;
    tracing::info!(post_id = %post.post_id, enabled = post.enabled, "Disabled post");

    let raw = format!(
        r#"{{"type":"EditContent","payload":{{"text":"hello again"}},"meta":{{"urlParams":{{"postId":"{id}"}}}}}}"#
    );
    let post = handler.handle_raw(&raw).await?;
    tracing::info!(post_id = %post.post_id, text = %post.text, "Edited post");

    let raw = format!(
        r#"{{"type":"EnableContent","payload":{{}},"meta":{{"urlParams":{{"postId":"{id}"}}}}}}"#
    );
    let post = handler.handle_raw(&raw).await?;
    tracing::info!(post_id = %post.post_id, enabled = post.enabled, "Enabled post");

    // A rejected command produces no event: the stream still holds the
    // four accepted ones.
    if let Err(err) = handler.handle_raw(&raw).await {
        tracing::warn!(error = %err, "Rejected duplicate enable");
    }

    tracing::info!(
        events = store.stream_len(id.as_str()).await,
        text = %post.text,
        edited = post.edited,
        enabled = post.enabled,
        "Final state"
    );

    Ok(())
}
