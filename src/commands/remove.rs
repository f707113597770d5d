// ABOUTME: Remove command implementation.
// ABOUTME: Connects to the runtime and removes the requested images in order.

use super::runtime_connection::connect_to_runtime;
use imgrm::config::Config;
use imgrm::error::Result;
use imgrm::output::Output;
use imgrm::runtime::{RemoveOptions, RuntimeClassifier};
use imgrm::types::ImageName;
use nonempty::NonEmpty;

/// Remove every image in `images` from the configured runtime.
pub async fn remove(
    config: &Config,
    images: &NonEmpty<ImageName>,
    options: RemoveOptions,
    mut output: Output,
) -> Result<()> {
    let runtime = connect_to_runtime(config).await?;
    imgrm::remove::remove(&runtime, &RuntimeClassifier, images, options, &mut output).await
}
