use std::path::Path;

use anyhow::Context;
use emo_config::EmoConfig;

use crate::cli::GlobalFlags;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<EmoConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let explicit = flags.config.as_deref().map(Path::new);
    let config = EmoConfig::load_with_dotenv(&cwd, explicit)
        .context("failed to load emotrace configuration")?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
