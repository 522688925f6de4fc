use emo_config::EmoConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &EmoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Highlight(args) => commands::highlight::handle(&args, flags),
        Commands::Trend(args) => commands::trend::handle(&args, config, flags).await,
        Commands::Alerts(args) => commands::alerts::handle(&args, config, flags),
        Commands::Keywords(args) => commands::keywords::handle(&args, flags),
        Commands::Score(args) => commands::score::handle(&args, config, flags),
    }
}
