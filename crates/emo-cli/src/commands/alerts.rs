use anyhow::Context;
use emo_config::EmoConfig;
use emo_core::entities::{AlertRecord, FilterCriteria};
use emo_core::enums::Severity;
use emo_core::responses::AlertFeed;
use emo_shape::alert_feed;

use crate::cli::root_commands::AlertsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_len;
use crate::input::read_json;
use crate::output::{output, output_rows};

/// Handle `emo alerts`.
pub fn handle(args: &AlertsArgs, config: &EmoConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let alerts: Vec<AlertRecord> = read_json(&args.input)?;
    let criteria = criteria(args, config)?;
    let limit = effective_len(None, flags.limit, config.alerts.limit);
    let feed = alert_feed(&alerts, &criteria, Some(limit));

    match flags.format {
        OutputFormat::Table => {
            output_rows(
                &["id", "day", "severity", "org", "team", "headline"],
                &table_rows(&feed),
            );
            if !flags.quiet && feed.alerts.len() < feed.total_matched as usize {
                println!("({} of {} matching alerts)", feed.alerts.len(), feed.total_matched);
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&feed, flags.format),
    }
}

fn criteria(args: &AlertsArgs, config: &EmoConfig) -> anyhow::Result<FilterCriteria> {
    let min_severity = args
        .min_severity
        .as_deref()
        .or_else(|| {
            let configured = config.alerts.min_severity.trim();
            (!configured.is_empty()).then_some(configured)
        })
        .map(str::parse::<Severity>)
        .transpose()
        .context("invalid --min-severity")?;

    Ok(FilterCriteria {
        org_substring: args.org.clone(),
        team_substring: args.team.clone(),
        since_day: args.since.clone(),
        until_day: args.until.clone(),
        min_severity,
    })
}

fn table_rows(feed: &AlertFeed) -> Vec<Vec<String>> {
    feed.alerts
        .iter()
        .map(|alert| {
            vec![
                alert.id.clone(),
                alert.day.clone(),
                alert.severity.to_string(),
                alert.org_id.clone().unwrap_or_else(|| "-".into()),
                alert.team_id.clone().unwrap_or_else(|| "-".into()),
                alert.headline(),
            ]
        })
        .collect()
}
