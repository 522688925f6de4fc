use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use emo_config::EmoConfig;
use emo_core::entities::{DocumentRecord, InferenceRecord, InferenceSample};
use emo_core::enums::DayKeyMode;
use emo_core::responses::TrendReport;
use emo_feed::{MemoryLookup, TrendWindow, collect_samples};
use emo_shape::trend::{day_key, dense_rows};
use emo_shape::{AggregateOptions, build_report};
use serde::Deserialize;

use crate::cli::root_commands::TrendArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_len;
use crate::input::read_json;
use crate::output::{output, output_rows};

/// A listed document with its latest inference, as the dashboard pairs them.
#[derive(Debug, Deserialize)]
struct DocumentPair {
    document: DocumentRecord,
    #[serde(default)]
    latest: Option<InferenceRecord>,
}

/// Handle `emo trend`.
pub async fn handle(
    args: &TrendArgs,
    config: &EmoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_len(None, flags.limit, config.trend.document_limit);
    let samples = match &args.inferences {
        Some(inferences) => samples_from_lookup(&args.input, inferences, config, limit).await?,
        None => samples_from_pairs(&args.input, limit)?,
    };

    let options = aggregate_options(args, config);
    let samples = match window(args, config) {
        Some(window) => within_window(samples, &window, options.day_key),
        None => samples,
    };
    let report = build_report(&samples, &options);

    match flags.format {
        OutputFormat::Table => {
            let mut headers = vec!["day"];
            headers.extend(report.series.iter().map(String::as_str));
            headers.push("total");
            output_rows(&headers, &table_rows(&report));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}

fn samples_from_pairs(input: &str, limit: usize) -> anyhow::Result<Vec<InferenceSample>> {
    let pairs: Vec<DocumentPair> = read_json(input)?;
    Ok(pairs
        .iter()
        .take(limit)
        .map(|pair| InferenceSample::from_document(&pair.document, pair.latest.as_ref()))
        .collect())
}

async fn samples_from_lookup(
    input: &str,
    inferences: &str,
    config: &EmoConfig,
    limit: usize,
) -> anyhow::Result<Vec<InferenceSample>> {
    let mut documents: Vec<DocumentRecord> = read_json(input)?;
    documents.truncate(limit);
    let latest: HashMap<String, Option<InferenceRecord>> = read_json(inferences)?;

    let lookup = Arc::new(MemoryLookup::new(latest));
    let ctx = config.session.context();
    let batch = collect_samples(lookup, &ctx, &documents, config.trend.concurrency).await;
    if !batch.is_complete() {
        tracing::warn!(
            failed = batch.failed.len(),
            "some documents were counted without inference"
        );
    }
    Ok(batch.samples)
}

fn aggregate_options(args: &TrendArgs, config: &EmoConfig) -> AggregateOptions {
    AggregateOptions {
        sentinel_label: args
            .sentinel
            .clone()
            .unwrap_or_else(|| config.trend.sentinel_label.clone()),
        day_key: if args.strict_days {
            DayKeyMode::Strict
        } else {
            config.trend.day_key
        },
    }
}

fn window(args: &TrendArgs, config: &EmoConfig) -> Option<TrendWindow> {
    let days = args
        .window_days
        .or_else(|| args.trailing.then_some(config.trend.window_days))?;
    let window = TrendWindow::trailing(days, Utc::now());
    tracing::debug!(
        since = %window.since_param(),
        until = %window.until_param(),
        "restricting trend to trailing window"
    );
    Some(window)
}

fn within_window(
    mut samples: Vec<InferenceSample>,
    window: &TrendWindow,
    mode: DayKeyMode,
) -> Vec<InferenceSample> {
    samples.retain(|sample| window.contains_day(&day_key(&sample.timestamp, mode)));
    samples
}

fn table_rows(report: &TrendReport) -> Vec<Vec<String>> {
    report
        .buckets
        .iter()
        .zip(dense_rows(&report.buckets, &report.series))
        .map(|(bucket, counts)| {
            let mut row = vec![bucket.day.clone()];
            row.extend(counts.iter().map(ToString::to_string));
            row.push(bucket.total().to_string());
            row
        })
        .collect()
}
