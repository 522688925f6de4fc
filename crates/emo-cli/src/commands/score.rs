use std::collections::BTreeSet;

use emo_config::EmoConfig;
use emo_shape::evidence::{ContributionWeights, compute_contribution, find_keyword_spans};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScoreArgs;
use crate::input::read_text;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ScoreResponse {
    keyword_hits: Vec<String>,
    contribution: f64,
}

/// Handle `emo score`.
pub fn handle(args: &ScoreArgs, config: &EmoConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(confidence) = args.confidence {
        anyhow::ensure!(
            (0.0..=1.0).contains(&confidence),
            "--confidence must be within 0.0..=1.0, got {confidence}"
        );
    }

    let text = read_text(&args.input)?;
    let response = score(&text, args, &weights(args, config));
    output(&response, flags.format)
}

fn weights(args: &ScoreArgs, config: &EmoConfig) -> ContributionWeights {
    let targets = if args.targets.is_empty() {
        &config.evidence.target_emotions
    } else {
        &args.targets
    };
    ContributionWeights {
        target_sentiment: config.evidence.target_sentiment.clone(),
        target_emotions: targets.iter().cloned().collect::<BTreeSet<_>>(),
        default_confidence: config.evidence.default_confidence,
    }
}

fn score(text: &str, args: &ScoreArgs, weights: &ContributionWeights) -> ScoreResponse {
    let found = find_keyword_spans(text, &args.keywords);
    let contribution = compute_contribution(
        args.sentiment.as_deref(),
        &args.emotions,
        args.confidence,
        &found.hits,
        weights,
    );
    ScoreResponse {
        keyword_hits: found.hits,
        contribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args() -> ScoreArgs {
        ScoreArgs {
            input: "-".into(),
            keywords: vec!["outage".into(), "refund".into()],
            sentiment: Some("negative".into()),
            emotions: vec!["anger".into()],
            confidence: Some(0.9),
            targets: Vec::new(),
        }
    }

    #[test]
    fn targets_flag_overrides_config() {
        let mut config = EmoConfig::default();
        config.evidence.target_emotions = vec!["sadness".into()];

        let from_config = weights(&args(), &config);
        assert!(from_config.target_emotions.contains("sadness"));

        let flagged = ScoreArgs {
            targets: vec!["anger".into()],
            ..args()
        };
        let from_flag = weights(&flagged, &config);
        assert_eq!(
            from_flag.target_emotions.into_iter().collect::<Vec<_>>(),
            vec!["anger"]
        );
    }

    #[test]
    fn score_combines_keywords_and_labels() {
        let args = ScoreArgs {
            targets: vec!["anger".into()],
            ..args()
        };
        let config = EmoConfig::default();
        let response = score(
            "Third outage this week, I want a refund.",
            &args,
            &weights(&args, &config),
        );
        assert_eq!(response.keyword_hits, vec!["outage", "refund"]);
        // (1.0 + 0.5 + 0.4) * (0.5 + 0.9)
        assert!((response.contribution - 2.66).abs() < 1e-9);
    }
}
