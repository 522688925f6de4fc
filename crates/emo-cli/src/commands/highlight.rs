use std::fmt::Write as _;

use emo_core::entities::AlertDetail;
use emo_core::responses::AlertDetailView;
use emo_shape::evidence::detail_view;

use crate::cli::root_commands::HighlightArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::input::read_json;
use crate::output::{output, output_rows, render_segments};

/// Handle `emo highlight`.
pub fn handle(args: &HighlightArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let detail: AlertDetail = read_json(&args.input)?;
    let view = detail_view(&detail);

    match flags.format {
        OutputFormat::Json => output(&view, flags.format),
        OutputFormat::Raw => {
            print!("{}", render_text(&view));
            Ok(())
        }
        OutputFormat::Table => {
            println!("{} [{}] {}", view.alert.day, view.alert.severity, view.headline);
            output_rows(
                &["document", "contribution", "sentiment", "text"],
                &evidence_rows(&view),
            );
            Ok(())
        }
    }
}

/// Headline, then one block per evidence document with `[[ ]]` highlights.
fn render_text(view: &AlertDetailView) -> String {
    let mut out = format!("{}\n", view.headline);
    for evidence in &view.evidence {
        let _ = write!(
            out,
            "\n{} ({:.2})\n{}\n",
            evidence.document_ref,
            evidence.contribution,
            render_segments(&evidence.segments)
        );
    }
    out
}

fn evidence_rows(view: &AlertDetailView) -> Vec<Vec<String>> {
    view.evidence
        .iter()
        .map(|evidence| {
            vec![
                evidence.document_ref.clone(),
                format!("{:.2}", evidence.contribution),
                evidence.sentiment.clone().unwrap_or_else(|| "-".into()),
                render_segments(&evidence.segments),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn view() -> AlertDetailView {
        let detail: AlertDetail = serde_json::from_str(
            r#"{
                "alert": {"id": "a1", "day": "2026-02-23", "severity": "high",
                          "message": "Anger spike in payments"},
                "evidence": [
                    {"document_id": "doc-1", "external_id": "TKT-1", "contribution": 0.77,
                     "sentiment": "negative",
                     "text_redacted": "I am angry about the outage.",
                     "highlights": [{"start": 5, "end": 10, "label": "emotion", "text": "angry"},
                                    {"start": 21, "end": 27, "label": "keyword", "text": "outage"}]}
                ]
            }"#,
        )
        .expect("detail parses");
        detail_view(&detail)
    }

    #[test]
    fn raw_text_brackets_highlights() {
        assert_eq!(
            render_text(&view()),
            "Anger spike in payments\n\nTKT-1 (0.77)\nI am [[angry]] about the [[outage]].\n"
        );
    }

    #[test]
    fn table_rows_carry_rendered_text() {
        let rows = evidence_rows(&view());
        assert_eq!(
            rows,
            vec![vec![
                "TKT-1".to_string(),
                "0.77".to_string(),
                "negative".to_string(),
                "I am [[angry]] about the [[outage]].".to_string(),
            ]]
        );
    }
}
