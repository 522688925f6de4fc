use emo_core::responses::KeywordMatches;
use emo_shape::evidence::find_keyword_spans;
use emo_shape::merge;

use crate::cli::root_commands::KeywordsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::input::read_text;
use crate::output::{output, output_rows, render_segments};

/// Handle `emo keywords`.
pub fn handle(args: &KeywordsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_text(&args.input)?;
    let found = find_keyword_spans(&text, &args.keywords);

    match flags.format {
        OutputFormat::Json => output(&found, flags.format),
        OutputFormat::Raw => {
            println!("{}", render_segments(&merge(&text, &found.highlights)));
            Ok(())
        }
        OutputFormat::Table => {
            output_rows(&["keyword", "start", "end", "text"], &table_rows(&found));
            Ok(())
        }
    }
}

fn table_rows(found: &KeywordMatches) -> Vec<Vec<String>> {
    found
        .highlights
        .iter()
        .map(|span| {
            vec![
                span.text.to_lowercase(),
                span.start.to_string(),
                span.end.to_string(),
                span.text.clone(),
            ]
        })
        .collect()
}
