use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Render an alert's evidence with highlighted spans.
    Highlight(HighlightArgs),
    /// Bucket documents into per-day emotion counts.
    Trend(TrendArgs),
    /// Filter an alert list.
    Alerts(AlertsArgs),
    /// Find whole-word keyword spans in a text.
    Keywords(KeywordsArgs),
    /// Score a text as alert evidence.
    Score(ScoreArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HighlightArgs {
    /// Alert detail JSON (`{ alert, evidence }`), or `-` for stdin.
    pub input: String,
}

#[derive(Clone, Debug, Args)]
pub struct TrendArgs {
    /// JSON array of `{ document, latest }` pairs, or `-` for stdin. With
    /// `--inferences`, a JSON array of documents instead.
    pub input: String,

    /// JSON object mapping document id to its latest inference (or null).
    /// Lookups run concurrently, bounded by `trend.concurrency`.
    #[arg(long)]
    pub inferences: Option<String>,

    /// Parse timestamps and bucket by UTC date instead of the first ten characters.
    #[arg(long)]
    pub strict_days: bool,

    /// Label counted for documents without inference.
    #[arg(long)]
    pub sentinel: Option<String>,

    /// Only keep days in the trailing window of this many days.
    #[arg(long, conflicts_with = "trailing")]
    pub window_days: Option<u32>,

    /// Only keep days in the trailing `trend.window_days` window.
    #[arg(long)]
    pub trailing: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AlertsArgs {
    /// JSON array of alerts, or `-` for stdin.
    pub input: String,

    /// Organization id substring (case-insensitive).
    #[arg(long)]
    pub org: Option<String>,

    /// Team id substring (case-insensitive).
    #[arg(long)]
    pub team: Option<String>,

    /// First day to include (`YYYY-MM-DD`).
    #[arg(long)]
    pub since: Option<String>,

    /// Last day to include (`YYYY-MM-DD`).
    #[arg(long)]
    pub until: Option<String>,

    /// Lowest severity to include: low, medium, high.
    #[arg(long)]
    pub min_severity: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct KeywordsArgs {
    /// Text file to search, or `-` for stdin.
    pub input: String,

    /// Keyword to look for (repeatable).
    #[arg(short = 'k', long = "keyword", required = true)]
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ScoreArgs {
    /// Text file to score, or `-` for stdin.
    pub input: String,

    /// Keyword to look for (repeatable).
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    /// Sentiment the model assigned to the text.
    #[arg(long)]
    pub sentiment: Option<String>,

    /// Emotion label the model assigned to the text (repeatable).
    #[arg(short = 'e', long = "emotion")]
    pub emotions: Vec<String>,

    /// Model confidence in `0.0..=1.0`; defaults to `evidence.default_confidence`.
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Emotion the alert rule watches (repeatable); overrides `evidence.target_emotions`.
    #[arg(long = "target")]
    pub targets: Vec<String>,
}
