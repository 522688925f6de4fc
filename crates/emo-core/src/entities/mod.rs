//! Record types for emotrace.
//!
//! Backend records (`DocumentRecord`, `InferenceRecord`, `AlertRecord`,
//! `EvidenceRecord`) are read-only inputs produced by the HTTP API. The rest are
//! values the shaping functions produce or consume. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod alert;
mod document;
mod evidence;
mod span;
mod trend;

pub use alert::{AlertRecord, FilterCriteria};
pub use document::{DocumentRecord, InferenceRecord, InferenceSample};
pub use evidence::{AlertDetail, EvidenceRecord};
pub use span::{Segment, TextSpan};
pub use trend::DayBucket;
