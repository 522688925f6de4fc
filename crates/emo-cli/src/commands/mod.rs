pub mod alerts;
pub mod dispatch;
pub mod highlight;
pub mod keywords;
pub mod score;
pub mod shared;
pub mod trend;
