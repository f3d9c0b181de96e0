pub mod checker;
pub mod prober;
pub mod report;

pub use crate::domain::model::{ProbeOutcome, ProbeTarget};
pub use crate::domain::ports::{ConfigProvider, Prober};
pub use crate::utils::error::Result;
