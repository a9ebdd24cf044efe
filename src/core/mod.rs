pub mod csv_source;
pub mod etl;
pub mod json_sink;
pub mod pipeline;

pub use crate::domain::model::{Document, Record, RenderedDocument};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
