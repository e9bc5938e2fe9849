pub mod assemble;
pub mod correction;
pub mod error;
pub mod merge;
pub mod output;
pub mod table;

pub use assemble::assemble_dataset;
pub use correction::energy_loss_from_x;
pub use error::{PipelineError, Result};
pub use merge::{merge_uncertainty_pair, MERGED_SOURCE_NAME};
pub use output::write_csv;
