mod assets;
mod context;
mod operation;

pub use assets::collect_assets;
pub use context::{ReleaseContext, ReleaseInput};
pub use operation::{ReleaseOperation, ReleaseOutcome, ReleaseSummary};
