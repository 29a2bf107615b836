mod preconditions;
mod release;
mod start;
mod version_resolver;

pub use preconditions::{GH_HINT, GIT_HINT, require_tool};
pub use release::{
    ReleaseContext, ReleaseInput, ReleaseOperation, ReleaseOutcome, ReleaseSummary,
    collect_assets,
};
pub use start::{APP_ENV, DEBUG_PORT_FLAG, LaunchConfig, StartOperation, StartOutcome};
pub use version_resolver::VersionResolver;
