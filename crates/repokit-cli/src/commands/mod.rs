//! Command implementations for repokit-cli
//!
//! Each command computes its result through repokit-core and prints it in
//! the requested format. Errors are returned, never printed here.

pub mod context;
pub mod list;
pub mod new;
pub mod search;
pub mod sync;

pub use context::{run_compress, run_inventory, run_transfer};
pub use list::{run_info, run_list};
pub use new::run_new;
pub use search::run_search;
pub use sync::run_sync;
