//! Logging utilities for deepsearcher-llm
//!
//! Re-exports tracing macros under the crate's `log_*` names.

pub use tracing::{
    debug as log_debug,
    error as log_error,
    info as log_info,
    warn as log_warn,
};
