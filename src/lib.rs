pub mod wordle;

/// Log filter used by the binaries when RUST_LOG isn't set
pub const DEFAULT_LOG_FILTER: &str = "warn";
