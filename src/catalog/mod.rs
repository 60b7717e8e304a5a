pub mod aggregate;
pub mod error;
pub mod extract;
pub mod fallback;
mod fs;
pub mod pipeline;
pub mod reconcile;
pub mod record;
