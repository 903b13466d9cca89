//! Theme for the site.

mod styles;

pub use styles::GLOBAL_STYLES;
