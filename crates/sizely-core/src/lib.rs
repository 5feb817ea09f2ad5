pub mod error;
pub mod estimate;
pub mod model;

pub use error::EstimateError;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "sizely"
    }

    pub const fn tagline() -> &'static str {
        "T-shirt size sprint capacity calculator"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
