#![deny(warnings)]
pub mod model;
pub mod prob;
pub mod table;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "cardtally"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
