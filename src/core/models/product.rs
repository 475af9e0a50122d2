/// Product name announced to the collector.
pub const PRODUCT_NAME: &str = "GABI";

/// Current version, taken from Cargo.toml at compile time.
pub fn current_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// `User-Agent` value sent with every audit write, e.g. `GABI/1.4.1`.
pub fn user_agent() -> String {
    format!("{PRODUCT_NAME}/{}", current_version())
}
