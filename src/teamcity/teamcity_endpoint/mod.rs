use reqwest::Method;

pub mod build_info;
pub mod builds_info;
pub mod locator;

/// A single remote call: method, path under the REST root, query pairs.
pub trait Endpoint {
    fn method(&self) -> Method;

    /// path relative to `<server>/<auth>/app/rest`, without a leading slash.
    fn endpoint(&self) -> String;

    fn query(&self) -> Option<Vec<(&'static str, String)>> {
        None
    }
}
