pub mod cache;
pub mod datasets;

use crate::config::Config;

/// URL of a file inside the dataset directory
pub fn data_url(path: &str) -> String {
    join_url(&Config::data_base_url(), path)
}

pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{}", path)
    } else {
        format!("{}/{}", base, path)
    }
}
