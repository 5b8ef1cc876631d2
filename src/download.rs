use web_sys::window;

use crate::config;

/// Relative path of the e-book as seen from `pathname`. Pages inside the
/// blog section sit one level deeper, so they go up first.
pub fn ebook_path(pathname: &str) -> String {
    let prefix = if pathname.contains(config::BLOG_SEGMENT) { "../" } else { "" };
    format!("{}{}/{}", prefix, config::EBOOK_DIR, config::EBOOK_FILENAME)
}

pub fn current_ebook_path() -> String {
    let pathname = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    ebook_path(&pathname)
}
