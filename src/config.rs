
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where the waitlist form posts to. Used as the form's `action` too.
pub fn waitlist_endpoint() -> String {
    format!("{}/api/waitlist", get_backend_url())
}
