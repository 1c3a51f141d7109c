// Resume analysis: typed request boundary, keyword overlap scoring, and the
// /analyze handler. Text extraction lives in `crate::document`.

pub mod analyzer;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod request;
