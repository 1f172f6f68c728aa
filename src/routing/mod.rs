//! Routing module
//!
//! Provides first-match-wins dispatch over an ordered route table:
//! - Path templates with literal and capturing parts
//! - A fixed table binding the served paths to their handlers

mod matcher;

pub use matcher::{dispatch, PatternError, Route, RouteTarget};

/// The route table, in match order.
pub fn routes() -> Result<Vec<Route>, PatternError> {
    Ok(vec![
        Route::new("/", RouteTarget::Index)?,
        Route::new("/(svg)/{file}", RouteTarget::Image)?,
        Route::new("/(png)/{file}", RouteTarget::Image)?,
    ])
}
