//! ==============================================================================
//! components/mod.rs - Views
//! ==============================================================================

mod admin_dashboard;
mod home;

pub use admin_dashboard::AdminDashboard;
pub use home::Home;

#[cfg(test)]
pub(crate) mod testing;
