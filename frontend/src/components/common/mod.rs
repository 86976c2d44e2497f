pub mod loader;
pub mod sidebar;
pub mod step_progress;
