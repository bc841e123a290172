pub mod debouncer;
pub mod policy;
pub mod state;
