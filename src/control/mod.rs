pub mod shortcuts;

pub use shortcuts::{Action, Dispatch, Focus, handle_key};
