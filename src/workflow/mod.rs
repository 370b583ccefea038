pub mod controller;
pub mod session;

pub use controller::InteractionController;
pub use session::SessionState;
