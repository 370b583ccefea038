pub mod busy;
pub mod view;

pub use busy::{BusyGuard, ControlFlags};
pub use view::{Control, View};
