//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod alert;
pub mod button;
pub mod controller;
pub mod display;
pub mod tick;

pub use alert::alert_task;
pub use button::button_task;
pub use controller::controller_task;
pub use display::display_task;
pub use tick::tick_task;
