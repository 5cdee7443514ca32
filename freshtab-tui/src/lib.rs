pub mod app;
pub mod event;
pub mod external;
pub mod mode;
pub mod terminal;
pub mod trace;
pub mod ui;
pub mod voice;

// Re-export commonly used types
pub use app::App;
pub use event::HandleResult;
pub use mode::{Focus, Mode};
pub use terminal::run;
pub use voice::VoiceEvent;
