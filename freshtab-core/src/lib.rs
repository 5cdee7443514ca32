pub mod config;
pub mod engine;
pub mod error;
pub mod location;
pub mod router;
pub mod sites;

pub use config::{FreshtabConfig, PromoConfig, VoiceConfig};
pub use engine::{SearchEngine, Vertical};
pub use error::{Error, Result};
pub use location::{Route, HOME_LOCATION, SEARCH_PATH};
pub use router::Router;
pub use sites::{default_shortcuts, Shortcut, DEFAULT_SHORTCUTS};
