pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::console::{Console, LotContext};
pub use app::input::{LineInput, StdinInput};
pub use app::session::{Mode, Role};
pub use config::{toml_config::LotConfig, CliConfig};
pub use core::clock::{ManualClock, SystemClock};
pub use core::registry::{Registry, SharedRegistry};
pub use utils::error::{ParkingError, Result};
