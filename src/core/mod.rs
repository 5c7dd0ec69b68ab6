pub mod admin;
pub mod billing;
pub mod clock;
pub mod fee;
pub mod registry;
pub mod user;

pub use crate::domain::model::{Bill, ParkingSpace, SpaceId, Statistics};
pub use crate::domain::ports::{Clock, ConfigProvider, InputSource};
pub use crate::utils::error::Result;
