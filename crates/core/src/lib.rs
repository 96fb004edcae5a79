#![forbid(unsafe_code)]

pub mod model;
pub mod time;
pub mod writeback;

pub use model::{Identity, ParseIdentityError, ScoreBoard, Session};
pub use time::Clock;
pub use writeback::{PendingWrite, WriteBack};
