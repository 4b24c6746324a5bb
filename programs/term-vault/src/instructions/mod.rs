pub mod admin;
pub mod deposit;
pub mod grant_injector;
pub mod initialize;
pub mod inject_yield;
pub mod preview_redeem;
pub mod toggle_injector;
pub mod transfer_position;
pub mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use grant_injector::*;
pub use initialize::*;
pub use inject_yield::*;
pub use preview_redeem::*;
pub use toggle_injector::*;
pub use transfer_position::*;
pub use withdraw::*;
