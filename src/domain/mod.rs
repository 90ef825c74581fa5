mod account;
mod menu;
mod money;

pub use account::*;
pub use menu::*;
pub use money::*;
