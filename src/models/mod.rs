mod account;
mod call;
mod config;

pub use self::{account::*, call::*, config::*};
