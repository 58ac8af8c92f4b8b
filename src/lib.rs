mod builder;
mod common;
mod engine;
mod models;
mod output;
mod remap;

pub use self::{builder::*, common::*, engine::*, models::*, output::*, remap::*};
