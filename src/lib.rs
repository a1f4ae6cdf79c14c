#![deny(warnings)]

pub mod diff;
pub mod error;
pub mod flows;
pub mod history;
pub mod logger;
pub mod optimizer;
pub mod selftest;
