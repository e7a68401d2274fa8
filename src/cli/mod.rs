pub mod algorithm;
pub mod args;
pub mod exit;

pub use algorithm::Algorithm;
pub use args::Cli;
pub use exit::{Outcome, exit_code};
