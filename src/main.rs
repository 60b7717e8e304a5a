use crate::cli::run;

pub mod catalog;
pub mod cli;
mod config;
pub mod domain;
mod url;

fn main() -> anyhow::Result<()> {
    run()
}
