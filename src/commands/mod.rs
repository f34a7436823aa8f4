pub mod examples;
pub mod init;
pub mod run;

pub use run::{handle_run, InputSource, RunConfig};
