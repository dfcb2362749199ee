mod command_result;
pub mod coverage;
pub mod helper;
pub mod init;
pub mod lookup;
pub mod merge;

pub use command_result::*;
