//! CLI commands for the subtok tokenizer.

pub mod corpus;
pub mod decode;
pub mod dump;
pub mod encode;
pub mod train;

pub use decode::DecodeCommand;
pub use dump::DumpCommand;
pub use encode::EncodeCommand;
pub use train::TrainCommand;
