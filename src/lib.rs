pub mod ascii;
pub mod cli;
pub mod density;
pub mod error;
pub mod pipeline;
