pub mod generate;
pub mod output;
