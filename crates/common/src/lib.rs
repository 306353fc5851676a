pub mod types;
pub mod clock;
pub mod utils;
pub mod env;
