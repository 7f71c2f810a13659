pub mod generated;
pub mod records;

#[cfg(test)]
mod tests;

pub use generated::*;
pub use records::*;
