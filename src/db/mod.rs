pub mod connection;
pub mod errors;
pub mod read_ops;
pub mod write_ops;

pub use connection::*;
pub use errors::*;
pub use read_ops::*;
pub use write_ops::*;
