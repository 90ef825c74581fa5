// Application layer - use cases on top of the domain.
// The interactive session (cli) only talks to the teller.

pub mod error;
pub mod teller;

pub use error::*;
pub use teller::*;
