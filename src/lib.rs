pub mod error;
pub mod fetch;
pub mod model;
pub mod roster;
pub mod rounds;
pub mod sheet;
pub mod standings;

pub use error::{LeagueError, Result};
pub use model::*;
pub use sheet::RawGrid;
