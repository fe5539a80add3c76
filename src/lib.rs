pub mod agent;
pub mod shell;
pub mod tetrify;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;
    }
}

pub mod prelude {
    pub use super::agent::*;
    pub use super::shell::*;
    pub use super::tetrify::prelude::*;
    pub use super::utils::prelude::*;
}
