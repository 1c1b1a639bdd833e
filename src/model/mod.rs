pub mod agent {
    pub use myxo_core::agent::*;
}
pub mod config {
    pub use myxo_core::config::*;
}
pub mod field {
    pub use myxo_core::field::*;
}
pub mod food {
    pub use myxo_core::food::*;
}
pub mod snapshot {
    pub use myxo_core::snapshot::*;
}
pub mod stats {
    pub use myxo_core::stats::*;
}
pub mod steering {
    pub use myxo_core::steering::*;
}

pub mod state {
    pub use myxo_data::*;
}

pub mod world;
