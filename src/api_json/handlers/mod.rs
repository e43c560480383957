pub mod confirm;
pub mod dataset;
pub mod docs;
pub mod generated;
pub mod manual;
pub mod resources;

pub use confirm::*;
pub use dataset::*;
pub use docs::*;
pub use generated::*;
pub use manual::*;
pub use resources::*;
