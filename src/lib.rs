pub mod capacity;
pub mod cartesian;
mod clipper;
pub mod config;
pub mod editor;
mod error;
pub mod history;
pub mod merge;
mod pair;
pub mod region;
mod shape;
mod tolerance;

pub use self::config::EditorConfig;
pub use self::editor::{Commit, Editor, EditorState, Parameters, Tool};
pub use self::error::Error;
pub use self::history::{History, HistoryConfig};
pub use self::pair::MaybePair;
pub use self::region::{Region, RegionId, RegionSet};
pub use self::shape::Shape;
pub use self::tolerance::{IsClose, Positive, Tolerance};
