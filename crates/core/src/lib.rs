pub mod accordion;
pub mod capability;
pub mod catalog;
pub mod config;
pub mod cursor;
pub mod hero;
pub mod layout;
pub mod motion;
pub mod nav;
pub mod reveal;
pub mod scheduler;
pub mod sink;
pub mod stack;
pub mod timeline;

pub use capability::{Capabilities, CapabilitySource};
pub use catalog::{Catalog, ProjectRecord};
pub use config::{ConfigError, TimelineConfig};
pub use scheduler::{FrameHandle, FrameHost, FrameLoop};
pub use sink::RenderSink;
pub use timeline::{FrameOutput, ScrollGeometry, TimelineEngine};
