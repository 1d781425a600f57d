pub mod content;
pub mod frame;
pub mod page;
pub mod shared_str;
pub mod types;

pub use content::{FaceSide, FaceUpdate, MarqueeUpdate};
pub use frame::{CardFrame, Glare, Phase};
pub use page::{AccordionState, HeroFrame, NavState, QuoteFrame, StackFrame};
pub use shared_str::SharedStr;
pub use types::Vec2;
