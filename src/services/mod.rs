// Services layer - pure domain logic over the stores
pub mod embeds;
pub mod settings_draft;
pub mod sheets;
pub mod view;
pub mod visibility;

pub use settings_draft::SettingsDraft;
pub use visibility::{EntityKind, VisibilityMap};
