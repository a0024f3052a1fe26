// Insert and patch payloads consumed by the stores
pub mod artist;
pub mod ds_client;
pub mod engagement;
pub mod event;
pub mod media;
pub mod settings;

pub use artist::{ArtistPatch, NewArtist};
pub use ds_client::{DsClientPatch, NewDsClient};
pub use engagement::{NewDonation, NewEnquiry};
pub use event::{EventPatch, NewEvent};
pub use media::{MediaItemPatch, NewMediaItem};
pub use settings::{SettingType, SettingUpsert};
