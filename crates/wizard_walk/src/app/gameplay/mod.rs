mod character;
mod debounce;
mod id_entry;
mod proximity;
mod scene;
mod startup;
mod types;
mod viewport;
mod wizard_assets;
mod world;

pub(crate) use scene::WizardWalkScene;
pub(crate) use startup::{load_startup_assets, StartupError};
pub(crate) use types::Size;
pub(crate) use viewport::ViewportConfig;
pub(crate) use wizard_assets::WizardArchiveSource;
