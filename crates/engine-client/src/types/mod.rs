//! Option and response types for the engine API

pub mod container;
pub mod image;
pub mod system;
pub mod volume;

pub use container::{
    ContainerJson, ContainerKillOptions, ContainerRemoveOptions, ContainerRenameOptions,
    ContainerRestartOptions, ContainerState, ContainerStopOptions,
};
pub use image::{ImageDeleteResponseItem, ImageRemoveOptions};
pub use system::Version;
pub use volume::VolumeRemoveOptions;
