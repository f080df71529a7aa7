//! Fragment adapters and manifest planning for splice.
//!
//! Each adapter in [`adapters`] describes one kind of generated content for
//! one kind of native file. Adapters hold no merge logic; they implement
//! [`splice_blocks::Fragment`] and the shared lifecycle does the rest.
//!
//! A [`Manifest`] describes which fragments belong in which files. It
//! resolves into a [`Plan`] of apply and remove actions that can be executed
//! per file.

pub mod adapters;
pub mod error;
pub mod manifest;
pub mod maps;
pub mod plan;

pub use adapters::{
    CustomFragment, GradleDependency, InfoPlistEntry, ManifestMetaData, PodDependency, PodSource,
    SwiftImport, SwiftInitializer,
};
pub use error::{Error, Result};
pub use manifest::{
    AndroidConfig, DEFAULT_CONFIG_FILE, FragmentKind, FragmentSpec, IosConfig, Manifest,
};
pub use plan::{ActionStatus, PatchAction, Plan, PlannedPatch};
