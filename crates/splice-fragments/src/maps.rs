//! Google Maps preset for `react-native-maps`
//!
//! With an API key the preset links the Google Maps pod, imports and
//! initializes the SDK in the `AppDelegate`, stores the key in `Info.plist`
//! and registers it in the Android manifest. Without a key every one of those blocks is removed, so
//! dropping the key from configuration cleans the project up.

use std::path::Path;

use crate::adapters::{
    InfoPlistEntry, ManifestMetaData, PodDependency, PodSource, SwiftImport, SwiftInitializer,
};
use crate::plan::{PatchAction, PlannedPatch};

pub const POD_TAG: &str = "react-native-maps";
pub const IMPORT_TAG: &str = "react-native-maps-import";
pub const INIT_TAG: &str = "react-native-maps-init";
pub const API_KEY_TAG: &str = "react-native-maps-api-key";
pub const PLIST_TAG: &str = "react-native-maps-plist-key";

/// `Info.plist` key the Google Maps SDK for iOS reads.
pub const GMS_API_KEY: &str = "GMSApiKey";

/// Manifest key the Google Maps SDK for Android reads.
pub const API_KEY_META_DATA: &str = "com.google.android.geo.API_KEY";

const POD_PATH: &str =
    "path: File.dirname(`node --print \"require.resolve('react-native-maps/package.json')\"`)";

/// The Google Maps pod, resolved from the installed `react-native-maps` package.
pub fn pod() -> PodDependency {
    PodDependency::new(POD_TAG, "react-native-google-maps").with_source(PodSource::Raw(POD_PATH.into()))
}

pub fn import() -> SwiftImport {
    SwiftImport::new(IMPORT_TAG, "GoogleMaps").guarded()
}

pub fn init(api_key: &str) -> SwiftInitializer {
    SwiftInitializer::new(INIT_TAG, format!("GMSServices.provideAPIKey(\"{api_key}\")"))
        .guarded_by("GoogleMaps")
}

pub fn api_key_meta_data(api_key: &str) -> ManifestMetaData {
    ManifestMetaData::new(API_KEY_TAG, API_KEY_META_DATA, api_key)
}

pub fn api_key_plist_entry(api_key: &str) -> InfoPlistEntry {
    InfoPlistEntry::new(PLIST_TAG, GMS_API_KEY, api_key)
}

/// An empty key counts as no key.
fn usable(api_key: Option<&str>) -> Option<&str> {
    api_key.filter(|key| !key.trim().is_empty())
}

/// iOS actions: apply pod, import, initializer and plist key with a key,
/// remove them without.
pub fn ios_patches(
    podfile: &Path,
    app_delegate: &Path,
    info_plist: &Path,
    api_key: Option<&str>,
) -> Vec<PlannedPatch> {
    match usable(api_key) {
        Some(key) => vec![
            PlannedPatch::new(podfile, PatchAction::Apply(Box::new(pod()))),
            PlannedPatch::new(app_delegate, PatchAction::Apply(Box::new(import()))),
            PlannedPatch::new(app_delegate, PatchAction::Apply(Box::new(init(key)))),
            PlannedPatch::new(info_plist, PatchAction::Apply(Box::new(api_key_plist_entry(key)))),
        ],
        None => vec![
            PlannedPatch::new(podfile, PatchAction::Remove(POD_TAG.into())),
            PlannedPatch::new(app_delegate, PatchAction::Remove(IMPORT_TAG.into())),
            PlannedPatch::new(app_delegate, PatchAction::Remove(INIT_TAG.into())),
            PlannedPatch::new(info_plist, PatchAction::Remove(PLIST_TAG.into())),
        ],
    }
}

/// Android actions: register the key in the manifest, or remove it.
pub fn android_patches(manifest: &Path, api_key: Option<&str>) -> Vec<PlannedPatch> {
    let action = match usable(api_key) {
        Some(key) => PatchAction::Apply(Box::new(api_key_meta_data(key))),
        None => PatchAction::Remove(API_KEY_TAG.into()),
    };
    vec![PlannedPatch::new(manifest, action)]
}
