//! Project configuration
//!
//! A manifest names the native files of a project and the fragments that
//! belong in them. The default file is `splice.toml`; JSON and YAML are also
//! accepted, chosen by extension.
//!
//! ```toml
//! [ios]
//! app_delegate = "ios/HelloWorld/AppDelegate.swift"
//! # info_plist defaults to Info.plist beside the AppDelegate
//! google_maps_api_key = "..."
//!
//! [[fragments]]
//! file = "android/app/build.gradle"
//! tag = "play-services-location"
//! kind = "gradle"
//! notation = "com.google.android.gms:play-services-location:21.0.1"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use splice_blocks::{CommentStyle, Fragment, validate_identifier};
use splice_fs::ConfigStore;

use crate::adapters::{
    CustomFragment, GradleDependency, InfoPlistEntry, ManifestMetaData, PodDependency, PodSource,
    SwiftImport, SwiftInitializer,
};
use crate::plan::{PatchAction, Plan, PlannedPatch};
use crate::{Error, Result, maps};

/// File name looked up when no configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "splice.toml";

fn default_podfile() -> PathBuf {
    PathBuf::from("ios/Podfile")
}

fn default_android_manifest() -> PathBuf {
    PathBuf::from("android/app/src/main/AndroidManifest.xml")
}

fn default_configuration() -> String {
    "implementation".to_string()
}

/// `[ios]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IosConfig {
    #[serde(default = "default_podfile")]
    pub podfile: PathBuf,
    /// Required whenever the section is present.
    #[serde(default)]
    pub app_delegate: Option<PathBuf>,
    /// Defaults to `Info.plist` next to the `AppDelegate`.
    #[serde(default)]
    pub info_plist: Option<PathBuf>,
    #[serde(default)]
    pub google_maps_api_key: Option<String>,
}

impl IosConfig {
    fn info_plist_for(&self, app_delegate: &Path) -> PathBuf {
        self.info_plist
            .clone()
            .unwrap_or_else(|| app_delegate.with_file_name("Info.plist"))
    }
}

/// `[android]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndroidConfig {
    #[serde(default = "default_android_manifest")]
    pub manifest: PathBuf,
    #[serde(default)]
    pub google_maps_api_key: Option<String>,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            manifest: default_android_manifest(),
            google_maps_api_key: None,
        }
    }
}

/// One `[[fragments]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentSpec {
    /// Host file, relative to the project root.
    pub file: PathBuf,
    /// Block identifier.
    pub tag: String,
    /// Strip the block instead of applying it.
    #[serde(default)]
    pub remove: bool,
    #[serde(flatten)]
    pub kind: FragmentKind,
}

/// Fragment kind and its parameters, selected by `kind = "..."`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FragmentKind {
    Pod {
        name: String,
        #[serde(default)]
        version: Option<String>,
        #[serde(default)]
        path: Option<String>,
        /// Written verbatim after the pod name.
        #[serde(default)]
        options: Option<String>,
    },
    Gradle {
        #[serde(default = "default_configuration")]
        configuration: String,
        notation: String,
    },
    SwiftImport {
        module: String,
        #[serde(default)]
        guarded: bool,
    },
    SwiftInit {
        statement: String,
        #[serde(default)]
        guard_module: Option<String>,
    },
    ManifestMetaData {
        name: String,
        value: String,
    },
    InfoPlist {
        key: String,
        value: String,
    },
    Custom {
        anchor: String,
        #[serde(default)]
        offset: usize,
        #[serde(default)]
        comment: CommentStyle,
        payload: String,
    },
}

impl FragmentSpec {
    /// Build the adapter this entry describes.
    pub fn fragment(&self) -> Result<Box<dyn Fragment>> {
        validate_identifier(&self.tag)?;
        let tag = self.tag.clone();
        let fragment: Box<dyn Fragment> = match &self.kind {
            FragmentKind::Pod {
                name,
                version,
                path,
                options,
            } => {
                let source = match (version, path, options) {
                    (Some(version), _, _) => PodSource::Version(version.clone()),
                    (None, Some(path), _) => PodSource::Path(path.clone()),
                    (None, None, Some(options)) => PodSource::Raw(options.clone()),
                    (None, None, None) => PodSource::Any,
                };
                Box::new(PodDependency::new(tag, name.as_str()).with_source(source))
            }
            FragmentKind::Gradle {
                configuration,
                notation,
            } => Box::new(GradleDependency::new(tag, configuration.as_str(), notation.as_str())),
            FragmentKind::SwiftImport { module, guarded } => {
                let import = SwiftImport::new(tag, module.as_str());
                Box::new(if *guarded { import.guarded() } else { import })
            }
            FragmentKind::SwiftInit {
                statement,
                guard_module,
            } => {
                let init = SwiftInitializer::new(tag, statement.as_str());
                Box::new(match guard_module {
                    Some(module) => init.guarded_by(module.as_str()),
                    None => init,
                })
            }
            FragmentKind::ManifestMetaData { name, value } => {
                Box::new(ManifestMetaData::new(tag, name.as_str(), value.as_str()))
            }
            FragmentKind::InfoPlist { key, value } => {
                Box::new(InfoPlistEntry::new(tag, key.as_str(), value.as_str()))
            }
            FragmentKind::Custom {
                anchor,
                offset,
                comment,
                payload,
            } => Box::new(CustomFragment::from_pattern(
                &tag, anchor, *offset, *comment, payload,
            )?),
        };
        Ok(fragment)
    }

    fn patch(&self) -> Result<PlannedPatch> {
        let action = if self.remove {
            validate_identifier(&self.tag)?;
            PatchAction::Remove(self.tag.clone())
        } else {
            PatchAction::Apply(self.fragment()?)
        };
        Ok(PlannedPatch::new(&self.file, action))
    }
}

/// Parsed project configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub ios: Option<IosConfig>,
    #[serde(default)]
    pub android: Option<AndroidConfig>,
    #[serde(default)]
    pub fragments: Vec<FragmentSpec>,
}

impl Manifest {
    /// Parse a TOML manifest.
    pub fn parse(content: &str) -> Result<Self> {
        ConfigStore::new()
            .parse(content, "toml", Path::new(DEFAULT_CONFIG_FILE))
            .map_err(config_error)
    }

    /// Load a manifest, choosing the format from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let manifest: Self = ConfigStore::new().load(path).map_err(config_error)?;
        tracing::debug!(
            path = %path.display(),
            fragments = manifest.fragments.len(),
            "Loaded manifest"
        );
        Ok(manifest)
    }

    /// Resolve into an ordered plan.
    ///
    /// Preset actions come first (iOS, then Android), followed by explicit
    /// fragments in file order.
    ///
    /// # Errors
    ///
    /// [`Error::MissingField`] when `[ios]` has no `app_delegate`,
    /// [`Error::DuplicateTag`] when one file gets the same tag twice, and
    /// block errors for invalid tags or anchor patterns.
    pub fn plan(&self) -> Result<Plan> {
        let mut plan = Plan::new();

        if let Some(ios) = &self.ios {
            let app_delegate = ios.app_delegate.as_deref().ok_or(Error::MissingField {
                section: "ios",
                field: "app_delegate",
            })?;
            plan.extend(maps::ios_patches(
                &ios.podfile,
                app_delegate,
                &ios.info_plist_for(app_delegate),
                ios.google_maps_api_key.as_deref(),
            ));
        }

        if let Some(android) = &self.android {
            plan.extend(maps::android_patches(
                &android.manifest,
                android.google_maps_api_key.as_deref(),
            ));
        }

        for spec in &self.fragments {
            let patch = spec.patch()?;
            let duplicate = plan
                .patches()
                .iter()
                .any(|p| p.file == patch.file && p.action.id() == patch.action.id());
            if duplicate {
                return Err(Error::DuplicateTag {
                    file: patch.file,
                    tag: spec.tag.clone(),
                });
            }
            plan.push(patch);
        }

        tracing::debug!(patches = plan.len(), "Resolved plan");
        Ok(plan)
    }
}

fn config_error(error: splice_fs::Error) -> Error {
    match error {
        splice_fs::Error::ConfigParse { path, message, .. } => Error::ConfigParse { path, message },
        other => Error::Fs(other),
    }
}
