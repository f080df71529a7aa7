//! Anchor location and fingerprinted block merging for splice.
//!
//! This crate edits text it does not own. Generated content is wrapped in a
//! pair of comment markers that carry a stable identifier and a SHA-256
//! fingerprint of the payload:
//!
//! ```text
//! // @generated begin react-native-maps-init - splice (DO NOT MODIFY) sha256:<hex>
//! GMSServices.provideAPIKey("...")
//! // @generated end react-native-maps-init
//! ```
//!
//! Everything needed to tell "already applied" from "needs update" lives in
//! the text itself, so every operation is a pure function of its input:
//!
//! - [`anchor`] finds the single line a new block is placed relative to.
//! - [`merge`] inserts, refreshes, classifies and removes blocks.
//! - [`fragment`] runs that lifecycle for any [`Fragment`] implementation.
//!
//! # Example
//!
//! ```
//! use splice_blocks::{AnchorRule, CommentStyle, add_or_update, remove};
//!
//! let podfile = "target 'App' do\n  config = use_native_modules!\nend";
//! let rule = AnchorRule::literal("use_native_modules");
//!
//! let merged = add_or_update(podfile, "maps", &rule, CommentStyle::Hash, "  pod 'GoogleMaps'").unwrap();
//! assert!(merged.did_merge);
//!
//! let again = add_or_update(&merged.contents, "maps", &rule, CommentStyle::Hash, "  pod 'GoogleMaps'").unwrap();
//! assert!(!again.changed());
//!
//! assert_eq!(remove(&merged.contents, "maps").contents, podfile);
//! ```

pub mod anchor;
pub mod block;
pub mod error;
pub mod fingerprint;
pub mod fragment;
pub mod marker;
pub mod merge;

pub use anchor::{Anchor, AnchorRule, locate};
pub use block::{TaggedBlock, find_block, find_blocks, has_block, parse_blocks};
pub use error::{Error, Result};
pub use fingerprint::Fingerprint;
pub use fragment::{Fragment, apply_all, apply_fragment, fragment_status, remove_fragment};
pub use marker::{CommentStyle, GENERATOR, validate_identifier};
pub use merge::{BlockStatus, MergeResult, add_or_update, remove, status};
