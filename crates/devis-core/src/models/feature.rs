//! Feature model definition.

use serde::{Deserialize, Serialize};

/// A display-only feature highlight attached to an estimate.
///
/// Features are label/icon/color triples rendered on the estimate overview;
/// the calculator never computes over them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feature {
    /// Display label of the feature
    pub label: String,

    /// Icon identifier understood by the presentation layer
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Display color (hex string)
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_icon() -> String {
    "brain".to_string()
}

fn default_color() -> String {
    "#000000".to_string()
}
