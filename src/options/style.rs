use serde::{Deserialize, Serialize};

use crate::orientation::ZoneKind;

const GREY: [f32; 3] = [0.5, 0.5, 0.5];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];

/// Colors used while the pointer is over a panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HoverStyle {
    /// RGB panel fill.
    pub background: [f32; 3],
    /// RGB panel outline.
    pub border: [f32; 3],
    /// RGB label color.
    pub text: [f32; 3],
}

impl Default for HoverStyle {
    fn default() -> Self {
        Self {
            background: WHITE,
            border: WHITE,
            text: BLACK,
        }
    }
}

/// Colors for every panel of one zone kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KindStyle {
    /// RGB panel fill.
    pub background: [f32; 3],
    /// RGB panel outline.
    pub border: [f32; 3],
    /// RGB label color.
    pub text: [f32; 3],
    /// Overrides while hovered.
    pub hover: HoverStyle,
}

impl Default for KindStyle {
    fn default() -> Self {
        Self {
            background: GREY,
            border: WHITE,
            text: BLACK,
            hover: HoverStyle::default(),
        }
    }
}

/// Label visibility and placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct TextStyle {
    /// Draw labels on face panels.
    pub show_face: bool,
    /// Draw labels on edge panels.
    pub show_edge: bool,
    /// Draw labels on corner panels.
    pub show_corner: bool,
    /// Font size in cube units.
    pub size: f32,
    /// Distance the label floats above its panel.
    pub offset: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            show_face: true,
            show_edge: true,
            show_corner: true,
            size: 0.1,
            offset: 0.005,
        }
    }
}

/// Per-kind panel colors and label settings, handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleOptions {
    /// Face panels.
    pub face: KindStyle,
    /// Edge panels.
    pub edge: KindStyle,
    /// Corner panels.
    pub corner: KindStyle,
    /// Labels.
    pub text: TextStyle,
}

impl StyleOptions {
    /// Style record for panels of `kind`.
    #[must_use]
    pub fn for_kind(&self, kind: ZoneKind) -> &KindStyle {
        match kind {
            ZoneKind::Face => &self.face,
            ZoneKind::Edge => &self.edge,
            ZoneKind::Corner => &self.corner,
        }
    }

    /// Whether labels are drawn for panels of `kind`.
    #[must_use]
    pub fn shows_label(&self, kind: ZoneKind) -> bool {
        match kind {
            ZoneKind::Face => self.text.show_face,
            ZoneKind::Edge => self.text.show_edge,
            ZoneKind::Corner => self.text.show_corner,
        }
    }
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            face: KindStyle::default(),
            edge: KindStyle {
                background: WHITE,
                ..KindStyle::default()
            },
            corner: KindStyle {
                text: RED,
                ..KindStyle::default()
            },
            text: TextStyle::default(),
        }
    }
}
