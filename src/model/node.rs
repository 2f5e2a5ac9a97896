//! Scene-tree node types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Type tag of text nodes.
pub const TEXT_NODE: &str = "TEXT";

/// Type tag of flat-color paints.
pub const SOLID_PAINT: &str = "SOLID";

/// A node of a Figma document tree (page, frame, group, text, ...).
///
/// This is a typed view over the fields the extractors read. Other API
/// fields are ignored when decoding; keep the source [`Value`] around when
/// the exact JSON is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Node id (e.g. "18862:42390")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Layer name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Type tag ("DOCUMENT", "CANVAS", "FRAME", "TEXT", ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub node_type: String,

    /// Child nodes in layer order; `None` when the API sent no list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,

    /// Fill paints
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,

    /// Stroke paints
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,

    /// Text style (TEXT nodes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TypeStyle>,

    /// Bounding box in absolute canvas coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<Rect>,

    /// Background color (frames and canvases)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

/// Decode an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Node {
    /// Create a node with a type tag and name.
    pub fn new(node_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the node id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Decode a node tree from a JSON value of any depth.
    pub fn from_json(value: &Value) -> serde_json::Result<Self> {
        Self::deserialize(serde_stacker::Deserializer::new(value))
    }

    /// Append a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Append a fill paint.
    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    /// Append a stroke paint.
    pub fn with_stroke(mut self, paint: Paint) -> Self {
        self.strokes.push(paint);
        self
    }

    /// Set the text style.
    pub fn with_style(mut self, style: TypeStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the absolute bounding box.
    pub fn with_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.absolute_bounding_box = Some(Rect {
            x,
            y,
            width,
            height,
        });
        self
    }

    /// Child nodes, empty when there is no child list.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Check if this is a text node.
    pub fn is_text(&self) -> bool {
        self.node_type == TEXT_NODE
    }

    /// Iterate over fills followed by strokes.
    pub fn paints(&self) -> impl Iterator<Item = &Paint> {
        self.fills.iter().chain(self.strokes.iter())
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }
}

/// A fill or stroke descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Paint type ("SOLID", "GRADIENT_LINEAR", "IMAGE", ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub paint_type: String,

    /// Color, present on solid paints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Paint {
    /// Create a solid paint.
    pub fn solid(color: Color) -> Self {
        Self {
            paint_type: SOLID_PAINT.to_string(),
            color: Some(color),
        }
    }

    /// Create a non-solid paint of the given type.
    pub fn of_type(paint_type: impl Into<String>) -> Self {
        Self {
            paint_type: paint_type.into(),
            ..Default::default()
        }
    }

    /// The color of a solid paint, `None` for any other paint.
    pub fn solid_color(&self) -> Option<&Color> {
        if self.paint_type == SOLID_PAINT {
            self.color.as_ref()
        } else {
            None
        }
    }
}

/// Normalized RGBA color, each component in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    /// Create an opaque color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with alpha.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Render as `#rrggbb`.
    ///
    /// Each channel is scaled to 0..=255, rounded half-up and clamped.
    /// Alpha is not part of the hex string.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b)
        )
    }

    /// Parse `#rrggbb` (leading `#` optional) into an opaque color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|v| f64::from(v) / 255.0)
        };
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

fn channel_to_byte(value: f64) -> u8 {
    // NaN saturates to 0 in the cast
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Text style attributes of a TEXT node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    /// Font family (e.g. "Inter")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size in px
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Numeric font weight (100-900)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,

    /// Line height in px
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height_px: Option<f64>,

    /// Letter spacing in px
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,

    /// Horizontal alignment ("LEFT", "CENTER", "RIGHT", "JUSTIFIED")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,
}

impl TypeStyle {
    /// Create a style with family, size and weight.
    pub fn new(family: impl Into<String>, size: f64, weight: f64) -> Self {
        Self {
            font_family: Some(family.into()),
            font_size: Some(size),
            font_weight: Some(weight),
            ..Default::default()
        }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    #[serde(default)]
    pub x: f64,
    /// Top edge
    #[serde(default)]
    pub y: f64,
    /// Width
    #[serde(default)]
    pub width: f64,
    /// Height
    #[serde(default)]
    pub height: f64,
}
