use serde::{Deserialize, Serialize};

/// Snapshot key for the opaque nested host-view state.
pub const KEY_CLOCK_STATE: &str = "clockState";
/// Snapshot key for the face radius.
pub const KEY_CLOCK_RADIUS: &str = "clockRadius";
/// Snapshot keys for the seven colors, stored as packed `0xAARRGGBB`.
pub const KEY_FACE_BACKGROUND_COLOR: &str = "clockFaceBackgroundColor";
pub const KEY_BORDER_COLOR: &str = "borderColor";
pub const KEY_NUMBER_COLOR: &str = "numberColor";
pub const KEY_DOT_COLOR: &str = "dotColor";
pub const KEY_HOUR_HAND_COLOR: &str = "hourHandColor";
pub const KEY_MINUTE_HAND_COLOR: &str = "minuteHandColor";
pub const KEY_SECOND_HAND_COLOR: &str = "secondHandColor";

/// Flat key-value record of the state that survives surface re-creation.
///
/// Serialized as a single JSON object with the fixed keys above; because
/// keys are explicit it restores field-by-field in any order. Every field is
/// optional on the way in — a partial or foreign snapshot restores what it
/// has and leaves the rest at current values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    /// Opaque host-view state, carried through untouched.
    #[serde(rename = "clockState", default, skip_serializing_if = "Option::is_none")]
    pub host_state: Option<serde_json::Value>,

    #[serde(rename = "clockRadius", default, skip_serializing_if = "Option::is_none")]
    pub clock_radius: Option<f32>,

    #[serde(
        rename = "clockFaceBackgroundColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub face_background_color: Option<u32>,

    #[serde(rename = "borderColor", default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<u32>,

    #[serde(rename = "numberColor", default, skip_serializing_if = "Option::is_none")]
    pub number_color: Option<u32>,

    #[serde(rename = "dotColor", default, skip_serializing_if = "Option::is_none")]
    pub dot_color: Option<u32>,

    #[serde(rename = "hourHandColor", default, skip_serializing_if = "Option::is_none")]
    pub hour_hand_color: Option<u32>,

    #[serde(rename = "minuteHandColor", default, skip_serializing_if = "Option::is_none")]
    pub minute_hand_color: Option<u32>,

    #[serde(rename = "secondHandColor", default, skip_serializing_if = "Option::is_none")]
    pub second_hand_color: Option<u32>,
}

impl ClockSnapshot {
    /// Serializes to the flat JSON map.
    pub fn to_value(&self) -> serde_json::Value {
        // Serialization of this struct cannot fail (plain scalars + Value),
        // but the contract stays infallible either way.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Parses a snapshot, or `None` when the value is not even an object.
    ///
    /// Unknown keys are ignored; missing keys stay `None`.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        // Reject non-maps outright; serde would otherwise accept a sequence
        // positionally, which no writer of this format ever produces.
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}
