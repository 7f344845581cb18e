//! MPEG-DASH manifest data structures (MPD and related types).
//!
//! The types in this module form the mutable, caller-facing document model.
//! Every optional attribute is an `Option`, because "attribute absent" and
//! "attribute present with a zero/false value" are different documents.
//! Serialization-only concerns (namespace-prefixed attribute names, `xmlns:*`
//! declarations) live in the parallel wire model built by [`wire::project`].

pub(crate) mod parser;
pub(crate) mod wire;
pub(crate) mod writer;

use tracing::debug;

use crate::error::{EncodeError, ParseError};

/// ConditionalUintType from the DASH schema: a union of `unsignedInt` and
/// `boolean`. At most one alternative is ever present; with both absent the
/// attribute is omitted on write and clients treat it as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalUint {
    u: Option<u64>,
    b: Option<bool>,
}

impl ConditionalUint {
    /// Value holding the unsigned-integer alternative.
    pub fn uint(value: u64) -> Self {
        ConditionalUint {
            u: Some(value),
            b: None,
        }
    }

    /// Value holding the boolean alternative.
    pub fn bool(value: bool) -> Self {
        ConditionalUint {
            u: None,
            b: Some(value),
        }
    }

    /// Value with neither alternative set (attribute omitted).
    pub fn none() -> Self {
        ConditionalUint::default()
    }

    pub fn as_uint(&self) -> Option<u64> {
        self.u
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.b
    }

    pub fn is_none(&self) -> bool {
        self.u.is_none() && self.b.is_none()
    }

    /// Attribute text for serialization, or `None` when the attribute is
    /// omitted entirely.
    pub fn attr_value(&self) -> Option<String> {
        if let Some(u) = self.u {
            return Some(u.to_string());
        }
        if let Some(b) = self.b {
            return Some(b.to_string());
        }
        None
    }

    /// Decodes attribute text, trying the unsigned-integer alternative first
    /// and the boolean literal second.
    pub(crate) fn parse(
        element: &'static str,
        attribute: &'static str,
        text: &str,
    ) -> Result<Self, ParseError> {
        if let Ok(u) = text.parse::<u64>() {
            return Ok(ConditionalUint::uint(u));
        }
        if let Ok(b) = text.parse::<bool>() {
            return Ok(ConditionalUint::bool(b));
        }
        Err(ParseError::InvalidAttribute {
            element,
            attribute,
            value: text.to_string(),
        })
    }
}

/// Root MPD element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mpd {
    pub xmlns: Option<String>,
    /// XML-Schema-instance namespace; serialized as `xmlns:xsi` on the root.
    pub xsi: Option<String>,
    /// Serialized as `xsi:schemaLocation` on the root.
    pub schema_location: Option<String>,
    pub id: Option<String>,
    /// Presentation type, "static" or "dynamic"; the `type` attribute.
    pub mpd_type: Option<String>,
    pub publish_time: Option<String>,
    pub minimum_update_period: Option<String>,
    pub availability_start_time: Option<String>,
    pub media_presentation_duration: Option<String>,
    pub min_buffer_time: Option<String>,
    pub suggested_presentation_delay: Option<String>,
    pub time_shift_buffer_depth: Option<String>,
    pub profiles: String,
    /// SCTE-35 namespace; serialized as `xmlns:scte35` on the root.
    pub scte35: Option<String>,
    /// Text content of the `BaseURL` child element.
    pub base_url: Option<String>,
    pub periods: Vec<Period>,
}

impl Mpd {
    /// Parses MPD XML.
    pub fn decode(bytes: &[u8]) -> Result<Mpd, ParseError> {
        let mpd = parser::parse_mpd(bytes)?;
        debug!(periods = mpd.periods.len(), "decoded MPD manifest");
        Ok(mpd)
    }

    /// Generates MPD XML.
    ///
    /// Output is indented with two spaces, childless elements are written in
    /// self-closing form, and the document starts with the fixed declaration
    /// `<?xml version="1.0" encoding="UTF-8"?>` and ends with one newline.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let out = writer::write_mpd(&wire::project(self))?;
        debug!(bytes = out.len(), "encoded MPD manifest");
        Ok(out)
    }
}

/// PeriodType: a time-bounded section of the presentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Period {
    pub start: Option<String>,
    pub id: Option<String>,
    pub duration: Option<String>,
    pub adaptation_sets: Vec<AdaptationSet>,
}

/// AdaptationSetType: a group of interchangeable encoded variants.
///
/// Geometry hints (`width`, `frame_rate`, `par`, ...) stay untyped strings
/// because the schema permits fractional and ratio forms like "30000/1001".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdaptationSet {
    pub mime_type: Option<String>,
    pub segment_alignment: ConditionalUint,
    pub start_with_sap: Option<u64>,
    pub bitstream_switching: Option<bool>,
    pub subsegment_alignment: ConditionalUint,
    pub subsegment_starts_with_sap: Option<u64>,
    pub lang: Option<String>,
    pub content_type: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub max_width: Option<String>,
    pub max_height: Option<String>,
    pub frame_rate: Option<String>,
    pub par: Option<String>,
    pub codecs: Option<String>,
    pub content_protections: Vec<Descriptor>,
    pub role: Option<Descriptor>,
    pub supplemental_property: Option<Descriptor>,
    pub representations: Vec<Representation>,
}

/// RepresentationType: one concrete encoded variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Representation {
    pub id: Option<String>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub sar: Option<String>,
    pub frame_rate: Option<String>,
    pub bandwidth: Option<u64>,
    pub audio_sampling_rate: Option<String>,
    pub codecs: Option<String>,
    pub mime_type: Option<String>,
    pub audio_channel_configuration: Option<Descriptor>,
    pub content_protections: Vec<Descriptor>,
    /// Text content of the `BaseURL` child element.
    pub base_url: Option<String>,
    pub segment_template: Option<SegmentTemplate>,
}

/// DescriptorType: used for `ContentProtection`, `Role`,
/// `SupplementalProperty` and `AudioChannelConfiguration` elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Descriptor {
    pub scheme_id_uri: Option<String>,
    pub value: Option<String>,
    /// DRM default key id; serialized as `cenc:default_KID`, accepted with
    /// or without the prefix on input.
    pub default_kid: Option<String>,
    /// Common-encryption namespace; serialized as `xmlns:cenc` on the
    /// element when set.
    pub cenc: Option<String>,
    pub pssh: Option<Pssh>,
}

/// CencPsshType: opaque protection-system-specific payload, serialized as a
/// `cenc:pssh` element with base64-like character content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pssh {
    /// Serialized as `xmlns:cenc` on the `cenc:pssh` element when set.
    pub cenc: Option<String>,
    pub value: Option<String>,
}

/// SegmentTemplateType: rules for deriving segment URLs and timing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentTemplate {
    pub timescale: Option<u64>,
    pub duration: Option<u64>,
    pub media: Option<String>,
    pub initialization: Option<String>,
    pub start_number: Option<u64>,
    pub presentation_time_offset: Option<u64>,
    pub segment_timeline: Vec<SegmentTimelineS>,
}

/// One `S` entry of a `SegmentTimeline`.
///
/// `r` is carried as an opaque signed integer; a negative value
/// conventionally means "repeat until the next entry" but this codec does
/// not interpret it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentTimelineS {
    pub t: Option<u64>,
    pub d: u64,
    pub r: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditional_uint_renders_uint_before_bool() {
        assert_eq!(ConditionalUint::uint(0).attr_value().as_deref(), Some("0"));
        assert_eq!(
            ConditionalUint::uint(1337).attr_value().as_deref(),
            Some("1337")
        );
        assert_eq!(
            ConditionalUint::bool(true).attr_value().as_deref(),
            Some("true")
        );
        assert_eq!(
            ConditionalUint::bool(false).attr_value().as_deref(),
            Some("false")
        );
        assert_eq!(ConditionalUint::none().attr_value(), None);
    }

    #[test]
    fn conditional_uint_parses_uint_first() {
        let v = ConditionalUint::parse("AdaptationSet", "segmentAlignment", "42").unwrap();
        assert_eq!(v.as_uint(), Some(42));
        assert_eq!(v.as_bool(), None);

        // "1" matches the integer alternative, not the boolean one
        let v = ConditionalUint::parse("AdaptationSet", "segmentAlignment", "1").unwrap();
        assert_eq!(v.as_uint(), Some(1));
    }

    #[test]
    fn conditional_uint_parses_boolean_literals() {
        let v = ConditionalUint::parse("AdaptationSet", "segmentAlignment", "true").unwrap();
        assert_eq!(v.as_bool(), Some(true));
        assert_eq!(v.as_uint(), None);

        let v = ConditionalUint::parse("AdaptationSet", "subsegmentAlignment", "false").unwrap();
        assert_eq!(v.as_bool(), Some(false));
    }

    #[test]
    fn conditional_uint_rejects_anything_else() {
        for text in ["maybe", "", "True", "-1", "1.5", "yes"] {
            let err =
                ConditionalUint::parse("AdaptationSet", "segmentAlignment", text).unwrap_err();
            match err {
                crate::ParseError::InvalidAttribute {
                    element,
                    attribute,
                    value,
                } => {
                    assert_eq!(element, "AdaptationSet");
                    assert_eq!(attribute, "segmentAlignment");
                    assert_eq!(value, text);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
