//! Parsing and generating of MPEG-DASH Media Presentation Description (MPD)
//! files.
//!
//! An [`Mpd`] is either decoded from bytes with [`Mpd::decode`] or built
//! directly, mutated freely, and serialized with [`Mpd::encode`]. Encoding
//! goes through a wire projection that carries the namespace-prefixed
//! attribute spellings the schema requires on output, so a decoded document
//! re-encodes to byte-for-byte schema-correct XML.
//!
//! References:
//! - <http://mpeg.chiariglione.org/standards/mpeg-dash>
//! - <http://standards.iso.org/ittf/PubliclyAvailableStandards/MPEG-DASH_schema_files/DASH-MPD.xsd>

pub mod error;
pub mod mpd;

pub use error::{EncodeError, ParseError};
pub use mpd::{
    AdaptationSet, ConditionalUint, Descriptor, Mpd, Period, Pssh, Representation,
    SegmentTemplate, SegmentTimelineS,
};
