//! Wire model and the projection that builds it.
//!
//! The wire model is the exact shape the serializer walks. It mirrors the
//! document model structurally but carries the serialization-only namespace
//! fields (`xmlns:xsi`, `xsi:schemaLocation`, `xmlns:scte35`, `xmlns:cenc`)
//! and the prefixed spelling of the DRM key id (`cenc:default_KID`).
//!
//! [`project`] is pure and total: it never fails and deep-copies every field,
//! so mutating the source document after projection (or vice versa) affects
//! neither side. Namespace declarations are emitted exactly when the caller
//! set the corresponding optional field; the projection performs no tree scan.

use super::{Descriptor, Mpd, Period, Pssh, Representation, SegmentTemplate};

pub(crate) struct MpdWire {
    pub xmlns_xsi: Option<String>,
    pub xmlns: Option<String>,
    pub xsi_schema_location: Option<String>,
    pub id: Option<String>,
    pub mpd_type: Option<String>,
    pub publish_time: Option<String>,
    pub minimum_update_period: Option<String>,
    pub availability_start_time: Option<String>,
    pub media_presentation_duration: Option<String>,
    pub min_buffer_time: Option<String>,
    pub suggested_presentation_delay: Option<String>,
    pub time_shift_buffer_depth: Option<String>,
    pub profiles: String,
    pub xmlns_scte35: Option<String>,
    pub base_url: Option<String>,
    pub periods: Vec<PeriodWire>,
}

pub(crate) struct PeriodWire {
    pub start: Option<String>,
    pub id: Option<String>,
    pub duration: Option<String>,
    pub adaptation_sets: Vec<AdaptationSetWire>,
}

pub(crate) struct AdaptationSetWire {
    pub mime_type: Option<String>,
    pub segment_alignment: super::ConditionalUint,
    pub start_with_sap: Option<u64>,
    pub bitstream_switching: Option<bool>,
    pub subsegment_alignment: super::ConditionalUint,
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
    pub content_protections: Vec<DescriptorWire>,
    pub role: Option<DescriptorWire>,
    pub supplemental_property: Option<DescriptorWire>,
    pub representations: Vec<RepresentationWire>,
}

pub(crate) struct RepresentationWire {
    pub id: Option<String>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub sar: Option<String>,
    pub frame_rate: Option<String>,
    pub bandwidth: Option<u64>,
    pub audio_sampling_rate: Option<String>,
    pub codecs: Option<String>,
    pub mime_type: Option<String>,
    pub audio_channel_configuration: Option<DescriptorWire>,
    pub content_protections: Vec<DescriptorWire>,
    pub base_url: Option<String>,
    pub segment_template: Option<SegmentTemplate>,
}

pub(crate) struct DescriptorWire {
    pub scheme_id_uri: Option<String>,
    pub value: Option<String>,
    /// Written as `cenc:default_KID`.
    pub cenc_default_kid: Option<String>,
    /// Written as `xmlns:cenc` on the descriptor element.
    pub xmlns_cenc: Option<String>,
    pub pssh: Option<PsshWire>,
}

pub(crate) struct PsshWire {
    /// Written as `xmlns:cenc` on the `cenc:pssh` element.
    pub xmlns_cenc: Option<String>,
    pub value: Option<String>,
}

/// Builds the wire tree for one encode call.
pub(crate) fn project(mpd: &Mpd) -> MpdWire {
    MpdWire {
        xmlns_xsi: mpd.xsi.clone(),
        xmlns: mpd.xmlns.clone(),
        xsi_schema_location: mpd.schema_location.clone(),
        id: mpd.id.clone(),
        mpd_type: mpd.mpd_type.clone(),
        publish_time: mpd.publish_time.clone(),
        minimum_update_period: mpd.minimum_update_period.clone(),
        availability_start_time: mpd.availability_start_time.clone(),
        media_presentation_duration: mpd.media_presentation_duration.clone(),
        min_buffer_time: mpd.min_buffer_time.clone(),
        suggested_presentation_delay: mpd.suggested_presentation_delay.clone(),
        time_shift_buffer_depth: mpd.time_shift_buffer_depth.clone(),
        profiles: mpd.profiles.clone(),
        xmlns_scte35: mpd.scte35.clone(),
        base_url: mpd.base_url.clone(),
        periods: mpd.periods.iter().map(project_period).collect(),
    }
}

fn project_period(period: &Period) -> PeriodWire {
    PeriodWire {
        start: period.start.clone(),
        id: period.id.clone(),
        duration: period.duration.clone(),
        adaptation_sets: period
            .adaptation_sets
            .iter()
            .map(project_adaptation_set)
            .collect(),
    }
}

fn project_adaptation_set(set: &super::AdaptationSet) -> AdaptationSetWire {
    AdaptationSetWire {
        mime_type: set.mime_type.clone(),
        segment_alignment: set.segment_alignment.clone(),
        start_with_sap: set.start_with_sap,
        bitstream_switching: set.bitstream_switching,
        subsegment_alignment: set.subsegment_alignment.clone(),
        subsegment_starts_with_sap: set.subsegment_starts_with_sap,
        lang: set.lang.clone(),
        content_type: set.content_type.clone(),
        width: set.width.clone(),
        height: set.height.clone(),
        max_width: set.max_width.clone(),
        max_height: set.max_height.clone(),
        frame_rate: set.frame_rate.clone(),
        par: set.par.clone(),
        codecs: set.codecs.clone(),
        content_protections: set.content_protections.iter().map(project_descriptor).collect(),
        role: set.role.as_ref().map(project_descriptor),
        supplemental_property: set.supplemental_property.as_ref().map(project_descriptor),
        representations: set
            .representations
            .iter()
            .map(project_representation)
            .collect(),
    }
}

fn project_representation(rep: &Representation) -> RepresentationWire {
    RepresentationWire {
        id: rep.id.clone(),
        width: rep.width,
        height: rep.height,
        sar: rep.sar.clone(),
        frame_rate: rep.frame_rate.clone(),
        bandwidth: rep.bandwidth,
        audio_sampling_rate: rep.audio_sampling_rate.clone(),
        codecs: rep.codecs.clone(),
        mime_type: rep.mime_type.clone(),
        audio_channel_configuration: rep
            .audio_channel_configuration
            .as_ref()
            .map(project_descriptor),
        content_protections: rep.content_protections.iter().map(project_descriptor).collect(),
        base_url: rep.base_url.clone(),
        // owned scalars and strings all the way down, so Clone is the
        // defensive copy
        segment_template: rep.segment_template.clone(),
    }
}

fn project_descriptor(descriptor: &Descriptor) -> DescriptorWire {
    DescriptorWire {
        scheme_id_uri: descriptor.scheme_id_uri.clone(),
        value: descriptor.value.clone(),
        cenc_default_kid: descriptor.default_kid.clone(),
        xmlns_cenc: descriptor.cenc.clone(),
        pssh: descriptor.pssh.as_ref().map(project_pssh),
    }
}

fn project_pssh(pssh: &Pssh) -> PsshWire {
    PsshWire {
        xmlns_cenc: pssh.cenc.clone(),
        value: pssh.value.clone(),
    }
}
