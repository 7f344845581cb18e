//! XML serialization of the wire model.
//!
//! Walks the wire tree with a `quick_xml::Writer` configured for two-space
//! indentation. Childless elements are written as `Event::Empty`, so the
//! schema's mandatory self-closing form comes straight from the serializer
//! instead of a post-processing rewrite of the output text. The fixed
//! declaration line is prepended and a single trailing newline appended.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::wire::{
    AdaptationSetWire, DescriptorWire, MpdWire, PeriodWire, PsshWire, RepresentationWire,
};
use super::{ConditionalUint, SegmentTemplate, SegmentTimelineS};
use crate::error::EncodeError;

const XML_DECLARATION: &[u8] = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

pub(crate) fn write_mpd(mpd: &MpdWire) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_root(&mut writer, mpd)?;
    let body = writer.into_inner();

    let mut out = Vec::with_capacity(XML_DECLARATION.len() + body.len() + 1);
    out.extend_from_slice(XML_DECLARATION);
    out.extend_from_slice(&body);
    out.push(b'\n');
    Ok(out)
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event) -> Result<(), EncodeError> {
    writer
        .write_event(event)
        .map_err(|e| EncodeError::Write(e.to_string()))
}

fn push_opt(el: &mut BytesStart, name: &str, value: &Option<String>) {
    if let Some(v) = value {
        el.push_attribute((name, v.as_str()));
    }
}

fn push_u64(el: &mut BytesStart, name: &str, value: Option<u64>) {
    if let Some(v) = value {
        el.push_attribute((name, v.to_string().as_str()));
    }
}

fn push_i64(el: &mut BytesStart, name: &str, value: Option<i64>) {
    if let Some(v) = value {
        el.push_attribute((name, v.to_string().as_str()));
    }
}

fn push_bool(el: &mut BytesStart, name: &str, value: Option<bool>) {
    if let Some(v) = value {
        el.push_attribute((name, v.to_string().as_str()));
    }
}

fn push_cond(el: &mut BytesStart, name: &str, value: &ConditionalUint) {
    if let Some(v) = value.attr_value() {
        el.push_attribute((name, v.as_str()));
    }
}

fn write_root<W: Write>(writer: &mut Writer<W>, mpd: &MpdWire) -> Result<(), EncodeError> {
    let mut el = BytesStart::new("MPD");
    push_opt(&mut el, "xmlns:xsi", &mpd.xmlns_xsi);
    push_opt(&mut el, "xmlns", &mpd.xmlns);
    push_opt(&mut el, "xsi:schemaLocation", &mpd.xsi_schema_location);
    push_opt(&mut el, "id", &mpd.id);
    push_opt(&mut el, "type", &mpd.mpd_type);
    push_opt(&mut el, "publishTime", &mpd.publish_time);
    push_opt(&mut el, "minimumUpdatePeriod", &mpd.minimum_update_period);
    push_opt(&mut el, "availabilityStartTime", &mpd.availability_start_time);
    push_opt(
        &mut el,
        "mediaPresentationDuration",
        &mpd.media_presentation_duration,
    );
    push_opt(&mut el, "minBufferTime", &mpd.min_buffer_time);
    push_opt(
        &mut el,
        "suggestedPresentationDelay",
        &mpd.suggested_presentation_delay,
    );
    push_opt(&mut el, "timeShiftBufferDepth", &mpd.time_shift_buffer_depth);
    el.push_attribute(("profiles", mpd.profiles.as_str()));
    push_opt(&mut el, "xmlns:scte35", &mpd.xmlns_scte35);

    if mpd.base_url.is_none() && mpd.periods.is_empty() {
        return emit(writer, Event::Empty(el));
    }
    emit(writer, Event::Start(el))?;
    write_base_url(writer, &mpd.base_url)?;
    for period in &mpd.periods {
        write_period(writer, period)?;
    }
    emit(writer, Event::End(BytesEnd::new("MPD")))
}

fn write_period<W: Write>(writer: &mut Writer<W>, period: &PeriodWire) -> Result<(), EncodeError> {
    let mut el = BytesStart::new("Period");
    push_opt(&mut el, "start", &period.start);
    push_opt(&mut el, "id", &period.id);
    push_opt(&mut el, "duration", &period.duration);

    if period.adaptation_sets.is_empty() {
        return emit(writer, Event::Empty(el));
    }
    emit(writer, Event::Start(el))?;
    for set in &period.adaptation_sets {
        write_adaptation_set(writer, set)?;
    }
    emit(writer, Event::End(BytesEnd::new("Period")))
}

fn write_adaptation_set<W: Write>(
    writer: &mut Writer<W>,
    set: &AdaptationSetWire,
) -> Result<(), EncodeError> {
    let mut el = BytesStart::new("AdaptationSet");
    push_opt(&mut el, "mimeType", &set.mime_type);
    push_cond(&mut el, "segmentAlignment", &set.segment_alignment);
    push_u64(&mut el, "startWithSAP", set.start_with_sap);
    push_bool(&mut el, "bitstreamSwitching", set.bitstream_switching);
    push_cond(&mut el, "subsegmentAlignment", &set.subsegment_alignment);
    push_u64(
        &mut el,
        "subsegmentStartsWithSAP",
        set.subsegment_starts_with_sap,
    );
    push_opt(&mut el, "lang", &set.lang);
    push_opt(&mut el, "contentType", &set.content_type);
    push_opt(&mut el, "width", &set.width);
    push_opt(&mut el, "height", &set.height);
    push_opt(&mut el, "maxWidth", &set.max_width);
    push_opt(&mut el, "maxHeight", &set.max_height);
    push_opt(&mut el, "frameRate", &set.frame_rate);
    push_opt(&mut el, "par", &set.par);
    push_opt(&mut el, "codecs", &set.codecs);

    let childless = set.content_protections.is_empty()
        && set.role.is_none()
        && set.supplemental_property.is_none()
        && set.representations.is_empty();
    if childless {
        return emit(writer, Event::Empty(el));
    }
    emit(writer, Event::Start(el))?;
    for protection in &set.content_protections {
        write_descriptor(writer, "ContentProtection", protection)?;
    }
    if let Some(role) = &set.role {
        write_descriptor(writer, "Role", role)?;
    }
    if let Some(supplemental) = &set.supplemental_property {
        write_descriptor(writer, "SupplementalProperty", supplemental)?;
    }
    for representation in &set.representations {
        write_representation(writer, representation)?;
    }
    emit(writer, Event::End(BytesEnd::new("AdaptationSet")))
}

fn write_representation<W: Write>(
    writer: &mut Writer<W>,
    rep: &RepresentationWire,
) -> Result<(), EncodeError> {
    let mut el = BytesStart::new("Representation");
    push_opt(&mut el, "id", &rep.id);
    push_u64(&mut el, "width", rep.width);
    push_u64(&mut el, "height", rep.height);
    push_opt(&mut el, "sar", &rep.sar);
    push_opt(&mut el, "frameRate", &rep.frame_rate);
    push_u64(&mut el, "bandwidth", rep.bandwidth);
    push_opt(&mut el, "audioSamplingRate", &rep.audio_sampling_rate);
    push_opt(&mut el, "codecs", &rep.codecs);
    push_opt(&mut el, "mimeType", &rep.mime_type);

    let childless = rep.audio_channel_configuration.is_none()
        && rep.content_protections.is_empty()
        && rep.base_url.is_none()
        && rep.segment_template.is_none();
    if childless {
        return emit(writer, Event::Empty(el));
    }
    emit(writer, Event::Start(el))?;
    if let Some(audio) = &rep.audio_channel_configuration {
        write_descriptor(writer, "AudioChannelConfiguration", audio)?;
    }
    for protection in &rep.content_protections {
        write_descriptor(writer, "ContentProtection", protection)?;
    }
    write_base_url(writer, &rep.base_url)?;
    if let Some(template) = &rep.segment_template {
        write_segment_template(writer, template)?;
    }
    emit(writer, Event::End(BytesEnd::new("Representation")))
}

fn write_descriptor<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    descriptor: &DescriptorWire,
) -> Result<(), EncodeError> {
    let mut el = BytesStart::new(tag);
    push_opt(&mut el, "schemeIdUri", &descriptor.scheme_id_uri);
    push_opt(&mut el, "value", &descriptor.value);
    push_opt(&mut el, "cenc:default_KID", &descriptor.cenc_default_kid);
    push_opt(&mut el, "xmlns:cenc", &descriptor.xmlns_cenc);

    match &descriptor.pssh {
        None => emit(writer, Event::Empty(el)),
        Some(pssh) => {
            emit(writer, Event::Start(el))?;
            write_pssh(writer, pssh)?;
            emit(writer, Event::End(BytesEnd::new(tag)))
        }
    }
}

fn write_pssh<W: Write>(writer: &mut Writer<W>, pssh: &PsshWire) -> Result<(), EncodeError> {
    let mut el = BytesStart::new("cenc:pssh");
    push_opt(&mut el, "xmlns:cenc", &pssh.xmlns_cenc);

    match pssh.value.as_deref() {
        None | Some("") => emit(writer, Event::Empty(el)),
        Some(value) => {
            emit(writer, Event::Start(el))?;
            emit(writer, Event::Text(BytesText::new(value)))?;
            emit(writer, Event::End(BytesEnd::new("cenc:pssh")))
        }
    }
}

fn write_base_url<W: Write>(
    writer: &mut Writer<W>,
    base_url: &Option<String>,
) -> Result<(), EncodeError> {
    let Some(url) = base_url else {
        return Ok(());
    };
    if url.is_empty() {
        return emit(writer, Event::Empty(BytesStart::new("BaseURL")));
    }
    emit(writer, Event::Start(BytesStart::new("BaseURL")))?;
    emit(writer, Event::Text(BytesText::new(url)))?;
    emit(writer, Event::End(BytesEnd::new("BaseURL")))
}

fn write_segment_template<W: Write>(
    writer: &mut Writer<W>,
    template: &SegmentTemplate,
) -> Result<(), EncodeError> {
    let mut el = BytesStart::new("SegmentTemplate");
    push_u64(&mut el, "timescale", template.timescale);
    push_u64(&mut el, "duration", template.duration);
    push_opt(&mut el, "media", &template.media);
    push_opt(&mut el, "initialization", &template.initialization);
    push_u64(&mut el, "startNumber", template.start_number);
    push_u64(
        &mut el,
        "presentationTimeOffset",
        template.presentation_time_offset,
    );

    if template.segment_timeline.is_empty() {
        return emit(writer, Event::Empty(el));
    }
    emit(writer, Event::Start(el))?;
    emit(writer, Event::Start(BytesStart::new("SegmentTimeline")))?;
    for entry in &template.segment_timeline {
        write_timeline_entry(writer, entry)?;
    }
    emit(writer, Event::End(BytesEnd::new("SegmentTimeline")))?;
    emit(writer, Event::End(BytesEnd::new("SegmentTemplate")))
}

fn write_timeline_entry<W: Write>(
    writer: &mut Writer<W>,
    entry: &SegmentTimelineS,
) -> Result<(), EncodeError> {
    let mut el = BytesStart::new("S");
    push_u64(&mut el, "t", entry.t);
    el.push_attribute(("d", entry.d.to_string().as_str()));
    push_i64(&mut el, "r", entry.r);
    emit(writer, Event::Empty(el))
}
