//! Event-driven MPD decoding.
//!
//! Single pass over the byte buffer; the first error aborts the parse and no
//! partial document is returned. Elements and attributes that are not part
//! of the model are skipped. The `cenc` attributes are accepted both with
//! and without their namespace prefix, since producers disagree on input
//! while output is always prefixed.

use quick_xml::events::attributes::Attribute;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::{
    AdaptationSet, ConditionalUint, Descriptor, Mpd, Period, Pssh, Representation,
    SegmentTemplate, SegmentTimelineS,
};
use crate::error::ParseError;

/// Which element's character content is currently being collected.
enum TextTarget {
    None,
    MpdBaseUrl,
    RepresentationBaseUrl,
    Pssh,
}

pub(crate) fn parse_mpd(bytes: &[u8]) -> Result<Mpd, ParseError> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut mpd: Option<Mpd> = None;
    let mut period: Option<Period> = None;
    let mut adaptation: Option<AdaptationSet> = None;
    let mut representation: Option<Representation> = None;
    let mut descriptor: Option<Descriptor> = None;
    let mut template: Option<SegmentTemplate> = None;
    let mut pssh: Option<Pssh> = None;
    let mut text_target = TextTarget::None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"MPD" => mpd = Some(parse_mpd_attrs(e)?),
                b"Period" => period = Some(parse_period_attrs(e)?),
                b"AdaptationSet" => adaptation = Some(parse_adaptation_set_attrs(e)?),
                b"Representation" => representation = Some(parse_representation_attrs(e)?),
                b"ContentProtection" | b"Role" | b"SupplementalProperty"
                | b"AudioChannelConfiguration" => descriptor = Some(parse_descriptor_attrs(e)?),
                b"SegmentTemplate" => template = Some(parse_segment_template_attrs(e)?),
                b"SegmentTimeline" => {}
                b"S" => {
                    if let Some(tpl) = template.as_mut() {
                        tpl.segment_timeline.push(parse_timeline_entry(e)?);
                    }
                }
                b"cenc:pssh" | b"pssh" => {
                    pssh = Some(parse_pssh_attrs(e)?);
                    text_target = TextTarget::Pssh;
                }
                b"BaseURL" => {
                    if let Some(rep) = representation.as_mut() {
                        rep.base_url = Some(String::new());
                        text_target = TextTarget::RepresentationBaseUrl;
                    } else if period.is_none() && adaptation.is_none() {
                        if let Some(m) = mpd.as_mut() {
                            m.base_url = Some(String::new());
                            text_target = TextTarget::MpdBaseUrl;
                        }
                    }
                }
                _ => {}
            },

            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"MPD" => mpd = Some(parse_mpd_attrs(e)?),
                b"Period" => {
                    let p = parse_period_attrs(e)?;
                    if let Some(m) = mpd.as_mut() {
                        m.periods.push(p);
                    }
                }
                b"AdaptationSet" => {
                    let set = parse_adaptation_set_attrs(e)?;
                    if let Some(p) = period.as_mut() {
                        p.adaptation_sets.push(set);
                    }
                }
                b"Representation" => {
                    let rep = parse_representation_attrs(e)?;
                    if let Some(set) = adaptation.as_mut() {
                        set.representations.push(rep);
                    }
                }
                b"ContentProtection" | b"Role" | b"SupplementalProperty"
                | b"AudioChannelConfiguration" => {
                    let d = parse_descriptor_attrs(e)?;
                    attach_descriptor(
                        e.name().as_ref(),
                        d,
                        adaptation.as_mut(),
                        representation.as_mut(),
                    );
                }
                b"SegmentTemplate" => {
                    if let Some(rep) = representation.as_mut() {
                        rep.segment_template = Some(parse_segment_template_attrs(e)?);
                    }
                }
                b"S" => {
                    if let Some(tpl) = template.as_mut() {
                        tpl.segment_timeline.push(parse_timeline_entry(e)?);
                    }
                }
                b"cenc:pssh" | b"pssh" => {
                    if let Some(d) = descriptor.as_mut() {
                        d.pssh = Some(parse_pssh_attrs(e)?);
                    }
                }
                b"BaseURL" => {
                    if let Some(rep) = representation.as_mut() {
                        rep.base_url = Some(String::new());
                    } else if period.is_none() && adaptation.is_none() {
                        if let Some(m) = mpd.as_mut() {
                            m.base_url = Some(String::new());
                        }
                    }
                }
                _ => {}
            },

            Ok(Event::Text(ref t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| ParseError::Xml(e.to_string()))?
                    .into_owned();
                assign_text(&text_target, text, &mut mpd, &mut representation, &mut pssh);
            }

            Ok(Event::CData(ref t)) => {
                // CDATA sections carry no entity escapes
                let text = String::from_utf8(t.to_vec())
                    .map_err(|e| ParseError::Xml(e.to_string()))?;
                assign_text(&text_target, text, &mut mpd, &mut representation, &mut pssh);
            }

            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"Period" => {
                    if let (Some(m), Some(p)) = (mpd.as_mut(), period.take()) {
                        m.periods.push(p);
                    }
                }
                b"AdaptationSet" => {
                    if let (Some(p), Some(set)) = (period.as_mut(), adaptation.take()) {
                        p.adaptation_sets.push(set);
                    }
                }
                b"Representation" => {
                    if let (Some(set), Some(rep)) = (adaptation.as_mut(), representation.take()) {
                        set.representations.push(rep);
                    }
                }
                b"ContentProtection" | b"Role" | b"SupplementalProperty"
                | b"AudioChannelConfiguration" => {
                    if let Some(d) = descriptor.take() {
                        attach_descriptor(
                            e.name().as_ref(),
                            d,
                            adaptation.as_mut(),
                            representation.as_mut(),
                        );
                    }
                }
                b"SegmentTemplate" => {
                    if let (Some(rep), Some(tpl)) = (representation.as_mut(), template.take()) {
                        rep.segment_template = Some(tpl);
                    }
                }
                b"cenc:pssh" | b"pssh" => {
                    if let (Some(d), Some(p)) = (descriptor.as_mut(), pssh.take()) {
                        d.pssh = Some(p);
                    }
                    text_target = TextTarget::None;
                }
                b"BaseURL" => text_target = TextTarget::None,
                _ => {}
            },

            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ParseError::Xml(e.to_string())),
        }
        buf.clear();
    }

    mpd.ok_or(ParseError::MissingElement { element: "MPD" })
}

fn assign_text(
    target: &TextTarget,
    text: String,
    mpd: &mut Option<Mpd>,
    representation: &mut Option<Representation>,
    pssh: &mut Option<Pssh>,
) {
    match target {
        TextTarget::MpdBaseUrl => {
            if let Some(m) = mpd.as_mut() {
                m.base_url = Some(text);
            }
        }
        TextTarget::RepresentationBaseUrl => {
            if let Some(rep) = representation.as_mut() {
                rep.base_url = Some(text);
            }
        }
        TextTarget::Pssh => {
            if let Some(p) = pssh.as_mut() {
                p.value = Some(text);
            }
        }
        TextTarget::None => {}
    }
}

fn attach_descriptor(
    tag: &[u8],
    descriptor: Descriptor,
    adaptation: Option<&mut AdaptationSet>,
    representation: Option<&mut Representation>,
) {
    match tag {
        b"ContentProtection" => {
            if let Some(rep) = representation {
                rep.content_protections.push(descriptor);
            } else if let Some(set) = adaptation {
                set.content_protections.push(descriptor);
            }
        }
        b"Role" => {
            if let Some(set) = adaptation {
                set.role = Some(descriptor);
            }
        }
        b"SupplementalProperty" => {
            if let Some(set) = adaptation {
                set.supplemental_property = Some(descriptor);
            }
        }
        b"AudioChannelConfiguration" => {
            if let Some(rep) = representation {
                rep.audio_channel_configuration = Some(descriptor);
            }
        }
        _ => {}
    }
}

fn attr_text(attr: &Attribute) -> Result<String, ParseError> {
    attr.unescape_value()
        .map(|v| v.into_owned())
        .map_err(|e| ParseError::Xml(e.to_string()))
}

fn parse_u64(
    element: &'static str,
    attribute: &'static str,
    text: &str,
) -> Result<u64, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidAttribute {
        element,
        attribute,
        value: text.to_string(),
    })
}

fn parse_i64(
    element: &'static str,
    attribute: &'static str,
    text: &str,
) -> Result<i64, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidAttribute {
        element,
        attribute,
        value: text.to_string(),
    })
}

fn parse_bool(
    element: &'static str,
    attribute: &'static str,
    text: &str,
) -> Result<bool, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidAttribute {
        element,
        attribute,
        value: text.to_string(),
    })
}

fn each_attr<F>(e: &BytesStart, mut f: F) -> Result<(), ParseError>
where
    F: FnMut(&[u8], String) -> Result<(), ParseError>,
{
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ParseError::Xml(e.to_string()))?;
        let value = attr_text(&attr)?;
        f(attr.key.as_ref(), value)?;
    }
    Ok(())
}

fn parse_mpd_attrs(e: &BytesStart) -> Result<Mpd, ParseError> {
    let mut mpd = Mpd::default();
    let mut profiles = None;
    each_attr(e, |key, value| {
        match key {
            b"xmlns" => mpd.xmlns = Some(value),
            b"xmlns:xsi" | b"xsi" => mpd.xsi = Some(value),
            b"xsi:schemaLocation" | b"schemaLocation" => mpd.schema_location = Some(value),
            b"id" => mpd.id = Some(value),
            b"type" => mpd.mpd_type = Some(value),
            b"publishTime" => mpd.publish_time = Some(value),
            b"minimumUpdatePeriod" => mpd.minimum_update_period = Some(value),
            b"availabilityStartTime" => mpd.availability_start_time = Some(value),
            b"mediaPresentationDuration" => mpd.media_presentation_duration = Some(value),
            b"minBufferTime" => mpd.min_buffer_time = Some(value),
            b"suggestedPresentationDelay" => mpd.suggested_presentation_delay = Some(value),
            b"timeShiftBufferDepth" => mpd.time_shift_buffer_depth = Some(value),
            b"profiles" => profiles = Some(value),
            b"xmlns:scte35" | b"scte35" => mpd.scte35 = Some(value),
            _ => {}
        }
        Ok(())
    })?;
    mpd.profiles = profiles.ok_or(ParseError::MissingAttribute {
        element: "MPD",
        attribute: "profiles",
    })?;
    Ok(mpd)
}

fn parse_period_attrs(e: &BytesStart) -> Result<Period, ParseError> {
    let mut period = Period::default();
    each_attr(e, |key, value| {
        match key {
            b"start" => period.start = Some(value),
            b"id" => period.id = Some(value),
            b"duration" => period.duration = Some(value),
            _ => {}
        }
        Ok(())
    })?;
    Ok(period)
}

fn parse_adaptation_set_attrs(e: &BytesStart) -> Result<AdaptationSet, ParseError> {
    const EL: &str = "AdaptationSet";
    let mut set = AdaptationSet::default();
    each_attr(e, |key, value| {
        match key {
            b"mimeType" => set.mime_type = Some(value),
            b"segmentAlignment" => {
                set.segment_alignment = ConditionalUint::parse(EL, "segmentAlignment", &value)?;
            }
            b"startWithSAP" => {
                set.start_with_sap = Some(parse_u64(EL, "startWithSAP", &value)?);
            }
            b"bitstreamSwitching" => {
                set.bitstream_switching = Some(parse_bool(EL, "bitstreamSwitching", &value)?);
            }
            b"subsegmentAlignment" => {
                set.subsegment_alignment =
                    ConditionalUint::parse(EL, "subsegmentAlignment", &value)?;
            }
            b"subsegmentStartsWithSAP" => {
                set.subsegment_starts_with_sap =
                    Some(parse_u64(EL, "subsegmentStartsWithSAP", &value)?);
            }
            b"lang" => set.lang = Some(value),
            b"contentType" => set.content_type = Some(value),
            b"width" => set.width = Some(value),
            b"height" => set.height = Some(value),
            b"maxWidth" => set.max_width = Some(value),
            b"maxHeight" => set.max_height = Some(value),
            b"frameRate" => set.frame_rate = Some(value),
            b"par" => set.par = Some(value),
            b"codecs" => set.codecs = Some(value),
            _ => {}
        }
        Ok(())
    })?;
    Ok(set)
}

fn parse_representation_attrs(e: &BytesStart) -> Result<Representation, ParseError> {
    const EL: &str = "Representation";
    let mut rep = Representation::default();
    each_attr(e, |key, value| {
        match key {
            b"id" => rep.id = Some(value),
            b"width" => rep.width = Some(parse_u64(EL, "width", &value)?),
            b"height" => rep.height = Some(parse_u64(EL, "height", &value)?),
            b"sar" => rep.sar = Some(value),
            b"frameRate" => rep.frame_rate = Some(value),
            b"bandwidth" => rep.bandwidth = Some(parse_u64(EL, "bandwidth", &value)?),
            b"audioSamplingRate" => rep.audio_sampling_rate = Some(value),
            b"codecs" => rep.codecs = Some(value),
            b"mimeType" => rep.mime_type = Some(value),
            _ => {}
        }
        Ok(())
    })?;
    Ok(rep)
}

fn parse_descriptor_attrs(e: &BytesStart) -> Result<Descriptor, ParseError> {
    let mut descriptor = Descriptor::default();
    each_attr(e, |key, value| {
        match key {
            b"schemeIdUri" => descriptor.scheme_id_uri = Some(value),
            b"value" => descriptor.value = Some(value),
            b"cenc:default_KID" | b"default_KID" => descriptor.default_kid = Some(value),
            b"xmlns:cenc" | b"cenc" => descriptor.cenc = Some(value),
            _ => {}
        }
        Ok(())
    })?;
    Ok(descriptor)
}

fn parse_pssh_attrs(e: &BytesStart) -> Result<Pssh, ParseError> {
    let mut pssh = Pssh::default();
    each_attr(e, |key, value| {
        match key {
            b"xmlns:cenc" | b"cenc" => pssh.cenc = Some(value),
            _ => {}
        }
        Ok(())
    })?;
    Ok(pssh)
}

fn parse_segment_template_attrs(e: &BytesStart) -> Result<SegmentTemplate, ParseError> {
    const EL: &str = "SegmentTemplate";
    let mut template = SegmentTemplate::default();
    each_attr(e, |key, value| {
        match key {
            b"timescale" => template.timescale = Some(parse_u64(EL, "timescale", &value)?),
            b"duration" => template.duration = Some(parse_u64(EL, "duration", &value)?),
            b"media" => template.media = Some(value),
            b"initialization" => template.initialization = Some(value),
            b"startNumber" => template.start_number = Some(parse_u64(EL, "startNumber", &value)?),
            b"presentationTimeOffset" => {
                template.presentation_time_offset =
                    Some(parse_u64(EL, "presentationTimeOffset", &value)?);
            }
            _ => {}
        }
        Ok(())
    })?;
    Ok(template)
}

fn parse_timeline_entry(e: &BytesStart) -> Result<SegmentTimelineS, ParseError> {
    const EL: &str = "S";
    let mut t = None;
    let mut d = None;
    let mut r = None;
    each_attr(e, |key, value| {
        match key {
            b"t" => t = Some(parse_u64(EL, "t", &value)?),
            b"d" => d = Some(parse_u64(EL, "d", &value)?),
            b"r" => r = Some(parse_i64(EL, "r", &value)?),
            _ => {}
        }
        Ok(())
    })?;
    Ok(SegmentTimelineS {
        t,
        d: d.ok_or(ParseError::MissingAttribute {
            element: EL,
            attribute: "d",
        })?,
        r,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIVE_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MPD xmlns="urn:mpeg:dash:schema:mpd:2011" type="dynamic" minimumUpdatePeriod="PT5S" availabilityStartTime="2026-01-01T00:00:00Z" minBufferTime="PT6S" timeShiftBufferDepth="PT30S" profiles="urn:mpeg:dash:profile:isoff-live:2011">
  <Period start="PT0S" id="1">
    <AdaptationSet mimeType="video/mp4" segmentAlignment="true" startWithSAP="1" maxWidth="1280" maxHeight="720" frameRate="30000/1001">
      <ContentProtection schemeIdUri="urn:mpeg:dash:mp4protection:2011" value="cenc" cenc:default_KID="10000000-1000-1000-8000-100000000001" xmlns:cenc="urn:mpeg:cenc:2013"/>
      <ContentProtection schemeIdUri="urn:uuid:edef8ba9-79d6-4ace-a3c8-27dcd51d21ed">
        <cenc:pssh xmlns:cenc="urn:mpeg:cenc:2013">AAAAW3Bzc2g=</cenc:pssh>
      </ContentProtection>
      <Representation id="v1" width="1280" height="720" sar="1:1" frameRate="30000/1001" bandwidth="2000000" codecs="avc1.64001f">
        <SegmentTemplate timescale="90000" media="video_$Number$.mp4" initialization="video_init.mp4" startNumber="1">
          <SegmentTimeline>
            <S t="0" d="180000" r="-1"/>
          </SegmentTimeline>
        </SegmentTemplate>
      </Representation>
    </AdaptationSet>
  </Period>
</MPD>
"#;

    #[test]
    fn parses_a_live_manifest() {
        let mpd = parse_mpd(LIVE_MANIFEST.as_bytes()).unwrap();
        assert_eq!(mpd.profiles, "urn:mpeg:dash:profile:isoff-live:2011");
        assert_eq!(mpd.mpd_type.as_deref(), Some("dynamic"));
        assert_eq!(mpd.xmlns.as_deref(), Some("urn:mpeg:dash:schema:mpd:2011"));
        assert_eq!(mpd.periods.len(), 1);

        let set = &mpd.periods[0].adaptation_sets[0];
        assert_eq!(set.mime_type.as_deref(), Some("video/mp4"));
        assert_eq!(set.segment_alignment.as_bool(), Some(true));
        assert_eq!(set.start_with_sap, Some(1));
        assert_eq!(set.content_protections.len(), 2);
        assert_eq!(
            set.content_protections[0].default_kid.as_deref(),
            Some("10000000-1000-1000-8000-100000000001")
        );
        assert_eq!(
            set.content_protections[0].cenc.as_deref(),
            Some("urn:mpeg:cenc:2013")
        );
        let pssh = set.content_protections[1].pssh.as_ref().unwrap();
        assert_eq!(pssh.value.as_deref(), Some("AAAAW3Bzc2g="));
        assert_eq!(pssh.cenc.as_deref(), Some("urn:mpeg:cenc:2013"));

        let rep = &set.representations[0];
        assert_eq!(rep.id.as_deref(), Some("v1"));
        assert_eq!(rep.bandwidth, Some(2_000_000));
        let template = rep.segment_template.as_ref().unwrap();
        assert_eq!(template.timescale, Some(90_000));
        assert_eq!(template.segment_timeline.len(), 1);
        assert_eq!(template.segment_timeline[0].d, 180_000);
        assert_eq!(template.segment_timeline[0].r, Some(-1));
    }

    #[test]
    fn accepts_unprefixed_cenc_attributes() {
        let xml = r#"<MPD profiles="p"><Period><AdaptationSet>
            <ContentProtection schemeIdUri="urn:x" default_KID="kid"/>
        </AdaptationSet></Period></MPD>"#;
        let mpd = parse_mpd(xml.as_bytes()).unwrap();
        let protection = &mpd.periods[0].adaptation_sets[0].content_protections[0];
        assert_eq!(protection.default_kid.as_deref(), Some("kid"));
    }

    #[test]
    fn cdata_pssh_payload_is_captured() {
        let xml = r#"<MPD profiles="p"><Period><AdaptationSet>
            <ContentProtection schemeIdUri="urn:uuid:edef8ba9-79d6-4ace-a3c8-27dcd51d21ed">
                <cenc:pssh xmlns:cenc="urn:mpeg:cenc:2013"><![CDATA[AAAAW3Bzc2g=]]></cenc:pssh>
            </ContentProtection>
        </AdaptationSet></Period></MPD>"#;
        let mpd = parse_mpd(xml.as_bytes()).unwrap();
        let pssh = mpd.periods[0].adaptation_sets[0].content_protections[0]
            .pssh
            .as_ref()
            .unwrap();
        assert_eq!(pssh.value.as_deref(), Some("AAAAW3Bzc2g="));
    }

    #[test]
    fn cdata_base_url_is_captured() {
        let xml = "<MPD profiles=\"p\"><BaseURL><![CDATA[http://cdn.example.com/a&b/]]></BaseURL></MPD>";
        let mpd = parse_mpd(xml.as_bytes()).unwrap();
        assert_eq!(mpd.base_url.as_deref(), Some("http://cdn.example.com/a&b/"));
    }

    #[test]
    fn role_and_supplemental_property_attach_to_the_adaptation_set() {
        let xml = r#"<MPD profiles="p"><Period><AdaptationSet>
            <Role schemeIdUri="urn:mpeg:dash:role:2011" value="main"/>
            <SupplementalProperty schemeIdUri="urn:x" value="y"/>
            <Representation id="a1" bandwidth="64000">
                <AudioChannelConfiguration schemeIdUri="urn:mpeg:dash:23003:3:audio_channel_configuration:2011" value="2"/>
            </Representation>
        </AdaptationSet></Period></MPD>"#;
        let mpd = parse_mpd(xml.as_bytes()).unwrap();
        let set = &mpd.periods[0].adaptation_sets[0];
        assert_eq!(set.role.as_ref().unwrap().value.as_deref(), Some("main"));
        assert_eq!(
            set.supplemental_property
                .as_ref()
                .unwrap()
                .scheme_id_uri
                .as_deref(),
            Some("urn:x")
        );
        assert_eq!(
            set.representations[0]
                .audio_channel_configuration
                .as_ref()
                .unwrap()
                .value
                .as_deref(),
            Some("2")
        );
    }

    #[test]
    fn missing_profiles_is_an_error() {
        let err = parse_mpd(br#"<MPD type="static"/>"#).unwrap_err();
        match err {
            ParseError::MissingAttribute { element, attribute } => {
                assert_eq!(element, "MPD");
                assert_eq!(attribute, "profiles");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_union_attribute_names_the_attribute() {
        let xml = r#"<MPD profiles="p"><Period><AdaptationSet segmentAlignment="maybe"/></Period></MPD>"#;
        let err = parse_mpd(xml.as_bytes()).unwrap_err();
        match err {
            ParseError::InvalidAttribute {
                element,
                attribute,
                value,
            } => {
                assert_eq!(element, "AdaptationSet");
                assert_eq!(attribute, "segmentAlignment");
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_bandwidth_is_an_error() {
        let xml = r#"<MPD profiles="p"><Period><AdaptationSet>
            <Representation id="1" bandwidth="fast"/>
        </AdaptationSet></Period></MPD>"#;
        assert!(matches!(
            parse_mpd(xml.as_bytes()),
            Err(ParseError::InvalidAttribute {
                attribute: "bandwidth",
                ..
            })
        ));
    }

    #[test]
    fn timeline_entry_without_duration_is_an_error() {
        let xml = r#"<MPD profiles="p"><Period><AdaptationSet>
            <Representation id="1"><SegmentTemplate timescale="90000">
                <SegmentTimeline><S t="0"/></SegmentTimeline>
            </SegmentTemplate></Representation>
        </AdaptationSet></Period></MPD>"#;
        assert!(matches!(
            parse_mpd(xml.as_bytes()),
            Err(ParseError::MissingAttribute {
                element: "S",
                attribute: "d",
            })
        ));
    }

    #[test]
    fn malformed_markup_is_an_error() {
        assert!(matches!(
            parse_mpd(b"<MPD profiles=\"p\"><Period></MPD>"),
            Err(ParseError::Xml(_))
        ));
    }

    #[test]
    fn missing_root_is_an_error() {
        assert!(matches!(
            parse_mpd(b"<NotAnMpd/>"),
            Err(ParseError::MissingElement { element: "MPD" })
        ));
    }
}
