use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::error::{Error, Result};
use crate::io::roster::RosterRecord;
use crate::types::{SessionIdentifierSource, SessionStatus};

pub const RESULT_NAMESPACE: &str = "http://www.imsglobal.org/xsd/imsqti_result_v3p0";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const RESULT_SCHEMA_LOCATION: &str = "http://www.imsglobal.org/xsd/imsqti_result_v3p0 \
     https://purl.imsglobal.org/spec/qti/v3p0/schema/xsd/imsqti_result_v3p0.xsd";

/// Status marker carried by every seeded `itemResult`
pub const SEED_SESSION_STATUS: SessionStatus = SessionStatus::Initial;

/// Values shared by every document of a run
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub test_result_id: &'a str,
    /// Omitted from `testResult`/`itemResult` entirely when `None`
    pub datestamp: Option<&'a str>,
    pub material_title: Option<&'a str>,
}

/// Render one candidate's seed `assessmentResult` document.
///
/// Attribute values are XML-escaped (`& < > " '`) and otherwise written
/// verbatim. Item results follow `item_identifiers` order with a 1-based
/// `sequenceIndex`. Output is deterministic for identical inputs.
pub fn render_assessment_result(
    record: &RosterRecord,
    ctx: &RenderContext<'_>,
    item_identifiers: &[String],
) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("assessmentResult");
    root.push_attribute(("xmlns", RESULT_NAMESPACE));
    root.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    root.push_attribute(("xsi:schemaLocation", RESULT_SCHEMA_LOCATION));
    writer.write_event(Event::Start(root))?;

    let mut context = BytesStart::new("context");
    context.push_attribute(("sourcedId", record.candidate_number.as_str()));
    writer.write_event(Event::Start(context))?;
    for (source, identifier) in session_identifiers(record, ctx) {
        let mut entry = BytesStart::new("sessionIdentifier");
        entry.push_attribute(("sourceID", source.as_str()));
        entry.push_attribute(("identifier", identifier));
        writer.write_event(Event::Empty(entry))?;
    }
    writer.write_event(Event::End(BytesEnd::new("context")))?;

    let mut test_result = BytesStart::new("testResult");
    test_result.push_attribute(("identifier", ctx.test_result_id));
    if let Some(datestamp) = ctx.datestamp {
        test_result.push_attribute(("datestamp", datestamp));
    }
    writer.write_event(Event::Empty(test_result))?;

    for (index, identifier) in item_identifiers.iter().enumerate() {
        let sequence_index = (index + 1).to_string();
        let mut item = BytesStart::new("itemResult");
        item.push_attribute(("identifier", identifier.as_str()));
        item.push_attribute(("sequenceIndex", sequence_index.as_str()));
        if let Some(datestamp) = ctx.datestamp {
            item.push_attribute(("datestamp", datestamp));
        }
        item.push_attribute(("sessionStatus", SEED_SESSION_STATUS.as_str()));
        writer.write_event(Event::Empty(item))?;
    }

    writer.write_event(Event::End(BytesEnd::new("assessmentResult")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|e| Error::Processing(e.to_string()))
}

/// Session identifiers in document order: name, id, account, material title
fn session_identifiers<'a>(
    record: &'a RosterRecord,
    ctx: &RenderContext<'a>,
) -> Vec<(SessionIdentifierSource, &'a str)> {
    let mut entries = vec![(
        SessionIdentifierSource::CandidateName,
        record.candidate_name.as_str(),
    )];
    if let Some(id) = &record.candidate_id {
        entries.push((SessionIdentifierSource::CandidateId, id.as_str()));
    }
    if let Some(account) = &record.candidate_account {
        entries.push((SessionIdentifierSource::CandidateAccount, account.as_str()));
    }
    if let Some(title) = ctx.material_title {
        entries.push((SessionIdentifierSource::MaterialTitle, title));
    }
    entries
}
