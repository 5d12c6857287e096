//! Cleanup of model output at the adapter boundary: markdown fence
//! stripping and lenient parsing of the auto-assessment JSON envelope.
//! Nothing outside the advisor module sees fenced or half-typed JSON.

use serde::Deserialize;
use serde_json::Value;

use super::{AdvisorError, ProposedAssessment};

/// Strips one wrapping markdown code fence if present. Replies requested
/// as "JSON only" still arrive fenced often enough to handle here.
pub(super) fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) up to the first newline.
    let body = match rest.find('\n') {
        Some(index) => &rest[index + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[derive(Debug, Deserialize)]
struct AssessmentEnvelope {
    assessments: Vec<AssessmentEntry>,
}

#[derive(Debug, Deserialize)]
struct AssessmentEntry {
    id: String,
    score: Value,
    #[serde(default)]
    justification: String,
}

/// Parses the `{"assessments":[...]}` envelope. Scores may arrive as JSON
/// numbers or numeric strings; entries whose score cannot be read as a
/// number are dropped with a warning. An unreadable envelope fails the
/// whole reply.
pub(super) fn parse_assessments(raw: &str) -> Result<Vec<ProposedAssessment>, AdvisorError> {
    let cleaned = strip_code_fences(raw);
    let envelope: AssessmentEnvelope = serde_json::from_str(cleaned)
        .map_err(|err| AdvisorError::MalformedReply(err.to_string()))?;

    let mut proposals = Vec::with_capacity(envelope.assessments.len());
    for entry in envelope.assessments {
        let Some(score) = coerce_score(&entry.score) else {
            tracing::warn!(id = %entry.id, "discarding auto-assessment entry with non-numeric score");
            continue;
        };
        proposals.push(ProposedAssessment {
            id: entry.id,
            score,
            justification: entry.justification,
        });
    }
    Ok(proposals)
}

fn coerce_score(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_envelope() {
        let raw = r#"{"assessments":[{"id":"SOV-1","score":3,"justification":"EU board."}]}"#;
        let proposals = parse_assessments(raw).expect("parses");
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].id, "SOV-1");
        assert_eq!(proposals[0].score, 3.0);
        assert_eq!(proposals[0].justification, "EU board.");
    }

    #[test]
    fn strips_fences_before_parsing() {
        let raw = "```json\n{\"assessments\":[{\"id\":\"SOV-2\",\"score\":2}]}\n```";
        let proposals = parse_assessments(raw).expect("parses");
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].id, "SOV-2");
        assert_eq!(proposals[0].justification, "");
    }

    #[test]
    fn strip_handles_missing_info_string() {
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  ```{\"a\":1}```  "), "{\"a\":1}");
    }

    #[test]
    fn coerces_numeric_strings_and_fractions() {
        let raw = r#"{"assessments":[
            {"id":"SOV-1","score":"3","justification":"quoted"},
            {"id":"SOV-2","score":2.6,"justification":"fractional"}
        ]}"#;
        let proposals = parse_assessments(raw).expect("parses");
        assert_eq!(proposals[0].score, 3.0);
        assert_eq!(proposals[1].score, 2.6);
    }

    #[test]
    fn drops_entries_with_unreadable_scores() {
        let raw = r#"{"assessments":[
            {"id":"SOV-1","score":"high","justification":"vague"},
            {"id":"SOV-2","score":1,"justification":"kept"}
        ]}"#;
        let proposals = parse_assessments(raw).expect("parses");
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].id, "SOV-2");
    }

    #[test]
    fn unreadable_envelope_is_a_malformed_reply() {
        let err = parse_assessments("The solution looks quite sovereign to me.")
            .expect_err("must fail");
        match err {
            AdvisorError::MalformedReply(_) => {}
            other => panic!("expected MalformedReply, got {other:?}"),
        }
    }
}
