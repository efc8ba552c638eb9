use crate::domain::{Speaker, TranscriptLine};

/// Reassembles one ordered, speaker-tagged transcript from the three
/// extraction passes of a scan.
///
/// Every non-blank line of the full extraction is classified by exact
/// trimmed-text membership: the incoming sequence is consulted first, then
/// the outgoing one, and a line found in neither is tagged unknown.
/// Whitespace-only lines produce no transcript entry at all. Classification
/// is a set-membership heuristic, not an alignment — a line whose text
/// appears in both masked extractions is always tagged incoming, and
/// repeated identical lines all receive the tag of the first match. Both
/// biases are kept deliberately so identical input always yields an
/// identical transcript.
pub fn merge_transcript(
    all: &[String],
    incoming: &[String],
    outgoing: &[String],
) -> Vec<TranscriptLine> {
    let mut transcript = Vec::with_capacity(all.len());

    for line in all {
        let needle = line.trim();
        if needle.is_empty() {
            continue;
        }

        let speaker = if contains_trimmed(incoming, needle) {
            Speaker::Incoming
        } else if contains_trimmed(outgoing, needle) {
            Speaker::Outgoing
        } else {
            Speaker::Unknown
        };

        transcript.push(TranscriptLine::new(line.clone(), speaker));
    }

    transcript
}

fn contains_trimmed(candidates: &[String], needle: &str) -> bool {
    candidates.iter().any(|c| c.trim() == needle)
}
