use chatscan::application::services::merge_transcript;
use chatscan::domain::Speaker;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_every_line_in_incoming_when_merging_then_all_tagged_incoming() {
    let all = lines(&["Hey", "How are you", "Good, thanks"]);

    let transcript = merge_transcript(&all, &all, &[]);

    assert_eq!(transcript.len(), 3);
    for line in &transcript {
        assert_eq!(line.speaker, Speaker::Incoming);
    }
}

#[test]
fn given_every_line_in_outgoing_when_merging_then_all_tagged_outgoing() {
    let all = lines(&["Hey", "How are you", "Good, thanks"]);

    let transcript = merge_transcript(&all, &[], &all);

    assert_eq!(transcript.len(), 3);
    for line in &transcript {
        assert_eq!(line.speaker, Speaker::Outgoing);
    }
}

#[test]
fn given_blank_lines_when_merging_then_only_non_blank_lines_survive() {
    let all = lines(&["Hi", "  ", "Bye", "", "\t"]);

    let transcript = merge_transcript(&all, &[], &[]);

    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].text, "Hi");
    assert_eq!(transcript[1].text, "Bye");
}

#[test]
fn given_line_in_both_sequences_when_merging_then_incoming_wins() {
    let transcript = merge_transcript(&lines(&["X"]), &lines(&["X"]), &lines(&["X"]));

    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].speaker, Speaker::Incoming);
}

#[test]
fn given_line_in_neither_sequence_when_merging_then_tagged_unknown() {
    let transcript = merge_transcript(&lines(&["Z"]), &lines(&["A"]), &lines(&["B"]));

    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].speaker, Speaker::Unknown);
}

#[test]
fn given_shuffled_candidate_order_when_merging_then_transcript_follows_full_order() {
    let all = lines(&["one", "two", "three", "four"]);
    let incoming = lines(&["four", "one"]);
    let outgoing = lines(&["three", "two"]);

    let transcript = merge_transcript(&all, &incoming, &outgoing);

    let texts: Vec<&str> = transcript.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three", "four"]);
    assert_eq!(
        transcript.iter().map(|l| l.speaker).collect::<Vec<_>>(),
        vec![
            Speaker::Incoming,
            Speaker::Outgoing,
            Speaker::Outgoing,
            Speaker::Incoming,
        ]
    );
}

#[test]
fn given_padded_line_when_merging_then_original_text_kept_but_match_is_trimmed() {
    let all = lines(&["  Hey  "]);
    let incoming = lines(&["Hey\t"]);

    let transcript = merge_transcript(&all, &incoming, &[]);

    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].text, "  Hey  ");
    assert_eq!(transcript[0].speaker, Speaker::Incoming);
}

#[test]
fn given_conversation_extractions_when_merging_then_speakers_cross_reference() {
    let all = lines(&["Hey", "How are you", "Good, thanks"]);
    let incoming = lines(&["How are you"]);
    let outgoing = lines(&["Hey", "Good, thanks"]);

    let transcript = merge_transcript(&all, &incoming, &outgoing);

    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[0].text, "Hey");
    assert_eq!(transcript[0].speaker, Speaker::Outgoing);
    assert_eq!(transcript[1].text, "How are you");
    assert_eq!(transcript[1].speaker, Speaker::Incoming);
    assert_eq!(transcript[2].text, "Good, thanks");
    assert_eq!(transcript[2].speaker, Speaker::Outgoing);
}

#[test]
fn given_duplicate_text_lines_when_merging_then_each_gets_first_match_tag() {
    // Known limitation of membership classification: identical text always
    // resolves to the same speaker, even if the bubbles alternated.
    let all = lines(&["ok", "ok"]);
    let incoming = lines(&["ok"]);
    let outgoing = lines(&["ok"]);

    let transcript = merge_transcript(&all, &incoming, &outgoing);

    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].speaker, Speaker::Incoming);
    assert_eq!(transcript[1].speaker, Speaker::Incoming);
}
