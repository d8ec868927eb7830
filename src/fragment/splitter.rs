//! Paragraph/sentence/clause cascade for sizing text to TTS requests.

/// Split text into speech-friendly fragments of at most `max_chars` characters.
///
/// Paragraphs (newline-delimited) are kept whole when they fit. Longer
/// paragraphs are cut at sentence boundaries (`.`), and sentences that are
/// still too long are cut at commas. Every emitted fragment is trimmed and
/// non-empty; sentence- and clause-level cuts get a literal `.` appended so
/// the synthesizer sees complete utterances.
///
/// `max_chars` is a soft bound: a single comma-free clause longer than the
/// limit is passed through oversized rather than cut mid-word.
///
/// # Arguments
/// * `text` - Input text, possibly multi-paragraph
/// * `max_chars` - Positive upper bound on fragment length, in chars
///
/// # Returns
/// Fragments in source order; empty input produces an empty vector.
pub fn split(text: &str, max_chars: usize) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current = String::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }

        // Short paragraphs pass through unchanged.
        if char_len(paragraph) <= max_chars {
            fragments.push(paragraph.to_string());
            continue;
        }

        // Collapse ". " so splitting on '.' leaves no stray spaces behind.
        let normalized = paragraph.replace(". ", ".");

        for piece in normalized.split('.') {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            let sentence = format!("{piece}.");

            if char_len(&sentence) > max_chars {
                // Too long on its own: flush whatever is pending, then cut
                // the sentence at commas.
                flush(&mut fragments, &mut current);
                split_clauses(piece, max_chars, &mut fragments);
            } else if !current.is_empty() && char_len(&current) + 1 + char_len(&sentence) > max_chars {
                // Appending would overflow: emit the buffer, restart with
                // this sentence.
                fragments.push(std::mem::replace(&mut current, sentence));
            } else if current.is_empty() {
                current = sentence;
            } else {
                current.push(' ');
                current.push_str(&sentence);
            }
        }

        // Fragments never span paragraph boundaries.
        flush(&mut fragments, &mut current);
    }

    flush(&mut fragments, &mut current);
    fragments
}

/// Cut an oversized sentence body (terminator already stripped) at commas,
/// packing clauses back together up to `max_chars` per fragment.
fn split_clauses(sentence: &str, max_chars: usize, fragments: &mut Vec<String>) {
    let mut buffer = String::new();

    for clause in sentence.split(',') {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }

        if buffer.is_empty() {
            buffer = clause.to_string();
        } else if char_len(&buffer) + 2 + char_len(clause) <= max_chars {
            buffer.push_str(", ");
            buffer.push_str(clause);
        } else {
            fragments.push(format!("{buffer}."));
            buffer = clause.to_string();
        }
    }

    if !buffer.is_empty() {
        fragments.push(format!("{buffer}."));
    }
}

/// Emit the pending buffer as a fragment, if it holds anything.
fn flush(fragments: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        fragments.push(trimmed.to_string());
    }
    current.clear();
}

/// Fragment lengths are measured in chars, not bytes.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strip the characters the splitter is allowed to add or drop
    /// (terminators, commas, whitespace), leaving the spoken content.
    fn content(s: &str) -> String {
        s.chars().filter(|c| !matches!(c, '.' | ',') && !c.is_whitespace()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split("", 250), Vec::<String>::new());
        assert_eq!(split("\n\n  \n", 250), Vec::<String>::new());
    }

    #[test]
    fn test_short_line_passes_through() {
        assert_eq!(split("Short line.", 250), vec!["Short line."]);
    }

    #[test]
    fn test_short_paragraphs_map_one_to_one() {
        let text = "First paragraph here.\n\n  Second one, with a comma.  \nThird";
        let fragments = split(text, 250);
        assert_eq!(fragments, vec!["First paragraph here.", "Second one, with a comma.", "Third"]);
    }

    #[test]
    fn test_long_paragraph_splits_at_sentences() {
        // Six ~100-char sentences; with max_chars=250 each fragment packs
        // at most two of them.
        let sentence = "This sentence is stretched out with filler words so that it lands at roughly one hundred chars long.";
        assert_eq!(sentence.len(), 100);
        let paragraph = vec![sentence; 6].join(" ");
        assert!(paragraph.len() > 600);

        let fragments = split(&paragraph, 250);
        assert!(fragments.len() >= 3, "expected >=3 fragments, got {}", fragments.len());
        for f in &fragments {
            assert!(f.chars().count() <= 250, "fragment too long: {} chars", f.chars().count());
            assert!(!f.trim().is_empty());
        }
    }

    #[test]
    fn test_oversized_sentence_splits_at_commas() {
        let clause = "a clause of moderate length that keeps going for a while";
        let paragraph = format!("{}.", vec![clause; 6].join(", "));
        assert!(paragraph.len() > 250);

        let fragments = split(&paragraph, 250);
        assert!(fragments.len() > 1);
        for f in &fragments {
            assert!(f.ends_with('.'), "clause fragment missing terminator: {f:?}");
            assert!(f.chars().count() <= 250, "fragment too long: {} chars", f.chars().count());
        }
    }

    #[test]
    fn test_comma_free_clause_passes_through_oversized() {
        // No sentence or clause boundaries to cut at: the fragment is
        // emitted oversized rather than cut mid-word.
        let paragraph = "word ".repeat(60);
        assert!(paragraph.len() > 250);

        let fragments = split(&paragraph, 250);
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].chars().count() > 250);
        assert!(fragments[0].ends_with('.'));
    }

    #[test]
    fn test_buffer_flushes_before_oversized_sentence() {
        let short = "A short opener here.";
        let long = format!("{},{}", "x".repeat(150), "y".repeat(150));
        let paragraph = format!("{short} {long}.");

        let fragments = split(&paragraph, 250);
        // The pending short sentence is emitted before the comma cuts.
        assert_eq!(fragments[0], "A short opener here.");
        assert!(fragments.len() >= 3);
    }

    #[test]
    fn test_content_preserved_in_order() {
        let text = "One two three. Four five, six seven. Eight nine ten eleven twelve.\nSecond paragraph goes here, also with a comma. And a final sentence to push the first paragraph over the boundary we picked for this test.";
        let fragments = split(text, 40);

        let original: String = text.lines().map(content).collect();
        let rebuilt: String = fragments.iter().map(|f| content(f)).collect();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_fragments_never_empty() {
        let text = "... , , ...\nReal text. More real text, with clauses galore, over and over, again and again, until the paragraph finally crosses the limit we set.";
        for f in split(text, 60) {
            assert!(!f.trim().is_empty());
        }
    }

    #[test]
    fn test_resplit_is_identity_for_short_fragments() {
        let fragments = split("A tidy sentence that already fits.", 250);
        assert_eq!(fragments.len(), 1);
        let again = split(&fragments[0], 250);
        assert_eq!(again, fragments);
    }

    #[test]
    fn test_char_bound_not_byte_bound() {
        // Multibyte chars: 100 'é' (2 bytes each) fit in max_chars=100.
        let line = "é".repeat(100);
        let fragments = split(&line, 100);
        assert_eq!(fragments, vec![line]);
    }
}
