
/// Sentence segmentation capability consumed by the chunker.
///
/// Implementations must be deterministic: identical input text yields the
/// identical sentence sequence, in source order.
pub trait SentenceSegmenter: Send + Sync {
    /// Split text into an ordered sequence of sentences.
    ///
    /// Empty or whitespace-only input yields an empty sequence.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Punctuation-driven sentence splitter.
///
/// Breaks after `.`, `!` or `?` when followed by whitespace, with a guard
/// for common abbreviations so "Dr. Smith" stays in one sentence. This is a
/// heuristic stand-in for a model-backed segmenter; anything implementing
/// [`SentenceSegmenter`] can replace it.
pub struct RuleSegmenter;

/// Abbreviations that end with a period without ending a sentence
const ABBREVIATIONS: &[&str] = &[
    "Dr", "Mr", "Mrs", "Ms", "Prof", "Sr", "Jr", "St", "vs", "etc", "e.g", "i.e", "Inc", "Ltd",
    "Co", "No", "approx",
];

impl RuleSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Whether the text ending at `boundary` (exclusive) ends in a known
    /// abbreviation rather than a sentence terminator.
    fn ends_with_abbreviation(text: &str) -> bool {
        let trimmed = text.trim_end_matches('.');
        let last_word = trimmed
            .rsplit(|c: char| c.is_whitespace())
            .next()
            .unwrap_or("");
        ABBREVIATIONS.iter().any(|abbr| *abbr == last_word)
    }
}

impl Default for RuleSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);

            if matches!(c, '.' | '!' | '?') {
                let at_break = chars.peek().map_or(true, |next| next.is_whitespace());
                if at_break && !(c == '.' && Self::ends_with_abbreviation(&current)) {
                    let sentence = current.trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                    current.clear();
                }
            }
        }

        // Trailing text without a terminator still counts as a sentence
        let rest = current.trim();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }

        sentences
    }
}
