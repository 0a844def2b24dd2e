/// Maps raw diarization speaker labels to display tags in first-seen
/// order: the first distinct label becomes `Speaker_A`, the second
/// `Speaker_B`, and so on.
///
/// Backed by an ordered association list so tag assignment depends
/// only on traversal order of the diarization output, never on hash
/// iteration order.
#[derive(Debug, Default)]
pub struct SpeakerTagRegistry {
    entries: Vec<(String, String)>,
}

impl SpeakerTagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the display tag for `raw`, assigning the next tag on
    /// first encounter.
    pub fn tag_for(&mut self, raw: &str) -> String {
        if let Some((_, tag)) = self.entries.iter().find(|(r, _)| r == raw) {
            return tag.clone();
        }
        let tag = display_tag(self.entries.len());
        self.entries.push((raw.to_string(), tag.clone()));
        tag
    }

    /// Number of distinct speakers seen so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `Speaker_A` through `Speaker_Z`, then `Speaker_AA`, `Speaker_AB`, …
/// in spreadsheet-column order.
fn display_tag(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    loop {
        letters.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.reverse();
    // Bytes are always ASCII uppercase letters.
    format!("Speaker_{}", String::from_utf8_lossy(&letters))
}
