/// True for text that is exactly one ASCII punctuation character.
///
/// Such spans are never looked up or reported.
pub fn is_skippable(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_punctuation(),
        _ => false,
    }
}
