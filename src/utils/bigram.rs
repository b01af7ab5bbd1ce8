/// Extract overlapping bi-grams from a string.
///
/// For an input of L logical characters this yields L-1 tokens, where token i
/// is the 2-character substring starting at character offset i. Inputs shorter
/// than 2 characters yield nothing. Windows are taken over `char` boundaries,
/// so multi-byte text is never split mid-character:
///
/// ```
/// use adix::utils::bigrams;
///
/// assert_eq!(bigrams("東京都"), vec!["東京", "京都"]);
/// assert!(bigrams("a").is_empty());
/// ```
pub fn bigrams(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return Vec::new();
    }

    chars.windows(2).map(|w| w.iter().collect()).collect()
}
