//! Name handling for rotation and companion checks
//!
//! Rotation uses the genus token of `scientific_name` as a stand-in for the
//! botanical family. This is a heuristic (Capsicum and Solanum are both
//! Solanaceae but have different genus tokens), not a taxonomy lookup.

/// First token of a scientific name, lower-cased. "Solanum lycopersicum" -> "solanum"
pub fn genus_token(scientific_name: Option<&str>) -> Option<String> {
    scientific_name?
        .split_whitespace()
        .next()
        .map(|s| s.to_lowercase())
}

/// Case-insensitive whole-word match of `key` inside `name`, tolerating a plural "s".
///
/// "Red Onion", "Onions" and "onion" all match the key "Onion";
/// "Bunching Onion Sets" matches as well, "Scallion" does not.
pub fn name_matches(name: &str, key: &str) -> bool {
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return false;
    }
    let name = name.trim().to_lowercase();
    if name == key {
        return true;
    }

    let key_words: Vec<&str> = key.split_whitespace().collect();
    let name_words: Vec<&str> = name
        .split(|c: char| c.is_whitespace() || c == '-' || c == ',')
        .filter(|w| !w.is_empty())
        .collect();

    if key_words.len() > name_words.len() {
        return false;
    }

    name_words.windows(key_words.len()).any(|window| {
        window.iter().zip(&key_words).all(|(w, k)| {
            *w == *k || w.strip_suffix('s') == Some(*k) || w.strip_suffix("es") == Some(*k)
        })
    })
}
