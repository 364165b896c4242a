//! Antagonist pairs keyed by common name
//!
//! Pairs are symmetric: (bean, onion) excludes onion next to beans and beans
//! next to onions. Keys are matched with `utils::name_matches`, so "Bush Bean"
//! counts as a bean.

use crate::types::Crop;
use crate::utils::name_matches;

pub static ANTAGONIST_PAIRS: &[(&str, &str)] = &[
    ("bean", "onion"),
    ("bean", "garlic"),
    ("bean", "leek"),
    ("bean", "shallot"),
    ("bean", "chive"),
    ("pea", "onion"),
    ("pea", "garlic"),
    ("tomato", "potato"),
    ("tomato", "fennel"),
    ("tomato", "corn"),
    ("cabbage", "strawberry"),
    ("cabbage", "tomato"),
    ("carrot", "dill"),
    ("potato", "squash"),
    ("potato", "cucumber"),
    ("cucumber", "sage"),
    ("asparagus", "onion"),
    ("fennel", "coriander"),
];

/// True when the two crops form a known antagonist pair in either order.
pub fn are_antagonists(a: &Crop, b: &Crop) -> bool {
    let (a_name, b_name) = (a.display_name(), b.display_name());
    ANTAGONIST_PAIRS.iter().any(|(x, y)| {
        (name_matches(a_name, x) && name_matches(b_name, y))
            || (name_matches(a_name, y) && name_matches(b_name, x))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(common: &str) -> Crop {
        Crop {
            id: common.to_lowercase(),
            name: common.to_string(),
            common_name: Some(common.to_string()),
            frequency_hz: 528.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_pairs_are_symmetric() {
        assert!(are_antagonists(&crop("Bean"), &crop("Onion")));
        assert!(are_antagonists(&crop("Onion"), &crop("Bean")));
        assert!(are_antagonists(&crop("Bush Bean"), &crop("Red Onion")));
    }

    #[test]
    fn test_unrelated_crops_are_not_antagonists() {
        assert!(!are_antagonists(&crop("Bean"), &crop("Carrot")));
        assert!(!are_antagonists(&crop("Lettuce"), &crop("Onion")));
    }

    #[test]
    fn test_falls_back_to_name_without_common_name() {
        let mut bean = crop("Bean");
        bean.common_name = None;
        assert!(are_antagonists(&bean, &crop("Garlic")));
    }
}
