//! Interaction table between elements
//!
//! An interaction is read from the attacker's point of view: the element on
//! the left (or above) is the attacker, its right (or lower) neighbor is the
//! defender. The table is asymmetric, so `(Fire, Water)` and `(Water, Fire)`
//! carry opposite signs.

use crate::board::Element;

/// Score contribution for each listed `(attacker, neighbor)` pair.
/// Pairs that are not listed contribute nothing.
pub static INTERACTIONS: [(Element, Element, i32); 8] = [
    (Element::Fire, Element::Water, -1),
    (Element::Water, Element::Fire, 1),
    (Element::Water, Element::Earth, -1),
    (Element::Earth, Element::Water, 1),
    (Element::Earth, Element::Air, -1),
    (Element::Air, Element::Earth, 1),
    (Element::Air, Element::Fire, -1),
    (Element::Fire, Element::Air, 1),
];

/// Look up the score of `attacker` sitting next to `neighbor`.
#[inline]
#[must_use]
pub fn interaction(attacker: Element, neighbor: Element) -> i32 {
    INTERACTIONS
        .iter()
        .find(|&&(a, n, _)| a == attacker && n == neighbor)
        .map_or(0, |&(_, _, score)| score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_pairs() {
        assert_eq!(interaction(Element::Fire, Element::Water), -1);
        assert_eq!(interaction(Element::Water, Element::Fire), 1);
        assert_eq!(interaction(Element::Water, Element::Earth), -1);
        assert_eq!(interaction(Element::Earth, Element::Water), 1);
        assert_eq!(interaction(Element::Earth, Element::Air), -1);
        assert_eq!(interaction(Element::Air, Element::Earth), 1);
        assert_eq!(interaction(Element::Air, Element::Fire), -1);
        assert_eq!(interaction(Element::Fire, Element::Air), 1);
    }

    #[test]
    fn test_unlisted_pairs_are_neutral() {
        for e in Element::ALL {
            assert_eq!(interaction(e, e), 0, "{e} next to itself");
        }
        assert_eq!(interaction(Element::Fire, Element::Earth), 0);
        assert_eq!(interaction(Element::Earth, Element::Fire), 0);
        assert_eq!(interaction(Element::Water, Element::Air), 0);
        assert_eq!(interaction(Element::Air, Element::Water), 0);
    }

    #[test]
    fn test_table_is_antisymmetric() {
        for &(a, n, score) in &INTERACTIONS {
            assert_eq!(interaction(n, a), -score);
        }
    }
}
