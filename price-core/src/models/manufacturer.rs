/// Manufacturers the form offers in its company selector.
///
/// The prediction service does not enforce this list; it only bounds what the
/// form lets a user pick.
pub const KNOWN_MANUFACTURERS: [&str; 10] = [
    "Hyundai",
    "Maruti",
    "Honda",
    "Toyota",
    "Ford",
    "Mahindra",
    "Tata",
    "Chevrolet",
    "Renault",
    "Nissan",
];

/// Returns the canonical spelling of `name` if it is a known manufacturer.
pub fn canonical_manufacturer(name: &str) -> Option<&'static str> {
    let name = name.trim();
    KNOWN_MANUFACTURERS
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_manufacturer_normalises_case() {
        assert_eq!(canonical_manufacturer("hyundai"), Some("Hyundai"));
        assert_eq!(canonical_manufacturer(" MARUTI "), Some("Maruti"));
    }

    #[test]
    fn canonical_manufacturer_rejects_unknown_and_empty() {
        assert_eq!(canonical_manufacturer("Tesla"), None);
        assert_eq!(canonical_manufacturer(""), None);
    }
}
