//! Leather and business catalogs
//!
//! Static shop data: the leather colors offered and the business block
//! printed on order paperwork. Color lookups return `Option`; a renderer
//! that hits a miss must abort rather than substitute a default, since a
//! silently swapped color produces paperwork for the wrong belt.

/// One leather offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeatherColor {
    /// Stable catalog id, stored in [`crate::BeltDesign::color_id`].
    pub id: &'static str,
    pub name: &'static str,
    /// Base display color, `#rrggbb`.
    pub hex: &'static str,
    /// Shaded display color for gradients, `#rrggbb`.
    pub dark_hex: &'static str,
}

/// Leather colors currently offered.
pub const LEATHER_COLORS: [LeatherColor; 3] = [
    LeatherColor {
        id: "black-saddle",
        name: "Black Saddle",
        hex: "#1a1a1a",
        dark_hex: "#000000",
    },
    LeatherColor {
        id: "light-brown",
        name: "Light Brown",
        hex: "#B5835A",
        dark_hex: "#96643C",
    },
    LeatherColor {
        id: "dark-brown",
        name: "Dark Brown",
        hex: "#4A2C2A",
        dark_hex: "#2E1A18",
    },
];

/// Look up a leather color by catalog id.
pub fn leather_color(id: &str) -> Option<&'static LeatherColor> {
    LEATHER_COLORS.iter().find(|c| c.id == id)
}

/// Shop identity printed on order paperwork.
#[derive(Debug, Clone, Copy)]
pub struct BusinessInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub address: &'static str,
    pub lead_time: &'static str,
    pub payment_terms: &'static str,
}

pub const BUSINESS: BusinessInfo = BusinessInfo {
    name: "Deep Cove Leather Workshop",
    tagline: "Handcrafted Custom Leather Goods",
    phone: "(555) 123-4567",
    email: "orders@deepcoveleather.com",
    website: "www.deepcoveleather.com",
    address: "123 Main Street, Your Town, ST 12345",
    lead_time: "2-3 weeks",
    payment_terms: "50% deposit required. Balance due upon completion.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup() {
        let color = leather_color("light-brown").unwrap();
        assert_eq!(color.name, "Light Brown");
        assert_eq!(color.hex, "#B5835A");
        assert!(leather_color("neon-green").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in LEATHER_COLORS.iter().enumerate() {
            for b in &LEATHER_COLORS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
