/// Metals offered by the metal selectors.
///
/// Purity grades are backend data; the metal catalogue itself is fixed.
pub const METALS: &[&str] = &["Gold", "Silver", "Platinum", "Palladium", "Copper"];
