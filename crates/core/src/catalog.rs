//! Power Source Catalog
//!
//! A static table mapping spoken category phrases to a telemetry lookup key and
//! the sentence template used to speak the reading back. The table is built at
//! compile time and shared read-only by every request.

/// Placeholder substituted with the resolved reading in a response template.
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// How a catalog entry recognizes a spoken phrase. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// The phrase must equal the pattern.
    Exact(&'static str),
    /// The phrase must end with the pattern.
    Suffix(&'static str),
}

impl MatchRule {
    pub fn matches(&self, phrase: &str) -> bool {
        match self {
            MatchRule::Exact(pattern) => phrase == *pattern,
            MatchRule::Suffix(pattern) => phrase.ends_with(pattern),
        }
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Short label used in logs.
    pub category: &'static str,
    pub rule: MatchRule,
    /// Name of the telemetry record holding the reading.
    pub lookup_key: &'static str,
    /// Sentence spoken back, containing `VALUE_PLACEHOLDER` at most once.
    pub response_template: &'static str,
}

/// Entries tested in order; the first match wins.
///
/// Electricity production is the only suffix rule, so "blackstone electricity
/// production" and similar qualified phrases land on it while the steam and
/// water rows require the bare phrase. Keep that asymmetry.
pub static POWER_SOURCE_CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        category: "electricity demand",
        rule: MatchRule::Exact("electricity demand"),
        lookup_key: "System_ELE_HarvardPurchGenTotal_PowerReal_000_SUM",
        response_template: "Currently, {value} megawatts of electricity is being consumed within buildings, \
            supplied through the energy and facilities micro-grid.",
    },
    CatalogEntry {
        category: "electricity production",
        rule: MatchRule::Suffix("electricity production"),
        lookup_key: "BlackStnTurboGen",
        response_template: "Currently {value} mega-watts of electricity is being produced by the Blackstone \
            Steam Plant’s 5.7 mega-watt back-pressure turbine.",
    },
    CatalogEntry {
        category: "steam production",
        rule: MatchRule::Exact("steam production"),
        lookup_key: "PLANT.STMOUT.Plant",
        response_template: "Currently, {value} pound per hour of steam is being produced by the four boilers \
            within the Blackstone Steam Plant on Western Avenue.",
    },
    CatalogEntry {
        category: "water production",
        rule: MatchRule::Exact("water production"),
        lookup_key: "CombinedPlant.Tons.CUP",
        response_template: "Currently, {value} tons of chilled water is being produced by a 13,000 ton central \
            plant on Oxford Street and a 7,500 ton plant in the Northwest Building.",
    },
];

/// Selected when no catalog rule matches, including for an empty phrase.
pub static FALLBACK_ENTRY: CatalogEntry = CatalogEntry {
    category: "unrecognized",
    rule: MatchRule::Exact(""),
    lookup_key: "BlackStnTurboGen",
    response_template: "Sorry I didn't understand.",
};

/// Picks the catalog entry for a spoken phrase.
pub fn match_phrase(phrase: &str) -> &'static CatalogEntry {
    POWER_SOURCE_CATALOG
        .iter()
        .find(|entry| entry.rule.matches(phrase))
        .unwrap_or(&FALLBACK_ENTRY)
}
