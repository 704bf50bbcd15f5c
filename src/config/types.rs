//! Configuration types for the audit engine.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The bucket every unrecognized nationality value maps into.
pub const OTHER_CATEGORY: &str = "Other";

/// The audit engine configuration.
///
/// Every field has a production default, so a partial (or absent) config
/// file only overrides what it names.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Ordered list of nationality labels that pass through unchanged;
    /// every other value (including missing) maps to [`OTHER_CATEGORY`].
    #[serde(default = "default_nationalities")]
    pub recognized_nationalities: Vec<String>,
    /// The literal prefix payroll contract names carry.
    #[serde(default = "default_payroll_prefix")]
    pub payroll_name_prefix: String,
    /// Exception-table values meaning "no minimum applies".
    #[serde(default = "default_waiver_sentinels")]
    pub waiver_sentinels: Vec<String>,
    /// Absolute tolerance for the old-price check, in the payment's
    /// currency unit.
    #[serde(default = "default_old_price_tolerance")]
    pub old_price_tolerance: Decimal,
}

fn default_nationalities() -> Vec<String> {
    vec!["Filipina".to_string(), "Ethiopian".to_string()]
}

fn default_payroll_prefix() -> String {
    "Contr-".to_string()
}

fn default_waiver_sentinels() -> Vec<String> {
    vec!["N/A".to_string(), "-".to_string()]
}

fn default_old_price_tolerance() -> Decimal {
    Decimal::new(5, 0)
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            recognized_nationalities: default_nationalities(),
            payroll_name_prefix: default_payroll_prefix(),
            waiver_sentinels: default_waiver_sentinels(),
            old_price_tolerance: default_old_price_tolerance(),
        }
    }
}

impl AuditConfig {
    /// Maps a raw nationality value into its category.
    ///
    /// Recognized labels pass through unchanged (matched exactly after
    /// trimming); everything else, including the empty string, becomes
    /// [`OTHER_CATEGORY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_audit::config::AuditConfig;
    ///
    /// let config = AuditConfig::default();
    /// assert_eq!(config.nationality_category("Filipina"), "Filipina");
    /// assert_eq!(config.nationality_category("  Ethiopian "), "Ethiopian");
    /// assert_eq!(config.nationality_category("Kenyan"), "Other");
    /// assert_eq!(config.nationality_category(""), "Other");
    /// ```
    pub fn nationality_category(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        self.recognized_nationalities
            .iter()
            .find(|label| label.as_str() == trimmed)
            .cloned()
            .unwrap_or_else(|| OTHER_CATEGORY.to_string())
    }
}
