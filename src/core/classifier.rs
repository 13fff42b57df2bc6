//! Account classification
//!
//! Maps a raw account name, its accounting nature and (for assets and
//! liabilities) its age relative to the focal date to one bucket of the
//! fixed balance-sheet taxonomy.
//!
//! The taxonomy is ordered immutable data: per section an ordered slice of
//! rules, each a bucket name with its keyword list, ending in an
//! empty-keyword catch-all. Matching lower-cases the account name and
//! tests substring containment, first rule wins; a name that matches
//! nothing lands in the section's catch-all, so classification is total.
//!
//! Aging: a line is current when it is at most 365 days old, non-current
//! afterwards. Account names carrying a physical-asset keyword (vehicles,
//! buildings, machinery) are forced into non-current assets regardless of
//! age; fixed assets never report as current.

use crate::types::{Nature, Section};

/// Days within which an asset or liability line still counts as current
pub const CURRENT_PERIOD_DAYS: i64 = 365;

/// Account-name keywords that force an asset into the non-current section
const FIXED_ASSET_KEYWORDS: &[&str] = &["vehiculo", "vehículo", "edificio", "maquinaria"];

/// One bucket of a section's taxonomy
///
/// `exact` switches matching from substring containment to whole-string
/// equality; only the equity "Patrimonio" rule uses it, so that the
/// catch-all "Otro patrimonio" names don't get captured by the shorter
/// keyword.
struct BucketRule {
    name: &'static str,
    keywords: &'static [&'static str],
    exact: bool,
}

const CURRENT_ASSETS: &[BucketRule] = &[
    BucketRule {
        name: "Disponibilidades",
        keywords: &["caja", "banco"],
        exact: false,
    },
    BucketRule {
        name: "Inversiones CP",
        keywords: &["inversion", "inversión"],
        exact: false,
    },
    BucketRule {
        name: "Inventarios",
        keywords: &["inventario"],
        exact: false,
    },
    BucketRule {
        name: "Clientes",
        keywords: &["cliente"],
        exact: false,
    },
    BucketRule {
        name: "Documentos por cobrar",
        keywords: &["documentos por cobrar"],
        exact: false,
    },
    BucketRule {
        name: "Impuestos por liquidar",
        keywords: &[
            "isr por cobrar",
            "igss por cobrar",
            "iva por cobrar",
            "iusi por cobrar",
        ],
        exact: false,
    },
    BucketRule {
        name: "Otras cuentas",
        keywords: &[],
        exact: false,
    },
];

const NON_CURRENT_ASSETS: &[BucketRule] = &[
    BucketRule {
        name: "Vehiculos",
        keywords: &["vehiculo", "vehículo", "edificio", "maquinaria"],
        exact: false,
    },
    BucketRule {
        name: "Otras cuentas",
        keywords: &[],
        exact: false,
    },
];

const CURRENT_LIABILITIES: &[BucketRule] = &[
    BucketRule {
        name: "Préstamos bancarios",
        keywords: &["prestamos bancarios", "prestamo bancario"],
        exact: false,
    },
    BucketRule {
        name: "Proveedores",
        keywords: &["proveedor"],
        exact: false,
    },
    BucketRule {
        name: "Impuestos por pagar",
        keywords: &[
            "isr por pagar",
            "igss por pagar",
            "iva por pagar",
            "iusi por pagar",
        ],
        exact: false,
    },
    BucketRule {
        name: "Acreedores",
        keywords: &["acreedor"],
        exact: false,
    },
    BucketRule {
        name: "Otras cuentas por pagar",
        keywords: &[],
        exact: false,
    },
];

const NON_CURRENT_LIABILITIES: &[BucketRule] = &[
    BucketRule {
        name: "Documentos por pagar LP",
        keywords: &["documentos por pagar"],
        exact: false,
    },
    BucketRule {
        name: "Préstamos bancarios LP",
        keywords: &["prestamos bancarios", "prestamo bancario"],
        exact: false,
    },
    BucketRule {
        name: "Otras cuentas por pagar",
        keywords: &[],
        exact: false,
    },
];

const EQUITY: &[BucketRule] = &[
    BucketRule {
        name: "Capital en acciones",
        keywords: &["capital en acciones", "capital accionistas"],
        exact: false,
    },
    BucketRule {
        name: "Reserva Legal",
        keywords: &["reserva legal"],
        exact: false,
    },
    BucketRule {
        name: "Utilidades acumuladas",
        keywords: &["utilidades acumuladas", "utilidades de años anteriores"],
        exact: false,
    },
    BucketRule {
        name: "Patrimonio",
        keywords: &["patrimonio"],
        exact: true,
    },
    BucketRule {
        name: "Otro patrimonio",
        keywords: &[],
        exact: false,
    },
];

/// Result of classifying one qualifying line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub section: Section,
    pub bucket: &'static str,
}

/// The ordered bucket names of a section, catch-all last
///
/// Report builders iterate this to emit every bucket, zeros included.
pub fn bucket_names(section: Section) -> Vec<&'static str> {
    rules_for(section).iter().map(|rule| rule.name).collect()
}

/// Classify an account line into a balance-sheet section and bucket
///
/// `age_days` is `focal_date - entry_date` in whole days; it decides the
/// current/non-current split for assets and liabilities and is ignored for
/// equity. Returns `None` for natures that belong to the income statement.
///
/// Pure and deterministic: same inputs, same bucket, no side effects.
pub fn classify(account: &str, nature: Nature, age_days: i64) -> Option<Classification> {
    let name = account.to_lowercase();

    let section = match nature {
        Nature::Asset => {
            if FIXED_ASSET_KEYWORDS.iter().any(|k| name.contains(k)) {
                Section::NonCurrentAssets
            } else if age_days <= CURRENT_PERIOD_DAYS {
                Section::CurrentAssets
            } else {
                Section::NonCurrentAssets
            }
        }
        Nature::Liability => {
            if age_days <= CURRENT_PERIOD_DAYS {
                Section::CurrentLiabilities
            } else {
                Section::NonCurrentLiabilities
            }
        }
        Nature::Equity => Section::Equity,
        Nature::Income | Nature::Expense | Nature::Sales | Nature::CostOfSales => return None,
    };

    Some(Classification {
        section,
        bucket: match_bucket(&name, rules_for(section)),
    })
}

fn rules_for(section: Section) -> &'static [BucketRule] {
    match section {
        Section::CurrentAssets => CURRENT_ASSETS,
        Section::NonCurrentAssets => NON_CURRENT_ASSETS,
        Section::CurrentLiabilities => CURRENT_LIABILITIES,
        Section::NonCurrentLiabilities => NON_CURRENT_LIABILITIES,
        Section::Equity => EQUITY,
    }
}

/// First matching rule wins; an unmatched name takes the trailing catch-all
fn match_bucket(lowercase_name: &str, rules: &'static [BucketRule]) -> &'static str {
    for rule in rules {
        let hit = if rule.exact {
            rule.keywords.iter().any(|k| lowercase_name == *k)
        } else {
            rule.keywords.iter().any(|k| lowercase_name.contains(k))
        };
        if hit {
            return rule.name;
        }
    }
    // Every table ends in an empty-keyword catch-all.
    rules[rules.len() - 1].name
}
