use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Declares a closed enumeration with a fixed textual form used in CSV,
/// SQL and JSON alike.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every value of the domain, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok($name::$variant),)+
                    other => Err(Error::InvalidValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

text_enum! {
    /// Coarse financial risk bucket of a supplier.
    RiskTier ("financial_risk_tier") {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
}

text_enum! {
    /// Approval state of a supplier.
    ApprovalStatus ("approved_status") {
        Approved => "APPROVED",
        Pending => "PENDING",
        Suspended => "SUSPENDED",
    }
}

text_enum! {
    PartCategory ("category") {
        Electrical => "ELECTRICAL",
        Mechanical => "MECHANICAL",
        RawMaterial => "RAW_MATERIAL",
        Other => "OTHER",
    }
}

text_enum! {
    /// Lifecycle of a part; `NRND` is "not recommended for new designs".
    LifecycleStatus ("lifecycle_status") {
        New => "NEW",
        Active => "ACTIVE",
        Nrnd => "NRND",
        Eol => "EOL",
    }
}

text_enum! {
    QualityGrade ("quality_grade") {
        A => "A",
        B => "B",
        C => "C",
    }
}

text_enum! {
    /// Hazard classification. Non-hazardous parts carry no class at all.
    HazardClass ("hazard_class") {
        Flammable => "flammable",
        Toxic => "toxic",
        Corrosive => "corrosive",
    }
}
