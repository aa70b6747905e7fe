use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing category of a session. Each category has its own log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Billable,    // "Declarabel"
    NonBillable, // "Ondeclarabel"
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Billable, Category::NonBillable];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Billable => "billable",
            Category::NonBillable => "non-billable",
        }
    }

    /// Human label, as shown next to the start/stop control.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Billable => "Declarabel",
            Category::NonBillable => "Ondeclarabel",
        }
    }

    /// Convert input code from CLI (any case, short or long form)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "billable" | "b" | "declarabel" => Some(Category::Billable),
            "non-billable" | "nonbillable" | "nb" | "n" | "ondeclarabel" => {
                Some(Category::NonBillable)
            }
            _ => None,
        }
    }

    pub fn default_log_file(&self) -> &'static str {
        match self {
            Category::Billable => "work_log.csv",
            Category::NonBillable => "ondeclarabel_log.csv",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
