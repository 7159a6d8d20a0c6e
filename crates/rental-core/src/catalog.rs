//! # Tool Catalog
//!
//! The fixed set of tools the counter rents out.
//!
//! | Code | Type       | Brand  |
//! |------|------------|--------|
//! | LADW | Ladder     | Werner |
//! | CHNS | Chainsaw   | Stihl  |
//! | JAKR | Jackhammer | Ridgid |
//! | JAKD | Jackhammer | Dewalt |
//!
//! The table is a read-only static, so lookups are side-effect free and
//! safe from any thread.

use crate::types::{Tool, ToolBrand, ToolType};
use crate::TOOL_CODE_LEN;

struct CatalogEntry {
    code: &'static str,
    tool_type: ToolType,
    brand: ToolBrand,
}

impl CatalogEntry {
    fn to_tool(&self) -> Tool {
        Tool::new(self.tool_type, self.brand, self.code)
    }
}

static CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        code: "LADW",
        tool_type: ToolType::Ladder,
        brand: ToolBrand::Werner,
    },
    CatalogEntry {
        code: "CHNS",
        tool_type: ToolType::Chainsaw,
        brand: ToolBrand::Stihl,
    },
    CatalogEntry {
        code: "JAKR",
        tool_type: ToolType::Jackhammer,
        brand: ToolBrand::Ridgid,
    },
    CatalogEntry {
        code: "JAKD",
        tool_type: ToolType::Jackhammer,
        brand: ToolBrand::Dewalt,
    },
];

/// Normalizes a raw code: trimmed, upper-cased, exactly four ASCII letters.
///
/// Returns `None` when the input cannot be a tool code at all.
pub(crate) fn normalize_code(code: &str) -> Option<String> {
    let code = code.trim();

    if code.len() != TOOL_CODE_LEN || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some(code.to_ascii_uppercase())
}

/// Finds the tool for a code, case-insensitively.
///
/// ## Example
/// ```rust
/// use rental_core::catalog;
/// use rental_core::types::ToolType;
///
/// let tool = catalog::lookup("jakd").unwrap();
/// assert_eq!(tool.code(), "JAKD");
/// assert_eq!(tool.tool_type(), ToolType::Jackhammer);
///
/// assert!(catalog::lookup("JAKW").is_none());
/// ```
pub fn lookup(code: &str) -> Option<Tool> {
    let code = normalize_code(code)?;

    CATALOG
        .iter()
        .find(|entry| entry.code == code)
        .map(CatalogEntry::to_tool)
}

/// Every tool in the catalog, in display order.
pub fn all() -> impl Iterator<Item = Tool> {
    CATALOG.iter().map(CatalogEntry::to_tool)
}

// =============================================================================
// Unit Tests
// =============================================================================
