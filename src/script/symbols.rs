use std::collections::BTreeMap;

use crate::foundation::core::DVec3;

/// Per-channel reflectance coefficients, each `[ambient, diffuse, specular]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Material {
    /// Red channel reflectance.
    pub red: [f64; 3],
    /// Green channel reflectance.
    pub green: [f64; 3],
    /// Blue channel reflectance.
    pub blue: [f64; 3],
}

impl Material {
    /// Neutral grey material used when a primitive carries no override.
    pub const NEUTRAL: Self = Self {
        red: [0.2, 0.5, 0.5],
        green: [0.2, 0.5, 0.5],
        blue: [0.2, 0.5, 0.5],
    };

    /// Ambient reflectance as an RGB vector.
    pub fn ambient(&self) -> DVec3 {
        DVec3::new(self.red[0], self.green[0], self.blue[0])
    }

    /// Diffuse reflectance as an RGB vector.
    pub fn diffuse(&self) -> DVec3 {
        DVec3::new(self.red[1], self.green[1], self.blue[1])
    }
}

/// Symbol-table entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Symbol {
    /// Named material (`constants` in scene scripts).
    Constants(Material),
    /// Declared knob with its resting value.
    Knob {
        /// Resting value.
        value: f64,
    },
}

/// Symbols produced by the script parser, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    entries: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a symbol.
    pub fn insert(&mut self, name: impl Into<String>, symbol: Symbol) {
        self.entries.insert(name.into(), symbol);
    }

    /// Look up a raw symbol.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.entries.get(name)
    }

    /// Look up a material by name. Non-material symbols resolve to `None`.
    pub fn material(&self, name: &str) -> Option<&Material> {
        match self.entries.get(name) {
            Some(Symbol::Constants(m)) => Some(m),
            _ => None,
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of this table with `name` bound to [`Material::NEUTRAL`] unless already defined.
    pub fn with_default_material(&self, name: &str) -> Self {
        let mut out = self.clone();
        out.entries
            .entry(name.to_string())
            .or_insert(Symbol::Constants(Material::NEUTRAL));
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/symbols.rs"]
mod tests;
