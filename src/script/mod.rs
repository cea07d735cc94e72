pub(crate) mod command;
pub(crate) mod dsl;
pub(crate) mod symbols;

use crate::foundation::error::{LoomError, LoomResult};
use command::Command;
use symbols::SymbolTable;

/// Parsed scene script: ordered commands plus the symbol table produced alongside them.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Script {
    /// Commands in program order.
    pub commands: Vec<Command>,
    /// Named materials and knob declarations.
    #[serde(default)]
    pub symbols: SymbolTable,
}

impl Script {
    /// Parse a script from its JSON representation.
    pub fn from_json_str(s: &str) -> LoomResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Check static invariants that do not depend on the frame being rendered.
    ///
    /// Every material override must name a `constants` symbol, except `default_material`, which
    /// the orchestrator supplies when the script leaves it undefined.
    pub fn validate(&self, default_material: &str) -> LoomResult<()> {
        for (idx, cmd) in self.commands.iter().enumerate() {
            let Some(key) = cmd.material_override() else {
                continue;
            };
            if key == default_material {
                continue;
            }
            if self.symbols.material(key).is_none() {
                return Err(LoomError::validation(format!(
                    "command #{idx} ({}) references unknown material '{key}'",
                    cmd.op_name()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/script.rs"]
mod tests;
