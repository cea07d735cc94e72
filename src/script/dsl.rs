use crate::{
    foundation::error::{LoomError, LoomResult},
    script::{
        Script,
        command::{Axis, Command, VarySpec},
        symbols::{Material, Symbol, SymbolTable},
    },
};

/// Builder for [`Script`](crate::Script), mostly useful for tests and programmatic scenes.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    commands: Vec<Command>,
    symbols: SymbolTable,
}

impl ScriptBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary command.
    pub fn command(mut self, cmd: Command) -> Self {
        self.commands.push(cmd);
        self
    }

    /// Register a named material under a unique key.
    pub fn material(mut self, name: impl Into<String>, material: Material) -> LoomResult<Self> {
        let name = name.into();
        if self.symbols.get(&name).is_some() {
            return Err(LoomError::validation(format!("duplicate symbol '{name}'")));
        }
        self.symbols.insert(name, Symbol::Constants(material));
        Ok(self)
    }

    /// Append `frames`.
    pub fn frames(self, count: u64) -> Self {
        self.command(Command::Frames { count })
    }

    /// Append `basename`.
    pub fn basename(self, name: impl Into<String>) -> Self {
        self.command(Command::Basename { name: name.into() })
    }

    /// Append `vary`.
    pub fn vary(
        self,
        knob: impl Into<String>,
        start_frame: i64,
        end_frame: i64,
        start_value: f64,
        end_value: f64,
    ) -> Self {
        self.command(Command::Vary(VarySpec {
            knob: knob.into(),
            start_frame,
            end_frame,
            start_value,
            end_value,
        }))
    }

    /// Append `push`.
    pub fn push(self) -> Self {
        self.command(Command::Push)
    }

    /// Append `pop`.
    pub fn pop(self) -> Self {
        self.command(Command::Pop)
    }

    /// Append `move`, optionally knob-modulated.
    pub fn translate(self, offset: [f64; 3], knob: Option<&str>) -> Self {
        self.command(Command::Move {
            offset,
            knob: knob.map(str::to_string),
        })
    }

    /// Append `scale`, optionally knob-modulated.
    pub fn scale(self, factors: [f64; 3], knob: Option<&str>) -> Self {
        self.command(Command::Scale {
            factors,
            knob: knob.map(str::to_string),
        })
    }

    /// Append `rotate`, optionally knob-modulated.
    pub fn rotate(self, axis: Axis, degrees: f64, knob: Option<&str>) -> Self {
        self.command(Command::Rotate {
            axis,
            degrees,
            knob: knob.map(str::to_string),
        })
    }

    /// Append `box` with an optional material override.
    pub fn cuboid(self, corner: [f64; 3], size: [f64; 3], constants: Option<&str>) -> Self {
        self.command(Command::Box {
            corner,
            size,
            constants: constants.map(str::to_string),
        })
    }

    /// Append `sphere` with an optional material override.
    pub fn sphere(self, center: [f64; 3], radius: f64, constants: Option<&str>) -> Self {
        self.command(Command::Sphere {
            center,
            radius,
            constants: constants.map(str::to_string),
        })
    }

    /// Append `torus` with an optional material override.
    pub fn torus(
        self,
        center: [f64; 3],
        tube_radius: f64,
        ring_radius: f64,
        constants: Option<&str>,
    ) -> Self {
        self.command(Command::Torus {
            center,
            tube_radius,
            ring_radius,
            constants: constants.map(str::to_string),
        })
    }

    /// Append `line`.
    pub fn line(self, from: [f64; 3], to: [f64; 3]) -> Self {
        self.command(Command::Line { from, to })
    }

    /// Append `display`.
    pub fn display(self) -> Self {
        self.command(Command::Display)
    }

    /// Append `save`.
    pub fn save(self, path: impl Into<std::path::PathBuf>) -> Self {
        self.command(Command::Save { path: path.into() })
    }

    /// Finish the script without frame-dependent validation.
    pub fn build(self) -> Script {
        Script {
            commands: self.commands,
            symbols: self.symbols,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/dsl.rs"]
mod tests;
