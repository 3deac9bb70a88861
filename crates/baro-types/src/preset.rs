use serde::{Deserialize, Serialize};

/// Named gauge sizes. Each preset fixes the logical canvas the geometry is laid out on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Xxs,
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    Xxxl,
}

impl SizePreset {
    pub const ALL: [SizePreset; 8] = [
        SizePreset::Xxs,
        SizePreset::Xs,
        SizePreset::S,
        SizePreset::M,
        SizePreset::L,
        SizePreset::Xl,
        SizePreset::Xxl,
        SizePreset::Xxxl,
    ];

    /// Logical `(width, height)` of the canvas.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            SizePreset::Xxs => (200.0, 150.0),
            SizePreset::Xs => (300.0, 225.0),
            SizePreset::S => (600.0, 450.0),
            SizePreset::M => (800.0, 600.0),
            SizePreset::L => (1000.0, 750.0),
            SizePreset::Xl => (1200.0, 900.0),
            SizePreset::Xxl => (1400.0, 1050.0),
            SizePreset::Xxxl => (1600.0, 1200.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizePreset::Xxs => "xxs",
            SizePreset::Xs => "xs",
            SizePreset::S => "s",
            SizePreset::M => "m",
            SizePreset::L => "l",
            SizePreset::Xl => "xl",
            SizePreset::Xxl => "xxl",
            SizePreset::Xxxl => "xxxl",
        }
    }

    /// Parses a preset name; `"default"` and unknown names resolve to `M`.
    pub fn parse(name: &str) -> Self {
        let lowered = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == lowered)
            .unwrap_or_default()
    }
}

impl Default for SizePreset {
    fn default() -> Self {
        SizePreset::M
    }
}
