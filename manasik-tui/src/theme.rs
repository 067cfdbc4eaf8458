//! Portal color themes.

use std::collections::HashMap;

use minbar::types::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    pub fn toggled(self) -> Self {
        match self {
            ThemeVariant::Dark => ThemeVariant::Light,
            ThemeVariant::Light => ThemeVariant::Dark,
        }
    }
}

/// Named colors the widgets and views resolve at paint time.
pub struct PortalTheme {
    vars: HashMap<&'static str, Color>,
}

impl PortalTheme {
    pub fn new(variant: ThemeVariant) -> Self {
        let vars = match variant {
            ThemeVariant::Dark => dark_vars(),
            ThemeVariant::Light => light_vars(),
        };
        Self { vars }
    }
}

impl Theme for PortalTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        self.vars.get(name)
    }
}

fn dark_vars() -> HashMap<&'static str, Color> {
    HashMap::from([
        ("background", Color::hex(0x10141c)),
        ("surface", Color::hex(0x1a2130)),
        ("foreground", Color::hex(0xe4e8f1)),
        ("border", Color::hex(0x3a4458)),
        ("accent", Color::hex(0x2fb98c)),
        ("text.muted", Color::hex(0x8a93a6)),
        ("text.inverted", Color::hex(0x10141c)),
        ("sidebar.bg", Color::hex(0x151a26)),
        ("sidebar.active_bg", Color::hex(0x24405c)),
        ("table.header_bg", Color::hex(0x232c40)),
        ("table.placeholder", Color::hex(0x3a4458)),
        ("badge.neutral", Color::hex(0x8a93a6)),
        ("badge.success", Color::hex(0x2fb98c)),
        ("badge.warning", Color::hex(0xe0a63c)),
        ("badge.danger", Color::hex(0xe05c5c)),
        ("badge.info", Color::hex(0x4f9cf0)),
    ])
}

fn light_vars() -> HashMap<&'static str, Color> {
    HashMap::from([
        ("background", Color::hex(0xf4f6fa)),
        ("surface", Color::hex(0xffffff)),
        ("foreground", Color::hex(0x1c2433)),
        ("border", Color::hex(0xc6ccd9)),
        ("accent", Color::hex(0x14805e)),
        ("text.muted", Color::hex(0x5d6575)),
        ("text.inverted", Color::hex(0xf4f6fa)),
        ("sidebar.bg", Color::hex(0xe8ebf2)),
        ("sidebar.active_bg", Color::hex(0xc3d8ee)),
        ("table.header_bg", Color::hex(0xdde2ec)),
        ("table.placeholder", Color::hex(0xc6ccd9)),
        ("badge.neutral", Color::hex(0x5d6575)),
        ("badge.success", Color::hex(0x14805e)),
        ("badge.warning", Color::hex(0x9a6b14)),
        ("badge.danger", Color::hex(0xb03030)),
        ("badge.info", Color::hex(0x1f5fae)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_define_the_widget_vars() {
        for variant in [ThemeVariant::Dark, ThemeVariant::Light] {
            let theme = PortalTheme::new(variant);
            for var in [
                "background",
                "surface",
                "foreground",
                "accent",
                "text.muted",
                "table.header_bg",
                "table.placeholder",
                "badge.success",
                "badge.danger",
            ] {
                assert!(theme.resolve(var).is_some(), "{variant:?} missing {var}");
            }
        }
    }
}
