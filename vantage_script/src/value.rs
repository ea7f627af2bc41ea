// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use peniko::Color;

/// A value passed from a hosted script to an emit call.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptValue {
    /// A number.
    Number(f64),
    /// An RGB color.
    Color(Color),
    /// An ordered sequence; two numbers form a point.
    List(Vec<ScriptValue>),
    /// A string that is not a color.
    Text(String),
    /// The host's null value.
    Nil,
}

impl ScriptValue {
    /// A two-number list, i.e. a point.
    #[must_use]
    pub fn pair(x: f64, y: f64) -> Self {
        Self::List(vec![Self::Number(x), Self::Number(y)])
    }

    /// An opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Color(Color::from_rgb8(r, g, b))
    }

    /// Parses `#rrggbb` into a color.
    #[must_use]
    pub fn parse_hex_color(text: &str) -> Option<Color> {
        let hex = text.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Color(color) => {
                let c = color.to_rgba8();
                write!(f, "#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
            }
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Nil => f.write_str("nil"),
        }
    }
}
