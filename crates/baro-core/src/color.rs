use std::fmt;
use std::str::FromStr;

use baro_types::{GradientType, TileArcConfig};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::scale::normalize;

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("empty colour string")]
    Empty,
    #[error("invalid hex colour {0:?}")]
    InvalidHex(String),
    #[error("invalid rgb() colour {0:?}")]
    InvalidRgb(String),
    #[error("unsupported colour {0:?}")]
    Unsupported(String),
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Channel-wise linear interpolation, `t` is not clamped.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        write!(f, "rgb({}, {}, {})", channel(self.r), channel(self.g), channel(self.b))
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(s.to_string()));
        }
        let lowered = s.to_lowercase();
        if let Some(body) = lowered.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
            return parse_rgb_body(body).ok_or_else(|| ColorError::InvalidRgb(s.to_string()));
        }
        match lowered.as_str() {
            "black" => Ok(Rgb::BLACK),
            "white" => Ok(rgb(255, 255, 255)),
            "red" => Ok(rgb(255, 0, 0)),
            "green" => Ok(rgb(0, 128, 0)),
            "yellow" => Ok(rgb(255, 255, 0)),
            "blue" => Ok(rgb(0, 0, 255)),
            "grey" | "gray" => Ok(rgb(128, 128, 128)),
            _ => Err(ColorError::Unsupported(s.to_string())),
        }
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb {
        r: r as f64,
        g: g as f64,
        b: b as f64,
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => Some(rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
        6 => Some(rgb(pair(0)?, pair(2)?, pair(4)?)),
        _ => None,
    }
}

fn parse_rgb_body(body: &str) -> Option<Rgb> {
    let channels: Vec<f64> = body
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;
    match channels.as_slice() {
        [r, g, b] => Some(Rgb { r: *r, g: *g, b: *b }),
        _ => None,
    }
}

fn parse_or_black(color: &str) -> Rgb {
    color.parse().unwrap_or_else(|e| {
        warn!("colour stop {color:?} unusable ({e}), using black");
        Rgb::BLACK
    })
}

/// Three-stop colour ramp over the normalized domain `[0, yellow, 1]`.
///
/// Behaves like a piecewise linear scale: values outside the domain
/// extrapolate the first or last segment, channels are clamped on output.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    domain: [f64; 3],
    range: [Rgb; 3],
}

impl ColorScale {
    pub fn new(yellow_normalized: f64, default: &str, yellow: &str, red: &str) -> Self {
        Self {
            domain: [0.0, yellow_normalized, 1.0],
            range: [parse_or_black(default), parse_or_black(yellow), parse_or_black(red)],
        }
    }

    pub fn from_tile_config(tileArc: &TileArcConfig, yellow_normalized: f64) -> Self {
        Self::new(
            yellow_normalized,
            &tileArc.color_tile_threshold_default,
            &tileArc.color_tile_threshold_yellow,
            &tileArc.color_tile_threshold_red,
        )
    }

    pub fn rgb_at(&self, value: f64) -> Rgb {
        let segment = if value >= self.domain[1] { 1 } else { 0 };
        let (d0, d1) = (self.domain[segment], self.domain[segment + 1]);
        let span = d1 - d0;
        let t = if span == 0.0 { 0.0 } else { (value - d0) / span };
        self.range[segment].lerp(self.range[segment + 1], t)
    }

    pub fn color_at(&self, value: f64) -> String {
        self.rgb_at(value).to_string()
    }
}

/// Picks one of three colours by comparing a raw value with raw thresholds.
/// Both thresholds are inclusive lower bounds.
pub fn color_selector(
    threshold_max: f64,
    threshold_mid: f64,
    color_max: &str,
    color_mid: &str,
    color_default: &str,
    value: f64,
) -> String {
    if value < threshold_mid {
        color_default.to_string()
    } else if value < threshold_max {
        color_mid.to_string()
    } else {
        color_max.to_string()
    }
}

/// Id of the per-tile gradient definition referenced by tile `index`.
pub fn tile_gradient_id(index: usize) -> String {
    format!("gradient-{index}")
}

/// Fill of a tile's filled portion.
///
/// `value` is the gauge's overall sum-normalized value, so in flat and
/// full-gradient mode every filled tile shares one colour. Flat mode
/// compares it with both normalized thresholds, inclusive.
pub fn tile_color(
    value: f64,
    index: usize,
    tileArc: &TileArcConfig,
    yellow_normalized: f64,
    red_normalized: f64,
    scale: &ColorScale,
) -> String {
    if !tileArc.is_tile_color_gradient {
        return if value >= red_normalized {
            tileArc.color_tile_threshold_red.clone()
        } else if value >= yellow_normalized {
            tileArc.color_tile_threshold_yellow.clone()
        } else {
            tileArc.color_tile_threshold_default.clone()
        };
    }

    match tileArc.gradient_type {
        GradientType::Full => scale.color_at(value),
        GradientType::Tile => format!("url(#{})", tile_gradient_id(index)),
    }
}

/// Two-stop gradient spanning one tile's share of the value domain.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TileGradient {
    pub id: String,
    pub start_color: String,
    pub end_color: String,
}

pub fn tile_gradients(tile_count: usize, threshold_red: f64, scale: &ColorScale) -> Vec<TileGradient> {
    let tileValueRange = threshold_red / tile_count as f64;
    let rangeNormalized = normalize(tileValueRange, threshold_red);
    (0..tile_count)
        .map(|index| {
            let tileStart = normalize(index as f64 * tileValueRange, threshold_red);
            TileGradient {
                id: tile_gradient_id(index),
                start_color: scale.color_at(tileStart),
                end_color: scale.color_at(tileStart + rangeNormalized),
            }
        })
        .collect()
}
