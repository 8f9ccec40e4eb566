use serde::{Deserialize, Serialize};

use crate::error::{AdornError, AdornResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> AdornResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AdornError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Parses a CSS-style color: a few named colors, `#rgb`, `#rrggbb`,
    /// `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn parse(input: &str) -> AdornResult<Self> {
        let value = input.trim().to_ascii_lowercase();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }
        if let Some(body) = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let color = parse_functional(body).ok_or_else(|| invalid_color(input))?;
            color.validate()?;
            return Ok(color);
        }
        named_color(&value).ok_or_else(|| invalid_color(input))
    }
}

fn invalid_color(input: &str) -> AdornError {
    AdornError::InvalidData(format!("unrecognized color `{input}`"))
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "transparent" => Color::TRANSPARENT,
        "red" => Color::from_rgb8(255, 0, 0),
        "green" => Color::from_rgb8(0, 128, 0),
        "blue" => Color::from_rgb8(0, 0, 255),
        "gray" | "grey" => Color::from_rgb8(128, 128, 128),
        "orange" => Color::from_rgb8(255, 165, 0),
        "yellow" => Color::from_rgb8(255, 255, 0),
        "purple" => Color::from_rgb8(128, 0, 128),
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<_>>()?;
    let channel = |hi: u8, lo: u8| f64::from(hi * 16 + lo) / 255.0;
    match digits.as_slice() {
        [r, g, b] => Some(Color::rgb(
            channel(*r, *r),
            channel(*g, *g),
            channel(*b, *b),
        )),
        [r1, r2, g1, g2, b1, b2] => Some(Color::rgb(
            channel(*r1, *r2),
            channel(*g1, *g2),
            channel(*b1, *b2),
        )),
        [r1, r2, g1, g2, b1, b2, a1, a2] => Some(Color::rgba(
            channel(*r1, *r2),
            channel(*g1, *g2),
            channel(*b1, *b2),
            channel(*a1, *a2),
        )),
        _ => None,
    }
}

fn parse_functional(body: &str) -> Option<Color> {
    let parts: Vec<f64> = body
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(r / 255.0, g / 255.0, b / 255.0)),
        [r, g, b, a] => Some(Color::rgba(r / 255.0, g / 255.0, b / 255.0, *a)),
        _ => None,
    }
}

/// One gradient color stop; `offset` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    pub fn add_color_stop(&mut self, offset: f64, color: Color) {
        self.stops.push(ColorStop { offset, color });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub x0: f64,
    pub y0: f64,
    pub r0: f64,
    pub x1: f64,
    pub y1: f64,
    pub r1: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    #[must_use]
    pub fn new(x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64) -> Self {
        Self {
            x0,
            y0,
            r0,
            x1,
            y1,
            r1,
            stops: Vec::new(),
        }
    }

    pub fn add_color_stop(&mut self, offset: f64, color: Color) {
        self.stops.push(ColorStop { offset, color });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternRepeat {
    #[default]
    Repeat,
    RepeatX,
    RepeatY,
    NoRepeat,
}

/// Image-backed paint. `image` names a source the surface knows about.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub image: String,
    pub repeat: PatternRepeat,
}

impl Pattern {
    #[must_use]
    pub fn new(image: impl Into<String>, repeat: PatternRepeat) -> Self {
        Self {
            image: image.into(),
            repeat,
        }
    }
}

/// Concrete paint assigned to a surface's fill or stroke style.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
    Pattern(Pattern),
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Horizontal text alignment relative to the `fill_text` anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

/// Mutable paint state of a drawing surface, saved and restored as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintState {
    pub fill_style: Paint,
    pub stroke_style: Paint,
    pub line_width: f64,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
    pub miter_limit: f64,
    pub font: String,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill_style: Paint::default(),
            stroke_style: Paint::default(),
            line_width: 1.0,
            line_join: LineJoin::default(),
            line_cap: LineCap::default(),
            miter_limit: 10.0,
            font: "10px sans-serif".to_owned(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }
}
