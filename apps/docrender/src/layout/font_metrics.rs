//! Static font-metric tables and page geometry.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard PDF base-14 font metrics. No kerning or ligatures: a string's width
//! is the plain sum of its glyph advances. Good enough for line breaking; an
//! exact match with the downstream writer is not required.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Sans-serif. Default for both document types.
    #[default]
    Helvetica,
    /// Serif.
    Times,
}

impl FontFamily {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "helvetica" | "sans" | "sans-serif" => Some(FontFamily::Helvetica),
            "times" | "times-roman" | "serif" => Some(FontFamily::Times),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Page geometry for the paginated renderer. All values in points (1/72 in).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    /// Uniform margin on all four sides.
    pub margin_pt: f32,
    /// Added to the font size to get the height of one wrapped line.
    pub leading_pt: f32,
}

pub const DEFAULT_LEADING_PT: f32 = 4.0;

/// Returns the default page config: A4 (595 × 842 pt) with 50 pt margins.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        width_pt: 595.0,
        height_pt: 842.0,
        margin_pt: 50.0,
        leading_pt: DEFAULT_LEADING_PT,
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        default_page_config()
    }
}

impl PageConfig {
    /// US letter (612 × 792 pt) with 1" margins.
    pub fn letter() -> Self {
        PageConfig {
            width_pt: 612.0,
            height_pt: 792.0,
            margin_pt: 72.0,
            leading_pt: DEFAULT_LEADING_PT,
        }
    }

    /// Usable horizontal space between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width_pt - 2.0 * self.margin_pt
    }

    /// Usable vertical space between the top and bottom margins.
    pub fn content_height(&self) -> f32 {
        self.height_pt - 2.0 * self.margin_pt
    }

    /// Baseline of the first line on a fresh page.
    pub fn top_y(&self) -> f32 {
        self.height_pt - self.margin_pt
    }

    /// Rejects geometry that leaves no content area.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let values = [
            ("width_pt", self.width_pt),
            ("height_pt", self.height_pt),
            ("margin_pt", self.margin_pt),
            ("leading_pt", self.leading_pt),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(PipelineError::InvalidPageConfig(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if self.content_width() <= 0.0 || self.content_height() <= 0.0 {
            return Err(PipelineError::InvalidPageConfig(format!(
                "margin {}pt leaves no content area on a {}x{}pt page",
                self.margin_pt, self.width_pt, self.height_pt
            )));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement seam
// ────────────────────────────────────────────────────────────────────────────

/// Text-width measurement, injected into the paginated renderer.
///
/// Returns the rendered width in points of `text` at `font_size_pt`.
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font_size_pt: f32, bold: bool) -> f32;
}

/// Any `Fn(&str, f32, bool) -> f32` is a measurer. Handy for fixed-width fakes in tests.
impl<F> TextMeasurer for F
where
    F: Fn(&str, f32, bool) -> f32 + Send + Sync,
{
    fn measure(&self, text: &str, font_size_pt: f32, bold: bool) -> f32 {
        self(text, font_size_pt, bold)
    }
}

/// Table-backed measurer for one font family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontMetrics {
    pub family: FontFamily,
}

impl FontMetrics {
    pub fn new(family: FontFamily) -> Self {
        Self { family }
    }
}

impl TextMeasurer for FontMetrics {
    fn measure(&self, text: &str, font_size_pt: f32, bold: bool) -> f32 {
        get_metrics(self.family, bold).measure_str(text) * font_size_pt
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one face of a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em units.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub font: FontFamily,
    pub bold: bool,
    widths: [f32; 95],
    /// Fallback width for characters outside the table (non-ASCII, control).
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Helvetica,
    bold: false,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0-9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.52,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Helvetica,
    bold: true,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0-9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.56,
};

static TIMES_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Times,
    bold: false,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0-9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    average_char_width: 0.47,
};

static TIMES_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Times,
    bold: true,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.555, 0.500, 0.500, 1.000, 0.833, 0.278, 0.333, 0.333, 0.500, 0.570, 0.250, 0.333, 0.250, 0.278,
        // 0-9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.570, 0.570, 0.570, 0.500, 0.930,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.778, 0.389, 0.500, 0.778, 0.667, 0.944,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.611, 0.778, 0.722, 0.556, 0.667, 0.722, 0.722, 1.000, 0.722, 0.722, 0.667,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.581, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.500, 0.556, 0.444, 0.556, 0.444, 0.333, 0.500, 0.556, 0.278, 0.333, 0.556, 0.278, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.500, 0.556, 0.556, 0.444, 0.389, 0.333, 0.556, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.394, 0.220, 0.394, 0.520,
    ],
    average_char_width: 0.50,
};

/// Returns the static metric table for a font family and weight.
pub fn get_metrics(font: FontFamily, bold: bool) -> &'static FontMetricTable {
    match (font, bold) {
        (FontFamily::Helvetica, false) => &HELVETICA_TABLE,
        (FontFamily::Helvetica, true) => &HELVETICA_BOLD_TABLE,
        (FontFamily::Times, false) => &TIMES_TABLE,
        (FontFamily::Times, true) => &TIMES_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontFamily::Helvetica, false);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFamily::Helvetica, false);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontFamily::Helvetica, false);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_never_narrower_for_lowercase() {
        let regular = get_metrics(FontFamily::Helvetica, false);
        let bold = get_metrics(FontFamily::Helvetica, true);
        let text = "experience education skills";
        assert!(bold.measure_str(text) >= regular.measure_str(text));
    }

    #[test]
    fn test_times_narrower_than_helvetica() {
        let text = "Architected distributed caching layer";
        let times = get_metrics(FontFamily::Times, false).measure_str(text);
        let helvetica = get_metrics(FontFamily::Helvetica, false).measure_str(text);
        assert!(times < helvetica);
    }

    #[test]
    fn test_font_metrics_scales_by_font_size() {
        let measurer = FontMetrics::new(FontFamily::Helvetica);
        let at_10 = measurer.measure("Rust", 10.0, false);
        let at_20 = measurer.measure("Rust", 20.0, false);
        assert!((at_10 - 20.56).abs() < 1e-2);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-3);
    }

    #[test]
    fn test_closure_is_a_measurer() {
        let fixed = |text: &str, size: f32, _bold: bool| text.chars().count() as f32 * size * 0.5;
        assert!((fixed.measure("abcd", 10.0, true) - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_font_family_from_name() {
        assert_eq!(FontFamily::from_name("Times"), Some(FontFamily::Times));
        assert_eq!(FontFamily::from_name("helvetica"), Some(FontFamily::Helvetica));
        assert_eq!(FontFamily::from_name("comic"), None);
    }

    #[test]
    fn test_default_page_config_is_a4() {
        let config = default_page_config();
        assert_eq!(config.width_pt, 595.0);
        assert_eq!(config.height_pt, 842.0);
        assert_eq!(config.margin_pt, 50.0);
        assert!((config.content_width() - 495.0).abs() < 1e-4);
        assert!((config.top_y() - 792.0).abs() < 1e-4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_letter_page_is_valid() {
        let config = PageConfig::letter();
        assert!(config.validate().is_ok());
        assert!((config.content_width() - 468.0).abs() < 1e-4);
    }

    #[test]
    fn test_validate_rejects_oversized_margin() {
        let config = PageConfig {
            margin_pt: 300.0,
            ..default_page_config()
        };
        assert!(matches!(
            config.validate(),
            Err(PipelineError::InvalidPageConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = PageConfig {
            width_pt: f32::NAN,
            ..default_page_config()
        };
        assert!(config.validate().is_err());
    }
}
