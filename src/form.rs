//! Headless version of the "Circle Involute Creator" form.
//!
//! The form owns three text fields (radius, radial distance, number of points)
//! and the curve of the last successful calculation. Keystrokes go through the
//! validators in `validate.rs`; the "Calculate & Draw" action parses all three
//! fields and either replaces the curve or does nothing at all.
use core::fmt;

use tracing::{debug, trace};

use crate::curve::{CurveParameters, InvoluteCurve};
use crate::error::{CalculateError, ParseError, RenderError};
use crate::render::Renderer;
use crate::validate::{is_valid_float_text, is_valid_int_text};
use crate::NativeFloat;

/// The input fields of the form, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Radius,
    Coefficient,
    PointCount,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Radius, FieldKind::Coefficient, FieldKind::PointCount];

    /// Label shown in front of the entry.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Radius => "radius",
            FieldKind::Coefficient => "radial distance",
            FieldKind::PointCount => "number of points",
        }
    }

    /// Run the keystroke gate that belongs to this field.
    pub fn accepts(&self, proposed: &str) -> bool {
        match self {
            FieldKind::Radius | FieldKind::Coefficient => is_valid_float_text(proposed),
            FieldKind::PointCount => is_valid_int_text(proposed),
        }
    }

    fn index(&self) -> usize {
        match self {
            FieldKind::Radius => 0,
            FieldKind::Coefficient => 1,
            FieldKind::PointCount => 2,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a calculate action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Calculation {
    /// A new curve was computed and replaced the previous one.
    Replaced,
    /// Parsing or sampling failed, the previous curve (if any) is still current.
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    texts: [String; 3],
    curve: Option<InvoluteCurve>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: FieldKind) -> &str {
        &self.texts[field.index()]
    }

    /// Offer the complete new text of `field`. The text is stored only if the
    /// field's validator accepts it; returns whether it was accepted.
    pub fn propose(&mut self, field: FieldKind, proposed: &str) -> bool {
        if !field.accepts(proposed) {
            trace!(%field, proposed, "keystroke rejected");
            return false;
        }
        let text = &mut self.texts[field.index()];
        text.clear();
        text.push_str(proposed);
        true
    }

    /// Type `input` into `field` one character at a time, appending every
    /// accepted keystroke. Returns the number of rejected keystrokes.
    pub fn type_str(&mut self, field: FieldKind, input: &str) -> usize {
        let mut rejected = 0;
        let mut proposed = self.text(field).to_owned();
        for c in input.chars() {
            proposed.push(c);
            if !self.propose(field, &proposed) {
                proposed.pop();
                rejected += 1;
            }
        }
        rejected
    }

    pub fn clear(&mut self, field: FieldKind) {
        self.texts[field.index()].clear();
    }

    /// The curve of the last successful calculation.
    pub fn curve(&self) -> Option<&InvoluteCurve> {
        self.curve.as_ref()
    }

    /// Parse all three fields. The point count is parsed first, then the
    /// coefficient, then the radius; the first failure is returned.
    pub fn parse(&self) -> Result<CurveParameters, ParseError> {
        let point_count = self.parse_field::<usize>(FieldKind::PointCount)?;
        let coefficient = self.parse_float(FieldKind::Coefficient)?;
        let radius = self.parse_float(FieldKind::Radius)?;
        Ok(CurveParameters::new(radius, coefficient, point_count))
    }

    fn parse_field<T: core::str::FromStr>(&self, field: FieldKind) -> Result<T, ParseError> {
        let text = self.text(field);
        if text.is_empty() {
            return Err(ParseError::Empty { field });
        }
        text.parse().map_err(|_| ParseError::Invalid {
            field,
            text: text.to_owned(),
        })
    }

    /// Long digit strings overflow to infinity, which is not a usable radius or coefficient.
    fn parse_float(&self, field: FieldKind) -> Result<NativeFloat, ParseError> {
        let value = self.parse_field::<NativeFloat>(field)?;
        if !value.is_finite() {
            return Err(ParseError::Invalid {
                field,
                text: self.text(field).to_owned(),
            });
        }
        Ok(value)
    }

    /// Parse and sample without touching the current curve.
    /// Curves whose points overflow are refused so that the form only ever holds drawable geometry.
    pub fn try_calculate(&self) -> Result<InvoluteCurve, CalculateError> {
        let params = self.parse()?;
        let curve = InvoluteCurve::generate(&params)?;
        if !curve.iter().all(|p| p.is_finite()) {
            return Err(CalculateError::NonFinite);
        }
        Ok(curve)
    }

    /// The "Calculate & Draw" action without the drawing. On failure nothing
    /// changes and nothing is reported beyond the returned `Unchanged`.
    pub fn calculate(&mut self) -> Calculation {
        match self.try_calculate() {
            Ok(curve) => {
                debug!(points = curve.len(), radius = curve.radius(), "curve replaced");
                self.curve = Some(curve);
                Calculation::Replaced
            }
            Err(err) => {
                debug!(%err, "calculation skipped");
                Calculation::Unchanged
            }
        }
    }

    /// Calculate and, if a new curve was produced, hand it to `renderer`.
    /// An unchanged calculation leaves the previous drawing alone.
    pub fn calculate_and_draw<R: Renderer>(&mut self, renderer: &mut R) -> Result<Calculation, RenderError> {
        let calculation = self.calculate();
        if let (Calculation::Replaced, Some(curve)) = (calculation, self.curve.as_ref()) {
            renderer.render(curve)?;
        }
        Ok(calculation)
    }
}
