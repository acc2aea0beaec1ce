//! Boundary patch kinds for volume fields.

use crate::value::FieldValue;

/// How boundary-face values of a volume field are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PatchKind<T> {
    /// Values are set by whoever computed the field and left alone.
    #[default]
    Calculated,
    /// Values are extrapolated (zeroth order) from the adjacent cell.
    ExtrapolatedCalculated,
    /// Zero normal gradient: the face takes the adjacent cell value.
    ZeroGradient,
    /// Prescribed face value.
    FixedValue(T),
}

impl<T: FieldValue> PatchKind<T> {
    pub fn type_name(&self) -> &'static str {
        match self {
            PatchKind::Calculated => "calculated",
            PatchKind::ExtrapolatedCalculated => "extrapolatedCalculated",
            PatchKind::ZeroGradient => "zeroGradient",
            PatchKind::FixedValue(_) => "fixedValue",
        }
    }

    /// Boundary value for a face next to a cell holding `cell_value`,
    /// or `None` when the kind leaves the current value untouched.
    pub fn evaluate(&self, cell_value: T) -> Option<T> {
        match self {
            PatchKind::Calculated => None,
            PatchKind::ExtrapolatedCalculated | PatchKind::ZeroGradient => Some(cell_value),
            PatchKind::FixedValue(v) => Some(*v),
        }
    }
}
