//! Record Layout
//!
//! The `WM_NORMAL_HINTS` record as it sits on the wire: 18 signed 32-bit
//! little-endian slots. `Field::ALL` is the only place the slot order is
//! written down; the decoder and encoder both walk it.

use crate::flags::SizeHintsFlags;

/// Width of one slot in bytes.
pub const SLOT_SIZE: usize = 4;

/// Number of slots in a full record.
pub const SLOT_COUNT: usize = 18;

/// Size of an encoded record in bytes.
pub const RECORD_SIZE: usize = SLOT_SIZE * SLOT_COUNT;

/// One slot of the wire layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Flags,
    X,
    Y,
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    WidthInc,
    HeightInc,
    MinAspectNumerator,
    MinAspectDenominator,
    MaxAspectNumerator,
    MaxAspectDenominator,
    BaseWidth,
    BaseHeight,
    WinGravity,
}

impl Field {
    /// Every slot, in wire order.
    pub const ALL: [Field; SLOT_COUNT] = [
        Field::Flags,
        Field::X,
        Field::Y,
        Field::Width,
        Field::Height,
        Field::MinWidth,
        Field::MinHeight,
        Field::MaxWidth,
        Field::MaxHeight,
        Field::WidthInc,
        Field::HeightInc,
        Field::MinAspectNumerator,
        Field::MinAspectDenominator,
        Field::MaxAspectNumerator,
        Field::MaxAspectDenominator,
        Field::BaseWidth,
        Field::BaseHeight,
        Field::WinGravity,
    ];

    /// Index of the slot within the record.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Byte offset of the slot within an encoded record.
    pub const fn offset(self) -> usize {
        self.index() * SLOT_SIZE
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Flags => "flags",
            Field::X => "x",
            Field::Y => "y",
            Field::Width => "width",
            Field::Height => "height",
            Field::MinWidth => "min_width",
            Field::MinHeight => "min_height",
            Field::MaxWidth => "max_width",
            Field::MaxHeight => "max_height",
            Field::WidthInc => "width_inc",
            Field::HeightInc => "height_inc",
            Field::MinAspectNumerator => "min_aspect.numerator",
            Field::MinAspectDenominator => "min_aspect.denominator",
            Field::MaxAspectNumerator => "max_aspect.numerator",
            Field::MaxAspectDenominator => "max_aspect.denominator",
            Field::BaseWidth => "base_width",
            Field::BaseHeight => "base_height",
            Field::WinGravity => "win_gravity",
        }
    }
}

/// Aspect ratio as a numerator/denominator pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aspect {
    pub numerator: i32,
    pub denominator: i32,
}

/// Size hints (XSizeHints equivalent)
///
/// Values are only ever produced by decoding a property or by clearing flags
/// on a decoded value. Fields whose flag bit is clear still hold whatever the
/// client wrote and are encoded back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeHints {
    pub flags: SizeHintsFlags,
    /// Obsolete, kept for round-tripping
    pub x: i32,
    pub y: i32,
    /// Obsolete, kept for round-tripping
    pub width: i32,
    pub height: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
    pub width_inc: i32,
    pub height_inc: i32,
    pub min_aspect: Aspect,
    pub max_aspect: Aspect,
    pub base_width: i32,
    pub base_height: i32,
    pub win_gravity: i32,
}

impl SizeHints {
    /// Raw value of a slot as it goes on the wire.
    pub fn slot(&self, field: Field) -> i32 {
        match field {
            Field::Flags => self.flags.to_wire(),
            Field::X => self.x,
            Field::Y => self.y,
            Field::Width => self.width,
            Field::Height => self.height,
            Field::MinWidth => self.min_width,
            Field::MinHeight => self.min_height,
            Field::MaxWidth => self.max_width,
            Field::MaxHeight => self.max_height,
            Field::WidthInc => self.width_inc,
            Field::HeightInc => self.height_inc,
            Field::MinAspectNumerator => self.min_aspect.numerator,
            Field::MinAspectDenominator => self.min_aspect.denominator,
            Field::MaxAspectNumerator => self.max_aspect.numerator,
            Field::MaxAspectDenominator => self.max_aspect.denominator,
            Field::BaseWidth => self.base_width,
            Field::BaseHeight => self.base_height,
            Field::WinGravity => self.win_gravity,
        }
    }

    /// Build a record from raw slot values in wire order.
    pub(crate) fn from_slots(slots: [i32; SLOT_COUNT]) -> Self {
        let get = |field: Field| slots[field.index()];
        Self {
            flags: SizeHintsFlags::from_wire(get(Field::Flags)),
            x: get(Field::X),
            y: get(Field::Y),
            width: get(Field::Width),
            height: get(Field::Height),
            min_width: get(Field::MinWidth),
            min_height: get(Field::MinHeight),
            max_width: get(Field::MaxWidth),
            max_height: get(Field::MaxHeight),
            width_inc: get(Field::WidthInc),
            height_inc: get(Field::HeightInc),
            min_aspect: Aspect {
                numerator: get(Field::MinAspectNumerator),
                denominator: get(Field::MinAspectDenominator),
            },
            max_aspect: Aspect {
                numerator: get(Field::MaxAspectNumerator),
                denominator: get(Field::MaxAspectDenominator),
            },
            base_width: get(Field::BaseWidth),
            base_height: get(Field::BaseHeight),
            win_gravity: get(Field::WinGravity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_contiguous() {
        assert_eq!(RECORD_SIZE, 72);
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(field.offset(), i * 4);
        }
        assert_eq!(Field::WinGravity.offset() + SLOT_SIZE, RECORD_SIZE);
    }

    #[test]
    fn test_slots_roundtrip_through_record() {
        let mut slots = [0i32; SLOT_COUNT];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = (i as i32 + 1) * -7;
        }
        let hints = SizeHints::from_slots(slots);
        for field in Field::ALL {
            assert_eq!(hints.slot(field), slots[field.index()], "{}", field.name());
        }
        assert_eq!(hints.min_aspect.numerator, slots[11]);
        assert_eq!(hints.max_aspect.denominator, slots[14]);
    }

    #[test]
    fn test_field_names_unique() {
        let mut names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SLOT_COUNT);
    }
}
