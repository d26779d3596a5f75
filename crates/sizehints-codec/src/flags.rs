//! Size Hints Flags
//!
//! Bit layout of the `flags` slot, as defined by ICCCM section 4.1.2.3.

use bitflags::bitflags;

bitflags! {
    /// Which field groups of a `WM_NORMAL_HINTS` record carry meaningful values.
    ///
    /// Bits 10..31 are unassigned. They are kept as-is when decoding so that
    /// re-encoding stays byte-identical.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SizeHintsFlags: u32 {
        /// User-specified x, y
        const US_POSITION   = 1 << 0;
        /// User-specified width, height
        const US_SIZE       = 1 << 1;
        /// Program-specified position
        const P_POSITION    = 1 << 2;
        /// Program-specified size
        const P_SIZE        = 1 << 3;
        /// Program-specified minimum size
        const P_MIN_SIZE    = 1 << 4;
        /// Program-specified maximum size
        const P_MAX_SIZE    = 1 << 5;
        /// Program-specified resize increments
        const P_RESIZE_INC  = 1 << 6;
        /// Program-specified min and max aspect ratios
        const P_ASPECT      = 1 << 7;
        /// Program-specified base size
        const P_BASE_SIZE   = 1 << 8;
        /// Program-specified window gravity
        const P_WIN_GRAVITY = 1 << 9;
    }
}

impl SizeHintsFlags {
    /// Reinterpret the raw `flags` slot without dropping unknown bits.
    pub const fn from_wire(raw: i32) -> Self {
        Self::from_bits_retain(raw as u32)
    }

    /// Raw `flags` slot value, unknown bits included.
    pub const fn to_wire(self) -> i32 {
        self.bits() as i32
    }
}

impl serde::Serialize for SizeHintsFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for SizeHintsFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}
