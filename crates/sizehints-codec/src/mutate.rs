//! Flag queries and clears.
//!
//! Clearing a flag only touches the `flags` slot. The payload of the group
//! stays in place, so a window manager stops honoring it while the numbers
//! themselves survive a later re-encode.

use crate::flags::SizeHintsFlags;
use crate::layout::SizeHints;

impl SizeHints {
    /// True if every bit in `flag` is set.
    pub fn is_set(&self, flag: SizeHintsFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Copy of `self` with the bits in `flag` cleared.
    #[must_use]
    pub fn clear(self, flag: SizeHintsFlags) -> Self {
        Self {
            flags: self.flags.difference(flag),
            ..self
        }
    }
}

macro_rules! flag_accessors {
    ($($flag:ident => $is_set:ident, $clear:ident;)*) => {
        impl SizeHints {
            $(
                #[doc = concat!("True if `", stringify!($flag), "` is set.")]
                pub fn $is_set(&self) -> bool {
                    self.is_set(SizeHintsFlags::$flag)
                }

                #[doc = concat!("Copy of `self` with `", stringify!($flag), "` cleared.")]
                #[must_use]
                pub fn $clear(self) -> Self {
                    self.clear(SizeHintsFlags::$flag)
                }
            )*
        }
    };
}

flag_accessors! {
    US_POSITION => is_user_position_set, clear_user_position;
    US_SIZE => is_user_size_set, clear_user_size;
    P_POSITION => is_position_set, clear_position;
    P_SIZE => is_size_set, clear_size;
    P_MIN_SIZE => is_min_size_set, clear_min_size;
    P_MAX_SIZE => is_max_size_set, clear_max_size;
    P_RESIZE_INC => is_resize_inc_set, clear_resize_inc;
    P_ASPECT => is_aspect_set, clear_aspect;
    P_BASE_SIZE => is_base_size_set, clear_base_size;
    P_WIN_GRAVITY => is_win_gravity_set, clear_win_gravity;
}
