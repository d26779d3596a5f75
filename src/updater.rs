//! Size Hints Updater
//!
//! Fetch a window's size hints, clear the requested flags, and store the
//! result only if the encoded bytes differ from what the window had.

use anyhow::{Context, Result, bail};
use sizehints_codec::{RECORD_SIZE, SizeHints, SizeHintsFlags};
use tracing::{debug, info};
use x11rb::protocol::xproto::Window;

use crate::config::{PropertyConfig, UpdateConfig};
use crate::property::PropertyStore;

/// What happened to the window's property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// None of the requested flags were set; nothing written
    Unchanged { hints: SizeHints },
    /// Property rewritten
    Updated { before: SizeHints, after: SizeHints },
    /// Dry run: this is what would have been written
    WouldUpdate { before: SizeHints, after: SizeHints },
}

/// Flags that `clear` would actually remove from `hints`
pub fn pending_clears(hints: &SizeHints, clear: SizeHintsFlags) -> SizeHintsFlags {
    hints.flags & clear
}

pub fn update_size_hints<S: PropertyStore>(
    store: &mut S,
    window: Window,
    property: &PropertyConfig,
    update: &UpdateConfig,
) -> Result<UpdateOutcome> {
    let prop = store
        .fetch(window, &property.name)
        .with_context(|| format!("Failed to fetch {}", property.name))?;

    if prop.format != 32 {
        bail!(
            "{} of window 0x{:x} has format {}, expected 32",
            property.name,
            window,
            prop.format
        );
    }
    debug!(
        "{} ({}) raw bytes: {:?}",
        property.name, prop.type_name, prop.bytes
    );

    let before = SizeHints::decode(&prop.bytes)
        .with_context(|| format!("Failed to decode {}", property.name))?;
    info!(
        "Size hints of window 0x{:x}: flags {:?}, aspect set: {}",
        window,
        before.flags,
        before.is_aspect_set()
    );

    let after = before.clear(update.clear);
    let encoded = after.encode();

    if encoded[..] == prop.bytes[..RECORD_SIZE] {
        return Ok(UpdateOutcome::Unchanged { hints: before });
    }
    if update.dry_run {
        return Ok(UpdateOutcome::WouldUpdate { before, after });
    }

    // Anything past the record is written back untouched
    let mut value = encoded.to_vec();
    value.extend_from_slice(&prop.bytes[RECORD_SIZE..]);

    store
        .write(window, prop.format, &property.name, &property.type_name, &value)
        .with_context(|| format!("Failed to write {}", property.name))?;

    Ok(UpdateOutcome::Updated { before, after })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::Property;

    /// In-memory store that records every write
    struct FakeStore {
        property: Option<Property>,
        writes: Vec<(Window, u8, String, String, Vec<u8>)>,
    }

    impl FakeStore {
        fn with_bytes(bytes: Vec<u8>) -> Self {
            Self {
                property: Some(Property {
                    format: 32,
                    type_name: "WM_SIZE_HINTS".into(),
                    bytes,
                }),
                writes: Vec::new(),
            }
        }
    }

    impl PropertyStore for FakeStore {
        fn fetch(&mut self, _window: Window, name: &str) -> Result<Property> {
            match &self.property {
                Some(prop) => Ok(prop.clone()),
                None => bail!("no {} property", name),
            }
        }

        fn write(
            &mut self,
            window: Window,
            format: u8,
            name: &str,
            type_name: &str,
            bytes: &[u8],
        ) -> Result<()> {
            self.writes
                .push((window, format, name.into(), type_name.into(), bytes.to_vec()));
            Ok(())
        }
    }

    fn sample_with_flags(first: u8, second: u8) -> Vec<u8> {
        vec![
            first, second, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, 0, 0,
            0, 80, 0, 0, 0, 0, 64, 0, 0, 0, 64, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
            128, 0, 0, 0, 0, 1, 0, 0, 128, 0, 0, 160, 0, 0, 0, 80, 0, 0, 0, 1, 0, 0, 0,
        ]
    }

    #[test]
    fn test_unset_flag_is_not_written() {
        // 0x0330: min, max, base size and gravity, no aspect
        let mut store = FakeStore::with_bytes(sample_with_flags(48, 3));
        let outcome = update_size_hints(
            &mut store,
            0x1a00003,
            &PropertyConfig::default(),
            &UpdateConfig::default(),
        )
        .unwrap();

        assert!(matches!(outcome, UpdateOutcome::Unchanged { .. }));
        assert!(store.writes.is_empty());
    }

    #[test]
    fn test_aspect_cleared_and_written_once() {
        // 0x03b0: same as above plus P_ASPECT
        let original = sample_with_flags(0xb0, 3);
        let mut store = FakeStore::with_bytes(original.clone());
        let outcome = update_size_hints(
            &mut store,
            0x1a00003,
            &PropertyConfig::default(),
            &UpdateConfig::default(),
        )
        .unwrap();

        let UpdateOutcome::Updated { before, after } = outcome else {
            panic!("expected an update");
        };
        assert!(before.is_aspect_set());
        assert!(!after.is_aspect_set());

        assert_eq!(store.writes.len(), 1);
        let (window, format, name, type_name, bytes) = &store.writes[0];
        assert_eq!(*window, 0x1a00003);
        assert_eq!(*format, 32);
        assert_eq!(name, "WM_NORMAL_HINTS");
        assert_eq!(type_name, "WM_SIZE_HINTS");
        assert_eq!(bytes[..4], [0x30, 3, 0, 0]);
        assert_eq!(bytes[4..], original[4..]);
    }

    #[test]
    fn test_dry_run_never_writes() {
        let mut store = FakeStore::with_bytes(sample_with_flags(0xb0, 3));
        let update = UpdateConfig {
            dry_run: true,
            ..UpdateConfig::default()
        };
        let outcome =
            update_size_hints(&mut store, 1, &PropertyConfig::default(), &update).unwrap();

        assert!(matches!(outcome, UpdateOutcome::WouldUpdate { .. }));
        assert!(store.writes.is_empty());
    }

    #[test]
    fn test_multiple_clears_single_write() {
        let mut store = FakeStore::with_bytes(sample_with_flags(0xf0, 3));
        let update = UpdateConfig {
            clear: SizeHintsFlags::P_MIN_SIZE | SizeHintsFlags::P_RESIZE_INC | SizeHintsFlags::P_ASPECT,
            dry_run: false,
        };
        update_size_hints(&mut store, 1, &PropertyConfig::default(), &update).unwrap();

        assert_eq!(store.writes.len(), 1);
        // 0x03f0 minus min size, resize inc and aspect
        assert_eq!(store.writes[0].4[..4], [0x20, 3, 0, 0]);
    }

    #[test]
    fn test_trailing_bytes_do_not_force_write() {
        let mut bytes = sample_with_flags(48, 3);
        bytes.extend_from_slice(&[0; 8]);
        let mut store = FakeStore::with_bytes(bytes);
        let outcome = update_size_hints(
            &mut store,
            1,
            &PropertyConfig::default(),
            &UpdateConfig::default(),
        )
        .unwrap();

        assert!(matches!(outcome, UpdateOutcome::Unchanged { .. }));
        assert!(store.writes.is_empty());
    }

    #[test]
    fn test_trailing_bytes_written_back_unchanged() {
        let mut original = sample_with_flags(0x80, 0);
        original.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        let mut store = FakeStore::with_bytes(original.clone());
        let outcome = update_size_hints(
            &mut store,
            1,
            &PropertyConfig::default(),
            &UpdateConfig::default(),
        )
        .unwrap();

        assert!(matches!(outcome, UpdateOutcome::Updated { .. }));
        assert_eq!(store.writes.len(), 1);
        let bytes = &store.writes[0].4;
        assert_eq!(bytes.len(), original.len());
        assert_eq!(bytes[..4], [0, 0, 0, 0]);
        assert_eq!(bytes[4..], original[4..]);
        assert_eq!(bytes[RECORD_SIZE..], [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_truncated_property_reports_field() {
        let mut bytes = sample_with_flags(0xb0, 3);
        bytes.truncate(71);
        let mut store = FakeStore::with_bytes(bytes);
        let err = update_size_hints(
            &mut store,
            1,
            &PropertyConfig::default(),
            &UpdateConfig::default(),
        )
        .unwrap_err();

        assert!(format!("{:#}", err).contains("win_gravity"));
        assert!(store.writes.is_empty());
    }

    #[test]
    fn test_wrong_format_rejected() {
        let mut store = FakeStore::with_bytes(sample_with_flags(0xb0, 3));
        if let Some(prop) = store.property.as_mut() {
            prop.format = 8;
        }
        let result = update_size_hints(
            &mut store,
            1,
            &PropertyConfig::default(),
            &UpdateConfig::default(),
        );
        assert!(result.is_err());
        assert!(store.writes.is_empty());
    }

    #[test]
    fn test_missing_property_is_error() {
        let mut store = FakeStore {
            property: None,
            writes: Vec::new(),
        };
        let result = update_size_hints(
            &mut store,
            1,
            &PropertyConfig::default(),
            &UpdateConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_pending_clears() {
        let hints = SizeHints::decode(&sample_with_flags(0xb0, 3)).unwrap();
        assert_eq!(
            pending_clears(&hints, SizeHintsFlags::P_ASPECT | SizeHintsFlags::P_RESIZE_INC),
            SizeHintsFlags::P_ASPECT
        );
    }
}
