//! Window Property Transport
//!
//! Fetching and storing raw window properties over an X11 connection.

use anyhow::{Context, Result, bail};
use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, AtomEnum, ConnectionExt, PropMode, Window};
use x11rb::rust_connection::RustConnection;

/// Raw property contents as returned by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Bits per item: 8, 16 or 32
    pub format: u8,
    pub type_name: String,
    pub bytes: Vec<u8>,
}

/// Read and write named window properties
pub trait PropertyStore {
    fn fetch(&mut self, window: Window, name: &str) -> Result<Property>;

    fn write(
        &mut self,
        window: Window,
        format: u8,
        name: &str,
        type_name: &str,
        bytes: &[u8],
    ) -> Result<()>;
}

/// Property store backed by an X server connection
pub struct X11PropertyStore {
    conn: RustConnection,
}

impl X11PropertyStore {
    /// Connect to the X server named by `$DISPLAY`
    pub fn connect() -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(None)
            .context("Failed to connect to X server")?;
        debug!("Connected to X server, screen {}", screen_num);
        Ok(Self { conn })
    }

    fn intern(&self, name: &str) -> Result<Atom> {
        let atom = self
            .conn
            .intern_atom(false, name.as_bytes())?
            .reply()
            .with_context(|| format!("Failed to intern atom {}", name))?
            .atom;
        Ok(atom)
    }

    fn atom_name(&self, atom: Atom) -> Result<String> {
        let reply = self
            .conn
            .get_atom_name(atom)?
            .reply()
            .with_context(|| format!("Failed to get name of atom {}", atom))?;
        Ok(String::from_utf8_lossy(&reply.name).into_owned())
    }
}

impl PropertyStore for X11PropertyStore {
    fn fetch(&mut self, window: Window, name: &str) -> Result<Property> {
        let property = self.intern(name)?;
        let reply = self
            .conn
            .get_property(false, window, property, AtomEnum::ANY, 0, u32::MAX)?
            .reply()
            .with_context(|| format!("Failed to get {} of window 0x{:x}", name, window))?;

        if reply.type_ == u32::from(AtomEnum::NONE) {
            bail!("Window 0x{:x} has no {} property", window, name);
        }

        let type_name = self.atom_name(reply.type_)?;
        debug!(
            "Fetched {} of window 0x{:x}: type {}, format {}, {} bytes",
            name,
            window,
            type_name,
            reply.format,
            reply.value.len()
        );

        Ok(Property {
            format: reply.format,
            type_name,
            bytes: reply.value,
        })
    }

    fn write(
        &mut self,
        window: Window,
        format: u8,
        name: &str,
        type_name: &str,
        bytes: &[u8],
    ) -> Result<()> {
        if !matches!(format, 8 | 16 | 32) {
            bail!("Invalid property format {}", format);
        }
        let item_size = usize::from(format / 8);
        if bytes.len() % item_size != 0 {
            bail!(
                "{} bytes is not a whole number of {}-bit items",
                bytes.len(),
                format
            );
        }

        let property = self.intern(name)?;
        let type_ = self.intern(type_name)?;
        let data_len = u32::try_from(bytes.len() / item_size)
            .context("Property value too large")?;

        self.conn
            .change_property(PropMode::REPLACE, window, property, type_, format, data_len, bytes)?
            .check()
            .with_context(|| format!("Failed to change {} of window 0x{:x}", name, window))?;
        self.conn.flush()?;

        debug!("Wrote {} bytes to {} of window 0x{:x}", bytes.len(), name, window);
        Ok(())
    }
}
