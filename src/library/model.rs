/// One listed file: its name plus its full raw contents.
///
/// Entries are built fresh on every listing request and carry no persisted
/// identity.
#[derive(Clone)]
pub struct TrackEntry {
    pub name: String,
    pub data: Vec<u8>,
}

impl TrackEntry {
    /// Size of the loaded contents in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl std::fmt::Debug for TrackEntry {
    // Skip the byte payload; a track can be tens of megabytes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackEntry")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish()
    }
}
