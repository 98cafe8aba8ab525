/// What currently occupies a destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Missing,
    Directory,
    /// A regular file, symlink to a file, or anything else that is not a directory.
    File,
}

/// Outcome of checking whether a destination may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Proceed,
    Declined,
}
