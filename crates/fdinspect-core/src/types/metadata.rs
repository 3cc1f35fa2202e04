use serde::{Deserialize, Serialize};
use std::fs::Metadata;
use std::io::{self, Write};
use std::os::unix::fs::MetadataExt;

/// Point-in-time copy of a file's `stat` record.
///
/// Nothing ties the snapshot to the file once captured; it goes stale as
/// soon as the file changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Device the file resides on
    pub dev: u64,
    /// Inode number
    pub ino: u64,
    /// File type and permission bits
    pub mode: u32,
    /// Number of hard links
    pub nlink: u64,
    /// Owner user id
    pub uid: u32,
    /// Owner group id
    pub gid: u32,
    /// Size in bytes
    pub size: u64,
    /// Preferred I/O block size
    pub blksize: u64,
    /// Number of 512-byte blocks allocated
    pub blocks: u64,
    /// Last modification, seconds since the epoch
    pub mtime: i64,
    /// Last access, seconds since the epoch
    pub atime: i64,
    /// Last status change, seconds since the epoch
    pub ctime: i64,
}

impl FileMetadata {
    /// Field labels in report order.
    pub const LABELS: [&'static str; 12] = [
        "dev", "ino", "mode", "nlink", "uid", "gid", "size", "blksize", "blocks", "mtime",
        "atime", "ctime",
    ];

    /// Labeled values in report order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, i128); 12] {
        let values = [
            i128::from(self.dev),
            i128::from(self.ino),
            i128::from(self.mode),
            i128::from(self.nlink),
            i128::from(self.uid),
            i128::from(self.gid),
            i128::from(self.size),
            i128::from(self.blksize),
            i128::from(self.blocks),
            i128::from(self.mtime),
            i128::from(self.atime),
            i128::from(self.ctime),
        ];

        std::array::from_fn(|i| (Self::LABELS[i], values[i]))
    }

    /// Write one `"<label>: <value>"` line per field.
    pub fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (label, value) in self.fields() {
            writeln!(out, "{label}: {value}")?;
        }
        Ok(())
    }
}

impl From<&Metadata> for FileMetadata {
    fn from(meta: &Metadata) -> Self {
        Self {
            dev: meta.dev(),
            ino: meta.ino(),
            mode: meta.mode(),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            blksize: meta.blksize(),
            blocks: meta.blocks(),
            mtime: meta.mtime(),
            atime: meta.atime(),
            ctime: meta.ctime(),
        }
    }
}
