use std::fmt;
use std::io;

/// Error type for catalog loading and content validation
#[derive(Debug)]
pub enum Error {
    /// JSON parse error
    Parse(serde_json::Error),
    /// File I/O error
    Io(io::Error),
    /// Two tile types declare the same id
    DuplicateTileType(u16),
    /// A polygon shape has fewer than 3 vertices
    DegeneratePolygon(u16),
    /// A shape leaves the [0, 1] range or has a non-positive extent
    ShapeOutOfRange(u16),
    /// A platform tile declares a shape other than a rect
    UnsupportedPlatformShape(u16),
    /// A placed tile references an id the catalog does not define
    UnknownTileType(u16),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "JSON parse error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::DuplicateTileType(id) => write!(f, "Duplicate tile type id {}", id),
            Error::DegeneratePolygon(id) => write!(f, "Polygon shape of tile type {} has fewer than 3 vertices", id),
            Error::ShapeOutOfRange(id) => write!(f, "Shape of tile type {} leaves the [0, 1] range", id),
            Error::UnsupportedPlatformShape(id) => write!(f, "Platform tile type {} must use a rect shape", id),
            Error::UnknownTileType(id) => write!(f, "Tile type id {} is not defined in the catalog", id),
        }
    }
}

impl std::error::Error for Error {}
