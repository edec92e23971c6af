//! Shape catalog - the seven immutable piece templates.
//!
//! A template is a list of filled-cell offsets (row, col) relative to its
//! origin, mirroring how the piece is stamped onto the board. Templates are
//! read-only; the piece in play exists only as the `Active` cells on the
//! board.

use crate::types::ShapeKind;

/// Offset of a single filled cell relative to the template origin.
pub type CellOffset = (usize, usize);

/// Every template fills exactly this many cells.
pub const TEMPLATE_CELLS: usize = 4;

/// An immutable piece template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    kind: ShapeKind,
    offsets: [CellOffset; TEMPLATE_CELLS],
}

impl Template {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn offsets(&self) -> &[CellOffset; TEMPLATE_CELLS] {
        &self.offsets
    }
}

// Vertical bar.
const I: Template = Template {
    kind: ShapeKind::I,
    offsets: [(0, 0), (1, 0), (2, 0), (3, 0)],
};

// 2x2 block.
const O: Template = Template {
    kind: ShapeKind::O,
    offsets: [(0, 0), (0, 1), (1, 0), (1, 1)],
};

// .##
// ##.
const S: Template = Template {
    kind: ShapeKind::S,
    offsets: [(0, 1), (0, 2), (1, 0), (1, 1)],
};

// ##.
// .##
const Z: Template = Template {
    kind: ShapeKind::Z,
    offsets: [(0, 0), (0, 1), (1, 1), (1, 2)],
};

// #.
// #.
// ##
const L: Template = Template {
    kind: ShapeKind::L,
    offsets: [(0, 0), (1, 0), (2, 0), (2, 1)],
};

// .#
// .#
// ##
const J: Template = Template {
    kind: ShapeKind::J,
    offsets: [(0, 1), (1, 1), (2, 0), (2, 1)],
};

// ###
// .#.
const T: Template = Template {
    kind: ShapeKind::T,
    offsets: [(0, 0), (0, 1), (0, 2), (1, 1)],
};

/// Get the immutable template for a shape kind.
pub fn template(kind: ShapeKind) -> &'static Template {
    match kind {
        ShapeKind::I => &I,
        ShapeKind::O => &O,
        ShapeKind::S => &S,
        ShapeKind::Z => &Z,
        ShapeKind::L => &L,
        ShapeKind::J => &J,
        ShapeKind::T => &T,
    }
}
