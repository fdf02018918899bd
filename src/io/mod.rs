use std::path::Path;

pub mod dimacs;
pub mod edge_list;
pub mod matrix_market;

/// The input encodings the batch driver can dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum FormatKind {
    MatrixMarket,
    Dimacs,
}

impl FormatKind {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FormatKind::MatrixMarket => &["mtx"],
            FormatKind::Dimacs => &["clq", "col", "txt", "dimacs"],
        }
    }
}

/// Maps a file name to the reader responsible for it, or `None` for files
/// the batch should skip.
pub fn classify(path: &Path) -> Option<FormatKind> {
    let ext = path.extension()?.to_str()?;
    [FormatKind::MatrixMarket, FormatKind::Dimacs]
        .into_iter()
        .find(|kind| kind.extensions().contains(&ext))
}
