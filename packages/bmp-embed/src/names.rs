//! Identifier and path derivation for the generated files.

use std::path::{Path, PathBuf};

/// Default extension of the definition file.
pub const DEFAULT_DEFINITION_EXT: &str = "cpp";

/// Identifiers emitted for one embedded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNames {
    /// Input file name with its directory and final extension removed.
    pub stem: String,
    /// Name of the byte array, `<stem>_bmp`.
    pub array: String,
    /// Name of the size constant, `<stem>_bmp_size`.
    pub size: String,
}

impl SymbolNames {
    /// Build the names for an already derived stem.
    pub fn from_stem(stem: impl Into<String>) -> Self {
        let stem = stem.into();

        Self {
            array: format!("{stem}_bmp"),
            size: format!("{stem}_bmp_size"),
            stem,
        }
    }

    /// Derive the names from an input path. Only the final extension is
    /// stripped, so `My.File.bmp` yields the stem `My.File`.
    pub fn from_input_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_stem(stem)
    }
}

/// Path of the definition file that accompanies `declaration`: the same
/// path with its extension replaced (or added) by `definition_ext`.
pub fn definition_path_for(declaration: &Path, definition_ext: &str) -> PathBuf {
    declaration.with_extension(definition_ext)
}

/// File name used in the definition's `#include` line.
pub fn include_name(declaration: &Path) -> String {
    declaration
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| declaration.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_file_name() {
        let names = SymbolNames::from_input_path(Path::new("assets/logo.bmp"));
        assert_eq!(names.stem, "logo");
        assert_eq!(names.array, "logo_bmp");
        assert_eq!(names.size, "logo_bmp_size");
    }

    #[test]
    fn only_final_extension_is_stripped() {
        let names = SymbolNames::from_input_path(Path::new("My.File.bmp"));
        assert_eq!(names.stem, "My.File");
        assert_eq!(names.array, "My.File_bmp");
        assert_eq!(names.size, "My.File_bmp_size");
    }

    #[test]
    fn extensionless_input_keeps_whole_name() {
        let names = SymbolNames::from_input_path(Path::new("/tmp/cursor"));
        assert_eq!(names.array, "cursor_bmp");
    }

    #[test]
    fn definition_path_swaps_extension() {
        assert_eq!(
            definition_path_for(Path::new("src/logo.hpp"), "cpp"),
            PathBuf::from("src/logo.cpp")
        );
        assert_eq!(
            definition_path_for(Path::new("src/logo.h"), "cc"),
            PathBuf::from("src/logo.cc")
        );
    }

    #[test]
    fn definition_path_without_extension() {
        assert_eq!(
            definition_path_for(Path::new("out/logo"), "cpp"),
            PathBuf::from("out/logo.cpp")
        );
    }

    #[test]
    fn include_uses_base_name() {
        assert_eq!(include_name(Path::new("kernel/src/logo.hpp")), "logo.hpp");
    }
}
