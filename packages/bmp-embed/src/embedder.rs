//! Read, render and write pipeline.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::{
    definition_path_for, include_name, render_declaration, render_definition,
    Artifact, EmbedError, SymbolNames, DEFAULT_DEFINITION_EXT,
};

/// How the two output files are committed to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write the declaration file, then the definition file. A failure on
    /// the second write leaves the first one in place.
    #[default]
    Sequential,
    /// Stage both files as temporaries next to their destinations, then
    /// rename them into place. Nothing at the destinations changes unless
    /// both files were staged.
    Staged,
}

/// Settings for an [`Embedder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Extension swapped onto the declaration path to get the definition
    /// path.
    pub definition_ext: String,
    /// How both files are committed to disk.
    pub write_mode: WriteMode,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            definition_ext: DEFAULT_DEFINITION_EXT.to_string(),
            write_mode: WriteMode::default(),
        }
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub declaration_path: PathBuf,
    pub definition_path: PathBuf,
    pub names: SymbolNames,
    pub byte_count: usize,
}

/// Rendered contents of both files, ready to be written.
struct Rendered {
    declaration: String,
    definition: String,
}

/// Converts BMP files into declaration/definition pairs.
#[derive(Debug, Clone, Default)]
pub struct Embedder {
    options: EmbedOptions,
}

impl Embedder {
    /// Create an embedder with the given options.
    pub fn new(options: EmbedOptions) -> Self {
        Self { options }
    }

    /// Get the options this embedder was created with.
    pub fn options(&self) -> &EmbedOptions {
        &self.options
    }

    /// Embed the bytes of `input` into the declaration file at `output` and
    /// its companion definition file.
    pub fn convert(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<Conversion, EmbedError> {
        let definition_path =
            definition_path_for(output, &self.options.definition_ext);
        if definition_path == output {
            return Err(EmbedError::PathConflict {
                path: definition_path,
            });
        }

        let bytes = fs::read(input).map_err(|source| EmbedError::InputRead {
            path: input.to_path_buf(),
            source,
        })?;

        if u32::try_from(bytes.len()).is_err() {
            return Err(EmbedError::InputTooLarge {
                path: input.to_path_buf(),
                len: bytes.len(),
            });
        }

        debug!("Read {} bytes from {:?}", bytes.len(), input);

        let names = SymbolNames::from_input_path(input);
        let rendered = Rendered {
            declaration: render_declaration(input, &names),
            definition: render_definition(
                input,
                &include_name(output),
                &names,
                &bytes,
            ),
        };

        match self.options.write_mode {
            WriteMode::Sequential => {
                write_sequential(&rendered, output, &definition_path)?
            }
            WriteMode::Staged => {
                write_staged(&rendered, output, &definition_path)?
            }
        }

        info!(
            "Embedded {:?} as {} ({} bytes)",
            input,
            names.array,
            bytes.len()
        );

        Ok(Conversion {
            declaration_path: output.to_path_buf(),
            definition_path,
            names,
            byte_count: bytes.len(),
        })
    }
}

/// Convert with the default options.
pub fn convert(input: &Path, output: &Path) -> Result<Conversion, EmbedError> {
    Embedder::default().convert(input, output)
}

fn write_error(
    artifact: Artifact,
    path: &Path,
) -> impl FnOnce(std::io::Error) -> EmbedError + '_ {
    move |source| EmbedError::OutputWrite {
        artifact,
        path: path.to_path_buf(),
        source,
    }
}

fn write_file(
    artifact: Artifact,
    path: &Path,
    contents: &str,
) -> Result<(), EmbedError> {
    let mut file =
        fs::File::create(path).map_err(write_error(artifact, path))?;

    file.write_all(contents.as_bytes())
        .map_err(write_error(artifact, path))?;

    file.flush().map_err(write_error(artifact, path))?;

    debug!("Wrote {} file {:?}", artifact, path);
    Ok(())
}

fn write_sequential(
    rendered: &Rendered,
    declaration_path: &Path,
    definition_path: &Path,
) -> Result<(), EmbedError> {
    write_file(Artifact::Declaration, declaration_path, &rendered.declaration)?;
    write_file(Artifact::Definition, definition_path, &rendered.definition)
}

/// Temporary files are created with the same umask-filtered mode a plain
/// `File::create` would give them, instead of tempfile's owner-only default.
fn staging_builder() -> Builder<'static, 'static> {
    let mut builder = Builder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    builder
}

/// Write `contents` into a temporary file in the destination's directory.
fn stage(
    artifact: Artifact,
    path: &Path,
    contents: &str,
) -> Result<NamedTempFile, EmbedError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = staging_builder()
        .tempfile_in(dir)
        .map_err(write_error(artifact, path))?;

    // An overwritten destination keeps its mode, as with a sequential write.
    if let Ok(metadata) = fs::metadata(path) {
        file.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_error(artifact, path))?;
    }

    file.write_all(contents.as_bytes())
        .map_err(write_error(artifact, path))?;

    file.as_file()
        .sync_all()
        .map_err(write_error(artifact, path))?;

    debug!("Staged {} file for {:?} at {:?}", artifact, path, file.path());
    Ok(file)
}

fn write_staged(
    rendered: &Rendered,
    declaration_path: &Path,
    definition_path: &Path,
) -> Result<(), EmbedError> {
    // Both files are staged before either destination is touched.
    let declaration =
        stage(Artifact::Declaration, declaration_path, &rendered.declaration)?;
    let definition =
        stage(Artifact::Definition, definition_path, &rendered.definition)?;

    definition.persist(definition_path).map_err(|err| {
        write_error(Artifact::Definition, definition_path)(err.error)
    })?;
    declaration.persist(declaration_path).map_err(|err| {
        write_error(Artifact::Declaration, declaration_path)(err.error)
    })?;

    Ok(())
}
