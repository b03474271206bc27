use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::{ser::PrettyFormatter, Value};

use crate::Error;

/// Version written to `language_info` when none is given.
pub const DEFAULT_VERSION: &str = "latest";

const LANGUAGE: &str = "julia";
const FILE_EXTENSION: &str = ".jl";
const MIMETYPE: &str = "application/julia";
const INDENT: &[u8] = b"    ";

/// The `metadata.kernelspec` object of a notebook.
///
/// Field order is the key order on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KernelSpec {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

impl KernelSpec {
    /// A Julia kernelspec whose display name and name are both `kernel_name`.
    pub fn julia(kernel_name: &str) -> Self {
        KernelSpec {
            display_name: kernel_name.to_string(),
            language: LANGUAGE.to_string(),
            name: kernel_name.to_string(),
        }
    }
}

/// The `metadata.language_info` object of a notebook.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    pub file_extension: String,
    pub mimetype: String,
    pub name: String,
    pub version: String,
}

impl LanguageInfo {
    pub fn julia(version: &str) -> Self {
        LanguageInfo {
            file_extension: FILE_EXTENSION.to_string(),
            mimetype: MIMETYPE.to_string(),
            name: LANGUAGE.to_string(),
            version: version.to_string(),
        }
    }
}

/// Points the notebook at `path` to a Julia kernel named `kernel_name`, recording `version` in its
/// language info, and overwrites the file.
///
/// The file is read and validated in full before it is opened for writing, so a missing,
/// malformed or metadata-less notebook is left untouched.
pub fn set_kernel_metadata(path: &Path, kernel_name: &str, version: &str) -> Result<(), Error> {
    let mut notebook = load_notebook(path)?;
    patch_kernel_metadata(
        &mut notebook,
        &KernelSpec::julia(kernel_name),
        &LanguageInfo::julia(version),
    )?;
    save_notebook(path, &notebook)
}

pub fn load_notebook(path: &Path) -> Result<Value, Error> {
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::ReadFile {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    serde_json::from_str(&text).map_err(|err| Error::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Replaces `metadata.kernelspec` and `metadata.language_info` wholesale. Existing keys keep their
/// position in `metadata`, new ones are appended.
pub fn patch_kernel_metadata(
    notebook: &mut Value,
    kernelspec: &KernelSpec,
    language_info: &LanguageInfo,
) -> Result<(), Error> {
    let metadata = notebook
        .as_object_mut()
        .ok_or(Error::Schema("top level is not a json object"))?
        .get_mut("metadata")
        .ok_or(Error::Schema("no `metadata` key"))?
        .as_object_mut()
        .ok_or(Error::Schema("`metadata` is not a json object"))?;

    metadata.insert("kernelspec".to_string(), serde_json::to_value(kernelspec)?);
    metadata.insert(
        "language_info".to_string(),
        serde_json::to_value(language_info)?,
    );
    Ok(())
}

/// Overwrites `path` with `notebook`, indented by four spaces and without a trailing newline.
pub fn save_notebook(path: &Path, notebook: &Value) -> Result<(), Error> {
    let buf = to_string_indented(notebook)?;
    fs::write(path, buf).map_err(|err| Error::WriteFile {
        path: path.to_path_buf(),
        source: err,
    })
}

fn to_string_indented(notebook: &Value) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    notebook.serialize(&mut ser)?;
    Ok(buf)
}
