use std::{fs, path::Path};

use log::info;

use super::{extract::extract, parser::parse_lines, resolve::resolve};
use crate::{
    catalog::Catalog,
    core::{ConvertError, ErrorKind},
    dbml,
};

pub const SOURCE_EXTENSION: &str = "sql";

/// Runs the whole conversion pipeline over one source text.
#[derive(Debug, Default)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Self
    }

    /// Parse, extract and resolve `source` into a schema model.
    pub fn build_catalog(&self, source: &str) -> Result<Catalog, ConvertError> {
        let lines = parse_lines(source)?;

        let mut catalog = extract(&lines);
        resolve(&mut catalog, &lines);

        Ok(catalog)
    }

    pub fn convert(&self, source: &str) -> Result<String, ConvertError> {
        let catalog = self.build_catalog(source)?;
        info!(
            "Converted {} table(s), {} column(s)",
            catalog.tables.len(),
            catalog.columns.len()
        );

        Ok(dbml::emit(&catalog))
    }

    /// Read and convert a `.sql` file. The extension is checked before the
    /// file is opened.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<String, ConvertError> {
        let path = path.as_ref();
        check_input_path(path)?;

        info!("Converting {}", path.display());
        let source = fs::read_to_string(path)?;
        self.convert(&source)
    }
}

pub fn check_input_path(path: &Path) -> Result<(), ConvertError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(SOURCE_EXTENSION) => Ok(()),
        _ => Err(ConvertError::new(
            ErrorKind::InputError,
            format!("{} must be a .{} file", path.display(), SOURCE_EXTENSION),
        )),
    }
}
