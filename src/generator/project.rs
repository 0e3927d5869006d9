use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::model::ModelDescription;

use super::templates::{
    write_endpoints_go, write_handler_go, write_mapper_go, write_model_go, write_repository_go,
    write_reqres_go, write_service_go, PackageView,
};

/// Options for one generation run.
///
/// The output directory is always explicit; there is no process-wide location
/// setting. `module` is the Go module path stamped into generated import
/// statements (`<module>/pkg/...`).
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Directory under which the package directory is created
    pub output: PathBuf,
    /// Go module path for generated imports
    pub module: String,
    /// Overwrite existing files instead of skipping them
    pub force: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            output: PathBuf::from("."),
            module: "ibrokers_service".to_string(),
            force: false,
        }
    }
}

/// Generate the full CRUD package for a parsed model.
///
/// Creates `<output>/<package>/` (package name is the snake_case form of the
/// model name) and writes the seven Go files: model, reqres, mapper,
/// repository, service, handler, endpoints. Existing files are skipped unless
/// `force` is set. Returns the package directory.
pub fn generate_package(
    desc: &ModelDescription,
    opts: &GeneratorOptions,
) -> anyhow::Result<PathBuf> {
    let view = PackageView::new(desc, &opts.module);
    let package_dir = opts.output.join(&view.package);
    fs::create_dir_all(&package_dir)
        .with_context(|| format!("Failed to create package dir {package_dir:?}"))?;

    write_model_go(&package_dir.join("model.go"), &view, opts.force)?;
    write_reqres_go(&package_dir.join("reqres.go"), &view, opts.force)?;
    write_mapper_go(&package_dir.join("mapper.go"), &view, opts.force)?;
    write_repository_go(&package_dir.join("repository.go"), &view, opts.force)?;
    write_service_go(&package_dir.join("service.go"), &view, opts.force)?;
    write_handler_go(&package_dir.join("handler.go"), &view, opts.force)?;
    write_endpoints_go(&package_dir.join("endpoints.go"), &view, opts.force)?;

    Ok(package_dir)
}
