use askama::Template;
use std::fs;
use std::path::Path;

use crate::model::{FieldKind, ModelDescription};
use crate::naming::{go_export_name, to_snake_case};

/// A model field lowered to its Go representation.
///
/// Precomputed once per generation run so the templates only interpolate
/// strings and never branch on [`FieldKind`] themselves.
#[derive(Debug, Clone)]
pub struct GoField {
    /// Exported Go identifier (e.g. `SpotId`)
    pub go_name: String,
    /// Original field name, kept in the json tag (e.g. `spotId`)
    pub json_name: String,
    /// Go type in the model struct (`string`, `int`, `time.Time`)
    pub go_type: String,
    /// Pointer type in the create/update request (`*string`, ...)
    pub req_type: String,
    /// Expression converting `item.<go_name>` to the response string
    pub mapper_expr: String,
}

impl GoField {
    fn new(name: &str, kind: FieldKind) -> Self {
        let go_name = go_export_name(name);
        let (go_type, mapper_expr) = match kind {
            FieldKind::Str => ("string", format!("item.{go_name}")),
            FieldKind::Int => ("int", format!("strconv.Itoa(item.{go_name})")),
            FieldKind::Date => ("time.Time", format!("item.{go_name}.Format(time.RFC3339)")),
        };
        GoField {
            go_name,
            json_name: name.to_string(),
            go_type: go_type.to_string(),
            req_type: format!("*{go_type}"),
            mapper_expr,
        }
    }
}

/// Everything the seven file templates need, derived from one parsed model.
#[derive(Debug, Clone)]
pub struct PackageView {
    /// Go package / directory name (`to_snake_case` of the type name)
    pub package: String,
    /// Declared type name (e.g. `Broker`)
    pub name: String,
    /// Lowercased type name used in error strings and doc comments
    pub name_lower: String,
    /// Go module path used in generated import statements
    pub module: String,
    /// Fields lowered to Go form, declaration order
    pub fields: Vec<GoField>,
    /// Any integer field present (mapper needs `strconv`)
    pub has_int: bool,
    /// Any date field present (model/reqres/mapper need `time`)
    pub has_date: bool,
}

impl PackageView {
    pub fn new(desc: &ModelDescription, module: &str) -> Self {
        let fields: Vec<GoField> = desc
            .fields
            .iter()
            .map(|f| GoField::new(&f.name, f.kind))
            .collect();
        PackageView {
            package: to_snake_case(&desc.name),
            name: desc.name.clone(),
            name_lower: desc.name.to_lowercase(),
            module: module.to_string(),
            has_int: desc.fields.iter().any(|f| f.kind == FieldKind::Int),
            has_date: desc.fields.iter().any(|f| f.kind == FieldKind::Date),
            fields,
        }
    }
}

/// Template data for model.go (the GORM entity struct)
#[derive(Template)]
#[template(path = "model.go.txt")]
pub struct ModelGoTemplate {
    pub package: String,
    pub name: String,
    pub has_date: bool,
    pub fields: Vec<GoField>,
}

/// Template data for reqres.go (request/response shapes)
#[derive(Template)]
#[template(path = "reqres.go.txt")]
pub struct ReqResGoTemplate {
    pub package: String,
    pub name: String,
    pub has_date: bool,
    pub fields: Vec<GoField>,
}

/// Template data for mapper.go (entity → response conversion)
#[derive(Template)]
#[template(path = "mapper.go.txt")]
pub struct MapperGoTemplate {
    pub package: String,
    pub name: String,
    pub has_int: bool,
    pub has_date: bool,
    pub fields: Vec<GoField>,
}

/// Template data for repository.go (GORM persistence layer)
#[derive(Template)]
#[template(path = "repository.go.txt")]
pub struct RepositoryGoTemplate {
    pub package: String,
    pub name: String,
    pub name_lower: String,
    pub module: String,
}

/// Template data for service.go (service layer delegating to the repository)
#[derive(Template)]
#[template(path = "service.go.txt")]
pub struct ServiceGoTemplate {
    pub package: String,
    pub name: String,
    pub module: String,
}

/// Template data for handler.go (gin HTTP handlers)
#[derive(Template)]
#[template(path = "handler.go.txt")]
pub struct HandlerGoTemplate {
    pub package: String,
    pub name: String,
    pub name_lower: String,
    pub module: String,
    pub fields: Vec<GoField>,
}

/// Template data for endpoints.go (gin route group registration)
#[derive(Template)]
#[template(path = "endpoints.go.txt")]
pub struct EndpointsGoTemplate {
    pub package: String,
    pub name: String,
}

fn write_rendered(path: &Path, rendered: String, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        println!("⚠️  Skipping existing file: {path:?}");
        return Ok(false);
    }
    fs::write(path, rendered)?;
    println!("✅ Generated {path:?}");
    Ok(true)
}

/// Write model.go for the package. Returns `false` when an existing file was
/// left alone because `force` was not set; same for the other writers below.
pub fn write_model_go(path: &Path, view: &PackageView, force: bool) -> anyhow::Result<bool> {
    let rendered = ModelGoTemplate {
        package: view.package.clone(),
        name: view.name.clone(),
        has_date: view.has_date,
        fields: view.fields.clone(),
    }
    .render()?;
    write_rendered(path, rendered, force)
}

/// Write reqres.go (Create<Name>Request + Response structs).
pub fn write_reqres_go(path: &Path, view: &PackageView, force: bool) -> anyhow::Result<bool> {
    let rendered = ReqResGoTemplate {
        package: view.package.clone(),
        name: view.name.clone(),
        has_date: view.has_date,
        fields: view.fields.clone(),
    }
    .render()?;
    write_rendered(path, rendered, force)
}

/// Write mapper.go (To<Name>Response).
pub fn write_mapper_go(path: &Path, view: &PackageView, force: bool) -> anyhow::Result<bool> {
    let rendered = MapperGoTemplate {
        package: view.package.clone(),
        name: view.name.clone(),
        has_int: view.has_int,
        has_date: view.has_date,
        fields: view.fields.clone(),
    }
    .render()?;
    write_rendered(path, rendered, force)
}

/// Write repository.go (GORM CRUD methods).
pub fn write_repository_go(path: &Path, view: &PackageView, force: bool) -> anyhow::Result<bool> {
    let rendered = RepositoryGoTemplate {
        package: view.package.clone(),
        name: view.name.clone(),
        name_lower: view.name_lower.clone(),
        module: view.module.clone(),
    }
    .render()?;
    write_rendered(path, rendered, force)
}

/// Write service.go.
pub fn write_service_go(path: &Path, view: &PackageView, force: bool) -> anyhow::Result<bool> {
    let rendered = ServiceGoTemplate {
        package: view.package.clone(),
        name: view.name.clone(),
        module: view.module.clone(),
    }
    .render()?;
    write_rendered(path, rendered, force)
}

/// Write handler.go (gin handlers with swagger doc comments).
pub fn write_handler_go(path: &Path, view: &PackageView, force: bool) -> anyhow::Result<bool> {
    let rendered = HandlerGoTemplate {
        package: view.package.clone(),
        name: view.name.clone(),
        name_lower: view.name_lower.clone(),
        module: view.module.clone(),
        fields: view.fields.clone(),
    }
    .render()?;
    write_rendered(path, rendered, force)
}

/// Write endpoints.go (route registration).
pub fn write_endpoints_go(path: &Path, view: &PackageView, force: bool) -> anyhow::Result<bool> {
    let rendered = EndpointsGoTemplate {
        package: view.package.clone(),
        name: view.name.clone(),
    }
    .render()?;
    write_rendered(path, rendered, force)
}
