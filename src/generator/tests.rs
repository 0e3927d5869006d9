#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::model::{FieldKind, FieldSpec, ModelDescription};
use askama::Template;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("gen_test_{}_{}", std::process::id(), nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn broker() -> ModelDescription {
    ModelDescription {
        name: "Broker".to_string(),
        fields: vec![
            FieldSpec {
                name: "id".to_string(),
                kind: FieldKind::Int,
            },
            FieldSpec {
                name: "persianName".to_string(),
                kind: FieldKind::Str,
            },
            FieldSpec {
                name: "registeredAt".to_string(),
                kind: FieldKind::Date,
            },
        ],
    }
}

#[test]
fn test_package_view_naming() {
    let view = PackageView::new(
        &ModelDescription {
            name: "GroupHall".to_string(),
            fields: vec![],
        },
        "ibrokers_service",
    );
    assert_eq!(view.package, "group_hall");
    assert_eq!(view.name, "GroupHall");
    assert_eq!(view.name_lower, "grouphall");
    assert!(!view.has_int);
    assert!(!view.has_date);
}

#[test]
fn test_go_field_lowering() {
    let view = PackageView::new(&broker(), "ibrokers_service");
    let id = &view.fields[0];
    assert_eq!(id.go_name, "Id");
    assert_eq!(id.json_name, "id");
    assert_eq!(id.go_type, "int");
    assert_eq!(id.req_type, "*int");
    assert_eq!(id.mapper_expr, "strconv.Itoa(item.Id)");

    let name = &view.fields[1];
    assert_eq!(name.go_name, "PersianName");
    assert_eq!(name.go_type, "string");
    assert_eq!(name.mapper_expr, "item.PersianName");

    let at = &view.fields[2];
    assert_eq!(at.go_type, "time.Time");
    assert_eq!(at.req_type, "*time.Time");
    assert_eq!(at.mapper_expr, "item.RegisteredAt.Format(time.RFC3339)");
}

#[test]
fn test_model_template_renders_struct() {
    let view = PackageView::new(&broker(), "ibrokers_service");
    let rendered = ModelGoTemplate {
        package: view.package.clone(),
        name: view.name.clone(),
        has_date: view.has_date,
        fields: view.fields.clone(),
    }
    .render()
    .unwrap();
    assert!(rendered.starts_with("package broker\n"));
    assert!(rendered.contains("import \"time\""));
    assert!(rendered.contains("type Broker struct {"));
    assert!(rendered.contains("Id int `json:\"id\"`"));
    assert!(rendered.contains("PersianName string `json:\"persianName\"`"));
    assert!(rendered.contains("RegisteredAt time.Time `json:\"registeredAt\"`"));
}

#[test]
fn test_model_template_skips_time_import_without_dates() {
    let desc = ModelDescription {
        name: "Tag".to_string(),
        fields: vec![FieldSpec {
            name: "label".to_string(),
            kind: FieldKind::Str,
        }],
    };
    let view = PackageView::new(&desc, "ibrokers_service");
    let rendered = ModelGoTemplate {
        package: view.package.clone(),
        name: view.name.clone(),
        has_date: view.has_date,
        fields: view.fields.clone(),
    }
    .render()
    .unwrap();
    assert!(!rendered.contains("import"));
}

#[test]
fn test_mapper_template_imports() {
    let view = PackageView::new(&broker(), "ibrokers_service");
    let rendered = MapperGoTemplate {
        package: view.package.clone(),
        name: view.name.clone(),
        has_int: view.has_int,
        has_date: view.has_date,
        fields: view.fields.clone(),
    }
    .render()
    .unwrap();
    assert!(rendered.contains("\"strconv\""));
    assert!(rendered.contains("\"time\""));
    assert!(rendered.contains("func ToBrokerResponse(item Broker) Response {"));
    assert!(rendered.contains("Id: strconv.Itoa(item.Id),"));
}

#[test]
fn test_repository_template_uses_module_path() {
    let rendered = RepositoryGoTemplate {
        package: "broker".to_string(),
        name: "Broker".to_string(),
        name_lower: "broker".to_string(),
        module: "tourino".to_string(),
    }
    .render()
    .unwrap();
    assert!(rendered.contains("\"tourino/pkg/helper\""));
    assert!(rendered.contains("func (r *Repository) FindBrokerById(id int) (Broker, error) {"));
    assert!(rendered.contains("errors.New(\"not found broker\")"));
}

#[test]
fn test_write_skips_existing_without_force() {
    let dir = temp_dir();
    let path = dir.join("model.go");
    let view = PackageView::new(&broker(), "ibrokers_service");

    assert!(write_model_go(&path, &view, false).unwrap());
    fs::write(&path, "edited by hand").unwrap();
    assert!(!write_model_go(&path, &view, false).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "edited by hand");

    assert!(write_model_go(&path, &view, true).unwrap());
    assert!(fs::read_to_string(&path).unwrap().starts_with("package broker"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_generate_package_writes_all_files() {
    let dir = temp_dir();
    let opts = GeneratorOptions {
        output: dir.clone(),
        module: "ibrokers_service".to_string(),
        force: false,
    };
    let package_dir = generate_package(&broker(), &opts).unwrap();
    assert_eq!(package_dir, dir.join("broker"));
    for file in [
        "model.go",
        "reqres.go",
        "mapper.go",
        "repository.go",
        "service.go",
        "handler.go",
        "endpoints.go",
    ] {
        assert!(package_dir.join(file).exists(), "missing {file}");
    }
    let _ = fs::remove_dir_all(&dir);
}
