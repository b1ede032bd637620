use super::*;

fn item(id: &str, name: &str, category: &str) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        image_seed: 1,
    }
}

fn categories(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|c| (*c).to_string()).collect()
}

#[test]
fn builtin_catalog_passes_validation() {
    let builtin = Catalog::builtin();
    assert!(!builtin.items().is_empty());
    validate_catalog(&builtin).expect("built-in catalog should be valid");
}

#[test]
fn category_labels_start_with_all() {
    let catalog = Catalog::new(
        categories(&["Grains", "Spices"]),
        vec![item("1", "Idli Rice", "Grains")],
    )
    .unwrap();
    assert_eq!(catalog.category_labels(), vec!["All", "Grains", "Spices"]);
}

#[test]
fn is_known_category_accepts_all_and_declared() {
    let catalog = Catalog::builtin();
    assert!(catalog.is_known_category("All"));
    assert!(catalog.is_known_category("Spices"));
    assert!(!catalog.is_known_category("spices"));
    assert!(!catalog.is_known_category("Frozen"));
}

#[test]
fn find_by_id_then_name() {
    let catalog = Catalog::new(
        categories(&["Grains", "Spices"]),
        vec![
            item("idli", "Idli Rice", "Grains"),
            item("sambar", "Sambar Powder", "Spices"),
        ],
    )
    .unwrap();
    assert_eq!(catalog.find("sambar").unwrap().name, "Sambar Powder");
    assert_eq!(catalog.find("idli rice").unwrap().id, "idli");
    assert_eq!(catalog.find("  Sambar Powder ").unwrap().id, "sambar");
    assert!(catalog.find("idli ric").is_none());
}

#[test]
fn image_url_uses_seed() {
    let mut rice = item("1", "Idli Rice", "Grains");
    rice.image_seed = 42;
    assert_eq!(
        rice.image_url(300, 200),
        "https://picsum.photos/seed/42/300/200"
    );
}

#[test]
fn item_serializes_with_camel_case_seed() {
    let json = serde_json::to_value(item("1", "Idli Rice", "Grains")).unwrap();
    assert_eq!(json["imageSeed"], 1);
    assert!(json.get("image_seed").is_none());
}

#[test]
fn validate_rejects_undeclared_category() {
    let err = Catalog::new(
        categories(&["Grains"]),
        vec![item("1", "Sambar Powder", "Spices")],
    )
    .unwrap_err();
    assert!(err.to_string().contains("undeclared category 'Spices'"));
}

#[test]
fn validate_rejects_duplicate_id() {
    let err = Catalog::new(
        categories(&["Grains"]),
        vec![
            item("1", "Idli Rice", "Grains"),
            item("1", "Basmati Rice", "Grains"),
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate item id"));
}

#[test]
fn validate_rejects_duplicate_name_case_insensitively() {
    let err = Catalog::new(
        categories(&["Grains"]),
        vec![
            item("1", "Idli Rice", "Grains"),
            item("2", "IDLI RICE", "Grains"),
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate item name"));
}

#[test]
fn validate_rejects_empty_name() {
    let err = Catalog::new(categories(&["Grains"]), vec![item("1", "  ", "Grains")]).unwrap_err();
    assert!(err.to_string().contains("empty name"));
}

#[test]
fn validate_rejects_empty_id() {
    let err = Catalog::new(categories(&["Grains"]), vec![item("", "Idli Rice", "Grains")])
        .unwrap_err();
    assert!(err.to_string().contains("empty id"));
}

#[test]
fn validate_rejects_reserved_all_category() {
    let err = Catalog::new(categories(&["All", "Grains"]), vec![]).unwrap_err();
    assert!(err.to_string().contains("reserved"));
}

#[test]
fn validate_rejects_duplicate_category() {
    let err = Catalog::new(categories(&["Grains", "Grains"]), vec![]).unwrap_err();
    assert!(err.to_string().contains("duplicate category"));
}

#[test]
fn load_catalog_parses_yaml() {
    let dir = std::env::temp_dir().join(format!("grocer-catalog-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("catalog.yaml");
    std::fs::write(
        &path,
        "categories: [Grains, Spices]\n\
         items:\n\
         \x20 - { id: '1', name: Idli Rice, category: Grains, imageSeed: 7 }\n\
         \x20 - { id: '2', name: Sambar Powder, category: Spices, imageSeed: 8 }\n",
    )
    .unwrap();

    let catalog = load_catalog(&path).expect("catalog should load");
    assert_eq!(catalog.items().len(), 2);
    assert_eq!(catalog.items()[1].image_seed, 8);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_catalog_reports_parse_errors() {
    let dir = std::env::temp_dir().join(format!("grocer-catalog-bad-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("catalog.yaml");
    std::fs::write(&path, "categories: not-a-list\n").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileParse(_)));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_catalog_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("catalog.yaml");
    assert!(
        path.exists(),
        "catalog.yaml missing at {path:?}; required for this test"
    );
    let catalog = load_catalog(&path).expect("failed to load catalog.yaml");
    assert!(!catalog.items().is_empty());
    assert!(catalog.find("Idli Rice").is_some());
}
