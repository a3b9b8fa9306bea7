use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const FORBIDDEN_PATTERNS: [(&str, &str); 9] = [
    ("crate::app::Event", "direct coupling to the app event loop"),
    ("crate::state::", "dependency on root app state"),
    ("vellum_ai::", "AI client access belongs to features"),
    ("log::", "side-effect logging"),
    ("std::fs::", "filesystem access"),
    ("std::process::", "process spawning"),
    ("tokio::spawn", "background task spawning"),
    ("iced::Task", "task construction"),
    ("std::time::Instant", "runtime clock reads"),
];

const FEATURE_INTERNAL_SEGMENTS: [&str; 5] =
    ["::event::", "::feature::", "::model::", "::state::", "::storage::"];

#[test]
fn given_ui_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/ui/widgets");

    let mut violations: Vec<String> = Vec::new();

    let declared = declared_widget_modules(&widgets_dir, &mut violations);
    let on_disk = widget_files_on_disk(&widgets_dir, &mut violations);

    if declared != on_disk {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            widgets_dir.join("mod.rs").display(),
            declared,
            on_disk
        ));
    }

    for module in &declared {
        let file_path = widgets_dir.join(format!("{module}.rs"));
        validate_widget_file(&file_path, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn declared_widget_modules(
    widgets_dir: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mod_rs = widgets_dir.join("mod.rs");
    let source = fs::read_to_string(&mod_rs).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", mod_rs.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", mod_rs.display())
    });

    let mut declared = BTreeSet::new();
    for item in &file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }

        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            }
        }
    }

    declared
}

fn widget_files_on_disk(
    widgets_dir: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mut stems = BTreeSet::new();
    let entries = fs::read_dir(widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });

    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        let file_type = entry.file_type().unwrap_or_else(|err| {
            panic!("failed to read file type for {}: {err}", path.display())
        });

        if file_type.is_dir() {
            violations.push(format!(
                "{}: nested widget directories are forbidden in the flat layout",
                path.display()
            ));
            continue;
        }

        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let stem = path
            .file_stem()
            .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
            .to_string_lossy()
            .to_string();
        if stem != "mod" {
            stems.insert(stem);
        }
    }

    stems
}

fn validate_widget_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    });
    let expected_prefix = widget_prefix(file_path);

    for (pattern, reason) in FORBIDDEN_PATTERNS {
        if source.contains(pattern) {
            violations.push(format!(
                "{}: forbidden pattern '{pattern}' ({reason})",
                file_path.display()
            ));
        }
    }

    for line in source.lines() {
        if line.contains("crate::features::")
            && FEATURE_INTERNAL_SEGMENTS
                .iter()
                .any(|segment| line.contains(segment))
        {
            violations.push(format!(
                "{}: forbidden feature internal import: {line}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();
    let mut event_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) => {
                if item_fn.sig.ident == "view" {
                    if is_pub_crate(&item_fn.vis) {
                        view_count += 1;
                    } else {
                        violations.push(format!(
                            "{}: view must be pub(crate)",
                            file_path.display()
                        ));
                    }
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Enum(item_enum) => {
                let name = item_enum.ident.to_string();
                if name.ends_with("Event") {
                    event_names.push(name);
                }
            },
            Item::Type(item_type) => {
                let name = item_type.ident.to_string();
                if name.ends_with("Event") {
                    event_names.push(name);
                }
            },
            Item::Use(item_use) => {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        file_path.display()
                    ));
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    if event_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Event contract, found {}",
            file_path.display(),
            event_names.len()
        ));
    }

    for name in props_names.iter().chain(event_names.iter()) {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: contract '{name}' must start with file prefix '{}'",
                file_path.display(),
                expected_prefix
            ));
        }
    }
}

fn widget_prefix(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();

    stem.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
